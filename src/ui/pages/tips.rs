use dioxus::prelude::*;

use crate::{
    domain::EstimatorForm,
    ui::{content::TIPS, theme},
};

#[component]
pub fn TipsPage() -> Element {
    let form = use_context::<Signal<EstimatorForm>>();
    let move_type = form.with(|f| f.move_type);

    rsx! {
        section { class: "space-y-6",
            h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "Moving Tips" }
            ul { class: "grid gap-4 sm:grid-cols-2",
                for (idx, tip) in TIPS.iter().enumerate() {
                    li {
                        key: "{idx}",
                        class: "{theme::panel_border(move_type)} p-5",
                        h3 { class: "text-sm font-semibold {theme::text_primary(move_type)}", "{tip.title}" }
                        p { class: "mt-2 text-sm {theme::text_secondary()}", "{tip.body}" }
                    }
                }
            }
        }
    }
}
