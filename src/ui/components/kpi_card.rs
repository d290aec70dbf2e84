use dioxus::prelude::*;

use crate::domain::MoveType;
use crate::ui::theme;

#[component]
pub fn KpiCard(
    title: String,
    value: String,
    description: Option<String>,
    move_type: MoveType,
    #[props(default)] emphasized: bool,
) -> Element {
    let value_class = if emphasized {
        format!("mt-2 text-3xl font-bold {}", theme::text_primary(move_type))
    } else {
        format!("mt-2 text-2xl font-semibold {}", theme::text_secondary())
    };

    rsx! {
        div {
            class: "{theme::panel_border(move_type)} p-4 shadow-sm",
            h3 { class: "{theme::label_class()}", "{title}" }
            p { class: "{value_class}", "{value}" }
            if let Some(desc) = description {
                p { class: "mt-1 text-xs {theme::text_muted()}", "{desc}" }
            }
        }
    }
}
