use dioxus::prelude::*;

use crate::{
    domain::EstimatorForm,
    ui::{
        content::{DISCLAIMER, FOOTER_LINKS},
        theme,
    },
    util::version::{version_label, APP_NAME},
};

#[component]
pub fn AboutPage() -> Element {
    let form = use_context::<Signal<EstimatorForm>>();
    let move_type = form.with(|f| f.move_type);
    let version = version_label();

    rsx! {
        div { class: "space-y-8",
            section {
                class: "{theme::panel_solid()} p-6",
                h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "Disclaimer" }
                p { class: "mt-3 text-sm leading-relaxed {theme::text_secondary()}", "{DISCLAIMER}" }
            }

            section {
                class: "{theme::panel_solid()} p-6",
                h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "Helpful Links" }
                ul { class: "mt-3 space-y-2",
                    for link in FOOTER_LINKS.iter() {
                        li {
                            key: "{link.href}",
                            a {
                                class: "{theme::link_class(move_type)}",
                                href: "{link.href}",
                                target: "_blank",
                                rel: "noreferrer",
                                "{link.label}"
                            }
                        }
                    }
                }
            }

            p { class: "text-center text-xs {theme::text_muted()}", "{APP_NAME} {version}" }
        }
    }
}
