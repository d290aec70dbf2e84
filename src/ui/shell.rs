use dioxus::prelude::*;

use crate::app::Route;
use crate::domain::{EstimatorForm, MoveType};
use crate::ui::{
    content::{TAGLINE_LOCAL, TAGLINE_LONG_DISTANCE},
    theme,
};
use crate::util::version::APP_NAME;

#[component]
pub fn Shell(children: Element) -> Element {
    let form = use_context::<Signal<EstimatorForm>>();
    let move_type = form.with(|f| f.move_type);

    let current_route = use_route::<Route>();
    let nav = use_navigator();

    let tagline = match move_type {
        MoveType::Local => TAGLINE_LOCAL,
        MoveType::LongDistance => TAGLINE_LONG_DISTANCE,
    };

    rsx! {
        div { class: "min-h-screen bg-slate-950 text-slate-100 font-sans",
            header {
                class: "{theme::header_class(move_type)}",
                div { class: "mx-auto flex max-w-6xl items-center justify-between gap-4",
                    div { class: "flex items-center gap-3",
                        span { class: "text-2xl", "🚚" }
                        div {
                            h1 { class: "text-xl font-semibold tracking-tight {theme::text_primary(move_type)}", "{APP_NAME}" }
                            p { class: "text-xs text-slate-500 italic", "{tagline}" }
                        }
                    }
                    nav { class: "flex gap-2 text-sm justify-end",
                        NavButton { active: matches!(current_route, Route::Estimator {}), onclick: move |_| { nav.push(Route::Estimator {}); }, label: "Estimate", move_type }
                        NavButton { active: matches!(current_route, Route::Tips {}), onclick: move |_| { nav.push(Route::Tips {}); }, label: "Tips", move_type }
                        NavButton { active: matches!(current_route, Route::About {}), onclick: move |_| { nav.push(Route::About {}); }, label: "About", move_type }
                    }
                }
            }
            main { class: "mx-auto max-w-6xl px-6 py-10",
                {children}
            }
        }
    }
}

#[component]
fn NavButton(
    active: bool,
    onclick: EventHandler<()>,
    label: &'static str,
    move_type: MoveType,
) -> Element {
    rsx! {
        button {
            class: "{theme::nav_button(move_type, active)}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
