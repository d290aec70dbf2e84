use dioxus::prelude::*;

use crate::{
    domain::EstimatorForm,
    ui::{
        components::toast::{Toast, ToastMessage},
        pages::{AboutPage, EstimatorPage, TipsPage},
        shell::Shell,
    },
    util::assets,
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Estimator {},
    #[route("/tips")]
    Tips {},
    #[route("/about")]
    About {},
}

#[component]
pub fn App() -> Element {
    // Form values outlive page switches; the estimate is recomputed from them on render.
    let form = use_signal(EstimatorForm::default);
    use_context_provider(|| form);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        document::Style { "{assets::tailwind_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

#[component]
pub fn Estimator() -> Element {
    rsx! { Shell { EstimatorPage {} } }
}

#[component]
pub fn Tips() -> Element {
    rsx! { Shell { TipsPage {} } }
}

#[component]
pub fn About() -> Element {
    rsx! { Shell { AboutPage {} } }
}
