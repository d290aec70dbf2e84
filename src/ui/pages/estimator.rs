use dioxus::prelude::*;

use crate::{
    domain::{
        pricing::{move_type_label, size_label, MAX_DISTANCE_MILES, MIN_DISTANCE_MILES},
        estimate, CostBreakdown, EstimatorForm, HomeSize, MoveType,
    },
    ui::{
        components::{
            breakdown_table::{breakdown_rows, BreakdownRow, BreakdownTable},
            kpi_card::KpiCard,
            range_band::RangeBand,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme,
    },
    util::currency::format_usd,
};

struct EstimateView {
    breakdown: CostBreakdown,
    rows: Vec<BreakdownRow>,
    summary: String,
}

#[component]
pub fn EstimatorPage() -> Element {
    let mut form = use_context::<Signal<EstimatorForm>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let snapshot = form();
    let move_type = snapshot.move_type;
    let projected = snapshot.to_input();
    let input_error = projected.as_ref().err().map(ToString::to_string);
    let result = projected.ok().map(|input| {
        let breakdown = estimate(&input);
        EstimateView {
            breakdown,
            rows: breakdown_rows(&input, &breakdown),
            summary: format!(
                "{} · {}",
                move_type_label(input.move_type),
                size_label(input.home_size)
            ),
        }
    });

    let on_reset = move |_| {
        form.with_mut(|f| f.reset());
        tracing::info!("estimator form reset to defaults");
        push_toast(toasts, ToastKind::Info, "Form reset to the default move.");
    };

    let on_home_size = move |evt: FormEvent| match evt.value().parse::<HomeSize>() {
        Ok(size) => form.with_mut(|f| f.home_size = size),
        Err(err) => {
            tracing::warn!(%err, "ignoring home size selection");
            push_toast(toasts, ToastKind::Warning, "Unknown home size selected.");
        }
    };

    let distance_class = if input_error.is_some() {
        theme::input_error()
    } else {
        theme::input_class(move_type)
    };

    rsx! {
        div { class: "grid gap-8 lg:grid-cols-[22rem_1fr]",
            section {
                class: "{theme::panel_border(move_type)} space-y-5 p-6",
                h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "Your Move" }

                div {
                    label { class: "{theme::label_class()}", r#for: "distance", "Distance (miles)" }
                    input {
                        id: "distance",
                        class: "{distance_class}",
                        r#type: "number",
                        min: "{MIN_DISTANCE_MILES}",
                        max: "{MAX_DISTANCE_MILES}",
                        value: "{snapshot.distance_input}",
                        oninput: move |evt| form.with_mut(|f| f.distance_input = evt.value()),
                    }
                    if let Some(message) = input_error {
                        p { class: "mt-1 text-xs text-rose-300", "{message}" }
                    }
                }

                div {
                    label { class: "{theme::label_class()}", r#for: "home-size", "Home size" }
                    select {
                        id: "home-size",
                        class: "{theme::input_class(move_type)}",
                        onchange: on_home_size,
                        for size in HomeSize::ALL {
                            option {
                                value: "{size.as_str()}",
                                selected: size == snapshot.home_size,
                                "{size_label(size)}"
                            }
                        }
                    }
                }

                div {
                    span { class: "{theme::label_class()}", "Move type" }
                    div { class: "mt-1 flex gap-2",
                        for kind in MoveType::ALL {
                            button {
                                class: if kind == move_type { "{theme::btn_active(kind)}" } else { "{theme::btn_inactive(kind)}" },
                                onclick: move |_| form.with_mut(|f| f.move_type = kind),
                                "{move_type_label(kind)}"
                            }
                        }
                    }
                }

                div { class: "space-y-3",
                    span { class: "{theme::label_class()}", "Add-on services" }
                    label { class: "flex items-center gap-3 text-sm {theme::text_secondary()}",
                        input {
                            r#type: "checkbox",
                            class: "{theme::checkbox_class(move_type)}",
                            checked: snapshot.packing_services,
                            onchange: move |evt| form.with_mut(|f| f.packing_services = evt.checked()),
                        }
                        "Professional packing"
                    }
                    label { class: "flex items-center gap-3 text-sm {theme::text_secondary()}",
                        input {
                            r#type: "checkbox",
                            class: "{theme::checkbox_class(move_type)}",
                            checked: snapshot.storage_needed,
                            onchange: move |evt| form.with_mut(|f| f.storage_needed = evt.checked()),
                        }
                        "Storage (flat fee)"
                    }
                }

                button { class: "{theme::btn_secondary()}", onclick: on_reset, "Reset" }
            }

            section { class: "space-y-6",
                if let Some(view) = result {
                    div { class: "grid gap-4 sm:grid-cols-3",
                        KpiCard {
                            title: "Estimated cost".to_string(),
                            value: format_usd(view.breakdown.total),
                            description: Some(view.summary.clone()),
                            move_type,
                            emphasized: true,
                        }
                        KpiCard {
                            title: "Low".to_string(),
                            value: format_usd(view.breakdown.low),
                            description: Some("20% under the estimate".to_string()),
                            move_type,
                        }
                        KpiCard {
                            title: "High".to_string(),
                            value: format_usd(view.breakdown.high),
                            description: Some("30% over the estimate".to_string()),
                            move_type,
                        }
                    }
                    RangeBand { breakdown: view.breakdown, move_type }
                    BreakdownTable {
                        rows: view.rows,
                        breakdown: view.breakdown,
                        move_type,
                    }
                } else {
                    div {
                        class: "{theme::panel_solid()} p-6 text-sm {theme::text_muted()}",
                        "Enter a distance between {MIN_DISTANCE_MILES} and {MAX_DISTANCE_MILES} miles to see your estimate."
                    }
                }
            }
        }
    }
}
