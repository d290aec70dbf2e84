use dioxus::prelude::*;

use crate::domain::{CostBreakdown, MoveType};
use crate::ui::theme;
use crate::util::currency::{format_usd, format_usd_range};

/// Position of the point estimate inside the low/high band, in percent.
pub fn marker_percent(breakdown: &CostBreakdown) -> f64 {
    let span = breakdown.high - breakdown.low;
    if span <= 0 {
        return 50.0;
    }
    ((breakdown.total - breakdown.low) as f64 / span as f64 * 100.0).clamp(0.0, 100.0)
}

#[component]
pub fn RangeBand(breakdown: CostBreakdown, move_type: MoveType) -> Element {
    let marker = format!("left: {:.1}%;", marker_percent(&breakdown));
    let range = format_usd_range(breakdown.low, breakdown.high);

    rsx! {
        div {
            class: "{theme::panel_solid()} p-4",
            div {
                class: "flex items-center justify-between",
                span { class: "{theme::label_class()}", "Likely range" }
                span { class: "text-sm font-semibold {theme::text_primary(move_type)}", "{range}" }
            }
            div {
                class: "range-band mt-4",
                div { class: "range-band__marker", style: "{marker}" }
            }
            div {
                class: "mt-2 flex justify-between text-xs {theme::text_muted()}",
                span { "−20% · {format_usd(breakdown.low)}" }
                span { "Estimate · {format_usd(breakdown.total)}" }
                span { "+30% · {format_usd(breakdown.high)}" }
            }
        }
    }
}
