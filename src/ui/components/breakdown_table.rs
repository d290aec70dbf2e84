use dioxus::prelude::*;

use crate::domain::{
    pricing::{move_type_label, size_label},
    CostBreakdown, MoveType, MovingInput,
};
use crate::ui::theme;
use crate::util::currency::format_usd;

#[derive(Clone, Debug, PartialEq)]
pub struct BreakdownRow {
    pub label: String,
    pub detail: String,
    pub amount: i64,
    pub muted: bool,
}

/// Cost lines in display order. Add-ons that were not selected stay in the
/// table so the user can see what toggling them would change.
pub fn breakdown_rows(input: &MovingInput, breakdown: &CostBreakdown) -> Vec<BreakdownRow> {
    vec![
        BreakdownRow {
            label: "Base cost".to_string(),
            detail: format!(
                "{} · {}",
                move_type_label(input.move_type),
                size_label(input.home_size)
            ),
            amount: breakdown.base_cost,
            muted: false,
        },
        BreakdownRow {
            label: "Distance".to_string(),
            detail: format!("{} miles", input.distance),
            amount: breakdown.distance_cost,
            muted: breakdown.distance_cost == 0,
        },
        BreakdownRow {
            label: "Packing services".to_string(),
            detail: if input.packing_services {
                "Included".to_string()
            } else {
                "Not selected".to_string()
            },
            amount: breakdown.packing_cost,
            muted: !input.packing_services,
        },
        BreakdownRow {
            label: "Storage".to_string(),
            detail: if input.storage_needed {
                "Flat fee".to_string()
            } else {
                "Not selected".to_string()
            },
            amount: breakdown.storage_cost,
            muted: !input.storage_needed,
        },
    ]
}

#[component]
pub fn BreakdownTable(rows: Vec<BreakdownRow>, breakdown: CostBreakdown, move_type: MoveType) -> Element {
    rsx! {
        div {
            class: "{theme::table_container(move_type)}",
            table {
                class: "min-w-full {theme::table_divider(move_type)} text-sm",
                thead {
                    class: "{theme::table_header(move_type)} text-left tracking-wide",
                    tr {
                        th { class: "px-4 py-3 font-medium", "Item" }
                        th { class: "px-4 py-3 font-medium", "Details" }
                        th { class: "px-4 py-3 font-medium text-right", "Cost" }
                    }
                }
                tbody {
                    class: "{theme::table_divider(move_type)}",
                    for row in rows {
                        BreakdownRowView { row }
                    }
                    tr {
                        class: "{theme::text_secondary()}",
                        td { class: "px-4 py-3", "Service add-ons" }
                        td { class: "px-4 py-3 text-xs {theme::text_muted()}", "Packing + storage" }
                        td { class: "px-4 py-3 text-right tabular-nums", "{format_usd(breakdown.service_addons)}" }
                    }
                    tr {
                        class: "font-semibold {theme::text_primary(move_type)}",
                        td { class: "px-4 py-3", "Estimated total" }
                        td { class: "px-4 py-3" }
                        td { class: "px-4 py-3 text-right tabular-nums", "{format_usd(breakdown.total)}" }
                    }
                }
            }
        }
    }
}

#[component]
fn BreakdownRowView(row: BreakdownRow) -> Element {
    let tone = if row.muted {
        theme::text_muted()
    } else {
        theme::text_secondary()
    };

    rsx! {
        tr {
            class: "{tone}",
            td { class: "px-4 py-3", "{row.label}" }
            td { class: "px-4 py-3 text-xs {theme::text_muted()}", "{row.detail}" }
            td { class: "px-4 py-3 text-right tabular-nums", "{format_usd(row.amount)}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{estimate, EstimatorForm, HomeSize};

    fn rows_for(form: &EstimatorForm) -> Vec<BreakdownRow> {
        let input = form.to_input().unwrap();
        breakdown_rows(&input, &estimate(&input))
    }

    #[test]
    fn test_rows_follow_cost_lines() {
        let rows = rows_for(&EstimatorForm {
            distance_input: " 1000".to_string(),
            home_size: HomeSize::ThreePlusBedroom,
            move_type: MoveType::LongDistance,
            packing_services: true,
            storage_needed: false,
        });

        let amounts: Vec<i64> = rows.iter().map(|row| row.amount).collect();
        assert_eq!(amounts, vec![3120, 750, 780, 0]);
        assert_eq!(rows[0].detail, "Long Distance · 3+ Bedrooms");
        assert_eq!(rows[1].detail, "1000 miles");
        assert!(!rows[2].muted);
        assert!(rows[3].muted);
    }

    #[test]
    fn test_distance_detail_uses_parsed_miles() {
        for (typed, shown) in [("1e3", "1000 miles"), ("050", "50 miles"), ("12.5", "12.5 miles")] {
            let rows = rows_for(&EstimatorForm {
                distance_input: typed.to_string(),
                ..EstimatorForm::default()
            });
            assert_eq!(rows[1].detail, shown, "{typed}");
        }
    }
}
