use super::{
    entities::{CostBreakdown, MovingInput},
    pricing::{
        base_rate, per_mile_rate, round_dollars, size_multiplier, PACKING_BASE, RANGE_HIGH_FACTOR,
        RANGE_LOW_FACTOR, STORAGE_FLAT,
    },
};

/// Prices a move. Each line is rounded to whole dollars before summing.
/// Sums saturate at the `i64` bounds, so absurd distances price at
/// `i64::MAX` instead of wrapping.
pub fn estimate(input: &MovingInput) -> CostBreakdown {
    let multiplier = size_multiplier(input.home_size);

    let base_cost = round_dollars(base_rate(input.move_type) * multiplier);
    let distance_cost = round_dollars(input.distance * per_mile_rate(input.move_type));
    let packing_cost = if input.packing_services {
        round_dollars(PACKING_BASE * multiplier)
    } else {
        0
    };
    let storage_cost = if input.storage_needed { STORAGE_FLAT } else { 0 };

    let service_addons = packing_cost.saturating_add(storage_cost);
    let total = base_cost
        .saturating_add(distance_cost)
        .saturating_add(service_addons);

    CostBreakdown {
        base_cost,
        distance_cost,
        packing_cost,
        storage_cost,
        total,
        low: round_dollars(total as f64 * RANGE_LOW_FACTOR),
        high: round_dollars(total as f64 * RANGE_HIGH_FACTOR),
        service_addons,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::entities::{HomeSize, MoveType};

    fn input(distance: f64, home_size: HomeSize, move_type: MoveType) -> MovingInput {
        MovingInput {
            distance,
            home_size,
            move_type,
            packing_services: false,
            storage_needed: false,
        }
    }

    fn every_input() -> Vec<MovingInput> {
        let mut all = Vec::new();
        for home_size in HomeSize::ALL {
            for move_type in MoveType::ALL {
                for packing_services in [false, true] {
                    for storage_needed in [false, true] {
                        for distance in [1.0, 7.0, 50.0, 99.0, 333.0, 1001.0, 3000.0] {
                            all.push(MovingInput {
                                distance,
                                home_size,
                                move_type,
                                packing_services,
                                storage_needed,
                            });
                        }
                    }
                }
            }
        }
        all
    }

    #[test]
    fn test_local_two_bedroom_without_addons() {
        let breakdown = estimate(&input(50.0, HomeSize::TwoBedroom, MoveType::Local));
        assert_eq!(
            breakdown,
            CostBreakdown {
                base_cost: 760,
                distance_cost: 100,
                packing_cost: 0,
                storage_cost: 0,
                total: 860,
                low: 688,
                high: 1118,
                service_addons: 0,
            }
        );
    }

    #[test]
    fn test_long_distance_large_home_with_every_addon() {
        let breakdown = estimate(&MovingInput {
            distance: 1000.0,
            home_size: HomeSize::ThreePlusBedroom,
            move_type: MoveType::LongDistance,
            packing_services: true,
            storage_needed: true,
        });
        assert_eq!(
            breakdown,
            CostBreakdown {
                base_cost: 3120,
                distance_cost: 750,
                packing_cost: 780,
                storage_cost: 250,
                total: 4900,
                low: 3920,
                high: 6370,
                service_addons: 1030,
            }
        );
    }

    #[test]
    fn test_zero_distance_is_base_only() {
        let breakdown = estimate(&input(0.0, HomeSize::Studio, MoveType::Local));
        assert_eq!(breakdown.distance_cost, 0);
        assert_eq!(breakdown.total, 400);
    }

    #[test]
    fn test_negative_distance_is_not_clamped() {
        let breakdown = estimate(&input(-10.0, HomeSize::Studio, MoveType::Local));
        assert_eq!(breakdown.distance_cost, -20);
        assert_eq!(breakdown.total, 380);
    }

    #[test]
    fn test_huge_distance_saturates_instead_of_wrapping() {
        for move_type in MoveType::ALL {
            for distance in [1e19, 1e20] {
                let b = estimate(&MovingInput {
                    packing_services: true,
                    storage_needed: true,
                    ..input(distance, HomeSize::Studio, move_type)
                });
                assert!(b.total > 0, "{b:?}");
                assert!(b.low <= b.total && b.total <= b.high, "{b:?}");
            }
            let b = estimate(&input(1e20, HomeSize::Studio, move_type));
            assert_eq!(b.total, i64::MAX, "{move_type:?}");
        }
    }

    #[test]
    fn test_distance_lines_round_per_step() {
        // 1 mile long distance is 0.75, which rounds up on its own.
        let breakdown = estimate(&input(1.0, HomeSize::OneBedroom, MoveType::LongDistance));
        assert_eq!(breakdown.base_cost, 1680);
        assert_eq!(breakdown.distance_cost, 1);
        assert_eq!(breakdown.total, 1681);
    }

    #[test]
    fn test_total_is_sum_of_lines() {
        for case in every_input() {
            let b = estimate(&case);
            assert_eq!(
                b.total,
                b.base_cost + b.distance_cost + b.packing_cost + b.storage_cost,
                "{case:?}"
            );
            assert_eq!(b.service_addons, b.packing_cost + b.storage_cost);
        }
    }

    #[test]
    fn test_range_brackets_total() {
        for case in every_input() {
            let b = estimate(&case);
            assert_eq!(b.low, (b.total as f64 * 0.8).round() as i64, "{case:?}");
            assert_eq!(b.high, (b.total as f64 * 1.3).round() as i64, "{case:?}");
            assert!(b.low <= b.total && b.total <= b.high, "{case:?}");
        }
    }

    #[test]
    fn test_more_distance_never_costs_less() {
        for home_size in HomeSize::ALL {
            for move_type in MoveType::ALL {
                let mut previous = estimate(&input(1.0, home_size, move_type));
                for miles in 2..=3000 {
                    let next = estimate(&input(miles as f64, home_size, move_type));
                    assert!(next.distance_cost >= previous.distance_cost);
                    assert!(next.total >= previous.total);
                    previous = next;
                }
            }
        }
    }

    #[test]
    fn test_packing_adds_sized_charge() {
        for case in every_input().into_iter().filter(|c| !c.packing_services) {
            let without = estimate(&case);
            let with = estimate(&MovingInput {
                packing_services: true,
                ..case.clone()
            });
            let expected = (300.0 * size_multiplier(case.home_size)).round() as i64;
            assert_eq!(with.total - without.total, expected, "{case:?}");
        }
    }

    #[test]
    fn test_storage_adds_flat_charge() {
        for case in every_input().into_iter().filter(|c| !c.storage_needed) {
            let without = estimate(&case);
            let with = estimate(&MovingInput {
                storage_needed: true,
                ..case.clone()
            });
            assert_eq!(with.total - without.total, 250, "{case:?}");
        }
    }
}
