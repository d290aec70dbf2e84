//! Fixed pricing tables. Every lookup is an exhaustive `match`.

use super::entities::{HomeSize, MoveType};

pub const PACKING_BASE: f64 = 300.0;
pub const STORAGE_FLAT: i64 = 250;

pub const RANGE_LOW_FACTOR: f64 = 0.8;
pub const RANGE_HIGH_FACTOR: f64 = 1.3;

/// Distance bounds the input form enforces before calling the estimator.
pub const MIN_DISTANCE_MILES: f64 = 1.0;
pub const MAX_DISTANCE_MILES: f64 = 3000.0;

pub fn size_multiplier(size: HomeSize) -> f64 {
    match size {
        HomeSize::Studio => 1.0,
        HomeSize::OneBedroom => 1.4,
        HomeSize::TwoBedroom => 1.9,
        HomeSize::ThreePlusBedroom => 2.6,
    }
}

pub fn size_label(size: HomeSize) -> &'static str {
    match size {
        HomeSize::Studio => "Studio",
        HomeSize::OneBedroom => "1 Bedroom",
        HomeSize::TwoBedroom => "2 Bedrooms",
        HomeSize::ThreePlusBedroom => "3+ Bedrooms",
    }
}

/// Base charge before the size multiplier is applied.
pub fn base_rate(kind: MoveType) -> f64 {
    match kind {
        MoveType::Local => 400.0,
        MoveType::LongDistance => 1200.0,
    }
}

pub fn per_mile_rate(kind: MoveType) -> f64 {
    match kind {
        MoveType::Local => 2.0,
        MoveType::LongDistance => 0.75,
    }
}

pub fn move_type_label(kind: MoveType) -> &'static str {
    match kind {
        MoveType::Local => "Local Move",
        MoveType::LongDistance => "Long Distance",
    }
}

/// Rounds half away from zero to whole dollars, saturating at the `i64`
/// bounds.
pub fn round_dollars(value: f64) -> i64 {
    value.round() as i64
}
