use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Size of the home being moved; drives the effort multiplier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HomeSize {
    Studio,
    OneBedroom,
    #[default]
    TwoBedroom,
    ThreePlusBedroom,
}

impl HomeSize {
    pub const ALL: [HomeSize; 4] = [
        HomeSize::Studio,
        HomeSize::OneBedroom,
        HomeSize::TwoBedroom,
        HomeSize::ThreePlusBedroom,
    ];

    /// Stable identifier used for `<select>` values and serialization.
    pub fn as_str(&self) -> &'static str {
        match self {
            HomeSize::Studio => "studio",
            HomeSize::OneBedroom => "one_bedroom",
            HomeSize::TwoBedroom => "two_bedroom",
            HomeSize::ThreePlusBedroom => "three_plus_bedroom",
        }
    }
}

impl FromStr for HomeSize {
    type Err = ParseEnumError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        HomeSize::ALL
            .into_iter()
            .find(|size| size.as_str() == value)
            .ok_or_else(|| ParseEnumError::HomeSize(value.to_string()))
    }
}

impl fmt::Display for HomeSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveType {
    #[default]
    Local,
    LongDistance,
}

impl MoveType {
    pub const ALL: [MoveType; 2] = [MoveType::Local, MoveType::LongDistance];

    pub fn as_str(&self) -> &'static str {
        match self {
            MoveType::Local => "local",
            MoveType::LongDistance => "long_distance",
        }
    }
}

impl FromStr for MoveType {
    type Err = ParseEnumError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        MoveType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| ParseEnumError::MoveType(value.to_string()))
    }
}

impl fmt::Display for MoveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseEnumError {
    #[error("unknown home size: {0}")]
    HomeSize(String),
    #[error("unknown move type: {0}")]
    MoveType(String),
}

/// One estimate request. Range checks on `distance` belong to the caller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MovingInput {
    /// Miles between origin and destination.
    pub distance: f64,
    pub home_size: HomeSize,
    pub move_type: MoveType,
    pub packing_services: bool,
    pub storage_needed: bool,
}

/// Whole-dollar cost lines for a single estimate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub base_cost: i64,
    pub distance_cost: i64,
    pub packing_cost: i64,
    pub storage_cost: i64,
    pub total: i64,
    pub low: i64,
    pub high: i64,
    pub service_addons: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_size_round_trips_through_str() {
        for size in HomeSize::ALL {
            assert_eq!(size.as_str().parse::<HomeSize>(), Ok(size));
        }
    }

    #[test]
    fn test_move_type_round_trips_through_str() {
        for kind in MoveType::ALL {
            assert_eq!(kind.as_str().parse::<MoveType>(), Ok(kind));
        }
    }

    #[test]
    fn test_unknown_enum_values_are_rejected() {
        assert_eq!(
            "castle".parse::<HomeSize>(),
            Err(ParseEnumError::HomeSize("castle".to_string()))
        );
        assert_eq!(
            "orbital".parse::<MoveType>(),
            Err(ParseEnumError::MoveType("orbital".to_string()))
        );
    }

    #[test]
    fn test_serde_names_match_select_values() {
        for size in HomeSize::ALL {
            let json = serde_json::to_string(&size).unwrap();
            assert_eq!(json, format!("\"{}\"", size.as_str()));
        }
        let json = serde_json::to_string(&MoveType::LongDistance).unwrap();
        assert_eq!(json, "\"long_distance\"");
    }

    #[test]
    fn test_input_deserializes_from_snake_case_record() {
        let input: MovingInput = serde_json::from_str(
            r#"{
                "distance": 1000,
                "home_size": "three_plus_bedroom",
                "move_type": "long_distance",
                "packing_services": true,
                "storage_needed": false
            }"#,
        )
        .unwrap();
        assert_eq!(input.home_size, HomeSize::ThreePlusBedroom);
        assert_eq!(input.move_type, MoveType::LongDistance);
        assert_eq!(input.distance, 1000.0);
        assert!(input.packing_services);
        assert!(!input.storage_needed);
    }
}
