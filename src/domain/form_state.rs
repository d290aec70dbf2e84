use thiserror::Error;

use super::{
    entities::{HomeSize, MoveType, MovingInput},
    pricing::{MAX_DISTANCE_MILES, MIN_DISTANCE_MILES},
};

pub const DEFAULT_DISTANCE: &str = "50";

/// Raw form values as the user typed them. The estimator only ever sees a
/// validated `MovingInput` projected from this.
#[derive(Clone, Debug, PartialEq)]
pub struct EstimatorForm {
    pub distance_input: String,
    pub home_size: HomeSize,
    pub move_type: MoveType,
    pub packing_services: bool,
    pub storage_needed: bool,
}

impl Default for EstimatorForm {
    fn default() -> Self {
        Self {
            distance_input: DEFAULT_DISTANCE.to_string(),
            home_size: HomeSize::default(),
            move_type: MoveType::default(),
            packing_services: false,
            storage_needed: false,
        }
    }
}

impl EstimatorForm {
    pub fn to_input(&self) -> Result<MovingInput, FormError> {
        Ok(MovingInput {
            distance: parse_distance(&self.distance_input)?,
            home_size: self.home_size,
            move_type: self.move_type,
            packing_services: self.packing_services,
            storage_needed: self.storage_needed,
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("Enter the distance of your move in miles.")]
    MissingDistance,
    #[error("Distance must be a number, got \"{0}\".")]
    InvalidDistance(String),
    #[error("Distance must be between {min} and {max} miles.")]
    DistanceOutOfRange { min: f64, max: f64 },
}

fn parse_distance(raw: &str) -> Result<f64, FormError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FormError::MissingDistance);
    }

    let miles: f64 = trimmed
        .parse()
        .map_err(|_| FormError::InvalidDistance(trimmed.to_string()))?;
    if !miles.is_finite() {
        return Err(FormError::InvalidDistance(trimmed.to_string()));
    }
    if !(MIN_DISTANCE_MILES..=MAX_DISTANCE_MILES).contains(&miles) {
        return Err(FormError::DistanceOutOfRange {
            min: MIN_DISTANCE_MILES,
            max: MAX_DISTANCE_MILES,
        });
    }

    Ok(miles)
}
