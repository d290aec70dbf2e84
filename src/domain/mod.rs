//! Pricing logic for moving estimates lives here.

pub mod entities;
pub mod estimator;
pub mod form_state;
pub mod pricing;

#[allow(unused_imports)]
pub use entities::{CostBreakdown, HomeSize, MoveType, MovingInput, ParseEnumError};
#[allow(unused_imports)]
pub use estimator::estimate;
#[allow(unused_imports)]
pub use form_state::{EstimatorForm, FormError};
