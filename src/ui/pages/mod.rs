pub mod about;
pub mod estimator;
pub mod tips;

pub use about::AboutPage;
pub use estimator::EstimatorPage;
pub use tips::TipsPage;
