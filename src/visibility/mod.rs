mod error;
mod geo;
mod localtime;
mod propagator;
mod types;

pub use error::VisibilityError;
pub use propagator::{orbital_period_minutes, propagate};
pub use types::{LaunchCandidate, PassRecord, VisibilityTier};
