use thiserror::Error;

/// Input validation failures. Always deterministic and local to one launch
/// candidate; batch callers skip the candidate and keep going.
#[derive(Debug, Error, PartialEq)]
pub enum VisibilityError {
    #[error("orbit altitude must be positive, got {0} km")]
    InvalidAltitude(f64),
    #[error("latitude out of range [-90, 90]: {0}")]
    InvalidLatitude(f64),
    #[error("longitude out of range [-180, 180]: {0}")]
    InvalidLongitude(f64),
}
