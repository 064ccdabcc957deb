use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;
use strum_macros::Display;

/// A launch to evaluate, as handed over by the launch feed.
#[derive(Debug, Clone)]
pub struct LaunchCandidate {
    pub site_lat: f64,
    pub site_lon: f64,
    pub launch_time: DateTime<Utc>,
    pub mission_hint: Option<String>,
}

/// Discrete quality label derived from the numeric visibility score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum VisibilityTier {
    #[serde(rename = "very good")]
    #[strum(serialize = "very good")]
    VeryGood,
    #[serde(rename = "good")]
    #[strum(serialize = "good")]
    Good,
    #[serde(rename = "moderate")]
    #[strum(serialize = "moderate")]
    Moderate,
    #[serde(rename = "low")]
    #[strum(serialize = "low")]
    Low,
    #[serde(rename = "not visible")]
    #[strum(serialize = "not visible")]
    NotVisible,
}

impl VisibilityTier {
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s > 70 => VisibilityTier::VeryGood,
            s if s > 40 => VisibilityTier::Good,
            s if s > 20 => VisibilityTier::Moderate,
            s if s > 10 => VisibilityTier::Low,
            _ => VisibilityTier::NotVisible,
        }
    }

    /// Whether a pass at this tier counts as a potential sighting.
    pub fn is_visible(self) -> bool {
        !matches!(self, VisibilityTier::NotVisible)
    }
}

/// One simulated orbital revolution after launch, scored for observer
/// visibility. Records are produced fresh per evaluation, ordered by
/// `pass_index`, and never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct PassRecord {
    /// 1-based, contiguous, chronological.
    pub pass_index: u32,
    pub time_utc: DateTime<Utc>,
    pub time_local: DateTime<FixedOffset>,
    pub ground_lat: f64,
    pub ground_lon: f64,
    pub distance_km: f64,
    /// Composite visibility score, 0 to 100.
    pub score: u8,
    pub tier: VisibilityTier,
    pub window_start: DateTime<Utc>,
    pub window_end: DateTime<Utc>,
    pub window_minutes: f64,
}
