use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

use crate::visibility::LaunchCandidate;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("{0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// One entry of the launch feed, as handed over by the fetch collaborator.
#[derive(Debug, Clone, Deserialize)]
pub struct LaunchRecord {
    pub name: String,
    pub site_lat: f64,
    pub site_lon: f64,
    /// Launch instant, RFC 3339 UTC.
    pub time: DateTime<Utc>,
    #[serde(default)]
    pub mission: Option<String>,
}

impl LaunchRecord {
    pub fn to_candidate(&self) -> LaunchCandidate {
        LaunchCandidate {
            site_lat: self.site_lat,
            site_lon: self.site_lon,
            launch_time: self.time,
            mission_hint: self.mission.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LaunchSet {
    #[serde(default)]
    pub launches: Vec<LaunchRecord>,
}

impl LaunchSet {
    pub fn from_str(yaml: &str) -> Result<Self, FeedError> {
        // An upstream feed with no data hands over an empty document; that
        // is an empty set, not an error.
        if yaml.trim().is_empty() {
            return Ok(LaunchSet::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = "
launches:
  - name: Falcon 9 / Starlink
    site_lat: 28.5618
    site_lon: -80.5772
    time: 2026-03-01T12:00:00Z
  - name: Ariane 6 / MetOp
    site_lat: 5.2389
    site_lon: -52.7683
    time: 2026-03-02T06:30:00Z
    mission: sun-synchronous weather satellite
";

    #[test]
    fn parses_a_feed_document() {
        let set = LaunchSet::from_str(FEED).unwrap();
        assert_eq!(set.launches.len(), 2);
        assert_eq!(set.launches[0].name, "Falcon 9 / Starlink");
        assert!(set.launches[0].mission.is_none());
        assert_eq!(
            set.launches[1].mission.as_deref(),
            Some("sun-synchronous weather satellite")
        );

        let candidate = set.launches[0].to_candidate();
        assert_eq!(candidate.site_lat, 28.5618);
        assert_eq!(
            candidate.launch_time,
            "2026-03-01T12:00:00Z".parse::<DateTime<Utc>>().unwrap()
        );
    }

    #[test]
    fn empty_document_is_an_empty_set() {
        assert!(LaunchSet::from_str("").unwrap().launches.is_empty());
        assert!(LaunchSet::from_str("  \n").unwrap().launches.is_empty());
    }

    #[test]
    fn missing_launches_key_is_an_empty_set() {
        let set = LaunchSet::from_str("fetched_at: 2026-03-01\n").unwrap();
        assert!(set.launches.is_empty());
    }

    #[test]
    fn malformed_timestamp_is_an_error() {
        let yaml = "
launches:
  - name: broken
    site_lat: 0.0
    site_lon: 0.0
    time: next tuesday
";
        assert!(LaunchSet::from_str(yaml).is_err());
    }
}
