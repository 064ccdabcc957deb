use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Parameters for one prediction run.
///
/// Defaults model an observer at the German country centroid watching the
/// three days after launch. All fields can be overridden from a YAML file or
/// per invocation; nothing here is global state.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionConfig {
    #[serde(default = "default_observer_lat")]
    pub observer_lat: f64,
    #[serde(default = "default_observer_lon")]
    pub observer_lon: f64,
    #[serde(default = "default_total_orbits")]
    pub total_orbits: u32,
    #[serde(default = "default_visibility_days")]
    pub visibility_days: u32,
}

fn default_observer_lat() -> f64 {
    51.1657
}

fn default_observer_lon() -> f64 {
    10.4515
}

fn default_total_orbits() -> u32 {
    20
}

fn default_visibility_days() -> u32 {
    3
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            observer_lat: default_observer_lat(),
            observer_lon: default_observer_lon(),
            total_orbits: default_total_orbits(),
            visibility_days: default_visibility_days(),
        }
    }
}

impl PredictionConfig {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: PredictionConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_germany_centroid() {
        let config = PredictionConfig::default();
        assert_eq!(config.observer_lat, 51.1657);
        assert_eq!(config.observer_lon, 10.4515);
        assert_eq!(config.total_orbits, 20);
        assert_eq!(config.visibility_days, 3);
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config: PredictionConfig =
            serde_yaml::from_str("total_orbits: 50\nobserver_lat: 48.14").unwrap();
        assert_eq!(config.total_orbits, 50);
        assert_eq!(config.observer_lat, 48.14);
        assert_eq!(config.observer_lon, 10.4515);
        assert_eq!(config.visibility_days, 3);
    }

    #[test]
    fn empty_mapping_is_all_defaults() {
        let config: PredictionConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.total_orbits, 20);
    }
}
