use serde::Serialize;

use crate::config::PredictionConfig;
use crate::launches::LaunchSet;
use crate::orbit::{self, OrbitArchetype, OrbitClass};
use crate::visibility::{orbital_period_minutes, propagate, PassRecord};

/// Evaluation result for a single launch.
#[derive(Debug, Clone, Serialize)]
pub struct LaunchReport {
    pub name: String,
    pub orbit_class: OrbitClass,
    pub archetype: OrbitArchetype,
    pub period_minutes: f64,
    pub passes: Vec<PassRecord>,
}

/// Classifies and propagates every launch in the set.
///
/// A candidate that fails validation is logged and skipped so the rest of
/// the batch still runs.
pub fn evaluate(set: &LaunchSet, config: &PredictionConfig) -> Vec<LaunchReport> {
    let mut reports = Vec::new();

    for record in &set.launches {
        let candidate = record.to_candidate();
        let orbit_class = orbit::classify(candidate.mission_hint.as_deref());
        let archetype = orbit_class.archetype();

        let result = orbital_period_minutes(&archetype).and_then(|period_minutes| {
            propagate(&candidate, &archetype, config).map(|passes| LaunchReport {
                name: record.name.clone(),
                orbit_class,
                archetype,
                period_minutes,
                passes,
            })
        });

        match result {
            Ok(report) => reports.push(report),
            Err(e) => {
                log::warn!("Skipping launch {}: {}", record.name, e);
                // Continue with other launches
            }
        }
    }

    reports
}
