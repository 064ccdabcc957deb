use serde::Serialize;
use strum_macros::Display;

/// Coarse orbit classes used when no real orbital elements are available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum OrbitClass {
    Leo,
    Meo,
    Geo,
    Sso,
}

/// Nominal altitude and inclination for an orbit class.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct OrbitArchetype {
    pub class: OrbitClass,
    pub altitude_km: f64,
    pub inclination_deg: f64,
}

impl OrbitClass {
    /// Canonical archetype for this class.
    pub fn archetype(self) -> OrbitArchetype {
        let (altitude_km, inclination_deg) = match self {
            OrbitClass::Leo => (300.0, 51.6),
            OrbitClass::Meo => (20_000.0, 55.0),
            OrbitClass::Geo => (35_786.0, 0.0),
            OrbitClass::Sso => (600.0, 97.8),
        };
        OrbitArchetype {
            class: self,
            altitude_km,
            inclination_deg,
        }
    }
}
