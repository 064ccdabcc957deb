pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometers between two points given in degrees,
/// on the mean-radius sphere (haversine).
pub fn great_circle_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let dphi = (lat2 - lat1).to_radians();
    let dlambda = (lon2 - lon1).to_radians();

    let a = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn zero_distance_to_self() {
        assert_eq!(great_circle_km(51.1657, 10.4515, 51.1657, 10.4515), 0.0);
    }

    #[test]
    fn quarter_circle_along_equator() {
        let d = great_circle_km(0.0, 0.0, 0.0, 90.0);
        assert!((d - EARTH_RADIUS_KM * FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn berlin_to_munich() {
        let d = great_circle_km(52.52, 13.405, 48.1374, 11.5755);
        assert!((480.0..520.0).contains(&d), "got {d}");
    }

    #[test]
    fn cape_canaveral_to_germany() {
        let d = great_circle_km(28.5618, -80.5772, 51.1657, 10.4515);
        assert!((7200.0..7800.0).contains(&d), "got {d}");
    }

    #[test]
    fn symmetric_in_arguments() {
        let ab = great_circle_km(10.0, 20.0, -30.0, 140.0);
        let ba = great_circle_km(-30.0, 140.0, 10.0, 20.0);
        assert!((ab - ba).abs() < 1e-9);
    }
}
