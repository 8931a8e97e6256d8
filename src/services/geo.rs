//! Geographic proximity scoring.
//!
//! Distance is converted into a bounded ranking feature: 1.0 at the
//! requester's position, falling off linearly to 0.0 at the relevance
//! horizon. Sites beyond the horizon contribute nothing.

/// Mean Earth radius in kilometers, used by the haversine formula.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Distance beyond which a site is considered geographically irrelevant.
///
/// Fixed design constant, not configuration. If requirements evolve this is
/// the first knob to expose, together with the fusion weights in `ranking`.
pub const PROXIMITY_HORIZON_KM: f64 = 2000.0;

/// Great-circle distance between two coordinates, in kilometers (haversine).
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Converts a distance into a closeness score in `[0, 1]`.
///
/// Linear decay: 1.0 at distance zero, 0.0 at `PROXIMITY_HORIZON_KM` and
/// beyond. Monotonically decreasing, so closer sites never score lower.
pub fn proximity(distance_km: f64) -> f64 {
    (1.0 - distance_km / PROXIMITY_HORIZON_KM).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_zero_for_same_point() {
        let d = distance_km(28.6139, 77.2090, 28.6139, 77.2090);
        assert!(d.abs() < 1e-9);
    }

    #[test]
    fn test_distance_delhi_to_agra() {
        // Delhi to Agra is roughly 180 km as the crow flies.
        let d = distance_km(28.6139, 77.2090, 27.1767, 78.0081);
        assert!((170.0..190.0).contains(&d), "unexpected distance {d}");
    }

    #[test]
    fn test_distance_is_symmetric() {
        let there = distance_km(28.6139, 77.2090, 12.9716, 77.5946);
        let back = distance_km(12.9716, 77.5946, 28.6139, 77.2090);
        assert!((there - back).abs() < 1e-9);
    }

    #[test]
    fn test_proximity_at_origin_is_one() {
        assert!((proximity(0.0) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_proximity_linear_decay() {
        assert!((proximity(100.0) - 0.95).abs() < 1e-9);
        assert!((proximity(1000.0) - 0.5).abs() < 1e-9);
        assert!((proximity(1900.0) - 0.05).abs() < 1e-9);
    }

    #[test]
    fn test_proximity_clamped_past_horizon() {
        assert_eq!(proximity(2000.0), 0.0);
        assert_eq!(proximity(9999.0), 0.0);
    }

    #[test]
    fn test_proximity_monotonically_decreasing() {
        let mut last = proximity(0.0);
        for d in [50.0, 300.0, 900.0, 1500.0, 1999.0, 2500.0] {
            let p = proximity(d);
            assert!(p <= last, "proximity rose between distances");
            last = p;
        }
    }
}
