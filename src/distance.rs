//! Great-circle distance between scene and supply coordinates.

use crate::coords::{parse_coords, Coords};

/// Radius of the spherical Earth model, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Kilometers to statute miles.
const MILES_PER_KM: f64 = 0.621371;

/// The haversine great-circle distance between two points, in statute miles.
///
/// A spherical approximation, not geodesic-ellipsoid accuracy. Deterministic,
/// symmetric, zero for identical points, and finite and non-negative for any
/// finite input.
pub fn distance_miles(a: Coords, b: Coords) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let lat_a = a.lat.to_radians();
    let lat_b = b.lat.to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);

    let km = 2.0 * EARTH_RADIUS_KM * h.sqrt().asin();

    km * MILES_PER_KM
}

/// Distance in miles between two location strings.
///
/// Either side failing to parse short-circuits to `None`, which callers render
/// as "N/A". Composition with the parser lives here so no caller ever measures
/// an unparsed location.
pub fn distance_between(a: &str, b: &str) -> Option<f64> {
    let a = parse_coords(a)?;
    let b = parse_coords(b)?;

    Some(distance_miles(a, b))
}

/*--------------------------------------------------------------------------------------------------
                                          Unit Tests
--------------------------------------------------------------------------------------------------*/
#[cfg(test)]
mod unit {
    use super::*;

    const SEATTLE: Coords = Coords {
        lat: 47.6062,
        lon: -122.3321,
    };
    const ONE_DEGREE_EAST: Coords = Coords {
        lat: 47.6062,
        lon: -121.3321,
    };

    #[test]
    fn test_same_point_is_zero() {
        assert_eq!(distance_miles(SEATTLE, SEATTLE), 0.0);
    }

    #[test]
    fn test_symmetry() {
        let there = distance_miles(SEATTLE, ONE_DEGREE_EAST);
        let back = distance_miles(ONE_DEGREE_EAST, SEATTLE);
        assert!((there - back).abs() < 1e-9);
    }

    #[test]
    fn test_known_value() {
        // One degree of longitude at this latitude is about 46.6 miles, which
        // pins down both the Earth radius and the mile conversion.
        let distance = distance_miles(SEATTLE, ONE_DEGREE_EAST);
        assert!(
            (distance - 46.6).abs() < 0.2,
            "unexpected distance: {}",
            distance
        );
    }

    #[test]
    fn test_non_negative_and_finite() {
        let far = Coords {
            lat: -33.8688,
            lon: 151.2093,
        };
        let distance = distance_miles(SEATTLE, far);
        assert!(distance > 0.0);
        assert!(distance.is_finite());
    }

    #[test]
    fn test_distance_between_strings() {
        let distance = distance_between("47.6062, -122.3321", "47.6062, -121.3321")
            .expect("both sides parse");
        assert!((distance - 46.6).abs() < 0.2);

        assert_eq!(distance_between("not a location", "47.6, -122.3"), None);
        assert_eq!(distance_between("47.6, -122.3", ""), None);
    }
}
