//! Geographic primitives: positions and great-circle distance.
//!
//! Distance uses the haversine formula with a spherical Earth (radius
//! 6371 km), which is accurate to well under 1% at city scale. Coordinates
//! are WGS84 decimal degrees and are taken as-is: out-of-range or NaN input
//! propagates into the result. Validation belongs to whatever produced the
//! fix, not here.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A geographic position in WGS84 decimal degrees.
///
/// `GeoPoint` is an immutable value: position updates produce a new point,
/// existing values are never adjusted in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
    /// Reported accuracy of the fix in meters, when the source provides one.
    pub accuracy_m: Option<f64>,
    /// Wall-clock capture time in ms since the Unix epoch, when known.
    pub captured_at_ms: Option<u64>,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat,
            lng,
            accuracy_m: None,
            captured_at_ms: None,
        }
    }

    pub fn with_accuracy(lat: f64, lng: f64, accuracy_m: f64) -> Self {
        Self {
            accuracy_m: Some(accuracy_m),
            ..Self::new(lat, lng)
        }
    }

    /// A fix captured at a known wall-clock time.
    pub fn captured_at(lat: f64, lng: f64, at_ms: u64) -> Self {
        Self {
            captured_at_ms: Some(at_ms),
            ..Self::new(lat, lng)
        }
    }
}

/// Great-circle distance between two points in kilometers.
///
/// Pure and total: `distance_km(a, a) == 0.0`, symmetric within floating
/// point tolerance, always `>= 0.0` for finite input.
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let (lat1, lon1) = (a.lat.to_radians(), a.lng.to_radians());
    let (lat2, lon2) = (b.lat.to_radians(), b.lng.to_radians());
    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;
    let sin_dlat = (dlat * 0.5).sin();
    let sin_dlon = (dlon * 0.5).sin();
    let h = sin_dlat * sin_dlat + lat1.cos() * lat2.cos() * sin_dlon * sin_dlon;
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{apollo_jubilee_hills, city_centre, kims_secunderabad};

    #[test]
    fn distance_to_self_is_zero() {
        let p = city_centre();
        assert_eq!(distance_km(p, p), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = city_centre();
        let b = apollo_jubilee_hills();
        let ab = distance_km(a, b);
        let ba = distance_km(b, a);
        assert!((ab - ba).abs() < 1e-9, "ab={ab}, ba={ba}");
    }

    #[test]
    fn known_hospital_distances() {
        // Regression fixtures from the Hyderabad hospital directory.
        let user = city_centre();
        let kims = distance_km(user, kims_secunderabad());
        assert!((kims - 4.1).abs() < 0.2, "KIMS distance: {kims}");
        let apollo = distance_km(user, apollo_jubilee_hills());
        assert!((apollo - 6.48).abs() < 0.05, "Apollo distance: {apollo}");
    }

    #[test]
    fn triangle_inequality_holds() {
        let a = city_centre();
        let b = kims_secunderabad();
        let c = apollo_jubilee_hills();
        let direct = distance_km(a, c);
        let via = distance_km(a, b) + distance_km(b, c);
        assert!(direct <= via + 1e-9, "direct={direct}, via={via}");
    }

    #[test]
    fn distance_is_non_negative_for_antipodal_points() {
        let a = GeoPoint::new(45.0, 90.0);
        let b = GeoPoint::new(-45.0, -90.0);
        assert!(distance_km(a, b) > 0.0);
    }
}
