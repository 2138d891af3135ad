//! Shared test fixtures: well-known Hyderabad coordinates and convenience
//! constructors, used by unit tests, integration tests, and benches.

use crate::fleet::Ambulance;
use crate::geo::GeoPoint;

/// Hyderabad city centre, the reference user location across the test suite.
pub const CITY_CENTRE: (f64, f64) = (17.385044, 78.486671);

pub fn city_centre() -> GeoPoint {
    GeoPoint::new(CITY_CENTRE.0, CITY_CENTRE.1)
}

/// Apollo Emergency Hospital, Jubilee Hills, ~6.5 km from the city centre.
pub fn apollo_jubilee_hills() -> GeoPoint {
    GeoPoint::new(17.4156, 78.4347)
}

/// KIMS Hospital, Secunderabad, ~4 km from the city centre.
pub fn kims_secunderabad() -> GeoPoint {
    GeoPoint::new(17.3982, 78.5214)
}

/// An ambulance with placeholder driver attributes at the given position.
pub fn test_ambulance(id: &str, lat: f64, lng: f64) -> Ambulance {
    Ambulance {
        id: id.to_string(),
        driver_name: "Test Driver".to_string(),
        vehicle_number: "TS-00-XX-0000".to_string(),
        phone: "9000000000".to_string(),
        location: GeoPoint::new(lat, lng),
    }
}
