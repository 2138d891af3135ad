//! Hospital directory: the built-in Hyderabad dataset, availability
//! simulation, and display ETA formatting.
//!
//! The directory is static data; distance and ETA against a reference point
//! are derived per query through [`crate::ranking`], never stored on the
//! hospital itself.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;
use crate::ranking::{rank_by_distance, Located, Ranked};

/// Default query radius around the reference point (km).
pub const DEFAULT_MAX_DISTANCE_KM: f64 = 10.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hospital {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub location: GeoPoint,
}

impl Hospital {
    fn new(id: &str, name: &str, phone: &str, address: &str, lat: f64, lng: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            phone: phone.to_string(),
            address: address.to_string(),
            location: GeoPoint::new(lat, lng),
        }
    }
}

impl Located for Hospital {
    fn location(&self) -> GeoPoint {
        self.location
    }
}

/// The built-in 15-hospital Hyderabad directory.
pub fn hyderabad_directory() -> Vec<Hospital> {
    vec![
        Hospital::new("h1", "Apollo Emergency Hospital", "+914027231234", "Jubilee Hills, Hyderabad", 17.4156, 78.4347),
        Hospital::new("h2", "KIMS Hospital", "+914023221111", "Secunderabad", 17.3982, 78.5214),
        Hospital::new("h3", "Care Hospital Banjara Hills", "+914030418888", "Banjara Hills, Hyderabad", 17.4139, 78.4397),
        Hospital::new("h4", "Yashoda Hospital Somajiguda", "+914027812345", "Somajiguda, Hyderabad", 17.4346, 78.4982),
        Hospital::new("h5", "Continental Hospital", "+914067000000", "Gachibowli, Hyderabad", 17.4285, 78.3914),
        Hospital::new("h6", "NIMS Hospital", "+914023489012", "Punjagutta, Hyderabad", 17.4231, 78.5423),
        Hospital::new("h7", "Osmania General Hospital", "+914024655555", "Afzalgunj, Hyderabad", 17.3898, 78.4827),
        Hospital::new("h8", "Gandhi Hospital", "+914027505566", "Musheerabad, Hyderabad", 17.3945, 78.5012),
        Hospital::new("h9", "Sunshine Hospital", "+914023456789", "Gachibowli, Hyderabad", 17.4456, 78.3891),
        Hospital::new("h10", "MaxCure Hospital", "+914066200200", "Madhapur, Hyderabad", 17.4512, 78.3834),
        Hospital::new("h11", "Medicover Hospital", "+914068885588", "Hitech City, Hyderabad", 17.4389, 78.4123),
        Hospital::new("h12", "AIG Hospitals", "+914066667777", "Gachibowli, Hyderabad", 17.4234, 78.3678),
        Hospital::new("h13", "Yashoda Hospital Malakpet", "+914024567890", "Malakpet, Hyderabad", 17.3756, 78.5089),
        Hospital::new("h14", "Care Hospital Hitech City", "+914044556677", "Hitech City, Hyderabad", 17.4456, 78.3789),
        Hospital::new("h15", "Rainbow Children's Hospital", "+914023445566", "Banjara Hills, Hyderabad", 17.4312, 78.4567),
    ]
}

/// Hospitals within `max_distance_km` of `reference` (default 10 km),
/// nearest first.
pub fn nearby_hospitals(
    reference: GeoPoint,
    hospitals: &[Hospital],
    max_distance_km: Option<f64>,
) -> Vec<Ranked<Hospital>> {
    let radius = max_distance_km.unwrap_or(DEFAULT_MAX_DISTANCE_KM);
    rank_by_distance(reference, hospitals, Some(radius))
}

/// Display label for an ETA at the given average speed: "N min" under an
/// hour, "Xh Ym" above.
pub fn eta_label(distance_km: f64, average_speed_kmh: f64) -> String {
    let minutes = ((distance_km / average_speed_kmh.max(1.0)) * 60.0).round() as u64;
    if minutes < 60 {
        format!("{minutes} min")
    } else {
        format!("{}h {}m", minutes / 60, minutes % 60)
    }
}

/// Simulated bed/ambulance availability for one hospital.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    pub emergency_beds: u32,
    pub icu_beds: u32,
    pub general_beds: u32,
    pub ambulances_available: u32,
}

/// Seeded availability generator and random-walk updater.
#[derive(Debug)]
pub struct AvailabilitySim {
    rng: StdRng,
}

impl AvailabilitySim {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Fresh availability in the reference ranges.
    pub fn generate(&mut self) -> Availability {
        Availability {
            emergency_beds: self.rng.gen_range(1..=8),
            icu_beds: self.rng.gen_range(1..=5),
            general_beds: self.rng.gen_range(10..=39),
            ambulances_available: self.rng.gen_range(1..=4),
        }
    }

    /// One refresh step: emergency beds and ambulances move ±1 with equal
    /// probability, ICU beds drift down (30% up), everything floored at 0
    /// and ambulances capped at 5. General beds only change on re-generate.
    pub fn update(&mut self, current: &Availability) -> Availability {
        let step = |rng: &mut StdRng, value: u32, up_prob: f64| -> u32 {
            if rng.gen_bool(up_prob) {
                value + 1
            } else {
                value.saturating_sub(1)
            }
        };
        Availability {
            emergency_beds: step(&mut self.rng, current.emergency_beds, 0.5),
            icu_beds: step(&mut self.rng, current.icu_beds, 0.3),
            general_beds: current.general_beds,
            ambulances_available: step(&mut self.rng, current.ambulances_available, 0.5).min(5),
        }
    }
}
