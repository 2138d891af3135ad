//! Proximity ranking: distance-annotated, distance-sorted views over located
//! entities.
//!
//! Hospitals and ambulances both rank through the same generic function via
//! the [`Located`] seam. Distance and rank are derived at query time and
//! attached to a transient [`Ranked`] view; they are never stored back on
//! the entity.

use serde::Serialize;

use crate::geo::{distance_km, GeoPoint};

/// Anything with a geographic position that can be ranked by proximity.
pub trait Located {
    fn location(&self) -> GeoPoint;
}

/// A located entity annotated with its distance from a reference point and
/// its 1-based position in the sorted result.
#[derive(Debug, Clone, Serialize)]
pub struct Ranked<T> {
    pub entity: T,
    pub distance_km: f64,
    pub rank: usize,
}

/// Rank `entities` by ascending distance from `reference`.
///
/// When `max_distance_km` is given, entities farther than it are dropped
/// before ranking (the bound is inclusive, so a max of `0.0` keeps exactly
/// the entities at the reference point). The sort is stable: ties keep
/// their input order, so output is deterministic for equal distances.
pub fn rank_by_distance<T: Located + Clone>(
    reference: GeoPoint,
    entities: &[T],
    max_distance_km: Option<f64>,
) -> Vec<Ranked<T>> {
    let mut ranked: Vec<Ranked<T>> = entities
        .iter()
        .map(|entity| Ranked {
            entity: entity.clone(),
            distance_km: distance_km(reference, entity.location()),
            rank: 0,
        })
        .collect();

    if let Some(max) = max_distance_km {
        ranked.retain(|r| r.distance_km <= max);
    }

    ranked.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    for (index, entry) in ranked.iter_mut().enumerate() {
        entry.rank = index + 1;
    }
    ranked
}
