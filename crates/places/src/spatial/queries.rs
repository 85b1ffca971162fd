//! Spatial query utilities for distance calculations.
//!
//! Uses Haversine formula for great-circle distances on a spherical Earth.

use geo::{HaversineDistance, Point};

/// Calculate Haversine distance between two points in kilometers
pub fn haversine_distance_km(p1: Point, p2: Point) -> f64 {
    p1.haversine_distance(&p2) / 1000.0
}
