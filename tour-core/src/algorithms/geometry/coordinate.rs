#[cfg(test)]
#[path = "../../../tests/unit/algorithms/geometry/coordinate_test.rs"]
mod coordinate_test;

use crate::utils::Float;
use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: Float = 6371.;

const COMPASS_POINTS: [&str; 16] =
    ["N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW", "NNW"];

/// Represents a geographic position in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct Coordinate {
    /// Latitude.
    pub lat: Float,
    /// Longitude.
    pub lng: Float,
}

impl Coordinate {
    /// Creates a new instance of `Coordinate`.
    pub fn new(lat: Float, lng: Float) -> Self {
        Self { lat, lng }
    }

    /// Returns great-circle distance to `other` in kilometers.
    pub fn distance_km(&self, other: &Coordinate) -> Float {
        distance_km(self, other)
    }

    /// Returns initial bearing to `other` in degrees.
    pub fn bearing_degrees(&self, other: &Coordinate) -> Float {
        bearing_degrees(self, other)
    }

    /// Returns true if both latitude and longitude are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

/// Gets distance between two points in kilometers using haversine formula.
/// Coordinates are not validated.
pub fn distance_km(a: &Coordinate, b: &Coordinate) -> Float {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();

    let h = (d_lat / 2.).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.).sin().powi(2);
    let c = 2. * h.sqrt().atan2((1. - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Gets initial compass bearing from `from` to `to`, normalized to [0, 360).
pub fn bearing_degrees(from: &Coordinate, to: &Coordinate) -> Float {
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let d_lng = (to.lng - from.lng).to_radians();

    let y = d_lng.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lng.cos();

    let bearing = y.atan2(x).to_degrees().rem_euclid(360.);

    // rem_euclid can round up to the modulus itself for tiny negative angles
    if bearing >= 360. { 0. } else { bearing }
}

/// Maps a bearing in degrees to one of 16 compass points.
pub fn compass_point(bearing: Float) -> &'static str {
    let sector = (bearing.rem_euclid(360.) / 22.5).round() as usize % COMPASS_POINTS.len();

    COMPASS_POINTS[sector]
}
