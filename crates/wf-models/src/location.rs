//! Geographic positions. Coordinates are opaque to the core (no geocoding).

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A bare coordinate pair (worker position, clock-in position)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct GeoPoint {
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A job site: street address plus coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct JobLocation {
    #[validate(length(min = 1, message = "can't be blank"))]
    pub address: String,
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub lng: f64,
}

impl JobLocation {
    pub fn new(address: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            address: address.into(),
            lat,
            lng,
        }
    }
}
