use serde::{Deserialize, Serialize};

/// A geographic coordinate, serialized as a GeoJSON position `[lng, lat]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    longitude: f64,
    latitude: f64,
}

impl Point {
    pub fn from_lng_lat(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Build [lon, lat] coordinate array.
    pub fn coordinates(&self) -> Vec<f64> {
        vec![self.longitude, self.latitude]
    }
}

impl From<[f64; 2]> for Point {
    fn from([longitude, latitude]: [f64; 2]) -> Self {
        Self::from_lng_lat(longitude, latitude)
    }
}

impl From<Point> for [f64; 2] {
    fn from(pt: Point) -> Self {
        [pt.longitude, pt.latitude]
    }
}
