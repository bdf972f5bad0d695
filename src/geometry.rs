use serde::{Deserialize, Serialize};

use crate::point::Point;

/// Spatial extent of a route alert: where it starts and ends on the route
/// geometry. Start and end are not checked against each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteAlertGeometry {
    start_distance: f64,
    start_coordinate: Point,
    start_geometry_index: usize,
    end_coordinate: Point,
    end_geometry_index: usize,
}

impl RouteAlertGeometry {
    pub fn start_distance(&self) -> f64 {
        self.start_distance
    }

    pub fn start_coordinate(&self) -> Point {
        self.start_coordinate
    }

    pub fn start_geometry_index(&self) -> usize {
        self.start_geometry_index
    }

    pub fn end_coordinate(&self) -> Point {
        self.end_coordinate
    }

    pub fn end_geometry_index(&self) -> usize {
        self.end_geometry_index
    }

    pub fn to_builder(&self) -> RouteAlertGeometryBuilder {
        RouteAlertGeometryBuilder {
            geometry: self.clone(),
        }
    }
}

/// Builder for [`RouteAlertGeometry`]. Every field is required up front.
#[derive(Debug, Clone)]
pub struct RouteAlertGeometryBuilder {
    geometry: RouteAlertGeometry,
}

impl RouteAlertGeometryBuilder {
    pub fn new(
        start_distance: f64,
        start_coordinate: Point,
        start_geometry_index: usize,
        end_coordinate: Point,
        end_geometry_index: usize,
    ) -> Self {
        Self {
            geometry: RouteAlertGeometry {
                start_distance,
                start_coordinate,
                start_geometry_index,
                end_coordinate,
                end_geometry_index,
            },
        }
    }

    pub fn build(self) -> RouteAlertGeometry {
        self.geometry
    }
}
