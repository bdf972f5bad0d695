use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::geometry::RouteAlertGeometry;
use crate::point::Point;

/// Kind of a route alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RouteAlertType {
    TunnelEntrance,
}

impl RouteAlertType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TunnelEntrance => "tunnelEntrance",
        }
    }
}

/// Tunnel-specific alert details. Carries no fields yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TunnelEntranceMetadata {}

/// A tunnel entrance ahead on the route.
///
/// Built once through [`TunnelEntranceAlertBuilder`] and immutable afterwards.
/// Two alerts are equal when every field, including the optional geometry,
/// is equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawTunnelEntranceAlert")]
pub struct TunnelEntranceAlert {
    metadata: TunnelEntranceMetadata,
    coordinate: Point,
    distance_to_start: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    alert_geometry: Option<RouteAlertGeometry>,
}

/// Wire form of an alert; always turned into a value through the builder.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTunnelEntranceAlert {
    #[serde(default)]
    metadata: TunnelEntranceMetadata,
    coordinate: Point,
    distance_to_start: f64,
    #[serde(default)]
    alert_geometry: Option<RouteAlertGeometry>,
}

impl From<RawTunnelEntranceAlert> for TunnelEntranceAlert {
    fn from(raw: RawTunnelEntranceAlert) -> Self {
        let builder =
            TunnelEntranceAlertBuilder::new(raw.metadata, raw.coordinate, raw.distance_to_start);
        match raw.alert_geometry {
            Some(range) => builder.alert_geometry(range).build(),
            None => builder.build(),
        }
    }
}

impl TunnelEntranceAlert {
    pub fn alert_type(&self) -> RouteAlertType {
        RouteAlertType::TunnelEntrance
    }

    pub fn metadata(&self) -> &TunnelEntranceMetadata {
        &self.metadata
    }

    /// Reference point of the alert.
    pub fn coordinate(&self) -> Point {
        self.coordinate
    }

    /// Distance in meters from the start of the route to the alert.
    pub fn distance_to_start(&self) -> f64 {
        self.distance_to_start
    }

    pub fn alert_geometry(&self) -> Option<&RouteAlertGeometry> {
        self.alert_geometry.as_ref()
    }

    /// Builder pre-filled with every field of this alert.
    pub fn to_builder(&self) -> TunnelEntranceAlertBuilder {
        TunnelEntranceAlertBuilder {
            metadata: self.metadata.clone(),
            coordinate: self.coordinate,
            distance_to_start: self.distance_to_start,
            alert_geometry: self.alert_geometry.clone(),
        }
    }
}

/// Accumulates the fields of a [`TunnelEntranceAlert`].
///
/// Inputs are stored as given; `build` never fails.
#[derive(Debug, Clone)]
pub struct TunnelEntranceAlertBuilder {
    metadata: TunnelEntranceMetadata,
    coordinate: Point,
    distance_to_start: f64,
    alert_geometry: Option<RouteAlertGeometry>,
}

impl TunnelEntranceAlertBuilder {
    pub fn new(
        metadata: TunnelEntranceMetadata,
        coordinate: Point,
        distance_to_start: f64,
    ) -> Self {
        Self {
            metadata,
            coordinate,
            distance_to_start,
            alert_geometry: None,
        }
    }

    /// Set the alert range. A later call replaces an earlier one.
    pub fn alert_geometry(mut self, alert_geometry: RouteAlertGeometry) -> Self {
        self.alert_geometry = Some(alert_geometry);
        self
    }

    pub fn build(self) -> TunnelEntranceAlert {
        if self.distance_to_start < 0.0 {
            warn!(
                "tunnel entrance alert built with negative distance {}",
                self.distance_to_start
            );
        }
        debug!(
            "built tunnel entrance alert at {:?}, {} m from start",
            self.coordinate, self.distance_to_start
        );

        TunnelEntranceAlert {
            metadata: self.metadata,
            coordinate: self.coordinate,
            distance_to_start: self.distance_to_start,
            alert_geometry: self.alert_geometry,
        }
    }
}
