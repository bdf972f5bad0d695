use serde::Deserialize;

/// Options for alert to GeoJSON conversion.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertOptions {
    /// Include the alert range in properties.alertGeometry (default: true)
    #[serde(default = "default_true")]
    pub include_geometry: bool,

    /// Include the alert metadata object in properties (default: true)
    #[serde(default = "default_true")]
    pub include_metadata: bool,

    /// Also emit each alert range as a LineString Feature (default: false)
    #[serde(default)]
    pub geometry_as_feature: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            include_geometry: true,
            include_metadata: true,
            geometry_as_feature: false,
        }
    }
}

fn default_true() -> bool {
    true
}
