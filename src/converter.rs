use geojson::{Feature, FeatureCollection, Geometry, Value};
use log::debug;
use serde_json::{Map, Number, Value as JsonValue};

use crate::alert::TunnelEntranceAlert;
use crate::geometry::RouteAlertGeometry;
use crate::options::ConvertOptions;

/// Convert tunnel entrance alerts to a GeoJSON FeatureCollection.
pub fn to_feature_collection(
    alerts: &[TunnelEntranceAlert],
    opts: &ConvertOptions,
) -> FeatureCollection {
    let mut features = Vec::with_capacity(alerts.len());

    for alert in alerts {
        features.push(to_feature(alert, opts));
        if opts.geometry_as_feature {
            if let Some(range) = alert.alert_geometry() {
                features.push(range_to_feature(alert, range));
            }
        }
    }

    debug!(
        "converted {} alerts into {} features",
        alerts.len(),
        features.len()
    );

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

/// Convert a single alert to a Point Feature at its reference coordinate.
pub fn to_feature(alert: &TunnelEntranceAlert, opts: &ConvertOptions) -> Feature {
    let geometry = Geometry::new(Value::Point(alert.coordinate().coordinates()));

    let mut props = Map::new();
    insert_alert_type(&mut props, alert);
    props.insert(
        "distanceToStart".to_string(),
        float_value(alert.distance_to_start()),
    );

    if opts.include_metadata {
        let metadata = serde_json::to_value(alert.metadata())
            .unwrap_or_else(|_| JsonValue::Object(Map::new()));
        props.insert("metadata".to_string(), metadata);
    }

    if opts.include_geometry {
        if let Some(range) = alert.alert_geometry() {
            props.insert(
                "alertGeometry".to_string(),
                JsonValue::Object(range_properties(range)),
            );
        }
    }

    Feature {
        bbox: None,
        geometry: Some(geometry),
        id: None,
        properties: Some(props),
        foreign_members: None,
    }
}

fn range_to_feature(alert: &TunnelEntranceAlert, range: &RouteAlertGeometry) -> Feature {
    let coords = vec![
        range.start_coordinate().coordinates(),
        range.end_coordinate().coordinates(),
    ];
    let geometry = Geometry::new(Value::LineString(coords));

    let mut props = range_properties(range);
    insert_alert_type(&mut props, alert);

    Feature {
        bbox: None,
        geometry: Some(geometry),
        id: None,
        properties: Some(props),
        foreign_members: None,
    }
}

fn range_properties(range: &RouteAlertGeometry) -> Map<String, JsonValue> {
    let mut props = Map::new();
    props.insert(
        "startDistance".to_string(),
        float_value(range.start_distance()),
    );
    props.insert(
        "startCoordinate".to_string(),
        position_value(range.start_coordinate().coordinates()),
    );
    props.insert(
        "startGeometryIndex".to_string(),
        JsonValue::Number((range.start_geometry_index() as u64).into()),
    );
    props.insert(
        "endCoordinate".to_string(),
        position_value(range.end_coordinate().coordinates()),
    );
    props.insert(
        "endGeometryIndex".to_string(),
        JsonValue::Number((range.end_geometry_index() as u64).into()),
    );
    props
}

fn insert_alert_type(props: &mut Map<String, JsonValue>, alert: &TunnelEntranceAlert) {
    props.insert(
        "alertType".to_string(),
        JsonValue::String(alert.alert_type().as_str().to_string()),
    );
}

// NaN and infinities have no JSON form
fn float_value(v: f64) -> JsonValue {
    Number::from_f64(v).map_or(JsonValue::Null, JsonValue::Number)
}

fn position_value(coords: Vec<f64>) -> JsonValue {
    JsonValue::Array(coords.into_iter().map(float_value).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::{TunnelEntranceAlertBuilder, TunnelEntranceMetadata};
    use crate::geometry::RouteAlertGeometryBuilder;
    use crate::point::Point;

    fn alert_with_range() -> TunnelEntranceAlert {
        TunnelEntranceAlertBuilder::new(
            TunnelEntranceMetadata::default(),
            Point::from_lng_lat(10.0, 20.0),
            123.0,
        )
        .alert_geometry(
            RouteAlertGeometryBuilder::new(
                456.0,
                Point::from_lng_lat(10.0, 20.0),
                1,
                Point::from_lng_lat(33.0, 44.0),
                2,
            )
            .build(),
        )
        .build()
    }

    #[test]
    fn test_alert_feature() {
        let f = to_feature(&alert_with_range(), &ConvertOptions::default());

        let geom = f.geometry.as_ref().unwrap();
        if let Value::Point(coords) = &geom.value {
            assert_eq!(coords, &vec![10.0, 20.0]); // [lon, lat]
        } else {
            panic!("Expected Point geometry");
        }

        let props = f.properties.as_ref().unwrap();
        assert_eq!(props["alertType"], "tunnelEntrance");
        assert_eq!(props["distanceToStart"], 123.0);
        assert!(props["metadata"].as_object().unwrap().is_empty());

        let range = props["alertGeometry"].as_object().unwrap();
        assert_eq!(range["startDistance"], 456.0);
        assert_eq!(range["startGeometryIndex"], 1);
        assert_eq!(range["endGeometryIndex"], 2);
        assert_eq!(range["endCoordinate"], serde_json::json!([33.0, 44.0]));
    }

    #[test]
    fn test_exclude_geometry_and_metadata() {
        let opts = ConvertOptions {
            include_geometry: false,
            include_metadata: false,
            ..Default::default()
        };
        let f = to_feature(&alert_with_range(), &opts);

        let props = f.properties.as_ref().unwrap();
        assert!(!props.contains_key("alertGeometry"));
        assert!(!props.contains_key("metadata"));
        assert_eq!(props["alertType"], "tunnelEntrance");
    }

    #[test]
    fn test_geometry_as_feature() {
        let no_range = TunnelEntranceAlertBuilder::new(
            TunnelEntranceMetadata::default(),
            Point::from_lng_lat(1.0, 2.0),
            5.0,
        )
        .build();
        let opts = ConvertOptions {
            geometry_as_feature: true,
            ..Default::default()
        };
        let fc = to_feature_collection(&[alert_with_range(), no_range], &opts);

        // Range LineString follows its alert; alert without a range adds nothing
        assert_eq!(fc.features.len(), 3);
        let geom = fc.features[1].geometry.as_ref().unwrap();
        match &geom.value {
            Value::LineString(coords) => {
                assert_eq!(coords, &vec![vec![10.0, 20.0], vec![33.0, 44.0]]);
            }
            _ => panic!("Expected LineString"),
        }
        let props = fc.features[1].properties.as_ref().unwrap();
        assert_eq!(props["alertType"], "tunnelEntrance");
        assert_eq!(props["startDistance"], 456.0);
    }

    #[test]
    fn test_non_finite_distance_is_null() {
        let alert = TunnelEntranceAlertBuilder::new(
            TunnelEntranceMetadata::default(),
            Point::from_lng_lat(10.0, 20.0),
            f64::NAN,
        )
        .build();
        let f = to_feature(&alert, &ConvertOptions::default());
        assert!(f.properties.as_ref().unwrap()["distanceToStart"].is_null());
    }

    #[test]
    fn test_empty_input() {
        let fc = to_feature_collection(&[], &ConvertOptions::default());
        assert!(fc.features.is_empty());
    }
}
