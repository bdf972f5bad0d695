//! Tunnel entrance route alerts and their GeoJSON projection.
//!
//! Diagnostics go through the `log` facade. The host application installs
//! the logger; without one, `debug!` and `warn!` lines are discarded.

pub mod alert;
pub mod converter;
pub mod error;
pub mod geometry;
pub mod options;
pub mod point;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::alert::TunnelEntranceAlert;
use crate::error::AlertError;
use crate::options::ConvertOptions;

/// Convert an array of tunnel entrance alerts to GeoJSON, returned as a JS object.
#[wasm_bindgen(js_name = tunnelEntranceAlertToGeoJson)]
pub fn tunnel_entrance_alert_to_geojson(
    alerts: JsValue,
    options: JsValue,
) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();

    let opts = parse_options(options)?;
    let alerts: Vec<TunnelEntranceAlert> =
        serde_wasm_bindgen::from_value(alerts).map_err(AlertError::from)?;
    let fc = converter::to_feature_collection(&alerts, &opts);
    // Plain objects rather than ES Maps, so the result is usable as GeoJSON
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    Ok(fc.serialize(&serializer).map_err(AlertError::from)?)
}

/// Convert a JSON array of tunnel entrance alerts to GeoJSON, returned as a JSON string.
#[wasm_bindgen(js_name = tunnelEntranceAlertToGeoJsonString)]
pub fn tunnel_entrance_alert_to_geojson_string(
    alerts_json: &str,
    options: JsValue,
) -> Result<String, JsValue> {
    console_error_panic_hook::set_once();

    let opts = parse_options(options)?;
    let alerts = alerts_from_json(alerts_json)?;
    let fc = converter::to_feature_collection(&alerts, &opts);
    Ok(serde_json::to_string(&fc).map_err(AlertError::from)?)
}

/// Parse a JSON array of alerts. Fields are taken as given.
pub fn alerts_from_json(json: &str) -> Result<Vec<TunnelEntranceAlert>, AlertError> {
    Ok(serde_json::from_str(json)?)
}

fn parse_options(options: JsValue) -> Result<ConvertOptions, JsValue> {
    if options.is_undefined() || options.is_null() {
        Ok(ConvertOptions::default())
    } else {
        Ok(serde_wasm_bindgen::from_value(options).map_err(AlertError::from)?)
    }
}
