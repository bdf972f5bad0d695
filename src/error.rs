use wasm_bindgen::JsValue;

#[derive(Debug)]
pub enum AlertError {
    Json(serde_json::Error),
    JsBridge(serde_wasm_bindgen::Error),
}

impl std::fmt::Display for AlertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(e) => write!(f, "JSON error: {e}"),
            Self::JsBridge(e) => write!(f, "JS value conversion error: {e}"),
        }
    }
}

impl std::error::Error for AlertError {}

impl From<serde_json::Error> for AlertError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<serde_wasm_bindgen::Error> for AlertError {
    fn from(e: serde_wasm_bindgen::Error) -> Self {
        Self::JsBridge(e)
    }
}

impl From<AlertError> for JsValue {
    fn from(e: AlertError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_message() {
        let err: AlertError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(err.to_string().starts_with("JSON error: "));
    }
}
