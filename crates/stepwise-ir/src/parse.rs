use serde::de::DeserializeOwned;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse a request payload from JSON text.
pub fn parse_request<T: DeserializeOwned>(json: &str) -> Result<T, ParseError> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a request payload from an already-decoded JSON value.
pub fn request_from_value<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, ParseError> {
    Ok(serde_json::from_value(value)?)
}
