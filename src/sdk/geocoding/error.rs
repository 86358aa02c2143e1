use crate::sdk::geo::CoordinateError;
use serde::Deserialize;
use thiserror::Error;

// Shape of the JSON body Yandex sends with a non-2xx status
#[derive(Deserialize, Debug)]
pub struct YandexErrorPayload {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub error: String,
    pub message: String,
}

#[derive(Error, Debug)]
pub enum GeocodeError {
    #[error("Address is empty")]
    EmptyAddress,

    #[error("API Error (Code {code}, {error}): {message}")]
    ApiError {
        code: u16,
        error: String,
        message: String,
    },

    // Non-2xx response whose body is not the documented error JSON
    #[error("Unstructured API Error (HTTP {status}): {body}")]
    RawApiError { status: u16, body: String },

    #[error("Underlying request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Failed to parse JSON response: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Geocoder returned a malformed position: {0:?}")]
    MalformedPosition(String),

    #[error("Geocoder returned an invalid coordinate: {0}")]
    InvalidCoordinate(#[from] CoordinateError),
}
