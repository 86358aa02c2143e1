pub mod error;
pub mod provider;
pub mod service;

pub use error::GeocodeError;
pub use provider::{parse_geocode_response, YandexGeocoder};
pub use service::Geocoder;
