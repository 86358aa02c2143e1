pub mod types;
pub mod yandex;

pub use yandex::{parse_geocode_response, YandexGeocoder};
