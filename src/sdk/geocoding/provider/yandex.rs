use super::types::GeocodeResponse;
use crate::sdk::config::GeocoderConfig;
use crate::sdk::geo::Coordinate;
use crate::sdk::geocoding::error::{GeocodeError, YandexErrorPayload};
use crate::sdk::geocoding::service::Geocoder;
use crate::sdk::util::rate_limit::{wait_for_permit, Limiter};
use reqwest::blocking::Client;

pub struct YandexGeocoder {
    client: Client,
    api_key: String,
    base_url: String,
    limiter: Limiter,
}

impl YandexGeocoder {
    pub fn new(config: &GeocoderConfig, limiter: Limiter) -> Result<Self, GeocodeError> {
        Ok(Self {
            client: Client::builder().timeout(config.timeout).build()?,
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
            limiter,
        })
    }
}

impl Geocoder for YandexGeocoder {
    fn geocode(&self, address: &str) -> Result<Option<Coordinate>, GeocodeError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(GeocodeError::EmptyAddress);
        }

        wait_for_permit(&self.limiter);
        let url = format!("{}/1.x", self.base_url);
        log::debug!("[PROVIDER] Calling Yandex geocode for address: \"{}\"", address);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("geocode", address),
                ("apikey", self.api_key.as_str()),
                ("format", "json"),
            ])
            .send()
            .map_err(|e| {
                log::error!("Failed to send geocode request. URL: {}\nError: {}", url, e);
                e
            })?;

        let status = response.status();
        let text = response.text()?;

        if !status.is_success() {
            // Try to parse the structured error first
            if let Ok(payload) = serde_json::from_str::<YandexErrorPayload>(&text) {
                return Err(GeocodeError::ApiError {
                    code: payload.status_code,
                    error: payload.error,
                    message: payload.message,
                });
            }
            log::error!(
                "API returned non-success status: {}. Unparseable Body: {}",
                status,
                text
            );
            return Err(GeocodeError::RawApiError {
                status: status.as_u16(),
                body: text,
            });
        }

        let coordinate = parse_geocode_response(&text).map_err(|e| {
            log::error!("Failed to parse GeocodeResponse. Error: {}. Body: {}", e, text);
            e
        })?;

        match &coordinate {
            Some(c) => log::debug!("[PROVIDER] \"{}\" resolved to {}", address, c),
            None => log::debug!("[PROVIDER] No geocode results for \"{}\"", address),
        }
        Ok(coordinate)
    }
}

/// Extracts the most relevant match from a Yandex Geocoder JSON body.
pub fn parse_geocode_response(body: &str) -> Result<Option<Coordinate>, GeocodeError> {
    let resp: GeocodeResponse = serde_json::from_str(body)?;

    let Some(first) = resp.response.collection.feature_member.first() else {
        return Ok(None);
    };

    let pos = &first.geo_object.point.pos;
    let parts: Vec<&str> = pos.split_whitespace().collect();
    let &[lon, lat] = parts.as_slice() else {
        return Err(GeocodeError::MalformedPosition(pos.clone()));
    };
    let (Ok(lon), Ok(lat)) = (lon.parse::<f64>(), lat.parse::<f64>()) else {
        return Err(GeocodeError::MalformedPosition(pos.clone()));
    };

    Ok(Some(Coordinate::from_lon_lat(lon, lat)?))
}
