use super::error::GeocodeError;
use crate::sdk::geo::Coordinate;

pub trait Geocoder: Send + Sync {
    /// Resolves a free-text address to the most relevant coordinate.
    ///
    /// `Ok(None)` means the service answered but found nothing.
    fn geocode(&self, address: &str) -> Result<Option<Coordinate>, GeocodeError>;
}
