use serde::Serialize;
use thiserror::Error;

pub const MAX_LATITUDE: f64 = 90.0;
pub const MAX_LONGITUDE: f64 = 180.0;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoordinateError {
    #[error("Latitude must be between -90 and 90 degrees, got {0}")]
    LatitudeOutOfRange(f64),

    #[error("Longitude must be between -180 and 180 degrees, got {0}")]
    LongitudeOutOfRange(f64),

    #[error("Coordinate is not a finite number: ({latitude}, {longitude})")]
    NotFinite { latitude: f64, longitude: f64 },
}

/// A point on the Earth's surface in decimal degrees.
///
/// Fields are private so a value never changes after construction. Use
/// [`Coordinate::new`] for checked construction; [`Coordinate::unchecked`]
/// exists for records whose validation happens later (see the ranker).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        let coord = Self::unchecked(latitude, longitude);
        coord.validate()?;
        Ok(coord)
    }

    /// Builds a coordinate from the (longitude, latitude) order used by
    /// GeoJSON and the geocoder.
    pub fn from_lon_lat(longitude: f64, latitude: f64) -> Result<Self, CoordinateError> {
        Self::new(latitude, longitude)
    }

    pub fn unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn validate(&self) -> Result<(), CoordinateError> {
        if !self.latitude.is_finite() || !self.longitude.is_finite() {
            return Err(CoordinateError::NotFinite {
                latitude: self.latitude,
                longitude: self.longitude,
            });
        }
        if self.latitude.abs() > MAX_LATITUDE {
            return Err(CoordinateError::LatitudeOutOfRange(self.latitude));
        }
        if self.longitude.abs() > MAX_LONGITUDE {
            return Err(CoordinateError::LongitudeOutOfRange(self.longitude));
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}
