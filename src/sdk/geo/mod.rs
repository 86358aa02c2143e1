pub mod coordinate;
pub mod distance;

pub use coordinate::{Coordinate, CoordinateError};
pub use distance::{distance_km, EarthModel};
