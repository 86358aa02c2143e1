pub mod sdk;

pub use sdk::catalog::{load_shops, CatalogError};
pub use sdk::config::GeocoderConfig;
pub use sdk::geo::{Coordinate, CoordinateError, EarthModel};
pub use sdk::geocoding::{GeocodeError, Geocoder, YandexGeocoder};
pub use sdk::ranking::{rank_nearest, rank_nearest_with, RankError};
pub use sdk::render::MapDocument;
pub use sdk::shop::{RankedShop, Shop};
