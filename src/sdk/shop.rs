use super::geo::Coordinate;
use serde::Serialize;

/// A coffee shop from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shop {
    #[serde(rename = "title")]
    name: String,
    #[serde(flatten)]
    coordinate: Coordinate,
}

impl Shop {
    pub fn new(name: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            name: name.into(),
            coordinate,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }
}

/// A shop together with its distance from the reference point of one
/// ranking call. Borrows the shop from the catalog it was ranked from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedShop<'a> {
    #[serde(flatten)]
    shop: &'a Shop,
    #[serde(rename = "distance")]
    distance_km: f64,
}

impl<'a> RankedShop<'a> {
    pub(crate) fn new(shop: &'a Shop, distance_km: f64) -> Self {
        Self { shop, distance_km }
    }

    pub fn shop(&self) -> &'a Shop {
        self.shop
    }

    pub fn name(&self) -> &'a str {
        self.shop.name()
    }

    pub fn coordinate(&self) -> Coordinate {
        self.shop.coordinate()
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }
}
