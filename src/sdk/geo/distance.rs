use super::coordinate::Coordinate;
use geo::{GeodesicDistance, HaversineDistance, Point};
use std::cmp::Ordering;

/// Earth model used to measure the distance between two coordinates.
///
/// A ranking call uses exactly one model for every pair it measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EarthModel {
    /// WGS-84 ellipsoid, Karney's geodesic algorithm.
    #[default]
    Geodesic,
    /// Sphere with the IUGG mean radius.
    Haversine,
}

impl EarthModel {
    /// Distance in kilometers.
    ///
    /// Returns exactly 0.0 for identical points and is exactly symmetric:
    /// the pair is put in a canonical order before it is evaluated.
    pub fn distance_km(&self, a: &Coordinate, b: &Coordinate) -> f64 {
        if a == b {
            return 0.0;
        }
        let (first, second) = match canonical_order(a, b) {
            Ordering::Greater => (b, a),
            _ => (a, b),
        };
        let p1 = to_point(first);
        let p2 = to_point(second);

        let meters = match self {
            EarthModel::Geodesic => p1.geodesic_distance(&p2),
            EarthModel::Haversine => p1.haversine_distance(&p2),
        };
        meters.max(0.0) / 1000.0
    }

    pub fn name(&self) -> &'static str {
        match self {
            EarthModel::Geodesic => "geodesic",
            EarthModel::Haversine => "haversine",
        }
    }
}

fn canonical_order(a: &Coordinate, b: &Coordinate) -> Ordering {
    a.latitude()
        .total_cmp(&b.latitude())
        .then_with(|| a.longitude().total_cmp(&b.longitude()))
}

// geo points are (x = longitude, y = latitude)
fn to_point(c: &Coordinate) -> Point<f64> {
    Point::new(c.longitude(), c.latitude())
}

/// Geodesic distance in kilometers between two coordinates.
pub fn distance_km(a: &Coordinate, b: &Coordinate) -> f64 {
    EarthModel::default().distance_km(a, b)
}
