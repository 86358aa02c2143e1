use crate::sdk::geo::Coordinate;
use crate::sdk::shop::RankedShop;
use askama::Template;
use std::{fs, path::Path};
use thiserror::Error;

pub const DEFAULT_ZOOM: u8 = 14;
pub const USER_POPUP: &str = "Your location";

const USER_COLOR: &str = "red";
const SHOP_COLOR: &str = "green";

#[derive(Error, Debug)]
pub enum MapError {
    #[error("Failed to render map template: {0}")]
    Render(#[from] askama::Error),

    #[error("Failed to encode popup text: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Failed to write map file: {0}")]
    Io(#[from] std::io::Error),
}

pub struct MapMarker {
    pub latitude: f64,
    pub longitude: f64,
    pub color: &'static str,
    /// Popup text as a JS string literal, safe to place inside `<script>`.
    pub popup_json: String,
}

impl MapMarker {
    fn new(coordinate: Coordinate, popup: &str, color: &'static str) -> Result<Self, MapError> {
        Ok(Self {
            latitude: coordinate.latitude(),
            longitude: coordinate.longitude(),
            color,
            popup_json: script_string(popup)?,
        })
    }
}

/// Leaflet page centred on the user with one marker per ranked shop.
#[derive(Template)]
#[template(path = "map.html")]
pub struct MapDocument {
    pub title: String,
    pub center: MapMarker,
    pub zoom: u8,
    pub markers: Vec<MapMarker>,
}

impl MapDocument {
    pub fn new(user: Coordinate, ranked: &[RankedShop<'_>]) -> Result<Self, MapError> {
        let center = MapMarker::new(user, USER_POPUP, USER_COLOR)?;
        let mut markers = vec![MapMarker::new(user, USER_POPUP, USER_COLOR)?];
        for shop in ranked {
            markers.push(MapMarker::new(shop.coordinate(), shop.name(), SHOP_COLOR)?);
        }

        Ok(Self {
            title: "Nearest coffee shops".to_string(),
            center,
            zoom: DEFAULT_ZOOM,
            markers,
        })
    }

    pub fn to_html(&self) -> Result<String, MapError> {
        Ok(self.render()?)
    }

    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), MapError> {
        let html = self.to_html()?;
        fs::write(&path, html)?;
        log::info!("Map written to {}", path.as_ref().display());
        Ok(())
    }
}

// JSON string literal with the characters that could close a <script> escaped
fn script_string(text: &str) -> Result<String, MapError> {
    Ok(serde_json::to_string(text)?
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sdk::ranking::rank_nearest;
    use crate::sdk::shop::Shop;
    use std::num::NonZeroUsize;

    fn user() -> Coordinate {
        Coordinate::new(55.751244, 37.618423).unwrap()
    }

    #[test]
    fn test_one_marker_per_shop_plus_user() {
        let shops = vec![
            Shop::new("Double B", Coordinate::new(55.76, 37.62).unwrap()),
            Shop::new("Surf", Coordinate::new(55.74, 37.60).unwrap()),
        ];
        let ranked = rank_nearest(user(), &shops, NonZeroUsize::new(5).unwrap()).unwrap();
        let map = MapDocument::new(user(), &ranked).unwrap();
        assert_eq!(map.markers.len(), 3);

        let html = map.to_html().unwrap();
        assert_eq!(html.matches("L.circleMarker(").count(), 3);
        assert!(html.contains("setView([55.751244, 37.618423], 14)"));
        assert!(html.contains(r#"textPopup("Double B")"#));
        assert!(html.contains(r#"textPopup("Your location")"#));
    }

    #[test]
    fn test_popup_cannot_break_out_of_script() {
        let shops = vec![Shop::new(
            "</script><b>Evil & Co</b>",
            Coordinate::new(55.76, 37.62).unwrap(),
        )];
        let ranked = rank_nearest(user(), &shops, NonZeroUsize::new(1).unwrap()).unwrap();
        let html = MapDocument::new(user(), &ranked).unwrap().to_html().unwrap();

        assert_eq!(html.matches("</script>").count(), 2);
        assert!(html.contains(r#""\u003c/script\u003e\u003cb\u003eEvil \u0026 Co\u003c/b\u003e""#));
    }

    #[test]
    fn test_cyrillic_names_survive() {
        let shops = vec![Shop::new("Кофемания", Coordinate::new(55.76, 37.62).unwrap())];
        let ranked = rank_nearest(user(), &shops, NonZeroUsize::new(1).unwrap()).unwrap();
        let html = MapDocument::new(user(), &ranked).unwrap().to_html().unwrap();
        assert!(html.contains("Кофемания"));
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("coffee_map.html");
        MapDocument::new(user(), &[]).unwrap().write_to(&path).unwrap();

        let html = fs::read_to_string(&path).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
    }
}
