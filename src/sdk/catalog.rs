//! Loading the coffee shop catalog.
//!
//! The catalog is the Moscow open-data export: a JSON array in a legacy
//! single-byte encoding where each record carries `Name` and a GeoJSON point
//! under `geoData`. Every other field is ignored.

use super::geo::{Coordinate, CoordinateError};
use super::shop::Shop;
use encoding_rs::Encoding;
use serde::Deserialize;
use std::{fs, path::Path};
use thiserror::Error;

pub const DEFAULT_ENCODING: &str = "windows-1251";

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown catalog encoding: {0}")]
    UnknownEncoding(String),

    #[error("Catalog is not valid {0}")]
    Decode(&'static str),

    #[error("Failed to parse catalog JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Record #{index} is missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("Record #{index} (\"{name}\") must have exactly two coordinates, got {found}")]
    MalformedCoordinates {
        index: usize,
        name: String,
        found: usize,
    },

    #[error("Record #{index} (\"{name}\") has an invalid coordinate: {source}")]
    InvalidShopCoordinate {
        index: usize,
        name: String,
        source: CoordinateError,
    },
}

/// One catalog record as it appears on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct RawShop {
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "geoData")]
    pub geo_data: Option<RawGeoData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawGeoData {
    /// GeoJSON order: `[longitude, latitude]`.
    pub coordinates: Option<Vec<f64>>,
}

/// Reads and decodes the catalog file without validating records.
pub fn load_catalog<P: AsRef<Path>>(
    path: P,
    encoding_label: &str,
) -> Result<Vec<RawShop>, CatalogError> {
    let path = path.as_ref();
    log::debug!("Reading catalog from {} ({})", path.display(), encoding_label);
    let bytes = fs::read(path)?;
    parse_catalog(&bytes, encoding_label)
}

/// Decodes `bytes` with the named encoding and parses the JSON array.
pub fn parse_catalog(bytes: &[u8], encoding_label: &str) -> Result<Vec<RawShop>, CatalogError> {
    let encoding = Encoding::for_label(encoding_label.trim().as_bytes())
        .ok_or_else(|| CatalogError::UnknownEncoding(encoding_label.to_string()))?;

    let (text, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        return Err(CatalogError::Decode(used.name()));
    }

    Ok(serde_json::from_str(&text)?)
}

/// Turns raw records into shops, failing on the first bad record.
pub fn adapt_shops(raw: Vec<RawShop>) -> Result<Vec<Shop>, CatalogError> {
    raw.into_iter()
        .enumerate()
        .map(|(index, record)| adapt_shop(index, record))
        .collect()
}

fn adapt_shop(index: usize, record: RawShop) -> Result<Shop, CatalogError> {
    let name = record
        .name
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .ok_or(CatalogError::MissingField {
            index,
            field: "Name",
        })?;

    let coordinates = record
        .geo_data
        .and_then(|g| g.coordinates)
        .ok_or(CatalogError::MissingField {
            index,
            field: "geoData.coordinates",
        })?;

    let &[lon, lat] = coordinates.as_slice() else {
        return Err(CatalogError::MalformedCoordinates {
            index,
            name,
            found: coordinates.len(),
        });
    };

    match Coordinate::from_lon_lat(lon, lat) {
        Ok(coordinate) => Ok(Shop::new(name, coordinate)),
        Err(source) => Err(CatalogError::InvalidShopCoordinate {
            index,
            name,
            source,
        }),
    }
}

/// Loads and validates the catalog in one step.
pub fn load_shops<P: AsRef<Path>>(path: P, encoding_label: &str) -> Result<Vec<Shop>, CatalogError> {
    let shops = adapt_shops(load_catalog(path, encoding_label)?)?;
    log::info!("Loaded {} coffee shops from the catalog", shops.len());
    Ok(shops)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_utf8(json: &str) -> Result<Vec<Shop>, CatalogError> {
        adapt_shops(parse_catalog(json.as_bytes(), "utf-8")?)
    }

    #[test]
    fn test_adapts_geojson_order() {
        let shops = parse_utf8(
            r#"[{"Name": "Coffee Bean", "ID": 1, "geoData": {"type": "Point", "coordinates": [37.618423, 55.751244]}}]"#,
        )
        .unwrap();

        assert_eq!(shops.len(), 1);
        assert_eq!(shops[0].name(), "Coffee Bean");
        assert_eq!(shops[0].coordinate().latitude(), 55.751244);
        assert_eq!(shops[0].coordinate().longitude(), 37.618423);
    }

    #[test]
    fn test_empty_array_is_empty_catalog() {
        assert!(parse_utf8("[]").unwrap().is_empty());
    }

    #[test]
    fn test_decodes_windows_1251() {
        // "Кофе" in windows-1251
        let mut bytes = b"[{\"Name\": \"".to_vec();
        bytes.extend_from_slice(&[0xCA, 0xEE, 0xF4, 0xE5]);
        bytes.extend_from_slice(b"\", \"geoData\": {\"coordinates\": [37.6, 55.7]}}]");

        let shops = adapt_shops(parse_catalog(&bytes, DEFAULT_ENCODING).unwrap()).unwrap();
        assert_eq!(shops[0].name(), "Кофе");
    }

    #[test]
    fn test_unknown_encoding() {
        let err = parse_catalog(b"[]", "klingon-8").unwrap_err();
        assert!(matches!(err, CatalogError::UnknownEncoding(label) if label == "klingon-8"));
    }

    #[test]
    fn test_invalid_utf8_is_a_decode_error() {
        let err = parse_catalog(&[b'[', 0xFF, b']'], "utf-8").unwrap_err();
        assert!(matches!(err, CatalogError::Decode("UTF-8")));
    }

    #[test]
    fn test_missing_name() {
        let err = parse_utf8(
            r#"[{"Name": "ok", "geoData": {"coordinates": [37.6, 55.7]}},
                {"Name": "   ", "geoData": {"coordinates": [37.6, 55.7]}}]"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::MissingField { index: 1, field: "Name" }
        ));
    }

    #[test]
    fn test_missing_geo_data() {
        let err = parse_utf8(r#"[{"Name": "nowhere"}]"#).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::MissingField {
                index: 0,
                field: "geoData.coordinates"
            }
        ));
    }

    #[test]
    fn test_wrong_coordinate_count() {
        let err = parse_utf8(r#"[{"Name": "x", "geoData": {"coordinates": [37.6]}}]"#).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::MalformedCoordinates { index: 0, found: 1, .. }
        ));
    }

    #[test]
    fn test_out_of_range_latitude() {
        let err =
            parse_utf8(r#"[{"Name": "x", "geoData": {"coordinates": [37.6, 200.0]}}]"#).unwrap_err();
        match err {
            CatalogError::InvalidShopCoordinate { index, name, source } => {
                assert_eq!(index, 0);
                assert_eq!(name, "x");
                assert_eq!(source, CoordinateError::LatitudeOutOfRange(200.0));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_not_an_array() {
        let err = parse_utf8(r#"{"Name": "x"}"#).unwrap_err();
        assert!(matches!(err, CatalogError::ParseError(_)));
    }
}
