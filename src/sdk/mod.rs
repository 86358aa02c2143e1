pub mod catalog;
pub mod config;
pub mod geo;
pub mod geocoding;
pub mod ranking;
pub mod render;
pub mod shop;
pub mod util;
