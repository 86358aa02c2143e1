use crate::sdk::shop::RankedShop;
use std::fmt::Write;

/// Numbered, human-readable listing of ranked shops.
pub fn render_text(ranked: &[RankedShop<'_>]) -> String {
    let mut out = String::new();
    for (i, shop) in ranked.iter().enumerate() {
        let coord = shop.coordinate();
        // writing into a String cannot fail
        let _ = writeln!(
            out,
            "{:>2}. {}  {:.3} km  ({:.6}, {:.6})",
            i + 1,
            shop.name(),
            shop.distance_km(),
            coord.latitude(),
            coord.longitude()
        );
    }
    out
}

/// Pretty JSON array of `{title, latitude, longitude, distance}` objects.
pub fn render_json(ranked: &[RankedShop<'_>]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(ranked)
}
