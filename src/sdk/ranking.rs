//! Nearest-K selection over a shop catalog.

use super::geo::{Coordinate, CoordinateError, EarthModel};
use super::shop::{RankedShop, Shop};
use std::num::NonZeroUsize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RankError {
    #[error("Reference point {coordinate} is invalid: {source}")]
    InvalidReference {
        coordinate: Coordinate,
        source: CoordinateError,
    },

    #[error("Shop #{index} (\"{name}\") has an invalid coordinate: {source}")]
    InvalidShopCoordinate {
        index: usize,
        name: String,
        source: CoordinateError,
    },
}

/// Returns the `k` shops nearest to `reference`, closest first, measured on
/// the WGS-84 ellipsoid.
pub fn rank_nearest<'a>(
    reference: Coordinate,
    shops: &'a [Shop],
    k: NonZeroUsize,
) -> Result<Vec<RankedShop<'a>>, RankError> {
    rank_nearest_with(EarthModel::default(), reference, shops, k)
}

/// Same as [`rank_nearest`] with an explicit Earth model.
///
/// Shops at equal distance keep their catalog order. Any shop with an
/// out-of-range coordinate fails the whole call; nothing is skipped.
pub fn rank_nearest_with<'a>(
    model: EarthModel,
    reference: Coordinate,
    shops: &'a [Shop],
    k: NonZeroUsize,
) -> Result<Vec<RankedShop<'a>>, RankError> {
    reference
        .validate()
        .map_err(|source| RankError::InvalidReference {
            coordinate: reference,
            source,
        })?;

    let mut ranked = shops
        .iter()
        .enumerate()
        .map(|(index, shop)| {
            shop.coordinate()
                .validate()
                .map_err(|source| RankError::InvalidShopCoordinate {
                    index,
                    name: shop.name().to_string(),
                    source,
                })?;
            let distance = model.distance_km(&reference, &shop.coordinate());
            Ok(RankedShop::new(shop, distance))
        })
        .collect::<Result<Vec<_>, RankError>>()?;

    // sort_by is stable; distances are finite so total_cmp matches numeric order
    ranked.sort_by(|a, b| a.distance_km().total_cmp(&b.distance_km()));
    ranked.truncate(k.get());

    log::debug!(
        "Ranked {} shops with the {} model, kept {}",
        shops.len(),
        model.name(),
        ranked.len()
    );
    Ok(ranked)
}
