//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Input validation and normalization
//!
//! The `validate_*` functions are strict: they either return their input
//! unchanged or fail with a [`RangeError`]. The normalization helpers
//! ([`longitude`], [`latitude`], [`normalize_lng_lat`], [`wrap_tile`]) never
//! fail and only remap values into the usable domain. They are never applied
//! implicitly by the conversion functions.

use crate::error::{RangeError, Result};
use crate::mercator::{MAX_ZOOM, USABLE_LATITUDE};
use crate::types::{LngLat, Meters, Pixels, Tile};

/// Number of tiles along one axis at `zoom`
pub(crate) fn tile_count(zoom: u8) -> i64 {
    1i64 << zoom
}

/// Fails if latitude is outside [-90, 90] or longitude outside [-180, 180]
pub fn validate_lng_lat(lnglat: LngLat) -> Result<LngLat> {
    if !(lnglat.lat >= -90.0 && lnglat.lat <= 90.0) {
        return Err(RangeError::Latitude(lnglat.lat));
    }
    if !(lnglat.lng >= -180.0 && lnglat.lng <= 180.0) {
        return Err(RangeError::Longitude(lnglat.lng));
    }
    Ok(lnglat)
}

/// Fails if zoom is outside [0, 30]
pub fn validate_zoom(zoom: i64) -> Result<u8> {
    if zoom < 0 {
        Err(RangeError::ZoomNegative(zoom))
    } else if zoom > MAX_ZOOM as i64 {
        Err(RangeError::ZoomTooLarge(zoom))
    } else {
        Ok(zoom as u8)
    }
}

/// Validates zoom, then requires `0 <= x, y < 2^zoom`
pub fn validate_tile(tile: Tile) -> Result<Tile> {
    validate_zoom(tile.zoom as i64)?;
    if tile.x < 0 {
        return Err(RangeError::TileNegativeX(tile.x));
    }
    if tile.y < 0 {
        return Err(RangeError::TileNegativeY(tile.y));
    }
    let max_count = tile_count(tile.zoom);
    if tile.x >= max_count || tile.y >= max_count {
        return Err(RangeError::TileOutOfBounds {
            x: tile.x,
            y: tile.y,
            zoom: tile.zoom,
        });
    }
    Ok(tile)
}

/// `true` if [`validate_tile`] accepts the tile
pub fn valid_tile(tile: Tile) -> bool {
    validate_tile(tile).is_ok()
}

/// Pass-through, pixel coordinates are not bounds checked
pub fn validate_pixels(pixels: Pixels) -> Pixels {
    pixels
}

/// Pass-through, meters are not bounds checked
pub fn validate_meters(meters: Meters) -> Meters {
    meters
}

/// Wraps a longitude beyond +/-180 degrees back into [-180, 180]
pub fn longitude(lng: f64) -> f64 {
    let mut lng = lng % 360.0;
    if lng > 180.0 {
        lng -= 360.0;
    }
    if lng < -180.0 {
        lng += 360.0;
    }
    if lng == 0.0 {
        // no negative zero
        lng = 0.0;
    }
    lng
}

/// Clamps a latitude into the Mercator-usable band [-85, 85]
pub fn latitude(lat: f64) -> f64 {
    lat.max(-USABLE_LATITUDE).min(USABLE_LATITUDE)
}

/// Wraps longitude and clamps latitude
pub fn normalize_lng_lat(lnglat: LngLat) -> LngLat {
    LngLat::new(longitude(lnglat.lng), latitude(lnglat.lat))
}

/// Remaps a tile into the grid instead of rejecting it
///
/// Zoom is clamped to 30, x wraps around the antimeridian modulo `2^zoom`
/// and y is clamped to the first and last row.
pub fn wrap_tile(tile: Tile) -> Tile {
    let zoom = tile.zoom.min(MAX_ZOOM);
    let max_count = tile_count(zoom);
    Tile {
        x: tile.x.rem_euclid(max_count),
        y: tile.y.max(0).min(max_count - 1),
        zoom,
    }
}
