//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Spherical Mercator projection and raster space conversions

use crate::error::Result;
use crate::tile::tile_to_google;
use crate::types::{Google, LngLat, Meters, Pixels, Tile};
use crate::validate::{validate_lng_lat, validate_meters, validate_pixels};
use std::f64::consts::PI;

/// Width and height of a tile in pixels
pub const TILE_SIZE: f64 = 256.0;
/// Spherical earth radius (EPSG:3857)
pub const EARTH_RADIUS: f64 = 6378137.0;
/// Half of the earth circumference in meters
pub const ORIGIN_SHIFT: f64 = 2.0 * PI * EARTH_RADIUS / 2.0;
/// Meters per pixel at zoom level 0
pub const INITIAL_RESOLUTION: f64 = 2.0 * PI * EARTH_RADIUS / TILE_SIZE;
/// Highest supported zoom level
pub const MAX_ZOOM: u8 = 30;
/// Northernmost latitude reachable by the projection: `2*atan(e^PI)*180/PI - 90`
pub const MAX_LATITUDE: f64 = 85.05112877980659;
/// Latitude band used by [`latitude`](crate::latitude) clamping
pub const USABLE_LATITUDE: f64 = 85.0;

/// Round to a number of decimal places. Infinities are returned unchanged.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    if value.is_infinite() {
        return value;
    }
    let multiplier = 10f64.powi(decimals);
    (value * multiplier).round() / multiplier
}

/// Meters per pixel at a zoom level
pub fn resolution(zoom: u8) -> f64 {
    INITIAL_RESOLUTION / 2f64.powi(zoom as i32)
}

/// Integer arithmetic progression
///
/// With `stop` missing the progression runs from 0 to `start`. A missing (or zero)
/// `step` counts down when `stop < start` and up otherwise. `stop` is excluded.
/// Bounds whose distance does not fit into an `i64` give an empty progression.
pub fn range(start: i64, stop: Option<i64>, step: Option<i64>) -> Vec<i64> {
    let (start, stop) = match stop {
        Some(stop) => (start, stop),
        None => (0, start),
    };
    let step = match step {
        Some(step) if step != 0 => step,
        _ if stop < start => -1,
        _ => 1,
    };
    let (mut length, rem) = match stop
        .checked_sub(start)
        .and_then(|diff| Some((diff.checked_div(step)?, diff.checked_rem(step)?)))
    {
        Some(parts) => parts,
        None => return Vec::new(),
    };
    if rem != 0 && (rem > 0) == (step > 0) {
        length += 1;
    }
    (0..length.max(0)).map(|i| start + i * step).collect()
}

/// Converts geographic degrees to Spherical Mercator meters, rounded to 0.1m
pub fn lng_lat_to_meters(lnglat: LngLat) -> Result<Meters> {
    let LngLat { lng, lat } = validate_lng_lat(lnglat)?;
    let x = lng * ORIGIN_SHIFT / 180.0;
    let y = ((90.0 + lat) * PI / 360.0).tan().ln() / (PI / 180.0);
    let y = y * ORIGIN_SHIFT / 180.0;
    Ok(Meters::new(round_to(x, 1), round_to(y, 1)))
}

/// Converts Spherical Mercator meters to geographic degrees, rounded to 6 decimals
pub fn meters_to_lng_lat(meters: Meters) -> LngLat {
    let Meters { x, y } = validate_meters(meters);
    let lng = (x / ORIGIN_SHIFT) * 180.0;
    let lat = (y / ORIGIN_SHIFT) * 180.0;
    let lat = 180.0 / PI * (2.0 * (lat * PI / 180.0).exp().atan() - PI / 2.0);
    LngLat::new(round_to(lng, 6), round_to(lat, 6))
}

/// Converts meters to pixels at a zoom level
pub fn meters_to_pixels(meters: Meters, zoom: u8) -> Pixels {
    let Meters { x, y } = validate_meters(meters);
    let res = resolution(zoom);
    Pixels::new((x + ORIGIN_SHIFT) / res, (y + ORIGIN_SHIFT) / res, zoom)
}

/// Converts pixels back to meters, rounded to 0.1m
pub fn pixels_to_meters(pixels: Pixels) -> Meters {
    let Pixels { x, y, zoom } = validate_pixels(pixels);
    let res = resolution(zoom);
    Meters::new(
        round_to(x * res - ORIGIN_SHIFT, 1),
        round_to(y * res - ORIGIN_SHIFT, 1),
    )
}

/// TMS tile containing a pixel
///
/// Tile indices are clamped at 0 but not at `2^zoom`.
pub fn pixels_to_tile(pixels: Pixels) -> Tile {
    let Pixels { x, y, zoom } = validate_pixels(pixels);
    if zoom == 0 {
        return Tile::new(0, 0, 0);
    }
    let tx = ((x / TILE_SIZE).ceil() - 1.0).max(0.0);
    let ty = ((y / TILE_SIZE).ceil() - 1.0).max(0.0);
    Tile::new(tx as i64, ty as i64, zoom)
}

/// TMS tile containing a geographic coordinate
pub fn lng_lat_to_tile(lnglat: LngLat, zoom: u8) -> Result<Tile> {
    let meters = lng_lat_to_meters(lnglat)?;
    Ok(pixels_to_tile(meters_to_pixels(meters, zoom)))
}

/// XYZ tile containing a geographic coordinate
///
/// Zoom level 0 always answers the single world tile, without looking at the coordinate.
pub fn lng_lat_to_google(lnglat: LngLat, zoom: u8) -> Result<Google> {
    if zoom == 0 {
        return Ok(Google::new(0, 0, 0));
    }
    let tile = lng_lat_to_tile(lnglat, zoom)?;
    tile_to_google(tile)
}

/// TMS tile containing a Mercator coordinate
pub fn meters_to_tile(meters: Meters, zoom: u8) -> Tile {
    if zoom == 0 {
        return Tile::new(0, 0, 0);
    }
    pixels_to_tile(meters_to_pixels(meters, zoom))
}
