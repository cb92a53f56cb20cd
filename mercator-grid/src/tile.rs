//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Tile adressing schemes: TMS, XYZ and quadkeys

use crate::error::{RangeError, Result};
use crate::mercator::MAX_ZOOM;
use crate::types::{Google, Tile};
use crate::validate::{tile_count, validate_tile, validate_zoom};
use std::str::FromStr;

/// Unique key of a tile: `(1<<zoom) * ((1<<zoom) + x) + y`
///
/// Collision free for all valid tiles up to zoom level 30. Fails for zoom
/// levels above 30 and for indices too large to be keyed.
pub fn hash(tile: Tile) -> Result<i64> {
    let zoom = validate_zoom(tile.zoom as i64)?;
    let n = tile_count(zoom);
    n.checked_add(tile.x)
        .and_then(|v| v.checked_mul(n))
        .and_then(|v| v.checked_add(tile.y))
        .ok_or(RangeError::TileOutOfBounds {
            x: tile.x,
            y: tile.y,
            zoom,
        })
}

/// Flips the y axis of a TMS tile
pub fn tile_to_google(tile: Tile) -> Result<Google> {
    let Tile { x, y, zoom } = validate_tile(tile)?;
    if zoom == 0 {
        return Ok(Google::new(0, 0, 0));
    }
    Ok(Google::new(x, tile_count(zoom) - 1 - y, zoom))
}

/// Flips the y axis of a XYZ tile
pub fn google_to_tile(google: Google) -> Result<Tile> {
    let Tile { x, y, zoom } = validate_tile(Tile::new(google.x, google.y, google.zoom))?;
    Ok(Tile::new(x, tile_count(zoom) - 1 - y, zoom))
}

/// Quadkey of a TMS tile, most significant level first
///
/// Zoom level 0 has no quadkey and yields an empty string.
pub fn tile_to_quadkey(tile: Tile) -> Result<String> {
    let Tile { x, y, zoom } = validate_tile(tile)?;
    if zoom == 0 {
        return Ok(String::new());
    }
    let y = tile_count(zoom) - 1 - y;
    let quadkey = (1..=zoom)
        .rev()
        .map(|i| {
            let mask = 1i64 << (i - 1);
            let mut digit = 0u8;
            if x & mask != 0 {
                digit += 1;
            }
            if y & mask != 0 {
                digit += 2;
            }
            char::from(b'0' + digit)
        })
        .collect();
    Ok(quadkey)
}

/// XYZ tile of a quadkey. The zoom level is the quadkey length.
pub fn quadkey_to_google(quadkey: &str) -> Result<Google> {
    let zoom = quadkey.len();
    if zoom > MAX_ZOOM as usize {
        return Err(RangeError::QuadkeyLength(quadkey.to_string()));
    }
    let mut x = 0i64;
    let mut y = 0i64;
    for (i, digit) in quadkey.bytes().enumerate() {
        let mask = 1i64 << (zoom - 1 - i);
        match digit {
            b'0' => {}
            b'1' => x |= mask,
            b'2' => y |= mask,
            b'3' => {
                x |= mask;
                y |= mask;
            }
            _ => return Err(RangeError::QuadkeyDigit(quadkey.to_string())),
        }
    }
    Ok(Google::new(x, y, zoom as u8))
}

/// TMS tile of a quadkey
pub fn quadkey_to_tile(quadkey: &str) -> Result<Tile> {
    google_to_tile(quadkey_to_google(quadkey)?)
}

/// Quadkey of a XYZ tile
pub fn google_to_quadkey(google: Google) -> Result<String> {
    tile_to_quadkey(google_to_tile(google)?)
}

/// Output adressing scheme for tile listings
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum Scheme {
    Tms,
    Google,
    Quadkey,
}

impl Scheme {
    /// Formats a TMS tile in this scheme (`zoom/x/y` or quadkey)
    pub fn format(&self, tile: Tile) -> Result<String> {
        match self {
            Scheme::Tms => Ok(tile.to_string()),
            Scheme::Google => tile_to_google(tile).map(|google| google.to_string()),
            Scheme::Quadkey => tile_to_quadkey(tile),
        }
    }
}

impl FromStr for Scheme {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match &s.to_lowercase() as &str {
            "tms" => Ok(Scheme::Tms),
            "google" | "xyz" => Ok(Scheme::Google),
            "quadkey" => Ok(Scheme::Quadkey),
            _ => Err(format!("Unexpected enum value '{}'", s)),
        }
    }
}
