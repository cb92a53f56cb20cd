//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Coordinate value types

use std::fmt;

/// Geographic coordinate in decimal degrees
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    pub fn new(lng: f64, lat: f64) -> LngLat {
        LngLat { lng, lat }
    }
}

/// Spherical Mercator coordinate in meters
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Meters {
    pub x: f64,
    pub y: f64,
}

impl Meters {
    pub fn new(x: f64, y: f64) -> Meters {
        Meters { x, y }
    }
}

/// Pixel coordinate at a zoom level, origin bottom left
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Pixels {
    pub x: f64,
    pub y: f64,
    pub zoom: u8,
}

impl Pixels {
    pub fn new(x: f64, y: f64, zoom: u8) -> Pixels {
        Pixels { x, y, zoom }
    }
}

/// Extent in west, south, east, north order
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct BBox {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl BBox {
    pub fn new(west: f64, south: f64, east: f64, north: f64) -> BBox {
        BBox {
            west,
            south,
            east,
            north,
        }
    }
    /// South west corner
    pub fn min(&self) -> (f64, f64) {
        (self.west, self.south)
    }
    /// North east corner
    pub fn max(&self) -> (f64, f64) {
        (self.east, self.north)
    }
}

impl From<[f64; 4]> for BBox {
    fn from(arr: [f64; 4]) -> BBox {
        BBox::new(arr[0], arr[1], arr[2], arr[3])
    }
}

/// Tile index in TMS adressing scheme (y grows northwards)
///
/// Indices are signed so that invalid input can be represented and rejected
/// by [`validate_tile`](crate::validate_tile).
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct Tile {
    pub x: i64,
    pub y: i64,
    pub zoom: u8,
}

impl Tile {
    pub fn new(x: i64, y: i64, zoom: u8) -> Tile {
        Tile { x, y, zoom }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.zoom, self.x, self.y)
    }
}

/// Tile index in XYZ adressing scheme (y grows southwards)
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct Google {
    pub x: i64,
    pub y: i64,
    pub zoom: u8,
}

impl Google {
    pub fn new(x: i64, y: i64, zoom: u8) -> Google {
        Google { x, y, zoom }
    }
}

impl fmt::Display for Google {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.zoom, self.x, self.y)
    }
}
