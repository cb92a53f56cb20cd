//! A library for Spherical Mercator (EPSG:3857) coordinate conversions
//!
//! ## Coordinate conversions
//!
//! ```rust
//! use mercator_grid::{lng_lat_to_meters, meters_to_tile, tile_to_google, LngLat, Google};
//!
//! let meters = lng_lat_to_meters(LngLat::new(-75.000057, 44.999888)).unwrap();
//! let tile = meters_to_tile(meters, 13);
//! assert_eq!(tile_to_google(tile).unwrap(), Google::new(2389, 2946, 13));
//! ```
//!
//! ## Quadkeys
//!
//! ```rust
//! use mercator_grid::{quadkey_to_tile, tile_to_quadkey, Tile};
//!
//! let quadkey = tile_to_quadkey(Tile::new(2389, 5245, 13)).unwrap();
//! assert_eq!(quadkey, "0302321010121");
//! assert_eq!(quadkey_to_tile(&quadkey).unwrap(), Tile::new(2389, 5245, 13));
//! assert!(quadkey_to_tile("030486861").is_err());
//! ```
//!
//! ## Grid iterators
//!
//! ```rust
//! use mercator_grid::{grid, grid_count, BBox};
//!
//! let bbox = BBox::new(-75.1, 44.9, -74.9, 45.1);
//! let count = grid_count(&bbox, 0, 10).unwrap();
//! let tiles = grid(&bbox, 0, 10).unwrap();
//! assert_eq!(tiles.count() as u64, count);
//! for tile in grid(&bbox, 0, 2).unwrap() {
//!     println!("Tile {}", tile);
//! }
//! ```

#[macro_use]
extern crate log;

mod bbox;
mod error;
mod grid;
mod grid_iterator;
mod mercator;
mod tile;
mod types;
mod validate;

#[cfg(test)]
mod mercator_test;

pub use bbox::{
    bbox_to_center, bbox_to_meters, google_to_bbox, google_to_bbox_meters, max_bbox,
    tile_to_bbox, tile_to_bbox_meters, WORLD_BBOX,
};
pub use error::{RangeError, Result};
pub use grid::{grid, grid_bulk, grid_count, grid_levels, GridLevel};
pub use grid_iterator::{GridBulk, GridIterator};
pub use mercator::{
    lng_lat_to_google, lng_lat_to_meters, lng_lat_to_tile, meters_to_lng_lat, meters_to_pixels,
    meters_to_tile, pixels_to_meters, pixels_to_tile, range, resolution, EARTH_RADIUS,
    INITIAL_RESOLUTION, MAX_LATITUDE, MAX_ZOOM, ORIGIN_SHIFT, TILE_SIZE,
};
pub use tile::{
    google_to_quadkey, google_to_tile, hash, quadkey_to_google, quadkey_to_tile, tile_to_google,
    tile_to_quadkey, Scheme,
};
pub use types::{BBox, Google, LngLat, Meters, Pixels, Tile};
pub use validate::{
    latitude, longitude, normalize_lng_lat, valid_tile, validate_lng_lat, validate_meters,
    validate_pixels, validate_tile, validate_zoom, wrap_tile,
};
