//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Bounding box conversions

use crate::error::Result;
use crate::mercator::{
    lng_lat_to_meters, meters_to_lng_lat, pixels_to_meters, round_to, MAX_LATITUDE, TILE_SIZE,
};
use crate::tile::google_to_tile;
use crate::types::{BBox, Google, LngLat, Meters, Pixels, Tile};
use crate::validate::validate_tile;

/// Extent of the zoom level 0 tile in degrees
pub const WORLD_BBOX: BBox = BBox {
    west: -180.0,
    south: -MAX_LATITUDE,
    east: 180.0,
    north: MAX_LATITUDE,
};

/// Center of a bbox, rounded to 6 decimals. Corner order does not matter.
pub fn bbox_to_center(bbox: &BBox) -> LngLat {
    let lng = (bbox.west - bbox.east) / 2.0 + bbox.east;
    let lat = (bbox.south - bbox.north) / 2.0 + bbox.north;
    LngLat::new(round_to(lng, 6), round_to(lat, 6))
}

/// Maximum extent of one or more bboxes
pub fn max_bbox(bboxes: &[BBox]) -> Option<BBox> {
    let (first, rest) = bboxes.split_first()?;
    Some(rest.iter().fold(*first, |acc, bbox| BBox {
        west: acc.west.min(bbox.west),
        south: acc.south.min(bbox.south),
        east: acc.east.max(bbox.east),
        north: acc.north.max(bbox.north),
    }))
}

/// Projects the south west and north east corner of a degree bbox to meters
pub fn bbox_to_meters(bbox: &BBox) -> Result<BBox> {
    let min = lng_lat_to_meters(LngLat::new(bbox.west, bbox.south))?;
    let max = lng_lat_to_meters(LngLat::new(bbox.east, bbox.north))?;
    Ok(BBox::new(min.x, min.y, max.x, max.y))
}

/// Extent of a TMS tile in meters
pub fn tile_to_bbox_meters(tile: Tile) -> Result<BBox> {
    let Tile { x, y, zoom } = validate_tile(tile)?;
    let (tx, ty) = (x as f64, y as f64);
    let min = pixels_to_meters(Pixels::new(tx * TILE_SIZE, ty * TILE_SIZE, zoom));
    let max = pixels_to_meters(Pixels::new(
        (tx + 1.0) * TILE_SIZE,
        (ty + 1.0) * TILE_SIZE,
        zoom,
    ));
    Ok(BBox::new(min.x, min.y, max.x, max.y))
}

/// Extent of a TMS tile in degrees
pub fn tile_to_bbox(tile: Tile) -> Result<BBox> {
    let tile = validate_tile(tile)?;
    if tile.zoom == 0 {
        return Ok(WORLD_BBOX);
    }
    let bbox = tile_to_bbox_meters(tile)?;
    let min = meters_to_lng_lat(Meters::new(bbox.west, bbox.south));
    let max = meters_to_lng_lat(Meters::new(bbox.east, bbox.north));
    Ok(BBox::new(min.lng, min.lat, max.lng, max.lat))
}

/// Extent of a XYZ tile in meters
pub fn google_to_bbox_meters(google: Google) -> Result<BBox> {
    tile_to_bbox_meters(google_to_tile(google)?)
}

/// Extent of a XYZ tile in degrees
pub fn google_to_bbox(google: Google) -> Result<BBox> {
    tile_to_bbox(google_to_tile(google)?)
}
