//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Tile grid levels covering a bbox

use crate::error::{RangeError, Result};
use crate::grid_iterator::{GridBulk, GridIterator};
use crate::mercator::lng_lat_to_tile;
use crate::types::{BBox, LngLat};
use crate::validate::validate_zoom;
use std::cmp;
use std::ops::Range;

/// Tile columns and rows covering a bbox at one zoom level
#[derive(PartialEq, Clone, Debug)]
pub struct GridLevel {
    /// Tile x indices
    pub columns: Range<i64>,
    /// Tile y indices (TMS)
    pub rows: Range<i64>,
    pub zoom: u8,
}

impl GridLevel {
    /// Number of tiles in this level
    pub fn count(&self) -> u64 {
        let columns = (self.columns.end - self.columns.start).max(0) as u64;
        let rows = (self.rows.end - self.rows.start).max(0) as u64;
        columns * rows
    }
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

/// Tile limits covering `bbox` for every zoom level in `minzoom..=maxzoom`
///
/// The corners are projected independently, so the result does not depend on
/// the order of the bbox corners.
pub fn grid_levels(bbox: &BBox, minzoom: u8, maxzoom: u8) -> Result<Vec<GridLevel>> {
    validate_zoom(minzoom as i64)?;
    validate_zoom(maxzoom as i64)?;
    let (x1, y1) = bbox.min();
    let (x2, y2) = bbox.max();
    (minzoom..=maxzoom)
        .map(|zoom| {
            let t1 = lng_lat_to_tile(LngLat::new(x1, y1), zoom)?;
            let t2 = lng_lat_to_tile(LngLat::new(x2, y2), zoom)?;
            let level = GridLevel {
                columns: cmp::min(t1.x, t2.x)..cmp::max(t1.x, t2.x) + 1,
                rows: cmp::min(t1.y, t2.y)..cmp::max(t1.y, t2.y) + 1,
                zoom,
            };
            debug!("level {}: {:?}", zoom, level);
            Ok(level)
        })
        .collect()
}

/// Lazy iterator over all tiles covering `bbox`
pub fn grid(bbox: &BBox, minzoom: u8, maxzoom: u8) -> Result<GridIterator> {
    Ok(GridIterator::new(grid_levels(bbox, minzoom, maxzoom)?))
}

/// Lazy iterator over batches of at most `size` tiles covering `bbox`
pub fn grid_bulk(bbox: &BBox, minzoom: u8, maxzoom: u8, size: usize) -> Result<GridBulk> {
    if size == 0 {
        return Err(RangeError::BulkSize);
    }
    GridBulk::new(grid(bbox, minzoom, maxzoom)?, size)
}

/// Number of tiles [`grid`] yields, computed without enumerating them
pub fn grid_count(bbox: &BBox, minzoom: u8, maxzoom: u8) -> Result<u64> {
    let count = grid_levels(bbox, minzoom, maxzoom)?
        .iter()
        .map(GridLevel::count)
        .sum();
    Ok(count)
}
