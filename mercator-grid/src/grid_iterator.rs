//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Grid iterators

use crate::error::{RangeError, Result};
use crate::grid::GridLevel;
use crate::types::Tile;
use std::iter::FusedIterator;

/// Level-by-level iterator, rows in the outer and columns in the inner loop
///
/// Single pass: once exhausted it keeps returning `None`.
pub struct GridIterator {
    levels: Vec<GridLevel>,
    level: usize,
    x: i64,
    y: i64,
    finished: bool,
}

impl GridIterator {
    pub fn new(levels: Vec<GridLevel>) -> GridIterator {
        let mut iter = GridIterator {
            levels,
            level: 0,
            x: 0,
            y: 0,
            finished: false,
        };
        iter.start_level(0);
        iter
    }
    /// Move to the first cell of the next non-empty level starting at `level`
    fn start_level(&mut self, level: usize) {
        self.level = level;
        while let Some(limit) = self.levels.get(self.level) {
            if !limit.is_empty() {
                self.x = limit.columns.start;
                self.y = limit.rows.start;
                return;
            }
            self.level += 1;
        }
        self.finished = true;
    }
}

impl Iterator for GridIterator {
    type Item = Tile;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let limit = &self.levels[self.level];
        let current = Tile::new(self.x, self.y, limit.zoom);
        if self.x < limit.columns.end - 1 {
            self.x += 1;
        } else if self.y < limit.rows.end - 1 {
            self.y += 1;
            self.x = limit.columns.start;
        } else {
            self.start_level(self.level + 1);
        }
        Some(current)
    }
}

impl FusedIterator for GridIterator {}

/// Batches of at most `size` tiles from a [`GridIterator`]
///
/// Only the last batch may be shorter. No empty batches are produced.
pub struct GridBulk {
    tiles: GridIterator,
    size: usize,
}

impl GridBulk {
    /// Fails for a batch size of 0
    pub fn new(tiles: GridIterator, size: usize) -> Result<GridBulk> {
        if size == 0 {
            return Err(RangeError::BulkSize);
        }
        Ok(GridBulk { tiles, size })
    }
}

impl Iterator for GridBulk {
    type Item = Vec<Tile>;

    fn next(&mut self) -> Option<Self::Item> {
        let batch: Vec<Tile> = self.tiles.by_ref().take(self.size).collect();
        if batch.is_empty() {
            None
        } else {
            Some(batch)
        }
    }
}

impl FusedIterator for GridBulk {}

#[cfg(test)]
fn level(zoom: u8, columns: std::ops::Range<i64>, rows: std::ops::Range<i64>) -> GridLevel {
    GridLevel {
        columns,
        rows,
        zoom,
    }
}

#[test]
fn test_row_major_iter() {
    let griditer = GridIterator::new(vec![level(0, 0..1, 0..1), level(1, 0..2, 0..2)]);
    let cells = griditer.collect::<Vec<_>>();
    assert_eq!(
        cells,
        vec![
            Tile::new(0, 0, 0),
            Tile::new(0, 0, 1),
            Tile::new(1, 0, 1),
            Tile::new(0, 1, 1),
            Tile::new(1, 1, 1),
        ]
    );

    let griditer = GridIterator::new(vec![level(3, 2..5, 6..8)]);
    let cells = griditer.map(|t| (t.x, t.y)).collect::<Vec<_>>();
    assert_eq!(
        cells,
        vec![(2, 6), (3, 6), (4, 6), (2, 7), (3, 7), (4, 7)]
    );
}

#[test]
fn test_empty_levels() {
    let griditer = GridIterator::new(Vec::new());
    assert_eq!(griditer.collect::<Vec<_>>(), Vec::<Tile>::new());

    // empty levels are skipped
    let griditer = GridIterator::new(vec![
        level(1, 0..0, 0..2),
        level(2, 1..2, 1..2),
        level(3, 4..4, 4..4),
    ]);
    assert_eq!(griditer.collect::<Vec<_>>(), vec![Tile::new(1, 1, 2)]);
}

#[test]
fn test_fused() {
    let mut griditer = GridIterator::new(vec![level(0, 0..1, 0..1)]);
    assert_eq!(griditer.next(), Some(Tile::new(0, 0, 0)));
    assert_eq!(griditer.next(), None);
    assert_eq!(griditer.next(), None);
}

#[test]
fn test_bulk() {
    let levels = vec![level(1, 0..2, 0..2), level(2, 0..4, 0..4)];
    let batches = GridBulk::new(GridIterator::new(levels.clone()), 6)
        .unwrap()
        .collect::<Vec<_>>();
    assert_eq!(
        batches.iter().map(|b| b.len()).collect::<Vec<_>>(),
        vec![6, 6, 6, 2]
    );
    assert_eq!(batches[0][4], Tile::new(0, 0, 2));

    // exact multiple does not produce a trailing empty batch
    let batches = GridBulk::new(GridIterator::new(levels.clone()), 10)
        .unwrap()
        .collect::<Vec<_>>();
    assert_eq!(
        batches.iter().map(|b| b.len()).collect::<Vec<_>>(),
        vec![10, 10]
    );

    assert_eq!(
        GridBulk::new(GridIterator::new(levels), 0).err(),
        Some(RangeError::BulkSize)
    );
}
