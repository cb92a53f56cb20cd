//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Validation errors

/// Range error raised by validation and decoding.
///
/// All variants describe an input outside of its accepted domain. They carry
/// no state besides the offending value and are only distinguished by message.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum RangeError {
    #[error("LngLat <lat> must be within -90 to 90 degrees, got {0}")]
    Latitude(f64),

    #[error("LngLat <lng> must be within -180 to 180 degrees, got {0}")]
    Longitude(f64),

    #[error("<zoom> cannot be less than 0, got {0}")]
    ZoomNegative(i64),

    #[error("<zoom> cannot be greater than 30, got {0}")]
    ZoomTooLarge(i64),

    #[error("Tile <x> must not be less than 0, got {0}")]
    TileNegativeX(i64),

    #[error("Tile <y> must not be less than 0, got {0}")]
    TileNegativeY(i64),

    #[error("Illegal parameters for tile [{x}, {y}, {zoom}]")]
    TileOutOfBounds { x: i64, y: i64, zoom: u8 },

    #[error("Invalid Quadkey digit sequence '{0}'")]
    QuadkeyDigit(String),

    #[error("Quadkey '{0}' is longer than 30 levels")]
    QuadkeyLength(String),

    #[error("Bulk size must be greater than 0")]
    BulkSize,
}

pub type Result<T> = std::result::Result<T, RangeError>;
