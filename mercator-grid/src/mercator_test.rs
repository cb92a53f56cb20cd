//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::error::RangeError;
use crate::mercator::*;
use crate::types::{Google, LngLat, Meters, Pixels, Tile};

pub(crate) const ZOOM: u8 = 13;
pub(crate) const TILE: Tile = Tile {
    x: 2389,
    y: 5245,
    zoom: 13,
};
pub(crate) const GOOGLE: Google = Google {
    x: 2389,
    y: 2946,
    zoom: 13,
};
pub(crate) const LNGLAT: LngLat = LngLat {
    lng: -75.00005722045897,
    lat: 44.99988840247,
};
pub(crate) const METERS: Meters = Meters {
    x: -8348968.179247875,
    y: 5621503.917462073,
};
pub(crate) const PIXELS: Pixels = Pixels {
    x: 611669.0,
    y: 1342753.0,
    zoom: 13,
};

pub(crate) fn assert_close(actual: &[f64], expected: &[f64], tolerance: f64) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected) {
        assert!(
            (a - e).abs() <= tolerance,
            "{:?} differs from {:?} by more than {}",
            actual,
            expected,
            tolerance
        );
    }
}

#[test]
fn test_resolutions() {
    assert_close(&[resolution(13)], &[19.109257071294063], 1e-9);
    assert_close(&[resolution(0)], &[156543.03392804097], 1e-6);
    // each level halves the pixel width
    for z in 1..=MAX_ZOOM {
        assert_eq!(resolution(z) * 2.0, resolution(z - 1));
    }
}

#[test]
fn test_range() {
    assert_eq!(range(3, None, None), vec![0, 1, 2]);
    assert_eq!(range(0, Some(3), None), vec![0, 1, 2]);
    assert_eq!(range(3, Some(0), Some(-1)), vec![3, 2, 1]);
    assert_eq!(range(3, Some(6), None), vec![3, 4, 5]);
    assert_eq!(range(6, Some(3), None), vec![6, 5, 4]);
    assert_eq!(range(0, Some(10), Some(3)), vec![0, 3, 6, 9]);
    assert_eq!(range(0, Some(3), Some(-1)), Vec::<i64>::new());
    assert_eq!(range(5, Some(5), None), Vec::<i64>::new());

    // distances beyond i64 give an empty progression
    assert_eq!(range(i64::MAX, Some(i64::MIN), None), Vec::<i64>::new());
    assert_eq!(range(i64::MIN, Some(i64::MAX), None), Vec::<i64>::new());
    assert_eq!(range(i64::MIN, Some(0), Some(-1)), Vec::<i64>::new());
    assert_eq!(
        range(i64::MAX - 2, Some(i64::MAX), None),
        vec![i64::MAX - 2, i64::MAX - 1]
    );
    assert_eq!(
        range(i64::MIN + 2, Some(i64::MIN), None),
        vec![i64::MIN + 2, i64::MIN + 1]
    );
}

#[test]
fn test_lnglat_to_meters() {
    let meters = lng_lat_to_meters(LNGLAT).unwrap();
    assert_close(&[meters.x, meters.y], &[METERS.x, METERS.y], 0.1);

    let meters = lng_lat_to_meters(LngLat::new(126.0, 37.0)).unwrap();
    assert_close(&[meters.x, meters.y], &[14026255.8, 4439106.7], 0.11);

    assert_eq!(
        lng_lat_to_meters(LngLat::new(-120.0, 220.0)),
        Err(RangeError::Latitude(220.0))
    );
    assert_eq!(
        lng_lat_to_meters(LngLat::new(-220.0, 45.0)),
        Err(RangeError::Longitude(-220.0))
    );
}

#[test]
fn test_polar_meters() {
    let south = lng_lat_to_meters(LngLat::new(-180.0, -90.0)).unwrap();
    assert_eq!(south.x, -20037508.3);
    assert!(south.y.is_infinite() && south.y < 0.0);

    let north = lng_lat_to_meters(LngLat::new(180.0, 90.0)).unwrap();
    assert!(north.y > ORIGIN_SHIFT);
}

#[test]
fn test_meters_to_lnglat() {
    let lnglat = meters_to_lng_lat(METERS);
    assert_close(&[lnglat.lng, lnglat.lat], &[-75.000057, 44.999888], 1e-9);

    let lnglat = meters_to_lng_lat(Meters::new(14026255.0, 4439106.0));
    assert_close(&[lnglat.lng, lnglat.lat], &[126.0, 37.0], 1e-4);

    let lnglat = meters_to_lng_lat(Meters::new(ORIGIN_SHIFT, ORIGIN_SHIFT));
    assert_close(&[lnglat.lng, lnglat.lat], &[180.0, MAX_LATITUDE], 1e-6);
}

#[test]
fn test_projection_roundtrip() {
    let mut lat = -85.0;
    while lat <= 85.0 {
        let mut lng = -180.0;
        while lng <= 180.0 {
            let lnglat = LngLat::new(lng, lat);
            let back = meters_to_lng_lat(lng_lat_to_meters(lnglat).unwrap());
            assert_close(&[back.lng, back.lat], &[lng, lat], 1e-4);
            lng += 7.25;
        }
        lat += 2.5;
    }
}

#[test]
fn test_pixels() {
    let pixels = meters_to_pixels(METERS, ZOOM);
    assert_eq!(pixels.zoom, ZOOM);
    assert_close(&[pixels.x, pixels.y], &[PIXELS.x, PIXELS.y], 0.01);

    let meters = pixels_to_meters(PIXELS);
    assert_close(&[meters.x, meters.y], &[METERS.x, METERS.y], 0.1);

    // origin is the bottom left corner of the world
    let meters = pixels_to_meters(Pixels::new(0.0, 0.0, 5));
    assert_eq!(meters, Meters::new(-20037508.3, -20037508.3));
}

#[test]
fn test_pixels_to_tile() {
    assert_eq!(pixels_to_tile(PIXELS), TILE);
    assert_eq!(pixels_to_tile(Pixels::new(0.0, 0.0, 0)), Tile::new(0, 0, 0));
    assert_eq!(
        pixels_to_tile(Pixels::new(9999.0, 9999.0, 0)),
        Tile::new(0, 0, 0)
    );
    // tile edges belong to the lower tile, negative pixels clamp to 0
    assert_eq!(pixels_to_tile(Pixels::new(256.0, 257.0, 3)), Tile::new(0, 1, 3));
    assert_eq!(pixels_to_tile(Pixels::new(-300.0, 0.0, 3)), Tile::new(0, 0, 3));
    assert_eq!(
        pixels_to_tile(Pixels::new(0.0, f64::NEG_INFINITY, 3)),
        Tile::new(0, 0, 3)
    );
}

#[test]
fn test_tile_conversions() {
    assert_eq!(lng_lat_to_tile(LNGLAT, ZOOM), Ok(TILE));
    assert_eq!(lng_lat_to_tile(LNGLAT, 0), Ok(Tile::new(0, 0, 0)));
    assert_eq!(
        lng_lat_to_tile(LngLat::new(126.0, 37.0), ZOOM),
        Ok(Tile::new(6963, 5003, 13))
    );

    assert_eq!(lng_lat_to_google(LNGLAT, ZOOM), Ok(GOOGLE));
    assert_eq!(lng_lat_to_google(LNGLAT, 0), Ok(Google::new(0, 0, 0)));
    // zoom level 0 is answered without looking at the coordinate
    assert_eq!(
        lng_lat_to_google(LngLat::new(500.0, 500.0), 0),
        Ok(Google::new(0, 0, 0))
    );
    assert!(lng_lat_to_google(LngLat::new(500.0, 500.0), 1).is_err());
    assert!(lng_lat_to_tile(LngLat::new(500.0, 500.0), 0).is_err());

    assert_eq!(meters_to_tile(METERS, ZOOM), TILE);
    assert_eq!(meters_to_tile(METERS, 0), Tile::new(0, 0, 0));
}
