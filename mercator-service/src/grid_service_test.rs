//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::config::{parse_config, read_config, ApplicationCfg, Config};
use crate::grid_service::GridService;
use mercator_grid::{BBox, GridLevel, Scheme, MAX_LATITUDE, WORLD_BBOX};

fn ottawa(scheme: Scheme) -> GridService {
    GridService::new(Some(BBox::new(-75.01, 45.0, -74.98, 45.02)), 13, 14, scheme)
}

fn listing(service: &GridService) -> Vec<String> {
    let mut out = Vec::new();
    let count = service.generate(&mut out, false).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<String> = text.lines().map(|l| l.to_string()).collect();
    assert_eq!(lines.len() as u64, count);
    lines
}

#[test]
fn test_generate_tms() {
    assert_eq!(
        listing(&ottawa(Scheme::Tms)),
        vec![
            "13/2389/5245",
            "14/4778/10490",
            "14/4779/10490",
            "14/4778/10491",
            "14/4779/10491",
        ]
    );
}

#[test]
fn test_generate_xyz() {
    assert_eq!(
        listing(&ottawa(Scheme::Google)),
        vec![
            "13/2389/2946",
            "14/4778/5893",
            "14/4779/5893",
            "14/4778/5892",
            "14/4779/5892",
        ]
    );
}

#[test]
fn test_generate_quadkey() {
    assert_eq!(
        listing(&ottawa(Scheme::Quadkey)),
        vec![
            "0302321010121",
            "03023210101212",
            "03023210101213",
            "03023210101210",
            "03023210101211",
        ]
    );
}

#[test]
fn test_generate_with_progress() {
    let service = ottawa(Scheme::Tms);
    let mut out = Vec::new();
    assert_eq!(service.generate(&mut out, true), Ok(5));
    assert_eq!(String::from_utf8(out).unwrap().lines().count(), 5);
}

#[test]
fn test_generate_bulk() {
    let service = ottawa(Scheme::Tms);
    let mut out = Vec::new();
    assert_eq!(service.generate_bulk(&mut out, 2), Ok(3));
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "13/2389/5245 14/4778/10490\n14/4779/10490 14/4778/10491\n14/4779/10491\n"
    );

    let mut out = Vec::new();
    assert!(service.generate_bulk(&mut out, 0).is_err());
    assert!(out.is_empty());
}

#[test]
fn test_levels() {
    let service = ottawa(Scheme::Tms);
    assert_eq!(
        service.levels(),
        Ok(vec![
            GridLevel {
                columns: 2389..2390,
                rows: 5245..5246,
                zoom: 13
            },
            GridLevel {
                columns: 4778..4780,
                rows: 10490..10492,
                zoom: 14
            },
        ])
    );
    assert_eq!(service.count(), Ok(5));
}

#[test]
fn test_full_globe() {
    let service = GridService::new(None, 0, 2, Scheme::Google);
    assert_eq!(service.extent, WORLD_BBOX);
    assert_eq!(service.count(), Ok(21));

    // polar latitudes are clamped to the grid
    let service = GridService::new(Some(BBox::new(-180.0, -90.0, 180.0, 90.0)), 0, 2, Scheme::Tms);
    assert_eq!(service.extent.south, -MAX_LATITUDE);
    assert_eq!(service.extent.north, MAX_LATITUDE);
    assert_eq!(service.count(), Ok(21));
    assert_eq!(listing(&service).last().map(|l| l.as_str()), Some("2/3/3"));
}

#[test]
fn test_from_config() {
    let config: ApplicationCfg = read_config("src/test/example.toml").unwrap();
    let service = GridService::from_config(&config).unwrap();
    assert_eq!(service.extent, BBox::new(-75.01, 45.0, -74.98, 45.02));
    assert_eq!(service.minzoom, 13);
    assert_eq!(service.maxzoom, 14);
    assert_eq!(service.scheme, Scheme::Tms);
    assert_eq!(service.bulk_size, Some(2));
    assert_eq!(service.count(), Ok(5));
}

#[test]
fn test_config_errors() {
    let parse = |toml: &str| -> Result<GridService, String> {
        let config: ApplicationCfg = parse_config(toml.to_string(), "")?;
        GridService::from_config(&config)
    };
    assert_eq!(
        parse("[grid]\nscheme = \"wmts\"").err(),
        Some("Unexpected enum value 'wmts'".to_string())
    );
    assert_eq!(
        parse("[grid]\nmaxzoom = 31").err(),
        Some("Invalid maxzoom - <zoom> cannot be greater than 30, got 31".to_string())
    );
    assert!(parse("[grid]\nbulk_size = 0").is_err());
    assert!(parse("[grid]\nextent = { minx = -200.0, miny = 0.0, maxx = 0.0, maxy = 10.0 }")
        .unwrap()
        .count()
        .is_err());

    let service = parse("[grid]").unwrap();
    assert_eq!(service.extent, WORLD_BBOX);
    assert_eq!((service.minzoom, service.maxzoom), (0, 22));
    assert_eq!(service.scheme, Scheme::Google);
}
