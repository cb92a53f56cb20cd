//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

#[macro_use]
extern crate clap;
#[macro_use]
extern crate log;

use clap::{App, AppSettings, ArgMatches, SubCommand};
use dotenv::dotenv;
use env_logger::Builder;
use log::Record;
use mercator_grid::{
    google_to_quadkey, google_to_tile, hash, lng_lat_to_meters, meters_to_lng_lat,
    meters_to_pixels, meters_to_tile, pixels_to_tile, quadkey_to_google, tile_to_bbox,
    tile_to_bbox_meters, tile_to_google, tile_to_quadkey, validate_meters, validate_tile,
    validate_zoom, BBox, Google, LngLat, Meters, Scheme, Tile,
};
use mercator_service::{
    parse_config, read_config, ApplicationCfg, Config, ExtentCfg, GridService, DEFAULT_CONFIG,
};
use std::env;
use std::io::{self, BufWriter, Write};
use std::process;
use time;

fn init_logger(args: &ArgMatches<'_>) {
    let mut builder = Builder::new();
    builder.format(|buf, record: &Record<'_>| {
        let t = time::now();
        writeln!(
            buf,
            "{}.{:03} {} {}",
            time::strftime("%Y-%m-%d %H:%M:%S", &t).unwrap_or_default(),
            t.tm_nsec / 1000_000,
            record.level(),
            record.args()
        )
    });

    let rust_log = match (args.value_of("loglevel"), env::var("RUST_LOG")) {
        (None, Ok(rust_log_env)) => rust_log_env,
        (loglevel, _) => loglevel.unwrap_or("info").to_string(),
    };
    builder.parse_filters(&rust_log);

    builder.init();
}

/// Parse a comma separated list of numbers with an expected length
fn parse_numlist<T: std::str::FromStr>(
    args: &ArgMatches<'_>,
    name: &str,
    len: usize,
) -> Result<Option<Vec<T>>, String> {
    let numlist = match args.value_of(name) {
        Some(numlist) => numlist,
        None => return Ok(None),
    };
    let values = numlist
        .split(',')
        .map(|v| v.trim().parse::<T>())
        .collect::<Result<Vec<T>, _>>()
        .map_err(|_| format!("Error parsing '{}' as list of numbers", name))?;
    if values.len() != len {
        return Err(format!(
            "Error parsing '{}': expected {} values, got {}",
            name,
            len,
            values.len()
        ));
    }
    Ok(Some(values))
}

fn parse_arg<T: std::str::FromStr>(args: &ArgMatches<'_>, name: &str) -> Result<Option<T>, String> {
    args.value_of(name)
        .map(|s| {
            s.parse::<T>()
                .map_err(|_| format!("Error parsing '{}' value '{}'", name, s))
        })
        .transpose()
}

fn required<T>(value: Option<T>, name: &str) -> Result<T, String> {
    value.ok_or_else(|| format!("Missing '{}' argument", name))
}

fn parse_zoom(args: &ArgMatches<'_>) -> Result<Option<u8>, String> {
    parse_arg::<i64>(args, "zoom")?
        .map(|zoom| validate_zoom(zoom).map_err(|e| e.to_string()))
        .transpose()
}

fn fmt_bbox(bbox: &BBox) -> String {
    format!("{},{},{},{}", bbox.west, bbox.south, bbox.east, bbox.north)
}

fn lnglat(args: &ArgMatches<'_>) -> Result<(), String> {
    let coords: Vec<f64> = required(parse_numlist(args, "lnglat", 2)?, "lnglat")?;
    let lnglat = LngLat::new(coords[0], coords[1]);
    let zoom = required(parse_zoom(args)?, "zoom")?;
    let meters = lng_lat_to_meters(lnglat).map_err(|e| e.to_string())?;
    let pixels = meters_to_pixels(meters, zoom);
    let tile = pixels_to_tile(pixels);
    println!("meters: {},{}", meters.x, meters.y);
    println!("pixels: {},{}", pixels.x, pixels.y);
    println!("tile: {}", tile);
    match tile_to_google(tile) {
        Ok(google) => {
            println!("google: {}", google);
            println!("quadkey: {}", google_to_quadkey(google).map_err(|e| e.to_string())?);
        }
        Err(e) => warn!("{}", e),
    }
    Ok(())
}

fn meters(args: &ArgMatches<'_>) -> Result<(), String> {
    let coords: Vec<f64> = required(parse_numlist(args, "meters", 2)?, "meters")?;
    let meters = validate_meters(Meters::new(coords[0], coords[1]));
    let lnglat = meters_to_lng_lat(meters);
    println!("lnglat: {},{}", lnglat.lng, lnglat.lat);
    if let Some(zoom) = parse_zoom(args)? {
        let pixels = meters_to_pixels(meters, zoom);
        println!("pixels: {},{}", pixels.x, pixels.y);
        println!("tile: {}", meters_to_tile(meters, zoom));
    }
    Ok(())
}

fn tile(args: &ArgMatches<'_>) -> Result<(), String> {
    let xyz: Vec<i64> = required(parse_numlist(args, "tile", 3)?, "tile")?;
    let zoom = validate_zoom(xyz[2]).map_err(|e| e.to_string())?;
    let scheme = parse_arg::<Scheme>(args, "scheme")?.unwrap_or(Scheme::Tms);
    let tile = match scheme {
        Scheme::Tms => validate_tile(Tile::new(xyz[0], xyz[1], zoom)),
        Scheme::Google => google_to_tile(Google::new(xyz[0], xyz[1], zoom)),
        Scheme::Quadkey => return Err("Use the quadkey subcommand for quadkeys".to_string()),
    }
    .map_err(|e| e.to_string())?;
    let google = tile_to_google(tile).map_err(|e| e.to_string())?;
    println!("tile: {}", tile);
    println!("google: {}", google);
    println!("quadkey: {}", tile_to_quadkey(tile).map_err(|e| e.to_string())?);
    println!("hash: {}", hash(tile).map_err(|e| e.to_string())?);
    println!("bbox: {}", fmt_bbox(&tile_to_bbox(tile).map_err(|e| e.to_string())?));
    println!(
        "bbox meters: {}",
        fmt_bbox(&tile_to_bbox_meters(tile).map_err(|e| e.to_string())?)
    );
    Ok(())
}

fn quadkey(args: &ArgMatches<'_>) -> Result<(), String> {
    let quadkey = required(args.value_of("quadkey"), "quadkey")?;
    let google = quadkey_to_google(quadkey).map_err(|e| e.to_string())?;
    let tile = google_to_tile(google).map_err(|e| e.to_string())?;
    println!("tile: {}", tile);
    println!("google: {}", google);
    println!("bbox: {}", fmt_bbox(&tile_to_bbox(tile).map_err(|e| e.to_string())?));
    Ok(())
}

/// Configuration file merged with command line overrides
fn grid_config(args: &ArgMatches<'_>) -> Result<ApplicationCfg, String> {
    let mut config: ApplicationCfg = match args.value_of("config") {
        Some(path) => read_config(path)?,
        None => parse_config(DEFAULT_CONFIG.to_string(), "")?,
    };
    if let Some(arr) = parse_numlist::<f64>(args, "extent", 4)? {
        config.grid.extent = Some(ExtentCfg {
            minx: arr[0],
            miny: arr[1],
            maxx: arr[2],
            maxy: arr[3],
        });
    }
    if let Some(minzoom) = parse_arg::<u8>(args, "minzoom")? {
        config.grid.minzoom = Some(minzoom);
    }
    if let Some(maxzoom) = parse_arg::<u8>(args, "maxzoom")? {
        config.grid.maxzoom = Some(maxzoom);
    }
    if let Some(scheme) = args.value_of("scheme") {
        config.grid.scheme = Some(scheme.to_string());
    }
    if let Some(bulk_size) = parse_arg::<usize>(args, "bulk")? {
        config.grid.bulk_size = Some(bulk_size);
    }
    Ok(config)
}

fn grid(args: &ArgMatches<'_>) -> Result<(), String> {
    let config = grid_config(args)?;
    let service = GridService::from_config(&config)?;
    let count = parse_arg::<bool>(args, "count")?.unwrap_or(false);
    if count {
        println!("{}", service.count()?);
        return Ok(());
    }
    let progress = parse_arg::<bool>(args, "progress")?.unwrap_or(false);
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match service.bulk_size {
        Some(size) => service.generate_bulk(&mut out, size)?,
        None => service.generate(&mut out, progress)?,
    };
    out.flush()
        .map_err(|e| format!("Error writing tile list: {}", e))
}

fn main() {
    dotenv().ok();
    // http://kbknapp.github.io/clap-rs/clap/
    let mut app = App::new("global_mercator")
        .version(crate_version!())
        .about("Spherical Mercator coordinate conversions and tile grids")
        .subcommand(SubCommand::with_name("lnglat")
                        .setting(AppSettings::AllowLeadingHyphen)
                        .args_from_usage("--lnglat=<LNG,LAT> 'Geographic coordinate'
                                              --zoom=<LEVEL> 'Zoom level'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'")
                        .about("Convert a geographic coordinate into meters, pixels and tiles"))
        .subcommand(SubCommand::with_name("meters")
                        .setting(AppSettings::AllowLeadingHyphen)
                        .args_from_usage("--meters=<X,Y> 'Spherical Mercator coordinate'
                                              --zoom=[LEVEL] 'Zoom level for pixels and tile'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'")
                        .about("Convert a Spherical Mercator coordinate"))
        .subcommand(SubCommand::with_name("tile")
                        .setting(AppSettings::AllowLeadingHyphen)
                        .args_from_usage("--tile=<X,Y,Z> 'Tile index'
                                              --scheme=[tms|google] 'Tile scheme of the index (Default: tms)'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'")
                        .about("Show bounds and alternative adresses of a tile"))
        .subcommand(SubCommand::with_name("quadkey")
                        .args_from_usage("--quadkey=<KEY> 'Quadkey'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'")
                        .about("Decode a quadkey"))
        .subcommand(SubCommand::with_name("grid")
                        .setting(AppSettings::AllowLeadingHyphen)
                        .args_from_usage("-c, --config=[FILE] 'Load from custom config file'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'
                                              --extent=[minx,miny,maxx,maxy] 'Extent in geographic degrees'
                                              --minzoom=[LEVEL] 'Minimum zoom level'
                                              --maxzoom=[LEVEL] 'Maximum zoom level'
                                              --scheme=[tms|xyz|quadkey] 'Output tile scheme'
                                              --bulk=[SIZE] 'Number of tiles per output line'
                                              --count=[false|true] 'Only print the number of tiles'
                                              --progress=[false|true] 'Show progress bar'")
                        .about("List the tiles covering an extent"))
        .subcommand(SubCommand::with_name("genconfig")
                        .args_from_usage("--loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'")
                        .about("Generate configuration template"));

    let result = match app.get_matches_from_safe_borrow(env::args()) {
        //app.get_matches() prohibits later call of app.print_help()
        Result::Err(e) => {
            println!("{}", e);
            Ok(())
        }
        Result::Ok(matches) => match matches.subcommand() {
            (name, Some(sub_m)) => {
                init_logger(sub_m);
                match name {
                    "lnglat" => lnglat(sub_m),
                    "meters" => meters(sub_m),
                    "tile" => tile(sub_m),
                    "quadkey" => quadkey(sub_m),
                    "grid" => grid(sub_m),
                    _ => {
                        println!("{}", GridService::gen_config());
                        Ok(())
                    }
                }
            }
            _ => {
                let _ = app.print_help();
                println!("");
                Ok(())
            }
        },
    };
    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}
