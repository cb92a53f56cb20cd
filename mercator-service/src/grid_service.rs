//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::config::ApplicationCfg;
use crate::Config;
use mercator_grid::{
    grid, grid_bulk, grid_count, grid_levels, validate_zoom, BBox, GridLevel, Scheme, MAX_LATITUDE,
    WORLD_BBOX,
};
use pbr::ProgressBar;
use std::io::{stderr, Stderr, Write};

/// Tile listing for an extent and zoom range
#[derive(Clone, Debug)]
pub struct GridService {
    /// Extent in geographic degrees
    pub extent: BBox,
    pub minzoom: u8,
    pub maxzoom: u8,
    pub scheme: Scheme,
    pub bulk_size: Option<usize>,
}

impl GridService {
    pub fn new(extent: Option<BBox>, minzoom: u8, maxzoom: u8, scheme: Scheme) -> GridService {
        let extent = match extent {
            Some(extent) if extent != WORLD_BBOX => clamp_extent(extent),
            _ => {
                warn!("Listing tiles of the full globe, please fill in the extent");
                WORLD_BBOX
            }
        };
        GridService {
            extent,
            minzoom,
            maxzoom,
            scheme,
            bulk_size: None,
        }
    }
    /// Tile limits for each zoom level
    pub fn levels(&self) -> Result<Vec<GridLevel>, String> {
        grid_levels(&self.extent, self.minzoom, self.maxzoom).map_err(|e| e.to_string())
    }
    /// Number of tiles in the listing
    pub fn count(&self) -> Result<u64, String> {
        grid_count(&self.extent, self.minzoom, self.maxzoom).map_err(|e| e.to_string())
    }
    fn progress_bar(&self, msg: &str, level: &GridLevel) -> ProgressBar<Stderr> {
        let mut pb = ProgressBar::on(stderr(), level.count());
        pb.message(msg);
        pb.show_speed = false;
        pb.show_percent = false;
        pb.show_time_left = false;
        pb
    }
    /// Write one tile per line, returns the number of tiles written
    pub fn generate<W: Write>(&self, out: &mut W, progress: bool) -> Result<u64, String> {
        let levels = self.levels()?;
        let tiles = grid(&self.extent, self.minzoom, self.maxzoom).map_err(|e| e.to_string())?;
        let mut pb: Option<ProgressBar<Stderr>> = None;
        let mut pb_z = None;
        let mut tileno: u64 = 0;
        for tile in tiles {
            if progress && pb_z != Some(tile.zoom) {
                pb_z = Some(tile.zoom);
                let level = &levels[(tile.zoom - self.minzoom) as usize];
                debug!("level {}: {:?}", tile.zoom, level);
                if let Some(mut pb) = pb.take() {
                    pb.finish();
                }
                let mut bar = self.progress_bar(&format!("Level {}: ", tile.zoom), level);
                bar.tick();
                pb = Some(bar);
            }
            let line = self.scheme.format(tile).map_err(|e| e.to_string())?;
            writeln!(out, "{}", line).map_err(|e| format!("Error writing tile list: {}", e))?;
            tileno += 1;
            if let Some(ref mut pb) = pb {
                pb.inc();
            }
        }
        if let Some(mut pb) = pb {
            pb.finish_print("");
        }
        info!("{} tiles written", tileno);
        Ok(tileno)
    }
    /// Write batches of `size` tiles, one batch per line, returns the number of batches
    pub fn generate_bulk<W: Write>(&self, out: &mut W, size: usize) -> Result<u64, String> {
        let batches = grid_bulk(&self.extent, self.minzoom, self.maxzoom, size)
            .map_err(|e| e.to_string())?;
        let mut batchno: u64 = 0;
        for batch in batches {
            let line = batch
                .into_iter()
                .map(|tile| self.scheme.format(tile))
                .collect::<Result<Vec<String>, _>>()
                .map_err(|e| e.to_string())?
                .join(" ");
            writeln!(out, "{}", line).map_err(|e| format!("Error writing tile list: {}", e))?;
            batchno += 1;
        }
        info!("{} batches written", batchno);
        Ok(batchno)
    }
}

/// Restrict latitudes to the band covered by the grid
fn clamp_extent(extent: BBox) -> BBox {
    let clamp = |lat: f64| lat.max(-MAX_LATITUDE).min(MAX_LATITUDE);
    let clamped = BBox::new(
        extent.west,
        clamp(extent.south),
        extent.east,
        clamp(extent.north),
    );
    if clamped != extent {
        warn!(
            "Extent {:?} exceeds the Mercator latitude range, using {:?}",
            extent, clamped
        );
    }
    clamped
}

impl<'a> Config<'a, ApplicationCfg> for GridService {
    fn from_config(config: &ApplicationCfg) -> Result<Self, String> {
        let grid_cfg = &config.grid;
        let minzoom = validate_zoom(grid_cfg.minzoom.unwrap_or(0) as i64)
            .map_err(|e| format!("Invalid minzoom - {}", e))?;
        let maxzoom = validate_zoom(grid_cfg.maxzoom.unwrap_or(22) as i64)
            .map_err(|e| format!("Invalid maxzoom - {}", e))?;
        let scheme = match grid_cfg.scheme {
            Some(ref scheme) => scheme.parse::<Scheme>()?,
            None => Scheme::Google,
        };
        if grid_cfg.bulk_size == Some(0) {
            return Err("bulk_size must be greater than 0".to_string());
        }
        let mut service = GridService::new(
            grid_cfg.extent.as_ref().map(BBox::from),
            minzoom,
            maxzoom,
            scheme,
        );
        service.bulk_size = grid_cfg.bulk_size;
        Ok(service)
    }
    fn gen_config() -> String {
        let toml = r#"# mercator-grid configuration
[grid]
# Extent in geographic degrees
extent = { minx = -180.0, miny = -85.05112877980659, maxx = 180.0, maxy = 85.05112877980659 }
minzoom = 0
maxzoom = 22
# Tile adressing scheme: tms, xyz or quadkey
scheme = "xyz"
# Number of tiles per output line
#bulk_size = 1000
"#;
        toml.to_string()
    }
}
