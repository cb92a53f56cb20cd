//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

pub mod config;
pub mod grid_service;

pub use self::config::{
    parse_config, read_config, ApplicationCfg, Config, ExtentCfg, GridCfg, DEFAULT_CONFIG,
};
pub use self::grid_service::GridService;

#[cfg(test)]
mod grid_service_test;
