//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

pub mod config;
pub mod error;
pub mod extract;
pub mod raster;

pub use crate::config::{grid_from_config, parse_config, read_config, ApplicationCfg, GridCfg};
pub use crate::error::RasterError;
pub use crate::extract::{
    extract_by_geo_extent, extract_by_rowcol_extent, extract_chip, full_extent,
};
pub use crate::raster::{MemoryRaster, PixelWindow, RasterSource};

#[cfg(test)]
mod config_test;
