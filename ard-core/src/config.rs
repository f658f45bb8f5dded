//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Grid configuration

use crate::error::RasterError;
use ard_grid::{ArdGrid, GeoExtent};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::prelude::*;

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationCfg {
    pub grid: GridCfg,
}

#[derive(Deserialize, Clone, Debug)]
pub struct GridCfg {
    /// Predefined reference grid ("conus", "alaska" or "hawaii")
    pub predefined: Option<String>,
    /// Custom reference grid
    pub user: Option<UserGridCfg>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct UserGridCfg {
    /// Reference extent anchoring the grid. The (xmin,ymax) point is
    /// the grid origin; tile and chip affines are derived from it.
    pub extent: ExtentCfg,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ExtentCfg {
    pub xmin: f64,
    pub ymax: f64,
    pub xmax: f64,
    pub ymin: f64,
}

impl From<&ExtentCfg> for GeoExtent {
    fn from(cfg: &ExtentCfg) -> GeoExtent {
        GeoExtent::new(cfg.xmin, cfg.ymax, cfg.xmax, cfg.ymin)
    }
}

/// Reference grid from a grid configuration entry
pub fn grid_from_config(grid_cfg: &GridCfg) -> Result<ArdGrid, RasterError> {
    if let Some(ref gridname) = grid_cfg.predefined {
        match gridname.as_str() {
            "conus" => Ok(ArdGrid::conus()),
            "alaska" => Ok(ArdGrid::alaska()),
            "hawaii" => Ok(ArdGrid::hawaii()),
            _ => Err(RasterError::Config(format!("Unknown grid '{}'", gridname))),
        }
    } else if let Some(ref usergrid) = grid_cfg.user {
        let extent = GeoExtent::from(&usergrid.extent);
        if extent.xmin > extent.xmax || extent.ymin > extent.ymax {
            return Err(RasterError::Config(format!(
                "Invalid grid extent {:?}",
                extent
            )));
        }
        Ok(ArdGrid::from_extent(extent))
    } else {
        Err(RasterError::Config("Invalid grid definition".to_string()))
    }
}

/// Read and parse a TOML configuration file
pub fn read_config<T: DeserializeOwned>(path: &str) -> Result<T, RasterError> {
    let mut file = File::open(path)
        .map_err(|_| RasterError::Config(format!("Could not find config file '{}'", path)))?;
    let mut config_toml = String::new();
    file.read_to_string(&mut config_toml).map_err(|err| {
        RasterError::Config(format!("Error while reading config file: [{}]", err))
    })?;

    parse_config(config_toml, path)
}

/// Parse a TOML configuration document
pub fn parse_config<T: DeserializeOwned>(config_toml: String, path: &str) -> Result<T, RasterError> {
    toml::from_str::<T>(&config_toml)
        .map_err(|err| RasterError::Config(format!("{} - {}", path, err)))
}
