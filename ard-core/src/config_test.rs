//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::config::{grid_from_config, parse_config, ApplicationCfg};
use crate::error::RasterError;
use ard_grid::ArdGrid;

#[test]
fn test_predefined_grid() {
    let toml = r#"
        [grid]
        predefined = "conus"
        "#;
    let config: ApplicationCfg = parse_config(toml.to_string(), "").unwrap();
    let grid = grid_from_config(&config.grid).unwrap();
    assert_eq!(grid, ArdGrid::conus());

    let toml = r#"
        [grid]
        predefined = "alaska"
        "#;
    let config: ApplicationCfg = parse_config(toml.to_string(), "").unwrap();
    assert_eq!(grid_from_config(&config.grid).unwrap(), ArdGrid::alaska());
}

#[test]
fn test_unknown_grid() {
    let toml = r#"
        [grid]
        predefined = "mars"
        "#;
    let config: ApplicationCfg = parse_config(toml.to_string(), "").unwrap();
    assert_eq!(
        grid_from_config(&config.grid),
        Err(RasterError::Config("Unknown grid 'mars'".to_string()))
    );
}

#[test]
fn test_user_grid() {
    let toml = r#"
        [grid.user]
        extent = { xmin = 0.0, ymax = 0.0, xmax = 6000.0, ymin = -6000.0 }
        "#;
    let config: ApplicationCfg = parse_config(toml.to_string(), "").unwrap();
    let grid = grid_from_config(&config.grid).unwrap();
    assert_eq!(grid.extent.xmin, 0.0);
    assert_eq!(grid.tile_affine.to_gdal(), [0.0, 150000.0, 0.0, 0.0, 0.0, -150000.0]);
    assert_eq!(grid.chip_affine.to_gdal(), [0.0, 3000.0, 0.0, 0.0, 0.0, -3000.0]);
}

#[test]
fn test_invalid_user_extent() {
    let toml = r#"
        [grid.user]
        extent = { xmin = 6000.0, ymax = 0.0, xmax = 0.0, ymin = -6000.0 }
        "#;
    let config: ApplicationCfg = parse_config(toml.to_string(), "").unwrap();
    assert!(matches!(
        grid_from_config(&config.grid),
        Err(RasterError::Config(_))
    ));
}

#[test]
fn test_missing_grid_definition() {
    let toml = r#"
        [grid]
        "#;
    let config: ApplicationCfg = parse_config(toml.to_string(), "").unwrap();
    assert_eq!(
        grid_from_config(&config.grid),
        Err(RasterError::Config("Invalid grid definition".to_string()))
    );
}

#[test]
fn test_config_parse_error() {
    let toml = r#"
        [grid
        "#;
    let config: Result<ApplicationCfg, _> = parse_config(toml.to_string(), "example.toml");
    assert!(matches!(config, Err(RasterError::Config(_))));
}
