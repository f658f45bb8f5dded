//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! ARD tile grid calculations and raster chip extraction.
//!
//! Umbrella crate re-exporting the grid math (`ard-grid`), the raster
//! access and extraction layer (`ard-core`) and, with the `with-gdal`
//! feature, the GDAL-backed raster source (`ard-gdal`).

pub use ard_core::{
    extract_by_geo_extent, extract_by_rowcol_extent, extract_chip, full_extent, grid_from_config,
    read_config, ApplicationCfg, GridCfg, MemoryRaster, PixelWindow, RasterError, RasterSource,
};
pub use ard_grid::{
    align_to_grid, Affine, ArdGrid, Extent, GeoCoordinate, GeoExtent, GridError, RowColumn,
    RowColumnExtent,
};

#[cfg(feature = "with-gdal")]
pub use ard_gdal::GdalSource;
