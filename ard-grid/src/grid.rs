//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! ARD reference grids and tile addressing

use crate::affine::Affine;
use crate::error::GridError;
use crate::geom::{GeoCoordinate, GeoExtent};

/// Pixel edge length in ground units (30 m)
pub const PIXEL_SIZE: f64 = 30.0;
/// Tile edge length in pixels
pub const TILE_PIXELS: i64 = 5000;
/// Chip edge length in pixels
pub const CHIP_PIXELS: i64 = 100;

const TILE_SIZE: f64 = TILE_PIXELS as f64 * PIXEL_SIZE;
const CHIP_SIZE: f64 = CHIP_PIXELS as f64 * PIXEL_SIZE;

/// An ARD tiling grid: a fixed reference extent with derived tile-level
/// (150000 m cells) and chip-level (3000 m cells) affines.
///
/// Tiles are addressed by integer (h, v), where h counts columns from
/// the reference upper-left and v counts rows.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct ArdGrid {
    /// Reference extent defining the grid origin and bounds
    pub extent: GeoExtent,
    /// 150000 m per cell, one cell per tile
    pub tile_affine: Affine,
    /// 3000 m per cell, one cell per chip
    pub chip_affine: Affine,
}

impl ArdGrid {
    /// Continental United States grid
    pub fn conus() -> ArdGrid {
        ArdGrid::from_extent(GeoExtent::new(-2565585.0, 3314805.0, 2384415.0, 14805.0))
    }

    /// Alaska grid
    pub fn alaska() -> ArdGrid {
        ArdGrid::from_extent(GeoExtent::new(-851715.0, 2474325.0, 1698285.0, 374325.0))
    }

    /// Hawaii grid
    pub fn hawaii() -> ArdGrid {
        ArdGrid::from_extent(GeoExtent::new(-444345.0, 2168895.0, 305655.0, 1718895.0))
    }

    /// Grid anchored at the upper-left corner of a reference extent
    pub fn from_extent(extent: GeoExtent) -> ArdGrid {
        ArdGrid {
            extent,
            tile_affine: Affine::new(extent.xmin, TILE_SIZE, extent.ymax, -TILE_SIZE),
            chip_affine: Affine::new(extent.xmin, CHIP_SIZE, extent.ymax, -CHIP_SIZE),
        }
    }

    /// Geographic extent and 30 m pixel affine of tile (h, v).
    ///
    /// Any integer indices are accepted, including negative ones; whether
    /// a tile actually carries data is a caller concern.
    pub fn tile_extent_and_affine(&self, h: i64, v: i64) -> (GeoExtent, Affine) {
        let xmin = self.extent.xmin + h as f64 * TILE_SIZE;
        let xmax = xmin + TILE_SIZE;
        let ymax = self.extent.ymax - v as f64 * TILE_SIZE;
        let ymin = ymax - TILE_SIZE;

        (
            GeoExtent::new(xmin, ymax, xmax, ymin),
            Affine::new(xmin, PIXEL_SIZE, ymax, -PIXEL_SIZE),
        )
    }

    /// Tile (h, v) containing a coordinate.
    ///
    /// h maps to the horizontal (column) axis and v to the vertical (row)
    /// axis, so the row/column result of the tile affine is swapped.
    pub fn determine_tile(&self, coord: GeoCoordinate) -> Result<(i64, i64), GridError> {
        let rc = self.tile_affine.geo_to_rowcol(coord)?;
        Ok((rc.column, rc.row))
    }

    /// Upper-left corner of the 3000 m chip containing a coordinate,
    /// by round-tripping through the chip affine.
    pub fn chip_upper_left(&self, coord: GeoCoordinate) -> Result<GeoCoordinate, GridError> {
        let rc = self.chip_affine.geo_to_rowcol(coord)?;
        Ok(self.chip_affine.rowcol_to_geo(rc))
    }

    /// 3000x3000 m extent of the chip containing a coordinate
    pub fn chip_extent(&self, coord: GeoCoordinate) -> Result<GeoExtent, GridError> {
        let ul = self.chip_upper_left(coord)?;
        Ok(GeoExtent::new(ul.x, ul.y, ul.x + CHIP_SIZE, ul.y - CHIP_SIZE))
    }
}

/// Snap a coordinate value to the 30 m pixel center convention: the odd
/// multiple of 15 directly below the containing cell boundary.
///
/// Uses floor semantics (toward negative infinity), so negative and
/// fractional values behave like floor division:
/// `align_to_grid(1.0) == 15`, `align_to_grid(-1.0) == -15`.
pub fn align_to_grid(value: f64) -> i64 {
    (value / PIXEL_SIZE).floor() as i64 * 30 + 15
}
