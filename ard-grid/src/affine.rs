//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Affine transforms between pixel and geographic space

use crate::error::GridError;
use crate::geom::{Extent, GeoCoordinate, GeoExtent, RowColumn, RowColumnExtent};

/// Six-parameter affine transform in GDAL geotransform order:
/// (origin_x, x_size, x_rot, origin_y, y_rot, y_size).
///
/// The origin is the geographic position of the upper-left corner of
/// pixel (0, 0). `y_size` is negative for north-up rasters.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Affine {
    pub origin_x: f64,
    pub x_size: f64,
    pub x_rot: f64,
    pub origin_y: f64,
    pub y_rot: f64,
    pub y_size: f64,
}

impl Affine {
    /// North-up affine without rotation terms
    pub fn new(origin_x: f64, x_size: f64, origin_y: f64, y_size: f64) -> Affine {
        Affine {
            origin_x,
            x_size,
            x_rot: 0.0,
            origin_y,
            y_rot: 0.0,
            y_size,
        }
    }

    /// From a GDAL-style geotransform array
    pub fn from_gdal(gt: [f64; 6]) -> Affine {
        Affine {
            origin_x: gt[0],
            x_size: gt[1],
            x_rot: gt[2],
            origin_y: gt[3],
            y_rot: gt[4],
            y_size: gt[5],
        }
    }

    /// To a GDAL-style geotransform array
    pub fn to_gdal(&self) -> [f64; 6] {
        [
            self.origin_x,
            self.x_size,
            self.x_rot,
            self.origin_y,
            self.y_rot,
            self.y_size,
        ]
    }

    /// Row/column of the pixel containing a geographic coordinate.
    ///
    /// Fractional indices are truncated toward zero, matching the GDAL
    /// geotransform inverse convention. No bounds checking is done: a
    /// coordinate outside a raster's extent yields a negative or
    /// overflowing row/column, which callers must validate themselves.
    ///
    /// Fails with `InvalidAffine` on a zero pixel size instead of
    /// propagating a division by zero.
    pub fn geo_to_rowcol(&self, coord: GeoCoordinate) -> Result<RowColumn, GridError> {
        if self.x_size == 0.0 || self.y_size == 0.0 {
            return Err(GridError::InvalidAffine(*self));
        }
        let row = (coord.y - self.origin_y - coord.x * self.x_rot) / self.y_size;
        let col = (coord.x - self.origin_x - coord.y * self.y_rot) / self.x_size;

        Ok(RowColumn::new(row.trunc() as i64, col.trunc() as i64))
    }

    /// Geographic coordinate of the upper-left corner of a pixel.
    ///
    /// This is the exact forward affine. Composing it with
    /// `geo_to_rowcol` is the identity on the pixel side only; on the
    /// geographic side the round trip snaps to the pixel corner.
    pub fn rowcol_to_geo(&self, rc: RowColumn) -> GeoCoordinate {
        let x = self.origin_x + rc.column as f64 * self.x_size + rc.row as f64 * self.x_rot;
        let y = self.origin_y + rc.column as f64 * self.y_rot + rc.row as f64 * self.y_size;

        GeoCoordinate::new(x, y)
    }

    /// Geographic extent to row/column window, corner by corner
    pub fn geo_extent_to_rowcol(&self, extent: &GeoExtent) -> Result<RowColumnExtent, GridError> {
        let (ul, lr) = extent.corners();
        let ul = self.geo_to_rowcol(ul)?;
        let lr = self.geo_to_rowcol(lr)?;
        Ok(RowColumnExtent::new(ul.row, ul.column, lr.row, lr.column))
    }

    /// Row/column window to geographic extent, corner by corner
    pub fn rowcol_extent_to_geo(&self, extent: &RowColumnExtent) -> GeoExtent {
        let (ul, lr) = extent.corners();
        let ul = self.rowcol_to_geo(ul);
        let lr = self.rowcol_to_geo(lr);
        GeoExtent::new(ul.x, ul.y, lr.x, lr.y)
    }

    /// Move a bounding box to the other coordinate space.
    ///
    /// The transform direction is selected by the input variant: a
    /// geographic extent becomes a pixel window and vice versa. Corner
    /// ordering (upper-left first) is preserved in both directions.
    pub fn transform_extent(&self, extent: Extent) -> Result<Extent, GridError> {
        match extent {
            Extent::Geo(ext) => Ok(Extent::Pixel(self.geo_extent_to_rowcol(&ext)?)),
            Extent::Pixel(ext) => Ok(Extent::Geo(self.rowcol_extent_to_geo(&ext))),
        }
    }
}
