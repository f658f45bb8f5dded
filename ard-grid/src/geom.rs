//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Geometry value types

/// Projected coordinate pair
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct GeoCoordinate {
    pub x: f64,
    pub y: f64,
}

impl GeoCoordinate {
    pub fn new(x: f64, y: f64) -> GeoCoordinate {
        GeoCoordinate { x, y }
    }
}

/// Integer pixel indices. Negative values address pixels outside a raster.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct RowColumn {
    pub row: i64,
    pub column: i64,
}

impl RowColumn {
    pub fn new(row: i64, column: i64) -> RowColumn {
        RowColumn { row, column }
    }
}

/// Geographic extent.
/// Field order follows the ARD convention: upper-left x, upper-left y,
/// lower-right x, lower-right y (xmin <= xmax, ymin <= ymax).
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct GeoExtent {
    pub xmin: f64,
    pub ymax: f64,
    pub xmax: f64,
    pub ymin: f64,
}

impl GeoExtent {
    pub fn new(xmin: f64, ymax: f64, xmax: f64, ymin: f64) -> GeoExtent {
        GeoExtent {
            xmin,
            ymax,
            xmax,
            ymin,
        }
    }
    /// Upper-left corner
    pub fn upper_left(&self) -> GeoCoordinate {
        GeoCoordinate::new(self.xmin, self.ymax)
    }
    /// Lower-right corner
    pub fn lower_right(&self) -> GeoCoordinate {
        GeoCoordinate::new(self.xmax, self.ymin)
    }
    /// (upper-left, lower-right) corner pair
    pub fn corners(&self) -> (GeoCoordinate, GeoCoordinate) {
        (self.upper_left(), self.lower_right())
    }
}

/// Min and max pixel indices. start is the upper-left corner
/// (smallest row/column), end the lower-right.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct RowColumnExtent {
    pub start_row: i64,
    pub start_col: i64,
    pub end_row: i64,
    pub end_col: i64,
}

impl RowColumnExtent {
    pub fn new(start_row: i64, start_col: i64, end_row: i64, end_col: i64) -> RowColumnExtent {
        RowColumnExtent {
            start_row,
            start_col,
            end_row,
            end_col,
        }
    }
    /// Upper-left corner
    pub fn upper_left(&self) -> RowColumn {
        RowColumn::new(self.start_row, self.start_col)
    }
    /// Lower-right corner
    pub fn lower_right(&self) -> RowColumn {
        RowColumn::new(self.end_row, self.end_col)
    }
    /// (upper-left, lower-right) corner pair
    pub fn corners(&self) -> (RowColumn, RowColumn) {
        (self.upper_left(), self.lower_right())
    }
    /// Number of rows in the half-open window [start_row, end_row)
    pub fn num_rows(&self) -> i64 {
        self.end_row - self.start_row
    }
    /// Number of columns in the half-open window [start_col, end_col)
    pub fn num_cols(&self) -> i64 {
        self.end_col - self.start_col
    }
}

/// An extent in either coordinate space.
///
/// `Affine::transform_extent` picks the transform direction from the
/// variant, so bounding boxes can be moved between geographic and
/// row/column space without inspecting the concrete type at runtime.
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum Extent {
    Geo(GeoExtent),
    Pixel(RowColumnExtent),
}
