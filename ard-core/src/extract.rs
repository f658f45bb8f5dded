//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Chip and region extraction

use crate::error::RasterError;
use crate::raster::{PixelWindow, RasterSource};
use ard_grid::{ArdGrid, GeoCoordinate, GeoExtent, RowColumn, RowColumnExtent};

/// Whole-raster geographic extent, derived from the source's affine and
/// pixel size. The lower-right corner is the forward transform of
/// (height, width).
pub fn full_extent<S: RasterSource>(source: &S) -> Result<GeoExtent, RasterError> {
    let affine = source.affine()?;
    let (height, width) = source.size()?;
    let lr = affine.rowcol_to_geo(RowColumn::new(height as i64, width as i64));

    Ok(GeoExtent::new(affine.origin_x, affine.origin_y, lr.x, lr.y))
}

fn check_window(
    window: &RowColumnExtent,
    height: usize,
    width: usize,
) -> Result<(), RasterError> {
    let in_bounds = window.start_row >= 0
        && window.start_col >= 0
        && window.start_row <= window.end_row
        && window.start_col <= window.end_col
        && window.end_row <= height as i64
        && window.end_col <= width as i64;
    if in_bounds {
        Ok(())
    } else {
        Err(RasterError::ExtentOutOfBounds {
            window: *window,
            height,
            width,
        })
    }
}

/// Read the samples of one band covering a row/column window.
///
/// The window must lie fully inside the raster. A window that sticks
/// out in any direction fails with `ExtentOutOfBounds`; there is no
/// clamping and no partial read.
pub fn extract_by_rowcol_extent<S: RasterSource>(
    source: &S,
    window: &RowColumnExtent,
    band: usize,
) -> Result<PixelWindow, RasterError> {
    let (height, width) = source.size()?;
    check_window(window, height, width)?;
    debug!("reading band {} window {:?}", band, window);

    source.read_window(band, window)
}

/// Read the samples of one band covering a geographic extent, using the
/// source's own affine to locate the pixel window.
pub fn extract_by_geo_extent<S: RasterSource>(
    source: &S,
    extent: &GeoExtent,
    band: usize,
) -> Result<PixelWindow, RasterError> {
    let affine = source.affine()?;
    let window = affine.geo_extent_to_rowcol(extent)?;

    extract_by_rowcol_extent(source, &window, band)
}

/// Read the 100x100 pixel chip containing a coordinate.
///
/// The chip extent is anchored at the grid's chip upper-left corner,
/// so nearby coordinates inside the same chip yield identical windows.
pub fn extract_chip<S: RasterSource>(
    source: &S,
    grid: &ArdGrid,
    coord: GeoCoordinate,
    band: usize,
) -> Result<PixelWindow, RasterError> {
    let extent = grid.chip_extent(coord)?;

    extract_by_geo_extent(source, &extent, band)
}
