//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Raster source capability and pixel windows

use crate::error::RasterError;
use ard_grid::{Affine, RowColumnExtent};
use ndarray::Array2;

/// A 2-D block of raster samples in row-major order
#[derive(PartialEq, Clone, Debug)]
pub struct PixelWindow {
    data: Array2<f64>,
}

impl PixelWindow {
    pub fn from_array(data: Array2<f64>) -> PixelWindow {
        PixelWindow { data }
    }

    pub fn from_vec(data: Vec<f64>, rows: usize, cols: usize) -> Result<PixelWindow, RasterError> {
        let len = data.len();
        let array = Array2::from_shape_vec((rows, cols), data)
            .map_err(|_| RasterError::WindowShapeMismatch { rows, cols, len })?;
        Ok(PixelWindow { data: array })
    }

    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.data.get((row, col)).copied()
    }

    pub fn as_array(&self) -> &Array2<f64> {
        &self.data
    }

    pub fn into_array(self) -> Array2<f64> {
        self.data
    }
}

/// Read-only queries against an opaque raster source.
///
/// The three queries are the only I/O surface of the extraction logic;
/// anything that can report an affine, its pixel size and a rectangular
/// sample block can back it. Implementations perform no caching - a
/// caller needing repeated access should acquire the source once and
/// reuse it.
pub trait RasterSource {
    /// Geotransform of the raster
    fn affine(&self) -> Result<Affine, RasterError>;
    /// (height, width) in pixels
    fn size(&self) -> Result<(usize, usize), RasterError>;
    /// Samples of one band covering exactly
    /// `[start_row, end_row) x [start_col, end_col)`. `band` is 1-based.
    fn read_window(&self, band: usize, window: &RowColumnExtent)
        -> Result<PixelWindow, RasterError>;
}

/// In-memory raster backed by one array per band.
///
/// Stands in for a file-backed source in tests and keeps the extraction
/// logic testable without touching the filesystem.
pub struct MemoryRaster {
    affine: Affine,
    bands: Vec<Array2<f64>>,
}

impl MemoryRaster {
    pub fn new(affine: Affine, bands: Vec<Array2<f64>>) -> MemoryRaster {
        MemoryRaster { affine, bands }
    }

    /// Single-band raster filled with one value
    pub fn filled(affine: Affine, rows: usize, cols: usize, value: f64) -> MemoryRaster {
        MemoryRaster::new(affine, vec![Array2::from_elem((rows, cols), value)])
    }
}

impl RasterSource for MemoryRaster {
    fn affine(&self) -> Result<Affine, RasterError> {
        Ok(self.affine)
    }

    fn size(&self) -> Result<(usize, usize), RasterError> {
        match self.bands.first() {
            Some(band) => Ok((band.nrows(), band.ncols())),
            None => Ok((0, 0)),
        }
    }

    fn read_window(
        &self,
        band: usize,
        window: &RowColumnExtent,
    ) -> Result<PixelWindow, RasterError> {
        let data = self
            .bands
            .get(band.wrapping_sub(1))
            .ok_or(RasterError::BandNotFound {
                band,
                count: self.bands.len(),
            })?;

        let (height, width) = (data.nrows(), data.ncols());
        let in_bounds = window.start_row >= 0
            && window.start_col >= 0
            && window.start_row <= window.end_row
            && window.start_col <= window.end_col
            && window.end_row <= height as i64
            && window.end_col <= width as i64;
        if !in_bounds {
            return Err(RasterError::ExtentOutOfBounds {
                window: *window,
                height,
                width,
            });
        }

        let block = data.slice(ndarray::s![
            window.start_row as usize..window.end_row as usize,
            window.start_col as usize..window.end_col as usize
        ]);
        Ok(PixelWindow::from_array(block.to_owned()))
    }
}
