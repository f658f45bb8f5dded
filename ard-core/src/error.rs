//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use ard_grid::{GridError, RowColumnExtent};
use thiserror::Error;

/// Raster access and extraction errors.
///
/// All variants are raised at the operation that detects them and
/// propagate to the caller unchanged; there is no internal retry and no
/// partial-success mode.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RasterError {
    /// Raster source cannot be opened
    #[error("could not open raster source '{path}': {reason}")]
    RasterOpenError { path: String, reason: String },

    /// 1-based band index out of range
    #[error("band {band} not found, raster has {count} band(s)")]
    BandNotFound { band: usize, count: usize },

    /// Requested window falls outside the raster's pixel bounds
    #[error("window {window:?} outside raster bounds of {height} rows x {width} columns")]
    ExtentOutOfBounds {
        window: RowColumnExtent,
        height: usize,
        width: usize,
    },

    /// Sample buffer does not match the window shape
    #[error("buffer of length {len} does not match window of {rows} rows x {cols} columns")]
    WindowShapeMismatch { rows: usize, cols: usize, len: usize },

    /// Invalid configuration entry
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Grid(#[from] GridError),
}
