//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use ard_core::{PixelWindow, RasterError, RasterSource};
use ard_grid::{Affine, RowColumnExtent};
use gdal::Dataset;
use std::path::Path;

/// GDAL-backed raster source.
///
/// The dataset is opened once in `open` and reused across queries;
/// dropping the source releases the handle.
pub struct GdalSource {
    path: String,
    dataset: Dataset,
}

impl GdalSource {
    pub fn open(path: &str) -> Result<GdalSource, RasterError> {
        debug!("GdalSource.open {}", path);
        let dataset = Dataset::open(Path::new(path)).map_err(|e| RasterError::RasterOpenError {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        Ok(GdalSource {
            path: path.to_string(),
            dataset,
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    fn gdal_err(&self, err: gdal::errors::GdalError) -> RasterError {
        RasterError::RasterOpenError {
            path: self.path.clone(),
            reason: err.to_string(),
        }
    }
}

impl RasterSource for GdalSource {
    fn affine(&self) -> Result<Affine, RasterError> {
        let gt = self.dataset.geo_transform().map_err(|e| self.gdal_err(e))?;
        Ok(Affine::from_gdal(gt))
    }

    fn size(&self) -> Result<(usize, usize), RasterError> {
        let (width, height) = self.dataset.raster_size();
        Ok((height, width))
    }

    fn read_window(
        &self,
        band: usize,
        window: &RowColumnExtent,
    ) -> Result<PixelWindow, RasterError> {
        let count = self.dataset.raster_count() as usize;
        if band < 1 || band > count {
            return Err(RasterError::BandNotFound { band, count });
        }
        let rasterband = self
            .dataset
            .rasterband(band as isize)
            .map_err(|e| self.gdal_err(e))?;

        let rows = window.num_rows() as usize;
        let cols = window.num_cols() as usize;
        debug!(
            "GdalSource.read_window {} band {} rows {}..{} cols {}..{}",
            self.path, band, window.start_row, window.end_row, window.start_col, window.end_col
        );
        let buf = rasterband
            .read_as::<f64>(
                (window.start_col as isize, window.start_row as isize),
                (cols, rows),
                (cols, rows),
                None,
            )
            .map_err(|e| self.gdal_err(e))?;

        PixelWindow::from_vec(buf.data, rows, cols)
    }
}
