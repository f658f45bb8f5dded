//! A library for ARD tile grid and affine transform calculations
//!
//! ## Reference grids
//!
//! ```rust
//! use ard_grid::{ArdGrid, GeoExtent};
//!
//! let grid = ArdGrid::conus();
//! let (extent, affine) = grid.tile_extent_and_affine(5, 2);
//! assert_eq!(
//!     extent,
//!     GeoExtent {
//!         xmin: -1815585.0,
//!         ymax: 3014805.0,
//!         xmax: -1665585.0,
//!         ymin: 2864805.0,
//!     }
//! );
//! assert_eq!(affine.to_gdal(), [-1815585.0, 30.0, 0.0, 3014805.0, 0.0, -30.0]);
//! ```
//!
//! ## Coordinate transforms
//!
//! ```rust
//! use ard_grid::{ArdGrid, GeoCoordinate, RowColumn};
//!
//! let grid = ArdGrid::conus();
//! let (_, affine) = grid.tile_extent_and_affine(5, 2);
//! let rc = affine
//!     .geo_to_rowcol(GeoCoordinate::new(-1767039.0, 2940090.0))
//!     .unwrap();
//! assert_eq!(rc, RowColumn::new(2490, 1618));
//! ```

mod affine;
mod error;
mod geom;
mod grid;

#[cfg(test)]
mod affine_test;

pub use crate::affine::Affine;
pub use crate::error::GridError;
pub use crate::geom::{Extent, GeoCoordinate, GeoExtent, RowColumn, RowColumnExtent};
pub use crate::grid::{align_to_grid, ArdGrid, CHIP_PIXELS, PIXEL_SIZE, TILE_PIXELS};
