//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::affine::Affine;
use crate::error::GridError;
use crate::geom::{Extent, GeoCoordinate, GeoExtent, RowColumn, RowColumnExtent};

#[test]
fn test_geo_to_rowcol() {
    // 30m pixel affine of CONUS tile (5, 2)
    let affine = Affine::from_gdal([-1815585.0, 30.0, 0.0, 3014805.0, 0.0, -30.0]);

    let rc = affine
        .geo_to_rowcol(GeoCoordinate::new(-1767039.0, 2940090.0))
        .unwrap();
    assert_eq!(rc, RowColumn::new(2490, 1618));

    // tile origin maps to pixel (0, 0)
    let rc = affine
        .geo_to_rowcol(GeoCoordinate::new(-1815585.0, 3014805.0))
        .unwrap();
    assert_eq!(rc, RowColumn::new(0, 0));

    // no bounds checking: coordinates left/above the origin give
    // negative indices, truncated toward zero
    let affine = Affine::new(0.0, 30.0, 0.0, -30.0);
    let rc = affine.geo_to_rowcol(GeoCoordinate::new(-45.0, 75.0)).unwrap();
    assert_eq!(rc, RowColumn::new(-2, -1));
}

#[test]
fn test_rowcol_to_geo() {
    let affine = Affine::from_gdal([-1815585.0, 30.0, 0.0, 3014805.0, 0.0, -30.0]);

    let coord = affine.rowcol_to_geo(RowColumn::new(2490, 1618));
    assert_eq!(coord, GeoCoordinate::new(-1767045.0, 2940105.0));

    assert_eq!(
        affine.rowcol_to_geo(RowColumn::new(0, 0)),
        GeoCoordinate::new(-1815585.0, 3014805.0)
    );
}

#[test]
fn test_pixel_roundtrip_is_exact() {
    let affine = Affine::new(-2565585.0, 30.0, 3314805.0, -30.0);

    for &(row, col) in &[(0i64, 0i64), (1, 1), (2490, 1618), (4999, 4999), (-3, 7)] {
        let rc = RowColumn::new(row, col);
        let coord = affine.rowcol_to_geo(rc);
        assert_eq!(affine.geo_to_rowcol(coord).unwrap(), rc);
    }
}

#[test]
fn test_geo_roundtrip_snaps_to_pixel_corner() {
    let affine = Affine::from_gdal([-1815585.0, 30.0, 0.0, 3014805.0, 0.0, -30.0]);

    // interior coordinate snaps to the upper-left corner of its pixel,
    // at most one pixel width/height away
    let coord = GeoCoordinate::new(-1767039.0, 2940090.0);
    let snapped = affine.rowcol_to_geo(affine.geo_to_rowcol(coord).unwrap());
    assert_eq!(snapped, GeoCoordinate::new(-1767045.0, 2940105.0));
    assert!((snapped.x - coord.x).abs() < 30.0);
    assert!((snapped.y - coord.y).abs() < 30.0);

    // a pixel corner round-trips unchanged
    let corner = GeoCoordinate::new(-1767045.0, 2940105.0);
    let snapped = affine.rowcol_to_geo(affine.geo_to_rowcol(corner).unwrap());
    assert_eq!(snapped, corner);
}

#[test]
fn test_invalid_affine() {
    let affine = Affine::new(0.0, 0.0, 0.0, -30.0);
    assert_eq!(
        affine.geo_to_rowcol(GeoCoordinate::new(100.0, 100.0)),
        Err(GridError::InvalidAffine(affine))
    );

    let affine = Affine::new(0.0, 30.0, 0.0, 0.0);
    assert_eq!(
        affine.geo_to_rowcol(GeoCoordinate::new(100.0, 100.0)),
        Err(GridError::InvalidAffine(affine))
    );
}

#[test]
fn test_rotated_affine() {
    // Rotation terms are carried through the formulas, but the inverse
    // does not round-trip with the forward transform. Pinned here so a
    // behavior change shows up.
    let affine = Affine::from_gdal([0.0, 10.0, 1.0, 0.0, 2.0, -10.0]);

    let coord = affine.rowcol_to_geo(RowColumn::new(3, 4));
    assert_eq!(coord, GeoCoordinate::new(43.0, -22.0));

    let rc = affine.geo_to_rowcol(coord).unwrap();
    assert_eq!(rc, RowColumn::new(6, 8));
}

#[test]
fn test_corners() {
    let geo = GeoExtent::new(-1815585.0, 3014805.0, -1665585.0, 2864805.0);
    assert_eq!(
        geo.corners(),
        (
            GeoCoordinate::new(-1815585.0, 3014805.0),
            GeoCoordinate::new(-1665585.0, 2864805.0)
        )
    );

    let rc = RowColumnExtent::new(0, 0, 100, 200);
    assert_eq!(rc.corners(), (RowColumn::new(0, 0), RowColumn::new(100, 200)));
    assert_eq!(rc.num_rows(), 100);
    assert_eq!(rc.num_cols(), 200);
}

#[test]
fn test_transform_extent() {
    let affine = Affine::from_gdal([-1815585.0, 30.0, 0.0, 3014805.0, 0.0, -30.0]);

    let geo = GeoExtent::new(-1815585.0, 3014805.0, -1812585.0, 3011805.0);
    let pixel = affine.transform_extent(Extent::Geo(geo)).unwrap();
    assert_eq!(pixel, Extent::Pixel(RowColumnExtent::new(0, 0, 100, 100)));

    // upper-left corner stays first in both directions
    let back = affine.transform_extent(pixel).unwrap();
    assert_eq!(back, Extent::Geo(geo));
}

#[test]
fn test_transform_extent_roundtrip_on_aligned_extent() {
    // Geo -> Pixel -> Geo is the identity for pixel-aligned extents
    let affine = Affine::new(-2565585.0, 30.0, 3314805.0, -30.0);
    let geo = affine.rowcol_extent_to_geo(&RowColumnExtent::new(120, 40, 220, 140));

    let pixel = affine.geo_extent_to_rowcol(&geo).unwrap();
    assert_eq!(pixel, RowColumnExtent::new(120, 40, 220, 140));
    assert_eq!(affine.rowcol_extent_to_geo(&pixel), geo);
}

#[test]
fn test_gdal_array_conversion() {
    let gt = [-1815585.0, 30.0, 0.0, 3014805.0, 0.0, -30.0];
    assert_eq!(Affine::from_gdal(gt).to_gdal(), gt);
}
