//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::affine::Affine;
use thiserror::Error;

/// Grid calculation errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    /// Degenerate transform: zero pixel size
    #[error("invalid affine with zero pixel size: {0:?}")]
    InvalidAffine(Affine),
}
