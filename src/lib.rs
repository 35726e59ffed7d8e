/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
mod chromaticity;
mod error;
mod euclidean;
mod gamma_curves;
mod illuminant;
mod image;
mod image_to_uvw;
mod rgb;
mod ucs;
mod utils;
mod uvw;
mod xyy;
mod xyz;
mod xyz_transform;

pub use chromaticity::Chromaticity;
pub use error::{IlluminantError, ShapeError};
pub use euclidean::EuclideanDistance;
pub use gamma_curves::*;
pub use illuminant::{
    illuminant_chromaticity, Illuminant, StandardObserver, D50_ILLUMINANT, D65_ILLUMINANT,
};
pub use image_to_uvw::{
    bgr_to_uvw, bgra_to_uvw, rgb_to_uvw, rgba_to_uvw, srgb_to_uvw, xyz_to_uvw_slice,
};
pub use rgb::Rgb;
pub use ucs::{Ucs, UcsChromaticity};
pub use uvw::{xyz_to_uvw, Uvw};
pub use xyy::Xyy;
pub use xyz::Xyz;
pub use xyz_transform::*;
