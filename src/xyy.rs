/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */

//! # xyY
use crate::{Chromaticity, Xyz};

/// CIE xyY: chromaticity coordinates plus luminance
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Xyy {
    pub x: f64,
    pub y: f64,
    /// The Y tristimulus value, carried through unchanged
    pub luminance: f64,
}

impl Xyy {
    #[inline]
    pub fn new(x: f64, y: f64, luminance: f64) -> Xyy {
        Xyy { x, y, luminance }
    }

    /// Converts CIE XYZ to CIE xyY
    ///
    /// Black has no chromaticity of its own, it takes `illuminant`'s.
    #[inline]
    pub fn from_xyz(xyz: Xyz, illuminant: Chromaticity) -> Xyy {
        if xyz.x == 0f64 && xyz.y == 0f64 && xyz.z == 0f64 {
            return Xyy::new(illuminant.x, illuminant.y, xyz.y);
        }
        let sum = xyz.sum();
        Xyy::new(xyz.x / sum, xyz.y / sum, xyz.y)
    }

    #[inline]
    pub fn to_xyz(&self) -> Xyz {
        if self.y == 0f64 {
            return Xyz::default();
        }
        let scale = self.luminance / self.y;
        Xyz::new(
            self.x * scale,
            self.luminance,
            (1f64 - self.x - self.y) * scale,
        )
    }

    #[inline]
    pub fn chromaticity(&self) -> Chromaticity {
        Chromaticity::new(self.x, self.y)
    }
}
