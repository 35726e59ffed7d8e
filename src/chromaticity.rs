/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::{UcsChromaticity, Xyy, Xyz};

/// CIE 1931 xy chromaticity coordinates, e.g. of an illuminant white point
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chromaticity {
    pub x: f64,
    pub y: f64,
}

impl Chromaticity {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Chromaticity {
        Chromaticity { x, y }
    }

    /// Tristimulus value of this chromaticity with unit luminance
    #[inline]
    pub fn to_xyz(&self) -> Xyz {
        Xyy::new(self.x, self.y, 1f64).to_xyz()
    }

    /// CIE 1960 UCS chromaticity of this point
    #[inline]
    pub fn to_uv(&self) -> UcsChromaticity {
        self.to_xyz().to_ucs().to_uv()
    }

    #[inline]
    pub fn to_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl From<[f64; 2]> for Chromaticity {
    #[inline]
    fn from(value: [f64; 2]) -> Self {
        Chromaticity::new(value[0], value[1])
    }
}
