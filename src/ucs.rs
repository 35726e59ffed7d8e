/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */

//! # CIE 1960 UCS
use crate::{Chromaticity, Xyz};

/// CIE 1960 Uniform Chromaticity Scale tristimulus value
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ucs {
    /// U = 2/3 X
    pub u: f64,
    /// V = Y
    pub v: f64,
    /// W = (-X + 3Y + Z) / 2
    pub w: f64,
}

/// CIE 1960 UCS chromaticity coordinates
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UcsChromaticity {
    pub u: f64,
    pub v: f64,
}

impl Ucs {
    #[inline]
    pub fn new(u: f64, v: f64, w: f64) -> Ucs {
        Ucs { u, v, w }
    }

    /// Converts CIE XYZ to CIE 1960 UCS
    #[inline]
    pub fn from_xyz(xyz: Xyz) -> Ucs {
        Ucs::new(
            2f64 / 3f64 * xyz.x,
            xyz.y,
            0.5f64 * (-xyz.x + 3f64 * xyz.y + xyz.z),
        )
    }

    #[inline]
    pub fn to_xyz(&self) -> Xyz {
        Xyz::new(
            1.5f64 * self.u,
            self.v,
            1.5f64 * self.u - 3f64 * self.v + 2f64 * self.w,
        )
    }

    /// Projects onto uv chromaticity.
    ///
    /// A zero sum (black) has no chromaticity and yields NaN.
    #[inline]
    pub fn to_uv(&self) -> UcsChromaticity {
        let sum = self.u + self.v + self.w;
        UcsChromaticity::new(self.u / sum, self.v / sum)
    }
}

impl UcsChromaticity {
    #[inline]
    pub const fn new(u: f64, v: f64) -> UcsChromaticity {
        UcsChromaticity { u, v }
    }

    /// Converts back to CIE 1931 xy chromaticity
    #[inline]
    pub fn to_xy(&self) -> Chromaticity {
        let den = 2f64 * self.u - 8f64 * self.v + 4f64;
        Chromaticity::new(3f64 * self.u / den, 2f64 * self.v / den)
    }
}
