/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::error::ShapeError;
use crate::gamma_curves::TransferFunction;
use crate::rgb::Rgb;
use crate::utils::mlaf;
use crate::{Chromaticity, EuclideanDistance, Ucs, Uvw, Xyy, SRGB_TO_XYZ_D65};
use std::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

/// A CIE 1931 XYZ color.
///
/// Components are expected in 0..100 domain when feeding U*V*W*, this is not enforced.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Xyz {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn scale(&self, by: f64) -> Xyz {
        Xyz {
            x: self.x * by,
            y: self.y * by,
            z: self.z * by,
        }
    }

    /// Scales normalized 0..1 XYZ into 0..100 domain
    #[inline]
    pub fn scaled(&self) -> Xyz {
        self.scale(100f64)
    }

    #[inline]
    pub fn sum(&self) -> f64 {
        self.x + self.y + self.z
    }

    #[inline]
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl Xyz {
    /// Chromaticity coordinates and luminance, falling back to `illuminant` for black
    #[inline]
    pub fn to_xyy(&self, illuminant: Chromaticity) -> Xyy {
        Xyy::from_xyz(*self, illuminant)
    }

    #[inline]
    pub fn to_ucs(&self) -> Ucs {
        Ucs::from_xyz(*self)
    }

    /// Converts into CIE 1964 U*V*W* against `illuminant`
    #[inline]
    pub fn to_uvw(&self, illuminant: Chromaticity) -> Uvw {
        Uvw::from_xyz(*self, illuminant)
    }
}

static XYZ_SCALE_U8: f64 = 1f64 / 255f64;

/// XYZ produced from RGB is normalized, white has Y = 1.
/// Use `scaled` before U*V*W* conversion.
impl Xyz {
    /// This functions always use sRGB transfer function and Rec.709 primaries with D65 White point
    #[inline]
    pub fn from_srgb(rgb: Rgb<u8>) -> Self {
        Xyz::from_rgb(rgb, &SRGB_TO_XYZ_D65, TransferFunction::Srgb)
    }

    /// This function converts from non-linear RGB components to XYZ
    /// # Arguments
    /// * `matrix` - Transformation matrix from RGB to XYZ, for example `SRGB_TO_XYZ_D65`
    /// * `transfer_function` - Transfer functions for current colorspace
    #[inline]
    pub fn from_rgb(
        rgb: Rgb<u8>,
        matrix: &[[f64; 3]; 3],
        transfer_function: TransferFunction,
    ) -> Self {
        let linear = Rgb::<f64>::new(
            transfer_function.linearize(rgb.r as f64 * XYZ_SCALE_U8),
            transfer_function.linearize(rgb.g as f64 * XYZ_SCALE_U8),
            transfer_function.linearize(rgb.b as f64 * XYZ_SCALE_U8),
        );
        Xyz::from_linear_rgb(linear, matrix)
    }

    /// This function converts from linear RGB components to XYZ
    /// # Arguments
    /// * `matrix` - Transformation matrix from RGB to XYZ, for example `SRGB_TO_XYZ_D65`
    #[inline]
    pub fn from_linear_rgb(rgb: Rgb<f64>, matrix: &[[f64; 3]; 3]) -> Self {
        let [r0, r1, r2] = *matrix;
        Self::new(
            mlaf(r0[2], rgb.b, mlaf(r0[1], rgb.g, r0[0] * rgb.r)),
            mlaf(r1[2], rgb.b, mlaf(r1[1], rgb.g, r1[0] * rgb.r)),
            mlaf(r2[2], rgb.b, mlaf(r2[1], rgb.g, r2[0] * rgb.r)),
        )
    }
}

impl From<[f64; 3]> for Xyz {
    #[inline]
    fn from(value: [f64; 3]) -> Self {
        Xyz::new(value[0], value[1], value[2])
    }
}

impl From<Xyz> for [f64; 3] {
    #[inline]
    fn from(value: Xyz) -> Self {
        value.to_array()
    }
}

impl TryFrom<&[f64]> for Xyz {
    type Error = ShapeError;

    /// Accepts exactly three components, nothing is flattened or broadcast
    fn try_from(value: &[f64]) -> Result<Self, Self::Error> {
        match *value {
            [x, y, z] => Ok(Xyz::new(x, y, z)),
            _ => Err(ShapeError::new(3, value.len())),
        }
    }
}

impl EuclideanDistance for Xyz {
    fn euclidean_distance(&self, other: Xyz) -> f64 {
        (self.x - other.x)
            .hypot(self.y - other.y)
            .hypot(self.z - other.z)
    }
}

impl Index<usize> for Xyz {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Index out of bounds for Xyz"),
        }
    }
}

impl IndexMut<usize> for Xyz {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Index out of bounds for Xyz"),
        }
    }
}

impl Add<Xyz> for Xyz {
    type Output = Xyz;

    #[inline]
    fn add(self, rhs: Self) -> Xyz {
        Xyz::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign<Xyz> for Xyz {
    #[inline]
    fn add_assign(&mut self, rhs: Xyz) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl Sub<Xyz> for Xyz {
    type Output = Xyz;

    #[inline]
    fn sub(self, rhs: Xyz) -> Self::Output {
        Xyz::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign<Xyz> for Xyz {
    #[inline]
    fn sub_assign(&mut self, rhs: Xyz) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl Mul<f64> for Xyz {
    type Output = Xyz;

    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl MulAssign<f64> for Xyz {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
    }
}

impl Div<f64> for Xyz {
    type Output = Xyz;

    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        Xyz::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Neg for Xyz {
    type Output = Xyz;

    #[inline]
    fn neg(self) -> Self::Output {
        Xyz::new(-self.x, -self.y, -self.z)
    }
}
