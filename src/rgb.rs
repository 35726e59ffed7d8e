/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::{Chromaticity, TransferFunction, Uvw, Xyz};

#[derive(Debug, PartialOrd, PartialEq, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// Represents any RGB values, Rgb<u8>, Rgb<f64> etc.
pub struct Rgb<T> {
    /// Red component
    pub r: T,
    /// Green component
    pub g: T,
    /// Blue component
    pub b: T,
}

impl<T> Rgb<T> {
    pub fn new(r: T, g: T, b: T) -> Rgb<T> {
        Rgb { r, g, b }
    }
}

static RGB_SCALE_U8: f64 = 1f64 / 255f64;

impl Rgb<u8> {
    /// Scales components into 0..1 range without touching the transfer curve
    #[inline]
    pub fn to_rgb_f64(&self) -> Rgb<f64> {
        Rgb::<f64>::new(
            self.r as f64 * RGB_SCALE_U8,
            self.g as f64 * RGB_SCALE_U8,
            self.b as f64 * RGB_SCALE_U8,
        )
    }

    /// Converts gamma corrected RGB to linear RGB
    ///
    /// # Arguments
    /// `transfer_function` - Transfer function to convert RGB into linear RGB
    #[inline]
    pub fn to_linear(&self, transfer_function: TransferFunction) -> Rgb<f64> {
        let rgb = self.to_rgb_f64();
        Rgb::<f64>::new(
            transfer_function.linearize(rgb.r),
            transfer_function.linearize(rgb.g),
            transfer_function.linearize(rgb.b),
        )
    }

    /// Converts rgb to XYZ
    ///
    /// # Arguments
    /// `matrix` - Transformation matrix from RGB to XYZ, for example `SRGB_TO_XYZ_D65`
    /// `transfer_function` - Transfer function to convert into linear colorspace
    #[inline]
    pub fn to_xyz(&self, matrix: &[[f64; 3]; 3], transfer_function: TransferFunction) -> Xyz {
        Xyz::from_rgb(*self, matrix, transfer_function)
    }

    /// Converts rgb to CIE 1964 U*V*W* against `illuminant`
    ///
    /// XYZ is scaled into the 0..100 domain the U*V*W* formula expects.
    #[inline]
    pub fn to_uvw(
        &self,
        matrix: &[[f64; 3]; 3],
        transfer_function: TransferFunction,
        illuminant: Chromaticity,
    ) -> Uvw {
        Uvw::from_xyz(self.to_xyz(matrix, transfer_function).scaled(), illuminant)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::utils::approx_eq;
    use crate::{D65_ILLUMINANT, SRGB_TO_XYZ_D65};

    #[test]
    fn test_white_is_achromatic() {
        let white = Rgb::<u8>::new(255, 255, 255);
        let uvw = white.to_uvw(&SRGB_TO_XYZ_D65, TransferFunction::Srgb, D65_ILLUMINANT);
        assert!(approx_eq(uvw.u, 0.0, 0.05), "U of white is {}", uvw.u);
        assert!(approx_eq(uvw.v, 0.0, 0.05), "V of white is {}", uvw.v);
        assert!(approx_eq(uvw.w, 25f64 * 100f64.cbrt() - 17f64, 1e-3), "W of white is {}", uvw.w);
    }

    #[test]
    fn test_linear_scale() {
        let rgb = Rgb::<u8>::new(0, 255, 51).to_linear(TransferFunction::Gamma2p2);
        assert_eq!(rgb.r, 0.0, "black stays black");
        assert!(approx_eq(rgb.g, 1.0, 1e-12), "full scale is one");
        assert!(approx_eq(rgb.b, 0.2f64.powf(2.2), 1e-12), "gamma is applied");
    }
}
