/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */

//! # U*V*W*
use crate::utils::mlaf;
use crate::{Chromaticity, EuclideanDistance, Ucs, UcsChromaticity, Xyy, Xyz, D50_ILLUMINANT};
use std::ops::{Add, AddAssign, Div, Index, Mul, MulAssign, Neg, Sub, SubAssign};

/// Struct representing a color in CIE 1964 U\*V\*W\* color space
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uvw {
    /// The U\* value of the colour.
    ///
    /// Chromatic difference from the reference white along the UCS u axis,
    /// scaled by W\*. Negative values are common.
    pub u: f64,
    /// The V\* value of the colour.
    ///
    /// Chromatic difference from the reference white along the UCS v axis,
    /// scaled by W\*.
    pub v: f64,
    /// The W\* value (lightness index) of the colour.
    ///
    /// Depends on Y only: black is -17, Y = 100 is about 99.
    pub w: f64,
}

const W_SCALE: f64 = 25f64;
const W_OFFSET: f64 = 17f64;
const UV_SCALE: f64 = 13f64;

impl Uvw {
    #[inline]
    pub fn new(u: f64, v: f64, w: f64) -> Uvw {
        Uvw { u, v, w }
    }

    /// Converts CIE XYZ to CIE 1964 U\*V\*W\*
    ///
    /// # Arguments
    /// * `xyz` - tristimulus value in 0..100 domain, not validated
    /// * `illuminant` - chromaticity of the reference white
    ///
    /// Negative Y goes through the real cube root. Black has no chromaticity,
    /// its U\* and V\* come out NaN while W\* is -17.
    #[inline]
    pub fn from_xyz(xyz: Xyz, illuminant: Chromaticity) -> Uvw {
        let xyy = Xyy::from_xyz(xyz, illuminant);
        let white = illuminant.to_uv();
        let uv = Ucs::from_xyz(xyz).to_uv();

        let w = mlaf(W_SCALE, xyy.luminance.cbrt(), -W_OFFSET);
        let w13 = UV_SCALE * w;
        Uvw::new(w13 * (uv.u - white.u), w13 * (uv.v - white.v), w)
    }

    /// Converts CIE XYZ to CIE 1964 U\*V\*W\* against D50, 2 degree observer
    #[inline]
    pub fn from_xyz_d50(xyz: Xyz) -> Uvw {
        Uvw::from_xyz(xyz, D50_ILLUMINANT)
    }

    /// Converts back to CIE XYZ in 0..100 domain
    ///
    /// `illuminant` must be the one used for the forward conversion.
    #[inline]
    pub fn to_xyz(&self, illuminant: Chromaticity) -> Xyz {
        let luminance = ((self.w + W_OFFSET) / W_SCALE).powi(3);
        let white = illuminant.to_uv();
        let uv = if self.w != 0f64 {
            let w13 = 1f64 / (UV_SCALE * self.w);
            UcsChromaticity::new(mlaf(self.u, w13, white.u), mlaf(self.v, w13, white.v))
        } else {
            white
        };
        let xy = uv.to_xy();
        Xyy::new(xy.x, xy.y, luminance).to_xyz()
    }

    #[inline]
    pub fn to_array(&self) -> [f64; 3] {
        [self.u, self.v, self.w]
    }
}

/// Converts CIE XYZ to CIE 1964 U\*V\*W\* against `illuminant`
#[inline]
pub fn xyz_to_uvw(xyz: Xyz, illuminant: Chromaticity) -> Uvw {
    Uvw::from_xyz(xyz, illuminant)
}

impl From<Uvw> for [f64; 3] {
    #[inline]
    fn from(value: Uvw) -> Self {
        value.to_array()
    }
}

impl From<[f64; 3]> for Uvw {
    #[inline]
    fn from(value: [f64; 3]) -> Self {
        Uvw::new(value[0], value[1], value[2])
    }
}

impl EuclideanDistance for Uvw {
    /// CIE 1964 colour difference
    #[inline]
    fn euclidean_distance(&self, other: Uvw) -> f64 {
        let du = self.u - other.u;
        let dv = self.v - other.v;
        let dw = self.w - other.w;
        (du * du + dv * dv + dw * dw).sqrt()
    }
}

impl Index<usize> for Uvw {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.u,
            1 => &self.v,
            2 => &self.w,
            _ => panic!("Index out of bounds for Uvw"),
        }
    }
}

impl Add<Uvw> for Uvw {
    type Output = Uvw;

    #[inline]
    fn add(self, rhs: Uvw) -> Uvw {
        Uvw::new(self.u + rhs.u, self.v + rhs.v, self.w + rhs.w)
    }
}

impl Sub<Uvw> for Uvw {
    type Output = Uvw;

    #[inline]
    fn sub(self, rhs: Uvw) -> Uvw {
        Uvw::new(self.u - rhs.u, self.v - rhs.v, self.w - rhs.w)
    }
}

impl AddAssign<Uvw> for Uvw {
    #[inline]
    fn add_assign(&mut self, rhs: Uvw) {
        self.u += rhs.u;
        self.v += rhs.v;
        self.w += rhs.w;
    }
}

impl SubAssign<Uvw> for Uvw {
    #[inline]
    fn sub_assign(&mut self, rhs: Uvw) {
        self.u -= rhs.u;
        self.v -= rhs.v;
        self.w -= rhs.w;
    }
}

impl Mul<f64> for Uvw {
    type Output = Uvw;

    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        Uvw::new(self.u * rhs, self.v * rhs, self.w * rhs)
    }
}

impl MulAssign<f64> for Uvw {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        self.u *= rhs;
        self.v *= rhs;
        self.w *= rhs;
    }
}

impl Div<f64> for Uvw {
    type Output = Uvw;

    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        Uvw::new(self.u / rhs, self.v / rhs, self.w / rhs)
    }
}

impl Neg for Uvw {
    type Output = Uvw;

    #[inline]
    fn neg(self) -> Self::Output {
        Uvw::new(-self.u, -self.v, -self.w)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::utils::approx_eq;
    use crate::{Illuminant, StandardObserver};

    const SAMPLE: Xyz = Xyz {
        x: 11.80583421,
        y: 10.34,
        z: 5.15089229,
    };

    #[test]
    fn test_reference_sample() {
        let uvw = Uvw::from_xyz(SAMPLE, D50_ILLUMINANT);
        assert!(approx_eq(uvw.u, 24.25433719, 1e-4), "U is {}", uvw.u);
        assert!(approx_eq(uvw.v, 7.22054843, 1e-4), "V is {}", uvw.v);
        assert!(approx_eq(uvw.w, 37.46450007, 1e-4), "W is {}", uvw.w);
        assert_eq!(Uvw::from_xyz_d50(SAMPLE), uvw, "D50 is the default white");
        assert_eq!(xyz_to_uvw(SAMPLE, D50_ILLUMINANT), uvw, "free function agrees");
    }

    #[test]
    fn test_reference_white_is_achromatic() {
        for illuminant in [Illuminant::D50, Illuminant::D65, Illuminant::A, Illuminant::F11] {
            let white = illuminant.chromaticity(StandardObserver::Cie1931TwoDegree);
            for luminance in [0.5, 18.0, 50.0, 100.0] {
                let uvw = Uvw::from_xyz(white.to_xyz().scale(luminance), white);
                assert!(
                    approx_eq(uvw.u, 0.0, 1e-9) && approx_eq(uvw.v, 0.0, 1e-9),
                    "{} at Y = {} is not achromatic: {:?}",
                    illuminant,
                    luminance,
                    uvw
                );
            }
        }
    }

    #[test]
    fn test_black() {
        let uvw = Uvw::from_xyz(Xyz::default(), D50_ILLUMINANT);
        assert_eq!(uvw.w, -17.0, "black is W = -17");
        assert!(
            uvw.u.is_nan() && uvw.v.is_nan(),
            "black has no chromaticity: {:?}",
            uvw
        );
    }

    #[test]
    fn test_w_monotonic_in_luminance() {
        let mut previous = f64::NEG_INFINITY;
        for i in 1..=100 {
            let w = Uvw::from_xyz(SAMPLE.scale(i as f64 / 10.34), D50_ILLUMINANT).w;
            assert!(w > previous, "W does not increase at Y = {}", i);
            previous = w;
        }
    }

    #[test]
    fn test_scaling_keeps_chromatic_factors() {
        let base = Uvw::from_xyz(SAMPLE, D50_ILLUMINANT);
        let scaled = Uvw::from_xyz(SAMPLE.scale(3.0), D50_ILLUMINANT);
        assert!(scaled.w > base.w, "W grows with luminance");
        assert!(
            approx_eq(scaled.u / scaled.w, base.u / base.w, 1e-12),
            "U / W changed under scaling"
        );
        assert!(
            approx_eq(scaled.v / scaled.w, base.v / base.w, 1e-12),
            "V / W changed under scaling"
        );
    }

    #[test]
    fn test_negative_luminance_is_finite() {
        let uvw = Uvw::from_xyz(Xyz::new(1.0, -8.0, 1.0), D50_ILLUMINANT);
        assert!(approx_eq(uvw.w, -67.0, 1e-12), "real cube root of -8 is -2, W is {}", uvw.w);
    }

    #[test]
    fn test_deterministic() {
        let a = Uvw::from_xyz(SAMPLE, D50_ILLUMINANT);
        let b = Uvw::from_xyz(SAMPLE, D50_ILLUMINANT);
        assert_eq!(a.u.to_bits(), b.u.to_bits(), "U differs between calls");
        assert_eq!(a.v.to_bits(), b.v.to_bits(), "V differs between calls");
        assert_eq!(a.w.to_bits(), b.w.to_bits(), "W differs between calls");
    }

    #[test]
    fn test_to_xyz() {
        let back = Uvw::from_xyz(SAMPLE, D50_ILLUMINANT).to_xyz(D50_ILLUMINANT);
        assert!(approx_eq(back.x, SAMPLE.x, 1e-9), "X is {}", back.x);
        assert!(approx_eq(back.y, SAMPLE.y, 1e-9), "Y is {}", back.y);
        assert!(approx_eq(back.z, SAMPLE.z, 1e-9), "Z is {}", back.z);

        let black = Uvw::new(0.0, 0.0, -17.0).to_xyz(D50_ILLUMINANT);
        assert_eq!(black, Xyz::default(), "W = -17 is black");
    }

    #[test]
    fn test_colour_difference() {
        let a = Uvw::new(1.0, 2.0, 3.0);
        let b = Uvw::new(1.0, 5.0, 7.0);
        assert_eq!(a.euclidean_distance(b), 5.0, "3-4-5 triangle");
        assert_eq!(a[0] + a[1] + a[2], 6.0, "indexing reaches all components");
        assert_eq!(<[f64; 3]>::from(a - b), [0.0, -3.0, -4.0], "component wise difference");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let uvw = Uvw::from_xyz(SAMPLE, D50_ILLUMINANT);
        let json = serde_json::to_string(&uvw).unwrap();
        assert_eq!(
            serde_json::from_str::<Uvw>(&json).unwrap(),
            uvw,
            "U*V*W* does not survive serialization: {}",
            json
        );

        let white: crate::Chromaticity =
            serde_json::from_str(r#"{"x":0.34567,"y":0.3585}"#).unwrap();
        assert_eq!(white, D50_ILLUMINANT, "white point fields are named x and y");

        let json = serde_json::to_string(&Illuminant::F11).unwrap();
        assert_eq!(
            serde_json::from_str::<Illuminant>(&json).unwrap(),
            Illuminant::F11,
            "illuminant does not survive serialization"
        );
    }
}
