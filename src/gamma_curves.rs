/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */

#[inline(always)]
pub fn srgb_to_linear(gamma: f64) -> f64 {
    if gamma < 0f64 {
        0f64
    } else if gamma < 12.92f64 * 0.0030412825601275209f64 {
        gamma * (1f64 / 12.92f64)
    } else if gamma < 1.0f64 {
        ((gamma + 0.0550107189475866f64) / 1.0550107189475866f64).powf(2.4f64)
    } else {
        1.0f64
    }
}

#[inline(always)]
pub fn rec709_to_linear(gamma: f64) -> f64 {
    if gamma < 0.0f64 {
        0.0f64
    } else if gamma < 4.5f64 * 0.018053968510807f64 {
        gamma * (1f64 / 4.5f64)
    } else if gamma < 1.0f64 {
        ((gamma + 0.09929682680944f64) / 1.09929682680944f64).powf(1.0f64 / 0.45f64)
    } else {
        1.0f64
    }
}

#[inline(always)]
pub fn gamma2p2_to_linear(gamma: f64) -> f64 {
    gamma.powf(2.2f64)
}

#[inline(always)]
pub fn gamma2p8_to_linear(gamma: f64) -> f64 {
    gamma.powf(2.8f64)
}

/// Transfer function used to decode encoded RGB before it reaches XYZ
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Default)]
pub enum TransferFunction {
    /// sRGB Transfer function
    #[default]
    Srgb,
    /// Rec.709 Transfer function
    Rec709,
    /// Pure gamma 2.2 Transfer function
    Gamma2p2,
    /// Pure gamma 2.8 Transfer function
    Gamma2p8,
}

impl TransferFunction {
    /// Decodes an encoded component in 0..1 range into linear light
    #[inline(always)]
    pub fn linearize(&self, v: f64) -> f64 {
        match self {
            TransferFunction::Srgb => srgb_to_linear(v),
            TransferFunction::Rec709 => rec709_to_linear(v),
            TransferFunction::Gamma2p2 => gamma2p2_to_linear(v),
            TransferFunction::Gamma2p8 => gamma2p8_to_linear(v),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::utils::approx_eq;

    #[test]
    fn test_linearize_midpoint() {
        for (tf, expected) in [
            (TransferFunction::Srgb, 0.21404584249254321),
            (TransferFunction::Rec709, 0.2597194371011774),
            (TransferFunction::Gamma2p2, 0.217637640824031),
            (TransferFunction::Gamma2p8, 0.1435872943746294),
        ] {
            let linear = tf.linearize(0.5);
            assert!(
                approx_eq(linear, expected, 1e-12),
                "{:?} maps 0.5 to {}, expected {}",
                tf,
                linear,
                expected
            );
        }
    }

    #[test]
    fn test_linear_toe() {
        assert!(approx_eq(srgb_to_linear(0.02), 0.02 / 12.92, 1e-15), "sRGB toe is linear");
        assert!(approx_eq(rec709_to_linear(0.05), 0.05 / 4.5, 1e-15), "Rec.709 toe is linear");
    }

    #[test]
    fn test_srgb_clamps() {
        assert_eq!(srgb_to_linear(-0.5), 0.0, "negative input clamps to zero");
        assert_eq!(srgb_to_linear(1.5), 1.0, "input above one clamps to one");
    }
}
