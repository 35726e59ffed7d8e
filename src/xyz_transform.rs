/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */

/// sRGB to XYZ transformation matrix, D65 White point
pub const SRGB_TO_XYZ_D65: [[f64; 3]; 3] = [
    [0.4124564f64, 0.3575761f64, 0.1804375f64],
    [0.2126729f64, 0.7151522f64, 0.0721750f64],
    [0.0193339f64, 0.1191920f64, 0.9503041f64],
];

