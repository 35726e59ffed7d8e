/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */

use crate::error::ShapeError;
use crate::image::ImageConfiguration;
use crate::{Chromaticity, Rgb, TransferFunction, Uvw, Xyz};
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::{ParallelSlice, ParallelSliceMut};

/// Converts interleaved XYZ triples into interleaved U\*V\*W\* triples
///
/// # Arguments
/// * `src` - XYZ components in 0..100 domain, `[X, Y, Z, X, Y, Z, ...]`
/// * `dst` - receives `[U, V, W, ...]`, must be the same length as `src`
/// * `illuminant` - reference white chromaticity
pub fn xyz_to_uvw_slice(
    src: &[f64],
    dst: &mut [f64],
    illuminant: Chromaticity,
) -> Result<(), ShapeError> {
    if src.len() % 3 != 0 {
        return Err(ShapeError::new(src.len().next_multiple_of(3), src.len()));
    }
    if dst.len() != src.len() {
        return Err(ShapeError::new(src.len(), dst.len()));
    }

    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = dst.par_chunks_exact_mut(3).zip(src.par_chunks_exact(3));
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = dst.chunks_exact_mut(3).zip(src.chunks_exact(3));
    }

    iter.for_each(|(dst, src)| {
        let uvw = Uvw::from_xyz(Xyz::new(src[0], src[1], src[2]), illuminant);
        dst.copy_from_slice(&uvw.to_array());
    });
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn channels_to_uvw(
    image_configuration: ImageConfiguration,
    src: &[u8],
    src_stride: u32,
    dst: &mut [f32],
    dst_stride: u32,
    width: u32,
    height: u32,
    matrix: &[[f64; 3]; 3],
    transfer_function: TransferFunction,
    illuminant: Chromaticity,
) {
    let channels = image_configuration.get_channels_count();

    assert!(
        dst_stride as usize % std::mem::size_of::<f32>() == 0,
        "Destination stride is not a whole number of f32 lanes"
    );

    let src_stride = src_stride as usize;
    // Strides are in bytes, destination rows are addressed in f32 lanes
    let dst_stride = dst_stride as usize / std::mem::size_of::<f32>();
    let width = width as usize;
    let height = height as usize;
    if width == 0 || height == 0 {
        return;
    }

    assert!(
        src_stride >= width * channels,
        "Source stride is less than a row of pixels"
    );
    assert!(
        dst_stride >= width * 3,
        "Destination stride is less than a row of U*V*W* triples"
    );
    assert!(
        src.len() >= src_stride * height,
        "Source is smaller than height * stride"
    );
    assert!(
        dst.len() >= dst_stride * height,
        "Destination is smaller than height * stride"
    );

    let dst = &mut dst[..dst_stride * height];
    let src = &src[..src_stride * height];

    let iter;

    #[cfg(feature = "rayon")]
    {
        iter = dst
            .par_chunks_exact_mut(dst_stride)
            .zip(src.par_chunks_exact(src_stride));
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = dst
            .chunks_exact_mut(dst_stride)
            .zip(src.chunks_exact(src_stride));
    }

    iter.for_each(|(dst, src)| {
        for (pixel, uvw_dst) in src
            .chunks_exact(channels)
            .zip(dst.chunks_exact_mut(3))
            .take(width)
        {
            let rgb = Rgb::<u8>::new(
                pixel[image_configuration.get_r_channel_offset()],
                pixel[image_configuration.get_g_channel_offset()],
                pixel[image_configuration.get_b_channel_offset()],
            );
            let uvw = rgb.to_uvw(matrix, transfer_function, illuminant);
            uvw_dst[0] = uvw.u as f32;
            uvw_dst[1] = uvw.v as f32;
            uvw_dst[2] = uvw.w as f32;
        }
    });
}

/// This function converts RGB to CIE 1964 U\*V\*W\*. Alpha, if any, is dropped.
/// Output is 3 f32 components per pixel.
///
/// # Arguments
/// * `src` - A slice contains RGB data
/// * `src_stride` - Bytes per row for src data.
/// * `width` - Image width
/// * `height` - Image height
/// * `dst` - A mutable slice to receive U\*V\*W\* data
/// * `dst_stride` - Bytes per row for dst data
/// * `matrix` - Transformation matrix from RGB to XYZ, for example `SRGB_TO_XYZ_D65`
/// * `transfer_function` - Transfer function to linearize RGB
/// * `illuminant` - Reference white, should match the white point of `matrix`
#[allow(clippy::too_many_arguments)]
pub fn rgb_to_uvw(
    src: &[u8],
    src_stride: u32,
    dst: &mut [f32],
    dst_stride: u32,
    width: u32,
    height: u32,
    matrix: &[[f64; 3]; 3],
    transfer_function: TransferFunction,
    illuminant: Chromaticity,
) {
    channels_to_uvw(
        ImageConfiguration::Rgb,
        src,
        src_stride,
        dst,
        dst_stride,
        width,
        height,
        matrix,
        transfer_function,
        illuminant,
    );
}

/// This function converts BGR to CIE 1964 U\*V\*W\*, see [rgb_to_uvw]
#[allow(clippy::too_many_arguments)]
pub fn bgr_to_uvw(
    src: &[u8],
    src_stride: u32,
    dst: &mut [f32],
    dst_stride: u32,
    width: u32,
    height: u32,
    matrix: &[[f64; 3]; 3],
    transfer_function: TransferFunction,
    illuminant: Chromaticity,
) {
    channels_to_uvw(
        ImageConfiguration::Bgr,
        src,
        src_stride,
        dst,
        dst_stride,
        width,
        height,
        matrix,
        transfer_function,
        illuminant,
    );
}

/// This function converts RGBA to CIE 1964 U\*V\*W\*, see [rgb_to_uvw]
#[allow(clippy::too_many_arguments)]
pub fn rgba_to_uvw(
    src: &[u8],
    src_stride: u32,
    dst: &mut [f32],
    dst_stride: u32,
    width: u32,
    height: u32,
    matrix: &[[f64; 3]; 3],
    transfer_function: TransferFunction,
    illuminant: Chromaticity,
) {
    channels_to_uvw(
        ImageConfiguration::Rgba,
        src,
        src_stride,
        dst,
        dst_stride,
        width,
        height,
        matrix,
        transfer_function,
        illuminant,
    );
}

/// This function converts BGRA to CIE 1964 U\*V\*W\*, see [rgb_to_uvw]
#[allow(clippy::too_many_arguments)]
pub fn bgra_to_uvw(
    src: &[u8],
    src_stride: u32,
    dst: &mut [f32],
    dst_stride: u32,
    width: u32,
    height: u32,
    matrix: &[[f64; 3]; 3],
    transfer_function: TransferFunction,
    illuminant: Chromaticity,
) {
    channels_to_uvw(
        ImageConfiguration::Bgra,
        src,
        src_stride,
        dst,
        dst_stride,
        width,
        height,
        matrix,
        transfer_function,
        illuminant,
    );
}

/// sRGB with D65 white point to CIE 1964 U\*V\*W\* against D65
pub fn srgb_to_uvw(
    src: &[u8],
    src_stride: u32,
    dst: &mut [f32],
    dst_stride: u32,
    width: u32,
    height: u32,
) {
    rgb_to_uvw(
        src,
        src_stride,
        dst,
        dst_stride,
        width,
        height,
        &crate::SRGB_TO_XYZ_D65,
        TransferFunction::Srgb,
        crate::D65_ILLUMINANT,
    );
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{D50_ILLUMINANT, D65_ILLUMINANT, SRGB_TO_XYZ_D65};

    fn to_bits(values: &[f32]) -> Vec<u32> {
        values.iter().map(|v| v.to_bits()).collect()
    }

    #[test]
    fn test_slice_matches_scalar() {
        let src = [11.80583421, 10.34, 5.15089229, 0.0, 0.0, 0.0, 50.0, 40.0, 30.0];
        let mut dst = [0f64; 9];
        xyz_to_uvw_slice(&src, &mut dst, D50_ILLUMINANT).unwrap();
        for (i, triple) in src.chunks_exact(3).enumerate() {
            let expected = Uvw::from_xyz(Xyz::try_from(triple).unwrap(), D50_ILLUMINANT);
            let actual: Vec<u64> = dst[i * 3..i * 3 + 3].iter().map(|v| v.to_bits()).collect();
            let expected: Vec<u64> = expected.to_array().iter().map(|v| v.to_bits()).collect();
            assert_eq!(actual, expected, "triple {} differs from scalar path", i);
        }
        assert!(dst[3].is_nan() && dst[4].is_nan(), "black has no chromaticity");
        assert_eq!(dst[5], -17.0, "black is W = -17");
    }

    #[test]
    fn test_slice_shape_errors() {
        let mut dst = [0f64; 6];
        assert_eq!(
            xyz_to_uvw_slice(&[1.0, 2.0, 3.0, 4.0], &mut dst, D50_ILLUMINANT),
            Err(ShapeError::new(6, 4)),
            "partial triple is rejected"
        );
        assert_eq!(
            xyz_to_uvw_slice(&[1.0, 2.0, 3.0], &mut dst, D50_ILLUMINANT),
            Err(ShapeError::new(3, 6)),
            "mismatched destination is rejected"
        );
    }

    #[test]
    fn test_layouts_agree() {
        let width = 2u32;
        let height = 2u32;
        let pixels: [[u8; 3]; 4] = [[255, 0, 0], [12, 200, 90], [255, 255, 255], [0, 0, 0]];

        let rgb: Vec<u8> = pixels.iter().flatten().copied().collect();
        let bgra: Vec<u8> = pixels
            .iter()
            .flat_map(|p| [p[2], p[1], p[0], 255])
            .collect();

        let dst_stride = width * 3 * std::mem::size_of::<f32>() as u32;
        let mut from_rgb = vec![0f32; (width * 3 * height) as usize];
        let mut from_bgra = vec![0f32; (width * 3 * height) as usize];

        rgb_to_uvw(
            &rgb,
            width * 3,
            &mut from_rgb,
            dst_stride,
            width,
            height,
            &SRGB_TO_XYZ_D65,
            TransferFunction::Srgb,
            D65_ILLUMINANT,
        );
        bgra_to_uvw(
            &bgra,
            width * 4,
            &mut from_bgra,
            dst_stride,
            width,
            height,
            &SRGB_TO_XYZ_D65,
            TransferFunction::Srgb,
            D65_ILLUMINANT,
        );
        assert_eq!(
            to_bits(&from_rgb),
            to_bits(&from_bgra),
            "RGB and BGRA layouts disagree"
        );

        // sRGB red is XYZ (41.24564, 21.26729, 1.93339)
        let red = [171.81278f32, 24.711259, 52.264504];
        for (actual, expected) in from_rgb[..3].iter().zip(red) {
            assert!(
                (actual - expected).abs() < 1e-3,
                "red converts to {:?}, expected {:?}",
                &from_rgb[..3],
                red
            );
        }

        let black = &from_rgb[9..];
        assert!(black[0].is_nan() && black[1].is_nan(), "black has no chromaticity");
        assert_eq!(black[2], -17.0, "black is W = -17");
    }

    #[test]
    fn test_padded_stride() {
        let src = [255u8, 255, 255, 7, 7, 0, 0, 0, 9, 9];
        let mut dst = [1f32; 8];
        let dst_stride = 4 * std::mem::size_of::<f32>() as u32;
        srgb_to_uvw(&src, 5, &mut dst, dst_stride, 1, 2);
        assert!(dst[0].abs() < 0.05 && dst[1].abs() < 0.05, "white is achromatic");
        assert_eq!(dst[3], 1.0, "row padding is untouched");
        assert_eq!(dst[7], 1.0, "row padding is untouched");
        assert!(dst[4].is_nan() && dst[5].is_nan(), "black has no chromaticity");
        assert_eq!(dst[6], -17.0, "second row starts after padding");
    }

    #[test]
    #[should_panic(expected = "Destination stride is not a whole number of f32 lanes")]
    fn test_unaligned_destination_stride() {
        let src = [255u8, 255, 255];
        let mut dst = [0f32; 4];
        srgb_to_uvw(&src, 3, &mut dst, 14, 1, 1);
    }
}
