/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */

/// Interleaved 8 bit pixel layouts accepted by the image routines
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq)]
pub enum ImageConfiguration {
    Rgb,
    Rgba,
    Bgra,
    Bgr,
}

impl ImageConfiguration {
    #[inline(always)]
    pub fn get_channels_count(&self) -> usize {
        match self {
            ImageConfiguration::Rgb | ImageConfiguration::Bgr => 3,
            ImageConfiguration::Rgba | ImageConfiguration::Bgra => 4,
        }
    }

    #[inline(always)]
    pub fn get_r_channel_offset(&self) -> usize {
        match self {
            ImageConfiguration::Rgb | ImageConfiguration::Rgba => 0,
            ImageConfiguration::Bgra | ImageConfiguration::Bgr => 2,
        }
    }

    #[inline(always)]
    pub fn get_g_channel_offset(&self) -> usize {
        1
    }

    #[inline(always)]
    pub fn get_b_channel_offset(&self) -> usize {
        match self {
            ImageConfiguration::Rgb | ImageConfiguration::Rgba => 2,
            ImageConfiguration::Bgra | ImageConfiguration::Bgr => 0,
        }
    }
}
