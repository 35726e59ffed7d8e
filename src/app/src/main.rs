use anyhow::Context;
use cieuvw_rs::*;
use image::{EncodableLayout, GenericImageView};
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "./assets/asset.jpg".to_string());
    let illuminant_name = std::env::args().nth(2).unwrap_or_else(|| "D65".to_string());
    let illuminant =
        illuminant_chromaticity("CIE 1931 2 Degree Standard Observer", &illuminant_name)?;

    let img = image::open(&path).with_context(|| format!("failed to open {}", path))?;
    let dimensions = img.dimensions();
    println!("dimensions {:?}", dimensions);
    println!("{:?}", img.color());

    let rgb = img.to_rgb8();
    let src_bytes = rgb.as_bytes();
    let width = dimensions.0;
    let height = dimensions.1;
    let components = 3;

    let mut dst_uvw = vec![0f32; components * width as usize * height as usize];

    let start_time = Instant::now();
    rgb_to_uvw(
        src_bytes,
        width * components as u32,
        &mut dst_uvw,
        width * components as u32 * std::mem::size_of::<f32>() as u32,
        width,
        height,
        &SRGB_TO_XYZ_D65,
        TransferFunction::Srgb,
        illuminant,
    );
    let elapsed_time = start_time.elapsed();
    println!("rgb_to_uvw: {:.2?}", elapsed_time);

    // Black pixels have no chromaticity, their U* and V* are NaN
    let mut chromatic = 0usize;
    let mut mean = Uvw::default();
    let mut min_w = f64::INFINITY;
    let mut max_w = f64::NEG_INFINITY;
    for chunk in dst_uvw.chunks_exact(components) {
        let uvw = Uvw::new(chunk[0] as f64, chunk[1] as f64, chunk[2] as f64);
        min_w = min_w.min(uvw.w);
        max_w = max_w.max(uvw.w);
        if uvw.u.is_finite() && uvw.v.is_finite() {
            mean += uvw;
            chromatic += 1;
        }
    }
    let mean = mean / chromatic.max(1) as f64;
    println!("pixels with chromaticity {}", chromatic);
    println!("illuminant {} {:?}", illuminant_name, illuminant);
    println!("mean U*V*W* {:?}", mean);
    println!("W* range {:.4}..{:.4}", min_w, max_w);

    let neutral = Uvw::new(0.0, 0.0, mean.w);
    println!(
        "mean distance from neutral {:.4}",
        mean.euclidean_distance(neutral)
    );
    Ok(())
}
