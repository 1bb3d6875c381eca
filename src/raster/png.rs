use std::path::Path;

use anyhow::Context as _;

use crate::foundation::{
    error::{WardrobeError, WardrobeResult},
    fs::ensure_parent_dir,
};

/// Writes premultiplied RGBA8 pixels as a straight-alpha PNG.
pub fn write_premul_png(path: &Path, width: u32, height: u32, premul: &[u8]) -> WardrobeResult<()> {
    let expected = (width as usize) * (height as usize) * 4;
    if premul.len() != expected {
        return Err(WardrobeError::validation(format!(
            "pixel buffer is {} bytes, expected {expected} for {width}x{height}",
            premul.len()
        )));
    }

    let mut straight = premul.to_vec();
    demultiply_rgba8_in_place(&mut straight);

    let img = image::RgbaImage::from_raw(width, height, straight)
        .ok_or_else(|| WardrobeError::validation("pixel buffer does not match dimensions"))?;

    ensure_parent_dir(path)?;
    img.save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

fn demultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 || a == 255 {
            continue;
        }
        px[0] = ((px[0] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[1] = ((px[1] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[2] = ((px[2] as u16 * 255 + a / 2) / a).min(255) as u8;
    }
}
