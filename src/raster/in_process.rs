use std::path::Path;

use anyhow::Context as _;

use crate::{
    foundation::error::{WardrobeError, WardrobeResult},
    raster::{RasterBackend, RasterOutcome, png::write_premul_png},
};

pub fn parse_svg(svg: &str) -> WardrobeResult<usvg::Tree> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg, &opts).context("parse svg tree")?;
    Ok(tree)
}

/// Renders `tree` scaled to fill a `width`×`height` pixmap. Returns premultiplied RGBA8.
pub fn rasterize_svg_to_premul_rgba8(
    tree: &usvg::Tree,
    width: u32,
    height: u32,
) -> WardrobeResult<Vec<u8>> {
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| WardrobeError::validation("failed to allocate svg pixmap"))?;

    let sx = (width as f32) / tree.size().width();
    let sy = (height as f32) / tree.size().height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);

    resvg::render(tree, xform, &mut pixmap.as_mut());
    Ok(pixmap.data().to_vec())
}

#[derive(Clone, Copy, Debug)]
pub struct ResvgBackend {
    size: u32,
}

impl ResvgBackend {
    pub fn new(size: u32) -> Self {
        Self { size }
    }
}

impl RasterBackend for ResvgBackend {
    fn name(&self) -> &str {
        "resvg (in-process)"
    }

    fn rasterize(&self, svg: &str, out_path: &Path) -> WardrobeResult<RasterOutcome> {
        let tree = parse_svg(svg)?;
        let pixels = rasterize_svg_to_premul_rgba8(&tree, self.size, self.size)?;
        write_premul_png(out_path, self.size, self.size, &pixels)?;
        Ok(RasterOutcome::Raster {
            path: out_path.to_path_buf(),
        })
    }
}
