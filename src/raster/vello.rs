use std::path::Path;

use vello_cpu::{
    kurbo,
    peniko::{self, Color},
};

use crate::{
    foundation::error::{WardrobeError, WardrobeResult},
    raster::{RasterBackend, RasterOutcome, in_process::parse_svg, png::write_premul_png},
};

/// Tier-2 in-process renderer: walks the `usvg` tree and draws it with `vello_cpu`.
///
/// Covers what the catalog scenes use (solid and gradient fills, strokes, group opacity).
/// Images, text and patterns are skipped.
#[derive(Clone, Copy, Debug)]
pub struct VelloCpuBackend {
    size: u16,
}

impl VelloCpuBackend {
    pub fn new(size: u32) -> WardrobeResult<Self> {
        let size: u16 = size
            .try_into()
            .map_err(|_| WardrobeError::validation("vello_cpu surface size exceeds u16"))?;
        Ok(Self { size })
    }

    fn render(&self, tree: &usvg::Tree) -> Vec<u8> {
        let scale = kurbo::Affine::scale_non_uniform(
            f64::from(self.size) / f64::from(tree.size().width()),
            f64::from(self.size) / f64::from(tree.size().height()),
        );

        let mut ctx = vello_cpu::RenderContext::new(self.size, self.size);
        draw_group(&mut ctx, tree.root(), scale);
        ctx.flush();

        let mut pixmap = vello_cpu::Pixmap::new(self.size, self.size);
        ctx.render_to_pixmap(&mut pixmap);
        pixmap.data_as_u8_slice().to_vec()
    }
}

impl RasterBackend for VelloCpuBackend {
    fn name(&self) -> &str {
        "vello_cpu (in-process)"
    }

    fn rasterize(&self, svg: &str, out_path: &Path) -> WardrobeResult<RasterOutcome> {
        let tree = parse_svg(svg)?;
        let pixels = self.render(&tree);
        let size = u32::from(self.size);
        write_premul_png(out_path, size, size, &pixels)?;
        Ok(RasterOutcome::Raster {
            path: out_path.to_path_buf(),
        })
    }
}

fn draw_group(ctx: &mut vello_cpu::RenderContext, group: &usvg::Group, scale: kurbo::Affine) {
    let opacity = group.opacity().get();
    if opacity < 1.0 {
        ctx.push_opacity_layer(opacity);
    }
    for node in group.children() {
        match node {
            usvg::Node::Group(g) => draw_group(ctx, g, scale),
            usvg::Node::Path(p) => draw_path(ctx, p, scale),
            _ => {}
        }
    }
    if opacity < 1.0 {
        ctx.pop_layer();
    }
}

fn draw_path(ctx: &mut vello_cpu::RenderContext, path: &usvg::Path, scale: kurbo::Affine) {
    if !path.is_visible() {
        return;
    }
    let shape = tiny_path_to_cpu(path.data());
    ctx.set_transform(scale * transform_to_cpu(path.abs_transform()));

    if let Some(fill) = path.fill() {
        if set_paint(ctx, fill.paint(), fill.opacity().get()) {
            ctx.fill_path(&shape);
        }
    }

    if let Some(stroke) = path.stroke() {
        if set_paint(ctx, stroke.paint(), stroke.opacity().get()) {
            let cap = match stroke.linecap() {
                usvg::LineCap::Butt => kurbo::Cap::Butt,
                usvg::LineCap::Round => kurbo::Cap::Round,
                usvg::LineCap::Square => kurbo::Cap::Square,
            };
            let join = match stroke.linejoin() {
                usvg::LineJoin::Round => kurbo::Join::Round,
                usvg::LineJoin::Bevel => kurbo::Join::Bevel,
                _ => kurbo::Join::Miter,
            };
            ctx.set_stroke(
                kurbo::Stroke::new(f64::from(stroke.width().get()))
                    .with_caps(cap)
                    .with_join(join),
            );
            ctx.stroke_path(&shape);
        }
    }
}

/// Returns false for paints this backend does not draw.
fn set_paint(ctx: &mut vello_cpu::RenderContext, paint: &usvg::Paint, opacity: f32) -> bool {
    ctx.set_paint_transform(kurbo::Affine::IDENTITY);
    match paint {
        usvg::Paint::Color(c) => {
            let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
            ctx.set_paint(Color::from_rgba8(c.red, c.green, c.blue, alpha));
            true
        }
        usvg::Paint::LinearGradient(lg) => {
            let gradient = peniko::Gradient::new_linear(
                (f64::from(lg.x1()), f64::from(lg.y1())),
                (f64::from(lg.x2()), f64::from(lg.y2())),
            )
            .with_stops(stops_to_cpu(lg.stops(), opacity).as_slice());
            ctx.set_paint_transform(transform_to_cpu(lg.transform()));
            ctx.set_paint(gradient);
            true
        }
        usvg::Paint::RadialGradient(rg) => {
            let gradient = peniko::Gradient::new_radial(
                (f64::from(rg.cx()), f64::from(rg.cy())),
                rg.r().get(),
            )
            .with_stops(stops_to_cpu(rg.stops(), opacity).as_slice());
            ctx.set_paint_transform(transform_to_cpu(rg.transform()));
            ctx.set_paint(gradient);
            true
        }
        usvg::Paint::Pattern(_) => false,
    }
}

fn stops_to_cpu(stops: &[usvg::Stop], opacity: f32) -> Vec<(f32, Color)> {
    stops
        .iter()
        .map(|s| {
            let c = s.color();
            let alpha = (s.opacity().get() * opacity).clamp(0.0, 1.0);
            (
                s.offset().get(),
                Color::from_rgba8(c.red, c.green, c.blue, (alpha * 255.0).round() as u8),
            )
        })
        .collect()
}

fn transform_to_cpu(t: usvg::Transform) -> kurbo::Affine {
    kurbo::Affine::new([
        f64::from(t.sx),
        f64::from(t.ky),
        f64::from(t.kx),
        f64::from(t.sy),
        f64::from(t.tx),
        f64::from(t.ty),
    ])
}

fn tiny_path_to_cpu(path: &usvg::tiny_skia_path::Path) -> kurbo::BezPath {
    use usvg::tiny_skia_path::PathSegment;

    let pt = |p: usvg::tiny_skia_path::Point| kurbo::Point::new(f64::from(p.x), f64::from(p.y));
    let mut out = kurbo::BezPath::new();
    for seg in path.segments() {
        match seg {
            PathSegment::MoveTo(p) => out.move_to(pt(p)),
            PathSegment::LineTo(p) => out.line_to(pt(p)),
            PathSegment::QuadTo(p1, p2) => out.quad_to(pt(p1), pt(p2)),
            PathSegment::CubicTo(p1, p2, p3) => out.curve_to(pt(p1), pt(p2), pt(p3)),
            PathSegment::Close => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_sizes_beyond_u16() {
        assert!(VelloCpuBackend::new(70_000).is_err());
        assert!(VelloCpuBackend::new(1024).is_ok());
    }

    #[test]
    fn transform_coefficients_map_to_kurbo_order() {
        let t = usvg::Transform::from_row(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        assert_eq!(
            transform_to_cpu(t).as_coeffs(),
            [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]
        );
    }

    #[test]
    fn draws_solid_rect() {
        let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" width="8" height="8" viewBox="0 0 8 8"><rect width="8" height="8" fill="#00ff00"/></svg>"##;
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("g.png");
        VelloCpuBackend::new(16).unwrap().rasterize(svg, &out).unwrap();

        let img = image::open(&out).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (16, 16));
        assert_eq!(img.get_pixel(8, 8).0, [0, 255, 0, 255]);
    }
}
