use std::path::Path;

use base64::Engine as _;

use crate::{
    foundation::{error::WardrobeResult, fs::write_file},
    raster::{RasterBackend, RasterOutcome},
    scene::svg::escape_attr,
};

/// Degraded mode: writes `<out>.html` embedding the scene as a data URL with an auto-clicked
/// download link, and reports [`RasterOutcome::HelperDocument`]. It never yields an image.
#[derive(Clone, Copy, Debug, Default)]
pub struct HtmlFallback;

impl HtmlFallback {
    pub fn helper_path(out_path: &Path) -> std::path::PathBuf {
        out_path.with_extension("html")
    }

    pub fn render_document(svg: &str, download_name: &str) -> String {
        let data_url = format!(
            "data:image/svg+xml;base64,{}",
            base64::engine::general_purpose::STANDARD.encode(svg.as_bytes())
        );
        let name = escape_attr(download_name);
        format!(
            "<!DOCTYPE html><html><body>\
             <a download='{name}' href='{data_url}'>Download {name}</a>\
             <script>setTimeout(()=>document.querySelector('a').click(),200);</script>\
             </body></html>\n"
        )
    }
}

impl RasterBackend for HtmlFallback {
    fn name(&self) -> &str {
        "html-fallback"
    }

    fn rasterize(&self, svg: &str, out_path: &Path) -> WardrobeResult<RasterOutcome> {
        let html_path = Self::helper_path(out_path);
        // The payload is SVG, so offer it under an .svg name.
        let download = out_path
            .with_extension("svg")
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "asset.svg".to_owned());

        write_file(&html_path, Self::render_document(svg, &download))?;
        tracing::warn!(
            helper = %html_path.display(),
            "no raster converter; wrote HTML helper instead of an image"
        );
        Ok(RasterOutcome::HelperDocument { path: html_path })
    }
}
