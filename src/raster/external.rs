use std::{
    ffi::OsString,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use anyhow::Context as _;

use crate::{
    foundation::{
        error::{WardrobeError, WardrobeResult},
        fs::move_file,
    },
    raster::{RasterBackend, RasterOutcome, RasterSettings},
};

const SCRATCH_SVG: &str = "asset.svg";
const SCRATCH_PNG: &str = "asset.png";

/// Command-line converters, each with its own flag conventions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExternalTool {
    CairoSvg,
    RsvgConvert,
    Inkscape,
    QuickLook,
}

impl ExternalTool {
    pub fn program_name(self) -> &'static str {
        match self {
            Self::CairoSvg => "cairosvg",
            Self::RsvgConvert => "rsvg-convert",
            Self::Inkscape => "inkscape",
            Self::QuickLook => "qlmanage",
        }
    }

    pub fn display_name(self) -> String {
        match self {
            Self::QuickLook => "qlmanage thumbnailer".to_owned(),
            other => format!("{} CLI", other.program_name()),
        }
    }

    /// Arguments converting `input` into a `size`×`size` PNG inside `work_dir`.
    pub fn args(self, input: &Path, work_dir: &Path, size: u32) -> Vec<OsString> {
        let output = self.expected_output(input, work_dir);
        let size = size.to_string();
        match self {
            Self::CairoSvg => vec![
                input.into(),
                "-o".into(),
                output.into(),
                "--output-width".into(),
                size.clone().into(),
                "--output-height".into(),
                size.into(),
            ],
            Self::RsvgConvert => vec![
                "-w".into(),
                size.clone().into(),
                "-h".into(),
                size.into(),
                "-f".into(),
                "png".into(),
                "-o".into(),
                output.into(),
                input.into(),
            ],
            Self::Inkscape => {
                let mut export = OsString::from("--export-filename=");
                export.push(&output);
                vec![
                    input.into(),
                    "--export-type=png".into(),
                    export,
                    format!("--export-width={size}").into(),
                    format!("--export-height={size}").into(),
                ]
            }
            Self::QuickLook => vec![
                "-t".into(),
                "-s".into(),
                size.into(),
                "-o".into(),
                work_dir.into(),
                input.into(),
            ],
        }
    }

    /// Where the tool leaves its result. Quick Look appends `.png` to the input file name.
    pub fn expected_output(self, input: &Path, work_dir: &Path) -> PathBuf {
        match self {
            Self::QuickLook => {
                let mut name = input
                    .file_name()
                    .map(|n| n.to_os_string())
                    .unwrap_or_else(|| OsString::from(SCRATCH_SVG));
                name.push(".png");
                work_dir.join(name)
            }
            _ => work_dir.join(SCRATCH_PNG),
        }
    }
}

#[derive(Debug)]
pub struct ExternalBackend {
    tool: ExternalTool,
    program: PathBuf,
    size: u32,
    scratch_dir: Option<PathBuf>,
    name: String,
}

impl ExternalBackend {
    pub fn new(tool: ExternalTool, program: PathBuf, settings: &RasterSettings) -> Self {
        Self {
            tool,
            program,
            size: settings.size,
            scratch_dir: settings.scratch_dir.clone(),
            name: tool.display_name(),
        }
    }

    fn scratch(&self) -> WardrobeResult<tempfile::TempDir> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("wardrobe-");
        let dir = match &self.scratch_dir {
            Some(root) => {
                std::fs::create_dir_all(root)
                    .with_context(|| format!("create scratch root '{}'", root.display()))?;
                builder.tempdir_in(root)
            }
            None => builder.tempdir(),
        }
        .context("create scratch directory for external converter")?;
        Ok(dir)
    }
}

impl RasterBackend for ExternalBackend {
    fn name(&self) -> &str {
        &self.name
    }

    fn rasterize(&self, svg: &str, out_path: &Path) -> WardrobeResult<RasterOutcome> {
        let label = out_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| out_path.display().to_string());

        // Removed on drop, so every return below cleans up.
        let scratch = self.scratch()?;
        let input = scratch.path().join(SCRATCH_SVG);
        std::fs::write(&input, svg)
            .with_context(|| format!("write scratch svg '{}'", input.display()))?;

        let args = self.tool.args(&input, scratch.path(), self.size);
        tracing::debug!(program = %self.program.display(), ?args, "invoking converter");

        let output = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                WardrobeError::conversion(
                    &label,
                    format!("failed to spawn {}: {e}", self.program.display()),
                )
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(WardrobeError::conversion(
                &label,
                format!(
                    "{} exited with status {}: {}",
                    self.tool.program_name(),
                    output.status,
                    stderr.trim()
                ),
            ));
        }

        let produced = self.tool.expected_output(&input, scratch.path());
        if !produced.is_file() {
            return Err(WardrobeError::conversion(
                &label,
                format!(
                    "{} reported success but did not produce '{}'",
                    self.tool.program_name(),
                    produced.display()
                ),
            ));
        }

        match image::image_dimensions(&produced) {
            Ok((w, h)) if w == self.size && h == self.size => {}
            Ok((w, h)) => tracing::warn!(
                asset = %label,
                width = w,
                height = h,
                expected = self.size,
                "converter output has unexpected dimensions"
            ),
            Err(e) => tracing::warn!(asset = %label, error = %e, "could not read converter output dimensions"),
        }

        move_file(&produced, out_path)?;
        Ok(RasterOutcome::Raster {
            path: out_path.to_path_buf(),
        })
    }
}
