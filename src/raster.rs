//! Rasterization backends and the one-shot backend selector.
//!
//! Candidates are probed in a fixed priority order (see [`PRIORITY`]); the first available one
//! is selected for the whole process run. When nothing is available the selector degrades to
//! [`HtmlFallback`], whose every conversion yields [`RasterOutcome::HelperDocument`] instead of
//! an image. The batch driver treats that outcome as a failed run.

use std::path::{Path, PathBuf};

use crate::{
    foundation::error::{WardrobeError, WardrobeResult},
    scene::CANVAS_SIZE,
};

pub mod external;
pub mod html;
pub mod in_process;
pub mod png;
pub mod probe;
#[cfg(feature = "vello-cpu")]
pub mod vello;

pub use external::{ExternalBackend, ExternalTool};
pub use html::HtmlFallback;
pub use in_process::ResvgBackend;
pub use probe::{Candidate, PRIORITY, ProbeContext, find_executable, probe, probe_all};

/// Result of converting one scene.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RasterOutcome {
    Raster { path: PathBuf },
    /// No image was produced; a helper document for manual export was written instead.
    HelperDocument { path: PathBuf },
}

impl RasterOutcome {
    pub fn is_raster(&self) -> bool {
        matches!(self, Self::Raster { .. })
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::Raster { path } | Self::HelperDocument { path } => path,
        }
    }
}

pub trait RasterBackend {
    fn name(&self) -> &str;

    fn rasterize(&self, svg: &str, out_path: &Path) -> WardrobeResult<RasterOutcome>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BackendKind {
    Resvg,
    VelloCpu,
    External {
        tool: ExternalTool,
        program: PathBuf,
    },
    HtmlFallback,
}

#[derive(Clone, Debug)]
pub struct RasterSettings {
    pub size: u32,
    /// Parent directory for external-tool scratch directories; the system temp dir if unset.
    pub scratch_dir: Option<PathBuf>,
}

impl Default for RasterSettings {
    fn default() -> Self {
        Self {
            size: CANVAS_SIZE,
            scratch_dir: None,
        }
    }
}

impl RasterSettings {
    pub fn validate(&self) -> WardrobeResult<()> {
        if self.size == 0 || self.size > 16_384 {
            return Err(WardrobeError::validation(format!(
                "raster size must be within 1..=16384, got {}",
                self.size
            )));
        }
        Ok(())
    }
}

pub fn create_backend(
    kind: &BackendKind,
    settings: &RasterSettings,
) -> WardrobeResult<Box<dyn RasterBackend>> {
    settings.validate()?;
    match kind {
        BackendKind::Resvg => Ok(Box::new(ResvgBackend::new(settings.size))),
        #[cfg(feature = "vello-cpu")]
        BackendKind::VelloCpu => Ok(Box::new(vello::VelloCpuBackend::new(settings.size)?)),
        BackendKind::External { tool, program } => Ok(Box::new(ExternalBackend::new(
            *tool,
            program.clone(),
            settings,
        ))),
        BackendKind::HtmlFallback => Ok(Box::new(HtmlFallback)),
        #[allow(unreachable_patterns)]
        _ => Err(WardrobeError::validation(
            "requested backend is not compiled into this build",
        )),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    Selected(BackendKind),
    Degraded,
}

impl Selection {
    /// Walks the candidates in priority order and keeps the first available one.
    ///
    /// A forced candidate is probed alone; its absence is an error rather than a silent
    /// downgrade.
    pub fn probe(ctx: &ProbeContext) -> WardrobeResult<Self> {
        if let Some(forced) = ctx.forced {
            if forced == Candidate::Html {
                return Ok(Self::Degraded);
            }
            return match probe(forced, ctx) {
                Some(kind) => Ok(Self::Selected(kind)),
                None => Err(WardrobeError::validation(format!(
                    "requested backend '{}' is not available",
                    forced.as_str()
                ))),
            };
        }

        for &candidate in PRIORITY {
            if let Some(kind) = probe(candidate, ctx) {
                return Ok(Self::Selected(kind));
            }
        }
        Ok(Self::Degraded)
    }
}

/// The backend chosen for this run. Built once; the choice never changes afterwards.
pub struct Rasterizer {
    selection: Selection,
    backend: Box<dyn RasterBackend>,
}

impl std::fmt::Debug for Rasterizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rasterizer")
            .field("selection", &self.selection)
            .field("name", &self.backend.name())
            .finish()
    }
}

impl Rasterizer {
    #[tracing::instrument(skip_all)]
    pub fn select(ctx: &ProbeContext, settings: &RasterSettings) -> WardrobeResult<Self> {
        let selection = Selection::probe(ctx)?;
        let rasterizer = Self::from_selection(selection, settings)?;
        if rasterizer.is_degraded() {
            tracing::warn!("no raster converter found; falling back to HTML helper documents");
        } else {
            tracing::info!(backend = rasterizer.name(), "selected raster backend");
        }
        Ok(rasterizer)
    }

    pub fn from_selection(selection: Selection, settings: &RasterSettings) -> WardrobeResult<Self> {
        let kind = match &selection {
            Selection::Selected(kind) => kind.clone(),
            Selection::Degraded => BackendKind::HtmlFallback,
        };
        let backend = create_backend(&kind, settings)?;
        Ok(Self { selection, backend })
    }

    pub fn name(&self) -> &str {
        self.backend.name()
    }

    pub fn is_degraded(&self) -> bool {
        self.selection == Selection::Degraded
    }

    pub fn rasterize(&self, svg: &str, out_path: &Path) -> WardrobeResult<RasterOutcome> {
        self.backend.rasterize(svg, out_path)
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;

    use super::*;

    fn nothing_available() -> ProbeContext {
        ProbeContext {
            allow_in_process: false,
            search_path: Some(OsString::new()),
            forced: None,
        }
    }

    #[test]
    fn in_process_wins_when_allowed() {
        let ctx = ProbeContext {
            allow_in_process: true,
            ..nothing_available()
        };
        assert_eq!(
            Selection::probe(&ctx).unwrap(),
            Selection::Selected(BackendKind::Resvg)
        );
    }

    #[test]
    fn empty_environment_degrades() {
        let sel = Selection::probe(&nothing_available()).unwrap();
        assert_eq!(sel, Selection::Degraded);

        let r = Rasterizer::from_selection(sel, &RasterSettings::default()).unwrap();
        assert!(r.is_degraded());
        assert_eq!(r.name(), "html-fallback");
    }

    #[test]
    fn forced_missing_backend_is_an_error() {
        let ctx = ProbeContext {
            forced: Some(Candidate::Inkscape),
            ..nothing_available()
        };
        let err = Selection::probe(&ctx).unwrap_err();
        assert!(err.to_string().contains("inkscape"));
    }

    #[test]
    fn forced_html_degrades_even_with_converters() {
        let ctx = ProbeContext {
            allow_in_process: true,
            forced: Some(Candidate::Html),
            ..nothing_available()
        };
        assert_eq!(Selection::probe(&ctx).unwrap(), Selection::Degraded);
    }

    #[test]
    fn settings_reject_zero_size() {
        let s = RasterSettings {
            size: 0,
            scratch_dir: None,
        };
        assert!(s.validate().is_err());
        assert!(create_backend(&BackendKind::Resvg, &s).is_err());
    }

    #[cfg(not(feature = "vello-cpu"))]
    #[test]
    fn vello_without_feature_is_not_available() {
        assert!(create_backend(&BackendKind::VelloCpu, &RasterSettings::default()).is_err());
    }

    #[test]
    fn outcome_accessors() {
        let o = RasterOutcome::HelperDocument {
            path: PathBuf::from("a.html"),
        };
        assert!(!o.is_raster());
        assert_eq!(o.path(), Path::new("a.html"));
    }
}
