use std::{
    ffi::{OsStr, OsString},
    path::{Path, PathBuf},
};

use crate::raster::{BackendKind, external::ExternalTool};

/// Environment variable that overrides `PATH` for converter lookup.
pub const SEARCH_PATH_ENV: &str = "WARDROBE_SEARCH_PATH";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Candidate {
    Resvg,
    VelloCpu,
    CairoSvg,
    RsvgConvert,
    Inkscape,
    QuickLook,
    Html,
}

/// Probe order for real converters. [`Candidate::Html`] is the implicit terminal fallback.
pub const PRIORITY: &[Candidate] = &[
    Candidate::Resvg,
    Candidate::VelloCpu,
    Candidate::CairoSvg,
    Candidate::RsvgConvert,
    Candidate::Inkscape,
    Candidate::QuickLook,
];

impl Candidate {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Resvg => "resvg",
            Self::VelloCpu => "vello-cpu",
            Self::CairoSvg => "cairosvg",
            Self::RsvgConvert => "rsvg-convert",
            Self::Inkscape => "inkscape",
            Self::QuickLook => "qlmanage",
            Self::Html => "html",
        }
    }

    pub fn external_tool(self) -> Option<ExternalTool> {
        match self {
            Self::CairoSvg => Some(ExternalTool::CairoSvg),
            Self::RsvgConvert => Some(ExternalTool::RsvgConvert),
            Self::Inkscape => Some(ExternalTool::Inkscape),
            Self::QuickLook => Some(ExternalTool::QuickLook),
            Self::Resvg | Self::VelloCpu | Self::Html => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ProbeContext {
    pub allow_in_process: bool,
    /// Search path for external converters, in `PATH` syntax. `None` finds nothing.
    pub search_path: Option<OsString>,
    pub forced: Option<Candidate>,
}

impl Default for ProbeContext {
    fn default() -> Self {
        Self {
            allow_in_process: true,
            search_path: None,
            forced: None,
        }
    }
}

impl ProbeContext {
    /// Uses `WARDROBE_SEARCH_PATH` when set, `PATH` otherwise.
    pub fn from_env() -> Self {
        Self {
            search_path: std::env::var_os(SEARCH_PATH_ENV).or_else(|| std::env::var_os("PATH")),
            ..Self::default()
        }
    }
}

pub fn probe(candidate: Candidate, ctx: &ProbeContext) -> Option<BackendKind> {
    let found = match candidate {
        Candidate::Resvg => ctx.allow_in_process.then_some(BackendKind::Resvg),
        Candidate::VelloCpu => {
            (ctx.allow_in_process && cfg!(feature = "vello-cpu")).then_some(BackendKind::VelloCpu)
        }
        Candidate::QuickLook if !cfg!(target_os = "macos") => None,
        Candidate::CairoSvg
        | Candidate::RsvgConvert
        | Candidate::Inkscape
        | Candidate::QuickLook => {
            let tool = candidate.external_tool()?;
            let path = ctx.search_path.as_deref()?;
            find_executable(tool.program_name(), path)
                .map(|program| BackendKind::External { tool, program })
        }
        Candidate::Html => Some(BackendKind::HtmlFallback),
    };
    tracing::debug!(
        candidate = candidate.as_str(),
        available = found.is_some(),
        "probed raster backend"
    );
    found
}

pub fn probe_all(ctx: &ProbeContext) -> Vec<(Candidate, Option<BackendKind>)> {
    PRIORITY.iter().map(|&c| (c, probe(c, ctx))).collect()
}

pub fn find_executable(name: &str, search_path: &OsStr) -> Option<PathBuf> {
    std::env::split_paths(search_path)
        .filter(|dir| !dir.as_os_str().is_empty())
        .flat_map(|dir| {
            let plain = dir.join(name);
            let suffixed = dir.join(format!("{name}{}", std::env::consts::EXE_SUFFIX));
            [plain, suffixed]
        })
        .find(|p| is_executable(p))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt as _;
    std::fs::metadata(path)
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_order_is_fixed() {
        let names: Vec<_> = PRIORITY.iter().map(|c| c.as_str()).collect();
        assert_eq!(
            names,
            [
                "resvg",
                "vello-cpu",
                "cairosvg",
                "rsvg-convert",
                "inkscape",
                "qlmanage"
            ]
        );
    }

    #[test]
    fn missing_search_path_finds_nothing() {
        let ctx = ProbeContext {
            allow_in_process: false,
            ..ProbeContext::default()
        };
        assert!(probe_all(&ctx).iter().all(|(_, k)| k.is_none()));
    }

    #[test]
    fn in_process_respects_opt_out() {
        let mut ctx = ProbeContext::default();
        assert_eq!(probe(Candidate::Resvg, &ctx), Some(BackendKind::Resvg));
        ctx.allow_in_process = false;
        assert_eq!(probe(Candidate::Resvg, &ctx), None);
    }

    #[test]
    fn vello_probe_follows_feature() {
        let ctx = ProbeContext::default();
        assert_eq!(
            probe(Candidate::VelloCpu, &ctx).is_some(),
            cfg!(feature = "vello-cpu")
        );
    }

    #[cfg(unix)]
    #[test]
    fn finds_only_executable_files() {
        use std::os::unix::fs::PermissionsExt as _;

        let dir = tempfile::tempdir().unwrap();
        let plain = dir.path().join("rsvg-convert");
        std::fs::write(&plain, "#!/bin/sh\n").unwrap();

        let path = dir.path().as_os_str().to_owned();
        assert_eq!(find_executable("rsvg-convert", &path), None);

        std::fs::set_permissions(&plain, std::fs::Permissions::from_mode(0o755)).unwrap();
        assert_eq!(find_executable("rsvg-convert", &path), Some(plain));
        assert_eq!(find_executable("inkscape", &path), None);
    }

    #[cfg(unix)]
    #[test]
    fn directories_are_not_executables() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("cairosvg")).unwrap();
        assert_eq!(
            find_executable("cairosvg", dir.path().as_os_str()),
            None
        );
    }
}
