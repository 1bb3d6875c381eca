#![cfg(unix)]

use std::{
    ffi::OsString,
    os::unix::fs::PermissionsExt as _,
    path::{Path, PathBuf},
};

use wardrobe::{
    BackendKind, GenerateConfig, ProbeContext, RasterSettings, Rasterizer, Selection, WardrobeError,
    raster::ExternalTool,
};

const SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="1024" height="1024"><circle cx="512" cy="512" r="100" fill="#ff0000"/></svg>"##;

struct Fixture {
    dir: tempfile::TempDir,
}

impl Fixture {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("bin")).unwrap();
        std::fs::create_dir(dir.path().join("scratch")).unwrap();
        Self { dir }
    }

    fn bin(&self) -> PathBuf {
        self.dir.path().join("bin")
    }

    fn scratch(&self) -> PathBuf {
        self.dir.path().join("scratch")
    }

    fn args_log(&self) -> PathBuf {
        self.dir.path().join("args.log")
    }

    fn install(&self, name: &str, body: &str) {
        let path = self.bin().join(name);
        let script = format!(
            "#!/bin/sh\necho \"$@\" >> '{}'\n{body}",
            self.args_log().display()
        );
        std::fs::write(&path, script).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    }

    fn ctx(&self) -> ProbeContext {
        ProbeContext {
            allow_in_process: false,
            search_path: Some(OsString::from(self.bin())),
            forced: None,
        }
    }

    fn rasterizer(&self) -> Rasterizer {
        let selection = Selection::probe(&self.ctx()).unwrap();
        Rasterizer::from_selection(
            selection,
            &RasterSettings {
                size: 1024,
                scratch_dir: Some(self.scratch()),
            },
        )
        .unwrap()
    }

    fn scratch_is_empty(&self) -> bool {
        std::fs::read_dir(self.scratch()).unwrap().next().is_none()
    }

    fn logged_args(&self) -> String {
        std::fs::read_to_string(self.args_log()).unwrap_or_default()
    }
}

const RSVG_CONVERT: &str = r#"out=""
while [ $# -gt 0 ]; do
  if [ "$1" = "-o" ]; then out="$2"; fi
  shift
done
printf 'png' > "$out"
"#;

const INKSCAPE: &str = r#"for a in "$@"; do
  case "$a" in
    --export-filename=*) out="${a#--export-filename=}" ;;
  esac
done
printf 'png' > "$out"
"#;

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

#[test]
fn single_converter_is_selected_and_invoked() {
    let fx = Fixture::new();
    fx.install("rsvg-convert", RSVG_CONVERT);

    let selection = Selection::probe(&fx.ctx()).unwrap();
    assert_eq!(
        selection,
        Selection::Selected(BackendKind::External {
            tool: ExternalTool::RsvgConvert,
            program: fx.bin().join("rsvg-convert"),
        })
    );

    let r = fx.rasterizer();
    assert_eq!(r.name(), "rsvg-convert CLI");

    let out = fx.dir.path().join("assets").join("dot.png");
    let outcome = r.rasterize(SVG, &out).unwrap();
    assert!(outcome.is_raster());
    assert_eq!(read(&out), "png");

    let args = fx.logged_args();
    assert!(args.starts_with("-w 1024 -h 1024 -f png -o "), "{args}");
    assert!(args.trim_end().ends_with("asset.svg"), "{args}");
    assert!(fx.scratch_is_empty());
}

#[test]
fn inkscape_uses_export_flags() {
    let fx = Fixture::new();
    fx.install("inkscape", INKSCAPE);

    let r = fx.rasterizer();
    let out = fx.dir.path().join("hat.png");
    r.rasterize(SVG, &out).unwrap();

    assert_eq!(read(&out), "png");
    let args = fx.logged_args();
    assert!(args.contains("--export-type=png"), "{args}");
    assert!(args.contains("--export-width=1024"), "{args}");
    assert!(fx.scratch_is_empty());
}

#[test]
fn earlier_priority_wins_over_later() {
    let fx = Fixture::new();
    fx.install("inkscape", INKSCAPE);
    fx.install("rsvg-convert", RSVG_CONVERT);
    assert_eq!(fx.rasterizer().name(), "rsvg-convert CLI");
}

#[test]
fn failing_converter_reports_stderr_and_cleans_up() {
    let fx = Fixture::new();
    fx.install("rsvg-convert", "echo 'boom: bad svg' >&2\nexit 3\n");

    let out = fx.dir.path().join("broken.png");
    let err = fx.rasterizer().rasterize(SVG, &out).unwrap_err();
    match &err {
        WardrobeError::Conversion { asset, message } => {
            assert_eq!(asset, "broken.png");
            assert!(message.contains("boom: bad svg"), "{message}");
        }
        other => panic!("expected conversion error, got {other}"),
    }
    assert!(!out.exists());
    assert!(fx.scratch_is_empty());
}

#[test]
fn converter_without_output_is_an_error() {
    let fx = Fixture::new();
    fx.install("rsvg-convert", "exit 0\n");

    let out = fx.dir.path().join("ghost.png");
    let err = fx.rasterizer().rasterize(SVG, &out).unwrap_err();
    assert!(err.to_string().contains("did not produce"), "{err}");
    assert!(!out.exists());
    assert!(fx.scratch_is_empty());
}

#[test]
fn batch_with_external_converter_records_its_name() {
    let fx = Fixture::new();
    fx.install("rsvg-convert", RSVG_CONVERT);

    let cfg = GenerateConfig {
        out_dir: fx.dir.path().join("assets"),
        ..GenerateConfig::default()
    };
    let manifest = wardrobe::generate(wardrobe::CATALOG, &fx.rasterizer(), &cfg).unwrap();
    assert_eq!(manifest.converter, "rsvg-convert CLI");
    assert_eq!(manifest.assets.len(), wardrobe::CATALOG.len());
    assert!(cfg.manifest_path().is_file());
    assert_eq!(
        fx.logged_args().lines().count(),
        wardrobe::CATALOG.len()
    );
    assert!(fx.scratch_is_empty());
}

#[test]
fn batch_aborts_on_first_conversion_error() {
    let fx = Fixture::new();
    fx.install("rsvg-convert", "exit 1\n");

    let cfg = GenerateConfig {
        out_dir: fx.dir.path().join("assets"),
        ..GenerateConfig::default()
    };
    let err = wardrobe::generate(wardrobe::CATALOG, &fx.rasterizer(), &cfg).unwrap_err();
    assert!(
        err.to_string().contains(wardrobe::CATALOG[0].file),
        "{err}"
    );
    assert_eq!(fx.logged_args().lines().count(), 1);
    assert!(!cfg.manifest_path().exists());
}
