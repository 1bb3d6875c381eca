use std::path::{Component, Path, PathBuf};

use crate::{
    catalog::{AssetSpec, validate_catalog},
    foundation::{
        error::{WardrobeError, WardrobeResult},
        fs::{remove_if_exists, write_file},
    },
    manifest::{Manifest, ManifestEntry, display_path, relative_to},
    raster::{HtmlFallback, RasterOutcome, Rasterizer},
};

#[derive(Clone, Debug)]
pub struct GenerateConfig {
    /// Receives the rasters and the manifest. Its parent is the project root.
    pub out_dir: PathBuf,
    /// Subdirectory of `out_dir` holding the serialized scenes.
    pub svg_subdir: String,
    pub manifest_name: String,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("assets"),
            svg_subdir: "svg".to_owned(),
            manifest_name: "manifest.json".to_owned(),
        }
    }
}

impl GenerateConfig {
    pub fn validate(&self) -> WardrobeResult<()> {
        if self.out_dir.as_os_str().is_empty() {
            return Err(WardrobeError::validation("output directory must be non-empty"));
        }
        single_component("svg subdirectory", &self.svg_subdir)?;
        single_component("manifest name", &self.manifest_name)?;
        if self.svg_subdir == self.manifest_name {
            return Err(WardrobeError::validation(
                "svg subdirectory and manifest must have different names",
            ));
        }
        Ok(())
    }

    pub fn svg_dir(&self) -> PathBuf {
        self.out_dir.join(&self.svg_subdir)
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.out_dir.join(&self.manifest_name)
    }

    fn project_root(&self) -> &Path {
        self.out_dir.parent().unwrap_or_else(|| Path::new(""))
    }
}

/// Names placed inside `out_dir` must be one plain path component, so the manifest always sits
/// directly in `out_dir` and its entries resolve against `out_dir`'s parent.
fn single_component(what: &str, name: &str) -> WardrobeResult<()> {
    if name.trim().is_empty() {
        return Err(WardrobeError::validation(format!("{what} must be non-empty")));
    }
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(WardrobeError::validation(format!(
            "{what} must be a plain name without path separators, got '{name}'"
        ))),
    }
}

/// Builds, serializes and rasterizes every asset in order, then writes the manifest.
///
/// The first conversion error aborts the batch. In degraded mode every asset still gets its
/// helper document, but the run fails with [`WardrobeError::Degraded`]. Either way no manifest
/// is written.
#[tracing::instrument(skip_all, fields(out_dir = %cfg.out_dir.display(), backend = rasterizer.name()))]
pub fn generate(
    catalog: &[AssetSpec],
    rasterizer: &Rasterizer,
    cfg: &GenerateConfig,
) -> WardrobeResult<Manifest> {
    cfg.validate()?;
    validate_catalog(catalog)?;

    let svg_dir = cfg.svg_dir();
    let root = cfg.project_root();
    let mut entries = Vec::with_capacity(catalog.len());
    let mut helpers = Vec::new();

    tracing::info!(converter = rasterizer.name(), "using converter");

    for asset in catalog {
        let svg = asset
            .scene()
            .to_svg()
            .map_err(|e| e.for_asset(asset.file))?;
        write_file(&svg_dir.join(format!("{}.svg", asset.stem())), &svg)?;

        let raster_path = cfg.out_dir.join(asset.file);
        remove_if_exists(&raster_path)?;
        remove_if_exists(&HtmlFallback::helper_path(&raster_path))?;

        match rasterizer
            .rasterize(&svg, &raster_path)
            .map_err(|e| e.for_asset(asset.file))?
        {
            RasterOutcome::Raster { path } => {
                entries.push(ManifestEntry {
                    file: asset.file.to_owned(),
                    category: asset.category,
                    name: asset.name.to_owned(),
                    path: display_path(&relative_to(&path, root)),
                });
                tracing::info!(file = asset.file, "built asset");
            }
            RasterOutcome::HelperDocument { path } => {
                tracing::warn!(file = asset.file, helper = %path.display(), "wrote helper document");
                helpers.push(path);
            }
        }
    }

    if !helpers.is_empty() {
        return Err(WardrobeError::Degraded { helpers });
    }

    let manifest = Manifest {
        converter: rasterizer.name().to_owned(),
        assets: entries,
    };
    let manifest_path = cfg.manifest_path();
    manifest.write(&manifest_path)?;
    tracing::info!(path = %manifest_path.display(), "wrote manifest");
    Ok(manifest)
}
