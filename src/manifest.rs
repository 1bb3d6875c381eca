use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::{
    catalog::Category,
    foundation::{
        error::{WardrobeError, WardrobeResult},
        fs::write_file,
    },
};

/// Summary of a completed generation run.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Manifest {
    /// Name of the backend that produced every image.
    pub converter: String,
    pub assets: Vec<ManifestEntry>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ManifestEntry {
    pub file: String,
    pub category: Category,
    pub name: String,
    /// Raster path relative to the project root (the output directory's parent).
    pub path: String,
}

impl ManifestEntry {
    /// Asset id: the file name without extension.
    pub fn id(&self) -> &str {
        Path::new(&self.file)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(&self.file)
    }
}

impl Manifest {
    pub fn to_json_pretty(&self) -> WardrobeResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| WardrobeError::serde(e.to_string()))
    }

    pub fn write(&self, path: &Path) -> WardrobeResult<()> {
        write_file(path, self.to_json_pretty()?)
    }

    pub fn read(path: &Path) -> WardrobeResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read manifest '{}'", path.display()))?;
        serde_json::from_str(&text).map_err(|e| {
            WardrobeError::serde(format!("invalid manifest '{}': {e}", path.display()))
        })
    }
}

/// `path` relative to `root`, or `path` as given when it does not live under `root`.
pub fn relative_to(path: &Path, root: &Path) -> PathBuf {
    path.strip_prefix(root)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}

/// Manifest paths always use `/` so the file reads the same on every host.
pub fn display_path(path: &Path) -> String {
    if path.is_absolute() {
        return path.to_string_lossy().into_owned();
    }
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Manifest {
        Manifest {
            converter: "resvg (in-process)".to_owned(),
            assets: vec![ManifestEntry {
                file: "sticker_star.png".to_owned(),
                category: Category::Stickers,
                name: "Gold Star".to_owned(),
                path: "assets/sticker_star.png".to_owned(),
            }],
        }
    }

    #[test]
    fn serializes_with_lowercase_category() {
        let json = sample().to_json_pretty().unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["converter"], "resvg (in-process)");
        assert_eq!(v["assets"][0]["category"], "stickers");
        assert_eq!(v["assets"][0]["path"], "assets/sticker_star.png");
        assert!(json.contains('\n'));
    }

    #[test]
    fn write_then_read_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("manifest.json");
        std::fs::write(&path, "stale").unwrap();
        sample().write(&path).unwrap();
        assert_eq!(Manifest::read(&path).unwrap(), sample());
    }

    #[test]
    fn malformed_manifest_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{").unwrap();
        let err = Manifest::read(&path).unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn relative_paths() {
        let root = Path::new("/proj");
        assert_eq!(
            display_path(&relative_to(Path::new("/proj/assets/a.png"), root)),
            "assets/a.png"
        );
        assert_eq!(
            relative_to(Path::new("/elsewhere/a.png"), root),
            PathBuf::from("/elsewhere/a.png")
        );
        assert_eq!(sample().assets[0].id(), "sticker_star");
    }
}
