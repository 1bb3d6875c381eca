use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::WardrobeResult;

pub fn ensure_parent_dir(path: &Path) -> WardrobeResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create output directory '{}'", parent.display())
            })?;
        }
    }
    Ok(())
}

/// Writes `contents` to `path`, creating parent directories. Existing files are replaced.
pub fn write_file(path: &Path, contents: impl AsRef<[u8]>) -> WardrobeResult<()> {
    ensure_parent_dir(path)?;
    std::fs::write(path, contents).with_context(|| format!("write '{}'", path.display()))?;
    Ok(())
}

pub fn remove_if_exists(path: &Path) -> WardrobeResult<()> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(anyhow::Error::new(e)
            .context(format!("remove stale output '{}'", path.display()))
            .into()),
    }
}

/// Moves `from` to `to`. Falls back to copy + delete when a rename crosses filesystems
/// (temporary directories often live on a different mount than the output directory).
pub fn move_file(from: &Path, to: &Path) -> WardrobeResult<()> {
    ensure_parent_dir(to)?;
    if std::fs::rename(from, to).is_ok() {
        return Ok(());
    }
    std::fs::copy(from, to)
        .with_context(|| format!("copy '{}' to '{}'", from.display(), to.display()))?;
    std::fs::remove_file(from).with_context(|| format!("remove '{}'", from.display()))?;
    Ok(())
}
