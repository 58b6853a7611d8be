//! Temporary catalogue directories laid out as `<root>/<locale>/<domain>.ftl`.

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Temporary directory holding catalogue files; removed on drop.
#[derive(Debug)]
pub struct CatalogDir {
    _temp_dir: TempDir,
    root: Utf8PathBuf,
}

impl CatalogDir {
    /// Returns the directory that catalogue loaders should be pointed at.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }
}

/// Writes each `(relative_path, contents)` pair under a fresh temporary root.
///
/// # Examples
///
/// ```
/// use localized_notifications_test_helpers::fs::catalog_dir;
///
/// let dir = catalog_dir(&[("en-US/shared.ftl", "Greeting = Hello!")]).expect("write files");
/// assert!(dir.root().join("en-US/shared.ftl").is_file());
/// ```
///
/// # Errors
///
/// Returns an error when the directory or a file cannot be created, or the
/// temporary path is not UTF-8.
pub fn catalog_dir(files: &[(&str, &str)]) -> Result<CatalogDir> {
    let temp_dir = TempDir::new().context("create temporary catalogue root")?;
    let root = Utf8PathBuf::from_path_buf(temp_dir.path().to_path_buf())
        .map_err(|path| anyhow::anyhow!("temporary path {} is not UTF-8", path.display()))?;

    for (relative, contents) in files {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| format!("create {parent}"))?;
        }
        std::fs::write(&path, contents).with_context(|| format!("write {path}"))?;
    }

    Ok(CatalogDir {
        _temp_dir: temp_dir,
        root,
    })
}
