//! Re-extraction of bundled default documents.
//!
//! Copies the translation documents shipped with the plugin (the
//! packaged-resources tree) into the live translations tree, creating
//! directories as needed. With `replace` unset, files already present on
//! disk are left alone so operator edits survive.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use walkdir::WalkDir;

/// Copy every YAML document under `bundled_root` into `translations_root`,
/// preserving the relative layout. Returns the number of files written.
pub fn extract_translations(
    bundled_root: &Path,
    translations_root: &Path,
    replace: bool,
) -> Result<usize> {
    if !bundled_root.is_dir() {
        anyhow::bail!(
            "Bundled translations not found: {}",
            bundled_root.display()
        );
    }

    let mut written = 0;
    for entry in WalkDir::new(bundled_root).sort_by_file_name() {
        let entry = entry.with_context(|| {
            format!("Failed to walk bundled tree: {}", bundled_root.display())
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let is_yaml = entry
            .path()
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yml") || ext.eq_ignore_ascii_case("yaml"));
        if !is_yaml {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(bundled_root)
            .with_context(|| format!("Entry outside bundled tree: {}", entry.path().display()))?;
        let target = translations_root.join(relative);
        if target.exists() && !replace {
            continue;
        }
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create folder: {}", parent.display()))?;
        }
        fs::copy(entry.path(), &target)
            .with_context(|| format!("Failed to extract: {}", target.display()))?;
        written += 1;
    }

    Ok(written)
}
