//! Exporting live item state into a translation document.
//!
//! Produces a starting point for translators: the current names and lore of
//! a set of items, written as a fresh `export-N.yml` under the target
//! language folder. Existing exports are never overwritten; the writer
//! always picks the first index that does not exist yet.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::compose::Text;
use crate::items::ItemRegistry;
use crate::loader::document::{ItemEntry, TranslationDocument};

/// The first non-existing `export-N.yml` under the language folder,
/// starting from index 1. Returns (full path, file name).
pub fn next_export_file(language_folder: &Path) -> (PathBuf, String) {
    let mut idx = 1;
    loop {
        let file_name = format!("export-{idx}.yml");
        let path = language_folder.join(&file_name);
        if !path.exists() {
            return (path, file_name);
        }
        idx += 1;
    }
}

/// Write an export document for `ids` under `translations_root/<language>/`.
///
/// Ids without a matching item definition are silently dropped, matching
/// the loader's lenient posture. Name and lore are taken from the items'
/// current live state and re-expressed with `&` alternate color markers.
/// Returns the file name written.
pub fn write_export_document(
    translations_root: &Path,
    language: &str,
    addon_name: &str,
    ids: &BTreeSet<String>,
    registry: &ItemRegistry,
) -> Result<String> {
    let language_folder = translations_root.join(language);
    fs::create_dir_all(&language_folder).with_context(|| {
        format!(
            "Failed to create language folder: {}",
            language_folder.display()
        )
    })?;

    let mut doc = TranslationDocument {
        name: Some(addon_name.to_string()),
        ..TranslationDocument::default()
    };
    for id in ids {
        let Some(item) = registry.get(id) else {
            continue;
        };
        let lore = (!item.lore.is_empty())
            .then(|| item.lore.iter().map(|line| use_alt_markers(line)).collect());
        doc.translations.insert(
            id.clone(),
            ItemEntry {
                name: Some(use_alt_markers(&item.name)),
                lore,
            },
        );
    }

    let (path, file_name) = next_export_file(&language_folder);
    let content = serde_yaml::to_string(&doc).context("Failed to serialize export document")?;
    fs::write(&path, content)
        .with_context(|| format!("Failed to write export file: {}", path.display()))?;

    Ok(file_name)
}

/// Re-express any `§` markers as the `&` alternate form documents use.
fn use_alt_markers(text: &str) -> String {
    Text::from_legacy(text).to_legacy()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::ItemDefinition;
    use tempfile::tempdir;

    fn registry() -> ItemRegistry {
        ItemRegistry::new(vec![
            ItemDefinition {
                id: "MAGIC_SWORD".to_string(),
                name: "\u{00A7}aMagic Sword".to_string(),
                lore: vec!["\u{00A7}7Sharp.".to_string()],
                translation: None,
            },
            ItemDefinition {
                id: "PLAIN_ROCK".to_string(),
                name: "Rock".to_string(),
                lore: Vec::new(),
                translation: None,
            },
        ])
    }

    fn ids(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn writes_export_one_then_two() {
        let dir = tempdir().unwrap();
        let registry = registry();
        let wanted = ids(&["MAGIC_SWORD"]);

        let first =
            write_export_document(dir.path(), "en", "MyAddon", &wanted, &registry).unwrap();
        assert_eq!(first, "export-1.yml");

        let second =
            write_export_document(dir.path(), "en", "MyAddon", &wanted, &registry).unwrap();
        assert_eq!(second, "export-2.yml");

        // The first export survives untouched.
        let first_content = fs::read_to_string(dir.path().join("en/export-1.yml")).unwrap();
        assert!(first_content.contains("MAGIC_SWORD"));
    }

    #[test]
    fn export_uses_alt_markers() {
        let dir = tempdir().unwrap();
        let file =
            write_export_document(dir.path(), "en", "MyAddon", &ids(&["MAGIC_SWORD"]), &registry())
                .unwrap();
        let content = fs::read_to_string(dir.path().join("en").join(file)).unwrap();
        assert!(content.contains("&aMagic Sword"));
        assert!(content.contains("&7Sharp."));
        assert!(!content.contains('\u{00A7}'));
    }

    #[test]
    fn export_is_loadable() {
        let dir = tempdir().unwrap();
        let file = write_export_document(
            dir.path(),
            "en",
            "MyAddon",
            &ids(&["MAGIC_SWORD", "PLAIN_ROCK"]),
            &registry(),
        )
        .unwrap();
        let content = fs::read_to_string(dir.path().join("en").join(file)).unwrap();
        let doc = TranslationDocument::parse(&content).unwrap();
        assert_eq!(doc.name.as_deref(), Some("MyAddon"));
        assert_eq!(doc.translations.len(), 2);
        // Rock has no lore; the entry still carries its name.
        assert!(doc.translations["PLAIN_ROCK"].lore.is_none());
    }

    #[test]
    fn unknown_ids_are_dropped() {
        let dir = tempdir().unwrap();
        let file = write_export_document(
            dir.path(),
            "en",
            "MyAddon",
            &ids(&["MAGIC_SWORD", "NOT_AN_ITEM"]),
            &registry(),
        )
        .unwrap();
        let content = fs::read_to_string(dir.path().join("en").join(file)).unwrap();
        let doc = TranslationDocument::parse(&content).unwrap();
        assert_eq!(doc.translations.len(), 1);
    }

    #[test]
    fn gap_in_indices_is_not_reused_before_lower_ones() {
        // export-1 exists, export-2 does not: the next export takes index 2.
        let dir = tempdir().unwrap();
        let folder = dir.path().join("en");
        fs::create_dir_all(&folder).unwrap();
        fs::write(folder.join("export-1.yml"), "name: Old\n").unwrap();

        let (path, name) = next_export_file(&folder);
        assert_eq!(name, "export-2.yml");
        assert!(!path.exists());
    }
}
