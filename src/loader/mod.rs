//! Catalog loading.
//!
//! Builds a complete catalog from the translations tree and the item
//! registry, in a pinned three-phase order:
//!
//! 1. every known-language folder (folder name = language tag), files in
//!    sorted order, into the fixed tier;
//! 2. every alias folder named by a `languageMappings` key, same way;
//! 3. programmed translations materialized from translatable items, into
//!    the programmed tier (so they can never shadow an authored record).
//!
//! Loading works on a scratch store and hands back the finished product;
//! publication (and therefore reload atomicity) is the service's concern.

mod document;
mod export;
mod extract;

pub use document::{ItemEntry, TranslationDocument};
pub use export::{next_export_file, write_export_document};
pub use extract::extract_translations;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::catalog::{CatalogStore, TranslationKind, TranslationRecord};
use crate::config::Config;
use crate::items::{ItemRegistry, TranslatableItem};
use crate::resolve::FallbackResolver;

/// A fully built catalog: the store plus the resolver seeded from it.
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub store: CatalogStore,
    pub resolver: FallbackResolver,
}

impl LoadedCatalog {
    /// An empty catalog resolving everything to `default_language`.
    pub fn empty(config: &Config) -> Self {
        let store = CatalogStore::new();
        let resolver = FallbackResolver::new(
            store.languages().clone(),
            config.language_mappings.clone(),
            config.default_language.clone(),
        );
        Self { store, resolver }
    }
}

/// What happened during a load, for reporting.
#[derive(Debug, Clone, Default)]
pub struct LoadStats {
    /// Language folders found under the translations root.
    pub languages: Vec<String>,
    /// Documents that contributed records.
    pub files_loaded: usize,
    /// Files skipped as malformed or empty, with the reason.
    pub files_skipped: Vec<(PathBuf, String)>,
    /// Programmed records materialized from the item registry.
    pub programmed_records: usize,
}

/// Build a catalog from disk and the item registry.
///
/// A missing translations root is an empty catalog, not an error; a bad
/// file is a skip, not an error. Only genuinely unexpected I/O (an
/// unreadable directory entry) propagates.
pub fn load_catalog(config: &Config, registry: &ItemRegistry) -> Result<(LoadedCatalog, LoadStats)> {
    let root = config.translations_root();
    let mut store = CatalogStore::new();
    let mut stats = LoadStats::default();

    // Phase 1: known-language folders.
    for language in list_language_folders(&root)? {
        store.add_language(language.clone());
        load_language_folder(&root.join(&language), &language, &mut store, &mut stats)?;
        stats.languages.push(language);
    }

    // Phase 2: alias folders from the language mappings, in sorted order so
    // repeated loads are deterministic.
    let mut aliases: Vec<&String> = config.language_mappings.keys().collect();
    aliases.sort();
    for alias in aliases {
        if store.languages().contains(alias) {
            continue; // already loaded as a known language in phase 1
        }
        load_language_folder(&root.join(alias), alias, &mut store, &mut stats)?;
    }

    // Phase 3: programmed translations for every translatable item, per
    // known language. Inserted into the programmed tier, so an authored
    // record for the same (language, id) always wins.
    let languages: Vec<String> = store.languages().iter().cloned().collect();
    for item in registry.translatable_items() {
        for language in &languages {
            let name = item.default_name(language);
            let lore = item.default_lore(language);
            if name.is_none() && lore.is_none() {
                continue; // nothing to materialize for this language
            }
            store.insert_programmed(
                TranslationKind::Item,
                language.clone(),
                item.id().to_string(),
                TranslationRecord::item(name, lore),
            );
            stats.programmed_records += 1;
        }
    }

    let resolver = FallbackResolver::new(
        store.languages().clone(),
        config.language_mappings.clone(),
        config.default_language.clone(),
    );

    Ok((LoadedCatalog { store, resolver }, stats))
}

/// Language folders directly under the translations root, sorted.
fn list_language_folders(root: &Path) -> Result<Vec<String>> {
    if !root.is_dir() {
        return Ok(Vec::new());
    }
    let mut languages = Vec::new();
    for entry in fs::read_dir(root)
        .with_context(|| format!("Failed to read translations root: {}", root.display()))?
    {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            if let Some(name) = entry.file_name().to_str() {
                languages.push(name.to_string());
            }
        }
    }
    languages.sort();
    Ok(languages)
}

/// YAML files directly inside one language folder, sorted by file name.
fn list_yaml_files(folder: &Path) -> Result<Vec<PathBuf>> {
    if !folder.is_dir() {
        return Ok(Vec::new());
    }
    let mut files = Vec::new();
    for entry in fs::read_dir(folder)
        .with_context(|| format!("Failed to read language folder: {}", folder.display()))?
    {
        let entry = entry?;
        let path = entry.path();
        let is_yaml = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yml") || ext.eq_ignore_ascii_case("yaml"));
        if entry.file_type()?.is_file() && is_yaml {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn load_language_folder(
    folder: &Path,
    language: &str,
    store: &mut CatalogStore,
    stats: &mut LoadStats,
) -> Result<()> {
    for path in list_yaml_files(folder)? {
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                stats.files_skipped.push((path, format!("unreadable: {err}")));
                continue;
            }
        };
        match TranslationDocument::parse(&content) {
            Some(doc) => {
                doc.register(language, store);
                stats.files_loaded += 1;
            }
            None => {
                stats
                    .files_skipped
                    .push((path, "malformed or empty document".to_string()));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::catalog::TranslationKind::*;
    use crate::items::{ItemDefinition, ItemText};
    use tempfile::{TempDir, tempdir};

    fn write_doc(root: &Path, language: &str, file: &str, content: &str) {
        let folder = root.join(language);
        fs::create_dir_all(&folder).unwrap();
        fs::write(folder.join(file), content).unwrap();
    }

    fn tree() -> (TempDir, Config) {
        let dir = tempdir().unwrap();
        let config = Config {
            translations_root: dir.path().to_string_lossy().into_owned(),
            ..Default::default()
        };
        (dir, config)
    }

    #[test]
    fn missing_root_is_an_empty_catalog() {
        let config = Config {
            translations_root: "/nonexistent/translations".to_string(),
            ..Default::default()
        };
        let (catalog, stats) = load_catalog(&config, &ItemRegistry::default()).unwrap();
        assert!(catalog.store.languages().is_empty());
        assert_eq!(stats.files_loaded, 0);
    }

    #[test]
    fn loads_language_folders() {
        let (dir, config) = tree();
        write_doc(
            dir.path(),
            "en",
            "core.yml",
            "messages:\n  greet: Hello\n",
        );
        write_doc(
            dir.path(),
            "de",
            "core.yml",
            "messages:\n  greet: Hallo\n",
        );

        let (catalog, stats) = load_catalog(&config, &ItemRegistry::default()).unwrap();
        assert_eq!(stats.languages, vec!["de", "en"]);
        assert_eq!(stats.files_loaded, 2);
        assert!(catalog.store.get(Message, "de", "greet").is_some());
        assert!(catalog.store.get(Message, "en", "greet").is_some());
    }

    #[test]
    fn bad_file_is_skipped_and_rest_still_loads() {
        let (dir, config) = tree();
        write_doc(dir.path(), "en", "bad.yml", "messages: [broken");
        write_doc(dir.path(), "en", "good.yml", "messages:\n  ok: Fine\n");

        let (catalog, stats) = load_catalog(&config, &ItemRegistry::default()).unwrap();
        assert_eq!(stats.files_loaded, 1);
        assert_eq!(stats.files_skipped.len(), 1);
        assert!(catalog.store.get(Message, "en", "ok").is_some());
    }

    #[test]
    fn later_file_wins_within_a_language() {
        let (dir, config) = tree();
        // Sorted file order: a.yml then b.yml.
        write_doc(dir.path(), "en", "a.yml", "messages:\n  key: first\n");
        write_doc(dir.path(), "en", "b.yml", "messages:\n  key: second\n");

        let (catalog, _) = load_catalog(&config, &ItemRegistry::default()).unwrap();
        let rec = catalog.store.get(Message, "en", "key").unwrap();
        assert_eq!(rec.text_template(), Some("second"));
    }

    #[test]
    fn alias_tag_resolves_through_mapping() {
        let (dir, config) = tree();
        let config = Config {
            language_mappings: [("de-AT".to_string(), "de".to_string())].into_iter().collect(),
            ..config
        };
        write_doc(dir.path(), "de", "core.yml", "messages:\n  greet: Hallo\n");

        let (catalog, _) = load_catalog(&config, &ItemRegistry::default()).unwrap();
        assert!(catalog.store.get(Message, "de", "greet").is_some());

        // A viewer carrying the alias tag resolves through the mapping.
        let viewer = crate::resolve::Viewer::with_language("de-AT");
        let rec = crate::resolve::find_translation(
            &catalog.store,
            &catalog.resolver,
            Message,
            "greet",
            &viewer,
        )
        .unwrap();
        assert_eq!(rec.text_template(), Some("Hallo"));
    }

    #[test]
    fn programmed_records_fill_missing_items_only() {
        let (dir, config) = tree();
        write_doc(
            dir.path(),
            "en",
            "items.yml",
            "translations:\n  MAGIC_SWORD:\n    name: Authored Sword\n",
        );

        let items = ItemRegistry::new(vec![
            ItemDefinition {
                id: "MAGIC_SWORD".to_string(),
                name: "Magic Sword".to_string(),
                lore: Vec::new(),
                translation: Some(BTreeMap::from([(
                    "en".to_string(),
                    ItemText {
                        name: Some("Generated Sword".to_string()),
                        lore: None,
                    },
                )])),
            },
            ItemDefinition {
                id: "MAGIC_SHIELD".to_string(),
                name: "Magic Shield".to_string(),
                lore: Vec::new(),
                translation: Some(BTreeMap::from([(
                    "en".to_string(),
                    ItemText {
                        name: Some("Generated Shield".to_string()),
                        lore: None,
                    },
                )])),
            },
        ]);

        let (catalog, stats) = load_catalog(&config, &items).unwrap();
        // Authored record wins for the sword.
        let sword = catalog.store.get(Item, "en", "MAGIC_SWORD").unwrap();
        assert_eq!(sword.name_template(), Some("Authored Sword"));
        // Shield only exists as a programmed record.
        let shield = catalog.store.get(Item, "en", "MAGIC_SHIELD").unwrap();
        assert_eq!(shield.name_template(), Some("Generated Shield"));
        assert_eq!(stats.programmed_records, 2);
    }

    #[test]
    fn items_without_capability_get_no_programmed_record() {
        let (dir, config) = tree();
        write_doc(dir.path(), "en", "empty-marker.yml", "messages:\n  k: v\n");

        let items = ItemRegistry::new(vec![ItemDefinition {
            id: "PLAIN_ROCK".to_string(),
            name: "Rock".to_string(),
            lore: Vec::new(),
            translation: None,
        }]);

        let (catalog, stats) = load_catalog(&config, &items).unwrap();
        assert!(catalog.store.get(Item, "en", "PLAIN_ROCK").is_none());
        assert_eq!(stats.programmed_records, 0);
    }

    #[test]
    fn non_yaml_files_are_ignored() {
        let (dir, config) = tree();
        write_doc(dir.path(), "en", "notes.txt", "not yaml");
        write_doc(dir.path(), "en", "core.yml", "messages:\n  k: v\n");

        let (_, stats) = load_catalog(&config, &ItemRegistry::default()).unwrap();
        assert_eq!(stats.files_loaded, 1);
        assert!(stats.files_skipped.is_empty());
    }
}
