//! The translation service facade.
//!
//! Owns the catalog lifecycle: build at startup, atomic swap on reload,
//! read-only snapshots for every lookup. All user-facing entry points
//! (item names, item rendering, lore, messages, export, re-extraction)
//! live here; the modules underneath stay pure.
//!
//! ## Concurrency
//!
//! The catalog sits behind `RwLock<Arc<LoadedCatalog>>`. A lookup clones
//! the `Arc` (the lock is held only for the clone) and works on that
//! snapshot, so a concurrent reload swaps in a fully built replacement
//! without readers ever observing a half-loaded catalog: every call sees
//! the wholly-old or the wholly-new state.

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use anyhow::Result;
use colored::Colorize;

use crate::catalog::{TranslationKind, TranslationRecord};
use crate::compose::{self, Text};
use crate::config::Config;
use crate::items::{ItemDisplay, ItemRegistry};
use crate::loader::{self, LoadStats, LoadedCatalog};
use crate::resolve::{self, Viewer};

/// The integration seam for external placeholder expansion (e.g. a
/// placeholder plugin on the host). Applied by the service after engine
/// resolution, never inside it.
pub trait PlaceholderResolver: Send + Sync {
    fn apply(&self, viewer: &Viewer, text: &str) -> String;
}

/// Default resolver: passes text through untouched.
pub struct NoopPlaceholders;

impl PlaceholderResolver for NoopPlaceholders {
    fn apply(&self, _viewer: &Viewer, text: &str) -> String {
        text.to_string()
    }
}

pub struct TranslationService {
    config: Config,
    placeholders: Box<dyn PlaceholderResolver>,
    catalog: RwLock<Arc<LoadedCatalog>>,
}

impl TranslationService {
    /// A service with an empty catalog; call [`load_translations`]
    /// (or use the CLI `check`/`resolve` path) to populate it.
    ///
    /// [`load_translations`]: TranslationService::load_translations
    pub fn new(config: Config) -> Self {
        let catalog = Arc::new(LoadedCatalog::empty(&config));
        Self {
            config,
            placeholders: Box::new(NoopPlaceholders),
            catalog: RwLock::new(catalog),
        }
    }

    /// Replace the integration placeholder resolver.
    pub fn with_placeholders(mut self, placeholders: Box<dyn PlaceholderResolver>) -> Self {
        self.placeholders = placeholders;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build a fresh catalog from disk and the item registry, then swap it
    /// in. Readers that took a snapshot before the swap keep the old
    /// catalog until their call completes; no partial state is ever
    /// published.
    pub fn load_translations(&self, registry: &ItemRegistry) -> Result<LoadStats> {
        let (loaded, stats) = loader::load_catalog(&self.config, registry)?;
        let mut slot = self
            .catalog
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *slot = Arc::new(loaded);
        Ok(stats)
    }

    /// The current catalog snapshot.
    pub fn catalog(&self) -> Arc<LoadedCatalog> {
        self.catalog
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// One lookup against the current snapshot; the record is returned by
    /// value so the snapshot does not outlive the call.
    pub fn find_translation(
        &self,
        kind: TranslationKind,
        id: &str,
        viewer: &Viewer,
    ) -> Option<TranslationRecord> {
        let catalog = self.catalog();
        resolve::find_translation(&catalog.store, &catalog.resolver, kind, id, viewer).cloned()
    }

    /// The translated display name for an item, or the original name when
    /// the item is disabled or nothing resolves.
    pub fn item_name(&self, viewer: &Viewer, id: &str, original_name: &str) -> String {
        if self.config.disabled_ids.contains(id) {
            return original_name.to_string();
        }
        match self.find_translation(TranslationKind::Item, id, viewer) {
            Some(record) => {
                let composed = compose::compose_item(&record, original_name, &[], true);
                match composed.name {
                    Some(name) => self.placeholders.apply(viewer, &name),
                    None => original_name.to_string(),
                }
            }
            None => original_name.to_string(),
        }
    }

    /// Rewrite an item's render state in place. Returns whether anything
    /// was applied: a disabled id, a total miss, or a record with nothing
    /// to say all leave the item untouched and return `false`.
    pub fn translate_item(&self, viewer: &Viewer, item: &mut ItemDisplay) -> bool {
        if self.config.disabled_ids.contains(&item.id) {
            return false;
        }
        let Some(record) = self.find_translation(TranslationKind::Item, &item.id, viewer) else {
            return false;
        };

        let composed =
            compose::compose_item(&record, &item.name, &item.lore, item.lore_protected);
        if !composed.applied() {
            return false;
        }

        if let Some(name) = composed.name {
            item.name = self.placeholders.apply(viewer, &name);
        }
        if let Some(lore) = composed.lore {
            item.lore = lore
                .into_iter()
                .map(|line| self.placeholders.apply(viewer, &line))
                .collect();
        }
        true
    }

    /// The lore translation for an id. On a miss, returns the id itself
    /// when `default_to_id` is set, otherwise the empty string. No
    /// argument substitution happens for lore.
    pub fn lore(&self, viewer: &Viewer, id: &str, default_to_id: bool) -> String {
        self.find_translation(TranslationKind::Lore, id, viewer)
            .and_then(|record| record.text_template().map(str::to_string))
            .unwrap_or_else(|| if default_to_id { id.to_string() } else { String::new() })
    }

    /// The translated message for a key, as structured text. On a miss the
    /// key itself comes back verbatim (message keys double as readable
    /// fallback text). On a hit: positional `{0}`/`{1}` substitution,
    /// integration placeholders, then marker normalization, in that order.
    pub fn message(&self, viewer: &Viewer, key: &str, args: &[String]) -> Text {
        let Some(record) = self.find_translation(TranslationKind::Message, key, viewer) else {
            return Text::plain(key);
        };
        let Some(template) = record.text_template() else {
            return Text::plain(key);
        };
        let rendered = compose::compose_message(template, args);
        let rendered = self.placeholders.apply(viewer, &rendered);
        compose::normalize(&rendered)
    }

    /// Export current live item state as a new translation document under
    /// the language's folder. A write failure is reported on the error
    /// channel and the attempted file name is still returned, so callers
    /// must not assume the file exists afterwards.
    pub fn export_item_translations(
        &self,
        language: &str,
        addon_name: &str,
        ids: &BTreeSet<String>,
        registry: &ItemRegistry,
    ) -> String {
        let root = self.config.translations_root();
        let (_, attempted) = loader::next_export_file(&root.join(language));
        match loader::write_export_document(&root, language, addon_name, ids, registry) {
            Ok(file_name) => file_name,
            Err(err) => {
                eprintln!(
                    "{} failed to export translation file: {err:#}",
                    "error:".red().bold()
                );
                attempted
            }
        }
    }

    /// Copy bundled default documents into the live tree. `bundled_root`
    /// falls back to the configured one.
    pub fn extract_translations(
        &self,
        bundled_root: Option<&Path>,
        replace: bool,
    ) -> Result<usize> {
        let configured = self.config.bundled_root.as_ref().map(Path::new);
        let Some(source) = bundled_root.or(configured) else {
            anyhow::bail!("No bundled translations root configured");
        };
        loader::extract_translations(source, &self.config.translations_root(), replace)
    }
}
