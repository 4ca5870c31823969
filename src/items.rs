//! Item definitions and the translation capability contract.
//!
//! The host owns the real item registry; the engine sees items through two
//! narrow views:
//!
//! - [`TranslatableItem`]: the opt-in capability an item definition exposes
//!   so the loader can materialize programmed translations from it;
//! - [`ItemDisplay`]: the mutable render state (name, lore) of one item
//!   instance that `translate_item` rewrites.
//!
//! [`ItemRegistry`] is a concrete registry backed by [`ItemDefinition`],
//! used by the CLI (`export`, `resolve`) via a JSON item dump and by tests.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// The capability an item definition opts into to receive programmed
/// translations. Catalog building filters the registry by this capability;
/// items without it are simply never translated by the generated layer.
pub trait TranslatableItem {
    /// Stable item id (the content id in the item partition).
    fn id(&self) -> &str;

    /// The item's own default display name for a language, if it has one.
    fn default_name(&self, language: &str) -> Option<String>;

    /// The item's own default lore for a language, if it has one.
    fn default_lore(&self, language: &str) -> Option<Vec<String>>;
}

/// Per-language default text an item definition carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ItemText {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lore: Option<Vec<String>>,
}

/// One item definition as the engine sees it.
///
/// `name`/`lore` are the item's current live render state (legacy markup),
/// used by export and as the substitution source. The optional `translation`
/// table is the capability opt-in: per-language defaults the loader turns
/// into programmed records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDefinition {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lore: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<BTreeMap<String, ItemText>>,
}

impl TranslatableItem for ItemDefinition {
    fn id(&self) -> &str {
        &self.id
    }

    fn default_name(&self, language: &str) -> Option<String> {
        self.translation.as_ref()?.get(language)?.name.clone()
    }

    fn default_lore(&self, language: &str) -> Option<Vec<String>> {
        self.translation.as_ref()?.get(language)?.lore.clone()
    }
}

/// All item definitions known to the engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemRegistry {
    items: Vec<ItemDefinition>,
}

impl ItemRegistry {
    pub fn new(items: Vec<ItemDefinition>) -> Self {
        Self { items }
    }

    /// Load a registry from a JSON item dump (an array of definitions).
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read item dump: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse item dump: {}", path.display()))
    }

    pub fn get(&self, id: &str) -> Option<&ItemDefinition> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemDefinition> {
        self.items.iter()
    }

    /// Only the definitions that opted into the translation capability.
    pub fn translatable_items(&self) -> impl Iterator<Item = &ItemDefinition> {
        self.items.iter().filter(|item| item.translation.is_some())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The render state of one item instance, as handed over by the host and
/// rewritten in place by `translate_item`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDisplay {
    pub id: String,
    pub name: String,
    pub lore: Vec<String>,
    /// Set by the caller for targets whose lore carries embedded state that
    /// must survive untouched (search results, auction listings). Checked
    /// before any lore mutation; never inferred from the lore content.
    pub lore_protected: bool,
}

impl ItemDisplay {
    pub fn new(id: impl Into<String>, name: impl Into<String>, lore: Vec<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            lore,
            lore_protected: false,
        }
    }

    /// Mark the lore block as protected from translation.
    pub fn protected(mut self) -> Self {
        self.lore_protected = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sword() -> ItemDefinition {
        ItemDefinition {
            id: "MAGIC_SWORD".to_string(),
            name: "&aMagic Sword".to_string(),
            lore: vec!["&7Sharp.".to_string()],
            translation: Some(BTreeMap::from([(
                "de".to_string(),
                ItemText {
                    name: Some("&aMagisches Schwert".to_string()),
                    lore: None,
                },
            )])),
        }
    }

    fn rock() -> ItemDefinition {
        ItemDefinition {
            id: "PLAIN_ROCK".to_string(),
            name: "Rock".to_string(),
            lore: Vec::new(),
            translation: None,
        }
    }

    #[test]
    fn capability_filter() {
        let registry = ItemRegistry::new(vec![sword(), rock()]);
        let translatable: Vec<&str> = registry.translatable_items().map(|i| i.id()).collect();
        assert_eq!(translatable, vec!["MAGIC_SWORD"]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn capability_yields_per_language_defaults() {
        let item = sword();
        assert_eq!(
            item.default_name("de").as_deref(),
            Some("&aMagisches Schwert")
        );
        assert!(item.default_name("fr").is_none());
        assert!(item.default_lore("de").is_none());
    }

    #[test]
    fn registry_lookup_by_id() {
        let registry = ItemRegistry::new(vec![sword(), rock()]);
        assert!(registry.get("PLAIN_ROCK").is_some());
        assert!(registry.get("MISSING").is_none());
    }

    #[test]
    fn json_dump_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("items.json");
        let registry = ItemRegistry::new(vec![sword(), rock()]);
        std::fs::write(&path, serde_json::to_string_pretty(&registry).unwrap()).unwrap();

        let loaded = ItemRegistry::from_json_file(&path).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(
            loaded.get("MAGIC_SWORD").unwrap().default_name("de"),
            sword().default_name("de")
        );
    }

    #[test]
    fn display_protected_flag() {
        let display = ItemDisplay::new("X", "Name", Vec::new());
        assert!(!display.lore_protected);
        assert!(display.protected().lore_protected);
    }
}
