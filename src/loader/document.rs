//! The on-disk translation document.
//!
//! One YAML file per document, any number of documents per language folder.
//! A document may carry translations for all three kinds:
//!
//! ```yaml
//! name: MyAddon
//! translations:
//!   MAGIC_SWORD:
//!     name: "&aMagisches Schwert"
//!     lore:
//!       - "&7Scharf."
//! lore:
//!   power-level: "&ePower"
//! messages:
//!   commands.reload.done: "&aNeu geladen."
//! ```
//!
//! Parsing is lenient by design: a document that fails to parse, or parses
//! to nothing usable, yields no records and never aborts the load.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogStore, TranslationKind, TranslationRecord};

/// An item entry inside a document's `translations` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lore: Option<Vec<String>>,
}

/// A parsed translation document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationDocument {
    /// Addon label; informational, shown in reports and written by export.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Item translations, keyed by item id.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub translations: BTreeMap<String, ItemEntry>,
    /// Standalone lore translations, keyed by lore id.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub lore: BTreeMap<String, String>,
    /// Message translations, keyed by message key.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub messages: BTreeMap<String, String>,
}

impl TranslationDocument {
    /// Parse YAML content. `None` means "no usable document here": parse
    /// failure or a document carrying no translations at all.
    pub fn parse(content: &str) -> Option<TranslationDocument> {
        let doc: TranslationDocument = serde_yaml::from_str(content).ok()?;
        if doc.is_empty() { None } else { Some(doc) }
    }

    /// Whether the document carries no translations in any section.
    pub fn is_empty(&self) -> bool {
        self.translations.is_empty() && self.lore.is_empty() && self.messages.is_empty()
    }

    /// Number of records across all sections.
    pub fn record_count(&self) -> usize {
        self.translations.len() + self.lore.len() + self.messages.len()
    }

    /// Insert every record into the fixed tier under `language`.
    /// Within one document and across documents of the same load phase,
    /// later inserts overwrite earlier ones for the same id.
    pub fn register(&self, language: &str, store: &mut CatalogStore) {
        for (id, entry) in &self.translations {
            store.insert_fixed(
                TranslationKind::Item,
                language,
                id.clone(),
                TranslationRecord::item(entry.name.clone(), entry.lore.clone()),
            );
        }
        for (id, text) in &self.lore {
            store.insert_fixed(
                TranslationKind::Lore,
                language,
                id.clone(),
                TranslationRecord::text(text.clone()),
            );
        }
        for (key, text) in &self.messages {
            store.insert_fixed(
                TranslationKind::Message,
                language,
                key.clone(),
                TranslationRecord::text(text.clone()),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TranslationKind::*;

    const FULL_DOC: &str = r#"
name: TestAddon
translations:
  MAGIC_SWORD:
    name: "&aMagisches Schwert"
    lore:
      - "&7Scharf."
  NO_NAME:
    lore:
      - "nur lore"
lore:
  power-level: "&ePower"
messages:
  greet: "Hallo, {0}!"
"#;

    #[test]
    fn parse_full_document() {
        let doc = TranslationDocument::parse(FULL_DOC).unwrap();
        assert_eq!(doc.name.as_deref(), Some("TestAddon"));
        assert_eq!(doc.record_count(), 4);
    }

    #[test]
    fn register_populates_all_kinds() {
        let doc = TranslationDocument::parse(FULL_DOC).unwrap();
        let mut store = CatalogStore::new();
        doc.register("de", &mut store);

        let sword = store.get(Item, "de", "MAGIC_SWORD").unwrap();
        assert_eq!(sword.name_template(), Some("&aMagisches Schwert"));
        assert_eq!(sword.lore_template().map(|l| l.len()), Some(1));

        let no_name = store.get(Item, "de", "NO_NAME").unwrap();
        assert!(no_name.name_template().is_none());

        assert!(store.get(Lore, "de", "power-level").is_some());
        assert_eq!(
            store.get(Message, "de", "greet").unwrap().text_template(),
            Some("Hallo, {0}!")
        );
    }

    #[test]
    fn malformed_yaml_yields_none() {
        assert!(TranslationDocument::parse("translations: [not: a map").is_none());
    }

    #[test]
    fn wrong_shape_yields_none() {
        // Valid YAML, wrong structure for the document.
        assert!(TranslationDocument::parse("translations: 42").is_none());
    }

    #[test]
    fn empty_document_yields_none() {
        assert!(TranslationDocument::parse("").is_none());
        assert!(TranslationDocument::parse("name: OnlyALabel").is_none());
    }

    #[test]
    fn yaml_roundtrip() {
        let doc = TranslationDocument::parse(FULL_DOC).unwrap();
        let emitted = serde_yaml::to_string(&doc).unwrap();
        let reparsed = TranslationDocument::parse(&emitted).unwrap();
        assert_eq!(doc, reparsed);
    }
}
