//! The in-memory translation catalog.
//!
//! The store is built once by the loader, published whole, and read-only
//! afterwards; a reload builds a fresh store and swaps it in. Because no
//! mutation happens after publication, concurrent lookups need no locking
//! of their own.
//!
//! ## Two-tier layering
//!
//! Each partition keeps authored (*fixed*) records and generated
//! (*programmed*) records in separate maps. Lookup probes the fixed tier
//! first, so an authored record always wins over a generated one for the
//! same (language, id) — regardless of insertion order. Programmed records
//! exist only for the item kind.

use std::collections::{BTreeSet, HashMap};

use crate::catalog::kind::TranslationKind;
use crate::catalog::record::TranslationRecord;

/// A language tag, e.g. `"en"`, `"zh-CN"`. Opaque to the engine.
pub type Language = String;

/// One kind's worth of translations: `language -> content id -> record`.
#[derive(Debug, Clone, Default)]
pub struct Partition {
    fixed: HashMap<Language, HashMap<String, TranslationRecord>>,
    programmed: HashMap<Language, HashMap<String, TranslationRecord>>,
}

impl Partition {
    /// Insert an authored record. Unconditional overwrite: within one load,
    /// later files win over earlier ones for the same (language, id).
    pub fn insert_fixed(
        &mut self,
        language: impl Into<Language>,
        id: impl Into<String>,
        record: TranslationRecord,
    ) {
        self.fixed
            .entry(language.into())
            .or_default()
            .insert(id.into(), record);
    }

    /// Insert a generated record into the programmed tier.
    ///
    /// The tier is only consulted when the fixed tier has no entry for the
    /// key, so this never shadows an authored record.
    pub fn insert_programmed(
        &mut self,
        language: impl Into<Language>,
        id: impl Into<String>,
        record: TranslationRecord,
    ) {
        self.programmed
            .entry(language.into())
            .or_default()
            .insert(id.into(), record);
    }

    /// Exact-match lookup, fixed tier first. No language fallback here.
    pub fn get(&self, language: &str, id: &str) -> Option<&TranslationRecord> {
        if let Some(record) = self.fixed.get(language).and_then(|m| m.get(id)) {
            return Some(record);
        }
        self.programmed.get(language).and_then(|m| m.get(id))
    }

    /// Languages that have at least one authored record in this partition.
    pub fn fixed_languages(&self) -> impl Iterator<Item = &str> {
        self.fixed
            .iter()
            .filter(|(_, m)| !m.is_empty())
            .map(|(lang, _)| lang.as_str())
    }

    /// Number of authored records for a language.
    pub fn fixed_count(&self, language: &str) -> usize {
        self.fixed.get(language).map_or(0, HashMap::len)
    }

    /// Number of generated records for a language.
    pub fn programmed_count(&self, language: &str) -> usize {
        self.programmed.get(language).map_or(0, HashMap::len)
    }

    /// All authored content ids for a language.
    pub fn fixed_ids(&self, language: &str) -> impl Iterator<Item = &str> {
        self.fixed
            .get(language)
            .into_iter()
            .flat_map(|m| m.keys().map(String::as_str))
    }
}

/// All loaded translations, one partition per kind, plus the set of
/// known languages seeding the fallback resolver.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    items: Partition,
    lore: Partition,
    messages: Partition,
    known_languages: BTreeSet<Language>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a language discovered as a static translation folder.
    pub fn add_language(&mut self, language: impl Into<Language>) {
        self.known_languages.insert(language.into());
    }

    /// Languages for which a static translation folder exists.
    pub fn languages(&self) -> &BTreeSet<Language> {
        &self.known_languages
    }

    pub fn partition(&self, kind: TranslationKind) -> &Partition {
        match kind {
            TranslationKind::Item => &self.items,
            TranslationKind::Lore => &self.lore,
            TranslationKind::Message => &self.messages,
        }
    }

    fn partition_mut(&mut self, kind: TranslationKind) -> &mut Partition {
        match kind {
            TranslationKind::Item => &mut self.items,
            TranslationKind::Lore => &mut self.lore,
            TranslationKind::Message => &mut self.messages,
        }
    }

    /// Insert an authored record (overwrite on duplicate key).
    pub fn insert_fixed(
        &mut self,
        kind: TranslationKind,
        language: impl Into<Language>,
        id: impl Into<String>,
        record: TranslationRecord,
    ) {
        self.partition_mut(kind).insert_fixed(language, id, record);
    }

    /// Insert a generated record; loses to any authored record at lookup.
    pub fn insert_programmed(
        &mut self,
        kind: TranslationKind,
        language: impl Into<Language>,
        id: impl Into<String>,
        record: TranslationRecord,
    ) {
        self.partition_mut(kind)
            .insert_programmed(language, id, record);
    }

    /// Exact-match lookup within one language. Fallback lives in the
    /// resolver, not here.
    pub fn get(
        &self,
        kind: TranslationKind,
        language: &str,
        id: &str,
    ) -> Option<&TranslationRecord> {
        self.partition(kind).get(language, id)
    }
}
