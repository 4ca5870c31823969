//! Language fallback policy.
//!
//! This is the only place fallback order is decided. Every lookup call site
//! goes through [`FallbackResolver::candidates`]; none re-derives the chain.

use std::collections::{BTreeSet, HashMap};

use crate::catalog::Language;
use crate::resolve::viewer::Viewer;

/// Produces the ordered, duplicate-free list of candidate languages for a
/// viewer.
///
/// Order:
/// 1. the viewer's raw language, when it is a known language;
/// 2. otherwise its mapped canonical language, when an alias mapping exists;
/// 3. the default language, unless already listed.
///
/// An anonymous viewer yields `[default]` alone. An unknown, unmapped
/// language contributes nothing of its own and also yields `[default]`.
#[derive(Debug, Clone)]
pub struct FallbackResolver {
    known: BTreeSet<Language>,
    mappings: HashMap<Language, Language>,
    default_language: Language,
}

impl FallbackResolver {
    pub fn new(
        known: BTreeSet<Language>,
        mappings: HashMap<Language, Language>,
        default_language: impl Into<Language>,
    ) -> Self {
        Self {
            known,
            mappings,
            default_language: default_language.into(),
        }
    }

    /// The language used when nothing viewer-specific resolves.
    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// The ordered candidate languages to probe for this viewer.
    pub fn candidates(&self, viewer: &Viewer) -> Vec<Language> {
        let mut chain = Vec::with_capacity(2);

        if let Some(raw) = viewer.preferred_language() {
            if self.known.contains(raw) {
                chain.push(raw.to_string());
            } else if let Some(mapped) = self.mappings.get(raw) {
                chain.push(mapped.clone());
            }
        }

        if !chain.iter().any(|lang| *lang == self.default_language) {
            chain.push(self.default_language.clone());
        }

        chain
    }
}
