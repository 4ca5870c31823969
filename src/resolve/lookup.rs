//! The lookup engine.
//!
//! "First language in priority order that has the id wins": a record is
//! always taken whole from a single language, never merged across languages.

use crate::catalog::{CatalogStore, TranslationKind, TranslationRecord};
use crate::resolve::fallback::FallbackResolver;
use crate::resolve::viewer::Viewer;

/// Probe the candidate languages for `viewer` in order and return the first
/// record found, or `None` when no candidate language has the id.
pub fn find_translation<'a>(
    store: &'a CatalogStore,
    resolver: &FallbackResolver,
    kind: TranslationKind,
    id: &str,
    viewer: &Viewer,
) -> Option<&'a TranslationRecord> {
    resolver
        .candidates(viewer)
        .iter()
        .find_map(|language| store.get(kind, language, id))
}
