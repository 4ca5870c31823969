//! Catalog data model: kinds, records, and the in-memory store.

mod kind;
mod record;
mod store;

pub use kind::TranslationKind;
pub use record::TranslationRecord;
pub use store::{CatalogStore, Language, Partition};
