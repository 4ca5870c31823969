//! Lingo - translation catalog and resolution engine
//!
//! Lingo resolves user-facing text (item names, item lore, system messages)
//! into a viewer's preferred language. The catalog is assembled from two
//! sources: statically authored YAML documents and programmed translations
//! materialized from item definitions. Resolution walks a deterministic
//! language fallback chain and composes final text through placeholder
//! substitution and legacy color-marker normalization.
//!
//! ## Module Structure
//!
//! - `catalog`: Data model - kinds, records, and the two-tier store
//! - `cli`: Command-line interface layer (operator tooling)
//! - `compose`: Text compositor - placeholders, name/lore merging, markers
//! - `config`: Configuration file loading and parsing
//! - `items`: Item definitions and the translation capability contract
//! - `loader`: Catalog building, export, and re-extraction
//! - `resolve`: Viewer identity, fallback chain, and lookup
//! - `service`: The facade owning the catalog lifecycle

pub mod catalog;
pub mod cli;
pub mod compose;
pub mod config;
pub mod items;
pub mod loader;
pub mod resolve;
pub mod service;
