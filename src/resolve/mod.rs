//! Language fallback and lookup.
//!
//! - `viewer`: who the lookup is for
//! - `fallback`: the ordered candidate-language chain
//! - `lookup`: walking the chain against the catalog store

mod fallback;
mod lookup;
mod viewer;

pub use fallback::FallbackResolver;
pub use lookup::find_translation;
pub use viewer::Viewer;
