//! Translation kinds.
//!
//! Each kind owns its own namespace of content ids: an item id and a message
//! key never collide even when the strings are equal, because they live in
//! separate catalog partitions.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// The three catalog partitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TranslationKind {
    /// Item display names and item lore blocks, keyed by item id.
    Item,
    /// Standalone lore lines, keyed by lore id.
    Lore,
    /// UI / system messages, keyed by message key.
    Message,
}

impl TranslationKind {
    /// All kinds, in catalog order.
    pub const ALL: [TranslationKind; 3] = [
        TranslationKind::Item,
        TranslationKind::Lore,
        TranslationKind::Message,
    ];

    /// Human-readable label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            TranslationKind::Item => "item",
            TranslationKind::Lore => "lore",
            TranslationKind::Message => "message",
        }
    }
}

impl std::fmt::Display for TranslationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
