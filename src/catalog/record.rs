//! Translation records.

/// A single translation, identified externally by (kind, language, content id).
///
/// All three kinds share this shape. Item records may carry a display-name
/// template, a lore template (ordered line list), or both; lore and message
/// records carry their single text template in the name slot.
///
/// Records are immutable once inserted into the catalog. Templates may
/// contain `{token}` placeholders (resolved by the compositor) and legacy
/// `&x` color markers (normalized after substitution).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRecord {
    name: Option<String>,
    lore: Option<Vec<String>>,
}

impl TranslationRecord {
    /// A record holding a single text template (lore and message kinds).
    pub fn text(template: impl Into<String>) -> Self {
        Self {
            name: Some(template.into()),
            lore: None,
        }
    }

    /// An item record with optional name and lore templates.
    pub fn item(name: Option<String>, lore: Option<Vec<String>>) -> Self {
        Self { name, lore }
    }

    /// The display-name template, if authored.
    pub fn name_template(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The lore line templates, if authored.
    pub fn lore_template(&self) -> Option<&[String]> {
        self.lore.as_deref()
    }

    /// The single text template of a lore or message record.
    ///
    /// Same slot as the name template; separate accessor so call sites
    /// read naturally.
    pub fn text_template(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// True when the record carries no usable template at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.lore.as_ref().is_none_or(|l| l.is_empty())
    }
}
