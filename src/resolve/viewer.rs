//! Viewer identity.

/// The viewer a lookup runs on behalf of.
///
/// A sum type instead of an optional user reference, so call sites never
/// thread nullable viewers around: console-originated lookups pass
/// [`Viewer::Anonymous`] and resolve against the default language only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Viewer {
    /// A viewer with a known preferred language (typically a connected
    /// player; the tag comes from the host's locale accessor).
    Known { language: String },
    /// No viewer context; only the default language applies.
    Anonymous,
}

impl Viewer {
    /// Convenience constructor for a viewer with the given language tag.
    pub fn with_language(language: impl Into<String>) -> Self {
        Viewer::Known {
            language: language.into(),
        }
    }

    /// The viewer's raw preferred language, if any.
    pub fn preferred_language(&self) -> Option<&str> {
        match self {
            Viewer::Known { language } => Some(language),
            Viewer::Anonymous => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_viewer_exposes_language() {
        let viewer = Viewer::with_language("de");
        assert_eq!(viewer.preferred_language(), Some("de"));
    }

    #[test]
    fn anonymous_has_no_language() {
        assert_eq!(Viewer::Anonymous.preferred_language(), None);
    }
}
