//! The text compositor.
//!
//! Turns a resolved [`TranslationRecord`] plus the item's current display
//! state into final text: placeholder substitution, name/lore merging, and
//! legacy-marker normalization into structured [`Text`].
//!
//! The compositor is pure string work; the disabled-id check and the
//! integration placeholder pass live in the service layer around it.

mod placeholder;
mod text;

pub use placeholder::{substitute, substitute_positional};
pub use text::{Color, Span, Text};

use crate::catalog::TranslationRecord;

/// Token bound to the pre-translation text during substitution.
pub const ORIGINAL_TOKEN: &str = "original";

/// Result of composing an item record against the item's current state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemComposition {
    /// Replacement display name, when the record authored one.
    pub name: Option<String>,
    /// Replacement lore block, when the record authored one and the target
    /// is not lore-protected.
    pub lore: Option<Vec<String>>,
}

impl ItemComposition {
    /// Whether applying this composition changes anything.
    pub fn applied(&self) -> bool {
        self.name.is_some() || self.lore.is_some()
    }
}

/// Render an item record.
///
/// - Name: the template is rendered with `{original}` bound to the current
///   display name; no template means the original stays.
/// - Lore: skipped wholesale when `lore_protected` is set (the caller's
///   explicit capability flag, never inferred from content). Otherwise each
///   template line is rendered with `{original}` bound to the original lore
///   line at the same index; a line without an original counterpart keeps
///   the token literal.
pub fn compose_item(
    record: &TranslationRecord,
    original_name: &str,
    original_lore: &[String],
    lore_protected: bool,
) -> ItemComposition {
    let name = record
        .name_template()
        .map(|template| render_with_original(template, original_name));

    let lore = if lore_protected {
        None
    } else {
        record.lore_template().map(|lines| {
            lines
                .iter()
                .enumerate()
                .map(|(idx, template)| match original_lore.get(idx) {
                    Some(line) => render_with_original(template, line),
                    None => template.clone(),
                })
                .collect()
        })
    };

    ItemComposition { name, lore }
}

fn render_with_original(template: &str, original: &str) -> String {
    substitute(template, |token| {
        (token == ORIGINAL_TOKEN).then(|| original.to_string())
    })
}

/// Render a message template: positional `{0}`, `{1}`, ... substitution.
/// Named integration placeholders are resolved later, by the caller.
pub fn compose_message(template: &str, args: &[String]) -> String {
    substitute_positional(template, args)
}

/// Normalize legacy markers into the structured representation. Identity
/// (a single unstyled span) on marker-free input.
pub fn normalize(input: &str) -> Text {
    Text::from_legacy(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn item_record(name: Option<&str>, lore: Option<&[&str]>) -> TranslationRecord {
        TranslationRecord::item(
            name.map(String::from),
            lore.map(|lines| lines.iter().map(|s| s.to_string()).collect()),
        )
    }

    #[test]
    fn name_template_sees_original() {
        let record = item_record(Some("&aShiny {original}"), None);
        let out = compose_item(&record, "Iron Ingot", &[], false);
        assert_eq!(out.name.as_deref(), Some("&aShiny Iron Ingot"));
        assert!(out.lore.is_none());
        assert!(out.applied());
    }

    #[test]
    fn missing_name_template_keeps_original() {
        let record = item_record(None, Some(&["line"]));
        let out = compose_item(&record, "Iron Ingot", &[], false);
        assert!(out.name.is_none());
        assert!(out.applied()); // lore still applies
    }

    #[test]
    fn lore_lines_rendered_by_index() {
        let record = item_record(None, Some(&["first: {original}", "second: {original}"]));
        let original = vec!["alpha".to_string(), "beta".to_string()];
        let out = compose_item(&record, "x", &original, false);
        assert_eq!(
            out.lore,
            Some(vec!["first: alpha".to_string(), "second: beta".to_string()])
        );
    }

    #[test]
    fn lore_line_without_original_counterpart_keeps_token() {
        let record = item_record(None, Some(&["{original}", "{original}"]));
        let original = vec!["only".to_string()];
        let out = compose_item(&record, "x", &original, false);
        assert_eq!(
            out.lore,
            Some(vec!["only".to_string(), "{original}".to_string()])
        );
    }

    #[test]
    fn protected_lore_is_never_touched() {
        // Lore template exists, but the protected flag turns the whole lore
        // pass off; the name pass still runs.
        let record = item_record(Some("{original}!"), Some(&["template"]));
        let out = compose_item(&record, "Sword", &["state".to_string()], true);
        assert_eq!(out.name.as_deref(), Some("Sword!"));
        assert!(out.lore.is_none());
    }

    #[test]
    fn record_without_templates_is_a_no_op() {
        let record = item_record(None, None);
        let out = compose_item(&record, "Sword", &[], false);
        assert!(!out.applied());
    }

    #[test]
    fn message_positional_then_literal_placeholders() {
        let rendered = compose_message(
            "Hello, {0}! You have {1} items.",
            &["Ada".to_string(), "3".to_string()],
        );
        assert_eq!(rendered, "Hello, Ada! You have 3 items.");
    }

    #[test]
    fn normalize_is_identity_on_plain_text() {
        assert_eq!(normalize("Hello"), Text::plain("Hello"));
    }

    #[test]
    fn normalize_parses_color_marker() {
        let text = normalize("&aFoo");
        assert_eq!(
            text,
            Text {
                spans: vec![Span::colored("Foo", Color::Green)],
            }
        );
    }
}
