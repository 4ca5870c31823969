//! Structured chat text and legacy color markers.
//!
//! Translation templates are authored with the legacy inline marker syntax
//! (`&a`, `&l`, ...; the host's `§` form is accepted too). After placeholder
//! substitution the compositor normalizes a template into [`Text`], the
//! structured representation handed to the host. [`Text::to_legacy`] goes the
//! other way and is used when exporting live item state back into documents.
//!
//! Normalizing text that contains no markers is the identity: one unstyled
//! span whose content is the input, and `to_legacy` returns it unchanged.

use serde::{Deserialize, Serialize};

/// The sixteen legacy chat colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
}

impl Color {
    /// Parse a legacy color code character (`0`-`9`, `a`-`f`).
    pub fn from_code(code: char) -> Option<Color> {
        Some(match code.to_ascii_lowercase() {
            '0' => Color::Black,
            '1' => Color::DarkBlue,
            '2' => Color::DarkGreen,
            '3' => Color::DarkAqua,
            '4' => Color::DarkRed,
            '5' => Color::DarkPurple,
            '6' => Color::Gold,
            '7' => Color::Gray,
            '8' => Color::DarkGray,
            '9' => Color::Blue,
            'a' => Color::Green,
            'b' => Color::Aqua,
            'c' => Color::Red,
            'd' => Color::LightPurple,
            'e' => Color::Yellow,
            'f' => Color::White,
            _ => return None,
        })
    }

    /// The legacy code character for this color.
    pub fn code(&self) -> char {
        match self {
            Color::Black => '0',
            Color::DarkBlue => '1',
            Color::DarkGreen => '2',
            Color::DarkAqua => '3',
            Color::DarkRed => '4',
            Color::DarkPurple => '5',
            Color::Gold => '6',
            Color::Gray => '7',
            Color::DarkGray => '8',
            Color::Blue => '9',
            Color::Green => 'a',
            Color::Aqua => 'b',
            Color::Red => 'c',
            Color::LightPurple => 'd',
            Color::Yellow => 'e',
            Color::White => 'f',
        }
    }
}

/// A run of text with uniform styling.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub bold: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub italic: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub underlined: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub strikethrough: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub obfuscated: bool,
}

impl Span {
    /// An unstyled span.
    pub fn plain(text: impl Into<String>) -> Self {
        Span {
            text: text.into(),
            ..Span::default()
        }
    }

    /// A colored span with no other styling.
    pub fn colored(text: impl Into<String>, color: Color) -> Self {
        Span {
            text: text.into(),
            color: Some(color),
            ..Span::default()
        }
    }

    fn is_styled(&self) -> bool {
        self.color.is_some()
            || self.bold
            || self.italic
            || self.underlined
            || self.strikethrough
            || self.obfuscated
    }
}

/// Structured chat text: an ordered list of styled spans.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Text {
    pub spans: Vec<Span>,
}

impl Text {
    /// A single unstyled span. `Text::plain(s)` is what marker-free input
    /// normalizes to.
    pub fn plain(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            return Text::default();
        }
        Text {
            spans: vec![Span::plain(text)],
        }
    }

    /// Normalize legacy-marked text into structured spans.
    ///
    /// Both `&` and `§` introduce a marker. A color code starts a fresh
    /// style (colors reset decorations, matching the legacy renderer), `r`
    /// resets everything, and an `&` followed by anything that is not a
    /// code character stays literal text.
    pub fn from_legacy(input: &str) -> Text {
        let mut spans = Vec::new();
        let mut current = Span::default();
        let mut chars = input.chars().peekable();

        while let Some(ch) = chars.next() {
            if ch == '&' || ch == '\u{00A7}' {
                match chars.peek().copied() {
                    Some(code) if is_code_char(code) => {
                        chars.next();
                        if !current.text.is_empty() {
                            let done = std::mem::take(&mut current);
                            current = Span {
                                text: String::new(),
                                ..done.clone()
                            };
                            spans.push(done);
                        }
                        apply_code(&mut current, code);
                    }
                    _ => current.text.push(ch),
                }
            } else {
                current.text.push(ch);
            }
        }

        if !current.text.is_empty() {
            spans.push(current);
        }
        Text { spans }
    }

    /// Re-emit legacy markup using the `&` alternate marker, as written in
    /// translation documents.
    pub fn to_legacy(&self) -> String {
        let mut out = String::new();
        let mut prev_styled = false;

        for span in &self.spans {
            if let Some(color) = span.color {
                out.push('&');
                out.push(color.code());
            } else if prev_styled {
                out.push_str("&r");
            }
            for (on, code) in [
                (span.obfuscated, 'k'),
                (span.bold, 'l'),
                (span.strikethrough, 'm'),
                (span.underlined, 'n'),
                (span.italic, 'o'),
            ] {
                if on {
                    out.push('&');
                    out.push(code);
                }
            }
            out.push_str(&span.text);
            prev_styled = span.is_styled();
        }
        out
    }

    /// The text content with all styling dropped.
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

fn is_code_char(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), '0'..='9' | 'a'..='f' | 'k'..='o' | 'r')
}

fn apply_code(span: &mut Span, code: char) {
    match code.to_ascii_lowercase() {
        'r' => *span = Span::default(),
        'k' => span.obfuscated = true,
        'l' => span.bold = true,
        'm' => span.strikethrough = true,
        'n' => span.underlined = true,
        'o' => span.italic = true,
        c => {
            if let Some(color) = Color::from_code(c) {
                // A color starts over: decorations do not survive a color
                // change in the legacy renderer.
                *span = Span {
                    color: Some(color),
                    ..Span::default()
                };
            }
        }
    }
}
