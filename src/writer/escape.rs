//! Escaping for attribute values and character data
//!
//! On top of quick-xml's entity escaping, whitespace that a parser would
//! normalize is written as character references, and characters outside
//! the XML 1.0 `Char` production become U+FFFD.

use std::borrow::Cow;

use quick_xml::escape::escape;

/// Escape an attribute value; `\t`, `\n` and `\r` become character references
pub(crate) fn escape_attr(value: &str) -> Cow<'_, str> {
    escape_with(value, true)
}

/// Escape character data; `\r` becomes a character reference
pub(crate) fn escape_text(text: &str) -> Cow<'_, str> {
    escape_with(text, false)
}

fn escape_with(raw: &str, in_attr: bool) -> Cow<'_, str> {
    let escaped = escape(raw);
    if !escaped.chars().any(|c| needs_rewrite(c, in_attr)) {
        return escaped;
    }

    let mut out = String::with_capacity(escaped.len() + 8);
    for c in escaped.chars() {
        match c {
            '\t' if in_attr => out.push_str("&#x9;"),
            '\n' if in_attr => out.push_str("&#xA;"),
            '\r' => out.push_str("&#xD;"),
            c if !is_xml_char(c) => out.push(char::REPLACEMENT_CHARACTER),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

fn needs_rewrite(c: char, in_attr: bool) -> bool {
    c == '\r' || (in_attr && matches!(c, '\t' | '\n')) || !is_xml_char(c)
}

/// The XML 1.0 `Char` production
fn is_xml_char(c: char) -> bool {
    matches!(c,
        '\t' | '\n' | '\r'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_borrowed() {
        assert!(matches!(escape_attr("fill:red"), Cow::Borrowed(_)));
        assert!(matches!(escape_text("line one\nline two"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_entities() {
        assert_eq!(escape_text("<a & 'b'>"), "&lt;a &amp; &apos;b&apos;&gt;");
        assert_eq!(escape_attr("\"x\""), "&quot;x&quot;");
    }

    #[test]
    fn test_attribute_whitespace() {
        assert_eq!(escape_attr("a\tb\nc\r\nd"), "a&#x9;b&#xA;c&#xD;&#xA;d");
        assert_eq!(escape_attr("a b"), "a b");
    }

    #[test]
    fn test_text_whitespace() {
        assert_eq!(escape_text("a\tb\r\nc"), "a\tb&#xD;\nc");
    }

    #[test]
    fn test_invalid_characters_are_replaced() {
        assert_eq!(escape_text("a\u{1}b\u{1F}c"), "a\u{FFFD}b\u{FFFD}c");
        assert_eq!(escape_attr("\u{0}\u{FFFE}\u{FFFF}"), "\u{FFFD}\u{FFFD}\u{FFFD}");
        assert_eq!(escape_text("\u{10000}\u{D7FF}"), "\u{10000}\u{D7FF}");
    }
}
