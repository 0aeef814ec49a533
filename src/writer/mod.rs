//! Document serialization
//!
//! Writes an [`Element`] tree as markup. Attributes are sorted by name and
//! attributes whose value renders empty are left out, so the output depends
//! only on the tree, never on insertion order. Text and attribute values are
//! escaped; comments are written verbatim.

mod config;
mod counter;
mod encoder;
mod escape;

use std::fmt;
use std::io::Write;

use tracing::debug;

use crate::document::Element;
use crate::error::{Error, Result};

pub use config::WriteOptions;

use encoder::DocumentEncoder;

/// Write `root` to `sink` and return the number of bytes the sink accepted.
///
/// On failure the error carries the number of bytes written before it; the
/// sink may hold a truncated document. The sink is never flushed or closed.
pub fn write_document<W: Write>(root: &Element, sink: W, options: &WriteOptions) -> Result<u64> {
    let mut encoder = DocumentEncoder::new(sink, options);
    match encoder.encode(root) {
        Ok(()) => {
            let written = encoder.written();
            debug!(root = root.name(), bytes = written, "wrote document");
            Ok(written)
        }
        Err(source) => {
            let written = encoder.written();
            debug!(root = root.name(), bytes = written, error = %source, "document write failed");
            Err(Error::write(written, source))
        }
    }
}

impl Element {
    /// Write this element and its descendants on a single line.
    ///
    /// ```rust
    /// use svgwrite::elements::*;
    ///
    /// let mut out = Vec::new();
    /// let n = g().fill("").stroke("blue").write_to(&mut out).unwrap();
    /// assert_eq!(out, br#"<g stroke="blue"></g>"#);
    /// assert_eq!(n, out.len() as u64);
    /// ```
    pub fn write_to<W: Write>(&self, sink: W) -> Result<u64> {
        write_document(self, sink, &WriteOptions::default())
    }

    /// Write this element pretty-printed: each line starts with `prefix`
    /// followed by `indent` once per nesting level.
    pub fn write_to_indent<W: Write>(&self, sink: W, prefix: &str, indent: &str) -> Result<u64> {
        let options = WriteOptions::new().with_prefix(prefix).with_indent(indent);
        write_document(self, sink, &options)
    }

    /// Write this element with explicit options
    pub fn write_with<W: Write>(&self, sink: W, options: &WriteOptions) -> Result<u64> {
        write_document(self, sink, options)
    }
}

/// Single-line markup, as written by [`Element::write_to`]
impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = Vec::new();
        self.write_to(&mut buf).map_err(|_| fmt::Error)?;
        f.write_str(std::str::from_utf8(&buf).map_err(|_| fmt::Error)?)
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::document::elements::*;
    use crate::path::Path;
    use crate::value::{Length, LengthUnit, Points};

    fn indented(root: &Element, prefix: &str, indent: &str) -> String {
        let mut buf = Vec::new();
        let n = root.write_to_indent(&mut buf, prefix, indent).unwrap();
        assert_eq!(n, buf.len() as u64);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_empty_root() {
        assert_eq!(
            svg().to_string(),
            r#"<svg version="1.1" xmlns="http://www.w3.org/2000/svg"></svg>"#
        );
    }

    #[test]
    fn test_empty_attributes_are_skipped() {
        let e = rect().attr("fill", "").attr("stroke", "blue");
        assert_eq!(e.to_string(), r#"<rect stroke="blue"></rect>"#);
    }

    #[test]
    fn test_points_attribute() {
        let e = polyline().points(Points::from([(1.0, 2.0), (3.0, 4.0), (5.0, 6.0)]));
        assert_eq!(e.to_string(), r#"<polyline points="1,2 3,4 5,6"></polyline>"#);
    }

    #[test]
    fn test_text_and_attributes_are_escaped() {
        let e = text()
            .attr("data-q", r#"say "hi" & 'bye'"#)
            .child(char_data("a < b > c & 'd' \"e\""));
        insta::assert_snapshot!(
            e.to_string(),
            @r#"<text data-q="say &quot;hi&quot; &amp; &apos;bye&apos;">a &lt; b &gt; c &amp; &apos;d&apos; &quot;e&quot;</text>"#
        );
    }

    #[test]
    fn test_whitespace_in_values_survives_parsing() {
        let e = text()
            .style("a:b;\nc:d;\tx")
            .child(char_data("line1\r\nline2"));
        assert_eq!(
            e.to_string(),
            "<text style=\"a:b;&#xA;c:d;&#x9;x\">line1&#xD;\nline2</text>"
        );
    }

    #[test]
    fn test_control_characters_are_replaced() {
        let e = g().attr("data-x", "x\u{FFFF}").child(char_data("a\u{1}b"));
        assert_eq!(e.to_string(), "<g data-x=\"x\u{FFFD}\">a\u{FFFD}b</g>");
    }

    #[test]
    fn test_comments_are_verbatim() {
        let e = g().child(comment(" <b>&amp; "));
        assert_eq!(e.to_string(), "<g><!-- <b>&amp; --></g>");
    }

    #[test]
    fn test_indentation() {
        let doc = svg().child(
            g().stroke("green")
                .child(title().child(char_data("Lines")))
                .child(line().x1_y1_x2_y2(100.0, 300.0, 300.0, 100.0)),
        );
        assert_eq!(
            indented(&doc, "", "  "),
            concat!(
                r#"<svg version="1.1" xmlns="http://www.w3.org/2000/svg">"#,
                "\n",
                r#"  <g stroke="green">"#,
                "\n",
                "    <title>Lines</title>\n",
                r#"    <line x1="100" x2="300" y1="300" y2="100"></line>"#,
                "\n",
                "  </g>\n",
                "</svg>",
            )
        );
    }

    #[test]
    fn test_prefix_applies_to_every_line() {
        let doc = g().child(rect());
        assert_eq!(indented(&doc, "> ", "\t"), "> <g>\n> \t<rect></rect>\n> </g>");
    }

    #[test]
    fn test_comment_gets_its_own_line() {
        let doc = g().child(comment(" outline ")).child(rect());
        assert_eq!(
            indented(&doc, "", " "),
            "<g>\n <!-- outline -->\n <rect></rect>\n</g>"
        );

        let doc = g().child(comment("only"));
        assert_eq!(indented(&doc, "", " "), "<g>\n <!--only-->\n</g>");
    }

    #[test]
    fn test_empty_indent_matches_write_to() {
        let doc = svg()
            .width_height(300.0, 200.0, LengthUnit::Number)
            .child(rect().width_height(100.0, 100.0, LengthUnit::Percent).fill("red"))
            .child(comment(" c "))
            .child(text().xy(150.0, 125.0, LengthUnit::Number).child(char_data("SVG")));

        let mut flat = Vec::new();
        doc.write_to(&mut flat).unwrap();
        let mut unindented = Vec::new();
        doc.write_to_indent(&mut unindented, "", "").unwrap();
        assert_eq!(flat, unindented);
        assert!(!flat.contains(&b'\n'));
    }

    #[test]
    fn test_declaration() {
        let mut buf = Vec::new();
        let options = WriteOptions::new().with_declaration(true).with_indent("  ");
        let n = g().child(rect()).write_with(&mut buf, &options).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert_eq!(
            out,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<g>\n  <rect></rect>\n</g>"
        );
        assert_eq!(n, out.len() as u64);
    }

    #[test]
    fn test_path_data_attribute() {
        let e = path()
            .d(Path::new()
                .move_to_abs((100.0, 100.0))
                .line_to_abs((300.0, 100.0))
                .line_to_abs((200.0, 300.0))
                .close_path())
            .stroke_width(Length::number(3.0));
        assert_eq!(
            e.to_string(),
            r#"<path d="M100,100 L300,100 L200,300 z" stroke-width="3"></path>"#
        );
    }

    /// Accepts `limit` bytes, then fails every write
    struct FailAfter {
        accepted: Vec<u8>,
        limit: usize,
    }

    impl Write for FailAfter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let room = self.limit - self.accepted.len();
            if room == 0 {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"));
            }
            let n = buf.len().min(room);
            self.accepted.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_sink_failure_reports_partial_count() {
        let doc = svg().child(rect().fill("red")).child(circle().r(5.0));
        let mut sink = FailAfter {
            accepted: vec![],
            limit: 20,
        };
        let err = doc.write_to(&mut sink).unwrap_err();
        let Error::Write { written, source } = &err;
        assert_eq!(*written, 20);
        assert_eq!(source.kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(err.bytes_written(), sink.accepted.len() as u64);
        assert_eq!(sink.accepted, &doc.to_string().as_bytes()[..20]);
    }
}
