//! Tree traversal on top of the quick-xml event writer

use std::io::{self, Write};

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use tracing::trace;

use crate::document::{Element, Node};

use super::counter::WriteCounter;
use super::escape::{escape_attr, escape_text};
use super::WriteOptions;

/// Streams one document to a sink, handling indentation itself so that an
/// arbitrary prefix and indent string can be used.
pub(crate) struct DocumentEncoder<'o, W: Write> {
    writer: Writer<WriteCounter<W>>,
    options: &'o WriteOptions,
    pretty: bool,
    depth: usize,
    /// The last token written was a start tag at the current depth
    indented_in: bool,
    /// Something has been written, so the next indent starts a new line
    put_newline: bool,
}

impl<'o, W: Write> DocumentEncoder<'o, W> {
    pub(crate) fn new(sink: W, options: &'o WriteOptions) -> Self {
        Self {
            writer: Writer::new(WriteCounter::new(sink)),
            options,
            pretty: options.is_pretty(),
            depth: 0,
            indented_in: false,
            put_newline: false,
        }
    }

    /// Bytes accepted by the sink so far
    pub(crate) fn written(&self) -> u64 {
        self.writer.get_ref().written()
    }

    pub(crate) fn encode(&mut self, root: &Element) -> io::Result<()> {
        if self.options.declaration {
            self.writer
                .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
            self.raw(b"\n")?;
        }
        self.element(root)
    }

    fn element(&mut self, element: &Element) -> io::Result<()> {
        trace!(name = element.name(), depth = self.depth, "encoding element");

        let attrs = element.rendered_attrs();
        let mut start = BytesStart::new(element.name());
        for (name, value) in &attrs {
            let value = escape_attr(value.as_str());
            start.push_attribute((name.as_bytes(), value.as_bytes()));
        }

        self.write_indent(1)?;
        self.writer.write_event(Event::Start(start))?;

        for child in element.child_nodes() {
            match child {
                Node::Element(e) => self.element(e)?,
                Node::CharData(text) => {
                    let text = escape_text(text.as_str());
                    self.writer
                        .write_event(Event::Text(BytesText::from_escaped(text)))?;
                }
                Node::Comment(text) => {
                    self.write_indent(0)?;
                    self.indented_in = false;
                    self.writer
                        .write_event(Event::Comment(BytesText::from_escaped(text.as_str())))?;
                }
            }
        }

        self.write_indent(-1)?;
        self.writer
            .write_event(Event::End(BytesEnd::new(element.name())))
    }

    /// Start a new line at the right depth. `delta` is 1 before a start tag,
    /// -1 before an end tag and 0 before a comment. An end tag directly
    /// following its own start tag or text stays on the same line.
    fn write_indent(&mut self, delta: i8) -> io::Result<()> {
        if !self.pretty {
            return Ok(());
        }
        if delta < 0 {
            self.depth = self.depth.saturating_sub(1);
            if self.indented_in {
                self.indented_in = false;
                return Ok(());
            }
        }

        if self.put_newline {
            self.raw(b"\n")?;
        } else {
            self.put_newline = true;
        }
        if !self.options.prefix.is_empty() {
            let prefix = self.options.prefix.as_bytes();
            self.writer.get_mut().write_all(prefix)?;
        }
        if !self.options.indent.is_empty() {
            let indent = self.options.indent.as_bytes();
            for _ in 0..self.depth {
                self.writer.get_mut().write_all(indent)?;
            }
        }

        if delta > 0 {
            self.depth += 1;
            self.indented_in = true;
        }
        Ok(())
    }

    fn raw(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.writer.get_mut().write_all(bytes)
    }
}
