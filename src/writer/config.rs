//! Configuration for document output

/// Formatting options for writing a document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteOptions {
    /// Written at the start of every indented line
    pub prefix: String,

    /// Written once per nesting level after the prefix
    pub indent: String,

    /// Whether to emit `<?xml version="1.0" encoding="UTF-8"?>` first
    pub declaration: bool,
}

impl WriteOptions {
    /// Single-line output without a declaration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-line prefix
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the per-level indent
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Set whether to emit the XML declaration
    pub fn with_declaration(mut self, declaration: bool) -> Self {
        self.declaration = declaration;
        self
    }

    /// Whether output is broken into indented lines
    pub fn is_pretty(&self) -> bool {
        !self.prefix.is_empty() || !self.indent.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = WriteOptions::default();
        assert_eq!(options.prefix, "");
        assert_eq!(options.indent, "");
        assert!(!options.declaration);
        assert!(!options.is_pretty());
    }

    #[test]
    fn test_builder_pattern() {
        let options = WriteOptions::new()
            .with_prefix("> ")
            .with_indent("\t")
            .with_declaration(true);

        assert_eq!(options.prefix, "> ");
        assert_eq!(options.indent, "\t");
        assert!(options.declaration);
        assert!(options.is_pretty());
    }

    #[test]
    fn test_prefix_alone_is_pretty() {
        assert!(WriteOptions::new().with_prefix("  ").is_pretty());
    }
}
