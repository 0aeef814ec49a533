//! Document model
//!
//! A document is a tree of [`Node`]s. Elements own their attributes and
//! children outright, so a tree is always acyclic and can be built in a
//! single expression with the fluent methods on [`Element`].

pub mod elements;

use std::collections::HashMap;

use crate::value::AttrValue;

/// A node in a document tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    /// Literal character data, escaped on output
    CharData(String),
    /// A comment, written verbatim between `<!--` and `-->`
    Comment(String),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// Create a character data node
pub fn char_data(text: impl Into<String>) -> Node {
    Node::CharData(text.into())
}

/// Create a comment node
///
/// The text is not escaped; it must not contain `-->`.
pub fn comment(text: impl Into<String>) -> Node {
    Node::Comment(text.into())
}

/// An element with a tag name, attributes and ordered children
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    name: String,
    attrs: HashMap<String, AttrValue>,
    children: Vec<Node>,
}

impl Element {
    /// Create an element with no attributes and no children
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: HashMap::new(),
            children: vec![],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set an attribute, replacing any previous value with the same name
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Set an attribute in place
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        self.attrs.insert(name.into(), value.into());
    }

    /// Look up an attribute value
    pub fn get_attr(&self, name: &str) -> Option<&AttrValue> {
        self.attrs.get(name)
    }

    /// All attributes, in no particular order
    pub fn attrs(&self) -> &HashMap<String, AttrValue> {
        &self.attrs
    }

    /// Append one child
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Append several children
    pub fn append_children<I>(mut self, nodes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    /// Replace the children
    pub fn children<I>(mut self, nodes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children = nodes.into_iter().map(Into::into).collect();
        self
    }

    /// Push a child in place
    pub fn push_child(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    /// The children in insertion order
    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    /// Names and rendered values of the attributes that will be written,
    /// sorted by name. Attributes that render empty are skipped.
    pub fn rendered_attrs(&self) -> Vec<(&str, String)> {
        let mut rendered: Vec<(&str, String)> = self
            .attrs
            .iter()
            .map(|(name, value)| (name.as_str(), value.render()))
            .filter(|(_, value)| !value.is_empty())
            .collect();
        rendered.sort_unstable_by(|a, b| a.0.cmp(b.0));
        rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Length;

    #[test]
    fn test_new_element_is_empty() {
        let e = Element::new("g");
        assert_eq!(e.name(), "g");
        assert!(e.attrs().is_empty());
        assert!(e.child_nodes().is_empty());
    }

    #[test]
    fn test_last_write_wins() {
        let e = Element::new("rect").attr("fill", "red").attr("fill", "blue");
        assert_eq!(e.get_attr("fill"), Some(&AttrValue::from("blue")));
        assert_eq!(e.attrs().len(), 1);
    }

    #[test]
    fn test_rendered_attrs_are_sorted_and_filtered() {
        let e = Element::new("rect")
            .attr("y", Length::number(1.0))
            .attr("fill", "")
            .attr("x", Length::number(2.0))
            .attr("stroke", "blue")
            .attr("opacity", 0.0)
            .attr("height", Length::percent(50.0));
        assert_eq!(
            e.rendered_attrs(),
            vec![
                ("height", "50%".to_string()),
                ("stroke", "blue".to_string()),
                ("x", "2".to_string()),
                ("y", "1".to_string()),
            ]
        );
    }

    #[test]
    fn test_sort_is_bytewise() {
        let e = Element::new("svg")
            .attr("xmlns", "http://www.w3.org/2000/svg")
            .attr("viewBox", "0 0 1 1")
            .attr("Z", "upper")
            .attr("version", "1.1");
        let names: Vec<&str> = e.rendered_attrs().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Z", "version", "viewBox", "xmlns"]);
    }

    #[test]
    fn test_children_keep_insertion_order() {
        let e = Element::new("g")
            .child(Element::new("a"))
            .child(char_data("text"))
            .append_children([comment("c"), Node::from(Element::new("b"))]);
        assert_eq!(
            e.child_nodes(),
            &[
                Node::Element(Element::new("a")),
                Node::CharData("text".to_string()),
                Node::Comment("c".to_string()),
                Node::Element(Element::new("b")),
            ]
        );
    }

    #[test]
    fn test_children_replaces() {
        let e = Element::new("g")
            .child(Element::new("a"))
            .children([Element::new("b"), Element::new("c")]);
        assert_eq!(e.child_nodes().len(), 2);
        assert_eq!(e.child_nodes()[0], Node::Element(Element::new("b")));
    }
}
