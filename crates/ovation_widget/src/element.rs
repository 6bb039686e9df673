//! Plain element-tree description
//!
//! The widget does no layout or rasterization; it hands the host a tree of
//! these descriptions. Class names are opaque tokens, text is the literal
//! content, and elements the timeline animates carry their node handle.

use ovation_core::NodeHandle;
use smallvec::SmallVec;

/// Host element a description maps to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementKind {
    Button,
    Span,
    Svg,
}

/// One rendered element
#[derive(Clone, Debug)]
pub struct Element {
    kind: ElementKind,
    classes: SmallVec<[&'static str; 4]>,
    text: Option<String>,
    node: Option<NodeHandle>,
    children: Vec<Element>,
}

impl Element {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            classes: SmallVec::new(),
            text: None,
            node: None,
            children: Vec::new(),
        }
    }

    pub fn button() -> Self {
        Self::new(ElementKind::Button)
    }

    pub fn span() -> Self {
        Self::new(ElementKind::Span)
    }

    pub fn svg() -> Self {
        Self::new(ElementKind::Svg)
    }

    // ========================================================================
    // Builders
    // ========================================================================

    pub fn class(mut self, class: &'static str) -> Self {
        self.classes.push(class);
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Attach the platform node animations will drive
    pub fn node(mut self, node: NodeHandle) -> Self {
        self.node = Some(node);
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn class_list(&self) -> &[&'static str] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| *c == class)
    }

    pub fn text_content(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn node_handle(&self) -> Option<&NodeHandle> {
        self.node.as_ref()
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Depth-first search for the first element carrying `class`
    pub fn find_by_class(&self, class: &str) -> Option<&Element> {
        if self.has_class(class) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_by_class(class))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ovation_core::RefKey;

    #[test]
    fn test_builder_chain() {
        let el = Element::span()
            .class("count")
            .text("+ 3")
            .node(NodeHandle::new(RefKey::Count));
        assert_eq!(el.kind(), ElementKind::Span);
        assert!(el.has_class("count"));
        assert_eq!(el.text_content(), Some("+ 3"));
        assert!(el.node_handle().is_some());
    }

    #[test]
    fn test_find_by_class_searches_depth_first() {
        let tree = Element::button()
            .class("clap")
            .child(Element::span().child(Element::svg().class("icon")))
            .child(Element::span().class("total").text("267"));
        assert_eq!(
            tree.find_by_class("icon").map(|e| e.kind()),
            Some(ElementKind::Svg)
        );
        assert_eq!(
            tree.find_by_class("total").and_then(|e| e.text_content()),
            Some("267")
        );
        assert!(tree.find_by_class("missing").is_none());
    }
}
