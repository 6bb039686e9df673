//! Shared node handles and their animatable visual properties

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::registry::RefKey;

// ─────────────────────────────────────────────────────────────────────────────
// Visual Properties
// ─────────────────────────────────────────────────────────────────────────────

/// The slice of a node's presentation the clap timeline drives: uniform
/// scale, vertical offset, and opacity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeVisual {
    pub scale: f32,
    pub translate_y: f32,
    pub opacity: f32,
}

impl NodeVisual {
    /// Untransformed, fully opaque
    pub const IDENTITY: NodeVisual = NodeVisual {
        scale: 1.0,
        translate_y: 0.0,
        opacity: 1.0,
    };
}

impl Default for NodeVisual {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Visual property a timeline track can be bound to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeProperty {
    Scale,
    TranslateY,
    Opacity,
}

// ─────────────────────────────────────────────────────────────────────────────
// Node Handle
// ─────────────────────────────────────────────────────────────────────────────

/// Shared handle to a platform node
///
/// Carries the registry key the node registers under and the visual
/// properties animations write to. Clones share the same underlying node;
/// `same_node` compares that identity. Uses `Rc` since the widget tree is
/// single-threaded.
#[derive(Clone)]
pub struct NodeHandle {
    key: RefKey,
    visual: Rc<RefCell<NodeVisual>>,
}

impl NodeHandle {
    /// Create a fresh node carrying `key`
    pub fn new(key: RefKey) -> Self {
        Self {
            key,
            visual: Rc::new(RefCell::new(NodeVisual::IDENTITY)),
        }
    }

    /// The registry key this node registers under
    pub fn key(&self) -> RefKey {
        self.key
    }

    /// True when both handles reference the same underlying node
    pub fn same_node(&self, other: &NodeHandle) -> bool {
        Rc::ptr_eq(&self.visual, &other.visual)
    }

    /// Snapshot of the current visual properties
    pub fn visual(&self) -> NodeVisual {
        *self.visual.borrow()
    }

    /// Write one property; animations drive nodes through this
    pub fn set(&self, property: NodeProperty, value: f32) {
        let mut visual = self.visual.borrow_mut();
        match property {
            NodeProperty::Scale => visual.scale = value,
            NodeProperty::TranslateY => visual.translate_y = value,
            NodeProperty::Opacity => visual.opacity = value,
        }
    }

    pub fn set_scale(&self, scale: f32) {
        self.visual.borrow_mut().scale = scale;
    }

    pub fn set_translate_y(&self, translate_y: f32) {
        self.visual.borrow_mut().translate_y = translate_y;
    }

    pub fn set_opacity(&self, opacity: f32) {
        self.visual.borrow_mut().opacity = opacity;
    }

    /// Reset every visual property to identity
    pub fn reset_transform(&self) {
        *self.visual.borrow_mut() = NodeVisual::IDENTITY;
    }
}

impl fmt::Debug for NodeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeHandle")
            .field("key", &self.key)
            .field("visual", &*self.visual.borrow())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_shares_node() {
        let node = NodeHandle::new(RefKey::Surface);
        let alias = node.clone();
        alias.set_scale(1.3);
        assert!((node.visual().scale - 1.3).abs() < 1e-6);
        assert!(node.same_node(&alias));
    }

    #[test]
    fn test_fresh_nodes_are_distinct() {
        let a = NodeHandle::new(RefKey::Count);
        let b = NodeHandle::new(RefKey::Count);
        assert!(!a.same_node(&b));
    }

    #[test]
    fn test_reset_transform() {
        let node = NodeHandle::new(RefKey::Surface);
        node.set(NodeProperty::Scale, 0.5);
        node.set(NodeProperty::TranslateY, -80.0);
        node.set(NodeProperty::Opacity, 0.0);
        node.reset_transform();
        assert_eq!(node.visual(), NodeVisual::IDENTITY);
    }

    #[test]
    fn test_set_by_property() {
        let node = NodeHandle::new(RefKey::Total);
        node.set(NodeProperty::Opacity, 0.25);
        assert!((node.visual().opacity - 0.25).abs() < 1e-6);
        assert!((node.visual().scale - 1.0).abs() < 1e-6);
    }
}
