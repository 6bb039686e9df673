//! Keyed node registry and the registration callback handle
//!
//! Display elements expose their platform node to the root widget by
//! registering it under a fixed key. The registry keeps the first node seen
//! for each key so re-renders keep binding to the same node, and hands the
//! animation coordinator the complete `(surface, count, total)` triple once
//! all three are present.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::node::NodeHandle;

/// Fixed key set the clap widget registers nodes under
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RefKey {
    /// The interactive clap surface (the button itself)
    Surface,
    /// The live count bubble ("+ N")
    Count,
    /// The running total label
    Total,
}

impl RefKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            RefKey::Surface => "clap-surface",
            RefKey::Count => "clap-count",
            RefKey::Total => "clap-total",
        }
    }
}

impl fmt::Display for RefKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three nodes the clap timeline targets
#[derive(Clone, Debug)]
pub struct NodeTriple {
    pub surface: NodeHandle,
    pub count: NodeHandle,
    pub total: NodeHandle,
}

impl NodeTriple {
    /// True when both triples reference the same three underlying nodes
    pub fn same_nodes(&self, other: &NodeTriple) -> bool {
        self.surface.same_node(&other.surface)
            && self.count.same_node(&other.count)
            && self.total.same_node(&other.total)
    }
}

/// Mapping from `RefKey` to the canonical node registered under it
#[derive(Debug, Default)]
pub struct NodeRegistry {
    nodes: FxHashMap<RefKey, NodeHandle>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node under the key it carries
    ///
    /// The first registration for a key stores the node. Later registrations
    /// return the stored node instead, so the node a key resolves to never
    /// changes for the life of the registry.
    pub fn register(&mut self, node: NodeHandle) -> NodeHandle {
        match self.nodes.entry(node.key()) {
            std::collections::hash_map::Entry::Occupied(entry) => {
                tracing::trace!(key = %node.key(), "node already registered, reusing");
                entry.get().clone()
            }
            std::collections::hash_map::Entry::Vacant(entry) => {
                tracing::trace!(key = %node.key(), "node registered");
                entry.insert(node.clone());
                node
            }
        }
    }

    pub fn get(&self, key: RefKey) -> Option<&NodeHandle> {
        self.nodes.get(&key)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All three timeline targets, once every key has registered
    pub fn triple(&self) -> Option<NodeTriple> {
        Some(NodeTriple {
            surface: self.get(RefKey::Surface)?.clone(),
            count: self.get(RefKey::Count)?.clone(),
            total: self.get(RefKey::Total)?.clone(),
        })
    }
}

/// Cloneable registration callback handed to display elements
///
/// All clones share one registry, and clones taken from the same registrar
/// are identity-equal (`same_registrar`), which keeps a derived context that
/// embeds one stable across renders. Uses `Rc` since the widget tree is
/// single-threaded.
#[derive(Clone, Debug, Default)]
pub struct Registrar {
    inner: Rc<RefCell<NodeRegistry>>,
}

impl Registrar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node, receiving the canonical handle for its key
    pub fn register(&self, node: NodeHandle) -> NodeHandle {
        self.inner.borrow_mut().register(node)
    }

    /// True when both registrars share the same registry
    pub fn same_registrar(&self, other: &Registrar) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    pub fn get(&self, key: RefKey) -> Option<NodeHandle> {
        self.inner.borrow().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }

    /// All three timeline targets, once every key has registered
    pub fn triple(&self) -> Option<NodeTriple> {
        self.inner.borrow().triple()
    }
}
