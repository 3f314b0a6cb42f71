//! Arena-backed document tree.
//!
//! All nodes of a document live in a single [`Tree`] arena and are addressed
//! by [`NodeId`] indices. Children are owned by their parent (each node has
//! at most one parent at any time); the parent back-reference is a plain
//! index, so ownership never forms a cycle and splicing a node list never
//! moves node storage.
//!
//! Detached nodes stay in the arena until the tree is dropped. A `NodeId` is
//! only meaningful for the tree that produced it; indexing with an id from a
//! different tree may panic or address an unrelated node.

use std::collections::BTreeMap;

use crate::{Element, TreeError};

/// Identity of a node within its [`Tree`].
///
/// Ids are stable for the lifetime of the tree: moving a node to a new
/// parent does not change its id, which lets downstream consumers cache
/// per-node state across rewrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(usize);

/// Value stored in a node's metadata map.
///
/// Metadata is a side channel: the tree algorithms never traverse it as
/// structure, they only deep-copy it alongside the node. Consumers recognize
/// entries by key convention.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MetaValue {
    /// Arbitrary string payload.
    String(String),
    /// Integer payload.
    Int(i64),
    /// Boolean payload.
    Bool(bool),
    /// A stashed detached subtree, e.g. an alternate representation kept by
    /// a transformer.
    Subtree(Tree),
}

/// Per-node metadata map.
pub type MetaMap = BTreeMap<String, MetaValue>;

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct NodeData {
    element: Element,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    meta: MetaMap,
}

/// A document tree: one arena of nodes plus a designated root.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tree {
    nodes: Vec<NodeData>,
    root: NodeId,
}

impl Tree {
    /// Create a tree containing a single root node.
    #[must_use]
    pub fn new(root_element: Element) -> Self {
        let mut tree = Tree {
            nodes: Vec::new(),
            root: NodeId(0),
        };
        tree.root = tree.alloc(root_element);
        tree
    }

    /// The root node.
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of nodes allocated in the arena, including detached ones.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Element payload of `id`.
    #[must_use]
    pub fn element(&self, id: NodeId) -> &Element {
        &self.nodes[id.0].element
    }

    /// Mutable element payload of `id`.
    ///
    /// Changing a payload in place bypasses the structural-legality check;
    /// the caller is responsible for keeping the node legal in its position.
    pub fn element_mut(&mut self, id: NodeId) -> &mut Element {
        &mut self.nodes[id.0].element
    }

    /// Ordered children of `id`.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Parent of `id`, `None` for the root or a detached node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// Metadata map of `id`.
    #[must_use]
    pub fn meta(&self, id: NodeId) -> &MetaMap {
        &self.nodes[id.0].meta
    }

    /// Mutable metadata map of `id`.
    pub fn meta_mut(&mut self, id: NodeId) -> &mut MetaMap {
        &mut self.nodes[id.0].meta
    }

    /// Allocate a detached node with the given payload.
    ///
    /// The node has no parent until attached; transformers use this to build
    /// synthetic nodes before splicing them in.
    pub fn orphan(&mut self, element: Element) -> NodeId {
        self.alloc(element)
    }

    /// Allocate a new node and attach it as the last child of `parent`.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::StructuralViolation`] if `element` is not a
    /// legal child kind for `parent`.
    pub fn append(&mut self, parent: NodeId, element: Element) -> Result<NodeId, TreeError> {
        if !self.element(parent).allows_child(&element) {
            return Err(TreeError::illegal_child(self.element(parent), &element));
        }
        let child = self.alloc(element);
        let index = self.children(parent).len();
        self.link_at(parent, index, child);
        Ok(child)
    }

    /// Attach a detached node as the last child of `parent`.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::StructuralViolation`] if `child` already has a
    /// parent, is not a legal child kind for `parent`, or is an ancestor of
    /// `parent`.
    pub fn attach(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        let index = self.children(parent).len();
        self.insert(parent, index, child)
    }

    /// Attach a detached node at `index` in `parent`'s child list.
    ///
    /// Indices past the end append.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Tree::attach`].
    pub fn insert(&mut self, parent: NodeId, index: usize, child: NodeId) -> Result<(), TreeError> {
        if self.parent(child).is_some() {
            return Err(TreeError::already_attached(self.element(child)));
        }
        self.check_attachable(parent, child)?;
        self.link_at(parent, index, child);
        Ok(())
    }

    /// Detach `id` from its parent, leaving its subtree intact.
    ///
    /// No-op for the root or an already detached node.
    pub fn detach(&mut self, id: NodeId) {
        let Some(parent) = self.nodes[id.0].parent.take() else {
            return;
        };
        let siblings = &mut self.nodes[parent.0].children;
        if let Some(pos) = siblings.iter().position(|&c| c == id) {
            siblings.remove(pos);
        }
    }

    /// Whether `ancestor` is a (strict or non-strict) ancestor of `id`.
    #[must_use]
    pub fn is_ancestor(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if node == ancestor {
                return true;
            }
            current = self.parent(node);
        }
        false
    }

    /// Pre-order (parent before children) iterator over the subtree at `id`,
    /// including `id` itself.
    pub fn descendants(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let mut stack = vec![id];
        std::iter::from_fn(move || {
            let next = stack.pop()?;
            stack.extend(self.children(next).iter().rev().copied());
            Some(next)
        })
    }

    /// Deep structural equality of two subtrees, by element values and child
    /// order. Node identity and metadata are ignored.
    #[must_use]
    pub fn subtree_eq(&self, id: NodeId, other: &Tree, other_id: NodeId) -> bool {
        if self.element(id) != other.element(other_id) {
            return false;
        }
        let ours = self.children(id);
        let theirs = other.children(other_id);
        ours.len() == theirs.len()
            && ours
                .iter()
                .zip(theirs)
                .all(|(&a, &b)| self.subtree_eq(a, other, b))
    }

    fn alloc(&mut self, element: Element) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            element,
            parent: None,
            children: Vec::new(),
            meta: MetaMap::new(),
        });
        id
    }

    /// Legality and cycle checks for attaching `child` under `parent`,
    /// without looking at `child`'s current parent.
    pub(crate) fn check_attachable(&self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        if !self.element(parent).allows_child(self.element(child)) {
            return Err(TreeError::illegal_child(
                self.element(parent),
                self.element(child),
            ));
        }
        if self.is_ancestor(child, parent) {
            return Err(TreeError::cycle(self.element(child), self.element(parent)));
        }
        Ok(())
    }

    /// Raw link: insert `child` into `parent`'s child list and set its
    /// parent pointer. `child` must already be detached; callers validate.
    pub(crate) fn link_at(&mut self, parent: NodeId, index: usize, child: NodeId) {
        debug_assert!(self.nodes[child.0].parent.is_none());
        let siblings = &mut self.nodes[parent.0].children;
        let index = index.min(siblings.len());
        siblings.insert(index, child);
        self.nodes[child.0].parent = Some(parent);
    }

    /// Swap the root to a detached node. The old root subtree stays in the
    /// arena as garbage.
    pub(crate) fn set_root(&mut self, id: NodeId) {
        debug_assert!(self.nodes[id.0].parent.is_none());
        self.root = id;
    }

    /// Position of `id` in its parent's child list.
    pub(crate) fn position_in_parent(&self, id: NodeId) -> Option<(NodeId, usize)> {
        let parent = self.parent(id)?;
        let index = self.children(parent).iter().position(|&c| c == id)?;
        Some((parent, index))
    }
}
