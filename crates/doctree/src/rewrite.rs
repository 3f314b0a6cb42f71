//! Traversal-safe tree rewriting.
//!
//! [`Tree::rewrite`] walks the tree pre-order and lets a visitor keep,
//! replace, splice, or delete each node. The traversal runs over an explicit
//! work stack rather than a live iterator, so splicing into a parent's child
//! list never skips or double-visits siblings, and replacement nodes are
//! visited next in document order.

use crate::{NodeId, Tree, TreeError};

/// Visitor decision for a single node.
#[derive(Debug, Clone)]
pub enum Rewrite {
    /// Leave the node in place and descend into its children.
    Keep,
    /// Substitute a single node at this position.
    Replace {
        /// The replacement node. It is detached from wherever it currently
        /// lives and spliced in at the visited node's position.
        node: NodeId,
        /// Whether to continue the traversal into the replacement's
        /// children. The replacement itself is not re-offered to the
        /// visitor.
        descend: bool,
    },
    /// Splice an ordered sequence of nodes at this position, in place of
    /// the visited node. An empty sequence is equivalent to [`Rewrite::Delete`].
    ReplaceMany(Vec<Splice>),
    /// Remove the node and its subtree from the tree.
    Delete,
}

/// One entry of a [`Rewrite::ReplaceMany`] sequence.
#[derive(Debug, Clone, Copy)]
pub struct Splice {
    /// Node to splice in. Detached from its current position first, which
    /// is how content moves out of the replaced node's subtree by
    /// reference, keeping its id and subtree intact.
    pub node: NodeId,
    /// When `true`, the node is final: neither it nor its subtree is
    /// offered to the visitor again. This is the termination guarantee for
    /// transforms that splice nodes of the same kind they match on.
    pub finished: bool,
}

impl Splice {
    /// Splice a node that the visitor should still be offered.
    #[must_use]
    pub fn pending(node: NodeId) -> Self {
        Splice {
            node,
            finished: false,
        }
    }

    /// Splice a node as final output, never re-offered to the visitor.
    #[must_use]
    pub fn resolved(node: NodeId) -> Self {
        Splice {
            node,
            finished: true,
        }
    }
}

impl Tree {
    /// Rewrite the tree in a single pre-order pass.
    ///
    /// `visit` is called for each node with a valid parent pointer, so it
    /// may inspect ancestry and siblings; its returned [`Rewrite`] is
    /// applied before the traversal continues. Spliced nodes keep their ids
    /// and subtrees (moved, not copied), and untouched siblings keep their
    /// relative order.
    ///
    /// The root may only be exchanged one-for-one: [`Rewrite::Delete`] or a
    /// non-singleton [`Rewrite::ReplaceMany`] at the root is a
    /// [`TreeError::StructuralViolation`].
    ///
    /// # Errors
    ///
    /// Fails fast with [`TreeError::StructuralViolation`] if a replacement
    /// is illegal at its position, and propagates errors from `visit`. The
    /// rewrite is not transactional: splices applied before the failure
    /// remain in place.
    pub fn rewrite<F>(&mut self, mut visit: F) -> Result<(), TreeError>
    where
        F: FnMut(&mut Tree, NodeId) -> Result<Rewrite, TreeError>,
    {
        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            match visit(self, id)? {
                Rewrite::Keep => {
                    self.push_children(&mut stack, id);
                }
                Rewrite::Replace { node, descend } => {
                    if node != id {
                        self.replace_one(id, node)?;
                    }
                    if descend {
                        self.push_children(&mut stack, node);
                    }
                }
                Rewrite::ReplaceMany(splices) => {
                    if id == self.root() {
                        if splices.len() != 1 {
                            return Err(TreeError::StructuralViolation(
                                "the root can only be replaced one-for-one".to_owned(),
                            ));
                        }
                        let single = splices[0];
                        if single.node != id {
                            self.replace_one(id, single.node)?;
                        }
                        if !single.finished {
                            stack.push(single.node);
                        }
                        continue;
                    }
                    self.splice(id, &splices)?;
                    for splice in splices.iter().rev() {
                        if !splice.finished {
                            stack.push(splice.node);
                        }
                    }
                }
                Rewrite::Delete => {
                    if id == self.root() {
                        return Err(TreeError::StructuralViolation(
                            "the root node cannot be deleted".to_owned(),
                        ));
                    }
                    self.detach(id);
                }
            }
        }
        Ok(())
    }

    /// Substitute `node` at `old`'s exact tree position.
    fn replace_one(&mut self, old: NodeId, node: NodeId) -> Result<(), TreeError> {
        let Some((parent, index)) = self.position_in_parent(old) else {
            // old is the root (or detached): swap the root pointer
            self.detach(node);
            self.set_root(node);
            return Ok(());
        };
        self.check_attachable(parent, node)?;
        self.detach(old);
        self.detach(node);
        self.link_at(parent, index, node);
        Ok(())
    }

    /// Splice `splices` into `old`'s parent at `old`'s position.
    fn splice(&mut self, old: NodeId, splices: &[Splice]) -> Result<(), TreeError> {
        let Some((parent, index)) = self.position_in_parent(old) else {
            return Err(TreeError::StructuralViolation(
                "cannot splice a sequence at a detached node".to_owned(),
            ));
        };
        // Validate everything up front so a rejected splice list leaves
        // this parent untouched.
        for splice in splices {
            self.check_attachable(parent, splice.node)?;
        }
        self.detach(old);
        for (offset, splice) in splices.iter().enumerate() {
            self.detach(splice.node);
            self.link_at(parent, index + offset, splice.node);
        }
        Ok(())
    }

    fn push_children(&self, stack: &mut Vec<NodeId>, id: NodeId) {
        // Reverse so the leftmost child is popped first
        stack.extend(self.children(id).iter().rev().copied());
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::Element;

    fn text(s: &str) -> Element {
        Element::Text { text: s.to_owned() }
    }

    fn para_with_text(tree: &mut Tree, parent: NodeId, s: &str) -> NodeId {
        let para = tree.append(parent, Element::Paragraph).unwrap();
        tree.append(para, text(s)).unwrap();
        para
    }

    #[test]
    fn test_keep_visits_preorder() {
        let mut tree = Tree::new(Element::Document);
        let root = tree.root();
        let a = para_with_text(&mut tree, root, "a");
        let b = para_with_text(&mut tree, root, "b");

        let mut visited = Vec::new();
        tree.rewrite(|tree, id| {
            visited.push(tree.element(id).kind_name());
            Ok(Rewrite::Keep)
        })
        .unwrap();

        assert_eq!(
            visited,
            vec!["Document", "Paragraph", "Text", "Paragraph", "Text"]
        );
        assert_eq!(tree.children(tree.root()), &[a, b]);
    }

    #[test]
    fn test_replace_one_keeps_position() {
        let mut tree = Tree::new(Element::Document);
        let root = tree.root();
        let a = para_with_text(&mut tree, root, "a");
        let b = para_with_text(&mut tree, root, "b");
        let c = para_with_text(&mut tree, root, "c");

        tree.rewrite(|tree, id| {
            if id == b {
                let quote = tree.orphan(Element::BlockQuote);
                return Ok(Rewrite::Replace {
                    node: quote,
                    descend: false,
                });
            }
            Ok(Rewrite::Keep)
        })
        .unwrap();

        let children = tree.children(tree.root());
        assert_eq!(children.len(), 3);
        assert_eq!(children[0], a);
        assert_eq!(tree.element(children[1]), &Element::BlockQuote);
        assert_eq!(children[2], c);
        assert_eq!(tree.parent(b), None);
    }

    #[test]
    fn test_replace_one_descends_into_replacement() {
        let mut tree = Tree::new(Element::Document);
        let root = tree.root();
        let old = para_with_text(&mut tree, root, "old");

        let mut replacement = None;
        let mut replacement_run = None;
        let mut visited = Vec::new();
        tree.rewrite(|tree, id| {
            visited.push(id);
            if id == old {
                let para = tree.orphan(Element::Paragraph);
                let run = tree.append(para, text("new")).unwrap();
                replacement = Some(para);
                replacement_run = Some(run);
                return Ok(Rewrite::Replace {
                    node: para,
                    descend: true,
                });
            }
            Ok(Rewrite::Keep)
        })
        .unwrap();

        // The replacement itself is not re-offered, but its children are
        let para = replacement.unwrap();
        let run = replacement_run.unwrap();
        assert!(!visited.contains(&para));
        assert!(visited.contains(&run));
        assert_eq!(tree.children(tree.root()), &[para]);
        assert_eq!(tree.children(para), &[run]);
    }

    #[test]
    fn test_replace_many_preserves_sibling_order() {
        let mut tree = Tree::new(Element::Document);
        let root = tree.root();
        let a = para_with_text(&mut tree, root, "a");
        let b = para_with_text(&mut tree, root, "b");
        let c = para_with_text(&mut tree, root, "c");

        tree.rewrite(|tree, id| {
            if id == b {
                let before = tree.orphan(Element::HtmlBlock {
                    html: "<hr>".to_owned(),
                });
                let after = tree.orphan(Element::HtmlBlock {
                    html: "<hr>".to_owned(),
                });
                return Ok(Rewrite::ReplaceMany(vec![
                    Splice::resolved(before),
                    Splice::resolved(id),
                    Splice::resolved(after),
                ]));
            }
            Ok(Rewrite::Keep)
        })
        .unwrap();

        let children: Vec<&'static str> = tree
            .children(tree.root())
            .iter()
            .map(|&id| tree.element(id).kind_name())
            .collect();
        assert_eq!(
            children,
            vec!["Paragraph", "HtmlBlock", "Paragraph", "HtmlBlock", "Paragraph"]
        );
        assert_eq!(tree.children(tree.root())[0], a);
        assert_eq!(tree.children(tree.root())[2], b);
        assert_eq!(tree.children(tree.root())[4], c);
    }

    #[test]
    fn test_pending_splices_are_revisited_in_order() {
        let mut tree = Tree::new(Element::Document);
        let root = tree.root();
        let target = para_with_text(&mut tree, root, "expand me");
        para_with_text(&mut tree, root, "after");

        let mut visited = Vec::new();
        tree.rewrite(|tree, id| {
            visited.push(id);
            if id == target {
                let x = tree.orphan(Element::BlockQuote);
                let y = tree.orphan(Element::BlockQuote);
                return Ok(Rewrite::ReplaceMany(vec![
                    Splice::pending(x),
                    Splice::resolved(y),
                ]));
            }
            Ok(Rewrite::Keep)
        })
        .unwrap();

        // x was re-offered right after the splice, y never was
        let x = tree.children(tree.root())[0];
        assert_eq!(visited[1], target);
        assert_eq!(visited[2], x);
        assert!(!visited.contains(&tree.children(tree.root())[1]));
    }

    #[test]
    fn test_delete_removes_subtree() {
        let mut tree = Tree::new(Element::Document);
        let root = tree.root();
        let a = para_with_text(&mut tree, root, "a");
        let b = para_with_text(&mut tree, root, "b");

        tree.rewrite(|_, id| {
            if id == a {
                return Ok(Rewrite::Delete);
            }
            Ok(Rewrite::Keep)
        })
        .unwrap();

        assert_eq!(tree.children(tree.root()), &[b]);
        assert_eq!(tree.parent(a), None);
    }

    #[test]
    fn test_delete_root_is_an_error() {
        let mut tree = Tree::new(Element::Document);
        let err = tree.rewrite(|_, _| Ok(Rewrite::Delete)).unwrap_err();
        assert!(matches!(err, TreeError::StructuralViolation(_)));
    }

    #[test]
    fn test_illegal_splice_fails_fast() {
        let mut tree = Tree::new(Element::Document);
        let root = tree.root();
        let a = para_with_text(&mut tree, root, "a");
        para_with_text(&mut tree, root, "b");

        let err = tree
            .rewrite(|tree, id| {
                if id == a {
                    // Inline text is not legal under Document
                    let run = tree.orphan(text("stray"));
                    return Ok(Rewrite::ReplaceMany(vec![Splice::resolved(run)]));
                }
                Ok(Rewrite::Keep)
            })
            .unwrap_err();

        assert!(matches!(err, TreeError::StructuralViolation(_)));
        // The rejected splice left its parent untouched
        assert_eq!(tree.children(tree.root()).len(), 2);
        assert_eq!(tree.children(tree.root())[0], a);
    }

    #[test]
    fn test_replace_root() {
        let mut tree = Tree::new(Element::Document);
        let root = tree.root();
        para_with_text(&mut tree, root, "old");
        let old_root = tree.root();

        tree.rewrite(|tree, id| {
            if id == old_root {
                let fresh = tree.orphan(Element::Document);
                return Ok(Rewrite::Replace {
                    node: fresh,
                    descend: false,
                });
            }
            Ok(Rewrite::Keep)
        })
        .unwrap();

        assert_ne!(tree.root(), old_root);
        assert_eq!(tree.element(tree.root()), &Element::Document);
        assert_eq!(tree.children(tree.root()), &[]);
    }

    #[test]
    fn test_moved_nodes_keep_identity_and_subtree() {
        let mut tree = Tree::new(Element::Document);
        let outer = tree
            .append(
                tree.root(),
                Element::Admonition {
                    category: "note".to_owned(),
                    title: "N".to_owned(),
                },
            )
            .unwrap();
        let inner = para_with_text(&mut tree, outer, "kept");
        let inner_text = tree.children(inner)[0];

        // Hoist the paragraph out of the admonition
        tree.rewrite(|_, id| {
            if id == outer {
                return Ok(Rewrite::ReplaceMany(vec![Splice::resolved(inner)]));
            }
            Ok(Rewrite::Keep)
        })
        .unwrap();

        assert_eq!(tree.children(tree.root()), &[inner]);
        assert_eq!(tree.children(inner), &[inner_text]);
        assert_eq!(tree.element(inner_text), &text("kept"));
    }
}
