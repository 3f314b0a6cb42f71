//! Structural deep copy of subtrees.
//!
//! The copier produces a new [`Tree`] whose shape mirrors a source subtree,
//! optionally remapping each element payload through a caller-supplied
//! function. The source tree is never touched; on failure the partially
//! built tree is simply dropped, so no partial mutation is ever observable.

use crate::{Element, NodeId, Tree, TreeError};

impl Tree {
    /// Structurally independent deep copy of the subtree at `root`.
    ///
    /// Element payloads and metadata are cloned; node ids in the returned
    /// tree are fresh. Mutating the copy afterwards leaves this tree
    /// unchanged.
    #[must_use]
    pub fn copy_subtree(&self, root: NodeId) -> Tree {
        let mut out = Tree::new(self.element(root).clone());
        let out_root = out.root();
        *out.meta_mut(out_root) = self.meta(root).clone();
        self.copy_children_unchecked(root, &mut out, out_root);
        out
    }

    /// Deep copy of the subtree at `root`, remapping every element payload
    /// through `map_fn`.
    ///
    /// `map_fn` receives the source tree, the node being copied, and its
    /// payload, and returns the payload for the copied node. Children are
    /// copied in original order; metadata is cloned as-is.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::StructuralViolation`] if a mapped payload is not
    /// a legal child kind for its (mapped) parent position. The source tree
    /// is unaffected either way.
    pub fn copy_subtree_with<F>(&self, root: NodeId, mut map_fn: F) -> Result<Tree, TreeError>
    where
        F: FnMut(&Tree, NodeId, &Element) -> Element,
    {
        let mut out = Tree::new(map_fn(self, root, self.element(root)));
        let out_root = out.root();
        *out.meta_mut(out_root) = self.meta(root).clone();
        self.copy_children_with(root, &mut out, out_root, &mut map_fn)?;
        Ok(out)
    }

    /// Identity copy of children; legality cannot fail because the source
    /// tree already satisfies it.
    fn copy_children_unchecked(&self, src: NodeId, out: &mut Tree, dest: NodeId) {
        for &child in self.children(src) {
            let copied = out.orphan(self.element(child).clone());
            *out.meta_mut(copied) = self.meta(child).clone();
            let index = out.children(dest).len();
            out.link_at(dest, index, copied);
            self.copy_children_unchecked(child, out, copied);
        }
    }

    fn copy_children_with<F>(
        &self,
        src: NodeId,
        out: &mut Tree,
        dest: NodeId,
        map_fn: &mut F,
    ) -> Result<(), TreeError>
    where
        F: FnMut(&Tree, NodeId, &Element) -> Element,
    {
        for &child in self.children(src) {
            let mapped = map_fn(self, child, self.element(child));
            let copied = out.append(dest, mapped)?;
            *out.meta_mut(copied) = self.meta(child).clone();
            self.copy_children_with(child, out, copied, map_fn)?;
        }
        Ok(())
    }
}
