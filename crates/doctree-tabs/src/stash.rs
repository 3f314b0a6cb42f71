//! Metadata stash for composite tab content.
//!
//! An alternate, coarser-grained design keeps one composite node per tab and
//! nests the preserved content in that node's metadata instead of splicing
//! it inline. These helpers read and write that stash; the interleaved
//! rewrite in [`expand`](crate::expand_tabs) never touches it.

use doctree::{MetaValue, NodeId, Tree};

/// Metadata key under which a composite tab node stashes its preserved
/// content subtree.
pub const STASH_KEY: &str = "doctree.tabs.stash";

/// Stash a preserved content subtree on a synthetic container node.
pub fn stash_tab_content(tree: &mut Tree, container: NodeId, content: Tree) {
    tree.meta_mut(container)
        .insert(STASH_KEY.to_owned(), MetaValue::Subtree(content));
}

/// Previously stashed content subtree of a synthetic container node, if any.
#[must_use]
pub fn stashed_tab_content(tree: &Tree, container: NodeId) -> Option<&Tree> {
    match tree.meta(container).get(STASH_KEY) {
        Some(MetaValue::Subtree(subtree)) => Some(subtree),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use doctree::Element;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_stash_round_trip() {
        let mut tree = Tree::new(Element::Document);
        let container = tree
            .append(
                tree.root(),
                Element::HtmlBlock {
                    html: r#"<div class="doc-tabs">"#.to_owned(),
                },
            )
            .unwrap();

        let mut content = Tree::new(Element::Document);
        let para = content.append(content.root(), Element::Paragraph).unwrap();
        content
            .append(
                para,
                Element::Text {
                    text: "stashed".to_owned(),
                },
            )
            .unwrap();
        let expected = content.copy_subtree(content.root());

        stash_tab_content(&mut tree, container, content);

        let stashed = stashed_tab_content(&tree, container).unwrap();
        assert!(stashed.subtree_eq(stashed.root(), &expected, expected.root()));
        assert_eq!(stashed.plain_text(stashed.root()), "stashed");
    }

    #[test]
    fn test_missing_stash_is_none() {
        let mut tree = Tree::new(Element::Document);
        let para = tree.append(tree.root(), Element::Paragraph).unwrap();
        assert!(stashed_tab_content(&tree, para).is_none());

        // A non-subtree value under the key is also "nothing stashed"
        tree.meta_mut(para)
            .insert(STASH_KEY.to_owned(), MetaValue::Bool(true));
        assert!(stashed_tab_content(&tree, para).is_none());
    }
}
