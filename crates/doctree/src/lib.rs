//! Document tree intermediate representation for markdown rendering.
//!
//! This crate sits between a markdown parser and a renderer: the parser
//! builds a [`Tree`] of [`Element`] nodes, transformers restructure it, and
//! the renderer walks the result. It provides:
//!
//! - the arena-backed [`Tree`] with owned children, non-owning parent
//!   back-references, and a per-node metadata side channel;
//! - [`Tree::copy_subtree`] / [`Tree::copy_subtree_with`], structurally
//!   independent deep copies with optional payload remapping;
//! - [`Tree::rewrite`], a traversal-safe pass where a visitor may keep,
//!   replace, splice, or delete any node;
//! - table queries ([`Tree::table_rows`], [`Tree::table_size`]) and
//!   plain-text extraction ([`Tree::plain_text`]).
//!
//! Structural legality (which element kinds may appear under which) is
//! enforced on every attach, copy, and rewrite; violations surface as
//! [`TreeError::StructuralViolation`] instead of producing an invalid tree.
//!
//! # Example
//!
//! ```
//! use doctree::{Element, Rewrite, Splice, Tree};
//!
//! let mut tree = Tree::new(Element::Document);
//! let para = tree.append(tree.root(), Element::Paragraph)?;
//! tree.append(para, Element::Text { text: "hello".to_owned() })?;
//!
//! // Replace every paragraph with a horizontal rule
//! tree.rewrite(|tree, id| {
//!     if matches!(tree.element(id), Element::Paragraph) {
//!         let rule = tree.orphan(Element::HtmlBlock { html: "<hr>".to_owned() });
//!         return Ok(Rewrite::ReplaceMany(vec![Splice::resolved(rule)]));
//!     }
//!     Ok(Rewrite::Keep)
//! })?;
//!
//! let child = tree.children(tree.root())[0];
//! assert_eq!(
//!     tree.element(child),
//!     &Element::HtmlBlock { html: "<hr>".to_owned() },
//! );
//! # Ok::<(), doctree::TreeError>(())
//! ```
//!
//! Trees are single-threaded values: rewrites mutate parent/child links in
//! place, so a tree must not be shared across threads mid-transform.

mod copy;
mod element;
mod error;
mod node;
mod rewrite;
mod table;
mod text;

pub use element::Element;
pub use error::TreeError;
pub use node::{MetaMap, MetaValue, NodeId, Tree};
pub use rewrite::{Rewrite, Splice};
pub use text::escape_html;
