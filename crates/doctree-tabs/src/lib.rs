//! Tabbed content blocks for document trees.
//!
//! Rewrites every admonition with category `"tabs"` into a flat run of
//! presentation markers plus the admonition's original content nodes. The
//! admonition's heading children delimit the panels; each heading's plain
//! text becomes the panel's button label.
//!
//! # Output shape
//!
//! ```html
//! <div class="doc-tabs">
//!   <div class="doc-tabs__labels">
//!     <button class="doc-tabs__label" data-tab="1">Python</button>
//!     <button class="doc-tabs__label" data-tab="2">Go</button>
//!   </div>
//!   <div class="doc-tabs__panel" data-tab="1">
//!     <!-- original content nodes, moved by reference -->
//!   </div>
//!   <div class="doc-tabs__panel" data-tab="2">
//!   </div>
//! </div>
//! ```
//!
//! Every marker is its own `HtmlBlock` node carrying a single tag, so the
//! content nodes between them stay genuine tree nodes (code blocks,
//! paragraphs, lists) that later processing can still see. Content is moved,
//! not copied: node ids and subtrees survive the rewrite unchanged.
//!
//! # Example
//!
//! ```
//! use doctree::{Element, Tree};
//! use doctree_tabs::expand_tabs;
//!
//! let mut tree = Tree::new(Element::Document);
//! let tabs = tree.append(
//!     tree.root(),
//!     Element::Admonition {
//!         category: "tabs".to_owned(),
//!         title: "Install".to_owned(),
//!     },
//! )?;
//! let heading = tree.append(tabs, Element::Heading { level: 1 })?;
//! tree.append(heading, Element::Text { text: "macOS".to_owned() })?;
//! tree.append(tabs, Element::Paragraph)?;
//!
//! expand_tabs(&mut tree)?;
//!
//! let first = tree.children(tree.root())[0];
//! assert_eq!(
//!     tree.element(first),
//!     &Element::HtmlBlock { html: r#"<div class="doc-tabs">"#.to_owned() },
//! );
//! # Ok::<(), doctree::TreeError>(())
//! ```

mod expand;
mod stash;

pub use expand::{TABS_CATEGORY, TabsTransformer, expand_tabs};
pub use stash::{STASH_KEY, stash_tab_content, stashed_tab_content};
