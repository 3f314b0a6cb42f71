//! Tabs admonition expansion.

use doctree::{Element, NodeId, Rewrite, Splice, Tree, TreeError, escape_html};

/// Admonition category tag that triggers tab expansion.
pub const TABS_CATEGORY: &str = "tabs";

const CONTAINER_OPEN: &str = r#"<div class="doc-tabs">"#;
const LABELS_OPEN: &str = r#"<div class="doc-tabs__labels">"#;
const CLOSE: &str = "</div>";

/// One panel collected while scanning an admonition's children.
struct Panel {
    /// HTML-escaped button label, from the delimiting heading's plain text.
    label: String,
    /// Original content nodes, in document order.
    content: Vec<NodeId>,
}

/// Transformer that expands tabs admonitions into marker/content runs.
///
/// Each admonition is expanded independently: `data-tab` indices are
/// 1-based and restart at 1 per admonition, so consecutive tabs admonitions
/// become separate containers.
///
/// Non-fatal conditions (an admonition skipped for having no headings) are
/// recorded as warnings rather than errors.
pub struct TabsTransformer {
    warnings: Vec<String>,
}

impl TabsTransformer {
    /// Create a new transformer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            warnings: Vec::new(),
        }
    }

    /// Warnings generated during expansion.
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Expand every tabs admonition in `tree`.
    ///
    /// An admonition with no heading children has no panel delimiters and
    /// is left completely unmodified. Content between two headings may be
    /// empty; the panel markers are emitted anyway. Content before the
    /// first heading belongs to no panel and is emitted ahead of the
    /// container, preserving document order. Preserved content is re-offered
    /// to the traversal, so a tabs admonition nested inside a panel is
    /// expanded in the same pass: no tabs admonition survives a single call.
    ///
    /// # Errors
    ///
    /// Propagates [`TreeError::StructuralViolation`] from the underlying
    /// rewrite when fed a malformed tree; the expansion itself introduces
    /// no error conditions.
    pub fn expand(&mut self, tree: &mut Tree) -> Result<(), TreeError> {
        let warnings = &mut self.warnings;
        tree.rewrite(|tree, id| {
            let Element::Admonition { category, title } = tree.element(id) else {
                return Ok(Rewrite::Keep);
            };
            if category.as_str() != TABS_CATEGORY {
                return Ok(Rewrite::Keep);
            }
            let title = title.clone();

            let (leading, panels) = scan_panels(tree, id);
            if panels.is_empty() {
                warnings.push(format!(
                    "tabs admonition {title:?} has no heading delimiters, leaving it unmodified"
                ));
                return Ok(Rewrite::Keep);
            }
            if !leading.is_empty() {
                warnings.push(format!(
                    "tabs admonition {title:?} has content before its first heading, \
                     emitting it ahead of the tab container"
                ));
            }
            Ok(Rewrite::ReplaceMany(build_splices(tree, &leading, &panels)))
        })
    }
}

impl Default for TabsTransformer {
    fn default() -> Self {
        Self::new()
    }
}

/// Expand every tabs admonition in `tree`, discarding warnings.
///
/// # Errors
///
/// Same conditions as [`TabsTransformer::expand`].
pub fn expand_tabs(tree: &mut Tree) -> Result<(), TreeError> {
    TabsTransformer::new().expand(tree)
}

/// Scan an admonition's direct children: headings start panels, everything
/// else accumulates into the current panel (or into `leading` before the
/// first heading).
fn scan_panels(tree: &Tree, id: NodeId) -> (Vec<NodeId>, Vec<Panel>) {
    let mut leading = Vec::new();
    let mut panels: Vec<Panel> = Vec::new();
    for &child in tree.children(id) {
        if matches!(tree.element(child), Element::Heading { .. }) {
            panels.push(Panel {
                label: escape_html(&tree.plain_text(child)),
                content: Vec::new(),
            });
        } else if let Some(panel) = panels.last_mut() {
            panel.content.push(child);
        } else {
            leading.push(child);
        }
    }
    (leading, panels)
}

/// Build the replacement sequence: leading content, container open, label
/// buttons, then per panel its open marker, preserved content, and close
/// marker. Synthetic markers are final; content nodes move by reference but
/// stay pending, so a tabs admonition nested inside a panel is expanded in
/// the same pass. Termination holds because every expansion consumes one
/// admonition and emits none.
fn build_splices(tree: &mut Tree, leading: &[NodeId], panels: &[Panel]) -> Vec<Splice> {
    let content_len: usize = panels.iter().map(|p| p.content.len() + 2).sum();
    let mut out = Vec::with_capacity(leading.len() + panels.len() + content_len + 4);

    out.extend(leading.iter().copied().map(Splice::pending));
    out.push(marker(tree, CONTAINER_OPEN.to_owned()));

    out.push(marker(tree, LABELS_OPEN.to_owned()));
    for (idx, panel) in panels.iter().enumerate() {
        out.push(marker(tree, label_button(idx + 1, &panel.label)));
    }
    out.push(marker(tree, CLOSE.to_owned()));

    for (idx, panel) in panels.iter().enumerate() {
        out.push(marker(tree, panel_open(idx + 1)));
        out.extend(panel.content.iter().copied().map(Splice::pending));
        out.push(marker(tree, CLOSE.to_owned()));
    }

    out.push(marker(tree, CLOSE.to_owned()));
    out
}

fn marker(tree: &mut Tree, html: String) -> Splice {
    Splice::resolved(tree.orphan(Element::HtmlBlock { html }))
}

fn label_button(index: usize, escaped_label: &str) -> String {
    format!(r#"<button class="doc-tabs__label" data-tab="{index}">{escaped_label}</button>"#)
}

fn panel_open(index: usize) -> String {
    format!(r#"<div class="doc-tabs__panel" data-tab="{index}">"#)
}
