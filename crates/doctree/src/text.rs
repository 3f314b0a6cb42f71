//! Plain-text extraction and HTML escaping.

use crate::{Element, NodeId, Tree};

impl Tree {
    /// Concatenated plain text of the subtree at `id`, in document order.
    ///
    /// Collects [`Element::Text`] runs and inline [`Element::Code`] spans;
    /// everything else contributes only through its children.
    #[must_use]
    pub fn plain_text(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        match self.element(id) {
            Element::Text { text } => out.push_str(text),
            Element::Code { code } => out.push_str(code),
            _ => {
                for &child in self.children(id) {
                    self.collect_text(child, out);
                }
            }
        }
    }
}

/// Escape HTML special characters for safe embedding in markup.
///
/// Escapes `&`, `<`, `>`, `"`, and `'` exactly once each; already escaped
/// input is escaped again (`&lt;` becomes `&amp;lt;`).
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}
