//! Closed set of element kinds for document tree nodes.
//!
//! Every node in a [`Tree`](crate::Tree) carries exactly one [`Element`]
//! payload. The set is fixed: transformers match on variants directly rather
//! than going through dynamic dispatch. Structural legality (which kinds may
//! appear as direct children of which) is encoded in
//! [`Element::allows_child`] and enforced by the tree at every attach, copy,
//! and rewrite boundary.

/// Element payload for a single tree node.
///
/// Each variant carries the fields specific to its kind; nodes with no
/// kind-specific data are unit variants.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Element {
    /// Document root.
    Document,
    /// Section heading with a level (1-6).
    Heading {
        /// Heading level, 1-based.
        level: u8,
    },
    /// Paragraph of inline content.
    Paragraph,
    /// Inline text run.
    Text {
        /// The literal text.
        text: String,
    },
    /// Emphasized (italic) inline span.
    Emphasis,
    /// Strong (bold) inline span.
    Strong,
    /// Inline code span.
    Code {
        /// The literal code text.
        code: String,
    },
    /// Fenced code block.
    CodeBlock {
        /// Info string (language tag) from the fence.
        info: String,
        /// Verbatim code text.
        code: String,
    },
    /// Admonition block (note, warning, tabs, ...).
    Admonition {
        /// Admonition category tag, e.g. `"note"` or `"tabs"`.
        category: String,
        /// Display title.
        title: String,
    },
    /// Block quote.
    BlockQuote,
    /// Raw HTML block passed through to the renderer.
    HtmlBlock {
        /// The raw HTML fragment.
        html: String,
    },
    /// Ordered or unordered list.
    List {
        /// `true` for ordered lists.
        ordered: bool,
    },
    /// Single list item.
    ListItem,
    /// Table container.
    Table,
    /// Table header section.
    TableHeader,
    /// Table body section.
    TableBody,
    /// Single table row.
    TableRow,
    /// Single table cell.
    TableCell,
}

impl Element {
    /// Static kind name, used in error messages.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Element::Document => "Document",
            Element::Heading { .. } => "Heading",
            Element::Paragraph => "Paragraph",
            Element::Text { .. } => "Text",
            Element::Emphasis => "Emphasis",
            Element::Strong => "Strong",
            Element::Code { .. } => "Code",
            Element::CodeBlock { .. } => "CodeBlock",
            Element::Admonition { .. } => "Admonition",
            Element::BlockQuote => "BlockQuote",
            Element::HtmlBlock { .. } => "HtmlBlock",
            Element::List { .. } => "List",
            Element::ListItem => "ListItem",
            Element::Table => "Table",
            Element::TableHeader => "TableHeader",
            Element::TableBody => "TableBody",
            Element::TableRow => "TableRow",
            Element::TableCell => "TableCell",
        }
    }

    /// Whether this kind is an inline (phrasing) element.
    #[must_use]
    pub fn is_inline(&self) -> bool {
        matches!(
            self,
            Element::Text { .. } | Element::Emphasis | Element::Strong | Element::Code { .. }
        )
    }

    /// Whether this kind is a block-level element, i.e. legal as a direct
    /// child of block containers such as [`Element::Document`].
    #[must_use]
    pub fn is_block(&self) -> bool {
        matches!(
            self,
            Element::Heading { .. }
                | Element::Paragraph
                | Element::CodeBlock { .. }
                | Element::Admonition { .. }
                | Element::BlockQuote
                | Element::HtmlBlock { .. }
                | Element::List { .. }
                | Element::Table
        )
    }

    /// Whether this kind carries its content in its own fields and never has
    /// children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        matches!(
            self,
            Element::Text { .. }
                | Element::Code { .. }
                | Element::CodeBlock { .. }
                | Element::HtmlBlock { .. }
        )
    }

    /// Whether `child` is a legal direct child of this kind.
    ///
    /// This is the single source of truth for structural legality; the tree
    /// consults it on every attach, copy, and rewrite splice.
    #[must_use]
    pub fn allows_child(&self, child: &Element) -> bool {
        match self {
            Element::Document
            | Element::BlockQuote
            | Element::Admonition { .. }
            | Element::ListItem => child.is_block(),
            Element::Heading { .. } | Element::Paragraph | Element::Emphasis | Element::Strong => {
                child.is_inline()
            }
            Element::TableCell => child.is_inline(),
            Element::List { .. } => matches!(child, Element::ListItem),
            Element::Table => matches!(child, Element::TableHeader | Element::TableBody),
            Element::TableHeader | Element::TableBody => matches!(child, Element::TableRow),
            Element::TableRow => matches!(child, Element::TableCell),
            Element::Text { .. }
            | Element::Code { .. }
            | Element::CodeBlock { .. }
            | Element::HtmlBlock { .. } => false,
        }
    }
}
