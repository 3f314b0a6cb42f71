//! Error types for tree operations.

use crate::Element;

/// Error from tree construction, copy, rewrite, or query operations.
///
/// All variants are raised synchronously at the call that triggers them;
/// nothing is retried internally.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum TreeError {
    /// A proposed parent/child element combination breaks the
    /// kind-compatibility contract (illegal child kind, cycle, or
    /// double-parenting).
    #[error("structural violation: {0}")]
    StructuralViolation(String),

    /// An accessor was invoked against a node of the wrong element kind.
    #[error("expected a {expected} node, found {found}")]
    TypeMismatch {
        /// Kind the accessor requires.
        expected: &'static str,
        /// Kind that was actually found.
        found: &'static str,
    },

    /// An argument outside its legal domain.
    #[error("dimension {dim} is out of range (expected 1 or 2)")]
    RangeError {
        /// The rejected dimension argument.
        dim: usize,
    },
}

impl TreeError {
    pub(crate) fn illegal_child(parent: &Element, child: &Element) -> Self {
        TreeError::StructuralViolation(format!(
            "{} is not a legal child of {}",
            child.kind_name(),
            parent.kind_name()
        ))
    }

    pub(crate) fn cycle(child: &Element, parent: &Element) -> Self {
        TreeError::StructuralViolation(format!(
            "attaching {} under {} would create a cycle",
            child.kind_name(),
            parent.kind_name()
        ))
    }

    pub(crate) fn already_attached(child: &Element) -> Self {
        TreeError::StructuralViolation(format!(
            "{} already has a parent; detach it first",
            child.kind_name()
        ))
    }

    pub(crate) fn type_mismatch(expected: &'static str, found: &Element) -> Self {
        TreeError::TypeMismatch {
            expected,
            found: found.kind_name(),
        }
    }
}
