//! Tree construction errors.

use thiserror::Error;

use crate::Span;

/// Misuse of [`TreeBuilder`](crate::TreeBuilder).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// A span reaches past the end of the source.
    #[error("span {span} is out of bounds for source of length {len}")]
    OutOfBounds {
        /// The offending span.
        span: Span,
        /// Source length in bytes.
        len: usize,
    },
    /// A span splits a UTF-8 sequence.
    #[error("span {0} does not fall on char boundaries")]
    NotCharBoundary(Span),
    /// A span ends before it starts.
    #[error("span {0} ends before it starts")]
    InvertedSpan(Span),
    /// A child node reaches outside the node being finished.
    #[error("child span {child} lies outside parent span {parent}")]
    ChildOutsideParent {
        /// Span of the offending child.
        child: Span,
        /// Span of the parent.
        parent: Span,
    },
    /// An operation needed an open node and there was none.
    #[error("no open node to {0}")]
    NoOpenNode(&'static str),
    /// `finish` was called with nodes still open.
    #[error("{0} node(s) left unclosed")]
    UnclosedNodes(usize),
    /// `finish` was called before any node was built.
    #[error("no root node was built")]
    Empty,
    /// More than one top-level node was built.
    #[error("expected a single root node, found {0}")]
    MultipleRoots(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let cases = [
            (
                TreeError::OutOfBounds {
                    span: Span::new(2, 9),
                    len: 4,
                },
                "span 2..9 is out of bounds for source of length 4",
            ),
            (
                TreeError::NotCharBoundary(Span::new(1, 2)),
                "span 1..2 does not fall on char boundaries",
            ),
            (
                TreeError::InvertedSpan(Span::new(5, 3)),
                "span 5..3 ends before it starts",
            ),
            (
                TreeError::ChildOutsideParent {
                    child: Span::new(0, 6),
                    parent: Span::new(2, 5),
                },
                "child span 0..6 lies outside parent span 2..5",
            ),
            (TreeError::NoOpenNode("finish"), "no open node to finish"),
            (TreeError::UnclosedNodes(2), "2 node(s) left unclosed"),
            (TreeError::Empty, "no root node was built"),
            (
                TreeError::MultipleRoots(3),
                "expected a single root node, found 3",
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(err.to_string(), expected);
        }
    }

    #[test]
    fn test_is_error_trait() {
        let err = TreeError::Empty;
        let _: &dyn std::error::Error = &err;
    }
}
