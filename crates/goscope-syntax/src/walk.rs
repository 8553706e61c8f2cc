//! Placeholder-transparent traversal.
//!
//! Error recovery wraps whatever it could salvage in [`NodeKind::Placeholder`]
//! nodes. Consumers that look at the children of a node almost never care
//! about that wrapper, so the functions here splice placeholders out: their
//! children are yielded in the position the placeholder occupied, at any
//! nesting depth.
//!
//! ```
//! use goscope_syntax::{walk, Node, NodeKind, Span};
//!
//! let func = Node::leaf(NodeKind::FunctionDecl, Span::default(), "func f() {}");
//! let wrapped = Node::branch(NodeKind::Placeholder, Span::default(), "", vec![func]);
//! let file = Node::branch(NodeKind::File, Span::default(), "", vec![wrapped]);
//!
//! let kinds: Vec<_> = walk::transparent_children(&file).map(Node::kind).collect();
//! assert_eq!(kinds, [NodeKind::FunctionDecl]);
//! ```
//!
//! [`NodeKind::Placeholder`]: crate::NodeKind::Placeholder

use std::ops::ControlFlow;
use std::slice;

use crate::node::Node;

/// Iterator over the children of a node with placeholders spliced out.
///
/// Uses an explicit stack, so nesting depth is bounded by memory only.
#[derive(Debug, Clone)]
pub struct TransparentChildren<'a> {
    stack: Vec<slice::Iter<'a, Node>>,
}

impl<'a> Iterator for TransparentChildren<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<&'a Node> {
        loop {
            let level = self.stack.last_mut()?;
            match level.next() {
                Some(child) if child.is_placeholder() => self.stack.push(child.children().iter()),
                Some(child) => return Some(child),
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

impl std::iter::FusedIterator for TransparentChildren<'_> {}

/// Children of `node` in document order, never yielding a placeholder.
pub fn transparent_children(node: &Node) -> TransparentChildren<'_> {
    TransparentChildren {
        stack: vec![node.children().iter()],
    }
}

/// Call `visit` on each transparent child of `node` in document order.
///
/// A `Break` from `visit` ends the walk at once, skipping the remaining
/// siblings at every level, and is returned to the caller.
pub fn walk<'a, B>(
    node: &'a Node,
    mut visit: impl FnMut(&'a Node) -> ControlFlow<B>,
) -> ControlFlow<B> {
    for child in transparent_children(node) {
        visit(child)?;
    }
    ControlFlow::Continue(())
}
