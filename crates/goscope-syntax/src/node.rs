//! Immutable, reference-counted syntax nodes.
//!
//! A [`Node`] is a cheap handle: cloning it bumps a reference count and never
//! copies the subtree. Once a node is built nothing can change it, so a tree
//! may be shared freely between threads.

use std::fmt;
use std::sync::Arc;

use crate::intern::Atom;
use crate::kind::NodeKind;
use crate::span::Span;

/// A name-carrying token attached to a node (function name, import alias, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    text: Atom,
    span: Span,
}

impl Token {
    /// Create a token.
    pub fn new(text: impl Into<Atom>, span: Span) -> Self {
        Self {
            text: text.into(),
            span,
        }
    }

    /// Raw token text.
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Shared handle to the token text.
    pub fn atom(&self) -> &Atom {
        &self.text
    }

    /// Source span of the token.
    pub const fn span(&self) -> Span {
        self.span
    }
}

/// A node of the syntax tree.
#[derive(Clone, PartialEq, Eq)]
pub struct Node(Arc<NodeData>);

#[derive(Clone, PartialEq, Eq)]
struct NodeData {
    kind: NodeKind,
    span: Span,
    text: Atom,
    name: Option<Token>,
    children: Vec<Node>,
}

// Malformed input can nest placeholders arbitrarily deep; the default
// recursive drop would follow that nesting on the call stack.
impl Drop for NodeData {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(node) = pending.pop() {
            if let Ok(mut data) = Arc::try_unwrap(node.0) {
                pending.append(&mut data.children);
            }
        }
    }
}

impl Node {
    /// Create a node without children.
    pub fn leaf(kind: NodeKind, span: Span, text: impl Into<Atom>) -> Self {
        Self::branch(kind, span, text, Vec::new())
    }

    /// Create a node with the given children, in source order.
    pub fn branch(kind: NodeKind, span: Span, text: impl Into<Atom>, children: Vec<Self>) -> Self {
        Self(Arc::new(NodeData {
            kind,
            span,
            text: text.into(),
            name: None,
            children,
        }))
    }

    /// Attach a name token, returning the updated node.
    #[must_use]
    pub fn with_name(self, name: Token) -> Self {
        let mut data = Arc::try_unwrap(self.0).unwrap_or_else(|shared| (*shared).clone());
        data.name = Some(name);
        Self(Arc::new(data))
    }

    /// The kind tag.
    pub fn kind(&self) -> NodeKind {
        self.0.kind
    }

    /// Byte range covered by this node.
    pub fn span(&self) -> Span {
        self.0.span
    }

    /// Raw source text of this node.
    pub fn text(&self) -> &str {
        self.0.text.as_str()
    }

    /// The name token, for nodes that bind a name.
    pub fn name(&self) -> Option<&Token> {
        self.0.name.as_ref()
    }

    /// Direct children in source order.
    pub fn children(&self) -> &[Self] {
        &self.0.children
    }

    /// Whether this node is an error-recovery placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.0.kind.is_placeholder()
    }

    /// Direct children of the given kind, in source order.
    pub fn children_of_kind(&self, kind: NodeKind) -> impl Iterator<Item = &Self> + '_ {
        self.0.children.iter().filter(move |c| c.kind() == kind)
    }

    /// First direct child of the given kind.
    pub fn child_of_kind(&self, kind: NodeKind) -> Option<&Self> {
        self.children_of_kind(kind).next()
    }

    /// Whether both handles point at the same node.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Node");
        s.field("kind", &self.0.kind)
            .field("span", &self.0.span)
            .field("text", &self.0.text.as_str());
        if let Some(name) = &self.0.name {
            s.field("name", &name.text());
        }
        if !self.0.children.is_empty() {
            s.field("children", &self.0.children);
        }
        s.finish()
    }
}
