//! Building trees over source text.
//!
//! A parser drives [`TreeBuilder`] with byte offsets; node text is sliced
//! from the source and name tokens are interned. The builder validates every
//! span, so a finished tree never refers to text outside its source.
//!
//! ```
//! use goscope_syntax::{NodeKind, Span, TreeBuilder};
//!
//! let source = "package main";
//! let mut b = TreeBuilder::new(source);
//! b.start_node(NodeKind::File, 0)?;
//! b.start_node(NodeKind::PackageClause, 0)?;
//! b.name(Span::new(8, 12))?;
//! b.finish_node(12)?;
//! b.finish_node(source.len())?;
//! let root = b.finish()?;
//!
//! let clause = &root.children()[0];
//! assert_eq!(clause.text(), "package main");
//! assert_eq!(clause.name().map(|t| t.text()), Some("main"));
//! # Ok::<(), goscope_syntax::TreeError>(())
//! ```

use crate::error::TreeError;
use crate::intern::{Atom, AtomTable};
use crate::kind::NodeKind;
use crate::node::{Node, Token};
use crate::span::Span;

#[derive(Debug)]
struct Frame {
    kind: NodeKind,
    start: usize,
    name: Option<Token>,
    children: Vec<Node>,
}

/// Incremental builder for a single syntax tree.
#[derive(Debug)]
pub struct TreeBuilder<'src> {
    source: &'src str,
    atoms: AtomTable,
    open: Vec<Frame>,
    roots: Vec<Node>,
}

impl<'src> TreeBuilder<'src> {
    /// Create a builder over `source`.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            atoms: AtomTable::new(),
            open: Vec::new(),
            roots: Vec::new(),
        }
    }

    /// Open a node starting at byte offset `start`.
    pub fn start_node(&mut self, kind: NodeKind, start: usize) -> Result<(), TreeError> {
        self.check(Span::new(start, start))?;
        self.open.push(Frame {
            kind,
            start,
            name: None,
            children: Vec::new(),
        });
        Ok(())
    }

    /// Set the name token of the innermost open node.
    pub fn name(&mut self, span: Span) -> Result<(), TreeError> {
        let token = self.token(span)?;
        let frame = self.open.last_mut().ok_or(TreeError::NoOpenNode("name"))?;
        frame.name = Some(token);
        Ok(())
    }

    /// Add a childless node.
    pub fn leaf(&mut self, kind: NodeKind, span: Span) -> Result<(), TreeError> {
        let text = self.slice(span)?;
        self.attach(Node::leaf(kind, span, text));
        Ok(())
    }

    /// Add a childless node whose own text is also its name, such as a var
    /// or const definition.
    pub fn named_leaf(&mut self, kind: NodeKind, span: Span) -> Result<(), TreeError> {
        let token = self.token(span)?;
        let node = Node::leaf(kind, span, token.atom().clone()).with_name(token);
        self.attach(node);
        Ok(())
    }

    /// Close the innermost open node at byte offset `end`.
    ///
    /// Every child must lie inside the finished node's span; on error the
    /// node stays open.
    pub fn finish_node(&mut self, end: usize) -> Result<(), TreeError> {
        let frame = self.open.pop().ok_or(TreeError::NoOpenNode("finish"))?;
        let span = Span::new(frame.start, end);
        let text = match self.slice(span) {
            Ok(text) => text,
            Err(err) => {
                self.open.push(frame);
                return Err(err);
            }
        };
        let stray = frame
            .children
            .iter()
            .map(Node::span)
            .find(|child| !span.contains(child));
        if let Some(child) = stray {
            self.open.push(frame);
            return Err(TreeError::ChildOutsideParent {
                child,
                parent: span,
            });
        }
        let mut node = Node::branch(frame.kind, span, text, frame.children);
        if let Some(name) = frame.name {
            node = node.with_name(name);
        }
        self.attach(node);
        Ok(())
    }

    /// Number of nodes currently open.
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    /// Return the single root node.
    pub fn finish(mut self) -> Result<Node, TreeError> {
        if !self.open.is_empty() {
            return Err(TreeError::UnclosedNodes(self.open.len()));
        }
        match self.roots.len() {
            0 => Err(TreeError::Empty),
            1 => self.roots.pop().ok_or(TreeError::Empty),
            n => Err(TreeError::MultipleRoots(n)),
        }
    }

    fn attach(&mut self, node: Node) {
        match self.open.last_mut() {
            Some(parent) => parent.children.push(node),
            None => self.roots.push(node),
        }
    }

    fn token(&mut self, span: Span) -> Result<Token, TreeError> {
        let text = self.check(span)?;
        Ok(Token::new(self.atoms.intern(text), span))
    }

    fn slice(&self, span: Span) -> Result<Atom, TreeError> {
        self.check(span).map(Atom::from)
    }

    fn check(&self, span: Span) -> Result<&'src str, TreeError> {
        if span.start > span.end {
            return Err(TreeError::InvertedSpan(span));
        }
        if span.end > self.source.len() {
            return Err(TreeError::OutOfBounds {
                span,
                len: self.source.len(),
            });
        }
        span.text(self.source)
            .ok_or(TreeError::NotCharBoundary(span))
    }
}
