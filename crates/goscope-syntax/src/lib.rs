//! Syntax tree model for Go source files.
//!
//! This crate provides the immutable tree that the `goscope-file` query layer
//! reads. A parser produces it through [`TreeBuilder`] (or the [`Node`]
//! constructors directly); after that the tree is never modified and can be
//! shared across threads.
//!
//! # Features
//!
//! - A closed [`NodeKind`] enumeration covering Go's top-level declarations
//! - Error-recovery [`NodeKind::Placeholder`] containers
//! - Placeholder-transparent traversal in [`walk`]
//! - Interned identifier text ([`intern`])
//!
//! # Example
//!
//! ```
//! use goscope_syntax::{walk, Node, NodeKind, Span, Token};
//!
//! let main = Node::leaf(NodeKind::FunctionDecl, Span::new(10, 24), "func main() {}")
//!     .with_name(Token::new("main", Span::new(15, 19)));
//! let file = Node::branch(NodeKind::File, Span::new(0, 24), "", vec![main]);
//!
//! let first = walk::transparent_children(&file).next();
//! assert_eq!(first.and_then(Node::name).map(Token::text), Some("main"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod error;
pub mod intern;
mod kind;
mod node;
mod span;
pub mod walk;

pub use builder::TreeBuilder;
pub use error::TreeError;
pub use intern::{Atom, AtomTable};
pub use kind::NodeKind;
pub use node::{Node, Token};
pub use span::Span;
