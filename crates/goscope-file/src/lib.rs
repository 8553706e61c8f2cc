//! Memoized declaration views over a Go syntax tree.
//!
//! A [`GoFile`] wraps the root produced by a parser and answers questions
//! about its top-level declarations:
//!
//! - the package clause and package name
//! - imports, and the name each import is referred to by
//! - functions (without receiver) and methods
//! - type specs, var definitions and const definitions
//! - the program entry point, `func main`
//!
//! Each view is computed once per [`ModificationStamp`] and then served from
//! a cache; replacing the root advances the stamp and the views are
//! recomputed lazily on their next read. Error-recovery placeholder nodes in
//! the tree are looked through, so declarations salvaged by the parser are
//! reported as if the placeholder were not there.
//!
//! # Example
//!
//! ```
//! use goscope_file::GoFile;
//! use goscope_syntax::{Node, NodeKind, Span, Token};
//!
//! let main = Node::leaf(NodeKind::FunctionDecl, Span::new(14, 28), "func main() {}")
//!     .with_name(Token::new("main", Span::new(19, 23)));
//! let clause = Node::leaf(NodeKind::PackageClause, Span::new(0, 12), "package main")
//!     .with_name(Token::new("main", Span::new(8, 12)));
//! let file = GoFile::new(Node::branch(NodeKind::File, Span::new(0, 28), "", vec![clause, main]));
//!
//! assert_eq!(file.package_name().as_deref(), Some("main"));
//! assert!(file.find_main_function().is_some());
//! assert_eq!(file.computations(), 2);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod classify;
pub mod decl;
mod file;
pub mod imports;
mod outline;
mod slot;
mod snapshot;
mod workspace;

pub use decl::{
    ConstDecl, ConstDefinition, ConstSpec, Declaration, FunctionDecl, ImportDecl, ImportSpec,
    MethodDecl, PackageClause, TypeDecl, TypeSpec, VarDecl, VarDefinition, VarSpec,
};
pub use file::{GoFile, ViewKind, ENTRY_POINT_NAME};
pub use imports::{ImportMap, ImportTarget};
pub use outline::{OutlineItem, OutlineKind};
pub use slot::ViewSlot;
pub use snapshot::{ModificationStamp, Snapshot};
pub use workspace::Workspace;
