//! Flat, position-ordered listing of a file's declarations.
//!
//! This is what an editor shows in its outline or document-symbol view.
//! Every entry comes from the cached views, so building an outline of an
//! unchanged file never walks the tree again.

use goscope_syntax::Span;
use serde::Serialize;

use crate::file::GoFile;

/// Kind of an outline entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutlineKind {
    /// The package clause.
    Package,
    /// An import spec.
    Import,
    /// A function.
    Function,
    /// A method.
    Method,
    /// A type spec.
    Type,
    /// A var definition.
    Var,
    /// A const definition.
    Const,
}

/// One declaration in the outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineItem {
    /// What was declared.
    pub kind: OutlineKind,
    /// Declared name; for unaliased imports, the import path.
    pub name: String,
    /// Where it was declared.
    pub span: Span,
}

impl OutlineItem {
    fn new(kind: OutlineKind, name: &str, span: Span) -> Self {
        Self {
            kind,
            name: name.to_owned(),
            span,
        }
    }
}

pub(crate) fn build(file: &GoFile) -> Vec<OutlineItem> {
    let mut items = Vec::new();

    if let Some(clause) = file.package() {
        if let Some(name) = clause.name() {
            items.push(OutlineItem::new(OutlineKind::Package, name, clause.span()));
        }
    }
    for spec in file.imports().iter() {
        let name = spec.name().unwrap_or_else(|| spec.path());
        items.push(OutlineItem::new(OutlineKind::Import, name, spec.span()));
    }

    macro_rules! push_named {
        ($view:expr, $kind:expr) => {
            for decl in $view.iter() {
                if let Some(name) = decl.name() {
                    items.push(OutlineItem::new($kind, name, decl.span()));
                }
            }
        };
    }
    push_named!(file.functions(), OutlineKind::Function);
    push_named!(file.methods(), OutlineKind::Method);
    push_named!(file.types(), OutlineKind::Type);
    push_named!(file.vars(), OutlineKind::Var);
    push_named!(file.consts(), OutlineKind::Const);

    items.sort_by_key(|item| item.span.start);
    items
}
