//! Raw declaration lists of a file root.
//!
//! Each function walks the placeholder-transparent children of the root once
//! and collects one kind of declaration in source order, flattening grouped
//! declarations into their specs (and var/const specs into their
//! definitions). These are the uncached computations behind the
//! [`GoFile`](crate::GoFile) views.

use std::ops::ControlFlow;

use goscope_syntax::walk::{transparent_children, walk};
use goscope_syntax::Node;

use crate::decl::{
    ConstDefinition, Declaration, FunctionDecl, ImportSpec, MethodDecl, PackageClause, TypeSpec,
    VarDefinition,
};

fn collect<T>(root: &Node, mut each: impl FnMut(Declaration, &mut Vec<T>)) -> Vec<T> {
    let mut out = Vec::new();
    for decl in transparent_children(root).filter_map(Declaration::classify) {
        each(decl, &mut out);
    }
    out
}

/// The first package clause.
pub fn package_clause(root: &Node) -> Option<PackageClause> {
    match walk(root, |node| match PackageClause::cast(node) {
        Some(clause) => ControlFlow::Break(clause),
        None => ControlFlow::Continue(()),
    }) {
        ControlFlow::Break(clause) => Some(clause),
        ControlFlow::Continue(()) => None,
    }
}

/// All import specs, group by group.
pub fn imports(root: &Node) -> Vec<ImportSpec> {
    collect(root, |decl, out| {
        if let Declaration::Imports(group) = decl {
            out.extend(group.specs());
        }
    })
}

/// Functions without a receiver.
pub fn functions(root: &Node) -> Vec<FunctionDecl> {
    collect(root, |decl, out| {
        if let Declaration::Function(func) = decl {
            out.push(func);
        }
    })
}

/// Functions with a receiver.
pub fn methods(root: &Node) -> Vec<MethodDecl> {
    collect(root, |decl, out| {
        if let Declaration::Method(method) = decl {
            out.push(method);
        }
    })
}

/// All type specs, group by group.
pub fn types(root: &Node) -> Vec<TypeSpec> {
    collect(root, |decl, out| {
        if let Declaration::Types(group) = decl {
            out.extend(group.specs());
        }
    })
}

/// Every name bound by a var declaration.
pub fn vars(root: &Node) -> Vec<VarDefinition> {
    collect(root, |decl, out| {
        if let Declaration::Vars(group) = decl {
            for spec in group.specs() {
                out.extend(spec.definitions());
            }
        }
    })
}

/// Every name bound by a const declaration.
pub fn consts(root: &Node) -> Vec<ConstDefinition> {
    collect(root, |decl, out| {
        if let Declaration::Consts(group) = decl {
            for spec in group.specs() {
                out.extend(spec.definitions());
            }
        }
    })
}
