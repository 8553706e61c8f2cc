//! Typed views of declaration nodes.
//!
//! Each wrapper is a [`Node`] handle whose kind has been checked, so the
//! accessors below can assume the expected shape. Group wrappers expose their
//! spec lists; element wrappers are what the file views hand out.

use goscope_syntax::{Node, NodeKind, Span, Token};

use crate::imports::unquote;

macro_rules! syntax_wrapper {
    ($(#[$meta:meta])* $name:ident => $kind:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name(Node);

        impl $name {
            /// Wrap `node` if it has the matching kind.
            pub fn cast(node: &Node) -> Option<Self> {
                (node.kind() == NodeKind::$kind).then(|| Self(node.clone()))
            }

            /// The underlying syntax node.
            pub const fn syntax(&self) -> &Node {
                &self.0
            }

            /// Bound name, if the parser recorded one.
            pub fn name(&self) -> Option<&str> {
                self.0.name().map(Token::text)
            }

            /// Source span.
            pub fn span(&self) -> Span {
                self.0.span()
            }
        }
    };
}

syntax_wrapper! {
    /// `package name`
    PackageClause => PackageClause
}
syntax_wrapper! {
    /// An `import` keyword with one or more specs.
    ImportDecl => ImportDecl
}
syntax_wrapper! {
    /// One imported package.
    ImportSpec => ImportSpec
}
syntax_wrapper! {
    /// A function without a receiver.
    FunctionDecl => FunctionDecl
}
syntax_wrapper! {
    /// A function with a receiver.
    MethodDecl => MethodDecl
}
syntax_wrapper! {
    /// A `type` keyword with one or more specs.
    TypeDecl => TypeDecl
}
syntax_wrapper! {
    /// One declared type.
    TypeSpec => TypeSpec
}
syntax_wrapper! {
    /// A `var` keyword with one or more specs.
    VarDecl => VarDecl
}
syntax_wrapper! {
    /// One line of a var declaration, binding one or more names.
    VarSpec => VarSpec
}
syntax_wrapper! {
    /// One name bound by a var spec.
    VarDefinition => VarDefinition
}
syntax_wrapper! {
    /// A `const` keyword with one or more specs.
    ConstDecl => ConstDecl
}
syntax_wrapper! {
    /// One line of a const declaration, binding one or more names.
    ConstSpec => ConstSpec
}
syntax_wrapper! {
    /// One name bound by a const spec.
    ConstDefinition => ConstDefinition
}

fn typed_children<'a, T: 'a>(
    node: &'a Node,
    cast: fn(&Node) -> Option<T>,
) -> impl Iterator<Item = T> + 'a {
    node.children().iter().filter_map(cast)
}

impl PackageClause {
    /// The package identifier token.
    pub fn identifier(&self) -> Option<&Token> {
        self.0.name()
    }
}

impl ImportDecl {
    /// Specs in source order.
    pub fn specs(&self) -> impl Iterator<Item = ImportSpec> + '_ {
        typed_children(&self.0, ImportSpec::cast)
    }
}

impl ImportSpec {
    /// The explicit package alias (`x`, `.` or `_`), if any.
    pub fn identifier(&self) -> Option<&Token> {
        self.0.name()
    }

    /// The quoted path literal.
    pub fn import_string(&self) -> Option<&Node> {
        self.0.child_of_kind(NodeKind::ImportString)
    }

    /// The import path without its quotes; empty when the literal is missing.
    pub fn path(&self) -> &str {
        self.import_string().map_or("", |lit| unquote(lit.text()))
    }

    /// `import . "path"`
    pub fn is_dot(&self) -> bool {
        self.name() == Some(".")
    }

    /// `import _ "path"`, imported only for its side effects.
    pub fn is_blank(&self) -> bool {
        self.name() == Some("_")
    }
}

impl TypeDecl {
    /// Specs in source order.
    pub fn specs(&self) -> impl Iterator<Item = TypeSpec> + '_ {
        typed_children(&self.0, TypeSpec::cast)
    }
}

impl VarDecl {
    /// Specs in source order.
    pub fn specs(&self) -> impl Iterator<Item = VarSpec> + '_ {
        typed_children(&self.0, VarSpec::cast)
    }
}

impl VarSpec {
    /// Bound names in source order.
    pub fn definitions(&self) -> impl Iterator<Item = VarDefinition> + '_ {
        typed_children(&self.0, VarDefinition::cast)
    }
}

impl ConstDecl {
    /// Specs in source order.
    pub fn specs(&self) -> impl Iterator<Item = ConstSpec> + '_ {
        typed_children(&self.0, ConstSpec::cast)
    }
}

impl ConstSpec {
    /// Bound names in source order.
    pub fn definitions(&self) -> impl Iterator<Item = ConstDefinition> + '_ {
        typed_children(&self.0, ConstDefinition::cast)
    }
}

/// A top-level declaration, classified by node kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    /// `package p`
    Package(PackageClause),
    /// `import ...`
    Imports(ImportDecl),
    /// `func f()`
    Function(FunctionDecl),
    /// `func (r T) m()`
    Method(MethodDecl),
    /// `type ...`
    Types(TypeDecl),
    /// `var ...`
    Vars(VarDecl),
    /// `const ...`
    Consts(ConstDecl),
}

impl Declaration {
    /// Classify a top-level node; `None` for anything that is not a declaration.
    pub fn classify(node: &Node) -> Option<Self> {
        let wrap = || node.clone();
        match node.kind() {
            NodeKind::PackageClause => Some(Self::Package(PackageClause(wrap()))),
            NodeKind::ImportDecl => Some(Self::Imports(ImportDecl(wrap()))),
            NodeKind::FunctionDecl => Some(Self::Function(FunctionDecl(wrap()))),
            NodeKind::MethodDecl => Some(Self::Method(MethodDecl(wrap()))),
            NodeKind::TypeDecl => Some(Self::Types(TypeDecl(wrap()))),
            NodeKind::VarDecl => Some(Self::Vars(VarDecl(wrap()))),
            NodeKind::ConstDecl => Some(Self::Consts(ConstDecl(wrap()))),
            NodeKind::File
            | NodeKind::ImportSpec
            | NodeKind::ImportString
            | NodeKind::TypeSpec
            | NodeKind::VarSpec
            | NodeKind::VarDefinition
            | NodeKind::ConstSpec
            | NodeKind::ConstDefinition
            | NodeKind::Placeholder
            | NodeKind::Other => None,
        }
    }

    /// The declaration node.
    pub const fn syntax(&self) -> &Node {
        match self {
            Self::Package(d) => d.syntax(),
            Self::Imports(d) => d.syntax(),
            Self::Function(d) => d.syntax(),
            Self::Method(d) => d.syntax(),
            Self::Types(d) => d.syntax(),
            Self::Vars(d) => d.syntax(),
            Self::Consts(d) => d.syntax(),
        }
    }
}
