//! Node kinds of the Go syntax tree.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of node kinds the tree model distinguishes.
///
/// Only the top-level declaration structure of a Go file is modeled in
/// detail. Everything else (statements, expressions, types, comments) is
/// [`NodeKind::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// The whole file.
    File,
    /// `package name`
    PackageClause,
    /// `import ...` or `import ( ... )`
    ImportDecl,
    /// One `[alias] "path"` entry of an import declaration.
    ImportSpec,
    /// The quoted path literal of an import spec.
    ImportString,
    /// `func name(...)`
    FunctionDecl,
    /// `func (recv T) name(...)`
    MethodDecl,
    /// `type ...` or `type ( ... )`
    TypeDecl,
    /// One `Name T` entry of a type declaration.
    TypeSpec,
    /// `var ...` or `var ( ... )`
    VarDecl,
    /// One `a, b T = x, y` line of a var declaration.
    VarSpec,
    /// A single name bound by a var spec.
    VarDefinition,
    /// `const ...` or `const ( ... )`
    ConstDecl,
    /// One line of a const declaration.
    ConstSpec,
    /// A single name bound by a const spec.
    ConstDefinition,
    /// Synthetic error-recovery container with no meaning of its own.
    Placeholder,
    /// Anything not listed above.
    Other,
}

impl NodeKind {
    /// Whether this is the error-recovery container kind.
    #[must_use]
    pub const fn is_placeholder(self) -> bool {
        matches!(self, Self::Placeholder)
    }

    /// Whether nodes of this kind group several specs under one keyword.
    #[must_use]
    pub const fn is_declaration_group(self) -> bool {
        matches!(
            self,
            Self::ImportDecl | Self::TypeDecl | Self::VarDecl | Self::ConstDecl
        )
    }

    /// Short lowercase label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::PackageClause => "package clause",
            Self::ImportDecl => "import declaration",
            Self::ImportSpec => "import spec",
            Self::ImportString => "import string",
            Self::FunctionDecl => "function declaration",
            Self::MethodDecl => "method declaration",
            Self::TypeDecl => "type declaration",
            Self::TypeSpec => "type spec",
            Self::VarDecl => "var declaration",
            Self::VarSpec => "var spec",
            Self::VarDefinition => "var definition",
            Self::ConstDecl => "const declaration",
            Self::ConstSpec => "const spec",
            Self::ConstDefinition => "const definition",
            Self::Placeholder => "placeholder",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
