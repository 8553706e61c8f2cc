//! Import alias resolution.
//!
//! Maps the name a file uses to refer to an imported package to what was
//! imported. An explicit alias maps to its [`ImportSpec`]; an unaliased import
//! is known by the last segment of its path and maps to that path.
//!
//! Later imports overwrite earlier ones with the same key, so two unaliased
//! imports ending in the same segment leave only the second one visible.

use std::collections::HashMap;

use crate::decl::ImportSpec;

/// What a name in the import map refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportTarget {
    /// An import with an explicit alias.
    Spec(ImportSpec),
    /// The unquoted path of an unaliased import.
    Path(String),
}

impl ImportTarget {
    /// The spec, for aliased imports.
    pub const fn as_spec(&self) -> Option<&ImportSpec> {
        match self {
            Self::Spec(spec) => Some(spec),
            Self::Path(_) => None,
        }
    }

    /// The path, for unaliased imports.
    pub fn as_path(&self) -> Option<&str> {
        match self {
            Self::Spec(_) => None,
            Self::Path(path) => Some(path),
        }
    }
}

/// Bound name to import target.
pub type ImportMap = HashMap<String, ImportTarget>;

/// Strip one pair of matching surrounding quotes (`"`, `'` or `` ` ``).
pub fn unquote(literal: &str) -> &str {
    let mut chars = literal.chars();
    match (chars.next(), chars.next_back()) {
        (Some(open), Some(close)) if open == close && matches!(open, '"' | '\'' | '`') => {
            chars.as_str()
        }
        _ => literal,
    }
}

/// The name an unaliased import of `path` is referred to by: its last
/// non-empty `/`-separated segment.
pub fn default_import_name(path: &str) -> Option<&str> {
    path.rsplit('/').find(|segment| !segment.is_empty())
}

/// Build the alias map for `specs`, in order.
pub fn import_map<'a>(specs: impl IntoIterator<Item = &'a ImportSpec>) -> ImportMap {
    let mut map = ImportMap::new();
    for spec in specs {
        if let Some(identifier) = spec.identifier() {
            map.insert(identifier.text().to_owned(), ImportTarget::Spec(spec.clone()));
            continue;
        }
        let path = spec.path();
        if let Some(key) = default_import_name(path) {
            map.insert(key.to_owned(), ImportTarget::Path(path.to_owned()));
        }
    }
    map
}
