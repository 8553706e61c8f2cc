//! Interned text for node and token contents.
//!
//! Identifiers such as package names, `err`, or `ctx` repeat many times in a
//! Go file. [`AtomTable`] stores each distinct string once and hands out
//! [`Atom`]s, cheap reference-counted handles that compare by pointer first.
//!
//! ```
//! use goscope_syntax::intern::AtomTable;
//!
//! let mut table = AtomTable::new();
//! let a = table.intern("fmt");
//! let b = table.intern("fmt");
//! assert!(a.ptr_eq(&b));
//! assert_eq!(table.len(), 1);
//! ```

use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Immutable shared text.
#[derive(Debug, Clone, Eq, PartialOrd, Ord)]
pub struct Atom(Arc<str>);

impl Atom {
    /// Wrap a string without deduplication.
    pub fn new(s: impl Into<Arc<str>>) -> Self {
        Self(s.into())
    }

    /// Get the string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether both atoms share one allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Atom {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.0 == other.0
    }
}

impl std::hash::Hash for Atom {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl PartialEq<str> for Atom {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Atom {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl Deref for Atom {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Atom {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Atom {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Default for Atom {
    fn default() -> Self {
        Self::new("")
    }
}

impl From<&str> for Atom {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Atom {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Atom {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Atom {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::new(s))
    }
}

/// Deduplicating store for [`Atom`]s.
#[derive(Debug, Default)]
pub struct AtomTable {
    atoms: HashSet<Arc<str>>,
}

impl AtomTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the shared atom for `s`, storing it on first sight.
    pub fn intern(&mut self, s: &str) -> Atom {
        if let Some(existing) = self.atoms.get(s) {
            return Atom(Arc::clone(existing));
        }
        let arc: Arc<str> = Arc::from(s);
        self.atoms.insert(Arc::clone(&arc));
        Atom(arc)
    }

    /// Number of distinct strings.
    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    /// Whether nothing was interned yet.
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }
}
