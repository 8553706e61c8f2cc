//! Modification stamps and tree snapshots.
//!
//! Every [`GoFile`](crate::GoFile) carries a stamp that advances each time
//! its tree is replaced. A [`Snapshot`] pairs a root with the stamp it was
//! published under, so anything computed from that root can be tagged with
//! exactly the right stamp.

use std::fmt;

use goscope_syntax::Node;
use serde::Serialize;

/// Opaque, monotonically increasing modification counter of one file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ModificationStamp(u64);

impl ModificationStamp {
    /// The stamp of a freshly created file.
    pub const INITIAL: Self = Self(0);

    /// The stamp following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Raw counter value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ModificationStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A root node together with the stamp it was published under.
#[derive(Debug, Clone)]
pub struct Snapshot {
    stamp: ModificationStamp,
    root: Node,
}

impl Snapshot {
    pub(crate) const fn new(stamp: ModificationStamp, root: Node) -> Self {
        Self { stamp, root }
    }

    /// The stamp at snapshot time.
    pub const fn stamp(&self) -> ModificationStamp {
        self.stamp
    }

    /// The root at snapshot time.
    pub const fn root(&self) -> &Node {
        &self.root
    }

    pub(crate) fn advance(&mut self, root: Node) -> ModificationStamp {
        self.stamp = self.stamp.next();
        self.root = root;
        self.stamp
    }
}
