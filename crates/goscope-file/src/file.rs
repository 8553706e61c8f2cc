//! A Go file with memoized declaration views.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use goscope_syntax::Node;
use parking_lot::RwLock;

use crate::classify;
use crate::decl::{
    ConstDefinition, FunctionDecl, ImportSpec, MethodDecl, PackageClause, TypeSpec, VarDefinition,
};
use crate::imports::{self, ImportMap};
use crate::outline::{self, OutlineItem};
use crate::slot::ViewSlot;
use crate::snapshot::{ModificationStamp, Snapshot};

/// Name of the function a Go program starts in.
pub const ENTRY_POINT_NAME: &str = "main";

/// The memoized views of a [`GoFile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    /// The package clause.
    Package,
    /// Import specs.
    Imports,
    /// Functions without receiver.
    Functions,
    /// Methods.
    Methods,
    /// Type specs.
    Types,
    /// Var definitions.
    Vars,
    /// Const definitions.
    Consts,
}

impl ViewKind {
    /// Every view, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Package,
        Self::Imports,
        Self::Functions,
        Self::Methods,
        Self::Types,
        Self::Vars,
        Self::Consts,
    ];

    /// Lowercase view name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Package => "package",
            Self::Imports => "imports",
            Self::Functions => "functions",
            Self::Methods => "methods",
            Self::Types => "types",
            Self::Vars => "vars",
            Self::Consts => "consts",
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed Go file and the declaration views derived from it.
///
/// Views are computed on first access and cached together with the
/// [`ModificationStamp`] they were computed under. Replacing the root
/// advances the stamp, which makes every cached view stale; each view is
/// recomputed the next time it is read. All methods take `&self` and the
/// type is `Send + Sync`, so a file can be shared between reader threads.
pub struct GoFile {
    state: RwLock<Snapshot>,
    package: ViewSlot<Option<PackageClause>>,
    imports: ViewSlot<Vec<ImportSpec>>,
    functions: ViewSlot<Vec<FunctionDecl>>,
    methods: ViewSlot<Vec<MethodDecl>>,
    types: ViewSlot<Vec<TypeSpec>>,
    vars: ViewSlot<Vec<VarDefinition>>,
    consts: ViewSlot<Vec<ConstDefinition>>,
    computations: AtomicUsize,
}

impl GoFile {
    /// Create a file around a parsed root.
    pub fn new(root: Node) -> Self {
        Self {
            state: RwLock::new(Snapshot::new(ModificationStamp::INITIAL, root)),
            package: ViewSlot::new(),
            imports: ViewSlot::new(),
            functions: ViewSlot::new(),
            methods: ViewSlot::new(),
            types: ViewSlot::new(),
            vars: ViewSlot::new(),
            consts: ViewSlot::new(),
            computations: AtomicUsize::new(0),
        }
    }

    /// The current root and stamp, read together.
    pub fn snapshot(&self) -> Snapshot {
        self.state.read().clone()
    }

    /// The current root.
    pub fn root(&self) -> Node {
        self.state.read().root().clone()
    }

    /// The current modification stamp.
    pub fn modification_stamp(&self) -> ModificationStamp {
        self.state.read().stamp()
    }

    /// Install a new root, invalidating every view. Returns the new stamp.
    pub fn replace_root(&self, root: Node) -> ModificationStamp {
        let stamp = self.state.write().advance(root);
        tracing::debug!(%stamp, "file root replaced");
        stamp
    }

    /// How many view computations this file has performed so far.
    pub fn computations(&self) -> usize {
        self.computations.load(Ordering::Relaxed)
    }

    /// Whether `kind` holds a value for the current stamp.
    pub fn is_view_current(&self, kind: ViewKind) -> bool {
        let current = Some(self.modification_stamp());
        let cached = match kind {
            ViewKind::Package => self.package.cached_stamp(),
            ViewKind::Imports => self.imports.cached_stamp(),
            ViewKind::Functions => self.functions.cached_stamp(),
            ViewKind::Methods => self.methods.cached_stamp(),
            ViewKind::Types => self.types.cached_stamp(),
            ViewKind::Vars => self.vars.cached_stamp(),
            ViewKind::Consts => self.consts.cached_stamp(),
        };
        cached == current
    }

    fn view<T>(&self, kind: ViewKind, slot: &ViewSlot<T>, compute: fn(&Node) -> T) -> Arc<T> {
        let snapshot = self.snapshot();
        slot.get_or_compute(snapshot.stamp(), || {
            self.computations.fetch_add(1, Ordering::Relaxed);
            tracing::trace!(view = %kind, stamp = %snapshot.stamp(), "computing view");
            compute(snapshot.root())
        })
    }

    /// The package clause, if the file has one.
    pub fn package(&self) -> Option<PackageClause> {
        let clause = self.view(ViewKind::Package, &self.package, classify::package_clause);
        (*clause).clone()
    }

    /// Import specs in source order.
    pub fn imports(&self) -> Arc<Vec<ImportSpec>> {
        self.view(ViewKind::Imports, &self.imports, classify::imports)
    }

    /// Functions without a receiver, in source order.
    pub fn functions(&self) -> Arc<Vec<FunctionDecl>> {
        self.view(ViewKind::Functions, &self.functions, classify::functions)
    }

    /// Methods in source order.
    pub fn methods(&self) -> Arc<Vec<MethodDecl>> {
        self.view(ViewKind::Methods, &self.methods, classify::methods)
    }

    /// Type specs in source order.
    pub fn types(&self) -> Arc<Vec<TypeSpec>> {
        self.view(ViewKind::Types, &self.types, classify::types)
    }

    /// Var definitions in source order.
    pub fn vars(&self) -> Arc<Vec<VarDefinition>> {
        self.view(ViewKind::Vars, &self.vars, classify::vars)
    }

    /// Const definitions in source order.
    pub fn consts(&self) -> Arc<Vec<ConstDefinition>> {
        self.view(ViewKind::Consts, &self.consts, classify::consts)
    }

    /// Name-to-import lookup built from the imports view.
    pub fn import_map(&self) -> ImportMap {
        imports::import_map(self.imports().iter())
    }

    /// The trimmed package identifier.
    pub fn package_name(&self) -> Option<String> {
        let clause = self.package()?;
        clause.identifier().map(|ident| ident.text().trim().to_owned())
    }

    /// The first function named exactly [`ENTRY_POINT_NAME`].
    pub fn find_main_function(&self) -> Option<FunctionDecl> {
        self.functions()
            .iter()
            .find(|func| func.name() == Some(ENTRY_POINT_NAME))
            .cloned()
    }

    /// Every declaration of the file ordered by position.
    pub fn outline(&self) -> Vec<OutlineItem> {
        outline::build(self)
    }
}

impl fmt::Debug for GoFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoFile")
            .field("stamp", &self.modification_stamp())
            .field("computations", &self.computations())
            .finish_non_exhaustive()
    }
}
