//! Collaborator registries consulted during resolution
//!
//! Resolution never executes module code. These interfaces expose read-only
//! views of interpreter state (the builtin/frozen tables, the live module
//! table, declared namespace packages, and the host's generic path-based
//! finder) so the resolver can mimic the interpreter without touching any
//! process globals. Callers inject implementations through
//! [`ResolutionContext`](crate::resolver::ResolutionContext); the `Static*`
//! implementations below cover embedding and testing.

use rustc_hash::{FxHashMap, FxHashSet};
use std::path::{Path, PathBuf};

use crate::resolver::filesystem;

/// How the native import machinery satisfies a module name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NativeModule {
    /// Satisfied by the builtin loader.
    Builtin,
    /// Satisfied by the frozen loader.
    Frozen {
        /// Source filename recorded for the frozen module, if any.
        filename: Option<PathBuf>,
    },
}

/// Read-only view of the interpreter's builtin and frozen module tables.
pub trait NativeRegistry: Send + Sync {
    /// Query whether `modname` is satisfied by the builtin or frozen loader.
    ///
    /// `None` means the native machinery cannot resolve the name; the caller
    /// falls through to filesystem scanning rather than failing.
    fn lookup(&self, modname: &str) -> Option<NativeModule>;

    /// Location of the initializer file the native machinery would import
    /// for `modname`, when the name resolves to an ordinary package.
    fn origin(&self, modname: &str) -> Option<PathBuf> {
        let _ = modname;
        None
    }
}

/// Read-only view of the live module table and declared namespace packages.
pub trait ModuleRegistry: Send + Sync {
    /// Whether `modname` has been declared as a namespace package.
    fn is_namespace(&self, modname: &str) -> bool;

    /// Search path carried by the live module table entry for `modname`,
    /// if the module is currently present in the table.
    fn module_path(&self, modname: &str) -> Option<Vec<PathBuf>>;
}

/// Result of delegating a lookup to the host's generic path-based finder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelegatedModule {
    /// Name reported by the delegate.
    pub name: String,
    /// Origin marker. `None` and the literal `"namespace"` both mark a
    /// namespace package; older hosts report the sentinel string, newer
    /// ones report nothing at all.
    pub origin: Option<String>,
    /// Paths contributing to the module, when it is a package.
    pub submodule_search_locations: Vec<PathBuf>,
}

/// Generic path-based resolution hook.
pub trait PathDelegate: Send + Sync {
    /// Resolve `modname` against `search_path`, or decline.
    fn find_module(&self, modname: &str, search_path: &[PathBuf]) -> Option<DelegatedModule>;
}

/// [`NativeRegistry`] with no builtin or frozen modules. The context default.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmptyNativeRegistry;

impl NativeRegistry for EmptyNativeRegistry {
    fn lookup(&self, _modname: &str) -> Option<NativeModule> {
        None
    }
}

/// [`ModuleRegistry`] with no declared namespaces or live modules. The
/// context default.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmptyModuleRegistry;

impl ModuleRegistry for EmptyModuleRegistry {
    fn is_namespace(&self, _modname: &str) -> bool {
        false
    }

    fn module_path(&self, _modname: &str) -> Option<Vec<PathBuf>> {
        None
    }
}

/// In-memory [`NativeRegistry`] populated up front.
///
/// Embedders list the builtin and frozen module names of the interpreter
/// they are analyzing; the resolver then reproduces its shadowing behavior
/// without a live interpreter.
#[derive(Debug, Default, Clone)]
pub struct StaticNativeRegistry {
    builtins: FxHashSet<String>,
    frozen: FxHashMap<String, Option<PathBuf>>,
    origins: FxHashMap<String, PathBuf>,
}

impl StaticNativeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name` as satisfied by the builtin loader.
    pub fn add_builtin(&mut self, name: impl Into<String>) {
        self.builtins.insert(name.into());
    }

    /// Register `name` as satisfied by the frozen loader, with its recorded
    /// source filename if any.
    pub fn add_frozen(&mut self, name: impl Into<String>, filename: Option<PathBuf>) {
        self.frozen.insert(name.into(), filename);
    }

    /// Record the initializer file the native machinery would import for
    /// `name`.
    pub fn set_origin(&mut self, name: impl Into<String>, origin: impl Into<PathBuf>) {
        self.origins.insert(name.into(), origin.into());
    }
}

impl NativeRegistry for StaticNativeRegistry {
    fn lookup(&self, modname: &str) -> Option<NativeModule> {
        if self.builtins.contains(modname) {
            return Some(NativeModule::Builtin);
        }
        self.frozen.get(modname).map(|filename| NativeModule::Frozen {
            filename: filename.clone(),
        })
    }

    fn origin(&self, modname: &str) -> Option<PathBuf> {
        self.origins.get(modname).cloned()
    }
}

/// In-memory [`ModuleRegistry`] populated up front.
#[derive(Debug, Default, Clone)]
pub struct StaticModuleRegistry {
    namespaces: FxHashSet<String>,
    modules: FxHashMap<String, Vec<PathBuf>>,
}

impl StaticModuleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `name` as a namespace package without a live module entry.
    pub fn add_namespace(&mut self, name: impl Into<String>) {
        self.namespaces.insert(name.into());
    }

    /// Record a live module table entry for `name` carrying `path`.
    pub fn add_module(&mut self, name: impl Into<String>, path: Vec<PathBuf>) {
        self.modules.insert(name.into(), path);
    }

    /// Declare `name` as a namespace package that is also live, carrying
    /// `path` as its search path.
    pub fn declare_namespace(&mut self, name: impl Into<String>, path: Vec<PathBuf>) {
        let name = name.into();
        self.namespaces.insert(name.clone());
        self.modules.insert(name, path);
    }
}

impl ModuleRegistry for StaticModuleRegistry {
    fn is_namespace(&self, modname: &str) -> bool {
        self.namespaces.contains(modname)
    }

    fn module_path(&self, modname: &str) -> Option<Vec<PathBuf>> {
        self.modules.get(modname).cloned()
    }
}

/// Default [`PathDelegate`]: resolves implicit namespace packages.
///
/// Collects every same-named subdirectory on the search path that carries no
/// `__init__` file (a namespace "portion"). Reports no origin marker, the
/// same as a host that found a namespace package.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImplicitNamespaceDelegate;

impl PathDelegate for ImplicitNamespaceDelegate {
    fn find_module(&self, modname: &str, search_path: &[PathBuf]) -> Option<DelegatedModule> {
        if modname.is_empty() {
            return None;
        }
        let portions: Vec<PathBuf> = search_path
            .iter()
            .map(|entry| entry.join(modname))
            .filter(|candidate| candidate.is_dir() && !filesystem::has_init_file(candidate))
            .collect();
        if portions.is_empty() {
            return None;
        }
        Some(DelegatedModule {
            name: modname.to_string(),
            origin: None,
            submodule_search_locations: portions,
        })
    }
}

/// Case-insensitive check whether `location` lives under `dir`.
pub(crate) fn path_starts_with(location: &Path, dir: &Path) -> bool {
    let location = location.to_string_lossy().to_lowercase();
    let dir = dir.to_string_lossy().to_lowercase();
    location.starts_with(&dir)
}
