//! Resolution context
//!
//! Bundles the default search path, the collaborator registries, and the
//! archive cache handle so resolution runs against explicit state instead of
//! process globals. Fresh contexts still share the process-wide archive
//! cache; tests and concurrent callers can inject an isolated one.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::resolver::archive::ArchiveCache;
use crate::resolver::registry::{
    path_starts_with, EmptyModuleRegistry, EmptyNativeRegistry, ImplicitNamespaceDelegate,
    ModuleRegistry, NativeRegistry, PathDelegate,
};

/// Explicit state a resolution call runs against.
#[derive(Clone)]
pub struct ResolutionContext {
    search_path: Vec<PathBuf>,
    ext_lib_dirs: Vec<PathBuf>,
    native: Arc<dyn NativeRegistry>,
    modules: Arc<dyn ModuleRegistry>,
    delegate: Arc<dyn PathDelegate>,
    archives: Arc<ArchiveCache>,
    distutils_workaround: bool,
}

impl ResolutionContext {
    /// Create a context with the given default search path, empty
    /// registries, the implicit-namespace path delegate, and the shared
    /// process-wide archive cache.
    pub fn new(search_path: Vec<PathBuf>) -> Self {
        Self {
            search_path,
            ext_lib_dirs: Vec::new(),
            native: Arc::new(EmptyNativeRegistry),
            modules: Arc::new(EmptyModuleRegistry),
            delegate: Arc::new(ImplicitNamespaceDelegate),
            archives: ArchiveCache::global(),
            distutils_workaround: true,
        }
    }

    /// Set the extension-library directories used by the distutils
    /// location check.
    pub fn with_ext_lib_dirs(mut self, dirs: Vec<PathBuf>) -> Self {
        self.ext_lib_dirs = dirs;
        self
    }

    /// Inject a native builtin/frozen registry.
    pub fn with_native_registry(mut self, registry: Arc<dyn NativeRegistry>) -> Self {
        self.native = registry;
        self
    }

    /// Inject a live-module/namespace registry.
    pub fn with_module_registry(mut self, registry: Arc<dyn ModuleRegistry>) -> Self {
        self.modules = registry;
        self
    }

    /// Inject a generic path-based resolution hook.
    pub fn with_path_delegate(mut self, delegate: Arc<dyn PathDelegate>) -> Self {
        self.delegate = delegate;
        self
    }

    /// Inject an archive cache (e.g. an isolated one for tests).
    pub fn with_archive_cache(mut self, cache: Arc<ArchiveCache>) -> Self {
        self.archives = cache;
        self
    }

    /// Enable or disable the distutils re-resolution workaround.
    pub fn with_distutils_workaround(mut self, enabled: bool) -> Self {
        self.distutils_workaround = enabled;
        self
    }

    /// Default search path consulted when no narrowing is in effect.
    pub fn search_path(&self) -> &[PathBuf] {
        &self.search_path
    }

    /// Known extension-library directories.
    pub fn ext_lib_dirs(&self) -> &[PathBuf] {
        &self.ext_lib_dirs
    }

    pub(crate) fn native(&self) -> &dyn NativeRegistry {
        self.native.as_ref()
    }

    pub(crate) fn modules(&self) -> &dyn ModuleRegistry {
        self.modules.as_ref()
    }

    pub(crate) fn delegate(&self) -> &dyn PathDelegate {
        self.delegate.as_ref()
    }

    pub(crate) fn archives(&self) -> &ArchiveCache {
        self.archives.as_ref()
    }

    pub(crate) fn distutils_workaround(&self) -> bool {
        self.distutils_workaround
    }

    /// Whether `location` lives under any known extension-library directory
    /// (case-insensitive prefix match).
    pub(crate) fn is_ext_lib_location(&self, location: &Path) -> bool {
        self.ext_lib_dirs
            .iter()
            .any(|dir| path_starts_with(location, dir))
    }
}

impl Default for ResolutionContext {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl std::fmt::Debug for ResolutionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolutionContext")
            .field("search_path", &self.search_path)
            .field("ext_lib_dirs", &self.ext_lib_dirs)
            .field("distutils_workaround", &self.distutils_workaround)
            .finish_non_exhaustive()
    }
}
