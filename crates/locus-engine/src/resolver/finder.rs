//! The finder chain
//!
//! Each finder implements one protocol for locating a module. They form a
//! closed set of variants consulted in a fixed order; the first match wins,
//! so builtin/frozen lookups shadow archives, and archives shadow generic
//! path delegation, for the same name.

use std::path::PathBuf;

use crate::resolver::context::ResolutionContext;
use crate::resolver::error::ResolveError;
use crate::resolver::spec::ModuleSpec;
use crate::resolver::{delegated, filesystem, namespace, zip};

/// One strategy for locating a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FinderKind {
    /// Builtins, frozen modules, package directories, and loose files.
    Filesystem,
    /// Modules stored inside zip/egg archives on the search path.
    ZipArchive,
    /// Delegation to the generic path-based resolution hook.
    DelegatedPath,
    /// Explicitly declared namespace packages.
    ExplicitNamespace,
}

/// Fixed consultation order. Load-bearing: reordering changes which record
/// wins when several finders could match the same name.
pub(crate) const FINDER_CHAIN: [FinderKind; 4] = [
    FinderKind::Filesystem,
    FinderKind::ZipArchive,
    FinderKind::DelegatedPath,
    FinderKind::ExplicitNamespace,
];

impl FinderKind {
    /// Attempt to resolve one component. `Ok(None)` is a normal decline;
    /// errors are terminal for the whole resolution.
    ///
    /// `base_path` is the walk's original search path; `submodule_path` the
    /// narrowed path for the current component, if any.
    pub(crate) fn find_module(
        self,
        ctx: &ResolutionContext,
        modname: &str,
        module_parts: &[String],
        processed: &[String],
        submodule_path: Option<&[PathBuf]>,
        base_path: &[PathBuf],
    ) -> Result<Option<ModuleSpec>, ResolveError> {
        match self {
            FinderKind::Filesystem => filesystem::find_module(ctx, modname, submodule_path),
            FinderKind::ZipArchive => zip::find_module(ctx, modname, module_parts, base_path),
            FinderKind::DelegatedPath => delegated::find_module(ctx, modname, submodule_path),
            FinderKind::ExplicitNamespace => namespace::find_module(ctx, modname, processed),
        }
    }

    /// Where the children of a module this finder matched live, if it is
    /// package-like.
    pub(crate) fn contribute_to_path(
        self,
        ctx: &ResolutionContext,
        spec: &ModuleSpec,
        processed: &[String],
    ) -> Option<Vec<PathBuf>> {
        match self {
            FinderKind::Filesystem => filesystem::contribute_to_path(ctx, spec, processed),
            // Nested archive lookups re-search the full path from the
            // archive root instead of narrowing.
            FinderKind::ZipArchive => None,
            FinderKind::DelegatedPath => delegated::contribute_to_path(spec),
            FinderKind::ExplicitNamespace => spec.submodule_search_locations.clone(),
        }
    }
}
