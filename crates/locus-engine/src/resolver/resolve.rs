//! Resolution walk
//!
//! Walks a dotted module path component by component. Each component is
//! resolved through the finder chain; the finder that matched is then asked
//! where the component's children live, and that answer narrows the search
//! path for the next component.

use std::path::PathBuf;

use crate::resolver::context::ResolutionContext;
use crate::resolver::error::ResolveError;
use crate::resolver::finder::{FinderKind, FINDER_CHAIN};
use crate::resolver::spec::{ModuleSpec, ModuleType};

/// Resolves dotted module paths against a [`ResolutionContext`].
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    ctx: &'a ResolutionContext,
}

impl<'a> Resolver<'a> {
    /// Create a resolver over `ctx`.
    pub fn new(ctx: &'a ResolutionContext) -> Self {
        Self { ctx }
    }

    /// Find the spec for a module given its split dotted name.
    ///
    /// `modpath` holds one entry per dot-separated segment and must not be
    /// empty. Callers encoding relative-import levels pass leading empty
    /// segments; they are treated as opaque components, not interpreted
    /// here. `path` overrides the context's search path for the walk.
    pub fn find_spec<S: AsRef<str>>(
        &self,
        modpath: &[S],
        path: Option<&[PathBuf]>,
    ) -> Result<ModuleSpec, ResolveError> {
        assert!(!modpath.is_empty(), "modpath must not be empty");
        let module_parts: Vec<String> =
            modpath.iter().map(|part| part.as_ref().to_string()).collect();
        let base_path = path.unwrap_or_else(|| self.ctx.search_path());

        let mut submodule_path: Option<Vec<PathBuf>> = None;
        let mut processed: Vec<String> = Vec::with_capacity(module_parts.len());
        let mut result: Option<ModuleSpec> = None;

        for modname in &module_parts {
            let narrowed = submodule_path.as_deref().or(path);
            let (kind, mut spec) =
                self.find_with_chain(modname, &module_parts, &processed, narrowed, base_path)?;
            processed.push(modname.clone());

            // An empty contribution behaves like no contribution: the next
            // component falls back to the caller path or the defaults.
            submodule_path = kind
                .contribute_to_path(self.ctx, &spec, &processed)
                .filter(|contributed| !contributed.is_empty());
            if spec.module_type == ModuleType::PackageDirectory {
                spec.submodule_search_locations = submodule_path.clone();
            }
            result = Some(spec);
        }

        Ok(result.expect("walked at least one component"))
    }

    /// Convenience wrapper: split `dotted` on `.` and resolve it.
    pub fn find_spec_dotted(
        &self,
        dotted: &str,
        path: Option<&[PathBuf]>,
    ) -> Result<ModuleSpec, ResolveError> {
        let parts: Vec<&str> = dotted.split('.').collect();
        self.find_spec(&parts, path)
    }

    fn find_with_chain(
        &self,
        modname: &str,
        module_parts: &[String],
        processed: &[String],
        submodule_path: Option<&[PathBuf]>,
        base_path: &[PathBuf],
    ) -> Result<(FinderKind, ModuleSpec), ResolveError> {
        for kind in FINDER_CHAIN {
            if let Some(spec) = kind.find_module(
                self.ctx,
                modname,
                module_parts,
                processed,
                submodule_path,
                base_path,
            )? {
                return Ok((kind, spec));
            }
        }

        let mut attempted = processed.join(".");
        if !attempted.is_empty() {
            attempted.push('.');
        }
        attempted.push_str(modname);
        Err(ResolveError::ModuleNotFound { module: attempted })
    }
}
