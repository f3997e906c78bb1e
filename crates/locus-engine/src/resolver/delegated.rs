//! Delegating path finder
//!
//! Falls back to the injected generic path-based resolution hook, which is
//! how implicit namespace packages (and anything else the host's machinery
//! covers) are found. The hook's result is normalized into a [`ModuleSpec`].

use std::path::{Path, PathBuf};

use crate::resolver::context::ResolutionContext;
use crate::resolver::error::ResolveError;
use crate::resolver::spec::{ModuleSpec, ModuleType};

pub(crate) fn find_module(
    ctx: &ResolutionContext,
    modname: &str,
    submodule_path: Option<&[PathBuf]>,
) -> Result<Option<ModuleSpec>, ResolveError> {
    let search_path = submodule_path.unwrap_or_else(|| ctx.search_path());
    let Some(found) = ctx.delegate().find_module(modname, search_path) else {
        return Ok(None);
    };

    // An absent origin marker is treated the same as the explicit
    // "namespace" sentinel. Hosts that report no origin metadata at all are
    // indistinguishable from hosts reporting a namespace package, and both
    // get the namespace treatment here.
    let is_namespace = matches!(found.origin.as_deref(), None | Some("namespace"));

    let submodule_search_locations = if found.submodule_search_locations.is_empty() {
        None
    } else {
        Some(found.submodule_search_locations)
    };

    let spec = if is_namespace {
        ModuleSpec {
            name: found.name,
            module_type: ModuleType::Namespace,
            location: None,
            origin: found.origin,
            submodule_search_locations,
        }
    } else {
        // Known to be present: the namespace check above covered `None`.
        let origin = found.origin.unwrap_or_default();
        let location = PathBuf::from(&origin);
        ModuleSpec {
            name: found.name,
            module_type: classify(&location),
            location: Some(location),
            origin: Some(origin),
            submodule_search_locations,
        }
    };
    Ok(Some(spec))
}

pub(crate) fn contribute_to_path(spec: &ModuleSpec) -> Option<Vec<PathBuf>> {
    if spec.module_type == ModuleType::Namespace {
        spec.submodule_search_locations.clone()
    } else {
        None
    }
}

/// Map a concrete delegated origin onto a storage classification by its
/// suffix, defaulting to source.
fn classify(location: &Path) -> ModuleType {
    match location.extension().and_then(|ext| ext.to_str()) {
        Some("pyc") => ModuleType::Compiled,
        Some("so") | Some("pyd") => ModuleType::Extension,
        _ => ModuleType::Source,
    }
}
