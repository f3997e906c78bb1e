//! Explicit namespace finder
//!
//! Resolves namespace packages that were explicitly declared against the
//! process (rather than assembled implicitly from the search path). A name
//! matches only when it is both declared as a namespace and present in the
//! live module table.

use crate::resolver::context::ResolutionContext;
use crate::resolver::error::ResolveError;
use crate::resolver::spec::{ModuleSpec, ModuleType};
use std::path::PathBuf;

pub(crate) fn find_module(
    ctx: &ResolutionContext,
    modname: &str,
    processed: &[String],
) -> Result<Option<ModuleSpec>, ResolveError> {
    let qualified = if processed.is_empty() {
        modname.to_string()
    } else {
        format!("{}.{}", processed.join("."), modname)
    };

    if !ctx.modules().is_namespace(&qualified) {
        return Ok(None);
    }
    let Some(path) = ctx.modules().module_path(&qualified) else {
        return Ok(None);
    };

    Ok(Some(ModuleSpec {
        name: qualified,
        module_type: ModuleType::Namespace,
        location: Some(PathBuf::new()),
        origin: Some("namespace".to_string()),
        submodule_search_locations: Some(path),
    }))
}
