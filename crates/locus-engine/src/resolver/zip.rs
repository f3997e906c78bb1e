//! Zip archive finder
//!
//! Resolves modules stored inside zip/egg archives. The full requested path
//! is searched from the archive root each time, so the finder works with the
//! original path components and the walk's base search path rather than the
//! narrowed one.

use std::path::{Path, PathBuf};

use crate::resolver::context::ResolutionContext;
use crate::resolver::error::ResolveError;
use crate::resolver::spec::{ModuleSpec, ModuleType};

pub(crate) fn find_module(
    ctx: &ResolutionContext,
    modname: &str,
    module_parts: &[String],
    base_path: &[PathBuf],
) -> Result<Option<ModuleSpec>, ResolveError> {
    let archives = ctx.archives().ensure(base_path);

    for archive in &archives {
        if !archive.contains_module(&module_parts[0]) {
            continue;
        }
        let relpath = module_parts.join("/");
        if !archive.contains_module(&relpath) {
            // The archive owns the package root; a missing member means the
            // module cannot exist anywhere, so this does not fall through to
            // the next finder.
            return Err(ResolveError::IncompleteArchivePackage {
                missing: module_parts[1..].join("."),
                archive: archive.path().to_path_buf(),
                module: module_parts.join("."),
            });
        }

        let member: PathBuf = module_parts.iter().collect();
        return Ok(Some(ModuleSpec {
            name: modname.to_string(),
            module_type: ModuleType::ZipModule,
            location: Some(absolute(archive.path()).join(member)),
            origin: Some("egg".to_string()),
            submodule_search_locations: Some(vec![archive.path().to_path_buf()]),
        }));
    }
    Ok(None)
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
