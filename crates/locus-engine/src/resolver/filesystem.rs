//! Filesystem finder
//!
//! Resolves builtin and frozen modules through the native registry, then
//! package directories and loose module files by scanning the search path
//! with a fixed suffix priority order.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::resolver::context::ResolutionContext;
use crate::resolver::error::ResolveError;
use crate::resolver::registry::NativeModule;
use crate::resolver::spec::{ModuleSpec, ModuleType};

#[cfg(windows)]
const NATIVE_EXTENSION_SUFFIX: &str = ".pyd";
#[cfg(not(windows))]
const NATIVE_EXTENSION_SUFFIX: &str = ".so";

/// Recognized module suffixes in match priority order: native extensions
/// first, then source, then bytecode.
const SUFFIXES: [(&str, ModuleType); 3] = [
    (NATIVE_EXTENSION_SUFFIX, ModuleType::Extension),
    (".py", ModuleType::Source),
    (".pyc", ModuleType::Compiled),
];

/// `__init__` suffixes that mark a directory as a package.
const INIT_SUFFIXES: [&str; 2] = [".py", ".pyc"];

/// How many leading bytes of an `__init__.py` are inspected for namespace
/// extension markers.
const MARKER_SCAN_LIMIT: u64 = 4096;

/// Whether `dir` carries an `__init__` file with a recognized suffix.
pub(crate) fn has_init_file(dir: &Path) -> bool {
    INIT_SUFFIXES
        .iter()
        .any(|suffix| dir.join(format!("__init__{suffix}")).is_file())
}

pub(crate) fn find_module(
    ctx: &ResolutionContext,
    modname: &str,
    submodule_path: Option<&[PathBuf]>,
) -> Result<Option<ModuleSpec>, ResolveError> {
    let search_path = match submodule_path {
        Some(path) => path,
        None => {
            // No narrowing and no caller path: builtins and frozen modules
            // shadow anything a directory scan could find.
            if let Some(native) = ctx.native().lookup(modname) {
                return Ok(Some(native_spec(modname, native)));
            }
            ctx.search_path()
        }
    };

    for entry in search_path {
        let package_directory = entry.join(modname);
        if has_init_file(&package_directory) {
            return Ok(Some(ModuleSpec {
                name: modname.to_string(),
                module_type: ModuleType::PackageDirectory,
                location: Some(package_directory),
                origin: None,
                submodule_search_locations: None,
            }));
        }
        for (suffix, module_type) in SUFFIXES {
            let file_path = entry.join(format!("{modname}{suffix}"));
            if file_path.is_file() {
                return Ok(Some(ModuleSpec {
                    name: modname.to_string(),
                    module_type,
                    location: Some(file_path),
                    origin: None,
                    submodule_search_locations: None,
                }));
            }
        }
    }
    Ok(None)
}

fn native_spec(modname: &str, native: NativeModule) -> ModuleSpec {
    match native {
        NativeModule::Builtin => ModuleSpec::new(modname, ModuleType::Builtin),
        NativeModule::Frozen { filename } => ModuleSpec {
            name: modname.to_string(),
            module_type: ModuleType::Frozen,
            location: filename,
            origin: None,
            submodule_search_locations: None,
        },
    }
}

pub(crate) fn contribute_to_path(
    ctx: &ResolutionContext,
    spec: &ModuleSpec,
    processed: &[String],
) -> Option<Vec<PathBuf>> {
    // Builtins and filename-less frozen modules contribute nothing.
    let location = spec.location.as_deref()?;

    if extends_namespace(location) {
        // The package invokes the path-extension machinery at import time,
        // so its submodules may live under any like-named directory chain on
        // the search path.
        let tail: PathBuf = processed.iter().collect();
        return Some(
            ctx.search_path()
                .iter()
                .map(|entry| entry.join(&tail))
                .filter(|candidate| candidate.is_dir())
                .collect(),
        );
    }

    if spec.name == "distutils"
        && ctx.distutils_workaround()
        && !ctx.is_ext_lib_location(location)
    {
        // Some environment managers install a distutils stub outside the
        // standard library that defers to the real package; trust whatever
        // the native machinery would actually import.
        if let Some(origin) = ctx.native().origin("distutils") {
            if let Some(parent) = origin.parent() {
                return Some(vec![parent.to_path_buf()]);
            }
        }
        return Some(vec![location.to_path_buf()]);
    }

    Some(vec![location.to_path_buf()])
}

/// Inspect the leading bytes of a package's `__init__.py` for evidence that
/// it extends its search path at import time (`pkgutil.extend_path` or
/// `pkg_resources.declare_namespace`). Read failures count as no evidence.
fn extends_namespace(location: &Path) -> bool {
    let file = match File::open(location.join("__init__.py")) {
        Ok(file) => file,
        Err(_) => return false,
    };
    let mut data = Vec::with_capacity(MARKER_SCAN_LIMIT as usize);
    if file.take(MARKER_SCAN_LIMIT).read_to_end(&mut data).is_err() {
        return false;
    }

    let extend_path = contains(&data, b"pkgutil") && contains(&data, b"extend_path");
    let declare_namespace =
        contains(&data, b"pkg_resources") && contains(&data, b"declare_namespace(__name__)");
    extend_path || declare_namespace
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|window| window == needle)
}
