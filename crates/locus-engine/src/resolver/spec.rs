//! Module spec types
//!
//! A [`ModuleSpec`] describes where and how a module can be loaded without
//! actually loading it: its name, storage classification, location, and
//! (for packages) where its submodules live.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Classification of how a resolved module is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleType {
    /// Compiled into the interpreter itself (e.g. `sys`).
    Builtin,
    /// Native extension module (`.so` / `.pyd`).
    Extension,
    /// Package directory containing an `__init__` file.
    PackageDirectory,
    /// Compiled code resource.
    CodeResource,
    /// Compiled bytecode file (`.pyc`).
    Compiled,
    /// Module whose bytecode is embedded in the interpreter.
    Frozen,
    /// Opaque resource module.
    Resource,
    /// Plain source file (`.py`).
    Source,
    /// Module stored inside a zip archive (egg).
    ZipModule,
    /// Namespace package assembled from one or more directories.
    Namespace,
}

/// A resolved module description.
///
/// Records are plain values: equality compares every field, and callers that
/// need a variation construct a new record rather than mutating a shared one.
/// Read-only sharing across threads is safe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleSpec {
    /// Fully- or partially-qualified module name at the point of resolution.
    pub name: String,
    /// How the module is stored.
    #[serde(rename = "type")]
    pub module_type: ModuleType,
    /// Filesystem path or archive-member pseudo-path. `None` for builtins
    /// and frozen modules with no recorded filename.
    pub location: Option<PathBuf>,
    /// Free-form provenance tag (`"egg"`, `"namespace"`).
    pub origin: Option<String>,
    /// Paths to search for this module's children. Present only when the
    /// module may contain submodules (package directory or namespace).
    pub submodule_search_locations: Option<Vec<PathBuf>>,
}

impl ModuleSpec {
    /// Create a spec with the given name and type and no location, origin,
    /// or submodule search locations.
    pub fn new(name: impl Into<String>, module_type: ModuleType) -> Self {
        Self {
            name: name.into(),
            module_type,
            location: None,
            origin: None,
            submodule_search_locations: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn specs_compare_by_value() {
        let a = ModuleSpec {
            name: "os".to_string(),
            module_type: ModuleType::Source,
            location: Some(PathBuf::from("/lib/os.py")),
            origin: None,
            submodule_search_locations: None,
        };
        let b = a.clone();
        assert_eq!(a, b);
    }

    #[test]
    fn builtin_spec_has_no_location() {
        let spec = ModuleSpec::new("sys", ModuleType::Builtin);
        assert_eq!(spec.location, None);
        assert_eq!(spec.submodule_search_locations, None);
    }
}
