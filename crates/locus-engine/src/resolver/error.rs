//! Resolution errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during module resolution.
///
/// A finder declining to match is not an error; these variants are the only
/// caller-visible failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// No finder in the chain matched a component of the requested path.
    /// Carries the dotted path attempted up to and including the failing
    /// component.
    #[error("no module named {module}")]
    ModuleNotFound {
        /// Dotted path attempted so far.
        module: String,
    },

    /// An archive on the search path contains the top-level package of the
    /// requested path but not the full path. The archive owns the package
    /// root, so no other finder can supply the missing member.
    #[error("no module named {missing} in {}/{module}", .archive.display())]
    IncompleteArchivePackage {
        /// Dotted tail that could not be found inside the archive.
        missing: String,
        /// Path of the archive that claimed the top-level package.
        archive: PathBuf,
        /// Full dotted path that was being resolved.
        module: String,
    },
}
