//! Locus engine
//!
//! Locates Python modules on an explicit search path without importing
//! them, mimicking the interpreter's import resolution: builtin and frozen
//! shadowing, suffix priority, package directories, egg archives, and
//! namespace packages. A pure read path for static analysis tooling.
//!
//! # Example
//!
//! ```rust
//! use locus_engine::{ResolutionContext, Resolver};
//! use std::path::PathBuf;
//!
//! let ctx = ResolutionContext::new(vec![PathBuf::from("/lib")]);
//! let resolver = Resolver::new(&ctx);
//! match resolver.find_spec_dotted("pkg.sub", None) {
//!     Ok(spec) => println!("{} is {:?} at {:?}", spec.name, spec.module_type, spec.location),
//!     Err(err) => eprintln!("{err}"),
//! }
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

/// Resolver module: the finder chain, the walk, and the collaborator
/// registries it runs against.
pub mod resolver;

pub use resolver::{
    ArchiveCache, ArchiveCacheStats, ArchiveIndex, DelegatedModule, EmptyModuleRegistry,
    EmptyNativeRegistry, ImplicitNamespaceDelegate, ModuleRegistry, ModuleSpec, ModuleType,
    NativeModule, NativeRegistry, PathDelegate, ResolutionContext, ResolveError, Resolver,
    StaticModuleRegistry, StaticNativeRegistry,
};
