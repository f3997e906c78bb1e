//! Module spec resolution
//!
//! Resolves a dotted module path (e.g. `a.b.c`) to a typed description of
//! where and how that module can be loaded (builtin, frozen, loose file,
//! package directory, zip archive member, or namespace package) without
//! loading it:
//! - A fixed chain of finders, one per lookup protocol
//! - Component-by-component walking with search-path narrowing
//! - A process-wide archive index cache
//! - Injected registries standing in for interpreter state

mod archive;
mod context;
mod delegated;
mod error;
mod filesystem;
mod finder;
mod namespace;
mod registry;
mod resolve;
mod spec;
mod zip;

pub use archive::{ArchiveCache, ArchiveCacheStats, ArchiveIndex};
pub use context::ResolutionContext;
pub use error::ResolveError;
pub use registry::{
    DelegatedModule, EmptyModuleRegistry, EmptyNativeRegistry, ImplicitNamespaceDelegate,
    ModuleRegistry, NativeModule, NativeRegistry, PathDelegate, StaticModuleRegistry,
    StaticNativeRegistry,
};
pub use resolve::Resolver;
pub use spec::{ModuleSpec, ModuleType};
