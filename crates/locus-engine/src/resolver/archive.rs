//! Zip archive index cache
//!
//! Search-path entries that point at zip/egg archives are opened once per
//! process and their member lists indexed. Paths that turn out not to be
//! archives are remembered as negative entries so they are never retried.
//! The cache only grows.

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use rustc_hash::FxHashSet;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Member suffixes under which a slash-joined module path can exist inside
/// an archive: as a loose module file or as a package directory.
const MEMBER_SUFFIXES: [&str; 4] = [".py", ".pyc", "/__init__.py", "/__init__.pyc"];

/// Indexed member list of one zip archive on the search path.
#[derive(Debug)]
pub struct ArchiveIndex {
    path: PathBuf,
    members: FxHashSet<String>,
}

impl ArchiveIndex {
    /// Open `path` as a zip archive and index its member names.
    ///
    /// Returns `None` when the path cannot be opened or is not a valid
    /// archive; the caller records that as a negative cache entry.
    fn open(path: &Path) -> Option<Self> {
        let file = File::open(path).ok()?;
        let archive = zip::ZipArchive::new(file).ok()?;
        let members = archive
            .file_names()
            .map(|name| name.trim_end_matches('/').to_string())
            .collect();
        Some(Self {
            path: path.to_path_buf(),
            members,
        })
    }

    /// Filesystem path of the archive.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the archive contains a module at `relpath` (slash-joined,
    /// without suffix), either as a loose file or as a package directory.
    pub fn contains_module(&self, relpath: &str) -> bool {
        if relpath.is_empty() {
            return false;
        }
        MEMBER_SUFFIXES
            .iter()
            .any(|suffix| self.members.contains(&format!("{relpath}{suffix}")))
    }
}

/// Snapshot of cache occupancy.
#[derive(Debug, Clone, Copy)]
pub struct ArchiveCacheStats {
    /// Paths indexed as valid archives.
    pub archives: usize,
    /// Paths probed and rejected as not-an-archive.
    pub rejected: usize,
}

#[derive(Debug, Default)]
struct CacheInner {
    /// Successfully indexed archives, in first-seen order.
    archives: Vec<Arc<ArchiveIndex>>,
    /// Every path probed so far, including rejected ones.
    probed: FxHashSet<PathBuf>,
}

/// Cache of archive indexes keyed by search-path entry.
///
/// Lazily populated and shared by every resolution call in the process
/// (through [`ArchiveCache::global`]) unless a context injects an isolated
/// instance. Population takes the write lock once per new path; lookups
/// clone `Arc` snapshots and never hold the lock across filesystem probes.
#[derive(Debug, Default)]
pub struct ArchiveCache {
    inner: RwLock<CacheInner>,
}

impl ArchiveCache {
    /// Create an empty, isolated cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide shared cache.
    pub fn global() -> Arc<ArchiveCache> {
        static GLOBAL: Lazy<Arc<ArchiveCache>> = Lazy::new(|| Arc::new(ArchiveCache::new()));
        Arc::clone(&GLOBAL)
    }

    /// Probe any not-yet-seen entries of `search_path`, then return every
    /// archive known to the cache, in first-seen order.
    ///
    /// Note the cache is process-wide: archives probed on behalf of earlier
    /// search paths remain visible to later calls.
    pub fn ensure(&self, search_path: &[PathBuf]) -> Vec<Arc<ArchiveIndex>> {
        {
            let inner = self.inner.read();
            if search_path.iter().all(|path| inner.probed.contains(path)) {
                return inner.archives.clone();
            }
        }

        let mut inner = self.inner.write();
        for entry in search_path {
            if !inner.probed.insert(entry.clone()) {
                continue;
            }
            if let Some(index) = ArchiveIndex::open(entry) {
                inner.archives.push(Arc::new(index));
            }
        }
        inner.archives.clone()
    }

    /// Current occupancy counters.
    pub fn stats(&self) -> ArchiveCacheStats {
        let inner = self.inner.read();
        ArchiveCacheStats {
            archives: inner.archives.len(),
            rejected: inner.probed.len() - inner.archives.len(),
        }
    }
}
