//! End-to-end resolution scenarios
//!
//! Exercises the full finder chain against real temporary directories and
//! archives: suffix classes, package walks, builtin shadowing, egg lookups,
//! and both namespace package flavors.

use locus_engine::{
    ArchiveCache, ModuleType, ResolutionContext, ResolveError, Resolver, StaticModuleRegistry,
    StaticNativeRegistry,
};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

fn isolated_context(search_path: Vec<PathBuf>) -> ResolutionContext {
    ResolutionContext::new(search_path).with_archive_cache(Arc::new(ArchiveCache::new()))
}

fn write_archive(path: &Path, members: &[&str]) {
    let file = File::create(path).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default();
    for member in members {
        writer.start_file(*member, options).unwrap();
    }
    writer.finish().unwrap();
}

// ────────────────────────────────────────────────────────────────────────────
// Plain files and package directories
// ────────────────────────────────────────────────────────────────────────────

#[test]
fn source_file_on_search_path() {
    let temp = TempDir::new().unwrap();
    let lib = temp.path().join("lib");
    fs::create_dir(&lib).unwrap();
    fs::write(lib.join("os.py"), "").unwrap();

    let ctx = isolated_context(vec![lib.clone()]);
    let spec = Resolver::new(&ctx).find_spec(&["os"], None).unwrap();

    assert_eq!(spec.name, "os");
    assert_eq!(spec.module_type, ModuleType::Source);
    assert_eq!(spec.location, Some(lib.join("os.py")));
}

#[test]
fn package_then_submodule() {
    let temp = TempDir::new().unwrap();
    let lib = temp.path().join("lib");
    fs::create_dir_all(lib.join("pkg")).unwrap();
    fs::write(lib.join("pkg/__init__.py"), "").unwrap();
    fs::write(lib.join("pkg/sub.py"), "").unwrap();

    let ctx = isolated_context(vec![lib.clone()]);
    let spec = Resolver::new(&ctx).find_spec(&["pkg", "sub"], None).unwrap();

    assert_eq!(spec.name, "sub");
    assert_eq!(spec.module_type, ModuleType::Source);
    assert_eq!(spec.location, Some(lib.join("pkg/sub.py")));
}

#[test]
fn nested_packages_narrow_the_path() {
    let temp = TempDir::new().unwrap();
    let lib = temp.path().join("lib");
    fs::create_dir_all(lib.join("a/b")).unwrap();
    fs::write(lib.join("a/__init__.py"), "").unwrap();
    fs::write(lib.join("a/b/__init__.py"), "").unwrap();
    fs::write(lib.join("a/b/c.py"), "").unwrap();

    let ctx = isolated_context(vec![lib.clone()]);
    let spec = Resolver::new(&ctx).find_spec(&["a", "b", "c"], None).unwrap();

    assert_eq!(spec.location, Some(lib.join("a/b/c.py")));
}

#[test]
fn package_record_lists_its_directory() {
    let temp = TempDir::new().unwrap();
    let lib = temp.path().join("lib");
    fs::create_dir_all(lib.join("pkg")).unwrap();
    fs::write(lib.join("pkg/__init__.py"), "").unwrap();

    let ctx = isolated_context(vec![lib.clone()]);
    let spec = Resolver::new(&ctx).find_spec(&["pkg"], None).unwrap();

    assert_eq!(spec.module_type, ModuleType::PackageDirectory);
    assert_eq!(spec.submodule_search_locations, Some(vec![lib.join("pkg")]));
}

// ────────────────────────────────────────────────────────────────────────────
// Builtin and frozen shadowing
// ────────────────────────────────────────────────────────────────────────────

#[test]
fn builtin_shadows_same_named_file() {
    let temp = TempDir::new().unwrap();
    let lib = temp.path().join("lib");
    fs::create_dir(&lib).unwrap();
    fs::write(lib.join("sys.py"), "").unwrap();

    let mut native = StaticNativeRegistry::new();
    native.add_builtin("sys");
    let ctx = isolated_context(vec![lib]).with_native_registry(Arc::new(native));

    let spec = Resolver::new(&ctx).find_spec(&["sys"], None).unwrap();
    assert_eq!(spec.module_type, ModuleType::Builtin);
    assert_eq!(spec.location, None);
}

#[test]
fn frozen_module_resolves_without_files() {
    let mut native = StaticNativeRegistry::new();
    native.add_frozen("zipimport", Some(PathBuf::from("<frozen zipimport>")));
    let ctx = isolated_context(Vec::new()).with_native_registry(Arc::new(native));

    let spec = Resolver::new(&ctx).find_spec(&["zipimport"], None).unwrap();
    assert_eq!(spec.module_type, ModuleType::Frozen);
    assert_eq!(spec.location, Some(PathBuf::from("<frozen zipimport>")));
}

// ────────────────────────────────────────────────────────────────────────────
// Egg archives
// ────────────────────────────────────────────────────────────────────────────

#[test]
fn module_inside_egg() {
    let temp = TempDir::new().unwrap();
    let egg = temp.path().join("dist.egg");
    write_archive(&egg, &["pkg/__init__.py", "pkg/sub.py"]);

    let ctx = isolated_context(vec![egg.clone()]);
    let spec = Resolver::new(&ctx).find_spec(&["pkg", "sub"], None).unwrap();

    assert_eq!(spec.name, "sub");
    assert_eq!(spec.module_type, ModuleType::ZipModule);
    assert_eq!(spec.origin.as_deref(), Some("egg"));
    let location = spec.location.unwrap();
    assert!(location.ends_with(Path::new("pkg/sub")));
}

#[test]
fn egg_partial_match_is_terminal() {
    let temp = TempDir::new().unwrap();
    let egg = temp.path().join("dist.egg");
    write_archive(&egg, &["pkg/__init__.py"]);

    let ctx = isolated_context(vec![egg.clone()]);
    let err = Resolver::new(&ctx).find_spec(&["pkg", "sub"], None).unwrap_err();

    // The archive owns the package root, so this is not ModuleNotFound.
    assert_eq!(
        err,
        ResolveError::IncompleteArchivePackage {
            missing: "sub".to_string(),
            archive: egg,
            module: "pkg.sub".to_string(),
        }
    );
}

#[test]
fn egg_on_explicit_path_is_searched() {
    let temp = TempDir::new().unwrap();
    let egg = temp.path().join("dist.egg");
    write_archive(&egg, &["pkg/__init__.py", "pkg/sub.py"]);

    // Context path is empty; the egg arrives through the call-site path.
    let ctx = isolated_context(Vec::new());
    let path = vec![egg];
    let spec = Resolver::new(&ctx)
        .find_spec(&["pkg", "sub"], Some(&path))
        .unwrap();

    assert_eq!(spec.module_type, ModuleType::ZipModule);
    assert_eq!(spec.origin.as_deref(), Some("egg"));
}

#[test]
fn loose_package_shadows_egg() {
    let temp = TempDir::new().unwrap();
    let lib = temp.path().join("lib");
    fs::create_dir_all(lib.join("pkg")).unwrap();
    fs::write(lib.join("pkg/__init__.py"), "").unwrap();
    let egg = temp.path().join("dist.egg");
    write_archive(&egg, &["pkg/__init__.py"]);

    let ctx = isolated_context(vec![lib.clone(), egg]);
    let spec = Resolver::new(&ctx).find_spec(&["pkg"], None).unwrap();

    assert_eq!(spec.module_type, ModuleType::PackageDirectory);
    assert_eq!(spec.location, Some(lib.join("pkg")));
}

// ────────────────────────────────────────────────────────────────────────────
// Namespace packages
// ────────────────────────────────────────────────────────────────────────────

#[test]
fn implicit_namespace_package_spans_roots() {
    let temp = TempDir::new().unwrap();
    let first = temp.path().join("first");
    let second = temp.path().join("second");
    fs::create_dir_all(first.join("shared")).unwrap();
    fs::create_dir_all(second.join("shared")).unwrap();
    fs::write(second.join("shared/util.py"), "").unwrap();

    let ctx = isolated_context(vec![first.clone(), second.clone()]);
    let resolver = Resolver::new(&ctx);

    let ns = resolver.find_spec(&["shared"], None).unwrap();
    assert_eq!(ns.module_type, ModuleType::Namespace);
    assert_eq!(ns.location, None);
    assert_eq!(
        ns.submodule_search_locations,
        Some(vec![first.join("shared"), second.join("shared")])
    );

    let util = resolver.find_spec(&["shared", "util"], None).unwrap();
    assert_eq!(util.location, Some(second.join("shared/util.py")));
}

#[test]
fn extend_path_package_widens_child_search() {
    let temp = TempDir::new().unwrap();
    let first = temp.path().join("first");
    let second = temp.path().join("second");
    fs::create_dir_all(first.join("ns")).unwrap();
    fs::create_dir_all(second.join("ns")).unwrap();
    fs::write(
        first.join("ns/__init__.py"),
        "from pkgutil import extend_path\n__path__ = extend_path(__path__, __name__)\n",
    )
    .unwrap();
    fs::write(second.join("ns/leaf.py"), "").unwrap();

    let ctx = isolated_context(vec![first.clone(), second.clone()]);
    let resolver = Resolver::new(&ctx);

    let ns = resolver.find_spec(&["ns"], None).unwrap();
    assert_eq!(ns.module_type, ModuleType::PackageDirectory);
    assert_eq!(
        ns.submodule_search_locations,
        Some(vec![first.join("ns"), second.join("ns")])
    );

    // The leaf only exists under the second root.
    let leaf = resolver.find_spec(&["ns", "leaf"], None).unwrap();
    assert_eq!(leaf.location, Some(second.join("ns/leaf.py")));
}

#[test]
fn explicit_namespace_from_registry() {
    let temp = TempDir::new().unwrap();
    let site = temp.path().join("site/corp");
    fs::create_dir_all(&site).unwrap();
    fs::write(site.join("tool.py"), "").unwrap();

    let mut modules = StaticModuleRegistry::new();
    modules.declare_namespace("corp", vec![site.clone()]);
    let ctx = isolated_context(Vec::new()).with_module_registry(Arc::new(modules));
    let resolver = Resolver::new(&ctx);

    let ns = resolver.find_spec(&["corp"], None).unwrap();
    assert_eq!(ns.module_type, ModuleType::Namespace);
    assert_eq!(ns.origin.as_deref(), Some("namespace"));

    let tool = resolver.find_spec(&["corp", "tool"], None).unwrap();
    assert_eq!(tool.location, Some(site.join("tool.py")));
}

// ────────────────────────────────────────────────────────────────────────────
// Failures and stability
// ────────────────────────────────────────────────────────────────────────────

#[test]
fn nothing_matches_anywhere() {
    let temp = TempDir::new().unwrap();
    let ctx = isolated_context(vec![temp.path().to_path_buf()]);

    let err = Resolver::new(&ctx)
        .find_spec(&["nosuchmodule"], None)
        .unwrap_err();
    assert_eq!(err.to_string(), "no module named nosuchmodule");
}

#[test]
fn repeated_resolution_yields_equal_records() {
    let temp = TempDir::new().unwrap();
    let lib = temp.path().join("lib");
    fs::create_dir_all(lib.join("pkg")).unwrap();
    fs::write(lib.join("pkg/__init__.py"), "").unwrap();
    fs::write(lib.join("pkg/sub.py"), "").unwrap();
    let egg = temp.path().join("dist.egg");
    write_archive(&egg, &["zipped/__init__.py"]);

    let ctx = isolated_context(vec![lib, egg]);
    let resolver = Resolver::new(&ctx);

    for dotted in ["pkg", "pkg.sub", "zipped"] {
        let first = resolver.find_spec_dotted(dotted, None).unwrap();
        let second = resolver.find_spec_dotted(dotted, None).unwrap();
        assert_eq!(first, second, "resolving {dotted} twice diverged");
    }
}

#[test]
fn spec_serializes_to_json() {
    let temp = TempDir::new().unwrap();
    let lib = temp.path().join("lib");
    fs::create_dir(&lib).unwrap();
    fs::write(lib.join("os.py"), "").unwrap();

    let ctx = isolated_context(vec![lib]);
    let spec = Resolver::new(&ctx).find_spec(&["os"], None).unwrap();

    let json = serde_json::to_value(&spec).unwrap();
    assert_eq!(json["name"], "os");
    assert_eq!(json["type"], "source");
}
