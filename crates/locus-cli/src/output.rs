//! Colored terminal rendering of resolved specs.
//!
//! Uses `termcolor` for cross-platform colored output. Respects the
//! `NO_COLOR` environment variable and the `--color` flag.

use locus_engine::{ModuleSpec, ModuleType};
use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Resolve `ColorChoice` from CLI flag and environment.
///
/// Priority: `NO_COLOR` env > `--color` flag > auto-detect TTY.
pub fn resolve_color_choice(flag: Option<&str>) -> ColorChoice {
    if std::env::var_os("NO_COLOR").is_some() {
        return ColorChoice::Never;
    }
    match flag {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

fn type_label(module_type: ModuleType) -> &'static str {
    match module_type {
        ModuleType::Builtin => "builtin",
        ModuleType::Extension => "extension",
        ModuleType::PackageDirectory => "package directory",
        ModuleType::CodeResource => "code resource",
        ModuleType::Compiled => "compiled bytecode",
        ModuleType::Frozen => "frozen",
        ModuleType::Resource => "resource",
        ModuleType::Source => "source",
        ModuleType::ZipModule => "zip archive member",
        ModuleType::Namespace => "namespace package",
    }
}

/// Print a resolved spec as aligned `field: value` lines, with the module
/// name highlighted.
pub fn print_spec(choice: ColorChoice, spec: &ModuleSpec) {
    let mut stdout = StandardStream::stdout(choice);

    let mut name_spec = ColorSpec::new();
    name_spec.set_fg(Some(Color::Cyan)).set_bold(true);
    let _ = stdout.set_color(&name_spec);
    let _ = write!(stdout, "{}", spec.name);
    let _ = stdout.reset();
    let _ = writeln!(stdout, "  ({})", type_label(spec.module_type));

    match &spec.location {
        Some(location) => {
            let _ = writeln!(stdout, "  location: {}", location.display());
        }
        None => {
            let _ = writeln!(stdout, "  location: <none>");
        }
    }
    if let Some(origin) = &spec.origin {
        let _ = writeln!(stdout, "  origin:   {origin}");
    }
    if let Some(locations) = &spec.submodule_search_locations {
        let _ = writeln!(stdout, "  submodule search locations:");
        for location in locations {
            let _ = writeln!(stdout, "    - {}", location.display());
        }
    }
}

/// Print an error message to stderr with a colored `error:` prefix.
pub fn print_error(choice: ColorChoice, message: &str) {
    let mut stderr = StandardStream::stderr(choice);

    let mut error_spec = ColorSpec::new();
    error_spec.set_fg(Some(Color::Red)).set_bold(true);
    let _ = stderr.set_color(&error_spec);
    let _ = write!(stderr, "error: ");
    let _ = stderr.reset();
    let _ = writeln!(stderr, "{message}");
}
