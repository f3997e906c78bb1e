//! Locus command-line tool
//!
//! Resolves dotted module names against an explicit search path and prints
//! the resulting module spec, without importing anything. Interpreter state
//! (builtin/frozen tables, namespace declarations) is simulated from flags
//! and the optional `locus.toml` config file.

mod config;
mod output;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use locus_engine::{
    ResolutionContext, Resolver, StaticModuleRegistry, StaticNativeRegistry,
};
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::Config;

#[derive(Parser)]
#[command(name = "locus")]
#[command(about = "Locate Python modules without importing them", long_about = None)]
#[command(version)]
struct Cli {
    /// Color output: auto, always, never
    #[arg(long, global = true, value_name = "WHEN")]
    color: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a dotted module name to a module spec
    Resolve {
        /// Dotted module name (e.g. "pkg.sub")
        name: String,
        /// Search path entry, in order (overrides config and PYTHONPATH)
        #[arg(short, long = "path", value_name = "DIR")]
        paths: Vec<PathBuf>,
        /// Module name satisfied by the simulated builtin loader
        #[arg(long = "builtin", value_name = "NAME")]
        builtins: Vec<String>,
        /// Module name satisfied by the simulated frozen loader
        #[arg(long = "frozen", value_name = "NAME")]
        frozen: Vec<String>,
        /// Known extension-library directory
        #[arg(long = "ext-lib-dir", value_name = "DIR")]
        ext_lib_dirs: Vec<PathBuf>,
        /// Declare a live namespace package as NAME=DIR[,DIR...]
        #[arg(long = "namespace", value_name = "NAME=DIRS")]
        namespaces: Vec<String>,
        /// Config file (default: ./locus.toml when present)
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
        /// Print the spec as JSON
        #[arg(long)]
        json: bool,
        /// Disable the distutils re-resolution workaround
        #[arg(long)]
        no_distutils_workaround: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let choice = output::resolve_color_choice(cli.color.as_deref());

    match cli.command {
        Commands::Resolve {
            name,
            paths,
            builtins,
            frozen,
            ext_lib_dirs,
            namespaces,
            config,
            json,
            no_distutils_workaround,
        } => {
            let config = match config {
                Some(path) => Some(
                    Config::load(&path)
                        .with_context(|| format!("loading {}", path.display()))?,
                ),
                None => Config::load_default().context("loading locus.toml")?,
            }
            .unwrap_or_default();

            let ctx = build_context(
                &config,
                paths,
                builtins,
                frozen,
                ext_lib_dirs,
                &namespaces,
                no_distutils_workaround,
            )?;

            match Resolver::new(&ctx).find_spec_dotted(&name, None) {
                Ok(spec) => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(&spec)?);
                    } else {
                        output::print_spec(choice, &spec);
                    }
                }
                Err(err) => {
                    output::print_error(choice, &err.to_string());
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}

/// Assemble the resolution context from config and flags.
///
/// Search-path precedence: `--path` flags, else the config file, else
/// `PYTHONPATH`, else the current directory.
fn build_context(
    config: &Config,
    paths: Vec<PathBuf>,
    builtins: Vec<String>,
    frozen: Vec<String>,
    ext_lib_dirs: Vec<PathBuf>,
    namespaces: &[String],
    no_distutils_workaround: bool,
) -> anyhow::Result<ResolutionContext> {
    let search_path = if !paths.is_empty() {
        paths
    } else if !config.resolver.search_path.is_empty() {
        config.resolver.search_path.clone()
    } else if let Some(env_path) = std::env::var_os("PYTHONPATH") {
        std::env::split_paths(&env_path).collect()
    } else {
        vec![PathBuf::from(".")]
    };

    let mut native = StaticNativeRegistry::new();
    for name in config.resolver.builtins.iter().cloned().chain(builtins) {
        native.add_builtin(name);
    }
    for name in config.resolver.frozen.iter().cloned().chain(frozen) {
        native.add_frozen(name, None);
    }

    let mut modules = StaticModuleRegistry::new();
    for declaration in namespaces {
        let (name, dirs) = parse_namespace(declaration)?;
        modules.declare_namespace(name, dirs);
    }

    let mut dirs = config.resolver.ext_lib_dirs.clone();
    dirs.extend(ext_lib_dirs);

    let distutils_workaround = config.resolver.distutils_workaround && !no_distutils_workaround;

    Ok(ResolutionContext::new(search_path)
        .with_ext_lib_dirs(dirs)
        .with_native_registry(Arc::new(native))
        .with_module_registry(Arc::new(modules))
        .with_distutils_workaround(distutils_workaround))
}

/// Parse a `NAME=DIR[,DIR...]` namespace declaration.
fn parse_namespace(declaration: &str) -> anyhow::Result<(String, Vec<PathBuf>)> {
    let Some((name, dirs)) = declaration.split_once('=') else {
        bail!("invalid namespace declaration {declaration:?}: expected NAME=DIR[,DIR...]");
    };
    if name.is_empty() || dirs.is_empty() {
        bail!("invalid namespace declaration {declaration:?}: expected NAME=DIR[,DIR...]");
    }
    Ok((
        name.to_string(),
        dirs.split(',').map(PathBuf::from).collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_namespace_declaration() {
        let (name, dirs) = parse_namespace("corp=/site/corp,/opt/corp").unwrap();
        assert_eq!(name, "corp");
        assert_eq!(
            dirs,
            vec![PathBuf::from("/site/corp"), PathBuf::from("/opt/corp")]
        );
    }

    #[test]
    fn rejects_namespace_without_dirs() {
        assert!(parse_namespace("corp").is_err());
        assert!(parse_namespace("corp=").is_err());
        assert!(parse_namespace("=/site").is_err());
    }

    #[test]
    fn flags_override_config_search_path() {
        let mut config = Config::default();
        config.resolver.search_path = vec![PathBuf::from("/from-config")];

        let ctx = build_context(
            &config,
            vec![PathBuf::from("/from-flag")],
            Vec::new(),
            Vec::new(),
            Vec::new(),
            &[],
            false,
        )
        .unwrap();
        assert_eq!(ctx.search_path(), [PathBuf::from("/from-flag")]);
    }

    #[test]
    fn config_search_path_used_without_flags() {
        let mut config = Config::default();
        config.resolver.search_path = vec![PathBuf::from("/from-config")];

        let ctx = build_context(
            &config,
            Vec::new(),
            Vec::new(),
            Vec::new(),
            Vec::new(),
            &[],
            false,
        )
        .unwrap();
        assert_eq!(ctx.search_path(), [PathBuf::from("/from-config")]);
    }
}
