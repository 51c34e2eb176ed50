// crates/wireroute-gen/src/main.rs
// ============================================================================
// Module: DSL Generator CLI
// Description: CLI entrypoint for endpoint builder generation.
// Purpose: Produce deterministic builder modules from the component catalog.
// Dependencies: clap, wireroute-gen
// ============================================================================

//! ## Overview
//! The DSL generator CLI renders the typed endpoint builder crate and the
//! markdown component reference from `catalog/components.json`. It can also
//! verify that on-disk outputs match the generated content.
//!
//! ### Security Posture
//! Catalog inputs and output paths are treated as untrusted. IO failures and
//! validation errors fail closed.

use std::fs;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use clap::Parser;
use clap::Subcommand;
use wireroute_gen::DEFAULT_CATALOG_PATH;
use wireroute_gen::DslGenError;
use wireroute_gen::DslGenerator;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Default output directory for the generated builder crate sources.
const DEFAULT_BUILDERS_OUT: &str = "crates/wireroute-components/src";

/// Default output path for the markdown component reference.
const DEFAULT_DOCS_OUT: &str = "docs/components.md";

/// CLI arguments for DSL generation.
#[derive(Debug, Parser)]
#[command(name = "wireroute-gen", about = "Generate Wireroute endpoint builder modules.")]
struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    command: Command,
}

/// Supported CLI subcommands.
#[derive(Debug, Subcommand)]
enum Command {
    /// Generate builder modules and the component reference.
    Generate {
        /// Path to the component catalog input.
        #[arg(long, value_name = "FILE", default_value = DEFAULT_CATALOG_PATH)]
        catalog: PathBuf,
        /// Output directory for generated builder sources.
        #[arg(long, value_name = "DIR", default_value = DEFAULT_BUILDERS_OUT)]
        builders_out: PathBuf,
        /// Markdown component reference output file.
        #[arg(long, value_name = "FILE", default_value = DEFAULT_DOCS_OUT)]
        docs_out: PathBuf,
    },
    /// Verify on-disk outputs match the generated content.
    Check {
        /// Path to the component catalog input.
        #[arg(long, value_name = "FILE", default_value = DEFAULT_CATALOG_PATH)]
        catalog: PathBuf,
        /// Directory holding generated builder sources.
        #[arg(long, value_name = "DIR", default_value = DEFAULT_BUILDERS_OUT)]
        builders_out: PathBuf,
        /// Markdown component reference file.
        #[arg(long, value_name = "FILE", default_value = DEFAULT_DOCS_OUT)]
        docs_out: PathBuf,
    },
    /// Render only the markdown component reference.
    Docs {
        /// Path to the component catalog input.
        #[arg(long, value_name = "FILE", default_value = DEFAULT_CATALOG_PATH)]
        catalog: PathBuf,
        /// Markdown component reference output file.
        #[arg(long, value_name = "FILE", default_value = DEFAULT_DOCS_OUT)]
        docs_out: PathBuf,
    },
}

// ============================================================================
// SECTION: Command Dispatch
// ============================================================================

/// CLI entrypoint.
fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report_error(&err),
    }
}

/// Dispatches the CLI command.
fn run() -> Result<(), DslGenError> {
    let cli = Cli::parse();
    match cli.command {
        Command::Generate {
            catalog,
            builders_out,
            docs_out,
        } => generate(catalog, &builders_out, &docs_out),
        Command::Check {
            catalog,
            builders_out,
            docs_out,
        } => check(catalog, &builders_out, &docs_out),
        Command::Docs {
            catalog,
            docs_out,
        } => docs(catalog, &docs_out),
    }
}

/// Writes all generated outputs to the configured paths.
///
/// Parent directories are created automatically when missing. Outputs are
/// written to a temporary file and then moved into place.
fn generate(catalog: PathBuf, builders_out: &Path, docs_out: &Path) -> Result<(), DslGenError> {
    let generator = DslGenerator::load(catalog)?;
    for file in generator.generated_files() {
        write_output(&builders_out.join(&file.name), &file.content)?;
    }
    write_output(docs_out, &generator.generate_markdown())
}

/// Verifies on-disk outputs match the generated content.
///
/// Returns a drift error naming the first stale file.
fn check(catalog: PathBuf, builders_out: &Path, docs_out: &Path) -> Result<(), DslGenError> {
    let generator = DslGenerator::load(catalog)?;
    for file in generator.generated_files() {
        check_output(&builders_out.join(&file.name), &file.content)?;
    }
    check_output(docs_out, &generator.generate_markdown())
}

/// Writes only the markdown component reference.
fn docs(catalog: PathBuf, docs_out: &Path) -> Result<(), DslGenError> {
    let generator = DslGenerator::load(catalog)?;
    write_output(docs_out, &generator.generate_markdown())
}

/// Writes the generated contents to the specified path.
///
/// On platforms without atomic replace, this falls back to remove-and-rename.
fn write_output(path: &Path, contents: &str) -> Result<(), DslGenError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|err| DslGenError::Io(err.to_string()))?;
    }
    let (temp_path, mut file) = create_temp_output(path)?;
    if let Err(err) = file.write_all(contents.as_bytes()) {
        let _ = fs::remove_file(&temp_path);
        return Err(DslGenError::Io(err.to_string()));
    }
    if let Err(err) = file.sync_all() {
        let _ = fs::remove_file(&temp_path);
        return Err(DslGenError::Io(err.to_string()));
    }
    persist_temp_output(&temp_path, path)
}

/// Compares the generated contents against the existing file.
///
/// This is used by CI to ensure generated outputs stay in sync.
fn check_output(path: &Path, contents: &str) -> Result<(), DslGenError> {
    let existing = fs::read_to_string(path).map_err(|err| DslGenError::Io(err.to_string()))?;
    if existing != contents {
        return Err(DslGenError::Drift(format!(
            "{} is stale. Run wireroute-gen generate.",
            path.display()
        )));
    }
    Ok(())
}

/// Reports a CLI error to stderr.
fn report_error(err: &DslGenError) -> ExitCode {
    let mut stderr = std::io::stderr();
    let _ = writeln!(stderr, "{err}");
    ExitCode::FAILURE
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

// ============================================================================
// CONSTANTS: Temporary output file handling
// ============================================================================

const TEMP_ATTEMPTS: usize = 16;
static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Creates a unique temporary output file alongside the destination.
fn create_temp_output(path: &Path) -> Result<(PathBuf, fs::File), DslGenError> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| DslGenError::Io("output path does not include a file name".to_string()))?;
    for _ in 0 .. TEMP_ATTEMPTS {
        let attempt = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
        let temp_name = format!(".{file_name}.tmp.{}.{}", std::process::id(), attempt);
        let temp_path = parent.join(temp_name);
        match OpenOptions::new().write(true).create_new(true).open(&temp_path) {
            Ok(file) => return Ok((temp_path, file)),
            Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => continue,
            Err(err) => return Err(DslGenError::Io(err.to_string())),
        }
    }
    Err(DslGenError::Io("failed to allocate temporary output path".to_string()))
}

/// Persists the temporary output file to the final destination.
fn persist_temp_output(temp_path: &Path, path: &Path) -> Result<(), DslGenError> {
    match fs::rename(temp_path, path) {
        Ok(()) => Ok(()),
        Err(err) => {
            if path.exists() {
                fs::remove_file(path).map_err(|err| DslGenError::Io(err.to_string()))?;
                fs::rename(temp_path, path).map_err(|err| DslGenError::Io(err.to_string()))?;
                return Ok(());
            }
            let _ = fs::remove_file(temp_path);
            Err(DslGenError::Io(err.to_string()))
        }
    }
}
