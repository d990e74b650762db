//! CLI module for the cicgen generator
//!
//! With no arguments the generator reads `./cic.txt` and writes `./cic.h` and `./cic.c`. Flags only
//! override those conventions.
//!
//! ## Modules
//!
//! - `commands` - Command implementations
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use cicgen_core::DuplicatePolicy;
use clap::Parser;

use crate::config::{DEFAULT_REGISTRY, DEFAULT_STEM, GeneratorConfig};

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Generate a C company-identifier lookup table from a registry file
#[derive(Parser, Debug)]
#[command(name = "cicgen")]
#[command(version = VERSION)]
#[command(about = "Generate a C company-identifier lookup table from a registry file", long_about = None)]
pub struct Cli {
    /// Registry to read
    #[arg(long, value_name = "FILE", default_value = DEFAULT_REGISTRY)]
    pub registry: PathBuf,

    /// Directory the header and source are written to
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub out_dir: PathBuf,

    /// Base name of the artifacts and the lookup function (`get_<stem>`)
    #[arg(long, value_name = "NAME", default_value = DEFAULT_STEM)]
    pub stem: String,

    /// Treat a repeated code as an error instead of letting the later entry win
    #[arg(long)]
    pub deny_duplicates: bool,

    /// Check that the artifacts are up to date without writing them
    #[arg(long)]
    pub check: bool,
}

impl Cli {
    /// Build the generator configuration these flags describe.
    pub fn to_config(&self) -> CliResult<GeneratorConfig> {
        let duplicates = if self.deny_duplicates {
            DuplicatePolicy::Reject
        } else {
            DuplicatePolicy::LastWins
        };
        GeneratorConfig::new()
            .with_registry(&self.registry)
            .with_out_dir(&self.out_dir)
            .with_duplicates(duplicates)
            .with_stem(&self.stem)
            .map_err(|e| CliError::failure(format!("Error: {}", e)))
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(&cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: &Cli) -> CliResult<ExitCode> {
    let config = cli.to_config()?;
    if cli.check {
        commands::check(&config)
    } else {
        commands::generate(&config)
    }
}

// ============================================================================
// Tests
// ============================================================================
