//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::io::IsTerminal;
use std::path::Path;

use crate::backend::{ArtifactWriter, Artifacts, Staleness, emit};
use crate::config::GeneratorConfig;
use crate::diagnostics::render_registry_error;

use super::{CliError, CliResult, ExitCode};

/// Maximum registry file size (16 MB)
///
/// Far above any real registry; larger files are rejected before reading.
const MAX_REGISTRY_SIZE: u64 = 16 * 1024 * 1024;

/// Read the registry file.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be read (I/O error)
/// - The file exceeds `MAX_REGISTRY_SIZE`
pub fn read_registry(path: &Path) -> CliResult<String> {
    let metadata = fs::metadata(path)
        .map_err(|e| CliError::failure(format!("Cannot access registry '{}': {}", path.display(), e)))?;

    if metadata.len() > MAX_REGISTRY_SIZE {
        return Err(CliError::failure(format!(
            "Registry '{}' is too large ({} bytes, max {} bytes)",
            path.display(),
            metadata.len(),
            MAX_REGISTRY_SIZE
        )));
    }

    fs::read_to_string(path)
        .map_err(|e| CliError::failure(format!("Error reading registry '{}': {}", path.display(), e)))
}

/// Load, validate and render the registry named by `config`.
///
/// Nothing is written here; a registry error leaves the output directory untouched.
pub fn build_artifacts(config: &GeneratorConfig) -> CliResult<Artifacts> {
    let source = read_registry(&config.registry_path)?;
    let registry = cicgen_core::load_with(&source, &config.load).map_err(|err| {
        let file_name = config.registry_path.display().to_string();
        let color = std::io::stderr().is_terminal();
        CliError::failure(render_registry_error(&file_name, &source, &err, color).trim_end())
    })?;
    tracing::debug!(
        entries = registry.len(),
        max_code = registry.max_code(),
        "loaded {}",
        config.registry_path.display()
    );
    Ok(emit(&registry, &config.emit))
}

/// Generate and write both artifacts.
pub fn generate(config: &GeneratorConfig) -> CliResult<ExitCode> {
    let artifacts = build_artifacts(config)?;
    ArtifactWriter::new(&config.out_dir)
        .write(&artifacts)
        .map_err(|e| CliError::failure(format!("Error writing artifacts to '{}': {}", config.out_dir.display(), e)))?;
    Ok(ExitCode::SUCCESS)
}

/// Verify the artifacts on disk match what the registry would generate.
pub fn check(config: &GeneratorConfig) -> CliResult<ExitCode> {
    let artifacts = build_artifacts(config)?;
    let staleness = ArtifactWriter::new(&config.out_dir)
        .check(&artifacts)
        .map_err(|e| CliError::failure(format!("Error reading artifacts in '{}': {}", config.out_dir.display(), e)))?;

    match staleness {
        Staleness::UpToDate => Ok(ExitCode::SUCCESS),
        Staleness::Stale(paths) => {
            let mut msg = String::from("Generated files are out of date (run cicgen to regenerate):");
            for path in paths {
                msg.push_str(&format!("\n  {}", path.display()));
            }
            Err(CliError::failure(msg))
        }
    }
}
