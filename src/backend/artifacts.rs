//! Artifact writer - puts the generated header and source on disk
//!
//! Both files are written to temporary siblings first and only renamed into place once both writes
//! succeeded, so an I/O failure never leaves a fresh header next to a stale source.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{Artifact, Artifacts};

/// Result of comparing rendered artifacts with what is on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Staleness {
    UpToDate,
    /// Paths that are missing or whose contents differ
    Stale(Vec<PathBuf>),
}

/// Writes artifacts into one output directory
pub struct ArtifactWriter {
    output_dir: PathBuf,
}

impl ArtifactWriter {
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Final location of an artifact
    pub fn path_of(&self, artifact: &Artifact) -> PathBuf {
        self.output_dir.join(&artifact.file_name)
    }

    fn temp_path_of(&self, artifact: &Artifact) -> PathBuf {
        self.output_dir.join(format!(".{}.tmp", artifact.file_name))
    }

    /// Write (and fully overwrite) every artifact.
    ///
    /// Returns the final paths written.
    pub fn write(&self, artifacts: &Artifacts) -> io::Result<Vec<PathBuf>> {
        fs::create_dir_all(&self.output_dir)?;

        let staged: Vec<(PathBuf, PathBuf)> = artifacts
            .iter()
            .map(|a| (self.temp_path_of(a), self.path_of(a)))
            .collect();

        let result = self.stage_and_commit(artifacts, &staged);
        if result.is_err() {
            for (temp, _) in &staged {
                let _ = fs::remove_file(temp);
            }
        }
        result.map(|()| staged.into_iter().map(|(_, path)| path).collect())
    }

    fn stage_and_commit(&self, artifacts: &Artifacts, staged: &[(PathBuf, PathBuf)]) -> io::Result<()> {
        for (artifact, (temp, _)) in artifacts.iter().zip(staged) {
            fs::write(temp, &artifact.contents)?;
        }
        for (temp, path) in staged {
            fs::rename(temp, path)?;
            tracing::info!("wrote {}", path.display());
        }
        Ok(())
    }

    /// Compare artifacts with the files on disk without writing anything.
    pub fn check(&self, artifacts: &Artifacts) -> io::Result<Staleness> {
        let mut stale = Vec::new();
        for artifact in artifacts.iter() {
            let path = self.path_of(artifact);
            match fs::read_to_string(&path) {
                Ok(existing) if existing == artifact.contents => {}
                Ok(_) => stale.push(path),
                Err(e) if e.kind() == io::ErrorKind::NotFound => stale.push(path),
                Err(e) => return Err(e),
            }
        }
        if stale.is_empty() {
            Ok(Staleness::UpToDate)
        } else {
            Ok(Staleness::Stale(stale))
        }
    }
}
