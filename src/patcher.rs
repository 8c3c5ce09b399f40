//! Read → apply → write runner.
//!
//! One patch run is a single linear pass: read the target file fully into
//! memory, hand it to the pure engine, then write the result back to the
//! same path unconditionally — even when every spec failed, in which case
//! the rewrite is byte-identical.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::patch::{apply_specs, PatchOutcome, PatchSpec};

#[derive(Error, Debug)]
pub enum PatchError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result of one full read → apply-all-specs → write cycle.
#[derive(Debug)]
#[must_use = "PatchRun carries the per-spec outcomes"]
pub struct PatchRun {
    /// Path that was read and rewritten.
    pub path: PathBuf,
    /// One outcome per spec, in spec order.
    pub outcomes: Vec<PatchOutcome>,
}

impl PatchRun {
    pub fn applied_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_applied()).count()
    }
}

/// Run the full patch cycle against the file at `path`.
///
/// I/O failures are fatal and propagate to the caller; a spec whose search
/// text is absent is a tolerated no-op surfaced only in its outcome. The
/// file is rewritten regardless of how many specs applied.
pub fn run(path: &Path, specs: &[PatchSpec]) -> Result<PatchRun, PatchError> {
    let content = fs::read_to_string(path).map_err(|source| PatchError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let (patched, outcomes) = apply_specs(&content, specs);

    atomic_write(path, patched.as_bytes()).map_err(|source| PatchError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(PatchRun {
        path: path.to_path_buf(),
        outcomes,
    })
}

/// Atomic file write: tempfile in the target directory + fsync + rename.
///
/// Either the full write succeeds or the original file is left intact.
fn atomic_write(path: &Path, content: &[u8]) -> Result<(), std::io::Error> {
    // A bare filename like "app_new.js" has an empty parent; the tempfile
    // must still land on the same filesystem as the target.
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut temp = tempfile::NamedTempFile::new_in(parent)?;
    temp.write_all(content)?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| e.error)?;

    Ok(())
}
