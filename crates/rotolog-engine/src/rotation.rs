//! Size-triggered rotation across numbered backup files
//!
//! The active file rotates to `<path>.1` once it reaches the configured
//! threshold; existing backups shift up one slot, bounded by the
//! configured retention count. Renumbering only walks the contiguous
//! prefix of the backup chain: files past a gap are never touched.

use std::fs;
use std::path::{Path, PathBuf};

use rotolog_core::constants::BACKUP_PROBE_LIMIT;
use rotolog_core::LogConfig;

/// Path of the `index`-th backup (`app.log` -> `app.log.3`)
pub fn rotated_path(base: &Path, index: usize) -> PathBuf {
    let name = base.file_name().unwrap().to_string_lossy();
    base.with_file_name(format!("{}.{}", name, index))
}

/// A non-fatal failure recorded during a rotation pass
#[derive(Debug, thiserror::Error)]
pub enum RotationIssue {
    #[error("failed to delete {path}: {source}")]
    Delete {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to rename {from} -> {to}: {source}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },
}

/// What a rotation pass did
#[derive(Debug, Default)]
pub struct RotationOutcome {
    /// Whether the rename chain ran (the active slot was freed, or at
    /// least attempted to be)
    pub rotated: bool,
    /// Non-fatal filesystem failures collected along the way
    pub issues: Vec<RotationIssue>,
}

/// Check the active file against the size threshold and rotate if needed.
///
/// Never fails: delete/rename errors mid-chain are collected as issues
/// and the remaining steps continue best-effort, so a partially failed
/// rotation leaves the next write appending to whatever state remains.
pub fn maybe_rotate(config: &LogConfig) -> RotationOutcome {
    let base = config.path();
    let mut outcome = RotationOutcome::default();

    // Missing file or still under the threshold: nothing to do.
    let size = match fs::metadata(base) {
        Ok(meta) => meta.len(),
        Err(_) => return outcome,
    };
    if size < config.max_size() {
        return outcome;
    }

    // Enumerate whatever exists among `base`, `.1` .. `.9`, base first.
    let mut existing: Vec<PathBuf> = Vec::new();
    if base.exists() {
        existing.push(base.to_path_buf());
    }
    for i in 1..=BACKUP_PROBE_LIMIT {
        let candidate = rotated_path(base, i);
        if candidate.exists() {
            existing.push(candidate);
        }
    }

    // Nothing to rotate, or the first entry is not the active file.
    // Never rename files in an unexpected filesystem state.
    match existing.first() {
        Some(first) if first == base => {}
        _ => return outcome,
    }

    if config.max_backups() == 0 {
        // No retention: drop the active file to make room.
        match fs::remove_file(base) {
            Ok(()) => outcome.rotated = true,
            Err(e) => outcome.issues.push(RotationIssue::Delete {
                path: base.to_path_buf(),
                source: e,
            }),
        }
        return outcome;
    }

    // Find the first gap in the numbered chain, capped at max_backups.
    let mut slot = 1;
    while slot < config.max_backups() && rotated_path(base, slot).exists() {
        slot += 1;
    }

    // The chain is full: evict the oldest backup to make room.
    if slot == config.max_backups() {
        let oldest = rotated_path(base, slot);
        if oldest.exists() {
            if let Err(e) = fs::remove_file(&oldest) {
                outcome.issues.push(RotationIssue::Delete {
                    path: oldest,
                    source: e,
                });
            }
        }
    }

    // Shift the contiguous prefix up one slot, oldest first, ending
    // with the active file moving to `.1`.
    for i in (1..=slot).rev() {
        let from = if i == 1 {
            base.to_path_buf()
        } else {
            rotated_path(base, i - 1)
        };
        let to = rotated_path(base, i);
        if let Err(e) = fs::rename(&from, &to) {
            outcome.issues.push(RotationIssue::Rename {
                from,
                to,
                source: e,
            });
        }
    }

    outcome.rotated = true;
    outcome
}
