// src/repo/fetch.rs
// =============================================================================
// This module clones the repository into a scratch directory.
//
// Strategy:
// - Remove any stale scratch directory left by an earlier (maybe interrupted) run
// - Run `git clone <url> <scratch>` as a child process
// - Let git write straight to our terminal so the operator sees progress
//
// Why shell out to git instead of using a library?
// - git already handles every protocol, credential helper and proxy setup
//   the user has configured
// - The clone is a one-shot blocking step, so a child process is all we need
//
// Rust concepts:
// - std::process::Command: Spawning and waiting for child processes
// - Stdio::inherit(): Sharing our stdout/stderr with the child
// =============================================================================

use std::ffi::{OsStr, OsString};
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, info};

use crate::error::{HarvestError, Result};
use crate::repo::scratch::remove_path;

/// Clones repositories with the `git` command-line client.
#[derive(Debug, Clone)]
pub struct GitFetcher {
    program: OsString,
}

impl Default for GitFetcher {
    fn default() -> Self {
        Self::with_program("git")
    }
}

impl GitFetcher {
    /// Uses `program` instead of `git` found on PATH.
    pub fn with_program(program: impl AsRef<OsStr>) -> Self {
        Self {
            program: program.as_ref().to_os_string(),
        }
    }

    // Clones `url` into `scratch`
    //
    // Blocks until git exits. A spawn failure (git not installed) or a non-zero
    // exit status both come back as HarvestError::Fetch. There is no retry.
    pub fn fetch(&self, url: &str, scratch: &Path) -> Result<()> {
        let fetch_error = |message: String| HarvestError::Fetch {
            url: url.to_string(),
            message,
        };

        // A previous run never blocks a new one
        if remove_path(scratch).map_err(|e| fetch_error(e.to_string()))? {
            debug!(path = %scratch.display(), "removed stale scratch directory");
        }

        info!(url, target = %scratch.display(), "cloning repository");

        let status = Command::new(&self.program)
            .arg("clone")
            .arg("--")
            .arg(url)
            .arg(scratch)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| {
                fetch_error(format!(
                    "could not run {}: {}",
                    self.program.to_string_lossy(),
                    e
                ))
            })?;

        if !status.success() {
            let message = match status.code() {
                Some(code) => format!("git clone exited with status {code}"),
                None => "git clone was terminated by a signal".to_string(),
            };
            return Err(fetch_error(message));
        }

        Ok(())
    }
}
