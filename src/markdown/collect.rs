// src/markdown/collect.rs
// =============================================================================
// This module copies the located Markdown files into one flat folder.
//
// Repositories are full of files with the same name (README.md in every
// package, CHANGELOG.md, ...). Since the output folder is flat, repeats get
// a numeric suffix before the extension:
//
//   docs/README.md          -> README.md
//   packages/a/README.md    -> README_1.md
//   packages/b/README.md    -> README_2.md
//
// The first file seen in the input order keeps the plain name.
//
// A failed copy is logged and recorded in the report, then we move on to the
// next file. Only failing to create the output folder aborts the step.
// =============================================================================

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, warn};

use crate::error::{HarvestError, Result};

/// One file that made it into the output folder
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopiedFile {
    pub source: PathBuf,
    pub output_name: String,
}

/// One file that could not be copied
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedCopy {
    pub source: PathBuf,
    pub error: String,
}

/// Outcome of a single `collect` call.
#[derive(Debug, Default, Clone, Serialize)]
pub struct CollectReport {
    pub copied: Vec<CopiedFile>,
    pub failed: Vec<FailedCopy>,
}

// Copies `files` into `output_dir`, renaming repeats as described above
//
// Parameters:
//   files: paths from find_markdown(), in discovery order
//   output_dir: created if missing, existing contents are left alone
pub fn collect(files: &[PathBuf], output_dir: &Path) -> Result<CollectReport> {
    fs::create_dir_all(output_dir).map_err(|e| HarvestError::io(output_dir, e))?;

    let mut names = CollisionTable::default();
    let mut report = CollectReport::default();

    for source in files {
        let Some(file_name) = source.file_name() else {
            warn!(path = %source.display(), "skipping path without a file name");
            report.failed.push(FailedCopy {
                source: source.clone(),
                error: "path has no file name".to_string(),
            });
            continue;
        };

        let output_name = names.assign(file_name);
        let target = output_dir.join(&output_name);

        match fs::copy(source, &target) {
            Ok(_) => {
                info!(
                    from = %file_name.to_string_lossy(),
                    to = %output_name.to_string_lossy(),
                    "copied file"
                );
                report.copied.push(CopiedFile {
                    source: source.clone(),
                    output_name: output_name.to_string_lossy().into_owned(),
                });
            }
            Err(e) => {
                warn!(path = %source.display(), error = %e, "failed to copy file");
                report.failed.push(FailedCopy {
                    source: source.clone(),
                    error: e.to_string(),
                });
            }
        }
    }

    Ok(report)
}

// Base file name -> how many times it has been seen before.
// Lives for exactly one collect() call.
#[derive(Debug, Default)]
struct CollisionTable {
    seen: HashMap<OsString, usize>,
}

impl CollisionTable {
    fn assign(&mut self, file_name: &OsStr) -> OsString {
        match self.seen.entry(file_name.to_os_string()) {
            Entry::Vacant(slot) => {
                slot.insert(0);
                file_name.to_os_string()
            }
            Entry::Occupied(mut slot) => {
                *slot.get_mut() += 1;
                numbered_name(file_name, *slot.get())
            }
        }
    }
}

// "note.md", 2 -> "note_2.md"; "LICENSE", 1 -> "LICENSE_1"
fn numbered_name(file_name: &OsStr, n: usize) -> OsString {
    let path = Path::new(file_name);
    let stem = path.file_stem().unwrap_or(file_name);

    let mut name = stem.to_os_string();
    name.push(format!("_{n}"));
    if let Some(ext) = path.extension() {
        name.push(".");
        name.push(ext);
    }
    name
}
