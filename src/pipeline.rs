// src/pipeline.rs
// =============================================================================
// Runs the four steps, in order, once:
//
//   1. Resolve the URL into owner-repo        (repo::RepoRef)
//   2. Clone into temp_<owner>-<repo>         (repo::GitFetcher)
//   3. Find Markdown files in the clone       (markdown::find_markdown)
//   4. Copy them to <owner>-<repo>_markdown_files (markdown::collect)
//
// The temporary clone is removed at the end no matter how steps 2-4 went.
// A bad URL fails before anything touches the disk.
// =============================================================================

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::markdown::{self, CollectReport};
use crate::repo::{GitFetcher, RepoRef, ScratchDir};

/// What one run did, printed at the end (or as JSON with --json)
#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub repository: String,
    pub normalized_url: String,
    pub identifier: String,
    /// Absolute output folder, `None` when there was nothing to copy
    pub output_dir: Option<PathBuf>,
    pub found: usize,
    #[serde(flatten)]
    pub report: CollectReport,
}

#[derive(Debug, Clone)]
pub struct Harvester {
    fetcher: GitFetcher,
    base_dir: PathBuf,
}

impl Harvester {
    pub fn new(fetcher: GitFetcher, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            fetcher,
            base_dir: base_dir.into(),
        }
    }

    pub fn run(&self, raw_url: &str) -> Result<RunSummary> {
        let repo = RepoRef::resolve(raw_url)?;
        let output_dir = self.base_dir.join(repo.output_dir_name());

        info!(repository = raw_url, "processing repository");
        info!(normalized = repo.url(), "normalized URL");
        info!(output = %output_dir.display(), "output directory");

        let scratch = ScratchDir::new(self.base_dir.join(repo.scratch_dir_name()));
        let result = self.harvest(&repo, scratch.path(), &output_dir);
        scratch.cleanup();
        let (found, report) = result?;

        let output_dir = if report.is_some() {
            Some(absolute(&output_dir)?)
        } else {
            None
        };

        Ok(RunSummary {
            repository: raw_url.to_string(),
            normalized_url: repo.url().to_string(),
            identifier: repo.identifier().to_string(),
            output_dir,
            found,
            report: report.unwrap_or_default(),
        })
    }

    // Steps 2-4. Returns how many files were found and, if any were, the
    // collect report.
    fn harvest(
        &self,
        repo: &RepoRef,
        scratch: &Path,
        output_dir: &Path,
    ) -> Result<(usize, Option<CollectReport>)> {
        self.fetcher.fetch(repo.url(), scratch)?;
        info!(path = %scratch.display(), "clone finished");

        let files = markdown::find_markdown(scratch)?;
        info!(count = files.len(), "found markdown files");

        if files.is_empty() {
            info!("no markdown files in this repository");
            return Ok((0, None));
        }

        let report = markdown::collect(&files, output_dir)?;
        Ok((files.len(), Some(report)))
    }
}

fn absolute(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path)
        .with_context(|| format!("Failed to resolve output directory {}", path.display()))
}
