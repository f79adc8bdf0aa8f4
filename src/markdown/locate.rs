// src/markdown/locate.rs
// =============================================================================
// This module finds every Markdown file inside the cloned repository.
//
// We walk the whole tree with the `walkdir` crate and keep files ending in
// .md or .markdown (any case). Two directories are never entered:
// - .git: git's own object store, nothing readable in there
// - node_modules: vendored JavaScript packages, often thousands of READMEs
//
// Symlinks are followed, so a link to a directory is walked like the directory
// itself and a link to a file counts as a file. A link that loops back to one
// of its own ancestors is logged and skipped.
//
// The order of the results is whatever the filesystem hands back. We
// deliberately don't sort, the collector numbers duplicates in this order.
// =============================================================================

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::error::{HarvestError, Result};

// Directory names pruned from the walk (exact match, not patterns)
const SKIPPED_DIRS: [&str; 2] = [".git", "node_modules"];

// Lowercase extensions that count as Markdown
const MARKDOWN_EXTENSIONS: [&str; 2] = ["md", "markdown"];

// Recursively finds Markdown files under `root`
//
// Returned paths are `root` joined with the relative location, so a relative
// root gives relative paths and an absolute root gives absolute ones.
//
// Example:
//   root/README.md             -> included
//   root/docs/GUIDE.Markdown   -> included
//   root/.git/description.md   -> skipped (pruned dir)
//   root/src/main.rs           -> skipped (not Markdown)
pub fn find_markdown(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_skipped_dir(entry));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.loop_ancestor().is_some() => {
                warn!(error = %e, "skipping symlink loop");
                continue;
            }
            Err(e) => {
                let path = e.path().unwrap_or(root).to_path_buf();
                return Err(HarvestError::io(path, io::Error::from(e)));
            }
        };

        if entry.file_type().is_file() && is_markdown(entry.path()) {
            files.push(entry.into_path());
        }
    }

    debug!(root = %root.display(), count = files.len(), "located markdown files");
    Ok(files)
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| SKIPPED_DIRS.contains(&name))
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .is_some_and(|ext| MARKDOWN_EXTENSIONS.contains(&ext.as_str()))
}
