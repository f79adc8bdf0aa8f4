// src/markdown/mod.rs
// =============================================================================
// This module handles the Markdown files of the cloned repository.
//
// Submodules:
// - locate: Walks the clone and finds .md / .markdown files
// - collect: Copies them into one flat output folder
// =============================================================================

mod collect;
mod locate;

pub use collect::{collect, CollectReport};
pub use locate::find_markdown;
