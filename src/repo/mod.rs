// src/repo/mod.rs
// =============================================================================
// This module deals with the remote repository itself.
//
// Submodules:
// - reference: Normalizing the URL and deriving the "owner-repo" identifier
// - fetch: Cloning the repository with the git CLI
// - scratch: Owning (and finally deleting) the temporary clone
// =============================================================================

mod fetch;
mod reference;
mod scratch;

pub use fetch::GitFetcher;
pub use scratch::ScratchDir;
pub use reference::RepoRef;
