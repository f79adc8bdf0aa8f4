// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The tool takes a single positional argument, the repository URL, plus a
// few optional flags. Everything configurable lives here; there is no config
// file. Log verbosity is controlled separately through RUST_LOG.
// =============================================================================

use std::path::PathBuf;

use clap::Parser;

pub const USAGE: &str = "Usage: md-harvest <REPO_URL>";
pub const EXAMPLE: &str = "Example: md-harvest https://github.com/microsoft/markitdown";

#[derive(Parser, Debug)]
#[command(
    name = "md-harvest",
    version,
    about = "Clone a git repository and collect all of its Markdown files into one folder",
    long_about = "md-harvest clones a repository into a temporary directory, finds every .md and \
                  .markdown file (skipping .git and node_modules), copies them into a flat \
                  <owner>-<repo>_markdown_files folder and removes the temporary clone.",
    after_help = EXAMPLE
)]
pub struct Cli {
    /// Repository URL (e.g., https://github.com/user/repo)
    ///
    /// Browser URLs such as .../tree/main or .../blob/main/README.md are
    /// accepted and cut down to the repository itself.
    ///
    /// Optional here so a missing URL gets our own usage message.
    pub repo_url: Option<String>,

    /// Directory in which the temporary clone and the output folder are created
    #[arg(long, default_value = ".")]
    pub base_dir: PathBuf,

    /// git executable used to clone the repository
    #[arg(long, default_value = "git")]
    pub git: String,

    /// Print a JSON summary of the run instead of the human-readable one
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["md-harvest", "https://github.com/user/repo"]).unwrap();
        assert_eq!(cli.repo_url.as_deref(), Some("https://github.com/user/repo"));
        assert_eq!(cli.base_dir, PathBuf::from("."));
        assert_eq!(cli.git, "git");
        assert!(!cli.json);
    }

    #[test]
    fn test_missing_url_parses() {
        let cli = Cli::try_parse_from(["md-harvest"]).unwrap();
        assert!(cli.repo_url.is_none());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "md-harvest",
            "--json",
            "--base-dir",
            "/tmp/out",
            "--git",
            "/usr/local/bin/git",
            "https://gitlab.com/group/project",
        ])
        .unwrap();
        assert!(cli.json);
        assert_eq!(cli.base_dir, PathBuf::from("/tmp/out"));
        assert_eq!(cli.git, "/usr/local/bin/git");
    }

    #[test]
    fn test_extra_positional_is_rejected() {
        assert!(Cli::try_parse_from(["md-harvest", "a", "b"]).is_err());
    }
}
