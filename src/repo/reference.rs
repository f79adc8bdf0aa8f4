// src/repo/reference.rs
// =============================================================================
// Turns whatever URL the user pasted into something we can clone and name.
//
// Two steps:
// - normalize(): cut the URL down to scheme://host/owner/repo, dropping
//   browser paths like /tree/main, /blob/main/README.md or /commit/<sha>
// - identifier_for(): derive "owner-repo", used to name the scratch clone
//   and the output folder
//
// identifier_for() is the only validation gate in the whole pipeline. Once we
// have an identifier, everything downstream assumes it is a safe path segment.
// =============================================================================

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::error::{HarvestError, Result};

// Host segment: anything with a dot (github.com, git.example.org:8443) or a
// bare localhost. Owner and repo are restricted to the characters git hosts
// allow in names, so the identifier is always a valid file name.
const HOST: &str = r"(?:^|//)(?:[^/@]+@)?(?:[^/]+\.[^/]+|localhost(?::\d+)?)";
const NAME: &str = r"[A-Za-z0-9_.-]+?";

// Tried in order, first match wins. The first form allows a trailing path
// (and .git), the second one only the exact owner/repo.
static IDENTIFIER_PATTERNS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(&format!(r"{HOST}/({NAME})/({NAME})(?:\.git)?(?:[/?#].*)?$"))
            .expect("valid identifier pattern"),
        Regex::new(&format!(r"{HOST}/({NAME})/({NAME})$")).expect("valid identifier pattern"),
    ]
});

/// A resolved repository: the URL to clone plus its `owner-repo` identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    url: String,
    identifier: String,
}

impl RepoRef {
    /// Normalizes `raw_url` and derives its identifier.
    pub fn resolve(raw_url: &str) -> Result<Self> {
        let url = normalize(raw_url);
        let identifier = identifier_for(&url)?;
        Ok(Self { url, identifier })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Name of the temporary clone directory: `temp_<owner>-<repo>`
    pub fn scratch_dir_name(&self) -> String {
        format!("temp_{}", self.identifier)
    }

    /// Name of the output directory: `<owner>-<repo>_markdown_files`
    pub fn output_dir_name(&self) -> String {
        format!("{}_markdown_files", self.identifier)
    }
}

// Normalizes a repository URL
//
// Examples:
//   "https://github.com/rust-lang/rust/"            -> "https://github.com/rust-lang/rust"
//   "https://github.com/rust-lang/rust/tree/master" -> "https://github.com/rust-lang/rust"
//   "github.com/rust-lang/rust"                     -> unchanged (no scheme)
//
// URLs that don't look like scheme://host/owner/repo[/...] are returned as-is
// (minus one trailing slash), and identifier_for() decides whether they are usable.
pub fn normalize(url: &str) -> String {
    let url = url.strip_suffix('/').unwrap_or(url);

    let Ok(parsed) = Url::parse(url) else {
        return url.to_string();
    };

    let Some(host) = parsed.host_str().filter(|h| !h.is_empty()) else {
        return url.to_string();
    };

    let mut segments = match parsed.path_segments() {
        Some(segments) => segments,
        None => return url.to_string(),
    };

    match (segments.next(), segments.next()) {
        (Some(owner), Some(repo)) if !owner.is_empty() && !repo.is_empty() => {
            let port = parsed.port().map(|p| format!(":{p}")).unwrap_or_default();
            // Keep credentials embedded in the URL, git needs them to clone
            let userinfo = match (parsed.username(), parsed.password()) {
                ("", None) => String::new(),
                (user, None) => format!("{user}@"),
                (user, Some(password)) => format!("{user}:{password}@"),
            };
            format!(
                "{}://{}{}{}/{}/{}",
                parsed.scheme(),
                userinfo,
                host,
                port,
                owner,
                repo
            )
        }
        _ => url.to_string(),
    }
}

// Derives the "owner-repo" identifier from a (normalized) URL
//
// Returns HarvestError::InvalidReference when neither pattern matches,
// e.g. for "https://github.com/just-an-owner".
pub fn identifier_for(url: &str) -> Result<String> {
    for pattern in IDENTIFIER_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(url) {
            let owner = &caps[1];
            let repo = &caps[2];
            if is_dot_segment(owner) || is_dot_segment(repo) {
                break;
            }
            return Ok(format!("{owner}-{repo}"));
        }
    }

    Err(HarvestError::InvalidReference {
        url: url.to_string(),
    })
}

fn is_dot_segment(name: &str) -> bool {
    name == "." || name == ".."
}
