//! Reading the JSON artifacts that gather scripts leave in the data directory.

use crate::error::Result;
use crate::paths;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// One of the three files a gather script is expected to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Reviews,
    Issues,
    Commits,
}

/// Artifacts in report order.
pub const ARTIFACTS: [ArtifactKind; 3] = [
    ArtifactKind::Reviews,
    ArtifactKind::Issues,
    ArtifactKind::Commits,
];

impl ArtifactKind {
    pub fn file_name(self) -> &'static str {
        match self {
            ArtifactKind::Reviews => paths::GH_REVIEWS_JSON,
            ArtifactKind::Issues => paths::JIRA_ISSUES_JSON,
            ArtifactKind::Commits => paths::TODAYS_COMMITS_JSON,
        }
    }

    pub fn path(self, data_dir: &Path) -> PathBuf {
        data_dir.join(self.file_name())
    }
}

/// Read and decode a JSON array, failing on a missing file or bad JSON.
pub fn read_artifact<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let data = std::fs::read_to_string(path)?;
    let items: Vec<T> = serde_json::from_str(&data)?;
    Ok(items)
}

/// Like [`read_artifact`], but a missing or corrupt file logs a warning and
/// yields an empty collection.
pub fn load_artifact<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    match read_artifact(path) {
        Ok(items) => {
            debug!(path = %path.display(), count = items.len(), "loaded artifact");
            items
        }
        Err(e) => {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            warn!("could not read {name}: {e}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Commit, Issue, Review};
    use tempfile::TempDir;

    #[test]
    fn file_names_are_fixed() {
        let names: Vec<&str> = ARTIFACTS.iter().map(|k| k.file_name()).collect();
        assert_eq!(
            names,
            ["gh_reviews.json", "jira_issues.json", "todays_commits.json"]
        );
    }

    #[test]
    fn missing_files_load_as_empty() {
        let dir = TempDir::new().unwrap();
        let reviews: Vec<Review> = load_artifact(&ArtifactKind::Reviews.path(dir.path()));
        let issues: Vec<Issue> = load_artifact(&ArtifactKind::Issues.path(dir.path()));
        let commits: Vec<Commit> = load_artifact(&ArtifactKind::Commits.path(dir.path()));
        assert!(reviews.is_empty());
        assert!(issues.is_empty());
        assert!(commits.is_empty());
    }

    #[test]
    fn corrupt_file_loads_as_empty() {
        let dir = TempDir::new().unwrap();
        let path = ArtifactKind::Commits.path(dir.path());
        std::fs::write(&path, "{ not an array").unwrap();
        let commits: Vec<Commit> = load_artifact(&path);
        assert!(commits.is_empty());
        assert!(read_artifact::<Commit>(&path).is_err());
    }

    #[test]
    fn null_field_does_not_drop_the_collection() {
        let dir = TempDir::new().unwrap();
        let path = ArtifactKind::Commits.path(dir.path());
        std::fs::write(
            &path,
            r#"[{"abbreviated_commit":"abc","branch":null},{"abbreviated_commit":"def","branch":"main"}]"#,
        )
        .unwrap();
        let commits: Vec<Commit> = load_artifact(&path);
        assert_eq!(commits.len(), 2);
    }

    #[test]
    fn read_preserves_order() {
        let dir = TempDir::new().unwrap();
        let path = ArtifactKind::Commits.path(dir.path());
        std::fs::write(
            &path,
            r#"[{"abbreviated_commit":"b"},{"abbreviated_commit":"a"},{"abbreviated_commit":"b"}]"#,
        )
        .unwrap();
        let commits: Vec<Commit> = read_artifact(&path).unwrap();
        let hashes: Vec<&str> = commits.iter().map(|c| c.abbreviated_hash.as_str()).collect();
        assert_eq!(hashes, ["b", "a", "b"]);
    }
}
