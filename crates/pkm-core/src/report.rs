//! Plain-text rendering of gathered artifacts.
//!
//! Each section is a direct, order-preserving projection of its collection:
//! no sorting, filtering, or deduplication.

use crate::artifact::{load_artifact, ArtifactKind, ARTIFACTS};
use crate::types::{Commit, Issue, Review};
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;

pub const REVIEWS_HEADER: &str = "=== GitHub Pull Request Reviews ===";
pub const REVIEWS_NONE: &str = "No pending reviews";
pub const ISSUES_HEADER: &str = "=== Jira Issues ===";
pub const ISSUES_NONE: &str = "No issues found";
pub const COMMITS_HEADER: &str = "=== Today's Git Commits ===";
pub const COMMITS_NONE: &str = "No commits found today";

/// Everything `pkm report` shows, loaded from one data directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    pub reviews: Vec<Review>,
    pub issues: Vec<Issue>,
    pub commits: Vec<Commit>,
}

impl Report {
    /// Load each artifact independently; a missing or corrupt one is warned
    /// about and left empty without affecting the others.
    pub fn load(data_dir: &Path) -> Self {
        let mut report = Report::default();
        for kind in ARTIFACTS {
            let path = kind.path(data_dir);
            match kind {
                ArtifactKind::Reviews => report.reviews = load_artifact(&path),
                ArtifactKind::Issues => report.issues = load_artifact(&path),
                ArtifactKind::Commits => report.commits = load_artifact(&path),
            }
        }
        report
    }

    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        render_reviews(out, &self.reviews)?;
        render_issues(out, &self.issues)?;
        render_commits(out, &self.commits)
    }
}

pub fn render_reviews<W: Write>(out: &mut W, reviews: &[Review]) -> io::Result<()> {
    writeln!(out, "{REVIEWS_HEADER}")?;
    if reviews.is_empty() {
        writeln!(out, "{REVIEWS_NONE}")?;
    }
    for (i, review) in reviews.iter().enumerate() {
        writeln!(out)?;
        writeln!(out, "{}. #{} - {}", i + 1, review.number, review.title)?;
        writeln!(out, "   Repository: {}", review.repository.name_with_owner)?;
        writeln!(out, "   Updated: {}", review.updated_display())?;
    }
    writeln!(out)
}

pub fn render_issues<W: Write>(out: &mut W, issues: &[Issue]) -> io::Result<()> {
    writeln!(out, "{ISSUES_HEADER}")?;
    if issues.is_empty() {
        writeln!(out, "{ISSUES_NONE}")?;
    }
    for (i, issue) in issues.iter().enumerate() {
        writeln!(out)?;
        writeln!(out, "{}. {} - {}", i + 1, issue.key, issue.fields.summary)?;
        writeln!(out, "   Status: {}", issue.fields.status.name)?;
        if let Some(assignee) = issue.assignee() {
            writeln!(out, "   Assignee: {assignee}")?;
        }
        writeln!(out, "   Type: {}", issue.fields.issue_type.name)?;
        if let Some(priority) = issue.priority() {
            writeln!(out, "   Priority: {priority}")?;
        }
    }
    writeln!(out)
}

pub fn render_commits<W: Write>(out: &mut W, commits: &[Commit]) -> io::Result<()> {
    writeln!(out, "{COMMITS_HEADER}")?;
    if commits.is_empty() {
        writeln!(out, "{COMMITS_NONE}")?;
    }
    for (i, commit) in commits.iter().enumerate() {
        writeln!(out)?;
        writeln!(
            out,
            "{}. [{}] {}",
            i + 1,
            commit.abbreviated_hash,
            commit.subject
        )?;
        writeln!(out, "   Branch: {}", commit.branch)?;
        writeln!(
            out,
            "   Author: {} <{}>",
            commit.author.name, commit.author.email
        )?;
        writeln!(out, "   Date: {}", commit.author.date)?;
    }
    writeln!(out)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
