//! Records decoded from the gather scripts' JSON artifacts.
//!
//! Decoding is lenient: missing fields take their default, and `null` in place
//! of an object or list decodes as the empty value. Jira's REST payloads spell
//! some keys in lowercase (`issuetype`, `issuelinks`, `subtasks`); those
//! spellings are accepted as aliases.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit `null` the same as a missing field.
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ---------------------------------------------------------------------------
// GitHub reviews
// ---------------------------------------------------------------------------

/// A pull request awaiting the user's review.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Review {
    #[serde(deserialize_with = "null_default")]
    pub number: i64,
    #[serde(deserialize_with = "null_default")]
    pub repository: Repository,
    #[serde(deserialize_with = "null_default")]
    pub title: String,
    pub updated_at: Option<DateTime<FixedOffset>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Repository {
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub name_with_owner: String,
}

impl Review {
    /// `YYYY-MM-DD HH:MM:SS` in the timestamp's own offset.
    ///
    /// A missing timestamp renders as `unknown`, not as the zero time
    /// `0001-01-01 00:00:00`.
    pub fn updated_display(&self) -> String {
        match &self.updated_at {
            Some(ts) => ts.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => "unknown".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Jira issues
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Issue {
    #[serde(deserialize_with = "null_default")]
    pub key: String,
    #[serde(deserialize_with = "null_default")]
    pub fields: IssueFields,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IssueFields {
    #[serde(deserialize_with = "null_default")]
    pub summary: String,
    #[serde(deserialize_with = "null_default")]
    pub description: String,
    #[serde(deserialize_with = "null_default")]
    pub labels: Vec<String>,
    #[serde(deserialize_with = "null_default")]
    pub resolution: Named,
    #[serde(alias = "issuetype", deserialize_with = "null_default")]
    pub issue_type: IssueType,
    #[serde(deserialize_with = "null_default")]
    pub assignee: User,
    #[serde(deserialize_with = "null_default")]
    pub priority: Named,
    #[serde(deserialize_with = "null_default")]
    pub reporter: User,
    #[serde(deserialize_with = "null_default")]
    pub watches: Watches,
    #[serde(deserialize_with = "null_default")]
    pub status: Named,
    #[serde(deserialize_with = "null_default")]
    pub components: Vec<Named>,
    #[serde(deserialize_with = "null_default")]
    pub fix_versions: Vec<Named>,
    #[serde(deserialize_with = "null_default")]
    pub versions: Vec<Named>,
    #[serde(deserialize_with = "null_default")]
    pub comment: Comments,
    /// Passed through untouched; nothing renders subtasks.
    #[serde(alias = "Subtasks", deserialize_with = "null_default")]
    pub subtasks: Vec<serde_json::Value>,
    #[serde(alias = "issuelinks", deserialize_with = "null_default")]
    pub issue_links: Vec<IssueLink>,
    #[serde(deserialize_with = "null_default")]
    pub created: String,
    #[serde(deserialize_with = "null_default")]
    pub updated: String,
}

/// Any Jira object that is only ever read for its `name`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Named {
    #[serde(deserialize_with = "null_default")]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IssueType {
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub subtask: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct User {
    #[serde(deserialize_with = "null_default")]
    pub display_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Watches {
    #[serde(deserialize_with = "null_default")]
    pub is_watching: bool,
    #[serde(deserialize_with = "null_default")]
    pub watch_count: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comments {
    /// Opaque comment bodies; kept so `report --json` re-emits them.
    #[serde(deserialize_with = "null_default")]
    pub comments: serde_json::Value,
    #[serde(deserialize_with = "null_default")]
    pub total: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IssueLink {
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub link_type: LinkType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inward_issue: Option<LinkedIssue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outward_issue: Option<LinkedIssue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkType {
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub inward: String,
    #[serde(deserialize_with = "null_default")]
    pub outward: String,
}

/// The far end of an issue link. Only the shallow summary Jira embeds is
/// kept; its own links are not followed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkedIssue {
    #[serde(deserialize_with = "null_default")]
    pub key: String,
    #[serde(deserialize_with = "null_default")]
    pub fields: LinkedIssueFields,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LinkedIssueFields {
    #[serde(deserialize_with = "null_default")]
    pub summary: String,
    #[serde(deserialize_with = "null_default")]
    pub status: Named,
    #[serde(deserialize_with = "null_default")]
    pub priority: Named,
    #[serde(alias = "issuetype", deserialize_with = "null_default")]
    pub issue_type: IssueType,
}

impl Issue {
    pub fn assignee(&self) -> Option<&str> {
        non_empty(&self.fields.assignee.display_name)
    }

    pub fn priority(&self) -> Option<&str> {
        non_empty(&self.fields.priority.name)
    }
}

impl IssueLink {
    /// The linked issue, whichever direction the link points.
    pub fn linked_issue(&self) -> Option<&LinkedIssue> {
        self.inward_issue.as_ref().or(self.outward_issue.as_ref())
    }
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

// ---------------------------------------------------------------------------
// Git commits
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Commit {
    #[serde(
        rename = "abbreviated_commit",
        alias = "abbreviatedHash",
        deserialize_with = "null_default"
    )]
    pub abbreviated_hash: String,
    #[serde(deserialize_with = "null_default")]
    pub branch: String,
    #[serde(deserialize_with = "null_default")]
    pub author: Person,
    #[serde(deserialize_with = "null_default")]
    pub committer: Person,
    #[serde(deserialize_with = "null_default")]
    pub subject: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Person {
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub email: String,
    /// Kept exactly as `git log` printed it.
    #[serde(deserialize_with = "null_default")]
    pub date: String,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
