//! Per-endpoint row types and projections
//!
//! Field paths mirror the raw API shapes: dotted paths descend into
//! nested objects (`commit.tree.sha`), list projections pick one
//! sub-field out of each element (`assignees[].login`).

use super::TableRow;
use crate::error::{Error, Result};
use rusqlite::types::Value as SqlValue;
use serde_json::Value;

// ============================================================================
// Projection helpers
// ============================================================================

/// Descend a dotted path, requiring every step to exist.
fn lookup<'a>(item: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(item, |value, key| value.get(key))
}

/// A required string at `path`. Absent or null fails the projection.
fn require_str(endpoint: &str, item: &Value, path: &str) -> Result<String> {
    lookup(item, path)
        .and_then(Value::as_str)
        .map(String::from)
        .ok_or_else(|| Error::mapping(endpoint, path))
}

/// A required integer at `path`.
fn require_i64(endpoint: &str, item: &Value, path: &str) -> Result<i64> {
    lookup(item, path)
        .and_then(Value::as_i64)
        .ok_or_else(|| Error::mapping(endpoint, path))
}

/// An optional string at `path`: absent and null both map to `None`.
fn optional_str(item: &Value, path: &str) -> Option<String> {
    lookup(item, path).and_then(Value::as_str).map(String::from)
}

/// The `sub` field of a nullable object at `field` (e.g. a commit's
/// `author.login` when the platform could not resolve the git identity).
fn nullable_object_str(item: &Value, field: &str, sub: &str) -> Option<String> {
    item.get(field)
        .and_then(|obj| obj.get(sub))
        .and_then(Value::as_str)
        .map(String::from)
}

/// Project a required list's elements to one sub-field each and join
/// them with commas. An empty list yields `""`, never null.
fn join_list(endpoint: &str, item: &Value, field: &str, sub: &str) -> Result<String> {
    let list = item
        .get(field)
        .and_then(Value::as_array)
        .ok_or_else(|| Error::mapping(endpoint, field))?;

    let parts: Vec<&str> = list
        .iter()
        .map(|element| {
            element
                .get(sub)
                .and_then(Value::as_str)
                .ok_or_else(|| Error::mapping(endpoint, format!("{field}.{sub}")))
        })
        .collect::<Result<_>>()?;

    Ok(parts.join(","))
}

fn text(value: &str) -> SqlValue {
    SqlValue::Text(value.to_string())
}

fn nullable_text(value: &Option<String>) -> SqlValue {
    value.as_ref().map_or(SqlValue::Null, |v| text(v))
}

// ============================================================================
// Contributors
// ============================================================================

/// One row of the `contributors` table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContributorRow {
    pub id: i64,
    pub node_id: String,
    pub login: String,
    pub contributions: i64,
}

impl ContributorRow {
    /// Project a raw contributor record.
    pub fn from_raw(item: &Value) -> Result<Self> {
        const EP: &str = "contributors";
        Ok(Self {
            id: require_i64(EP, item, "id")?,
            node_id: require_str(EP, item, "node_id")?,
            login: require_str(EP, item, "login")?,
            contributions: require_i64(EP, item, "contributions")?,
        })
    }
}

impl TableRow for ContributorRow {
    const TABLE: &'static str = "contributors";
    const COLUMNS: &'static [&'static str] = &["id", "node_id", "login", "contributions"];

    fn values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::Integer(self.id),
            text(&self.node_id),
            text(&self.login),
            SqlValue::Integer(self.contributions),
        ]
    }
}

// ============================================================================
// Commits
// ============================================================================

/// One row of the `commits` table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRow {
    pub sha: String,
    pub tree_sha: String,
    /// Parent hashes in order, comma-joined
    pub parents_sha: String,
    pub node_id: String,
    /// Resolved author login; null when the platform cannot match the
    /// raw git identity to an account
    pub author: Option<String>,
    pub date_authored: String,
    /// Resolved committer login; nullable like `author`
    pub committer: Option<String>,
    pub date_committed: String,
    pub message: String,
    pub comments: i64,
}

impl CommitRow {
    /// Project a raw commit record.
    pub fn from_raw(item: &Value) -> Result<Self> {
        const EP: &str = "commits";
        Ok(Self {
            sha: require_str(EP, item, "sha")?,
            tree_sha: require_str(EP, item, "commit.tree.sha")?,
            parents_sha: join_list(EP, item, "parents", "sha")?,
            node_id: require_str(EP, item, "node_id")?,
            author: nullable_object_str(item, "author", "login"),
            date_authored: require_str(EP, item, "commit.author.date")?,
            committer: nullable_object_str(item, "committer", "login"),
            date_committed: require_str(EP, item, "commit.committer.date")?,
            message: require_str(EP, item, "commit.message")?,
            comments: require_i64(EP, item, "commit.comment_count")?,
        })
    }
}

impl TableRow for CommitRow {
    const TABLE: &'static str = "commits";
    const COLUMNS: &'static [&'static str] = &[
        "sha",
        "tree_sha",
        "parents_sha",
        "node_id",
        "author",
        "date_authored",
        "committer",
        "date_committed",
        "message",
        "comments",
    ];

    fn values(&self) -> Vec<SqlValue> {
        vec![
            text(&self.sha),
            text(&self.tree_sha),
            text(&self.parents_sha),
            text(&self.node_id),
            nullable_text(&self.author),
            text(&self.date_authored),
            nullable_text(&self.committer),
            text(&self.date_committed),
            text(&self.message),
            SqlValue::Integer(self.comments),
        ]
    }
}

// ============================================================================
// Issues
// ============================================================================

/// One row of the `issues` table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueRow {
    pub id: i64,
    pub node_id: String,
    pub number: i64,
    /// Lifecycle state, `open` or `closed`
    pub state: String,
    pub title: String,
    pub body: Option<String>,
    /// Assignee logins, comma-joined
    pub assignees: String,
    /// Label names, comma-joined
    pub labels: String,
    pub comments: i64,
    pub created_by: String,
    pub date_created: String,
    pub date_updated: String,
    pub date_closed: Option<String>,
}

impl IssueRow {
    /// Project a raw issue record.
    pub fn from_raw(item: &Value) -> Result<Self> {
        const EP: &str = "issues";
        Ok(Self {
            id: require_i64(EP, item, "id")?,
            node_id: require_str(EP, item, "node_id")?,
            number: require_i64(EP, item, "number")?,
            state: require_str(EP, item, "state")?,
            title: require_str(EP, item, "title")?,
            body: optional_str(item, "body"),
            assignees: join_list(EP, item, "assignees", "login")?,
            labels: join_list(EP, item, "labels", "name")?,
            comments: require_i64(EP, item, "comments")?,
            created_by: require_str(EP, item, "user.login")?,
            date_created: require_str(EP, item, "created_at")?,
            date_updated: require_str(EP, item, "updated_at")?,
            date_closed: optional_str(item, "closed_at"),
        })
    }
}

impl TableRow for IssueRow {
    const TABLE: &'static str = "issues";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "node_id",
        "number",
        "state",
        "title",
        "body",
        "assignees",
        "labels",
        "comments",
        "created_by",
        "date_created",
        "date_updated",
        "date_closed",
    ];

    fn values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::Integer(self.id),
            text(&self.node_id),
            SqlValue::Integer(self.number),
            text(&self.state),
            text(&self.title),
            nullable_text(&self.body),
            text(&self.assignees),
            text(&self.labels),
            SqlValue::Integer(self.comments),
            text(&self.created_by),
            text(&self.date_created),
            text(&self.date_updated),
            nullable_text(&self.date_closed),
        ]
    }
}

// ============================================================================
// Pull requests
// ============================================================================

/// One row of the `pulls` table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRow {
    pub id: i64,
    pub node_id: String,
    pub number: i64,
    pub state: String,
    pub title: String,
    pub body: Option<String>,
    /// Assignee logins, comma-joined
    pub assignees: String,
    /// Requested reviewer logins, comma-joined
    pub reviewers: String,
    /// Label names, comma-joined
    pub labels: String,
    pub created_by: String,
    pub date_created: String,
    pub date_updated: String,
    pub date_closed: Option<String>,
    pub date_merged: Option<String>,
    pub merge_sha: Option<String>,
    pub head_sha: String,
    pub base_sha: String,
}

impl PullRow {
    /// Project a raw pull-request record.
    pub fn from_raw(item: &Value) -> Result<Self> {
        const EP: &str = "pulls";
        Ok(Self {
            id: require_i64(EP, item, "id")?,
            node_id: require_str(EP, item, "node_id")?,
            number: require_i64(EP, item, "number")?,
            state: require_str(EP, item, "state")?,
            title: require_str(EP, item, "title")?,
            body: optional_str(item, "body"),
            assignees: join_list(EP, item, "assignees", "login")?,
            reviewers: join_list(EP, item, "requested_reviewers", "login")?,
            labels: join_list(EP, item, "labels", "name")?,
            created_by: require_str(EP, item, "user.login")?,
            date_created: require_str(EP, item, "created_at")?,
            date_updated: require_str(EP, item, "updated_at")?,
            date_closed: optional_str(item, "closed_at"),
            date_merged: optional_str(item, "merged_at"),
            merge_sha: optional_str(item, "merge_commit_sha"),
            head_sha: require_str(EP, item, "head.sha")?,
            base_sha: require_str(EP, item, "base.sha")?,
        })
    }
}

impl TableRow for PullRow {
    const TABLE: &'static str = "pulls";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "node_id",
        "number",
        "state",
        "title",
        "body",
        "assignees",
        "reviewers",
        "labels",
        "created_by",
        "date_created",
        "date_updated",
        "date_closed",
        "date_merged",
        "merge_sha",
        "head_sha",
        "base_sha",
    ];

    fn values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::Integer(self.id),
            text(&self.node_id),
            SqlValue::Integer(self.number),
            text(&self.state),
            text(&self.title),
            nullable_text(&self.body),
            text(&self.assignees),
            text(&self.reviewers),
            text(&self.labels),
            text(&self.created_by),
            text(&self.date_created),
            text(&self.date_updated),
            nullable_text(&self.date_closed),
            nullable_text(&self.date_merged),
            nullable_text(&self.merge_sha),
            text(&self.head_sha),
            text(&self.base_sha),
        ]
    }
}
