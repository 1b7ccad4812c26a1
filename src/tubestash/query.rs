//! # Condition Queries
//!
//! A query is two ordered lists of [`SearchCondition`]s: include conditions
//! AND together, exclude conditions knock out anything matching any one of
//! them. Operands are free text straight from the user, so the engine is
//! total: an empty operand is vacuously true (a half-filled condition row
//! must not break the query) and a malformed numeric operand matches
//! nothing, never errors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::model::VideoItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConditionKind {
    Rating,
    Channel,
    /// Substring over the union of comments and tags.
    Keyword,
    CommentText,
    Tag,
    HasComment,
    HypeUp,
    HypeDown,
}

impl fmt::Display for ConditionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConditionKind::Rating => "rating",
            ConditionKind::Channel => "channel",
            ConditionKind::Keyword => "keyword",
            ConditionKind::CommentText => "comment-text",
            ConditionKind::Tag => "tag",
            ConditionKind::HasComment => "has-comment",
            ConditionKind::HypeUp => "hype-up",
            ConditionKind::HypeDown => "hype-down",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for ConditionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rating" => Ok(ConditionKind::Rating),
            "channel" => Ok(ConditionKind::Channel),
            "keyword" => Ok(ConditionKind::Keyword),
            "comment-text" => Ok(ConditionKind::CommentText),
            "tag" => Ok(ConditionKind::Tag),
            "has-comment" => Ok(ConditionKind::HasComment),
            "hype-up" => Ok(ConditionKind::HypeUp),
            "hype-down" => Ok(ConditionKind::HypeDown),
            other => Err(format!("Unknown condition kind: {}", other)),
        }
    }
}

/// One predicate over a library item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCondition {
    pub kind: ConditionKind,
    pub operand: String,
}

impl SearchCondition {
    pub fn new(kind: ConditionKind, operand: impl Into<String>) -> Self {
        Self {
            kind,
            operand: operand.into(),
        }
    }

    /// Whether this condition holds for `item`. Total over all operand
    /// strings: empty operands are vacuously true, unparseable ones are
    /// never satisfied.
    pub fn matches(&self, item: &VideoItem) -> bool {
        let operand = self.operand.as_str();
        if operand.is_empty() {
            return true;
        }

        match self.kind {
            ConditionKind::Rating => {
                if operand == "unrated" {
                    return item.rating.is_none();
                }
                matches_comparison(i64::from(item.rating.unwrap_or(0)), operand)
            }
            ConditionKind::Channel => contains_ci(&item.channel, operand),
            ConditionKind::Keyword => {
                in_any_ci(&item.comments, operand) || in_tags_ci(item, operand)
            }
            ConditionKind::CommentText => in_any_ci(&item.comments, operand),
            ConditionKind::Tag => in_tags_ci(item, operand),
            ConditionKind::HasComment => match operand {
                "true" => !item.comments.is_empty(),
                "false" => item.comments.is_empty(),
                _ => false,
            },
            ConditionKind::HypeUp => matches_comparison(i64::from(item.hype_up), operand),
            ConditionKind::HypeDown => matches_comparison(i64::from(item.hype_down), operand),
        }
    }
}

/// CLI syntax: `kind:operand`, e.g. `rating:>=4`, `channel:vevo`,
/// `has-comment:false`. The operand may be empty (`tag:`).
impl FromStr for SearchCondition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, operand) = s
            .split_once(':')
            .ok_or_else(|| format!("Expected kind:operand, got '{}'", s))?;
        Ok(Self::new(ConditionKind::from_str(kind)?, operand))
    }
}

impl fmt::Display for SearchCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.operand)
    }
}

/// A named, reusable pair of include/exclude condition lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchTemplate {
    pub id: String,
    pub name: String,
    pub include: Vec<SearchCondition>,
    pub exclude: Vec<SearchCondition>,
    pub created_at: DateTime<Utc>,
}

impl SearchTemplate {
    pub fn new(
        name: impl Into<String>,
        include: Vec<SearchCondition>,
        exclude: Vec<SearchCondition>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            include,
            exclude,
            created_at: Utc::now(),
        }
    }
}

/// Evaluates a query over the library. Include conditions are applied
/// first, in list order; then an item matching any exclude condition is
/// dropped. Result order is store order.
pub fn evaluate<'a>(
    items: &'a [VideoItem],
    include: &[SearchCondition],
    exclude: &[SearchCondition],
) -> Vec<&'a VideoItem> {
    items
        .iter()
        .filter(|item| include.iter().all(|c| c.matches(item)))
        .filter(|item| !exclude.iter().any(|c| c.matches(item)))
        .collect()
}

#[derive(Debug, Clone, Copy)]
enum NumCmp {
    Ge,
    Gt,
    Le,
    Lt,
    Eq,
}

/// Parses `>=N`, `>N`, `<=N`, `<N` or bare `N`. Two-character operators are
/// checked before single-character ones. Returns `None` when no integer
/// remains after stripping operator characters.
fn parse_comparison(operand: &str) -> Option<(NumCmp, i64)> {
    let cmp = if operand.starts_with(">=") {
        NumCmp::Ge
    } else if operand.starts_with("<=") {
        NumCmp::Le
    } else if operand.starts_with('>') {
        NumCmp::Gt
    } else if operand.starts_with('<') {
        NumCmp::Lt
    } else {
        NumCmp::Eq
    };

    let digits: String = operand
        .chars()
        .filter(|c| !matches!(c, '>' | '<' | '='))
        .collect();
    let value = digits.trim().parse().ok()?;
    Some((cmp, value))
}

fn matches_comparison(value: i64, operand: &str) -> bool {
    match parse_comparison(operand) {
        Some((NumCmp::Ge, n)) => value >= n,
        Some((NumCmp::Gt, n)) => value > n,
        Some((NumCmp::Le, n)) => value <= n,
        Some((NumCmp::Lt, n)) => value < n,
        Some((NumCmp::Eq, n)) => value == n,
        None => false,
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn in_any_ci(items: &[String], needle: &str) -> bool {
    items.iter().any(|s| contains_ci(s, needle))
}

fn in_tags_ci(item: &VideoItem, needle: &str) -> bool {
    item.tags
        .as_deref()
        .map(|tags| in_any_ci(tags, needle))
        .unwrap_or(false)
}
