//! # Domain Models
//!
//! These structs represent the core entities of Flatboard.
//! Boards are identified by a store-assigned, monotonically increasing integer.

use std::ops::RangeInclusive;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Identifier of a board. Issued by the store, never reused.
pub type BoardId = u64;

pub const TITLE_LEN: RangeInclusive<usize> = 2..=100;
pub const CONTENT_LEN: RangeInclusive<usize> = 1..=5000;
pub const AUTHOR_LEN: RangeInclusive<usize> = 2..=50;

/// A single forum post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: BoardId,
    pub title: String,
    pub content: String,
    /// Fixed at creation.
    pub author: String,
    pub created_at: DateTime<Utc>,
    /// Refreshed on every update; never moves backwards.
    pub updated_at: DateTime<Utc>,
}

impl Board {
    /// Builds a freshly created board where both timestamps are `now`.
    pub fn new(id: BoardId, input: CreateBoard, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: input.title,
            content: input.content,
            author: input.author,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merges a patch over this board. Only `title` and `content` can change.
    pub fn apply(&mut self, patch: UpdateBoard, now: DateTime<Utc>) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        self.updated_at = now.max(self.updated_at);
    }
}

/// Payload for creating a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateBoard {
    pub title: String,
    pub content: String,
    pub author: String,
}

impl CreateBoard {
    pub fn validate(&self) -> Result<()> {
        check_len("title", &self.title, TITLE_LEN)?;
        check_len("content", &self.content, CONTENT_LEN)?;
        check_len("author", &self.author, AUTHOR_LEN)
    }
}

/// Partial update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateBoard {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl UpdateBoard {
    pub fn validate(&self) -> Result<()> {
        if let Some(title) = &self.title {
            check_len("title", title, TITLE_LEN)?;
        }
        if let Some(content) = &self.content {
            check_len("content", content, CONTENT_LEN)?;
        }
        Ok(())
    }
}

fn check_len(field: &str, value: &str, bounds: RangeInclusive<usize>) -> Result<()> {
    let len = value.chars().count();
    if bounds.contains(&len) {
        return Ok(());
    }
    Err(AppError::ValidationError(format!(
        "{field} must be between {} and {} characters, got {len}",
        bounds.start(),
        bounds.end()
    )))
}
