//! Shared types between the feedback board server and the board UI
//!
//! These types mirror the JSON the server renders into the page and the
//! payloads exchanged with `/api/v1/posts`. Field names follow the server's
//! camelCase wire format.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ============================================================================
// Users
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "../../board-ui/src/types/generated.ts")]
pub enum UserRole {
    #[default]
    Visitor,
    Collaborator,
    Administrator,
}

impl UserRole {
    /// Collaborators and administrators may edit and respond to posts.
    pub fn is_collaborator(self) -> bool {
        matches!(self, UserRole::Collaborator | UserRole::Administrator)
    }
}

/// Author reference attached to posts, comments and responses
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../../board-ui/src/types/generated.ts")]
pub struct User {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default, rename = "avatarURL")]
    pub avatar_url: Option<String>,
}

// ============================================================================
// Posts
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "../../board-ui/src/types/generated.ts")]
pub enum PostStatus {
    #[default]
    Open,
    Planned,
    Started,
    Completed,
    Declined,
    Duplicate,
    Deleted,
}

impl PostStatus {
    pub fn title(self) -> &'static str {
        match self {
            PostStatus::Open => "Open",
            PostStatus::Planned => "Planned",
            PostStatus::Started => "Started",
            PostStatus::Completed => "Completed",
            PostStatus::Declined => "Declined",
            PostStatus::Duplicate => "Duplicate",
            PostStatus::Deleted => "Deleted",
        }
    }

    /// CSS modifier used by the status badge
    pub fn slug(self) -> &'static str {
        match self {
            PostStatus::Open => "open",
            PostStatus::Planned => "planned",
            PostStatus::Started => "started",
            PostStatus::Completed => "completed",
            PostStatus::Declined => "declined",
            PostStatus::Duplicate => "duplicate",
            PostStatus::Deleted => "deleted",
        }
    }
}

/// Post a duplicate was merged into
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../../board-ui/src/types/generated.ts")]
pub struct OriginalPost {
    pub number: i64,
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub status: PostStatus,
}

/// Staff response attached to a post when its status changes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../../board-ui/src/types/generated.ts")]
pub struct PostResponse {
    #[serde(default)]
    pub text: Option<String>,
    pub responded_on: DateTime<Utc>,
    pub user: User,
    #[serde(default)]
    pub original: Option<OriginalPost>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../../board-ui/src/types/generated.ts")]
pub struct Post {
    pub id: i64,
    /// Per-tenant sequence number, the key used by the posts API
    pub number: i64,
    #[serde(default)]
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_on: DateTime<Utc>,
    pub user: User,
    #[serde(default)]
    pub status: PostStatus,
    #[serde(default)]
    pub response: Option<PostResponse>,
    #[serde(default)]
    pub votes_count: i64,
    #[serde(default)]
    pub has_voted: bool,
    /// Slugs of the tags assigned to this post
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Post {
    /// Description text, treating a missing description as empty
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Copy of this post carrying a new title and description.
    pub fn with_content(&self, title: impl Into<String>, description: impl Into<String>) -> Post {
        Post {
            title: title.into(),
            description: Some(description.into()),
            ..self.clone()
        }
    }
}

// ============================================================================
// Comments and Tags
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../../board-ui/src/types/generated.ts")]
pub struct Comment {
    pub id: i64,
    pub content: String,
    pub created_on: DateTime<Utc>,
    pub user: User,
    #[serde(default)]
    pub edited_on: Option<DateTime<Utc>>,
    #[serde(default)]
    pub edited_by: Option<User>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../../board-ui/src/types/generated.ts")]
pub struct Tag {
    pub id: i64,
    pub name: String,
    pub slug: String,
    /// Hex color without the leading `#`
    pub color: String,
    #[serde(default)]
    pub is_public: bool,
}

// ============================================================================
// Session
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../../board-ui/src/types/generated.ts")]
pub struct SessionUser {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: UserRole,
    /// Privilege flag; either this or a collaborator `role` opens the gate
    #[serde(default)]
    pub is_collaborator: bool,
}

impl SessionUser {
    pub fn is_collaborator(&self) -> bool {
        self.is_collaborator || self.role.is_collaborator()
    }
}

/// Viewer session as rendered by the server. Read-only on the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../../board-ui/src/types/generated.ts")]
pub struct Session {
    #[serde(default)]
    pub is_authenticated: bool,
    #[serde(default)]
    pub user: Option<SessionUser>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn signed_in(user: SessionUser) -> Self {
        Self {
            is_authenticated: true,
            user: Some(user),
        }
    }

    /// Whether post actions (edit, respond) should be offered.
    ///
    /// This only hides controls; the server enforces the actual permission.
    pub fn can_manage_posts(&self) -> bool {
        self.is_authenticated
            && self
                .user
                .as_ref()
                .is_some_and(SessionUser::is_collaborator)
    }
}

// ============================================================================
// Page Data
// ============================================================================

/// Props of the show-post page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../../board-ui/src/types/generated.ts")]
pub struct ShowPostProps {
    pub post: Post,
    #[serde(default)]
    pub subscribed: bool,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

/// Everything the server renders into the page's `server-data` script tag
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../../board-ui/src/types/generated.ts")]
pub struct ServerData {
    #[serde(default)]
    pub session: Session,
    pub props: ShowPostProps,
}

// ============================================================================
// API Types
// ============================================================================

/// Title/description update for a single post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatePost {
    pub number: i64,
    pub title: String,
    pub description: String,
}

impl UpdatePost {
    pub fn body(&self) -> UpdatePostRequest {
        UpdatePostRequest {
            title: self.title.clone(),
            description: self.description.clone(),
        }
    }
}

/// Body of `PUT /api/v1/posts/{number}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../board-ui/src/types/generated.ts")]
pub struct UpdatePostRequest {
    pub title: String,
    pub description: String,
}

/// One validation or processing message. `field` is absent for messages
/// that do not belong to a specific input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../board-ui/src/types/generated.ts")]
pub struct ErrorItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub message: String,
}

/// Error payload returned by a failed API call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default, TS)]
#[ts(export, export_to = "../../board-ui/src/types/generated.ts")]
pub struct Failure {
    #[serde(default)]
    pub errors: Vec<ErrorItem>,
}

impl Failure {
    /// Failure with a single message not bound to any field
    pub fn general(message: impl Into<String>) -> Self {
        Self {
            errors: vec![ErrorItem {
                field: None,
                message: message.into(),
            }],
        }
    }

    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            errors: vec![ErrorItem {
                field: Some(field.into()),
                message: message.into(),
            }],
        }
    }

    pub fn messages_for<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.errors
            .iter()
            .filter(move |e| e.field.as_deref() == Some(field))
            .map(|e| e.message.as_str())
    }

    pub fn general_messages(&self) -> impl Iterator<Item = &str> {
        self.errors
            .iter()
            .filter(|e| e.field.is_none())
            .map(|e| e.message.as_str())
    }

    /// All messages joined for logging
    pub fn summary(&self) -> String {
        if self.errors.is_empty() {
            return "unknown failure".to_string();
        }
        self.errors
            .iter()
            .map(|e| match &e.field {
                Some(field) => format!("{field}: {}", e.message),
                None => e.message.clone(),
            })
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

impl std::error::Error for Failure {}
