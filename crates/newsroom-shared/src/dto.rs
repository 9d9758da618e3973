//! Data Transfer Objects - request/response types for the API.
//!
//! Request fields are optional so that a missing value is reported by
//! validation instead of failing JSON deserialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

// ---------------------------------------------------------------------------
// News
// ---------------------------------------------------------------------------

/// Request to publish a news item.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateNewsRequest {
    #[validate(
        required(message = "News title is required"),
        length(min = 1, max = 30, message = "News title must be between 1 and 30 characters")
    )]
    pub title: Option<String>,

    #[validate(
        required(message = "News content is required"),
        length(min = 1, max = 255, message = "News content must be between 1 and 255 characters")
    )]
    pub content: Option<String>,

    #[validate(required(message = "News author id is required"))]
    pub author_id: Option<i64>,

    #[serde(default)]
    pub tag_ids: Vec<i64>,
}

/// Partial update of a news item. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateNewsRequest {
    #[validate(length(min = 1, max = 30, message = "News title must be between 1 and 30 characters"))]
    pub title: Option<String>,

    #[validate(length(
        min = 1,
        max = 255,
        message = "News content must be between 1 and 255 characters"
    ))]
    pub content: Option<String>,

    pub author_id: Option<i64>,

    /// Replaces the whole tag set when present.
    pub tag_ids: Option<Vec<i64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author_id: i64,
    pub tag_ids: Vec<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Author
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateAuthorRequest {
    #[validate(
        required(message = "Author name is required"),
        length(min = 3, max = 15, message = "Author name must be between 3 and 15 characters")
    )]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateAuthorRequest {
    #[validate(length(min = 3, max = 15, message = "Author name must be between 3 and 15 characters"))]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorResponse {
    pub id: i64,
    pub name: String,
}

// ---------------------------------------------------------------------------
// Comment
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(
        required(message = "Comment content is required"),
        length(min = 5, max = 255, message = "Comment content must be between 5 and 255 characters")
    )]
    pub content: Option<String>,

    #[validate(required(message = "Comment news id is required"))]
    pub news_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateCommentRequest {
    #[validate(length(
        min = 5,
        max = 255,
        message = "Comment content must be between 5 and 255 characters"
    ))]
    pub content: Option<String>,

    /// Moves the comment to another news item.
    pub news_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentResponse {
    pub id: i64,
    pub content: String,
    pub news_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Tag
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateTagRequest {
    #[validate(
        required(message = "Tag name is required"),
        length(min = 3, max = 15, message = "Tag name must be between 3 and 15 characters")
    )]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateTagRequest {
    #[validate(length(min = 3, max = 15, message = "Tag name must be between 3 and 15 characters"))]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagResponse {
    pub id: i64,
    pub name: String,
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

/// Sort direction over a resource's designated sort field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Query parameters accepted by every list endpoint.
///
/// Paging only applies when `page`, `limit` and `sort` are all present.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub sort: Option<SortOrder>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_news_reports_every_missing_field() {
        let errors = CreateNewsRequest::default().validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("title"));
        assert!(fields.contains_key("content"));
        assert!(fields.contains_key("author_id"));
    }

    #[test]
    fn test_create_news_accepts_valid_payload() {
        let req = CreateNewsRequest {
            title: Some("Breaking".to_string()),
            content: Some("Something happened".to_string()),
            author_id: Some(1),
            tag_ids: vec![],
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_create_news_accepts_single_character_fields() {
        let req = CreateNewsRequest {
            title: Some("A".to_string()),
            content: Some("B".to_string()),
            author_id: Some(1),
            tag_ids: vec![],
        };
        assert!(req.validate().is_ok());

        let empty = CreateNewsRequest {
            title: Some(String::new()),
            ..req
        };
        assert!(empty.validate().unwrap_err().field_errors().contains_key("title"));
    }

    #[test]
    fn test_update_news_skips_absent_fields() {
        assert!(UpdateNewsRequest::default().validate().is_ok());

        let too_long = UpdateNewsRequest {
            title: Some("t".repeat(31)),
            ..Default::default()
        };
        let errors = too_long.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));

        let short = UpdateNewsRequest {
            content: Some("B".to_string()),
            ..Default::default()
        };
        assert!(short.validate().is_ok());
    }

    #[test]
    fn test_author_name_length_counts_characters() {
        let req = CreateAuthorRequest {
            name: Some("Zoë".to_string()),
        };
        assert!(req.validate().is_ok());

        let req = CreateAuthorRequest {
            name: Some("a".repeat(16)),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_page_query_parses_sort_order() {
        let query: PageQuery =
            serde_json::from_str(r#"{"page":2,"limit":3,"sort":"desc"}"#).unwrap();
        assert_eq!(query.page, Some(2));
        assert_eq!(query.limit, Some(3));
        assert_eq!(query.sort, Some(SortOrder::Desc));

        assert!(serde_json::from_str::<PageQuery>(r#"{"sort":"sideways"}"#).is_err());
    }
}
