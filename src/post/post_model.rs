use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub author: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

/// Create/update payload. Fields stay `Option` so a missing field is reported
/// by the validator as a per-field error instead of failing deserialization.
#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PostInput {
    #[validate(
        required(message = "author is required"),
        length(min = 1, message = "author must not be empty")
    )]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[validate(
        required(message = "title is required"),
        length(min = 1, message = "title must not be empty")
    )]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[validate(
        required(message = "description is required"),
        length(min = 1, message = "description must not be empty")
    )]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[validate(
        required(message = "imageUrl is required"),
        url(message = "imageUrl must be a valid URL")
    )]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl PostInput {
    /// Build the stored document from a payload that already passed
    /// validation. The creation time defaults to now when not supplied.
    pub fn into_post(self) -> Post {
        Post {
            id: ObjectId::new(),
            author: self.author.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            image_url: self.image_url.unwrap_or_default(),
            created_at: self.created_at.unwrap_or_else(Utc::now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::CustomError;

    fn valid_input() -> PostInput {
        PostInput {
            author: Some("Ada Lovelace".to_string()),
            title: Some("Notes on the Engine".to_string()),
            description: Some("Observations on the analytical engine".to_string()),
            image_url: Some("https://example.com/engine.png".to_string()),
            created_at: None,
        }
    }

    #[test]
    fn valid_payload_passes_validation() {
        assert!(valid_input().validate().is_ok());
    }

    #[test]
    fn missing_required_fields_are_reported_per_field() {
        let input = PostInput {
            author: None,
            title: None,
            description: Some("still here".to_string()),
            image_url: Some("https://example.com/a.png".to_string()),
            created_at: None,
        };

        let err = CustomError::from(input.validate().unwrap_err());
        let CustomError::ValidationError(fields) = err else {
            panic!("expected a validation error");
        };

        let named: Vec<&str> = fields.iter().map(|f| f.field.as_str()).collect();
        assert!(named.contains(&"author"));
        assert!(named.contains(&"title"));
        assert!(!named.contains(&"description"));
        assert!(!named.contains(&"imageUrl"));
    }

    #[test]
    fn empty_strings_fail_validation() {
        let mut input = valid_input();
        input.title = Some(String::new());

        let err = input.validate().unwrap_err();
        assert!(err.field_errors().contains_key("title"));
    }

    #[test]
    fn malformed_image_url_is_rejected_under_its_wire_name() {
        let mut input = valid_input();
        input.image_url = Some("not a url".to_string());

        let err = CustomError::from(input.validate().unwrap_err());
        let CustomError::ValidationError(fields) = err else {
            panic!("expected a validation error");
        };

        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].field, "imageUrl");
        assert_eq!(fields[0].message, "imageUrl must be a valid URL");
    }

    #[test]
    fn into_post_copies_fields_and_defaults_created_at() {
        let post = valid_input().into_post();

        assert_eq!(post.author, "Ada Lovelace");
        assert_eq!(post.title, "Notes on the Engine");
        assert_eq!(post.image_url, "https://example.com/engine.png");
        assert!(post.created_at <= Utc::now());
    }

    #[test]
    fn into_post_keeps_a_supplied_creation_time() {
        let supplied = "2024-01-15T10:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let mut input = valid_input();
        input.created_at = Some(supplied);

        assert_eq!(input.into_post().created_at, supplied);
    }

    #[test]
    fn wire_format_uses_camel_case_keys() {
        let value = serde_json::to_value(valid_input().into_post()).unwrap();

        assert!(value.get("_id").is_some());
        assert!(value.get("imageUrl").is_some());
        assert!(value.get("createdAt").is_some());
        assert!(value.get("image_url").is_none());
    }
}
