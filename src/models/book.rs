//! Book model

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};
use utoipa::ToSchema;

use super::Record;

/// Book record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    /// Id of the publisher. Not checked against the publishers collection.
    pub publisher_id: i64,
}

impl Record for Book {
    const NAME: &'static str = "book";
    const DISPLAY_NAME: &'static str = "Book";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

/// Create / update book request
///
/// Missing or null fields fall back to their zero value; `id` is accepted but ignored.
#[serde_as]
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct BookPayload {
    pub id: Option<i64>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub title: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub author: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub publisher_id: i64,
}

impl From<BookPayload> for Book {
    fn from(payload: BookPayload) -> Self {
        Self {
            id: 0,
            title: payload.title,
            author: payload.author,
            publisher_id: payload.publisher_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_missing_fields_default() {
        let payload: BookPayload = serde_json::from_str(r#"{"title":"X"}"#).unwrap();
        let book = Book::from(payload);
        assert_eq!(book.title, "X");
        assert_eq!(book.author, "");
        assert_eq!(book.publisher_id, 0);
    }

    #[test]
    fn test_payload_null_field_defaults() {
        let payload: BookPayload =
            serde_json::from_str(r#"{"title":null,"author":"Y","publisher_id":null}"#).unwrap();
        assert_eq!(payload.title, "");
        assert_eq!(payload.publisher_id, 0);
    }

    #[test]
    fn test_payload_wrong_type_rejected() {
        assert!(serde_json::from_str::<BookPayload>(r#"{"publisher_id":"nine"}"#).is_err());
        assert!(serde_json::from_str::<BookPayload>(r#"{"id":"one"}"#).is_err());
        assert!(serde_json::from_str::<BookPayload>(r#"[1, 2]"#).is_err());
    }

    #[test]
    fn test_serialized_shape() {
        let book = Book {
            id: 1,
            title: "Go in Action".to_string(),
            author: "William Kennedy".to_string(),
            publisher_id: 1,
        };
        assert_eq!(
            serde_json::to_string(&book).unwrap(),
            r#"{"id":1,"title":"Go in Action","author":"William Kennedy","publisher_id":1}"#
        );
    }
}
