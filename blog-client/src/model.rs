use std::convert::Infallible;
use std::str::FromStr;

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Substituted for a blank author, both on submission and on display.
pub const ANONYMOUS: &str = "Anonymous";

/// Server-assigned identifier. Treated as an opaque string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PostId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PostId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl FromStr for PostId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Display)]
#[display("Post {{ id: {}, title: {}, author: {} }}", id, title, author)]
pub struct Post {
    #[serde(rename = "_id", alias = "id")]
    pub id: PostId,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub author: String,
}

/// Body of `POST /posts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author: String,
}

/// Body of `PUT /posts/{id}`. Absent fields are left untouched by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl From<NewPost> for PostPatch {
    fn from(post: NewPost) -> Self {
        Self {
            title: Some(post.title),
            content: Some(post.content),
            author: Some(post.author),
        }
    }
}

/// Body returned by `DELETE /posts/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteConfirmation {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn post_reads_underscore_id_and_plain_id() {
        let mongo: Post = serde_json::from_value(json!({
            "_id": "65f1c0ffee",
            "title": "Hello",
            "content": "World",
            "author": "Ada",
            "__v": 0
        }))
        .unwrap();
        assert_eq!(mongo.id.as_str(), "65f1c0ffee");

        let plain: Post = serde_json::from_value(json!({
            "id": "7",
            "title": "Hello",
            "content": "World"
        }))
        .unwrap();
        assert_eq!(plain.id, PostId::from("7"));
        assert_eq!(plain.author, "");
    }

    #[test]
    fn post_without_title_is_rejected() {
        let result = serde_json::from_value::<Post>(json!({ "_id": "1", "content": "x" }));
        assert!(result.is_err());
    }

    #[test]
    fn patch_omits_absent_fields() {
        let patch = PostPatch {
            title: Some("New title".into()),
            ..PostPatch::default()
        };
        let body = serde_json::to_value(&patch).unwrap();
        assert_eq!(body, json!({ "title": "New title" }));
    }

    #[test]
    fn post_display_is_compact() {
        let post = Post {
            id: PostId::from("abc"),
            title: "T".into(),
            content: "C".into(),
            author: "A".into(),
        };
        assert_eq!(post.to_string(), "Post { id: abc, title: T, author: A }");
    }
}
