//! Domain DTOs and the listing envelope returned by the service.
//!
//! # Design
//! Every read endpoint wraps its payload in the same envelope:
//! `{"kind": "Listing", "data": {"children": [{"kind": …, "data": {…}}],
//! "after": …, "before": …}}`. `Listing<T>` models that shape generically so
//! submissions and messages share one deserialization path. Unknown JSON
//! fields are ignored by serde's default behavior, which keeps these types
//! tolerant of the service adding fields.

use serde::{Deserialize, Serialize};

/// A link or self post returned by browse/saved listings.
///
/// `name` is the service's fullname identifier (e.g. `t3_abc12`) and doubles
/// as the `before`/`after` token callers pass when paging manually.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Submission {
    pub id: String,
    pub name: String,
    pub title: String,
    pub author: String,
    pub subreddit: String,
    pub permalink: String,
    pub url: String,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub ups: i64,
    #[serde(default)]
    pub downs: i64,
    #[serde(default)]
    pub num_comments: u64,
    #[serde(default)]
    pub selftext: String,
    #[serde(default)]
    pub over_18: bool,
    #[serde(default)]
    pub created_utc: f64,
}

/// An inbox/outbox item: private message, comment reply, or post reply.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub id: String,
    pub name: String,
    pub author: String,
    #[serde(default)]
    pub dest: String,
    pub subject: String,
    pub body: String,
    #[serde(default)]
    pub was_comment: bool,
    #[serde(rename = "new", default)]
    pub unread: bool,
    #[serde(default)]
    pub created_utc: f64,
}

/// Envelope wrapping every listing response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Listing<T> {
    pub kind: String,
    pub data: ListingData<T>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListingData<T> {
    pub children: Vec<Thing<T>>,
    #[serde(default)]
    pub after: Option<String>,
    #[serde(default)]
    pub before: Option<String>,
}

/// One child of a listing: a typed payload tagged with its kind (`t3` for
/// submissions, `t4` for messages, …).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Thing<T> {
    pub kind: String,
    pub data: T,
}

impl<T> Listing<T> {
    /// Flatten the envelope into the payloads it carries.
    pub fn into_items(self) -> Vec<T> {
        self.data.children.into_iter().map(|child| child.data).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUBMISSION_LISTING: &str = r#"{
        "kind": "Listing",
        "data": {
            "children": [
                {
                    "kind": "t3",
                    "data": {
                        "id": "abc12",
                        "name": "t3_abc12",
                        "title": "First post",
                        "author": "alice",
                        "subreddit": "rust",
                        "permalink": "/r/rust/comments/abc12/first_post/",
                        "url": "https://example.org/",
                        "score": 42,
                        "ups": 50,
                        "downs": 8,
                        "num_comments": 7,
                        "created_utc": 1427459464.0
                    }
                }
            ],
            "after": "t3_abc12",
            "before": null
        }
    }"#;

    #[test]
    fn submission_listing_deserializes() {
        let listing: Listing<Submission> = serde_json::from_str(SUBMISSION_LISTING).unwrap();
        assert_eq!(listing.kind, "Listing");
        assert_eq!(listing.data.after.as_deref(), Some("t3_abc12"));
        assert!(listing.data.before.is_none());

        let items = listing.into_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "t3_abc12");
        assert_eq!(items[0].title, "First post");
        assert_eq!(items[0].score, 42);
        // Absent optional fields fall back to defaults.
        assert_eq!(items[0].selftext, "");
        assert!(!items[0].over_18);
    }

    #[test]
    fn submission_ignores_unknown_fields() {
        let raw = r#"{
            "id": "x", "name": "t3_x", "title": "t", "author": "a",
            "subreddit": "s", "permalink": "/p", "url": "u",
            "media_embed": {}, "approved_by": null
        }"#;
        let submission: Submission = serde_json::from_str(raw).unwrap();
        assert_eq!(submission.id, "x");
    }

    #[test]
    fn message_new_key_maps_to_unread() {
        let raw = r#"{
            "id": "m1", "name": "t4_m1", "author": "bob",
            "subject": "hi", "body": "hello", "new": true
        }"#;
        let message: Message = serde_json::from_str(raw).unwrap();
        assert!(message.unread);
        assert!(!message.was_comment);
        assert_eq!(message.dest, "");
    }

    #[test]
    fn listing_without_paging_tokens_deserializes() {
        let raw = r#"{"kind": "Listing", "data": {"children": []}}"#;
        let listing: Listing<Message> = serde_json::from_str(raw).unwrap();
        assert!(listing.data.children.is_empty());
        assert!(listing.data.after.is_none());
    }
}
