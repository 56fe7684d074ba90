//! Request builder and response dispatcher for the read API.
//!
//! # Design
//! `RedditClient` holds a `base_url` and the in-memory `Session`; it carries
//! no other state between calls. Each operation is split into a `build_*`
//! method that produces an `HttpRequest` descriptor and a parse method that
//! consumes an `HttpResponse`. The caller executes the actual HTTP
//! round-trip, keeping the core deterministic and free of I/O dependencies.
//!
//! Build methods are pure: the caller's options are read, never mutated, and
//! identical inputs against an unchanged session always yield identical
//! descriptors. Every descriptor carries exactly one `Handler` tag;
//! `dispatch` matches on it exhaustively to select the parser.

use tracing::debug;

use crate::error::ApiError;
use crate::http::{Handler, HttpMethod, HttpRequest, HttpResponse};
use crate::options::{listing_query, sanitize_subreddit, Options};
use crate::session::Session;
use crate::types::{Listing, Message, Submission};

/// The five message boxes exposed by the messaging endpoints.
///
/// Each maps to exactly one `/message/{kind}.json` path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Sent,
    Inbox,
    Unread,
    Comments,
    SelfReply,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Sent => "sent",
            MessageKind::Inbox => "inbox",
            MessageKind::Unread => "unread",
            MessageKind::Comments => "comments",
            MessageKind::SelfReply => "selfreply",
        }
    }
}

/// Typed result of dispatching a response by its handler tag.
#[derive(Debug, Clone, PartialEq)]
pub enum Parsed {
    Submissions(Vec<Submission>),
    Messages(Vec<Message>),
    /// Default parsing for requests built without a dedicated handler.
    Json(serde_json::Value),
}

/// Synchronous client for the read/browse/search/messaging endpoints.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round-trip between `build_*` and `dispatch`/`parse_*`.
#[derive(Debug, Clone)]
pub struct RedditClient {
    base_url: String,
    session: Session,
}

impl RedditClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            session: Session::new(),
        }
    }

    pub fn with_credentials(base_url: &str, user: &str, password: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            session: Session::with_credentials(user, password),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Mutable session access, for the external login collaborator.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Browse submissions on a subreddit, or the front page when `subreddit`
    /// carries no name. The name is sanitized here and nowhere else.
    ///
    /// Recognized options: `limit`, `before`, `after`, `section`.
    pub fn build_browse(&self, subreddit: &str, options: &Options) -> HttpRequest {
        let query = listing_query(options);
        let name = sanitize_subreddit(subreddit);
        let path = if name.is_empty() {
            "/.json".to_string()
        } else {
            format!("/r/{name}.json")
        };
        self.request(&path, query, Vec::new(), Handler::Submission)
    }

    /// Build the saved-submissions request for the session user, or for the
    /// `user` option when a `cookie` option authenticates the call instead.
    ///
    /// Fails with `ApiError::NotAuthorized` when neither branch is
    /// satisfied; no request descriptor is produced in that case.
    pub fn build_saved(&self, options: &Options) -> Result<HttpRequest, ApiError> {
        let query = listing_query(options);
        if self.session.is_authenticated() {
            if let Some(user) = self.session.user() {
                let path = format!("/user/{user}/saved/.json");
                return Ok(self.request(&path, query, Vec::new(), Handler::Submission));
            }
        }
        if let (Some(cookie), Some(user)) = (options.get("cookie"), options.get("user")) {
            let path = format!("/user/{user}/saved/.json");
            let headers = vec![("cookie".to_string(), cookie.clone())];
            return Ok(self.request(&path, query, headers, Handler::Submission));
        }
        Err(ApiError::NotAuthorized)
    }

    /// The session user's subscribed subreddits, or the default set when the
    /// call is anonymous. Only the `limit` option is forwarded.
    pub fn build_mine(&self, options: &Options) -> HttpRequest {
        let mut query = Vec::new();
        if let Some(limit) = options.get("limit") {
            query.push(("limit".to_string(), limit.clone()));
        }
        let cookie = options.get("cookie");
        let path = if self.session.is_authenticated() || cookie.is_some() {
            "/reddits/mine.json"
        } else {
            "/reddits.json"
        };
        let headers = match cookie {
            Some(cookie) => vec![("cookie".to_string(), cookie.clone())],
            None => Vec::new(),
        };
        self.request(path, query, headers, Handler::Unspecified)
    }

    /// Search, optionally restricted to the subreddit named by the `in`
    /// option. `sort` defaults to `relevance` only when the key is absent.
    /// No sanitization is applied to the subreddit name here.
    pub fn build_search(&self, terms: Option<&str>, options: &Options) -> HttpRequest {
        let subreddit = options
            .get("in")
            .map(String::as_str)
            .filter(|name| !name.is_empty());

        let mut query = Vec::new();
        let sort = options
            .get("sort")
            .cloned()
            .unwrap_or_else(|| "relevance".to_string());
        query.push(("sort".to_string(), sort));
        if subreddit.is_some() {
            query.push(("restrict_sr".to_string(), "1".to_string()));
        }
        if let Some(terms) = terms {
            query.push(("q".to_string(), terms.to_string()));
        }

        let path = match subreddit {
            Some(name) => format!("/r/{name}/search.json"),
            None => "/r/search.json".to_string(),
        };
        self.request(&path, query, Vec::new(), Handler::Unspecified)
    }

    /// Messages the session user sent.
    pub fn build_sent_messages(&self) -> HttpRequest {
        self.build_messages(MessageKind::Sent)
    }

    /// Messages the session user received.
    pub fn build_received_messages(&self) -> HttpRequest {
        self.build_messages(MessageKind::Inbox)
    }

    /// Received messages not yet read.
    pub fn build_unread_messages(&self) -> HttpRequest {
        self.build_messages(MessageKind::Unread)
    }

    /// Comment replies to the session user's comments.
    pub fn build_comments(&self) -> HttpRequest {
        self.build_messages(MessageKind::Comments)
    }

    /// Replies to the session user's posts.
    pub fn build_post_replies(&self) -> HttpRequest {
        self.build_messages(MessageKind::SelfReply)
    }

    fn build_messages(&self, kind: MessageKind) -> HttpRequest {
        let path = format!("/message/{}.json", kind.as_str());
        self.request(&path, Vec::new(), Vec::new(), Handler::Message)
    }

    /// Route a response to the parser named by its request's handler tag.
    pub fn dispatch(&self, handler: Handler, response: HttpResponse) -> Result<Parsed, ApiError> {
        debug!(?handler, status = response.status, "dispatching response");
        match handler {
            Handler::Submission => Ok(Parsed::Submissions(self.parse_submissions(response)?)),
            Handler::Message => Ok(Parsed::Messages(self.parse_messages(response)?)),
            Handler::Unspecified => Ok(Parsed::Json(self.parse_json(response)?)),
        }
    }

    pub fn parse_submissions(&self, response: HttpResponse) -> Result<Vec<Submission>, ApiError> {
        check_status(&response)?;
        let listing: Listing<Submission> = serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))?;
        Ok(listing.into_items())
    }

    pub fn parse_messages(&self, response: HttpResponse) -> Result<Vec<Message>, ApiError> {
        check_status(&response)?;
        let listing: Listing<Message> = serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))?;
        Ok(listing.into_items())
    }

    /// Default parsing when no dedicated handler applies: the body as raw
    /// JSON.
    pub fn parse_json(&self, response: HttpResponse) -> Result<serde_json::Value, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    fn request(
        &self,
        path: &str,
        query: Vec<(String, String)>,
        headers: Vec<(String, String)>,
        handler: Handler,
    ) -> HttpRequest {
        let request = HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}{path}", self.base_url),
            query,
            headers,
            handler,
        };
        debug!(path = %request.path, handler = ?request.handler, "built request descriptor");
        request
    }
}

/// Map non-200 status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.status == 200 {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
