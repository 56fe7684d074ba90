//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The core
//! crate builds `HttpRequest` values and parses `HttpResponse` values without
//! ever touching the network — the caller (host) is responsible for executing
//! the actual I/O. This separation keeps the core deterministic and easy to
//! test.
//!
//! All fields use owned types (`String`, `Vec`) so values can be handed to
//! the host transport without lifetime concerns. `PartialEq` on the request
//! type lets tests compare whole descriptors.

/// HTTP method for a request.
///
/// The read/browse/search/messaging surface covered by this crate is
/// read-only, so only `Get` exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
}

/// Selects which response parser applies to a request's result.
///
/// Carried on every `HttpRequest`; `RedditClient::dispatch` matches on it
/// exhaustively, so a new variant cannot be added without also deciding how
/// it parses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    /// Response is a listing of submissions.
    Submission,
    /// Response is a listing of inbox/outbox messages.
    Message,
    /// No dedicated parser; the response is surfaced as raw JSON.
    Unspecified,
}

/// An HTTP request described as plain data.
///
/// Built by `RedditClient::build_*` methods. The caller is responsible for
/// executing this request against the network — appending `query` to the URL
/// and sending `headers` verbatim — and returning the corresponding
/// `HttpResponse`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub handler: Handler,
}

/// An HTTP response described as plain data.
///
/// Constructed by the caller after executing an `HttpRequest`, then passed
/// back to `RedditClient` for parsing.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
