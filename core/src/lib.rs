//! Synchronous API client core for a Reddit-style read/browse/search/
//! messaging service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, making the core fully deterministic and testable.
//!
//! # Design
//! - `RedditClient` holds only a `base_url` and the in-memory `Session`.
//! - Each operation is split into `build_*` (produces a request descriptor)
//!   and `dispatch`/`parse_*` (consumes a response), so the I/O boundary is
//!   explicit.
//! - Every descriptor carries a `Handler` tag; `dispatch` matches on it
//!   exhaustively to select the response parser.
//! - Options are a loose string map; unrecognized keys are silently ignored
//!   and the caller's map is never mutated.
//! - Diagnostic events go through `tracing`; the host decides whether and
//!   where to subscribe.

pub mod client;
pub mod error;
pub mod http;
pub mod options;
pub mod session;
pub mod types;

pub use client::{MessageKind, Parsed, RedditClient};
pub use error::ApiError;
pub use http::{Handler, HttpMethod, HttpRequest, HttpResponse};
pub use options::Options;
pub use session::Session;
pub use types::{Listing, ListingData, Message, Submission, Thing};
