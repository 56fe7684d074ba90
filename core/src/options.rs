//! Caller-supplied option sets and the normalization rules applied to them.
//!
//! # Design
//! Options are a loosely-typed string map rather than a struct: callers may
//! pass any keys they like, and each operation picks out the ones it
//! recognizes. Unrecognized keys are silently ignored — this keeps the
//! surface forward-compatible with callers that pass extra keys.
//!
//! Listing endpoints share one filter over a closed key set. Matching is by
//! exact key, not substring: a key literally named `beforehand` is dropped,
//! not mistaken for `before`.

use std::collections::BTreeMap;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Loosely-typed option mapping passed to client operations.
///
/// `BTreeMap` so iteration order — and therefore the built query — is
/// deterministic for identical inputs.
pub type Options = BTreeMap<String, String>;

/// Keys a listing endpoint forwards into its query string.
pub const LISTING_KEYS: [&str; 4] = ["after", "before", "limit", "section"];

/// Path segment safe set: encode control bytes plus the characters that
/// would terminate or corrupt a path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'[')
    .add(b']')
    .add(b'@')
    .add(b'%')
    .add(b'\\');

/// Extract the recognized listing keys from `options` into a query mapping.
///
/// Keys outside `LISTING_KEYS` are dropped. The input is never mutated; the
/// returned pairs are ordered by key.
pub fn listing_query(options: &Options) -> Vec<(String, String)> {
    options
        .iter()
        .filter(|(key, _)| LISTING_KEYS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Normalize a raw subreddit name into a URL-path-safe segment.
///
/// Trims whitespace and surrounding slashes, strips a leading `r/`, then
/// percent-encodes anything unsafe in a path segment. Returns an empty
/// string for input that carries no name at all (e.g. `"r/"`).
pub fn sanitize_subreddit(raw: &str) -> String {
    let name = raw.trim().trim_start_matches('/');
    let name = name.strip_prefix("r/").unwrap_or(name);
    let name = name.trim_end_matches('/');
    utf8_percent_encode(name, PATH_SEGMENT).to_string()
}
