//! Mock of the Reddit read API, serving fixed listing fixtures.
//!
//! Routes cover the surface the core client targets: the front page,
//! subreddit listings, search, the default/subscribed subreddit lists,
//! per-user saved items, and the five message boxes. Responses use the
//! service's listing envelope; DTOs are defined independently from the core
//! crate so integration tests catch schema drift.
//!
//! Subreddit and message-box paths end in a `.json` suffix inside the final
//! segment, which the router cannot capture on its own, so those handlers
//! take the whole segment and strip the suffix themselves.

use std::collections::HashMap;

use axum::{
    extract::{Path, Query},
    http::{HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::net::TcpListener;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Submission {
    pub id: String,
    pub name: String,
    pub title: String,
    pub author: String,
    pub subreddit: String,
    pub permalink: String,
    pub url: String,
    pub score: i64,
    pub ups: i64,
    pub downs: i64,
    pub num_comments: u64,
    pub selftext: String,
    pub over_18: bool,
    pub created_utc: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub name: String,
    pub author: String,
    pub dest: String,
    pub subject: String,
    pub body: String,
    pub was_comment: bool,
    #[serde(rename = "new")]
    pub unread: bool,
    pub created_utc: f64,
}

/// Subreddits with listings; anything else browses to 404.
pub const KNOWN_SUBREDDITS: [&str; 2] = ["rust", "programming"];

/// Message boxes the messaging endpoints serve.
pub const MESSAGE_KINDS: [&str; 5] = ["sent", "inbox", "unread", "comments", "selfreply"];

pub fn app() -> Router {
    Router::new()
        .route("/.json", get(front_page))
        .route("/r/{sub}", get(subreddit_or_search))
        .route("/r/{sub}/search.json", get(search_in_subreddit))
        .route("/reddits.json", get(default_subreddits))
        .route("/reddits/mine.json", get(subscribed_subreddits))
        .route("/user/{user}/saved/.json", get(saved_submissions))
        .route("/message/{tail}", get(message_box))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Wrap `items` in the listing envelope with the given child kind.
pub fn listing<T: Serialize>(kind: &str, items: Vec<T>) -> Value {
    let children: Vec<Value> = items
        .into_iter()
        .map(|item| json!({"kind": kind, "data": item}))
        .collect();
    json!({
        "kind": "Listing",
        "data": {"children": children, "after": null, "before": null}
    })
}

fn submission(index: usize, subreddit: &str) -> Submission {
    Submission {
        id: format!("post{index}"),
        name: format!("t3_post{index}"),
        title: format!("Post {index} in {subreddit}"),
        author: format!("author{index}"),
        subreddit: subreddit.to_string(),
        permalink: format!("/r/{subreddit}/comments/post{index}/"),
        url: format!("https://example.org/{index}"),
        score: 10 * index as i64,
        ups: 12 * index as i64,
        downs: 2 * index as i64,
        num_comments: index as u64,
        selftext: String::new(),
        over_18: false,
        created_utc: 1427459464.0 + index as f64,
    }
}

fn limited<T>(mut items: Vec<T>, params: &HashMap<String, String>) -> Vec<T> {
    if let Some(limit) = params.get("limit").and_then(|v| v.parse::<usize>().ok()) {
        items.truncate(limit);
    }
    items
}

async fn front_page(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let posts = vec![
        submission(1, "rust"),
        submission(2, "pics"),
        submission(3, "funny"),
    ];
    Json(listing("t3", limited(posts, &params)))
}

async fn subreddit_or_search(
    Path(tail): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Value>, StatusCode> {
    if tail == "search.json" {
        return Ok(Json(search_results(None, &params)));
    }
    let name = tail.strip_suffix(".json").ok_or(StatusCode::NOT_FOUND)?;
    if !KNOWN_SUBREDDITS.contains(&name) {
        return Err(StatusCode::NOT_FOUND);
    }
    let posts = vec![
        submission(1, name),
        submission(2, name),
        submission(3, name),
    ];
    Ok(Json(listing("t3", limited(posts, &params))))
}

async fn search_in_subreddit(
    Path(subreddit): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    Json(search_results(Some(&subreddit), &params))
}

/// One hit per search; the query term lands in the title and the sort order
/// is echoed in `selftext` so clients can assert what reached the server.
fn search_results(subreddit: Option<&str>, params: &HashMap<String, String>) -> Value {
    let term = params.get("q").map(String::as_str).unwrap_or("");
    let sort = params.get("sort").map(String::as_str).unwrap_or("");
    let mut hit = submission(1, subreddit.unwrap_or("all"));
    hit.title = if term.is_empty() {
        "Search result".to_string()
    } else {
        format!("Search result for {term}")
    };
    hit.selftext = format!("sort={sort}");
    listing("t3", vec![hit])
}

fn subreddit_names(names: &[&str], params: &HashMap<String, String>) -> Value {
    let entries: Vec<Value> = names
        .iter()
        .map(|name| json!({"display_name": name, "url": format!("/r/{name}/")}))
        .collect();
    listing("t5", limited(entries, params))
}

async fn default_subreddits(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    Json(subreddit_names(&["pics", "funny", "askreddit"], &params))
}

async fn subscribed_subreddits(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    Json(subreddit_names(&["rust", "programming"], &params))
}

async fn saved_submissions(
    Path(user): Path<String>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Result<Json<Value>, StatusCode> {
    if !headers.contains_key("cookie") {
        return Err(StatusCode::FORBIDDEN);
    }
    let mut saved = vec![submission(1, "rust"), submission(2, "programming")];
    for post in &mut saved {
        post.author = user.clone();
    }
    Ok(Json(listing("t3", limited(saved, &params))))
}

async fn message_box(Path(tail): Path<String>) -> Result<Json<Value>, StatusCode> {
    let kind = tail.strip_suffix(".json").ok_or(StatusCode::NOT_FOUND)?;
    if !MESSAGE_KINDS.contains(&kind) {
        return Err(StatusCode::NOT_FOUND);
    }
    let messages: Vec<Message> = (1..=2)
        .map(|index| Message {
            id: format!("{kind}{index}"),
            name: format!("t4_{kind}{index}"),
            author: if kind == "sent" { "me".to_string() } else { format!("sender{index}") },
            dest: if kind == "sent" { format!("recipient{index}") } else { "me".to_string() },
            subject: format!("{kind} message {index}"),
            body: format!("body of {kind} message {index}"),
            was_comment: kind == "comments" || kind == "selfreply",
            unread: kind == "unread",
            created_utc: 1427459464.0 + index as f64,
        })
        .collect();
    Ok(Json(listing("t4", messages)))
}
