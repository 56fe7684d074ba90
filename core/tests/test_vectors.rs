//! Verify build/dispatch behavior against JSON test vectors stored in
//! `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and expected dispatch results. Response bodies are stored as JSON objects
//! and serialized before parsing, which keeps the vectors readable and avoids
//! escaping listings inside strings.

use reddit_core::{ApiError, Handler, HttpMethod, Options, Parsed, RedditClient};

const BASE_URL: &str = "http://localhost:3000";

fn client() -> RedditClient {
    RedditClient::new(BASE_URL)
}

/// Parse the handler tag string from test vectors into `Handler`.
fn parse_handler(s: &str) -> Handler {
    match s {
        "Submission" => Handler::Submission,
        "Message" => Handler::Message,
        "Unspecified" => Handler::Unspecified,
        other => panic!("unknown handler: {other}"),
    }
}

fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        other => panic!("unknown method: {other}"),
    }
}

fn vector_options(case: &serde_json::Value) -> Options {
    case["options"]
        .as_object()
        .map(|map| {
            map.iter()
                .map(|(k, v)| (k.clone(), v.as_str().unwrap().to_string()))
                .collect()
        })
        .unwrap_or_default()
}

fn assert_request(name: &str, req: &reddit_core::HttpRequest, expected: &serde_json::Value) {
    assert_eq!(
        req.method,
        parse_method(expected["method"].as_str().unwrap()),
        "{name}: method"
    );
    assert_eq!(
        req.path,
        format!("{BASE_URL}{}", expected["path"].as_str().unwrap()),
        "{name}: path"
    );

    let expected_query: Vec<(String, String)> = expected["query"]
        .as_array()
        .unwrap()
        .iter()
        .map(|pair| {
            let pair = pair.as_array().unwrap();
            (
                pair[0].as_str().unwrap().to_string(),
                pair[1].as_str().unwrap().to_string(),
            )
        })
        .collect();
    assert_eq!(req.query, expected_query, "{name}: query");

    assert_eq!(
        req.handler,
        parse_handler(expected["handler"].as_str().unwrap()),
        "{name}: handler"
    );
}

fn simulated_response(case: &serde_json::Value) -> reddit_core::HttpResponse {
    let sim = &case["simulated_response"];
    reddit_core::HttpResponse {
        status: sim["status"].as_u64().unwrap() as u16,
        headers: Vec::new(),
        body: serde_json::to_string(&sim["body"]).unwrap(),
    }
}

// ---------------------------------------------------------------------------
// Browse
// ---------------------------------------------------------------------------

#[test]
fn browse_test_vectors() {
    let raw = include_str!("../../test-vectors/browse.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let subreddit = case["subreddit"].as_str().unwrap();
        let opts = vector_options(case);

        let req = c.build_browse(subreddit, &opts);
        assert_request(name, &req, &case["expected_request"]);

        let result = c.dispatch(req.handler, simulated_response(case));
        if let Some(expected_error) = case.get("expected_error") {
            let err = result.unwrap_err();
            match expected_error.as_str().unwrap() {
                "NotFound" => assert!(matches!(err, ApiError::NotFound), "{name}: expected NotFound"),
                other => panic!("{name}: unknown expected_error: {other}"),
            }
            continue;
        }

        let Parsed::Submissions(posts) = result.unwrap() else {
            panic!("{name}: expected submissions");
        };
        let titles: Vec<&str> = posts.iter().map(|post| post.title.as_str()).collect();
        let expected_titles: Vec<&str> = case["expected_titles"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t.as_str().unwrap())
            .collect();
        assert_eq!(titles, expected_titles, "{name}: titles");
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[test]
fn search_test_vectors() {
    let raw = include_str!("../../test-vectors/search.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let terms = case["terms"].as_str();
        let opts = vector_options(case);

        let req = c.build_search(terms, &opts);
        assert_request(name, &req, &case["expected_request"]);

        // No dedicated handler: dispatch must hand back the body as raw JSON.
        let Parsed::Json(value) = c.dispatch(req.handler, simulated_response(case)).unwrap()
        else {
            panic!("{name}: expected raw json");
        };
        assert_eq!(value, case["simulated_response"]["body"], "{name}: passthrough");
    }
}

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

#[test]
fn message_test_vectors() {
    let raw = include_str!("../../test-vectors/messages.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();

        let req = match case["operation"].as_str().unwrap() {
            "sent_messages" => c.build_sent_messages(),
            "received_messages" => c.build_received_messages(),
            "unread_messages" => c.build_unread_messages(),
            "comments" => c.build_comments(),
            "post_replies" => c.build_post_replies(),
            other => panic!("{name}: unknown operation: {other}"),
        };
        assert_request(name, &req, &case["expected_request"]);

        let Parsed::Messages(messages) = c.dispatch(req.handler, simulated_response(case)).unwrap()
        else {
            panic!("{name}: expected messages");
        };
        let subjects: Vec<&str> = messages.iter().map(|m| m.subject.as_str()).collect();
        let expected_subjects: Vec<&str> = case["expected_subjects"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s.as_str().unwrap())
            .collect();
        assert_eq!(subjects, expected_subjects, "{name}: subjects");
    }
}
