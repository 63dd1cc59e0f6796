//! API shape tests — validates the JSON field names and types the route
//! handlers emit, using the real domain types where possible.

use berea_chat::ChatSession;
use berea_search::keyword_search;
use berea_study::generate_plan;
use berea_verse::{Translation, VerseText};

/// Session JSON: { id, history: [{ role, content, timestamp }] }.
#[test]
fn test_session_shape() {
    let mut session = ChatSession::new();
    session.push_user("what is faith?");

    let json = serde_json::to_value(&session).unwrap();
    assert!(json["id"].is_string());
    assert!(json["history"].is_array());

    let first = &json["history"][0];
    assert_eq!(first["role"], "assistant");
    assert!(first["content"].is_string());
    assert!(first["timestamp"].is_string());

    // current_verse is omitted while unset
    assert!(json.get("current_verse").is_none());
}

/// Resolved verse JSON: { reference, text, translation } with the
/// translation as its lowercase code.
#[test]
fn test_verse_text_shape() {
    let verse = VerseText {
        reference: "John 3:16".to_string(),
        text: "For God so loved the world...".to_string(),
        translation: Translation::Kjv,
    };

    let json = serde_json::to_value(&verse).unwrap();
    assert_eq!(json["reference"], "John 3:16");
    assert!(json["text"].is_string());
    assert_eq!(json["translation"], "kjv");
}

/// Search results serialize as [{ reference, text }] and cap at 5.
#[test]
fn test_search_results_shape() {
    let results = keyword_search("love and faith and prayer");
    assert!(results.len() <= 5);

    let json = serde_json::to_value(&results).unwrap();
    let first = &json[0];
    assert!(first["reference"].is_string());
    assert!(first["text"].is_string());
}

/// Plan days serialize as [{ day, topic, verses }] with contiguous days.
#[test]
fn test_plan_shape() {
    let plan = generate_plan("prayer", 3);
    let json = serde_json::to_value(&plan).unwrap();

    let days: Vec<u64> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["day"].as_u64().unwrap())
        .collect();
    assert_eq!(days, vec![1, 2, 3]);

    let first = &json[0];
    assert!(first["topic"].is_string());
    assert!(first["verses"].is_array());
}

/// Chat response shape: { sessionId, reply, history }.
#[test]
fn test_chat_response_shape() {
    let response = serde_json::json!({
        "sessionId": "2f0c07ba-4e72-4784-b7a4-2b7e17a3c7f1",
        "reply": "The Bible teaches us about prayer:",
        "history": [
            { "role": "assistant", "content": "Hello!", "timestamp": "2026-01-01T00:00:00Z" },
        ],
    });

    assert!(response["sessionId"].is_string());
    assert!(response["reply"].is_string());
    assert!(response["history"].is_array());
}

/// Verse lookup response shape: { verse, crossReferences }.
#[test]
fn test_verse_lookup_response_shape() {
    let response = serde_json::json!({
        "verse": {
            "reference": "John 3:16",
            "text": "For God so loved the world...",
            "translation": "kjv",
        },
        "crossReferences": ["Romans 5:8", "1 John 4:9-10", "Ephesians 2:4-5"],
    });

    assert!(response["verse"]["reference"].is_string());
    assert!(response["crossReferences"].is_array());
}
