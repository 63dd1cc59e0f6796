//! BibleApiSource tests against a local stand-in for the verse service.

use std::time::Duration;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use berea_verse::{BibleApiSource, Translation, VerseReference, VerseSource};

/// Spawn a throwaway server and return its base URL.
async fn spawn_service(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_resolves_verse_from_json_body() {
    let app = Router::new().route(
        "/{reference}",
        get(|| async {
            Json(serde_json::json!({
                "reference": "John 3:16",
                "text": "For God so loved the world...\n",
                "translation_id": "kjv",
            }))
        }),
    );
    let base = spawn_service(app).await;

    let source = BibleApiSource::new(base, Duration::from_secs(2)).unwrap();
    let reference = VerseReference::parse("John 3:16").unwrap();
    let verse = source.resolve(&reference, Translation::Kjv).await.unwrap();

    assert_eq!(verse.reference, "John 3:16");
    // Body text is trimmed
    assert_eq!(verse.text, "For God so loved the world...");
    assert_eq!(verse.translation, Translation::Kjv);
}

#[tokio::test]
async fn test_not_found_is_lookup_failure() {
    let app = Router::new().route(
        "/{reference}",
        get(|| async { (StatusCode::NOT_FOUND, "not found").into_response() }),
    );
    let base = spawn_service(app).await;

    let source = BibleApiSource::new(base, Duration::from_secs(2)).unwrap();
    let reference = VerseReference::parse("Nowhere 1:1").unwrap();
    let err = source
        .resolve(&reference, Translation::Kjv)
        .await
        .unwrap_err();

    assert!(matches!(err, berea_core::Error::Lookup(_)));
}

#[tokio::test]
async fn test_timeout_is_lookup_failure() {
    let app = Router::new().route(
        "/{reference}",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            "too late"
        }),
    );
    let base = spawn_service(app).await;

    let source = BibleApiSource::new(base, Duration::from_millis(200)).unwrap();
    let reference = VerseReference::parse("John 3:16").unwrap();
    let err = source
        .resolve(&reference, Translation::Kjv)
        .await
        .unwrap_err();

    assert!(matches!(err, berea_core::Error::Lookup(_)));
}

#[tokio::test]
async fn test_malformed_body_is_lookup_failure() {
    let app = Router::new().route("/{reference}", get(|| async { "not json at all" }));
    let base = spawn_service(app).await;

    let source = BibleApiSource::new(base, Duration::from_secs(2)).unwrap();
    let reference = VerseReference::parse("John 3:16").unwrap();
    let err = source
        .resolve(&reference, Translation::Kjv)
        .await
        .unwrap_err();

    assert!(matches!(err, berea_core::Error::Lookup(_)));
}
