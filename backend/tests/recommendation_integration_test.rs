//! Integration tests for recommendation endpoints
//!
//! The chat-completions upstream is replaced by a wiremock server so
//! these exercise the full booking-history path without network access.

mod common;

use axum::http::StatusCode;
use cinebook_backend::recommender::FALLBACK_TITLES;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn chat_reply(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-test",
        "choices": [
            { "index": 0, "message": { "role": "assistant", "content": content } }
        ]
    })
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_user_without_bookings_gets_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_reply("[]")))
        .expect(0)
        .mount(&server)
        .await;

    let app = common::TestApp::with_recommender_url(&server.uri()).await;
    let user = app.create_test_user().await;

    let uri = format!("/api/v1/users/{}/recommendations", user.id);
    let (status, response) = app.get(&uri).await;

    assert_eq!(status, StatusCode::OK);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["message"], "No bookings found for this user.");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_user_with_booking_gets_recommendations() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(chat_reply(r#"["Arrival", "Tenet", "Dune"]"#)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let app = common::TestApp::with_recommender_url(&server.uri()).await;
    let user = app.create_test_user().await;

    // Book a seeded show and remember which movie it was for
    let (show_id, title, genre): (i64, String, String) = sqlx::query_as(
        "SELECT s.id, m.title, m.genre FROM shows s JOIN movies m ON m.id = s.movie_id ORDER BY s.id LIMIT 1",
    )
    .fetch_one(&app.pool)
    .await
    .unwrap();

    let body = json!({ "show_id": show_id, "seats": 1 });
    let (status, _) = app
        .post_auth("/api/v1/bookings", &body.to_string(), &user.token)
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let uri = format!("/api/v1/users/{}/recommendations", user.id);
    let (status, response) = app.get(&uri).await;

    assert_eq!(status, StatusCode::OK);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["user_id"].as_i64().unwrap(), user.id);

    let watched = response["watched_movies"].as_array().unwrap();
    assert_eq!(watched.len(), 1);
    assert_eq!(watched[0]["title"], title.as_str());
    assert_eq!(watched[0]["genre"], genre.as_str());

    let recommended: Vec<String> =
        serde_json::from_value(response["recommendations"].clone()).unwrap();
    assert_eq!(recommended, vec!["Arrival", "Tenet", "Dune"]);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_rate_limited_upstream_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(429))
        .expect(1)
        .mount(&server)
        .await;

    let app = common::TestApp::with_recommender_url(&server.uri()).await;
    let user = app.create_test_user().await;

    let show_id: i64 = sqlx::query_scalar("SELECT id FROM shows ORDER BY id LIMIT 1")
        .fetch_one(&app.pool)
        .await
        .unwrap();
    let body = json!({ "show_id": show_id, "seats": 1 });
    app.post_auth("/api/v1/bookings", &body.to_string(), &user.token)
        .await;

    let uri = format!("/api/v1/users/{}/recommendations", user.id);
    let (status, response) = app.get(&uri).await;

    // Quota exhaustion degrades to the fixed list, still a 200
    assert_eq!(status, StatusCode::OK);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    let recommended: Vec<String> =
        serde_json::from_value(response["recommendations"].clone()).unwrap();
    assert_eq!(recommended, FALLBACK_TITLES);
}
