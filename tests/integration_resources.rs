use mediadesk_client::client::RequestOptions;
use mediadesk_client::resources::movies::MovieInput;
use mediadesk_client::session::{MemoryStore, Session};
use serde_json::Value;
use std::sync::Arc;

mod common;

fn logged_in(app: &common::TestApp) -> mediadesk_client::client::ApiClient {
    app.client_with(Arc::new(MemoryStore::with_session(Session {
        token: Some(app.state.current_access_token()),
        refresh_token: Some(app.state.current_refresh_token()),
        user: None,
    })))
}

#[tokio::test]
async fn movies_crud_roundtrip() {
    let app = common::TestApp::spawn().await;
    let client = logged_in(&app);
    let opts = RequestOptions::default();

    let movies = client.movies().list(&opts).await.unwrap();
    assert_eq!(movies.len(), 2);
    assert_eq!(movies[0].title, "Heat");
    assert_eq!(movies[1].release_year, Some(1985));

    let input = MovieInput {
        title: "Stalker".to_string(),
        release_year: Some(1979),
        ..Default::default()
    };
    let created = client.movies().create(&input, &opts).await.unwrap();
    assert_eq!(created["id"], 42);
    assert_eq!(created["title"], "Stalker");
    // Unset optional fields never reach the wire.
    assert!(created.get("description").is_none());

    let updated = client.movies().update(7, &input, &opts).await.unwrap();
    assert_eq!(updated["id"], 7);

    // Empty response body decodes as null.
    let deleted = client.movies().delete(7, &opts).await.unwrap();
    assert_eq!(deleted, Value::Null);
}

#[tokio::test]
async fn channels_list_uses_backend_route_casing() {
    let app = common::TestApp::spawn().await;
    let client = logged_in(&app);

    let channels = client.channels().list(&RequestOptions::default()).await.unwrap();
    assert_eq!(channels[0].name, "News 24");
    assert_eq!(channels[0].category.as_deref(), Some("news"));
}

#[tokio::test]
async fn users_decode_timestamps() {
    let app = common::TestApp::spawn().await;
    let client = logged_in(&app);

    let users = client.users().list(&RequestOptions::default()).await.unwrap();
    assert_eq!(users[0].email, common::EMAIL);
    assert_eq!(users[0].is_active, Some(true));
    assert_eq!(users[0].created_at.unwrap().year(), 2026);
}

#[tokio::test]
async fn dashboard_stats_decode() {
    let app = common::TestApp::spawn().await;
    let client = logged_in(&app);

    let stats = client.dashboard().stats(&RequestOptions::default()).await.unwrap();
    assert_eq!(stats.total_movies, Some(2543));
    assert_eq!(stats.active_subscriptions, Some(3521));
}

#[tokio::test]
async fn resource_calls_refresh_like_any_other_request() {
    let app = common::TestApp::spawn().await;
    let client = app.client_with(Arc::new(MemoryStore::with_session(Session {
        token: Some("expired-token".to_string()),
        refresh_token: Some(app.state.current_refresh_token()),
        user: None,
    })));

    let stats = client.dashboard().stats(&RequestOptions::default()).await.unwrap();
    assert_eq!(stats.total_series, Some(487));
    assert_eq!(app.state.refresh_calls.load(std::sync::atomic::Ordering::SeqCst), 1);
}
