use axum::http::StatusCode;
use sea_orm::DbErr;
use serde_json::{Value, json};

use crate::integration::TestApp;
use crate::integration::assertions::{
    assert_api_error, assert_bad_request_mentions,
};
use crate::integration::fixtures::{
    LYRICS, database, enriched_song, exec, song,
};

fn statements_text(app: TestApp) -> String {
    format!("{:?}", app.statements())
}

#[tokio::test]
async fn test_find_songs() {
    let app = TestApp::new(database().append_query_results([vec![
        song(1, "Muse", "Uprising"),
        enriched_song(2),
    ]]));

    let response = app
        .server
        .get("/songs")
        .add_query_param("group", "Muse")
        .add_query_param("page", "2")
        .add_query_param("limit", "5")
        .await;

    response.assert_status_ok();
    response.assert_json(&json!([
        { "id": 1, "group": "Muse", "song": "Uprising" },
        {
            "id": 2,
            "group": "Muse",
            "song": "Supermassive Black Hole",
            "text": LYRICS,
            "releaseDate": "2025-03-28T21:22:19Z",
            "link": "https://www.youtube.com/watch?v=Xsp3_a-PMTw",
        },
    ]));

    let log = statements_text(app);
    assert!(log.contains("Muse"), "{log}");
    assert!(log.contains("LIMIT"), "{log}");
    assert!(log.contains("OFFSET"), "{log}");
}

#[tokio::test]
async fn test_find_songs_ignores_empty_filters() {
    let app = TestApp::new(database().append_query_results([Vec::<
        entity::songs::Model,
    >::new()]));

    let response = app
        .server
        .get("/songs")
        .add_query_param("group", "")
        .add_query_param("song", "")
        .add_query_param("page", "zero")
        .await;

    response.assert_status_ok();
    response.assert_json(&json!([]));

    let log = statements_text(app);
    assert!(!log.contains("WHERE"), "{log}");
}

#[tokio::test]
async fn test_find_songs_repeated_keys_use_the_first_value() {
    let app = TestApp::new(database().append_query_results([Vec::<
        entity::songs::Model,
    >::new()]));

    let response = app
        .server
        .get("/songs")
        .add_query_param("group", "Muse")
        .add_query_param("group", "Queen")
        .add_query_param("page", "2")
        .add_query_param("page", "x")
        .await;

    response.assert_status_ok();
    response.assert_json(&json!([]));

    let log = statements_text(app);
    assert!(log.contains("Muse"), "{log}");
    assert!(!log.contains("Queen"), "{log}");
}

#[tokio::test]
async fn test_find_songs_database_failure() {
    let app = TestApp::new(
        database()
            .append_query_errors([DbErr::Custom("connection refused".into())]),
    );

    let response = app.server.get("/songs").await;

    assert_api_error(
        &response,
        StatusCode::INTERNAL_SERVER_ERROR,
        "failed to fetch songs",
    );
}

#[tokio::test]
async fn test_find_verses_paginated() {
    let app = TestApp::new(
        database().append_query_results([
            vec![enriched_song(2)],
            vec![enriched_song(2)],
        ]),
    );

    let first = app
        .server
        .get("/verse/2")
        .add_query_param("page", "1")
        .add_query_param("limit", "4")
        .await;
    first.assert_status_ok();
    first.assert_json(&json!([
        "Ooh baby, don't you know I suffer?",
        "Ooh baby, can you hear me moan?",
        "You caught me under false pretenses",
        "How long before you let me go?",
    ]));

    let second = app
        .server
        .get("/verse/2")
        .add_query_param("page", "2")
        .add_query_param("limit", "4")
        .await;
    second.assert_status_ok();
    second.assert_json(&json!(["", "Ooh", "You set my soul alight", "Ooh"]));
}

#[tokio::test]
async fn test_find_verses_past_the_end() {
    let app =
        TestApp::new(database().append_query_results([vec![enriched_song(2)]]));

    let response = app
        .server
        .get("/verse/2")
        .add_query_param("page", "50")
        .await;

    response.assert_status_ok();
    response.assert_json(&json!([]));
}

#[tokio::test]
async fn test_find_verses_repeated_keys() {
    let app =
        TestApp::new(database().append_query_results([vec![enriched_song(2)]]));

    let response = app
        .server
        .get("/verse/2")
        .add_query_param("page", "1")
        .add_query_param("page", "1")
        .add_query_param("limit", "2")
        .await;

    response.assert_status_ok();
    response.assert_json(&json!([
        "Ooh baby, don't you know I suffer?",
        "Ooh baby, can you hear me moan?",
    ]));
}

#[tokio::test]
async fn test_find_verses_page_beyond_u32() {
    let app =
        TestApp::new(database().append_query_results([vec![enriched_song(2)]]));

    let response = app
        .server
        .get("/verse/2")
        .add_query_param("page", "4294967296")
        .add_query_param("limit", "2")
        .await;

    response.assert_status_ok();
    response.assert_json(&json!([]));
}

#[tokio::test]
async fn test_find_verses_of_song_without_text() {
    let app = TestApp::new(
        database().append_query_results([vec![song(3, "Muse", "Uprising")]]),
    );

    let response = app.server.get("/verse/3").await;

    response.assert_status_ok();
    response.assert_json(&json!([]));
}

#[tokio::test]
async fn test_find_verses_not_found() {
    let app = TestApp::new(
        database().append_query_results([Vec::<entity::songs::Model>::new()]),
    );

    let response = app.server.get("/verse/99").await;

    assert_api_error(
        &response,
        StatusCode::NOT_FOUND,
        "song with id 99 not found",
    );
}

#[tokio::test]
async fn test_find_verses_id_beyond_key_range() {
    let app = TestApp::new(database());

    let response = app.server.get("/verse/3000000000").await;

    assert_api_error(
        &response,
        StatusCode::NOT_FOUND,
        "song with id 3000000000 not found",
    );

    let log = statements_text(app);
    assert_eq!(log, "[]");
}

#[tokio::test]
async fn test_find_verses_bad_id() {
    let app = TestApp::new(database());

    let response = app.server.get("/verse/abc").await;

    assert_bad_request_mentions(&response, "invalid song_id format");

    let log = statements_text(app);
    assert_eq!(log, "[]");
}

#[tokio::test]
async fn test_delete_song() {
    let app = TestApp::new(database().append_exec_results([exec(1)]));

    let response = app.server.delete("/song/4").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "message": "Song deleted" }));
}

#[tokio::test]
async fn test_delete_missing_song_is_success() {
    let app = TestApp::new(database().append_exec_results([exec(0)]));

    let response = app.server.delete("/song/404").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "message": "Song deleted" }));
}

#[tokio::test]
async fn test_delete_song_bad_id() {
    let app = TestApp::new(database());

    let response = app.server.delete("/song/four").await;

    assert_bad_request_mentions(&response, "invalid song_id format");
}

#[tokio::test]
async fn test_delete_song_id_beyond_key_range() {
    let app = TestApp::new(database());

    let response = app.server.delete("/song/3000000000").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "message": "Song deleted" }));

    let log = statements_text(app);
    assert_eq!(log, "[]");
}

#[tokio::test]
async fn test_delete_song_database_failure() {
    let app = TestApp::new(
        database().append_exec_errors([DbErr::Custom("disk full".into())]),
    );

    let response = app.server.delete("/song/4").await;

    assert_api_error(
        &response,
        StatusCode::INTERNAL_SERVER_ERROR,
        "deletion failed",
    );
}

#[tokio::test]
async fn test_update_song_merges_non_empty_fields() {
    let app = TestApp::new(
        database()
            .append_query_results([vec![enriched_song(2)]])
            .append_exec_results([exec(1)]),
    );

    let response = app
        .server
        .patch("/song/2")
        .json(&json!({ "group": "", "song": "Starlight" }))
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["message"], "Song updated");
    assert_eq!(body["result"]["id"], 2);
    assert_eq!(body["result"]["group"], "Muse");
    assert_eq!(body["result"]["song"], "Starlight");
    assert_eq!(body["result"]["text"], LYRICS);

    let log = statements_text(app);
    assert!(log.contains("UPDATE"), "{log}");
    assert!(log.contains("Starlight"), "{log}");
}

#[tokio::test]
async fn test_update_song_not_found() {
    let app = TestApp::new(
        database().append_query_results([Vec::<entity::songs::Model>::new()]),
    );

    let response = app
        .server
        .patch("/song/8")
        .json(&json!({ "group": "Muse", "song": "Starlight" }))
        .await;

    assert_api_error(&response, StatusCode::NOT_FOUND, "song with id 8 not found");
}

#[tokio::test]
async fn test_update_song_id_beyond_key_range() {
    let app = TestApp::new(database());

    let response = app
        .server
        .patch("/song/-3000000000")
        .json(&json!({ "group": "Muse", "song": "Starlight" }))
        .await;

    assert_api_error(
        &response,
        StatusCode::NOT_FOUND,
        "song with id -3000000000 not found",
    );
}

#[tokio::test]
async fn test_update_song_requires_both_fields() {
    let app = TestApp::new(database());

    let response = app
        .server
        .patch("/song/2")
        .json(&json!({ "group": "Muse" }))
        .await;

    assert_bad_request_mentions(&response, "song");
}

#[tokio::test]
async fn test_update_song_malformed_body() {
    let app = TestApp::new(database());

    let response = app
        .server
        .patch("/song/2")
        .text("{\"group\":")
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_update_song_rejects_long_group() {
    let app = TestApp::new(database());

    let response = app
        .server
        .patch("/song/2")
        .json(&json!({ "group": "x".repeat(101), "song": "" }))
        .await;

    assert_api_error(
        &response,
        StatusCode::BAD_REQUEST,
        "group must be at most 100 characters",
    );
}

#[tokio::test]
async fn test_create_song() {
    let mut app = TestApp::new(database().append_query_results([vec![song(
        7,
        "Muse",
        "Supermassive Black Hole",
    )]]));

    let response = app
        .server
        .post("/song")
        .json(&json!({ "group": "Muse", "song": "Supermassive Black Hole" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    response.assert_json(&json!({
        "message": "Song added",
        "result": { "id": 7, "group": "Muse", "song": "Supermassive Black Hole" },
    }));

    let job = app.next_job().expect("enrichment job was not queued");
    assert_eq!(job.song_id, 7);
    assert_eq!(job.group, "Muse");
    assert_eq!(job.song, "Supermassive Black Hole");
    assert!(app.next_job().is_none());
}

#[tokio::test]
async fn test_create_song_with_full_queue_still_succeeds() {
    let mut app = TestApp::with_queue_capacity(
        database().append_query_results([
            vec![song(1, "Muse", "Uprising")],
            vec![song(2, "Muse", "Starlight")],
        ]),
        1,
    );

    for title in ["Uprising", "Starlight"] {
        app.server
            .post("/song")
            .json(&json!({ "group": "Muse", "song": title }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    assert_eq!(app.next_job().map(|job| job.song_id), Some(1));
    assert!(app.next_job().is_none());
}

#[tokio::test]
async fn test_create_song_rejects_blank_group() {
    let mut app = TestApp::new(database());

    let response = app
        .server
        .post("/song")
        .json(&json!({ "group": "  ", "song": "Uprising" }))
        .await;

    assert_api_error(
        &response,
        StatusCode::BAD_REQUEST,
        "group must not be empty",
    );
    assert!(app.next_job().is_none());
}

#[tokio::test]
async fn test_create_song_missing_field() {
    let app = TestApp::new(database());

    let response = app
        .server
        .post("/song")
        .json(&json!({ "song": "Uprising" }))
        .await;

    assert_bad_request_mentions(&response, "group");
}

#[tokio::test]
async fn test_create_song_database_failure() {
    let mut app = TestApp::new(
        database().append_query_errors([DbErr::Custom("duplicate".into())]),
    );

    let response = app
        .server
        .post("/song")
        .json(&json!({ "group": "Muse", "song": "Uprising" }))
        .await;

    assert_api_error(
        &response,
        StatusCode::INTERNAL_SERVER_ERROR,
        "failed to save song",
    );
    assert!(app.next_job().is_none());
}
