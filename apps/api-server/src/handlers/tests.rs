use std::sync::Arc;

use actix_web::{App, http::StatusCode, middleware::from_fn, test, web};
use serde_json::{Value, json};

use quill_infra::InMemoryPostStore;

use super::configure_routes;
use crate::observability;
use crate::state::AppState;

fn state() -> web::Data<AppState> {
    web::Data::new(AppState::with_store(Arc::new(InMemoryPostStore::new())))
}

macro_rules! app {
    () => {
        test::init_service(
            App::new()
                .wrap(from_fn(observability::request_id))
                .app_data(state())
                .configure(configure_routes),
        )
        .await
    };
}

fn post_body(title: &str, tags: &str) -> Value {
    json!({
        "title": title,
        "content": "Body text",
        "author": "Sam",
        "tags": tags,
    })
}

#[actix_web::test]
async fn test_create_get_and_list() {
    let app = app!();

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .set_json(post_body(" Hello ", "go, web , , api"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let created: Value = test::read_body_json(resp).await;
    let post = &created["data"];
    assert_eq!(post["title"], "Hello");
    assert_eq!(post["tags"], json!(["go", "web", "api"]));
    let id = post["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::get().uri(&format!("/api/posts/{id}")).to_request();
    let fetched: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(&fetched["data"], post);

    let req = test::TestRequest::get().uri("/api/posts").to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed["data"].as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn test_create_missing_fields_is_unprocessable() {
    let app = app!();

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .set_json(json!({ "title": "   ", "content": "x" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let problem: Value = test::read_body_json(resp).await;
    let detail = problem["detail"].as_str().unwrap();
    assert!(detail.contains("title"));
    assert!(detail.contains("author"));

    let req = test::TestRequest::get().uri("/api/posts").to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    assert!(listed["data"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_bad_bodies_are_bad_requests() {
    let app = app!();

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{not json")
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .set_json(json!({ "title": "a", "content": "b", "author": "c", "likes": 1 }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_invalid_and_missing_ids() {
    let app = app!();
    let missing = uuid::Uuid::new_v4();

    let req = test::TestRequest::get().uri("/api/posts/not-an-id").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get().uri(&format!("/api/posts/{missing}")).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::put()
        .uri(&format!("/api/posts/{missing}"))
        .set_json(post_body("x", ""))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::delete().uri("/api/posts/not-an-id").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_update_then_delete_twice() {
    let app = app!();

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .set_json(post_body("draft", ""))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::put()
        .uri(&format!("/api/posts/{id}"))
        .set_json(post_body("final", "rust"))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["data"]["title"], "final");
    assert_eq!(updated["data"]["created_at"], created["data"]["created_at"]);

    for _ in 0..2 {
        let req = test::TestRequest::delete().uri(&format!("/api/posts/{id}")).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);
    }

    let req = test::TestRequest::get().uri(&format!("/api/posts/{id}")).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_search() {
    let app = app!();

    for (title, tags) in [("Intro to Go", ""), ("Channels", "Go"), ("Rust", "systems")] {
        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(post_body(title, tags))
            .to_request();
        test::call_service(&app, req).await;
    }

    let req = test::TestRequest::get().uri("/api/search?q=go").to_request();
    let found: Value = test::call_and_read_body_json(&app, req).await;
    let titles: Vec<_> = found["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(titles.len(), 2);
    assert!(titles.contains(&"Intro to Go".to_string()));
    assert!(titles.contains(&"Channels".to_string()));

    for uri in ["/api/search", "/api/search?q="] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let found: Value = test::call_and_read_body_json(&app, req).await;
        assert!(found["data"].as_array().unwrap().is_empty());
    }
}

#[actix_web::test]
async fn test_request_id_is_echoed() {
    let app = app!();

    let req = test::TestRequest::get()
        .uri("/api/health")
        .insert_header(("X-Request-ID", "abc-123"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.headers().get("x-request-id").unwrap(), "abc-123");

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.headers().contains_key("x-request-id"));
}
