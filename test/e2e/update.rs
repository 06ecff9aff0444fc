//! Update scenarios: PUT and PATCH /posts/{id}.

mod support;

use posts_api::{
    shape, HttpClient, PostFullUpdatePayload, PostUpdatePayload, StatusCode, UpdateService,
};
use posts_testdata::generate;
use support::MockApi;

fn update_service(api: &MockApi) -> UpdateService {
    UpdateService::new(HttpClient::new().unwrap(), &api.config())
}

#[tokio::test]
async fn put_replaces_the_post_content() {
    support::init_tracing();
    let api = MockApi::start().await;
    let update = update_service(&api);

    let payload = PostFullUpdatePayload {
        id: 5,
        title: "replaced title".to_string(),
        body: "replaced body".to_string(),
        user_id: 3,
    };
    let reply = update.put(5, &payload).await.unwrap();

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.data.id, 5);
    assert_eq!(reply.data.title, payload.title);
    assert_eq!(reply.data.body, payload.body);
    assert_eq!(reply.data.user_id, payload.user_id);
}

#[tokio::test]
async fn put_with_long_content_succeeds() {
    support::init_tracing();
    let api = MockApi::start().await;
    let update = update_service(&api);

    let payload = PostFullUpdatePayload {
        id: 11,
        title: generate::random_string(150),
        body: generate::random_string(3_000),
        user_id: 2,
    };
    let reply = update.put(11, &payload).await.unwrap();

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.data.title, payload.title);
    assert_eq!(reply.data.body, payload.body);
}

#[tokio::test]
async fn put_with_special_characters_succeeds() {
    support::init_tracing();
    let api = MockApi::start().await;
    let update = update_service(&api);

    let payload = PostFullUpdatePayload {
        id: 23,
        title: "updated !@#$%^&*()".to_string(),
        body: "updated body: áéíóú ñ çü ß 你好 🎉".to_string(),
        user_id: 4,
    };
    let reply = update.put(23, &payload).await.unwrap();

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.data.title, payload.title);
    assert_eq!(reply.data.body, payload.body);
}

#[tokio::test]
async fn put_can_move_a_post_to_a_different_owner() {
    support::init_tracing();
    let api = MockApi::start().await;
    let update = update_service(&api);

    let payload = PostFullUpdatePayload {
        id: 42,
        title: "reassigned".to_string(),
        body: "new owner".to_string(),
        user_id: 9,
    };
    let reply = update.put(42, &payload).await.unwrap();

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.data.id, 42);
    assert_eq!(reply.data.user_id, 9);
}

#[tokio::test]
async fn patch_updates_only_the_title() {
    support::init_tracing();
    let api = MockApi::start().await;
    let update = update_service(&api);

    let changes = PostUpdatePayload {
        title: Some("patched title".to_string()),
        ..Default::default()
    };
    let reply = update.patch(9, &changes).await.unwrap();

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.data["id"].as_i64(), Some(9));
    assert_eq!(reply.data["title"].as_str(), Some("patched title"));
    assert!(reply.data["body"].as_str().is_some_and(|body| !body.is_empty()));
    assert!(reply.data["userId"].as_i64().is_some());
    shape::validate_updated_post(&reply.data, &changes).unwrap();
}

#[tokio::test]
async fn patch_updates_only_the_body() {
    support::init_tracing();
    let api = MockApi::start().await;
    let update = update_service(&api);

    let changes = PostUpdatePayload {
        body: Some("patched body".to_string()),
        ..Default::default()
    };
    let reply = update.patch(14, &changes).await.unwrap();

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.data["body"].as_str(), Some("patched body"));
    assert!(reply.data["title"].as_str().is_some_and(|title| !title.is_empty()));
    shape::validate_updated_post(&reply.data, &changes).unwrap();
}

#[tokio::test]
async fn patch_updates_title_and_body_together() {
    support::init_tracing();
    let api = MockApi::start().await;
    let update = update_service(&api);

    let changes = PostUpdatePayload {
        title: Some("both fields".to_string()),
        body: Some("changed at once".to_string()),
        ..Default::default()
    };
    let reply = update.patch(27, &changes).await.unwrap();

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.data["title"].as_str(), Some("both fields"));
    assert_eq!(reply.data["body"].as_str(), Some("changed at once"));
    assert!(reply.data["userId"].as_i64().is_some());
}

#[tokio::test]
async fn patch_accepts_an_empty_title() {
    support::init_tracing();
    let api = MockApi::start().await;
    let update = update_service(&api);

    let changes = PostUpdatePayload {
        title: Some(String::new()),
        ..Default::default()
    };
    let reply = update.patch(33, &changes).await.unwrap();

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.data["title"].as_str(), Some(""));
    assert!(reply.data["body"].as_str().is_some_and(|body| !body.is_empty()));
}
