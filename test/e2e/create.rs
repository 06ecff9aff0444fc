//! Create scenarios: POST /posts.

mod support;

use posts_api::{shape, CreateService, HttpClient, PostCreatePayload, StatusCode};
use posts_testdata::generate;
use support::MockApi;

fn create_service(api: &MockApi) -> CreateService {
    CreateService::new(HttpClient::new().unwrap(), &api.config())
}

#[tokio::test]
async fn create_post_succeeds() {
    support::init_tracing();
    let api = MockApi::start().await;
    let create = create_service(&api);

    let payload = generate::unique_payload("Create");
    let reply = create.create(&payload).await.unwrap();

    assert_eq!(reply.status, StatusCode::CREATED);
    assert!(reply.data.id > 0);
    assert_eq!(reply.data.title, payload.title);
    assert_eq!(reply.data.body, payload.body);
    assert_eq!(reply.data.user_id, payload.user_id);
}

#[tokio::test]
async fn created_post_echoes_the_payload() {
    support::init_tracing();
    let api = MockApi::start().await;
    let create = create_service(&api);

    let payload = generate::unique_payload("Structure");
    let reply = create.create(&payload).await.unwrap();

    assert_eq!(reply.status, StatusCode::CREATED);
    shape::validate_created_post(&reply.data, &payload).unwrap();
}

#[tokio::test]
async fn create_with_long_content_succeeds() {
    support::init_tracing();
    let api = MockApi::start().await;
    let create = create_service(&api);

    let payload = PostCreatePayload {
        title: generate::random_string(120),
        body: generate::random_string(2_000),
        user_id: generate::random_user_id(),
    };
    let reply = create.create(&payload).await.unwrap();

    assert_eq!(reply.status, StatusCode::CREATED);
    shape::validate_created_post(&reply.data, &payload).unwrap();
}

#[tokio::test]
async fn create_with_special_characters_succeeds() {
    support::init_tracing();
    let api = MockApi::start().await;
    let create = create_service(&api);

    let payload = PostCreatePayload {
        title: format!("{} !@#$%^&*()", generate::random_string(12)),
        body: "Special chars: áéíóú ñ çü ß 你好 🎉".to_string(),
        user_id: generate::random_user_id(),
    };
    let reply = create.create(&payload).await.unwrap();

    assert_eq!(reply.status, StatusCode::CREATED);
    shape::validate_created_post(&reply.data, &payload).unwrap();
}
