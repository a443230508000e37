use std::time::Duration;

use pretty_assertions::assert_eq;
use recipe_engine::{ClientSettings, FailureKind, RecipeClient, RecipeRecord, ReqwestRecipeClient};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ReqwestRecipeClient {
    client_with(server, ClientSettings::default())
}

fn client_with(server: &MockServer, settings: ClientSettings) -> ReqwestRecipeClient {
    ReqwestRecipeClient::new(ClientSettings {
        base_url: format!("{}/api", server.uri()),
        ..settings
    })
    .expect("client")
}

fn pancakes() -> serde_json::Value {
    json!({
        "id": 2,
        "title": "Pancakes",
        "youtube_url": "https://www.youtube.com/watch?v=abcdefghijk",
        "cooking_time": "20 minutes",
        "servings": "4",
        "ingredients": ["200g flour", "2 eggs", "300ml milk"],
        "instructions": ["Whisk", "Rest", "Fry"],
        "created_at": "2024-05-01T09:30:00.123456"
    })
}

#[tokio::test]
async fn list_returns_recipes_in_server_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/recipes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            pancakes(),
            {
                "id": 1,
                "title": "Toast",
                "youtube_url": "https://youtu.be/zyxwvutsrqp",
                "cooking_time": null,
                "servings": null,
                "ingredients": ["bread"],
                "instructions": ["toast"],
                "created_at": "2024-04-01T08:00:00"
            }
        ])))
        .mount(&server)
        .await;

    let recipes = client_for(&server).list_recipes().await.expect("list ok");

    assert_eq!(recipes.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2, 1]);
    assert_eq!(
        recipes[0],
        RecipeRecord {
            id: 2,
            title: "Pancakes".to_string(),
            youtube_url: "https://www.youtube.com/watch?v=abcdefghijk".to_string(),
            cooking_time: Some("20 minutes".to_string()),
            servings: Some("4".to_string()),
            ingredients: vec![
                "200g flour".to_string(),
                "2 eggs".to_string(),
                "300ml milk".to_string()
            ],
            instructions: vec!["Whisk".to_string(), "Rest".to_string(), "Fry".to_string()],
            created_at: Some("2024-05-01T09:30:00.123456".to_string()),
        }
    );
    assert_eq!(recipes[1].cooking_time, None);
}

#[tokio::test]
async fn list_drops_malformed_entries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/recipes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 9, "title": "No ingredients", "youtube_url": "https://youtu.be/a", "instructions": [] },
            pancakes(),
            { "id": "ten", "title": "Bad id", "youtube_url": "https://youtu.be/b", "ingredients": [], "instructions": [] }
        ])))
        .mount(&server)
        .await;

    let recipes = client_for(&server).list_recipes().await.expect("list ok");

    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].title, "Pancakes");
}

#[tokio::test]
async fn list_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/recipes"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server).list_recipes().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(500));
}

#[tokio::test]
async fn list_fails_when_body_is_not_an_array() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/recipes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "recipes": [] })))
        .mount(&server)
        .await;

    let err = client_for(&server).list_recipes().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Decode);
}

#[tokio::test]
async fn list_rejects_oversized_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/recipes"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "application/json")
                .set_body_string("[          ]"),
        )
        .mount(&server)
        .await;

    let settings = ClientSettings {
        max_bytes: 4,
        ..ClientSettings::default()
    };
    let err = client_with(&server, settings).list_recipes().await.unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::TooLarge {
            max_bytes: 4,
            actual: Some(12)
        }
    );
}

#[tokio::test]
async fn list_times_out_on_slow_server() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/recipes"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!([])),
        )
        .mount(&server)
        .await;

    let settings = ClientSettings {
        request_timeout: Duration::from_millis(50),
        ..ClientSettings::default()
    };
    let err = client_with(&server, settings).list_recipes().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn get_recipe_fetches_one() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/recipes/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pancakes()))
        .mount(&server)
        .await;

    let recipe = client_for(&server).get_recipe(2).await.expect("get ok");
    assert_eq!(recipe.title, "Pancakes");
}

#[tokio::test]
async fn process_posts_url_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/recipes/process"))
        .and(body_json(json!({ "url": "https://youtu.be/abcdefghijk" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(pancakes()))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .process_url("https://youtu.be/abcdefghijk")
        .await
        .expect("process ok");
}

#[tokio::test]
async fn process_failure_carries_server_error_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/recipes/process"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(json!({
                "error": "Recipe already exists",
                "recipe": pancakes()
            })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .process_url("https://www.youtube.com/watch?v=abcdefghijk")
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(409));
    assert_eq!(err.server_message.as_deref(), Some("Recipe already exists"));
}

#[tokio::test]
async fn process_failure_without_json_has_no_server_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/recipes/process"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .process_url("https://youtu.be/abcdefghijk")
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(502));
    assert_eq!(err.server_message, None);
}

#[tokio::test]
async fn delete_hits_recipe_path() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/recipes/42"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).delete_recipe(42).await.expect("delete ok");
}

#[tokio::test]
async fn delete_of_missing_recipe_fails() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/recipes/42"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client_for(&server).delete_recipe(42).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(404));
}

#[tokio::test]
async fn unreachable_server_is_a_network_failure() {
    let server = MockServer::start().await;
    let base_url = format!("{}/api", server.uri());
    drop(server);

    let client = ReqwestRecipeClient::new(ClientSettings {
        base_url,
        connect_timeout: Duration::from_millis(200),
        ..ClientSettings::default()
    })
    .expect("client");
    let err = client.list_recipes().await.unwrap_err();
    assert!(matches!(err.kind, FailureKind::Network | FailureKind::Timeout));
}
