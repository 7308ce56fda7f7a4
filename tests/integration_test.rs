/// Integration tests for the instances endpoint and the terminal client's
/// fetch path, with the upstream inventory swapped for canned collaborators.
use std::sync::Arc;

use async_trait::async_trait;
use aws_sdk_ec2::types::{Instance, InstanceType, Reservation};
use axum::body::{to_bytes, Body};
use axum::http::header::CONTENT_TYPE;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use idash::api::{build_http_client, fetch_instances, FetchError};
use idash::ec2::{InstanceSource, InventoryError};
use idash::models::AppState;
use idash::routes::build_router;

struct StaticInventory(Vec<Reservation>);

#[async_trait]
impl InstanceSource for StaticInventory {
    async fn describe_all(&self) -> Result<Vec<Reservation>, InventoryError> {
        Ok(self.0.clone())
    }
}

struct FailingInventory;

#[async_trait]
impl InstanceSource for FailingInventory {
    async fn describe_all(&self) -> Result<Vec<Reservation>, InventoryError> {
        Err(InventoryError::Describe("ExpiredToken".into()))
    }
}

fn state_with(source: impl InstanceSource + 'static) -> AppState {
    AppState {
        inventory: Arc::new(source),
        custom_css: None,
    }
}

fn instance(id: &str, instance_type: InstanceType, image_id: &str) -> Instance {
    Instance::builder()
        .instance_id(id)
        .instance_type(instance_type)
        .image_id(image_id)
        .build()
}

async fn get_json(state: AppState, path: &str) -> (StatusCode, Value) {
    let response = build_router(state)
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_instances_endpoint_flattens_reservations() {
    let state = state_with(StaticInventory(vec![Reservation::builder()
        .instances(instance("i-001", InstanceType::T2Micro, "ami-123"))
        .instances(instance("i-002", InstanceType::T3Large, "ami-123"))
        .build()]));

    let (status, body) = get_json(state, "/api/instances").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "data": [
                { "id": "i-001", "type": "t2.micro", "imageId": "ami-123" },
                { "id": "i-002", "type": "t3.large", "imageId": "ami-123" },
            ]
        })
    );
}

#[tokio::test]
async fn test_instances_endpoint_preserves_reservation_order() {
    let state = state_with(StaticInventory(vec![
        Reservation::builder()
            .instances(instance("i-00a", InstanceType::T2Micro, "ami-1"))
            .build(),
        Reservation::builder().build(),
        Reservation::builder()
            .instances(instance("i-00b", InstanceType::T2Micro, "ami-2"))
            .instances(instance("i-00c", InstanceType::T2Micro, "ami-2"))
            .build(),
    ]));

    let (status, body) = get_json(state, "/api/instances").await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["i-00a", "i-00b", "i-00c"]);
}

#[tokio::test]
async fn test_instances_endpoint_empty_inventory_is_not_an_error() {
    let state = state_with(StaticInventory(vec![]));

    let (status, body) = get_json(state, "/api/instances").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "data": [] }));
}

#[tokio::test]
async fn test_instances_endpoint_upstream_failure_returns_503() {
    let state = state_with(FailingInventory);

    let (status, body) = get_json(state, "/api/instances").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, json!({ "data": "Error getting instances" }));
}

#[tokio::test]
async fn test_dashboard_page_serves_the_shell() {
    let response = build_router(state_with(StaticInventory(vec![])))
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("Instance Page"));
    assert!(html.contains("spinner"));
    assert!(html.contains("/api/instances"));
}

#[tokio::test]
async fn test_stylesheet_route_serves_css() {
    let response = build_router(state_with(StaticInventory(vec![])))
        .oneshot(
            Request::builder()
                .uri("/static/styles.css")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(CONTENT_TYPE).unwrap(),
        "text/css"
    );
}

#[tokio::test]
async fn test_custom_stylesheet_overrides_default() {
    let mut state = state_with(StaticInventory(vec![]));
    state.custom_css = Some("body { background: black; }".to_string());

    let response = build_router(state)
        .oneshot(
            Request::builder()
                .uri("/static/styles.css")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"body { background: black; }");
}

async fn spawn_server(app: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_fetch_instances_returns_rows_in_server_order() {
    let app = build_router(state_with(StaticInventory(vec![Reservation::builder()
        .instances(instance("i-001", InstanceType::T2Micro, "ami-123"))
        .instances(instance("i-002", InstanceType::T3Large, "ami-123"))
        .build()])));
    let base_url = spawn_server(app).await;
    let client = build_http_client();

    let instances = fetch_instances(&client, &base_url).await.unwrap();

    assert_eq!(instances.len(), 2);
    assert_eq!(instances[0].id, "i-001");
    assert_eq!(instances[0].instance_type, "t2.micro");
    assert_eq!(instances[1].id, "i-002");
    assert_eq!(instances[1].image_id, "ami-123");
}

#[tokio::test]
async fn test_fetch_instances_surfaces_server_failure() {
    let app = build_router(state_with(FailingInventory));
    let base_url = spawn_server(app).await;
    let client = build_http_client();

    let result = fetch_instances(&client, &base_url).await;

    assert!(matches!(result, Err(FetchError::Request(_))));
}

#[tokio::test]
async fn test_fetch_instances_rejects_non_list_data() {
    // A 200 whose `data` is a string must not be treated as rows.
    let app = axum::Router::new().route(
        "/api/instances",
        axum::routing::get(|| async { axum::Json(json!({ "data": "Error getting instances" })) }),
    );
    let base_url = spawn_server(app).await;
    let client = build_http_client();

    let result = fetch_instances(&client, &base_url).await;

    assert!(matches!(result, Err(FetchError::Payload(_))));
}
