//! REST integration test macro for product stores.
//!
//! The `rest_integration_tests!` macro generates HTTP-level tests that validate
//! a `ProductStore` through full REST round-trips.

/// Generate a REST integration test suite for a store.
///
/// `$store_factory` must produce an `impl ProductStore + 'static`.
///
/// # Generated Tests
///
/// ## CRUD
/// - `test_rest_create`: POST 201 + normalized JSON body
/// - `test_rest_get`: GET 200 + correct product
/// - `test_rest_list`: GET 200 + array in creation order
/// - `test_rest_patch`: PATCH 200 + only supplied fields change
/// - `test_rest_delete`: DELETE 200 + removed record, then GET 404
///
/// ## Validation
/// - `test_rest_create_missing_fields`: 422 listing every missing field
/// - `test_rest_create_invalid_values`: 422 on bad price and stock
/// - `test_rest_create_stock_out_of_range`: 422 on stock beyond i64
/// - `test_rest_patch_null_required`: 422 on explicit null
/// - `test_rest_malformed_json`: 400
///
/// ## Errors
/// - `test_rest_error_not_found`: 404 with `ENTITY_NOT_FOUND`
/// - `test_rest_error_invalid_uuid`: 400 with `INVALID_ID`
/// - `test_rest_health`: 200 `{"status": "ok"}`
#[macro_export]
macro_rules! rest_integration_tests {
    ($store_factory:expr) => {
        mod rest_integration_tests {
            use super::*;
            use axum::http::StatusCode;
            use axum_test::TestServer;
            use inventory::core::ProductStore;
            use serde_json::{Value, json};
            use std::sync::Arc;

            async fn make_server() -> TestServer {
                let store: Arc<dyn ProductStore> = Arc::new($store_factory);
                let router = storage_harness::integration::build_test_router(store);
                TestServer::try_new(router).unwrap()
            }

            async fn create(server: &TestServer, body: Value) -> Value {
                let response = server.post("/products").json(&body).await;
                response.assert_status(StatusCode::CREATED);
                response.json()
            }

            fn field_errors(body: &Value) -> Vec<String> {
                body["details"]["fields"]
                    .as_array()
                    .map(|fields| {
                        fields
                            .iter()
                            .filter_map(|f| f["field"].as_str().map(String::from))
                            .collect()
                    })
                    .unwrap_or_default()
            }

            #[tokio::test]
            async fn test_rest_create() {
                let server = make_server().await;

                let body = create(
                    &server,
                    json!({
                        "name": "  Mouse ",
                        "price": 19.999,
                        "description": "Wireless",
                        "stock": 5,
                        "category": "Electronics",
                        "color": "black"
                    }),
                )
                .await;

                assert_eq!(body["name"], "Mouse");
                assert_eq!(body["price"], 20.0);
                assert_eq!(body["description"], "Wireless");
                assert_eq!(body["stock"], 5);
                assert_eq!(body["category"], "Electronics");
                assert!(body.get("color").is_none());
                assert!(body["createdAt"].is_string());
                assert!(body["updatedAt"].is_string());
                uuid::Uuid::parse_str(body["id"].as_str().unwrap()).unwrap();
            }

            #[tokio::test]
            async fn test_rest_get() {
                let server = make_server().await;
                let created = create(
                    &server,
                    json!({"name": "Desk", "price": 150, "stock": 2, "category": "Home"}),
                )
                .await;
                let id = created["id"].as_str().unwrap();

                let response = server.get(&format!("/products/{}", id)).await;
                response.assert_status_ok();

                let body: Value = response.json();
                assert_eq!(body, created);
                assert!(body.get("description").is_none());
            }

            #[tokio::test]
            async fn test_rest_list() {
                let server = make_server().await;
                for name in ["First", "Second", "Third"] {
                    create(
                        &server,
                        json!({"name": name, "price": 1.5, "stock": 1, "category": "Books"}),
                    )
                    .await;
                }

                let response = server.get("/products").await;
                response.assert_status_ok();

                let body: Vec<Value> = response.json();
                let names: Vec<&str> = body.iter().filter_map(|p| p["name"].as_str()).collect();
                assert_eq!(names, vec!["First", "Second", "Third"]);
            }

            #[tokio::test]
            async fn test_rest_patch() {
                let server = make_server().await;
                let created = create(
                    &server,
                    json!({
                        "name": "Lamp",
                        "price": 20,
                        "description": "Desk lamp",
                        "stock": 4,
                        "category": "Home"
                    }),
                )
                .await;
                let id = created["id"].as_str().unwrap();

                let response = server
                    .patch(&format!("/products/{}", id))
                    .json(&json!({"stock": 12}))
                    .await;
                response.assert_status_ok();

                let body: Value = response.json();
                assert_eq!(body["stock"], 12);
                assert_eq!(body["name"], "Lamp");
                assert_eq!(body["description"], "Desk lamp");
                assert_eq!(body["createdAt"], created["createdAt"]);
            }

            #[tokio::test]
            async fn test_rest_delete() {
                let server = make_server().await;
                let created = create(
                    &server,
                    json!({"name": "Gone", "price": 3, "stock": 0, "category": "Other"}),
                )
                .await;
                let id = created["id"].as_str().unwrap();

                let response = server.delete(&format!("/products/{}", id)).await;
                response.assert_status_ok();
                let body: Value = response.json();
                assert_eq!(body["id"], created["id"]);

                server
                    .get(&format!("/products/{}", id))
                    .await
                    .assert_status(StatusCode::NOT_FOUND);

                server
                    .delete(&format!("/products/{}", id))
                    .await
                    .assert_status(StatusCode::NOT_FOUND);
            }

            #[tokio::test]
            async fn test_rest_create_missing_fields() {
                let server = make_server().await;

                let response = server.post("/products").json(&json!({})).await;
                response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

                let body: Value = response.json();
                assert_eq!(body["code"], "VALIDATION_ERROR");
                assert_eq!(
                    field_errors(&body),
                    vec!["name", "price", "stock", "category"]
                );
            }

            #[tokio::test]
            async fn test_rest_create_invalid_values() {
                let server = make_server().await;

                let response = server
                    .post("/products")
                    .json(&json!({
                        "name": "Broken",
                        "price": 0,
                        "stock": 2.5,
                        "category": "Other"
                    }))
                    .await;
                response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

                let body: Value = response.json();
                assert_eq!(field_errors(&body), vec!["price", "stock"]);

                let listed: Vec<Value> = server.get("/products").await.json();
                assert!(listed.is_empty());
            }

            #[tokio::test]
            async fn test_rest_create_stock_out_of_range() {
                let server = make_server().await;

                let response = server
                    .post("/products")
                    .json(&json!({
                        "name": "Bolt",
                        "price": 0.1,
                        "stock": 10_000_000_000_000_000_000u64,
                        "category": "Home"
                    }))
                    .await;
                response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

                let body: Value = response.json();
                assert_eq!(body["code"], "VALIDATION_ERROR");
                assert_eq!(field_errors(&body), vec!["stock"]);
            }

            #[tokio::test]
            async fn test_rest_patch_null_required() {
                let server = make_server().await;
                let created = create(
                    &server,
                    json!({"name": "Chair", "price": 40, "stock": 3, "category": "Home"}),
                )
                .await;
                let id = created["id"].as_str().unwrap();

                let response = server
                    .patch(&format!("/products/{}", id))
                    .json(&json!({"name": null}))
                    .await;
                response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

                let fetched: Value = server.get(&format!("/products/{}", id)).await.json();
                assert_eq!(fetched["name"], "Chair");
            }

            #[tokio::test]
            async fn test_rest_malformed_json() {
                let server = make_server().await;

                let response = server
                    .post("/products")
                    .content_type("application/json")
                    .bytes("{not json".into())
                    .await;
                response.assert_status(StatusCode::BAD_REQUEST);

                let body: Value = response.json();
                assert_eq!(body["code"], "INVALID_JSON");
            }

            #[tokio::test]
            async fn test_rest_error_not_found() {
                let server = make_server().await;
                let id = uuid::Uuid::new_v4();

                let response = server.get(&format!("/products/{}", id)).await;
                response.assert_status(StatusCode::NOT_FOUND);

                let body: Value = response.json();
                assert_eq!(body["code"], "ENTITY_NOT_FOUND");
                assert!(body["message"].as_str().unwrap().contains(&id.to_string()));

                server
                    .patch(&format!("/products/{}", id))
                    .json(&json!({"stock": 1}))
                    .await
                    .assert_status(StatusCode::NOT_FOUND);
            }

            #[tokio::test]
            async fn test_rest_error_invalid_uuid() {
                let server = make_server().await;

                let response = server.get("/products/not-a-uuid").await;
                response.assert_status(StatusCode::BAD_REQUEST);

                let body: Value = response.json();
                assert_eq!(body["code"], "INVALID_ID");
            }

            #[tokio::test]
            async fn test_rest_health() {
                let server = make_server().await;

                let response = server.get("/health").await;
                response.assert_status_ok();
                let body: Value = response.json();
                assert_eq!(body["status"], "ok");
            }
        }
    };
}
