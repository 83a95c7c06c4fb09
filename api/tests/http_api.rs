use std::{collections::BTreeMap, sync::Arc};

use axum::http::StatusCode;
use axum_test::TestServer;
use catalog_api::{
    application::http::server::{app_state::AppState, http_server::router},
    args::Args,
};
use catalog_core::{application::build_service, entity::{departments, products}};
use chrono::{TimeZone, Utc};
use clap::Parser;
use rust_decimal_macros::dec;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, Value};
use serde_json::{Value as Json, json};
use test_context::{AsyncTestContext, test_context};

fn server(db: DatabaseConnection) -> TestServer {
    let args = Args::parse_from(["catalog-api", "--server-root-path", "/api/v1"]);
    let state = AppState::new(Arc::new(args), build_service(Arc::new(db)));
    let app = router(state).expect("router builds");

    TestServer::try_new(app).expect("test server starts")
}

fn count_row(count: i64) -> BTreeMap<String, Value> {
    BTreeMap::from([("num_items".to_string(), Value::BigInt(Some(count)))])
}

fn department_model(id: i32, name: &str) -> departments::Model {
    let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap().fixed_offset();
    departments::Model {
        id,
        name: name.to_string(),
        description: None,
        created_at: ts,
        updated_at: ts,
    }
}

fn product_model(id: i32, department_id: Option<i32>) -> products::Model {
    let ts = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap().fixed_offset();
    products::Model {
        id,
        product_id: format!("SKU-{id}"),
        product_name: format!("Product {id}"),
        category: Some("Kitchen".to_string()),
        sub_category: None,
        brand: Some("Acme".to_string()),
        product_type: Some("Kettle".to_string()),
        sale_price: Some(dec!(60.00)),
        market_price: Some(dec!(80.00)),
        rating: Some(4.5),
        description: None,
        department_id,
        created_at: ts,
        updated_at: ts,
    }
}

/// A server whose database answers no query at all.
struct EmptyDatabase {
    server: TestServer,
}

impl AsyncTestContext for EmptyDatabase {
    async fn setup() -> Self {
        Self {
            server: server(MockDatabase::new(DatabaseBackend::Postgres).into_connection()),
        }
    }
}

#[test_context(EmptyDatabase)]
#[tokio::test]
async fn root_points_to_docs_and_health(ctx: &mut EmptyDatabase) {
    let response = ctx.server.get("/").await;

    response.assert_status_ok();
    let body: Json = response.json();
    assert_eq!(body["docs"], "/api/v1/docs");
    assert_eq!(body["health"], "/api/v1/health");
}

#[test_context(EmptyDatabase)]
#[tokio::test]
async fn create_product_rejects_invalid_payload(ctx: &mut EmptyDatabase) {
    let response = ctx
        .server
        .post("/api/v1/products")
        .json(&json!({
            "product_id": "SKU-1",
            "product_name": "",
            "rating": 9
        }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Json = response.json();
    assert_eq!(body["status_code"], 422);
    assert!(body["details"]["product_name"].is_array());
    assert!(body["details"]["rating"].is_array());
}

#[test_context(EmptyDatabase)]
#[tokio::test]
async fn unstorable_price_is_a_validation_error(ctx: &mut EmptyDatabase) {
    let response = ctx
        .server
        .post("/api/v1/products")
        .json(&json!({
            "product_id": "SKU-9",
            "product_name": "Vault",
            "sale_price": 1e30
        }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Json = response.json();
    assert!(body["details"]["sale_price"].is_array());
}

#[test_context(EmptyDatabase)]
#[tokio::test]
async fn non_numeric_ids_use_the_error_envelope(ctx: &mut EmptyDatabase) {
    for path in ["/api/v1/products/abc", "/api/v1/departments/abc/products"] {
        let response = ctx.server.get(path).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Json = response.json();
        assert_eq!(body["status_code"], 400, "{path}");
        assert!(
            body["error"].as_str().is_some_and(|e| e.contains("abc")),
            "{path}: {body}"
        );
    }
}

#[test_context(EmptyDatabase)]
#[tokio::test]
async fn malformed_json_is_a_validation_error(ctx: &mut EmptyDatabase) {
    let response = ctx
        .server
        .post("/api/v1/departments")
        .json(&json!({ "description": "no name" }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[test_context(EmptyDatabase)]
#[tokio::test]
async fn product_stats_degrade_to_zeroes(ctx: &mut EmptyDatabase) {
    let response = ctx.server.get("/api/v1/products/stats/summary").await;

    response.assert_status_ok();
    let body: Json = response.json();
    assert_eq!(body["total_products"], 0);
    assert_eq!(body["average_price"], 0.0);
    assert_eq!(body["price_distribution"], json!([]));
}

#[test_context(EmptyDatabase)]
#[tokio::test]
async fn department_stats_degrade_to_zeroes(ctx: &mut EmptyDatabase) {
    let response = ctx.server.get("/api/v1/departments/stats/summary").await;

    response.assert_status_ok();
    let body: Json = response.json();
    assert_eq!(body["total_departments"], 0);
    assert_eq!(body["department_breakdown"], json!([]));
}

#[test_context(EmptyDatabase)]
#[tokio::test]
async fn openapi_document_is_served(ctx: &mut EmptyDatabase) {
    let response = ctx.server.get("/api/v1/api-docs/openapi.json").await;

    response.assert_status_ok();
    let body: Json = response.json();
    assert!(body["paths"]["/api/v1/products"].is_object());
    assert!(body["paths"]["/api/v1/departments/{id}/products"].is_object());
}

#[tokio::test]
async fn health_reports_connected_database() {
    let server = server(MockDatabase::new(DatabaseBackend::Postgres).into_connection());

    let response = server.get("/api/v1/health").await;

    response.assert_status_ok();
    let body: Json = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "connected");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn get_product_assembles_view() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![(product_model(21, Some(2)), department_model(2, "Kitchen"))]])
        .into_connection();

    let response = server(db).get("/api/v1/products/21").await;

    response.assert_status_ok();
    let body: Json = response.json();
    assert_eq!(body["id"], 21);
    assert_eq!(body["type"], "Kettle");
    assert_eq!(body["department_name"], "Kitchen");
    assert_eq!(body["discount_percentage"], 25.0);
    assert_eq!(body["created_at"], "2024-05-01T12:00:00Z");
}

#[tokio::test]
async fn missing_product_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<(products::Model, departments::Model)>::new()])
        .into_connection();

    let response = server(db).get("/api/v1/products/999").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Json = response.json();
    assert_eq!(body, json!({ "error": "Product not found", "status_code": 404 }));
}

#[tokio::test]
async fn list_products_reports_pagination() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![count_row(45)]])
        .append_query_results([vec![
            (product_model(1, Some(2)), department_model(2, "Kitchen")),
            (product_model(2, Some(2)), department_model(2, "Kitchen")),
        ]])
        .into_connection();

    let response = server(db)
        .get("/api/v1/products")
        .add_query_param("page", "3")
        .add_query_param("per_page", "2")
        .add_query_param("sort_by", "popularity")
        .await;

    response.assert_status_ok();
    let body: Json = response.json();
    assert_eq!(body["products"].as_array().map(Vec::len), Some(2));
    assert_eq!(body["total"], 45);
    assert_eq!(body["page"], 3);
    assert_eq!(body["per_page"], 2);
    assert_eq!(body["total_pages"], 23);
    assert_eq!(body["has_prev"], true);
    assert_eq!(body["has_next"], true);
}

#[tokio::test]
async fn listing_an_unknown_department_is_a_bad_request() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<departments::Model>::new()])
        .into_connection();

    let response = server(db)
        .get("/api/v1/products")
        .add_query_param("department_id", "77")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Json = response.json();
    assert_eq!(body["error"], "Department with ID 77 not found");
}

#[tokio::test]
async fn duplicate_department_name_is_rejected() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![department_model(4, "Garden")]])
        .into_connection();

    let response = server(db)
        .post("/api/v1/departments")
        .json(&json!({ "name": "Garden" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Json = response.json();
    assert_eq!(body["error"], "Department with this name already exists");
    assert_eq!(body["status_code"], 400);
}

#[tokio::test]
async fn missing_department_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<departments::Model>::new()])
        .into_connection();

    let response = server(db).delete("/api/v1/departments/12").await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn department_products_clamp_per_page() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![department_model(2, "Kitchen")]])
        .append_query_results([vec![count_row(250)]])
        .append_query_results([vec![(product_model(1, Some(2)), department_model(2, "Kitchen"))]])
        .into_connection();

    let response = server(db)
        .get("/api/v1/departments/2/products")
        .add_query_param("per_page", "500")
        .await;

    response.assert_status_ok();
    let body: Json = response.json();
    assert_eq!(body["department"]["name"], "Kitchen");
    assert_eq!(body["per_page"], 100);
    assert_eq!(body["total_pages"], 3);
    assert_eq!(body["products"].as_array().map(Vec::len), Some(1));
}
