//! Handler tests for the products domain
//!
//! These tests verify the HTTP surface end to end against the in-memory
//! repository: status codes, `{message}` bodies, filter composition and
//! the id guard.

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_products::*;
use http_body_util::BodyExt;
use mongodb::bson::oid::ObjectId;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

fn app() -> Router {
    handlers::router(ProductService::new(InMemoryProductRepository::new()))
}

fn valid_payload() -> Value {
    json!({
        "name": "Contra Baixo",
        "description": "Contra Baixo 4 Cordas Land Preto",
        "quantity": 25,
        "price": 1200.00,
        "discount": 150.00,
        "discountDate": "2023-04-25",
        "category": "Instrumento de corda"
    })
}

fn post(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

fn put(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn seed(app: &Router, body: &Value) -> Value {
    let response = app.clone().oneshot(post("/produtos", body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    json_body(response.into_body()).await
}

#[tokio::test]
async fn test_create_returns_200_with_assigned_id() {
    let app = app();
    let created = seed(&app, &valid_payload()).await;

    assert_eq!(created["name"], "Contra Baixo");
    assert_eq!(created["discountDate"], "2023-04-25");
    assert_eq!(created["id"].as_str().unwrap().len(), 24);
}

#[tokio::test]
async fn test_create_rejects_missing_field_naming_it() {
    let app = app();
    let mut payload = valid_payload();
    payload.as_object_mut().unwrap().remove("price");

    let response = app.oneshot(post("/produtos", &payload)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["message"], "the price field is required");
}

#[tokio::test]
async fn test_create_rejects_negative_quantity() {
    let app = app();
    let mut payload = valid_payload();
    payload["quantity"] = json!(-3);

    let response = app.oneshot(post("/produtos", &payload)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["message"], "quantity cannot be less than 0");
}

#[tokio::test]
async fn test_create_rejects_fractional_quantity() {
    let app = app();
    let mut payload = valid_payload();
    payload["quantity"] = json!(2.5);

    let response = app.oneshot(post("/produtos", &payload)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["message"], "quantity must be an integer");
}

#[tokio::test]
async fn test_create_rejects_non_positive_price() {
    let app = app();
    let mut payload = valid_payload();
    payload["price"] = json!(0);

    let response = app.oneshot(post("/produtos", &payload)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["message"], "price must be a positive number");
}

#[tokio::test]
async fn test_create_then_get_round_trips_all_fields() {
    let app = app();
    let created = seed(&app, &valid_payload()).await;
    let id = created["id"].as_str().unwrap();

    let response = app.oneshot(get(&format!("/produto/{id}"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = json_body(response.into_body()).await;

    assert_eq!(fetched, created);
    assert_eq!(fetched["quantity"], 25);
    assert_eq!(fetched["price"], 1200.0);
    assert_eq!(fetched["discount"], 150.0);
    assert_eq!(fetched["category"], "Instrumento de corda");
}

#[tokio::test]
async fn test_get_unknown_id_returns_404() {
    let app = app();
    let id = ObjectId::new().to_hex();

    let response = app.oneshot(get(&format!("/produto/{id}"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Produto não encontrado!");
}

#[tokio::test]
async fn test_list_unconstrained_returns_everything() {
    let app = app();
    seed(&app, &valid_payload()).await;
    let mut second = valid_payload();
    second["name"] = json!("Teclado");
    seed(&app, &second).await;

    let response = app.oneshot(get("/produtos")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_list_name_substring_is_case_insensitive() {
    let app = app();
    let mut violao = valid_payload();
    violao["name"] = json!("Violão Clássico");
    seed(&app, &violao).await;
    let mut teclado = valid_payload();
    teclado["name"] = json!("Teclado");
    seed(&app, &teclado).await;

    let response = app.oneshot(get("/produtos?name=viol")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Violão Clássico"]);
}

#[tokio::test]
async fn test_list_price_range_composes_both_bounds() {
    let app = app();
    for (name, price) in [("Barato", 50.0), ("Médio", 150.0), ("Caro", 500.0)] {
        let mut payload = valid_payload();
        payload["name"] = json!(name);
        payload["price"] = json!(price);
        seed(&app, &payload).await;
    }

    let response = app
        .oneshot(get("/produtos?priceMin=100&priceMax=200"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Médio"]);
}

#[tokio::test]
async fn test_list_rejects_non_numeric_bound() {
    let app = app();
    let response = app.oneshot(get("/produtos?priceMin=abc")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_replaces_fields_and_reports_edit() {
    let app = app();
    let created = seed(&app, &valid_payload()).await;
    let id = created["id"].as_str().unwrap();

    let mut replacement = valid_payload();
    replacement["name"] = json!("Contra Baixo 5 Cordas");
    replacement["price"] = json!(1500.0);

    let response = app
        .clone()
        .oneshot(put(&format!("/produto/{id}"), &replacement))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Produto editado.");

    let fetched = json_body(
        app.oneshot(get(&format!("/produto/{id}")))
            .await
            .unwrap()
            .into_body(),
    )
    .await;
    assert_eq!(fetched["name"], "Contra Baixo 5 Cordas");
    assert_eq!(fetched["price"], 1500.0);
    assert_eq!(fetched["id"], *id);
}

#[tokio::test]
async fn test_update_validates_payload_first() {
    let app = app();
    let created = seed(&app, &valid_payload()).await;
    let id = created["id"].as_str().unwrap();

    let mut broken = valid_payload();
    broken["name"] = json!("");

    let response = app
        .oneshot(put(&format!("/produto/{id}"), &broken))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["message"], "name cannot be empty");
}

#[tokio::test]
async fn test_update_unknown_id_returns_404() {
    let app = app();
    let id = ObjectId::new().to_hex();

    let response = app
        .oneshot(put(&format!("/produto/{id}"), &valid_payload()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Produto não encontrado.");
}

#[tokio::test]
async fn test_delete_returns_remaining_products() {
    let app = app();
    let first = seed(&app, &valid_payload()).await;
    let mut second_payload = valid_payload();
    second_payload["name"] = json!("Teclado");
    let second = seed(&app, &second_payload).await;

    let id = first["id"].as_str().unwrap();
    let response = app
        .oneshot(delete(&format!("/produto/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Produto deletado com sucesso!");

    let remaining = body["produtosRestantes"].as_array().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0]["id"], second["id"]);
}

#[tokio::test]
async fn test_delete_unknown_id_returns_404_with_unchanged_list() {
    let app = app();
    let kept = seed(&app, &valid_payload()).await;

    let id = ObjectId::new().to_hex();
    let response = app
        .oneshot(delete(&format!("/produto/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Produto não encontrado!");

    let remaining = body["produtosRestantes"].as_array().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0]["id"], kept["id"]);
}

/// Repository that fails the test if any method is reached.
struct UnreachableRepository;

#[async_trait]
impl ProductRepository for UnreachableRepository {
    async fn create(&self, _input: NewProduct) -> ProductResult<Product> {
        unreachable!("repository must not be called");
    }

    async fn find_all(&self, _filter: &ProductFilter) -> ProductResult<Vec<Product>> {
        unreachable!("repository must not be called");
    }

    async fn find_by_id(&self, _id: ObjectId) -> ProductResult<Option<Product>> {
        unreachable!("repository must not be called");
    }

    async fn update_by_id(
        &self,
        _id: ObjectId,
        _input: NewProduct,
    ) -> ProductResult<Option<Product>> {
        unreachable!("repository must not be called");
    }

    async fn delete_by_id(&self, _id: ObjectId) -> ProductResult<Option<Product>> {
        unreachable!("repository must not be called");
    }
}

#[tokio::test]
async fn test_malformed_id_is_rejected_before_storage() {
    let app = handlers::router(ProductService::new(UnreachableRepository));

    for request in [
        get("/produto/not-an-id"),
        put("/produto/not-an-id", &valid_payload()),
        delete("/produto/not-an-id"),
    ] {
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response.into_body()).await;
        assert_eq!(body["message"], "ID inválido!");
    }
}
