use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use axum_helpers::{AppError, MessageResponse, ObjectIdPath};
use serde::Serialize;
use serde_json::Value;
use utoipa::{OpenApi, ToSchema};

use crate::error::{ProductError, route_messages};
use crate::filter::ProductQuery;
use crate::models::{NewProduct, Product};
use crate::repository::ProductRepository;
use crate::service::ProductService;

const TAG: &str = "Produtos";

/// OpenAPI documentation for the product catalog API
#[derive(OpenApi)]
#[openapi(
    paths(
        create_product,
        list_products,
        get_product,
        update_product,
        delete_product,
    ),
    components(schemas(Product, NewProduct, MessageResponse, DeleteResponse)),
    tags(
        (name = TAG, description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Delete response body, carrying whatever is left in the catalog.
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteResponse {
    pub message: String,
    #[serde(rename = "produtosRestantes")]
    pub remaining: Vec<Product>,
}

/// Create the product router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/produtos", get(list_products).post(create_product))
        .route(
            "/produto/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(shared_service)
}

/// Create a product
#[utoipa::path(
    post,
    path = "/produtos",
    tag = TAG,
    request_body = NewProduct,
    responses(
        (status = 200, description = "Product created", body = Product),
        (status = 400, description = "First validation violation", body = MessageResponse),
        (status = 500, description = "Storage failure", body = MessageResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Json(payload): Json<Value>,
) -> Response {
    match service.create_product(&payload).await {
        Ok(product) => Json(product).into_response(),
        // This route alone reports its 500 with a period.
        Err(ProductError::Storage(detail)) => {
            tracing::error!("storage failure: {}", detail);
            AppError::Internal(route_messages::INTERNAL_ERROR_ON_CREATE.to_string())
                .into_response()
        }
        Err(err) => err.into_response(),
    }
}

/// List products matching the optional filters
#[utoipa::path(
    get,
    path = "/produtos",
    tag = TAG,
    params(ProductQuery),
    responses(
        (status = 200, description = "Matching products", body = Vec<Product>),
        (status = 400, description = "Malformed numeric bound"),
        (status = 500, description = "Storage failure", body = MessageResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Query(query): Query<ProductQuery>,
) -> Result<Json<Vec<Product>>, ProductError> {
    let products = service.list_products(query).await?;
    Ok(Json(products))
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/produto/{id}",
    tag = TAG,
    params(
        ("id" = String, Path, description = "Product ObjectId")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 400, description = "Malformed id", body = MessageResponse),
        (status = 404, description = "No such product", body = MessageResponse),
        (status = 500, description = "Storage failure", body = MessageResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ObjectIdPath(id): ObjectIdPath,
) -> Result<Json<Product>, ProductError> {
    let product = service.get_product(id).await?;
    Ok(Json(product))
}

/// Replace a product's fields
#[utoipa::path(
    put,
    path = "/produto/{id}",
    tag = TAG,
    params(
        ("id" = String, Path, description = "Product ObjectId")
    ),
    request_body = NewProduct,
    responses(
        (status = 200, description = "Product edited", body = MessageResponse),
        (status = 400, description = "Malformed id or first validation violation", body = MessageResponse),
        (status = 404, description = "No such product", body = MessageResponse),
        (status = 500, description = "Storage failure", body = MessageResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ObjectIdPath(id): ObjectIdPath,
    Json(payload): Json<Value>,
) -> Response {
    match service.update_product(id, &payload).await {
        Ok(_) => Json(MessageResponse::new(route_messages::EDITED)).into_response(),
        Err(ProductError::NotFound) => {
            AppError::NotFound(route_messages::NOT_FOUND_ON_EDIT.to_string()).into_response()
        }
        Err(err) => err.into_response(),
    }
}

/// Delete a product, returning the remaining catalog
#[utoipa::path(
    delete,
    path = "/produto/{id}",
    tag = TAG,
    params(
        ("id" = String, Path, description = "Product ObjectId")
    ),
    responses(
        (status = 200, description = "Product deleted", body = DeleteResponse),
        (status = 400, description = "Malformed id", body = MessageResponse),
        (status = 404, description = "No such product, remaining catalog attached", body = DeleteResponse),
        (status = 500, description = "Storage failure", body = MessageResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ObjectIdPath(id): ObjectIdPath,
) -> Result<Response, ProductError> {
    let outcome = service.delete_product(id).await?;

    let (status, message) = if outcome.deleted.is_some() {
        (StatusCode::OK, route_messages::DELETED)
    } else {
        (StatusCode::NOT_FOUND, route_messages::NOT_FOUND)
    };

    let body = DeleteResponse {
        message: message.to_string(),
        remaining: outcome.remaining,
    };
    Ok((status, Json(body)).into_response())
}
