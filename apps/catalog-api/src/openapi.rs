use utoipa::OpenApi;

/// Top-level OpenAPI document, composed from the domain documents.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog API",
        description = "Product catalog CRUD API",
    ),
    // The catalog routes live at the server root, so the nest prefix is empty.
    // The derive macro rejects an empty `path` literal, but an expression that
    // evaluates to "" is passed straight to `OpenApi::nest`, which simply
    // concatenates, so this keeps the paths unprefixed.
    nest(
        (path = String::new(), api = domain_products::ApiDoc)
    )
)]
pub struct ApiDoc;
