//! Products Domain
//!
//! This module provides a complete domain implementation for a product
//! catalog backed by MongoDB.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, filter building, orchestration
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory and MongoDB implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{
//!     handlers,
//!     mongo::MongoProductRepository,
//!     service::ProductService,
//! };
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("catalogo");
//!
//! let repository = MongoProductRepository::new(&db);
//! let service = ProductService::new(repository);
//!
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod filter;
pub mod handlers;
pub mod models;
pub mod mongo;
pub mod repository;
pub mod service;
pub mod validate;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use filter::{ProductFilter, ProductQuery};
pub use handlers::ApiDoc;
pub use models::{NewProduct, Product};
pub use mongo::MongoProductRepository;
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::{DeleteOutcome, ProductService};
pub use validate::{Violation, validate_product};
