//! Product Service - Business logic layer

use std::sync::Arc;

use mongodb::bson::oid::ObjectId;
use serde_json::Value;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::filter::{ProductFilter, ProductQuery};
use crate::models::Product;
use crate::repository::ProductRepository;
use crate::validate::validate_product;

/// What a delete attempt produced.
///
/// The remaining collection is reported whether or not the target
/// existed; a miss is a 404 that still carries the unchanged list.
#[derive(Debug)]
pub struct DeleteOutcome {
    pub deleted: Option<Product>,
    pub remaining: Vec<Product>,
}

/// Product service sequencing validation, filtering and persistence.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Validate a raw payload and persist it.
    #[instrument(skip(self, payload))]
    pub async fn create_product(&self, payload: &Value) -> ProductResult<Product> {
        let input = validate_product(payload).map_err(ProductError::Validation)?;
        self.repository.create(input).await
    }

    /// List products matching the (possibly empty) query.
    #[instrument(skip(self, query))]
    pub async fn list_products(&self, query: ProductQuery) -> ProductResult<Vec<Product>> {
        let filter = ProductFilter::from(query);
        self.repository.find_all(&filter).await
    }

    /// Fetch one product, mapping absence to NotFound.
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: ObjectId) -> ProductResult<Product> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound)
    }

    /// Validate a raw payload and replace an existing product with it.
    #[instrument(skip(self, payload))]
    pub async fn update_product(&self, id: ObjectId, payload: &Value) -> ProductResult<Product> {
        let input = validate_product(payload).map_err(ProductError::Validation)?;
        self.repository
            .update_by_id(id, input)
            .await?
            .ok_or(ProductError::NotFound)
    }

    /// Delete a product and report what is left either way.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: ObjectId) -> ProductResult<DeleteOutcome> {
        let deleted = self.repository.delete_by_id(id).await?;
        let remaining = self.repository.find_all(&ProductFilter::default()).await?;
        Ok(DeleteOutcome { deleted, remaining })
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
