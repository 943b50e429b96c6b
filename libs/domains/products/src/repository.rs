use std::collections::HashMap;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use crate::error::ProductResult;
use crate::filter::ProductFilter;
use crate::models::{NewProduct, Product};

/// Repository trait for Product persistence
///
/// Implementations can use different storage backends; the service layer
/// only depends on this interface.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persist a validated payload and return it with its assigned id
    async fn create(&self, input: NewProduct) -> ProductResult<Product>;

    /// List products matching a filter, unconstrained when the filter is empty
    async fn find_all(&self, filter: &ProductFilter) -> ProductResult<Vec<Product>>;

    /// Fetch a product by id
    async fn find_by_id(&self, id: ObjectId) -> ProductResult<Option<Product>>;

    /// Replace every non-id field of an existing product
    async fn update_by_id(&self, id: ObjectId, input: NewProduct)
    -> ProductResult<Option<Product>>;

    /// Remove a product, returning it if it existed
    async fn delete_by_id(&self, id: ObjectId) -> ProductResult<Option<Product>>;
}

/// In-memory repository over a `RwLock<HashMap>`.
///
/// Used by handler tests and local development; insertion order is
/// preserved for listing.
#[derive(Default)]
pub struct InMemoryProductRepository {
    products: RwLock<HashMap<ObjectId, Product>>,
    order: RwLock<Vec<ObjectId>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, input: NewProduct) -> ProductResult<Product> {
        let id = ObjectId::new();
        let product = Product::from_new(id.to_hex(), input);
        self.products.write().await.insert(id, product.clone());
        self.order.write().await.push(id);
        Ok(product)
    }

    async fn find_all(&self, filter: &ProductFilter) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;
        let order = self.order.read().await;
        Ok(order
            .iter()
            .filter_map(|id| products.get(id))
            .filter(|p| filter.matches(p))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: ObjectId) -> ProductResult<Option<Product>> {
        Ok(self.products.read().await.get(&id).cloned())
    }

    async fn update_by_id(
        &self,
        id: ObjectId,
        input: NewProduct,
    ) -> ProductResult<Option<Product>> {
        let mut products = self.products.write().await;
        match products.get_mut(&id) {
            Some(product) => {
                product.apply(input);
                Ok(Some(product.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_by_id(&self, id: ObjectId) -> ProductResult<Option<Product>> {
        let removed = self.products.write().await.remove(&id);
        if removed.is_some() {
            self.order.write().await.retain(|stored| *stored != id);
        }
        Ok(removed)
    }
}
