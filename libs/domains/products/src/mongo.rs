//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use futures::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{doc, oid::ObjectId},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::ProductResult;
use crate::filter::ProductFilter;
use crate::models::{NewProduct, Product};
use crate::repository::ProductRepository;

/// Stored shape: `_id` is a real ObjectId, everything else mirrors the
/// domain model. The hex string id only exists at the domain boundary.
#[derive(Debug, Serialize, Deserialize)]
struct ProductDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    name: String,
    description: String,
    quantity: i64,
    price: f64,
    discount: f64,
    discount_date: NaiveDate,
    category: String,
}

impl ProductDocument {
    fn new(id: ObjectId, input: NewProduct) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            quantity: input.quantity,
            price: input.price,
            discount: input.discount,
            discount_date: input.discount_date,
            category: input.category,
        }
    }

    fn into_product(self) -> Product {
        Product {
            id: self.id.to_hex(),
            name: self.name,
            description: self.description,
            quantity: self.quantity,
            price: self.price,
            discount: self.discount,
            discount_date: self.discount_date,
            category: self.category,
        }
    }
}

/// MongoDB implementation of the ProductRepository
pub struct MongoProductRepository {
    collection: Collection<ProductDocument>,
}

impl MongoProductRepository {
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, "products")
    }

    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<ProductDocument>(collection_name);
        Self { collection }
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    async fn create(&self, input: NewProduct) -> ProductResult<Product> {
        let document = ProductDocument::new(ObjectId::new(), input);

        self.collection.insert_one(&document).await?;

        tracing::info!(product_id = %document.id, "Product created");
        Ok(document.into_product())
    }

    #[instrument(skip(self, filter))]
    async fn find_all(&self, filter: &ProductFilter) -> ProductResult<Vec<Product>> {
        let cursor = self.collection.find(filter.to_document()).await?;
        let documents: Vec<ProductDocument> = cursor.try_collect().await?;

        Ok(documents
            .into_iter()
            .map(ProductDocument::into_product)
            .collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: ObjectId) -> ProductResult<Option<Product>> {
        let document = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(document.map(ProductDocument::into_product))
    }

    #[instrument(skip(self, input))]
    async fn update_by_id(
        &self,
        id: ObjectId,
        input: NewProduct,
    ) -> ProductResult<Option<Product>> {
        let replacement = ProductDocument::new(id, input);

        let previous = self
            .collection
            .find_one_and_replace(doc! { "_id": id }, &replacement)
            .await?;

        if previous.is_some() {
            tracing::info!(product_id = %id, "Product updated");
        }
        Ok(previous.map(|_| replacement.into_product()))
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: ObjectId) -> ProductResult<Option<Product>> {
        let removed = self
            .collection
            .find_one_and_delete(doc! { "_id": id })
            .await?;

        if removed.is_some() {
            tracing::info!(product_id = %id, "Product deleted");
        }
        Ok(removed.map(ProductDocument::into_product))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> NewProduct {
        NewProduct {
            name: "Contra Baixo".to_string(),
            description: "Contra Baixo 4 Cordas".to_string(),
            quantity: 25,
            price: 1200.0,
            discount: 150.0,
            discount_date: NaiveDate::from_ymd_opt(2023, 4, 25).unwrap(),
            category: "Instrumento de corda".to_string(),
        }
    }

    #[test]
    fn test_document_serializes_with_underscore_id() {
        let id = ObjectId::new();
        let document = ProductDocument::new(id, sample_input());
        let bson = mongodb::bson::to_document(&document).unwrap();
        assert_eq!(bson.get_object_id("_id").unwrap(), id);
        assert!(bson.get("id").is_none());
        assert_eq!(bson.get_str("name").unwrap(), "Contra Baixo");
    }

    #[test]
    fn test_into_product_renders_hex_id() {
        let id = ObjectId::new();
        let product = ProductDocument::new(id, sample_input()).into_product();
        assert_eq!(product.id, id.to_hex());
        assert_eq!(product.quantity, 25);
    }
}
