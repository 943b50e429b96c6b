use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Product entity - the sole catalog entity.
///
/// The `id` is assigned by the storage layer on creation (a 24-character
/// hex ObjectId) and is immutable thereafter. All other fields are mutually
/// independent; no cross-field constraint is enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Storage-assigned unique identifier
    pub id: String,
    /// Product name
    pub name: String,
    /// Product description
    pub description: String,
    /// Stock quantity (non-negative)
    pub quantity: i64,
    /// Price (positive)
    pub price: f64,
    /// Discount amount (non-negative)
    pub discount: f64,
    /// Date the discount applies (ISO-8601 calendar date)
    pub discount_date: NaiveDate,
    /// Product category
    pub category: String,
}

/// A normalized, validated payload: the full non-id field set.
///
/// Produced only by the validator; updates always replace the complete
/// field set (there is no partial-update semantics).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub quantity: i64,
    pub price: f64,
    pub discount: f64,
    pub discount_date: NaiveDate,
    pub category: String,
}

impl Product {
    /// Attach a storage-assigned id to a validated payload.
    pub fn from_new(id: impl Into<String>, input: NewProduct) -> Self {
        Self {
            id: id.into(),
            name: input.name,
            description: input.description,
            quantity: input.quantity,
            price: input.price,
            discount: input.discount,
            discount_date: input.discount_date,
            category: input.category,
        }
    }

    /// Replace every non-id field with the given payload.
    pub fn apply(&mut self, input: NewProduct) {
        self.name = input.name;
        self.description = input.description;
        self.quantity = input.quantity;
        self.price = input.price;
        self.discount = input.discount;
        self.discount_date = input.discount_date;
        self.category = input.category;
    }
}
