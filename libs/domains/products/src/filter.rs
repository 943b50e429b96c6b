//! The Query Filter Builder.
//!
//! Turns the optional query parameters of a listing request into a
//! [`ProductFilter`], a conjunction of independently optional predicates.
//! Caller-supplied strings are only ever literal values or an explicitly
//! supported substring match; they can never alter the query semantics.

use mongodb::bson::{Document, doc};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::models::Product;

/// Raw listing query parameters.
///
/// Deserialized by `axum::extract::Query`; a non-numeric bound fails
/// deserialization and the request is rejected with 400 before any
/// filter is built.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuery {
    /// Case-insensitive substring match on name
    pub name: Option<String>,
    /// Exact category match
    pub category: Option<String>,
    /// Inclusive lower bound on price
    pub price_min: Option<f64>,
    /// Inclusive upper bound on price
    pub price_max: Option<f64>,
    /// Inclusive lower bound on discount
    pub discount_min: Option<f64>,
    /// Inclusive upper bound on discount
    pub discount_max: Option<f64>,
}

/// Normalized conjunction of listing predicates.
///
/// An absent field contributes no predicate; a filter with every field
/// absent matches every product.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub name_contains: Option<String>,
    pub category: Option<String>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub discount_min: Option<f64>,
    pub discount_max: Option<f64>,
}

impl From<ProductQuery> for ProductFilter {
    fn from(query: ProductQuery) -> Self {
        // Empty strings count as absent, like unset query parameters.
        let non_empty = |s: Option<String>| s.filter(|s| !s.is_empty());

        Self {
            name_contains: non_empty(query.name),
            category: non_empty(query.category),
            price_min: query.price_min,
            price_max: query.price_max,
            discount_min: query.discount_min,
            discount_max: query.discount_max,
        }
    }
}

impl ProductFilter {
    /// Evaluate the conjunction against a single product.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(ref needle) = self.name_contains {
            if !product
                .name
                .to_lowercase()
                .contains(&needle.to_lowercase())
            {
                return false;
            }
        }
        if let Some(ref category) = self.category {
            if product.category != *category {
                return false;
            }
        }
        if let Some(min) = self.price_min {
            if product.price < min {
                return false;
            }
        }
        if let Some(max) = self.price_max {
            if product.price > max {
                return false;
            }
        }
        if let Some(min) = self.discount_min {
            if product.discount < min {
                return false;
            }
        }
        if let Some(max) = self.discount_max {
            if product.discount > max {
                return false;
            }
        }
        true
    }

    /// Translate the conjunction into a MongoDB filter document.
    ///
    /// The name substring is regex-escaped, so characters like `.` or `(`
    /// in the parameter match only themselves.
    pub fn to_document(&self) -> Document {
        let mut filter = doc! {};

        if let Some(ref needle) = self.name_contains {
            filter.insert(
                "name",
                doc! { "$regex": regex::escape(needle), "$options": "i" },
            );
        }
        if let Some(ref category) = self.category {
            filter.insert("category", category);
        }

        let mut price = doc! {};
        if let Some(min) = self.price_min {
            price.insert("$gte", min);
        }
        if let Some(max) = self.price_max {
            price.insert("$lte", max);
        }
        if !price.is_empty() {
            filter.insert("price", price);
        }

        let mut discount = doc! {};
        if let Some(min) = self.discount_min {
            discount.insert("$gte", min);
        }
        if let Some(max) = self.discount_max {
            discount.insert("$lte", max);
        }
        if !discount.is_empty() {
            filter.insert("discount", discount);
        }

        filter
    }
}
