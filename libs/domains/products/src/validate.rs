//! The Product Validator.
//!
//! Decides, before any persistence attempt, whether an untrusted payload can
//! become a [`NewProduct`], and produces a precise, user-facing reason when
//! it cannot. Fields are checked in a fixed order (name, description,
//! quantity, price, discount, discountDate, category) and validation stops
//! at the first violation; violations are never aggregated.
//!
//! Normalization: text fields are trimmed, numbers are accepted as JSON
//! numbers or numeric strings, and the discount date is parsed as an
//! ISO-8601 calendar date (`YYYY-MM-DD`).

use chrono::NaiveDate;
use serde_json::{Map, Value};

use crate::models::NewProduct;

/// Fixed catalog of violation messages: one per field per rule.
pub mod messages {
    pub const NAME_REQUIRED: &str = "the name field is required";
    pub const NAME_TYPE: &str = "name must be a string";
    pub const NAME_EMPTY: &str = "name cannot be empty";

    pub const DESCRIPTION_REQUIRED: &str = "the description field is required";
    pub const DESCRIPTION_TYPE: &str = "description must be a string";
    pub const DESCRIPTION_EMPTY: &str = "description cannot be empty";

    pub const QUANTITY_REQUIRED: &str = "the quantity field is required";
    pub const QUANTITY_NUMBER: &str = "quantity must be a number";
    pub const QUANTITY_INTEGER: &str = "quantity must be an integer";
    pub const QUANTITY_MIN: &str = "quantity cannot be less than 0";

    pub const PRICE_REQUIRED: &str = "the price field is required";
    pub const PRICE_NUMBER: &str = "price must be a number";
    pub const PRICE_POSITIVE: &str = "price must be a positive number";

    pub const DISCOUNT_REQUIRED: &str = "the discount field is required";
    pub const DISCOUNT_NUMBER: &str = "discount must be a number";
    pub const DISCOUNT_MIN: &str = "discount cannot be less than 0";

    pub const DISCOUNT_DATE_REQUIRED: &str = "the discountDate field is required";
    pub const DISCOUNT_DATE_ISO: &str = "discountDate must be an ISO date (yyyy-mm-dd)";

    pub const CATEGORY_REQUIRED: &str = "the category field is required";
    pub const CATEGORY_TYPE: &str = "category must be a string";
    pub const CATEGORY_EMPTY: &str = "category cannot be empty";
}

/// The first rule violated by a payload, with its user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Wire name of the violated field
    pub field: &'static str,
    /// Message from the fixed catalog
    pub message: &'static str,
}

impl Violation {
    fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message)
    }
}

/// Validate an untrusted payload into a normalized [`NewProduct`].
///
/// Pure function: no side effects, no suspension points. Returns the first
/// violation encountered in field order.
pub fn validate_product(payload: &Value) -> Result<NewProduct, Violation> {
    // A non-object payload has no fields, so the first required field fails.
    let empty = Map::new();
    let obj = payload.as_object().unwrap_or(&empty);

    let name = text_field(
        obj,
        "name",
        messages::NAME_REQUIRED,
        messages::NAME_TYPE,
        messages::NAME_EMPTY,
    )?;
    let description = text_field(
        obj,
        "description",
        messages::DESCRIPTION_REQUIRED,
        messages::DESCRIPTION_TYPE,
        messages::DESCRIPTION_EMPTY,
    )?;

    let quantity = number_field(
        obj,
        "quantity",
        messages::QUANTITY_REQUIRED,
        messages::QUANTITY_NUMBER,
    )?;
    if quantity.fract() != 0.0 {
        return Err(Violation::new("quantity", messages::QUANTITY_INTEGER));
    }
    if quantity < 0.0 {
        return Err(Violation::new("quantity", messages::QUANTITY_MIN));
    }

    let price = number_field(
        obj,
        "price",
        messages::PRICE_REQUIRED,
        messages::PRICE_NUMBER,
    )?;
    if price <= 0.0 {
        return Err(Violation::new("price", messages::PRICE_POSITIVE));
    }

    let discount = number_field(
        obj,
        "discount",
        messages::DISCOUNT_REQUIRED,
        messages::DISCOUNT_NUMBER,
    )?;
    if discount < 0.0 {
        return Err(Violation::new("discount", messages::DISCOUNT_MIN));
    }

    let discount_date = date_field(obj, "discountDate")?;

    let category = text_field(
        obj,
        "category",
        messages::CATEGORY_REQUIRED,
        messages::CATEGORY_TYPE,
        messages::CATEGORY_EMPTY,
    )?;

    Ok(NewProduct {
        name,
        description,
        quantity: quantity as i64,
        price,
        discount,
        discount_date,
        category,
    })
}

/// A JSON `null` counts as an absent field.
fn present<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    obj.get(key).filter(|v| !v.is_null())
}

fn text_field(
    obj: &Map<String, Value>,
    key: &'static str,
    required: &'static str,
    kind: &'static str,
    empty: &'static str,
) -> Result<String, Violation> {
    let value = present(obj, key).ok_or_else(|| Violation::new(key, required))?;
    let text = value.as_str().ok_or_else(|| Violation::new(key, kind))?;
    let text = text.trim();
    if text.is_empty() {
        return Err(Violation::new(key, empty));
    }
    Ok(text.to_string())
}

/// Numbers arrive either as JSON numbers or as numeric strings; the
/// original schema coerces both.
fn number_field(
    obj: &Map<String, Value>,
    key: &'static str,
    required: &'static str,
    kind: &'static str,
) -> Result<f64, Violation> {
    let value = present(obj, key).ok_or_else(|| Violation::new(key, required))?;

    match value {
        Value::Number(n) => n.as_f64().ok_or_else(|| Violation::new(key, kind)),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .ok_or_else(|| Violation::new(key, kind)),
        _ => Err(Violation::new(key, kind)),
    }
}

fn date_field(obj: &Map<String, Value>, key: &'static str) -> Result<NaiveDate, Violation> {
    let value =
        present(obj, key).ok_or_else(|| Violation::new(key, messages::DISCOUNT_DATE_REQUIRED))?;
    let text = value
        .as_str()
        .ok_or_else(|| Violation::new(key, messages::DISCOUNT_DATE_ISO))?;

    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .map_err(|_| Violation::new(key, messages::DISCOUNT_DATE_ISO))
}
