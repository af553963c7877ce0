use serde::Serialize;
use serde_json::Value;

use super::errors::DataValidationError;
use crate::domain::item::model::Item;

/// Storage column width for wishlist names.
pub const MAX_NAME_LENGTH: usize = 63;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Wishlist {
    pub id: Option<i64>,
    pub name: String,
    pub customer_id: i64,
    pub items: Vec<Item>,
}

impl Wishlist {
    pub fn new(name: String, customer_id: i64) -> Result<Self, DataValidationError> {
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(DataValidationError::NameTooLong {
                max: MAX_NAME_LENGTH,
            });
        }

        Ok(Self {
            id: None,
            name,
            customer_id,
            items: Vec::new(),
        })
    }

    /// Builds a wishlist from an untyped request body.
    ///
    /// Only `name` and `customer_id` are read; any other key (including `id`
    /// and `items`) is ignored so the result is always unpersisted and empty.
    /// `customer_id` accepts JSON integers and integer strings, but never
    /// booleans or floats.
    pub fn from_payload(data: &Value) -> Result<Self, DataValidationError> {
        let fields = match data {
            Value::Object(fields) => fields,
            Value::Null | Value::Array(_) => {
                return Err(DataValidationError::BadOrNoData(format!(
                    "(received {})",
                    json_type_name(data)
                )));
            }
            other => {
                return Err(DataValidationError::InvalidAttribute(format!(
                    "{} has no attribute 'name'",
                    json_type_name(other)
                )));
            }
        };

        let name = match fields.get("name") {
            None => return Err(DataValidationError::Missing("name")),
            Some(Value::String(name)) => name.clone(),
            Some(other) => {
                return Err(DataValidationError::InvalidType {
                    field: "name",
                    expected: "string",
                    received: json_type_name(other).to_string(),
                });
            }
        };

        let customer_id = match fields.get("customer_id") {
            None => return Err(DataValidationError::Missing("customer_id")),
            Some(value) => parse_integer("customer_id", value)?,
        };

        Self::new(name, customer_id)
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: i64, name: String, customer_id: i64) -> Self {
        Self {
            id: Some(id),
            name,
            customer_id,
            items: Vec::new(),
        }
    }

    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.items = items;
        self
    }
}

/// Optional query filters for listing wishlists. Present fields are ANDed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WishlistFilter {
    pub name: Option<String>,
    pub customer_id: Option<i64>,
}

impl WishlistFilter {
    /// An empty `name` counts as no name filter.
    pub fn new(name: Option<String>, customer_id: Option<i64>) -> Self {
        Self {
            name: name.filter(|n| !n.is_empty()),
            customer_id,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.customer_id.is_none()
    }
}

fn parse_integer(field: &'static str, value: &Value) -> Result<i64, DataValidationError> {
    let parsed = match value {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        // serde_json keeps booleans apart from numbers, so `true` never reads as 1
        _ => None,
    };

    parsed.ok_or_else(|| {
        let received = match value {
            Value::Number(number) if !number.is_f64() => "integer out of range",
            other => json_type_name(other),
        };
        DataValidationError::InvalidType {
            field,
            expected: "integer",
            received: received.to_string(),
        }
    })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(number) if number.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
