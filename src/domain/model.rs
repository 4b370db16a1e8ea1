use crate::utils::validation::{
    validate_non_empty_string, validate_number_range, Check, InvalidValue,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
        }
    }

    /// Presence checks on a parsed payload, plus a price the table can
    /// store. Every failing field is reported.
    pub fn validate(&self) -> Vec<FieldViolation> {
        let checks: [Check; 3] = [
            validate_non_empty_string("id", &self.id),
            validate_non_empty_string("name", &self.name),
            validate_number_range("price", self.price),
        ];

        checks
            .into_iter()
            .filter_map(|check| check.err().map(FieldViolation::from))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub reason: String,
}

impl FieldViolation {
    pub fn new(field: &str, reason: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<InvalidValue> for FieldViolation {
    fn from(invalid: InvalidValue) -> Self {
        Self {
            field: invalid.field,
            reason: invalid.reason,
        }
    }
}
