//! Conversions between DynamoDB attribute maps and [`Product`].

use crate::domain::{Product, StoreError};
use aws_sdk_dynamodb::types::AttributeValue;
use std::collections::HashMap;

pub type Item = HashMap<String, AttributeValue>;

pub fn product_to_item(product: &Product) -> Item {
    let mut item = HashMap::new();
    item.insert("id".to_string(), AttributeValue::S(product.id.clone()));
    item.insert("name".to_string(), AttributeValue::S(product.name.clone()));
    item.insert(
        "price".to_string(),
        AttributeValue::N(product.price.to_string()),
    );
    item
}

pub fn item_to_product(item: &Item) -> Result<Product, StoreError> {
    Ok(Product {
        id: get_string(item, "id")?,
        name: get_string(item, "name")?,
        price: get_number(item, "price")?,
    })
}

fn get_string(item: &Item, field: &str) -> Result<String, StoreError> {
    match item.get(field) {
        Some(AttributeValue::S(value)) => Ok(value.clone()),
        Some(_) => Err(malformed(field, "expected a string attribute")),
        None => Err(malformed(field, "attribute is missing")),
    }
}

fn get_number(item: &Item, field: &str) -> Result<f64, StoreError> {
    match item.get(field) {
        Some(AttributeValue::N(value)) => value
            .parse::<f64>()
            .map_err(|e| malformed(field, &format!("not a number '{}': {}", value, e))),
        Some(_) => Err(malformed(field, "expected a number attribute")),
        None => Err(malformed(field, "attribute is missing")),
    }
}

fn malformed(field: &str, reason: &str) -> StoreError {
    StoreError::MalformedItem {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
