use crate::utils::error::Result;
use url::Url;

/// DynamoDB number attributes hold magnitudes in `[1e-130, 1e126)` or zero.
pub const NUMBER_MAGNITUDE_LIMIT: f64 = 1e126;
pub const NUMBER_MAGNITUDE_MIN: f64 = 1e-130;

/// A rejected field value, kept verbatim for configuration error messages.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidValue {
    pub field: String,
    pub value: String,
    pub reason: String,
}

impl InvalidValue {
    pub fn new(field: &str, value: &str, reason: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Check = std::result::Result<(), InvalidValue>;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Check {
    if url_str.is_empty() {
        return Err(InvalidValue::new(field_name, url_str, "URL cannot be empty"));
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(InvalidValue::new(
                field_name,
                url_str,
                format!("Unsupported URL scheme: {}", scheme),
            )),
        },
        Err(e) => Err(InvalidValue::new(
            field_name,
            url_str,
            format!("Invalid URL format: {}", e),
        )),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Check {
    if value.trim().is_empty() {
        return Err(InvalidValue::new(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_length_range(field_name: &str, value: &str, min: usize, max: usize) -> Check {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(InvalidValue::new(
            field_name,
            value,
            format!("Length must be between {} and {} characters", min, max),
        ));
    }
    Ok(())
}

/// DynamoDB table names: 3 to 255 characters of `[A-Za-z0-9_.-]`.
pub fn validate_table_name(field_name: &str, table_name: &str) -> Check {
    validate_length_range(field_name, table_name, 3, 255)?;

    if !table_name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.')
    {
        return Err(InvalidValue::new(
            field_name,
            table_name,
            "Table name can only contain letters, numbers, underscores, hyphens, and dots",
        ));
    }

    Ok(())
}

pub fn validate_aws_region(field_name: &str, region: &str) -> Check {
    validate_non_empty_string(field_name, region)?;

    if !region
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(InvalidValue::new(
            field_name,
            region,
            "AWS region can only contain lowercase letters, numbers, and hyphens",
        ));
    }

    Ok(())
}

pub fn validate_number_range(field_name: &str, value: f64) -> Check {
    let magnitude = value.abs();
    if !value.is_finite()
        || magnitude >= NUMBER_MAGNITUDE_LIMIT
        || (magnitude != 0.0 && magnitude < NUMBER_MAGNITUDE_MIN)
    {
        return Err(InvalidValue::new(
            field_name,
            &value.to_string(),
            "Number is outside the storable range",
        ));
    }
    Ok(())
}
