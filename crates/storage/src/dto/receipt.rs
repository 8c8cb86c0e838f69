use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::error::StorageError;
use crate::models::{parse_amount, parse_purchase_date, parse_purchase_time};

/// Request payload for submitting a receipt.
///
/// Monetary amounts, the date and the time travel as strings and are parsed
/// server side. Any `id` field sent by the caller is ignored.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProcessReceiptRequest {
    #[schema(example = "M&M Corner Market")]
    pub retailer: String,

    #[validate(custom(function = "validate_purchase_date"))]
    #[schema(example = "2022-01-01")]
    pub purchase_date: String,

    #[validate(custom(function = "validate_purchase_time"))]
    #[schema(example = "13:01")]
    pub purchase_time: String,

    #[validate(nested)]
    pub items: Vec<ItemRequest>,

    #[validate(custom(function = "validate_amount"))]
    #[schema(example = "35.35")]
    pub total: String,
}

/// One line item of a submitted receipt
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemRequest {
    #[schema(example = "Mountain Dew 12PK")]
    pub short_description: String,

    #[validate(custom(function = "validate_amount"))]
    #[schema(example = "6.49")]
    pub price: String,
}

/// Identifier assigned to a processed receipt
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProcessReceiptResponse {
    pub id: Uuid,
}

/// Points awarded to a receipt
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PointsResponse {
    pub points: u64,
}

// Validation helpers share the model parsers so the two never disagree
fn to_validation_error(code: &'static str, error: StorageError) -> ValidationError {
    let mut validation_error = ValidationError::new(code);
    validation_error.message = Some(Cow::Owned(match error {
        StorageError::InvalidReceipt(msg) => msg,
        other => other.to_string(),
    }));
    validation_error
}

fn validate_amount(raw: &str) -> Result<(), ValidationError> {
    parse_amount(raw)
        .map(|_| ())
        .map_err(|e| to_validation_error("amount", e))
}

fn validate_purchase_date(raw: &str) -> Result<(), ValidationError> {
    parse_purchase_date(raw)
        .map(|_| ())
        .map_err(|e| to_validation_error("purchase_date", e))
}

fn validate_purchase_time(raw: &str) -> Result<(), ValidationError> {
    parse_purchase_time(raw)
        .map(|_| ())
        .map_err(|e| to_validation_error("purchase_time", e))
}
