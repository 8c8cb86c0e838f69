use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;

use crate::dto::receipt::{ItemRequest, ProcessReceiptRequest};
use crate::error::{Result, StorageError};

const PURCHASE_DATE_FORMAT: &str = "%Y-%m-%d";
const PURCHASE_TIME_FORMAT: &str = "%H:%M";

/// A submitted purchase, with every wire field parsed into its typed form.
///
/// The identifier is not part of the receipt itself; it is the key the
/// store assigns on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub retailer: String,
    pub purchase_date: NaiveDate,
    pub purchase_time: NaiveTime,
    pub items: Vec<Item>,
    pub total: Decimal,
}

/// One line item of a receipt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub short_description: String,
    pub price: Decimal,
}

/// Parses a monetary amount such as `"35.35"`.
///
/// Parsing is locale independent: `.` is the only decimal separator and
/// grouping characters, exponents and signs other than a leading `-` are
/// rejected. Negative amounts are rejected as well.
pub fn parse_amount(raw: &str) -> Result<Decimal> {
    // rust_decimal skips `_` separators
    if raw.contains('_') {
        return Err(StorageError::InvalidReceipt(format!(
            "'{raw}' is not a decimal amount"
        )));
    }

    let amount = Decimal::from_str(raw).map_err(|_| {
        StorageError::InvalidReceipt(format!("'{raw}' is not a decimal amount"))
    })?;

    if amount < Decimal::ZERO {
        return Err(StorageError::InvalidReceipt(format!(
            "'{raw}' is negative"
        )));
    }

    Ok(amount)
}

/// Parses a `YYYY-MM-DD` purchase date
pub fn parse_purchase_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, PURCHASE_DATE_FORMAT).map_err(|_| {
        StorageError::InvalidReceipt(format!("'{raw}' is not a YYYY-MM-DD date"))
    })
}

/// Parses a 24-hour `HH:MM` purchase time
pub fn parse_purchase_time(raw: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(raw, PURCHASE_TIME_FORMAT).map_err(|_| {
        StorageError::InvalidReceipt(format!("'{raw}' is not an HH:MM time"))
    })
}

fn in_field(field: &str, error: StorageError) -> StorageError {
    match error {
        StorageError::InvalidReceipt(msg) => StorageError::InvalidReceipt(format!("{field}: {msg}")),
        other => other,
    }
}

impl TryFrom<&ItemRequest> for Item {
    type Error = StorageError;

    fn try_from(request: &ItemRequest) -> Result<Self> {
        Ok(Self {
            short_description: request.short_description.clone(),
            price: parse_amount(&request.price).map_err(|e| in_field("price", e))?,
        })
    }
}

impl TryFrom<&ProcessReceiptRequest> for Receipt {
    type Error = StorageError;

    fn try_from(request: &ProcessReceiptRequest) -> Result<Self> {
        let items = request
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                Item::try_from(item).map_err(|e| in_field(&format!("items[{index}]"), e))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            retailer: request.retailer.clone(),
            purchase_date: parse_purchase_date(&request.purchase_date)
                .map_err(|e| in_field("purchaseDate", e))?,
            purchase_time: parse_purchase_time(&request.purchase_time)
                .map_err(|e| in_field("purchaseTime", e))?,
            items,
            total: parse_amount(&request.total).map_err(|e| in_field("total", e))?,
        })
    }
}
