use chrono::{Datelike, Timelike};
use rust_decimal::{Decimal, prelude::ToPrimitive};

use crate::error::{Result, StorageError};
use crate::models::Receipt;

const ROUND_TOTAL_POINTS: u64 = 50;
const QUARTER_TOTAL_POINTS: u64 = 25;
const ODD_DAY_POINTS: u64 = 6;
const AFTERNOON_POINTS: u64 = 10;

/// Hours in `[start, end)` that earn the afternoon bonus
const AFTERNOON_HOURS: std::ops::Range<u32> = 14..16;

/// Points contributed by each scoring rule for one receipt
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointsBreakdown {
    /// One point per ASCII letter or digit in the retailer name
    pub retailer: u64,
    /// Total has no cents
    pub round_total: u64,
    /// Total is a multiple of 0.25
    pub quarter_total: u64,
    /// One point per two items
    pub item_pairs: u64,
    /// `ceil(price * 0.2)` for items whose trimmed description length is a multiple of 3
    pub item_descriptions: u64,
    /// Day of month is odd
    pub odd_day: u64,
    /// Purchased between 14:00 and 16:00
    pub afternoon: u64,
}

impl PointsBreakdown {
    pub fn total(&self) -> Result<u64> {
        [
            self.retailer,
            self.round_total,
            self.quarter_total,
            self.item_pairs,
            self.item_descriptions,
            self.odd_day,
            self.afternoon,
        ]
        .into_iter()
        .try_fold(0u64, u64::checked_add)
        .ok_or(StorageError::PointsOutOfRange)
    }
}

/// Scores a receipt rule by rule.
///
/// Every rule is independent; a round total also counts as a multiple of
/// 0.25 and so earns both bonuses.
pub fn breakdown(receipt: &Receipt) -> Result<PointsBreakdown> {
    let retailer = receipt
        .retailer
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .count() as u64;

    let round_total = if receipt.total.fract().is_zero() {
        ROUND_TOTAL_POINTS
    } else {
        0
    };

    let quarter_total = if (receipt.total % Decimal::new(25, 2)).is_zero() {
        QUARTER_TOTAL_POINTS
    } else {
        0
    };

    let item_pairs = (receipt.items.len() / 2) as u64;

    let item_descriptions = receipt
        .items
        .iter()
        .filter(|item| item.short_description.trim().chars().count() % 3 == 0)
        .map(|item| {
            (item.price * Decimal::new(2, 1))
                .ceil()
                .to_u64()
                .ok_or(StorageError::PointsOutOfRange)
        })
        .try_fold(0u64, |acc, points| {
            acc.checked_add(points?).ok_or(StorageError::PointsOutOfRange)
        })?;

    let odd_day = if receipt.purchase_date.day() % 2 == 1 {
        ODD_DAY_POINTS
    } else {
        0
    };

    let afternoon = if AFTERNOON_HOURS.contains(&receipt.purchase_time.hour()) {
        AFTERNOON_POINTS
    } else {
        0
    };

    Ok(PointsBreakdown {
        retailer,
        round_total,
        quarter_total,
        item_pairs,
        item_descriptions,
        odd_day,
        afternoon,
    })
}

/// Computes the loyalty points for a receipt
pub fn calculate_points(receipt: &Receipt) -> Result<u64> {
    let breakdown = breakdown(receipt)?;
    tracing::debug!(?breakdown, "Scored receipt");
    breakdown.total()
}
