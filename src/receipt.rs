//! Receipt models for JSON parsing and internal representation.

use crate::decimal::Money;
use crate::error::{ProcessorError, Result};
use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use std::str::FromStr;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// Raw receipt document as submitted.
///
/// Dates, times and amounts are kept as strings here so that every field can
/// be validated with an error naming it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptRecord {
    pub retailer: String,

    /// `YYYY-MM-DD`
    pub purchase_date: String,

    /// 24-hour `HH:MM`
    pub purchase_time: String,

    pub items: Vec<ItemRecord>,

    /// Decimal string, e.g. `"35.35"`
    pub total: String,
}

/// Raw line item as submitted.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    pub short_description: String,
    pub price: String,
}

impl ReceiptRecord {
    /// Reads a record from a JSON document.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Validates the raw record into a typed [`Receipt`].
    pub fn parse(self) -> Result<Receipt> {
        let purchase_date = NaiveDate::parse_from_str(self.purchase_date.trim(), DATE_FORMAT)
            .map_err(|e| ProcessorError::invalid("purchaseDate", e))?;
        let purchase_time = NaiveTime::parse_from_str(self.purchase_time.trim(), TIME_FORMAT)
            .map_err(|e| ProcessorError::invalid("purchaseTime", e))?;
        let total = Money::from_str(&self.total).map_err(|e| ProcessorError::invalid("total", e))?;

        let items = self
            .items
            .into_iter()
            .enumerate()
            .map(|(idx, item)| item.parse(idx))
            .collect::<Result<Vec<_>>>()?;

        Ok(Receipt {
            retailer: self.retailer,
            purchase_date,
            purchase_time,
            items,
            total,
        })
    }
}

impl ItemRecord {
    fn parse(self, idx: usize) -> Result<Item> {
        let price = Money::from_str(&self.price)
            .map_err(|e| ProcessorError::invalid(format!("items[{}].price", idx), e))?;
        Ok(Item {
            short_description: self.short_description,
            price,
        })
    }
}

/// A validated purchase receipt.
///
/// Created once at submission and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub retailer: String,
    pub purchase_date: NaiveDate,
    pub purchase_time: NaiveTime,
    pub items: Vec<Item>,
    pub total: Money,
}

impl Receipt {
    /// Parses and validates a JSON receipt document.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        ReceiptRecord::from_json(bytes)?.parse()
    }
}

/// A single purchased item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Free text; may carry leading or trailing whitespace.
    pub short_description: String,
    pub price: Money,
}
