//! Reward point rules.
//!
//! Each rule looks at the whole receipt and is independent of every other
//! rule. The total is the sum of all contributions and can never go negative.

use crate::decimal::Money;
use crate::receipt::{Item, Receipt};
use chrono::{Datelike, Timelike};
use rust_decimal::Decimal;

const ROUND_DOLLAR_POINTS: u64 = 50;
const QUARTER_MULTIPLE_POINTS: u64 = 25;
const POINTS_PER_ITEM_PAIR: u64 = 5;
const ODD_DAY_POINTS: u64 = 6;
const AFTERNOON_POINTS: u64 = 10;

/// Afternoon window in whole hours: 14:00 inclusive to 16:00 exclusive.
const AFTERNOON_HOURS: std::ops::Range<u32> = 14..16;

/// Which characters of the retailer name earn a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RetailerRule {
    /// ASCII letters and digits only.
    #[default]
    Alphanumeric,

    /// ASCII letters, digits and spaces.
    AlphanumericAndSpaces,
}

impl RetailerRule {
    fn counts(self, c: char) -> bool {
        match self {
            RetailerRule::Alphanumeric => c.is_ascii_alphanumeric(),
            RetailerRule::AlphanumericAndSpaces => c.is_ascii_alphanumeric() || c == ' ',
        }
    }
}

/// Points awarded by each rule for one receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBreakdown {
    pub retailer: u64,
    pub round_dollar: u64,
    pub quarter_multiple: u64,
    pub item_pairs: u64,
    pub odd_day: u64,
    pub afternoon: u64,
    pub item_descriptions: u64,
}

impl ScoreBreakdown {
    /// Evaluates every rule against `receipt`.
    pub fn new(receipt: &Receipt, rule: RetailerRule) -> Self {
        ScoreBreakdown {
            retailer: retailer_points(&receipt.retailer, rule),
            round_dollar: round_dollar_points(receipt.total),
            quarter_multiple: quarter_multiple_points(receipt.total),
            item_pairs: item_pair_points(receipt.items.len()),
            odd_day: odd_day_points(receipt),
            afternoon: afternoon_points(receipt),
            item_descriptions: receipt
                .items
                .iter()
                .map(description_points)
                .fold(0, u64::saturating_add),
        }
    }

    /// Sum of all contributions, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        [
            self.retailer,
            self.round_dollar,
            self.quarter_multiple,
            self.item_pairs,
            self.odd_day,
            self.afternoon,
            self.item_descriptions,
        ]
        .into_iter()
        .fold(0, u64::saturating_add)
    }
}

/// Scores a receipt with the standard retailer rule.
pub fn score(receipt: &Receipt) -> u64 {
    score_with(receipt, RetailerRule::default())
}

/// Scores a receipt with an explicit retailer counting rule.
pub fn score_with(receipt: &Receipt, rule: RetailerRule) -> u64 {
    ScoreBreakdown::new(receipt, rule).total()
}

fn retailer_points(retailer: &str, rule: RetailerRule) -> u64 {
    retailer.chars().filter(|&c| rule.counts(c)).count() as u64
}

fn round_dollar_points(total: Money) -> u64 {
    if total.is_whole() {
        ROUND_DOLLAR_POINTS
    } else {
        0
    }
}

fn quarter_multiple_points(total: Money) -> u64 {
    if total.is_multiple_of(Money::from_cents(25)) {
        QUARTER_MULTIPLE_POINTS
    } else {
        0
    }
}

fn item_pair_points(item_count: usize) -> u64 {
    (item_count / 2) as u64 * POINTS_PER_ITEM_PAIR
}

fn odd_day_points(receipt: &Receipt) -> u64 {
    if receipt.purchase_date.day() % 2 == 1 {
        ODD_DAY_POINTS
    } else {
        0
    }
}

fn afternoon_points(receipt: &Receipt) -> u64 {
    if AFTERNOON_HOURS.contains(&receipt.purchase_time.hour()) {
        AFTERNOON_POINTS
    } else {
        0
    }
}

/// `ceil(price * 0.2)` when the trimmed description length is a positive multiple of 3.
///
/// Length is measured in UTF-8 bytes, so `"Crème"` counts as 6.
fn description_points(item: &Item) -> u64 {
    let len = item.short_description.trim().len();
    if len > 0 && len % 3 == 0 {
        item.price.ceil_scaled(Decimal::new(2, 1))
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use std::str::FromStr;

    fn money(s: &str) -> Money {
        Money::from_str(s).unwrap()
    }

    fn item(description: &str, price: &str) -> Item {
        Item {
            short_description: description.to_string(),
            price: money(price),
        }
    }

    fn receipt(retailer: &str, date: (i32, u32, u32), time: (u32, u32), total: &str) -> Receipt {
        Receipt {
            retailer: retailer.to_string(),
            purchase_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            purchase_time: NaiveTime::from_hms_opt(time.0, time.1, 0).unwrap(),
            items: vec![],
            total: money(total),
        }
    }

    fn target_receipt() -> Receipt {
        let mut r = receipt("Target", (2022, 1, 1), (13, 1), "35.35");
        r.items = vec![
            item("Mountain Dew 12PK", "6.49"),
            item("Emils Cheese Pizza", "12.25"),
            item("Knorr Creamy Chicken", "1.26"),
            item("Doritos Nacho Cheese", "3.35"),
            item("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
        ];
        r
    }

    fn corner_market_receipt() -> Receipt {
        let mut r = receipt("M&M Corner Market", (2022, 3, 20), (14, 33), "9.00");
        r.items = vec![item("Gatorade", "2.25"); 4];
        r
    }

    #[test]
    fn test_target_breakdown() {
        let breakdown = ScoreBreakdown::new(&target_receipt(), RetailerRule::Alphanumeric);

        assert_eq!(breakdown.retailer, 6);
        assert_eq!(breakdown.round_dollar, 0);
        assert_eq!(breakdown.quarter_multiple, 0);
        assert_eq!(breakdown.item_pairs, 10);
        assert_eq!(breakdown.odd_day, 6);
        assert_eq!(breakdown.afternoon, 0);
        // "Emils Cheese Pizza" (18): ceil(2.45) = 3
        // "Klarbrunn 12-PK 12 FL OZ" (24): ceil(2.40) = 3
        assert_eq!(breakdown.item_descriptions, 3 + 3);
        assert_eq!(breakdown.total(), 28);
        assert_eq!(score(&target_receipt()), 28);
    }

    #[test]
    fn test_corner_market_breakdown() {
        let breakdown = ScoreBreakdown::new(&corner_market_receipt(), RetailerRule::Alphanumeric);

        assert_eq!(breakdown.retailer, 14);
        assert_eq!(breakdown.round_dollar, 50);
        assert_eq!(breakdown.quarter_multiple, 25);
        assert_eq!(breakdown.item_pairs, 10);
        assert_eq!(breakdown.odd_day, 0);
        assert_eq!(breakdown.afternoon, 10);
        assert_eq!(breakdown.item_descriptions, 0);
        assert_eq!(breakdown.total(), 109);
    }

    #[test]
    fn test_retailer_rule_variants() {
        assert_eq!(retailer_points("M&M Corner Market", RetailerRule::Alphanumeric), 14);
        assert_eq!(
            retailer_points("M&M Corner Market", RetailerRule::AlphanumericAndSpaces),
            16
        );
        assert_eq!(score_with(&corner_market_receipt(), RetailerRule::AlphanumericAndSpaces), 111);

        assert_eq!(retailer_points("", RetailerRule::Alphanumeric), 0);
        assert_eq!(retailer_points("Café 24/7!", RetailerRule::Alphanumeric), 6);
    }

    #[test]
    fn test_whole_total_earns_round_and_quarter() {
        let r = receipt("", (2022, 1, 2), (9, 0), "9.00");
        let breakdown = ScoreBreakdown::new(&r, RetailerRule::Alphanumeric);

        assert_eq!(breakdown.round_dollar, 50);
        assert_eq!(breakdown.quarter_multiple, 25);
        assert_eq!(score(&r), 75);
    }

    #[test]
    fn test_quarter_total_without_round_dollar() {
        let r = receipt("", (2022, 1, 2), (9, 0), "9.75");
        let breakdown = ScoreBreakdown::new(&r, RetailerRule::Alphanumeric);

        assert_eq!(breakdown.round_dollar, 0);
        assert_eq!(breakdown.quarter_multiple, 25);
    }

    #[test]
    fn test_afternoon_window_boundaries() {
        let at = |h, m| afternoon_points(&receipt("", (2022, 1, 2), (h, m), "1.01"));

        assert_eq!(at(13, 59), 0);
        assert_eq!(at(14, 0), 10);
        assert_eq!(at(15, 59), 10);
        assert_eq!(at(16, 0), 0);
    }

    #[test]
    fn test_odd_day() {
        let on = |d| odd_day_points(&receipt("", (2022, 1, d), (9, 0), "1.01"));

        assert_eq!(on(1), 6);
        assert_eq!(on(2), 0);
        assert_eq!(on(31), 6);
    }

    #[test]
    fn test_item_pairs() {
        assert_eq!(item_pair_points(0), 0);
        assert_eq!(item_pair_points(1), 0);
        assert_eq!(item_pair_points(2), 5);
        assert_eq!(item_pair_points(5), 10);
    }

    #[test]
    fn test_blank_description_earns_nothing() {
        assert_eq!(description_points(&item("   ", "100.00")), 0);
        assert_eq!(description_points(&item("", "100.00")), 0);
    }

    #[test]
    fn test_description_length_counts_utf8_bytes() {
        // "Crème" is 5 chars but 6 bytes: ceil(10.00 * 0.2) = 2
        assert_eq!(description_points(&item("Crème", "10.00")), 2);
        assert_eq!(description_points(&item("Caf", "10.00")), 2);
        // "Café" is 4 chars but 5 bytes
        assert_eq!(description_points(&item("Café", "10.00")), 0);
        // "日本" is 2 chars but 6 bytes
        assert_eq!(description_points(&item("  日本  ", "10.00")), 2);
    }

    #[test]
    fn test_huge_prices_saturate_instead_of_overflowing() {
        let mut r = receipt("Target", (2022, 1, 1), (13, 1), "1.01");
        r.items = vec![item("abc", "792281625142643375935439503"); 2];

        let breakdown = ScoreBreakdown::new(&r, RetailerRule::Alphanumeric);
        assert_eq!(breakdown.item_descriptions, u64::MAX);
        assert_eq!(breakdown.total(), u64::MAX);
    }

    #[test]
    fn test_description_bonus_rounds_up_exactly() {
        assert_eq!(description_points(&item("abc", "5.00")), 1);
        assert_eq!(description_points(&item("abc", "5.01")), 2);
        assert_eq!(description_points(&item(" abcdef ", "0.20")), 1);
        assert_eq!(description_points(&item("abcd", "5.01")), 0);
        assert_eq!(description_points(&item("abc", "0.00")), 0);
    }

    #[test]
    fn test_empty_receipt_scores_zero_or_more() {
        let r = receipt("", (2022, 1, 2), (9, 0), "1.01");
        assert_eq!(score(&r), 0);
    }
}
