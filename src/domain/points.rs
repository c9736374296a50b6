use super::receipt::{Item, Receipt};
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

const ROUND_TOTAL_BONUS: Points = Points(50);
const QUARTER_TOTAL_BONUS: Points = Points(25);
const ITEM_PAIR_BONUS: u64 = 5;
const ODD_DAY_BONUS: Points = Points(6);
const AFTERNOON_BONUS: Points = Points(10);

const QUARTER: Decimal = dec!(0.25);
const ITEM_PRICE_MULTIPLIER: Decimal = dec!(0.2);
const DESCRIPTION_LENGTH_DIVISOR: usize = 3;
const AFTERNOON_START_HOUR: u32 = 14;
const AFTERNOON_END_HOUR: u32 = 16;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// A non-negative point total.
///
/// Addition saturates at `u64::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Points(pub u64);

impl Points {
    pub const ZERO: Self = Self(0);

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Points {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Points {
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Sum for Points {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

/// The fixed rules a receipt is scored against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoringRule {
    /// One point per alphanumeric character in the retailer name.
    RetailerName,
    /// Total is a whole amount.
    RoundTotal,
    /// Total is a multiple of 0.25.
    QuarterTotal,
    /// Five points for every two items.
    ItemPairs,
    /// Price-based points for items whose trimmed description length is a multiple of 3.
    ItemDescriptions,
    /// Purchase day of month is odd.
    OddDay,
    /// Purchase time between 14:00 inclusive and 16:00 exclusive.
    AfternoonPurchase,
}

impl ScoringRule {
    pub const ALL: [ScoringRule; 7] = [
        ScoringRule::RetailerName,
        ScoringRule::RoundTotal,
        ScoringRule::QuarterTotal,
        ScoringRule::ItemPairs,
        ScoringRule::ItemDescriptions,
        ScoringRule::OddDay,
        ScoringRule::AfternoonPurchase,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ScoringRule::RetailerName => "retailer_name",
            ScoringRule::RoundTotal => "round_total",
            ScoringRule::QuarterTotal => "quarter_total",
            ScoringRule::ItemPairs => "item_pairs",
            ScoringRule::ItemDescriptions => "item_descriptions",
            ScoringRule::OddDay => "odd_day",
            ScoringRule::AfternoonPurchase => "afternoon_purchase",
        }
    }

    /// Points this rule awards to `receipt`.
    ///
    /// Values that fail to parse award nothing rather than failing the receipt.
    pub fn apply(&self, receipt: &Receipt) -> Points {
        match self {
            ScoringRule::RetailerName => retailer_points(&receipt.retailer),
            ScoringRule::RoundTotal => match parse_amount(&receipt.total) {
                Some(total) if total.fract().is_zero() => ROUND_TOTAL_BONUS,
                _ => Points::ZERO,
            },
            ScoringRule::QuarterTotal => match parse_amount(&receipt.total) {
                Some(total) if (total % QUARTER).is_zero() => QUARTER_TOTAL_BONUS,
                _ => Points::ZERO,
            },
            ScoringRule::ItemPairs => Points((receipt.items.len() as u64 / 2) * ITEM_PAIR_BONUS),
            ScoringRule::ItemDescriptions => receipt.items.iter().map(item_points).sum(),
            ScoringRule::OddDay => match NaiveDate::parse_from_str(&receipt.purchase_date, DATE_FORMAT) {
                Ok(date) if date.day() % 2 == 1 => ODD_DAY_BONUS,
                _ => Points::ZERO,
            },
            ScoringRule::AfternoonPurchase => {
                match NaiveTime::parse_from_str(&receipt.purchase_time, TIME_FORMAT) {
                    Ok(time) if (AFTERNOON_START_HOUR..AFTERNOON_END_HOUR).contains(&time.hour()) => {
                        AFTERNOON_BONUS
                    }
                    _ => Points::ZERO,
                }
            }
        }
    }
}

impl fmt::Display for ScoringRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-rule contributions for `receipt`, in rule order.
pub fn breakdown(receipt: &Receipt) -> Vec<(ScoringRule, Points)> {
    ScoringRule::ALL
        .iter()
        .map(|rule| (*rule, rule.apply(receipt)))
        .collect()
}

/// Total points awarded to `receipt`.
pub fn score(receipt: &Receipt) -> Points {
    ScoringRule::ALL.iter().map(|rule| rule.apply(receipt)).sum()
}

fn retailer_points(retailer: &str) -> Points {
    Points(retailer.chars().filter(char::is_ascii_alphanumeric).count() as u64)
}

fn item_points(item: &Item) -> Points {
    if item.short_description.trim().chars().count() % DESCRIPTION_LENGTH_DIVISOR != 0 {
        return Points::ZERO;
    }
    parse_amount(&item.price)
        .and_then(|price| (price * ITEM_PRICE_MULTIPLIER).ceil().to_u64())
        .map(Points)
        .unwrap_or(Points::ZERO)
}

/// Parses a non-negative decimal amount such as `"35.35"` or `"1e2"`.
fn parse_amount(value: &str) -> Option<Decimal> {
    Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .ok()
        .filter(|amount| !amount.is_sign_negative())
}
