//! Prices: typed minor-unit amounts plus the string the catalog was authored with.
//!
//! Catalog data carries prices as display strings (`"N85000"`, `"$89.99"`).
//! [`PriceTag`] keeps that string for rendering and parses it once into a
//! [`Money`] amount used for ordering. A string that does not parse keeps its
//! display form and simply has no amount.

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use dove_core::{DomainError, ValueObject};

/// Currencies the storefront knows how to read from a price string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Nigerian naira; authored as `N85000` or `₦85,000`.
    Ngn,
    /// US dollar; authored as `$89.99`.
    Usd,
}

impl Currency {
    /// Currency assumed for a bare number with no prefix.
    pub const DEFAULT: Currency = Currency::Ngn;

    pub const fn code(self) -> &'static str {
        match self {
            Currency::Ngn => "NGN",
            Currency::Usd => "USD",
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Currency::Ngn => "₦",
            Currency::Usd => "$",
        }
    }

    /// Number of minor-unit digits (kobo, cents).
    pub const fn minor_digits(self) -> u32 {
        2
    }

    /// Resolve a price prefix: a single symbol or an ISO code.
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "N" | "₦" | "NGN" => Some(Currency::Ngn),
            "$" | "USD" => Some(Currency::Usd),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::from_prefix(s.trim())
            .ok_or_else(|| DomainError::validation(format!("unknown currency {s:?}")))
    }
}

/// An amount in the smallest unit of its currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    minor_units: u64,
    currency: Currency,
}

impl ValueObject for Money {}

impl Money {
    pub const fn new(minor_units: u64, currency: Currency) -> Self {
        Self {
            minor_units,
            currency,
        }
    }

    pub const fn minor_units(&self) -> u64 {
        self.minor_units
    }

    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// Order two amounts by size.
    ///
    /// Callers must only compare amounts of the same currency; [`Catalog`]
    /// guarantees this for its entries.
    ///
    /// [`Catalog`]: crate::Catalog
    pub fn cmp_amount(&self, other: &Money) -> Ordering {
        self.minor_units.cmp(&other.minor_units)
    }

    /// Parse an authored price string.
    ///
    /// Accepted shape: an optional currency prefix (one symbol or an ISO
    /// code), an integer part with optional `,` thousands separators in groups
    /// of three, and an optional `.` followed by one or two digits. Bare
    /// numbers are read in `default_currency`. Anything else (two symbols,
    /// unknown prefix, stray characters, overflow) yields `None`.
    pub fn parse(raw: &str, default_currency: Currency) -> Option<Money> {
        let raw = raw.trim();
        let digits_start = raw.find(|c: char| c.is_ascii_digit())?;
        let (prefix, number) = raw.split_at(digits_start);

        let prefix = prefix.trim();
        let currency = if prefix.is_empty() {
            default_currency
        } else {
            Currency::from_prefix(prefix)?
        };

        let (integer, fraction) = match number.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (number, None),
        };

        let whole = parse_grouped_integer(integer)?;
        let fraction = match fraction {
            None => 0,
            Some(f) if (1..=2).contains(&f.len()) && f.bytes().all(|b| b.is_ascii_digit()) => {
                let value: u64 = f.parse().ok()?;
                if f.len() == 1 { value * 10 } else { value }
            }
            Some(_) => return None,
        };

        let scale = 10u64.pow(currency.minor_digits());
        let minor_units = whole.checked_mul(scale)?.checked_add(fraction)?;
        Some(Money::new(minor_units, currency))
    }
}

fn parse_grouped_integer(text: &str) -> Option<u64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit() || b == b',') {
        return None;
    }

    if text.contains(',') {
        let mut groups = text.split(',');
        let head = groups.next()?;
        if head.is_empty() || head.len() > 3 {
            return None;
        }
        if groups.any(|group| group.len() != 3) {
            return None;
        }
    }

    text.replace(',', "").parse().ok()
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scale = 10u64.pow(self.currency.minor_digits());
        write!(
            f,
            "{}{}.{:02}",
            self.currency.symbol(),
            self.minor_units / scale,
            self.minor_units % scale
        )
    }
}

/// A price as authored in the catalog, with its parsed amount.
///
/// Serializes as the authored string so catalog files round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct PriceTag {
    display: String,
    amount: Option<Money>,
}

impl ValueObject for PriceTag {}

impl PriceTag {
    /// Parse a price string, reading bare numbers in [`Currency::DEFAULT`].
    pub fn parse(display: impl Into<String>) -> Self {
        Self::parse_in(display, Currency::DEFAULT)
    }

    pub fn parse_in(display: impl Into<String>, default_currency: Currency) -> Self {
        let display = display.into();
        let amount = Money::parse(&display, default_currency);
        Self { display, amount }
    }

    /// The string exactly as authored.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The parsed amount, or `None` when the string is not a recognised price.
    pub fn amount(&self) -> Option<&Money> {
        self.amount.as_ref()
    }
}

impl From<String> for PriceTag {
    fn from(value: String) -> Self {
        PriceTag::parse(value)
    }
}

impl From<PriceTag> for String {
    fn from(value: PriceTag) -> Self {
        value.display
    }
}

impl fmt::Display for PriceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}
