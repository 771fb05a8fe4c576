//! Filter criteria selected by the shopper.

use core::fmt;
use core::str::FromStr;

use serde::{Serialize, Serializer};

use dove_core::DomainError;

use crate::entry::{Category, PriceBucket};

/// A filter choice over a closed enumeration: everything, or one member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: PartialEq> Selection<T> {
    /// Whether `value` passes this selection.
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => wanted == value,
        }
    }
}

impl<T> From<T> for Selection<T> {
    fn from(value: T) -> Self {
        Selection::Only(value)
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str("All"),
            Selection::Only(value) => value.fmt(f),
        }
    }
}

impl<T> FromStr for Selection<T>
where
    T: FromStr<Err = DomainError>,
{
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Selection::All)
        } else {
            s.parse().map(Selection::Only)
        }
    }
}

impl<T: Serialize> Serialize for Selection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Selection::All => serializer.serialize_str("All"),
            Selection::Only(value) => value.serialize(serializer),
        }
    }
}

/// Ordering applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Catalog order.
    #[default]
    Default,
    #[serde(rename = "price-asc")]
    PriceAscending,
    #[serde(rename = "price-desc")]
    PriceDescending,
    /// Most recently listed first.
    Newest,
}

impl SortOption {
    pub const ALL: [SortOption; 4] = [
        SortOption::Default,
        SortOption::PriceAscending,
        SortOption::PriceDescending,
        SortOption::Newest,
    ];

    /// Label shown on the sort control.
    pub const fn label(self) -> &'static str {
        match self {
            SortOption::Default => "Default",
            SortOption::PriceAscending => "Price: Low to High",
            SortOption::PriceDescending => "Price: High to Low",
            SortOption::Newest => "Newest",
        }
    }

    const fn slug(self) -> &'static str {
        match self {
            SortOption::Default => "default",
            SortOption::PriceAscending => "price-asc",
            SortOption::PriceDescending => "price-desc",
            SortOption::Newest => "newest",
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortOption {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        SortOption::ALL
            .into_iter()
            .find(|option| option.slug().eq_ignore_ascii_case(s) || option.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::validation(format!("unknown sort option {s:?}")))
    }
}

/// Everything the shopper has chosen on the filter bar.
///
/// All predicates apply together: an entry is shown only when it passes the
/// category, price band and search predicates at once.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    pub category: Selection<Category>,
    pub price_range: Selection<PriceBucket>,
    pub sort: SortOption,
    /// Matched case-insensitively as a substring of title or description.
    pub search_query: String,
}

impl FilterCriteria {
    /// True when no predicate narrows the catalog.
    pub fn is_unfiltered(&self) -> bool {
        self.category == Selection::All
            && self.price_range == Selection::All
            && self.search_query.is_empty()
    }
}
