//! Catalog entries and the closed enumerations they are classified by.

use core::fmt;
use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use dove_core::{DomainError, Entity, EntryId};

use crate::money::PriceTag;

/// Department an entry is sold under.
///
/// "All" is deliberately absent: it only exists as a filter choice
/// ([`Selection::All`](crate::Selection::All)), never as an entry's category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Womens,
    Mens,
    Accessories,
    Kids,
    Footwear,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Womens,
        Category::Mens,
        Category::Accessories,
        Category::Kids,
        Category::Footwear,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Category::Womens => "Womens",
            Category::Mens => "Mens",
            Category::Accessories => "Accessories",
            Category::Kids => "Kids",
            Category::Footwear => "Footwear",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::validation(format!("unknown category {s:?}")))
    }
}

/// Coarse price band an entry is tagged with.
///
/// Independent of the entry's actual price: bands are authored alongside the
/// data, and band filtering never looks at the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceBucket {
    #[serde(alias = "0-50")]
    Low,
    #[serde(alias = "50-100")]
    Medium,
    #[serde(alias = "100+")]
    High,
}

impl PriceBucket {
    pub const ALL: [PriceBucket; 3] = [PriceBucket::Low, PriceBucket::Medium, PriceBucket::High];

    pub const fn name(self) -> &'static str {
        match self {
            PriceBucket::Low => "Low",
            PriceBucket::Medium => "Medium",
            PriceBucket::High => "High",
        }
    }

    /// Band label shown on filter controls.
    pub const fn label(self) -> &'static str {
        match self {
            PriceBucket::Low => "0-50",
            PriceBucket::Medium => "50-100",
            PriceBucket::High => "100+",
        }
    }
}

impl fmt::Display for PriceBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PriceBucket {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        PriceBucket::ALL
            .into_iter()
            .find(|bucket| bucket.name().eq_ignore_ascii_case(s) || bucket.label() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown price range {s:?}")))
    }
}

/// One sellable item shown on the collections page.
///
/// Entries are read models: built once when the catalog loads and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: EntryId,
    pub title: String,
    pub description: String,
    pub image: String,
    pub price: PriceTag,
    pub link: String,
    pub category: Category,
    #[serde(rename = "priceRange", alias = "price_range")]
    pub price_range: PriceBucket,
    #[serde(rename = "listedAt", alias = "listed_at")]
    pub listed_at: DateTime<Utc>,
}

impl Entity for CatalogEntry {
    type Id = EntryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
