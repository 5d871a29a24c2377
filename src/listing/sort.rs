use std::{cmp::Ordering, str::FromStr};

use anyhow::{anyhow, Error};

use super::Listing;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Price,
    Rating,
    Popularity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub key: SortKey,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn new(key: SortKey, order: SortOrder) -> SortSpec {
        SortSpec { key, order }
    }

    pub fn price_low_to_high() -> SortSpec {
        SortSpec::new(SortKey::Price, SortOrder::Ascending)
    }

    pub fn price_high_to_low() -> SortSpec {
        SortSpec::new(SortKey::Price, SortOrder::Descending)
    }

    pub fn best_rated() -> SortSpec {
        SortSpec::new(SortKey::Rating, SortOrder::Descending)
    }

    pub fn most_popular() -> SortSpec {
        SortSpec::new(SortKey::Popularity, SortOrder::Descending)
    }
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "price" => Ok(SortKey::Price),
            "rating" => Ok(SortKey::Rating),
            "popularity" | "popular" => Ok(SortKey::Popularity),
            other => Err(anyhow!("Unknown sort key '{}'", other)),
        }
    }
}

impl FromStr for SortOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Ascending),
            "desc" | "descending" => Ok(SortOrder::Descending),
            other => Err(anyhow!("Unknown sort order '{}'", other)),
        }
    }
}

/// Accepts `price`, `price:desc`, `rating:asc` and so on.
impl FromStr for SortSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, order) = match s.split_once(':') {
            Some((key, order)) => (key.parse()?, order.parse()?),
            None => (s.parse()?, SortOrder::default()),
        };
        Ok(SortSpec::new(key, order))
    }
}

/// Total order over listings. Floats compare with `total_cmp`; unrated items
/// go last when sorting by rating, whichever the direction.
pub fn compare<T: Listing>(a: &T, b: &T, spec: SortSpec) -> Ordering {
    match spec.key {
        SortKey::Price => spec.order.apply(a.price().total_cmp(&b.price())),
        SortKey::Popularity => spec.order.apply(a.popularity().cmp(&b.popularity())),
        SortKey::Rating => match (a.rating(), b.rating()) {
            (Some(x), Some(y)) => spec.order.apply(x.total_cmp(&y)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
    }
}

/// Stable: items with equal keys keep their relative order.
pub fn sort_listings<T: Listing>(items: &mut [T], spec: SortSpec) {
    items.sort_by(|a, b| compare(a, b, spec));
}
