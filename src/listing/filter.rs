use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

use super::Listing;

lazy_static! {
    static ref WHITESPACE_REGEX: Regex = Regex::new(r"\s+").unwrap();
    static ref QUERY_PARAM_REGEX: Regex = Regex::new(r"(?i)\b([a-z_]+)=([^\s]+)").unwrap();
}

/// Lowercases and collapses runs of whitespace so "  New   York" finds
/// "new york".
pub fn normalize_text(input: &str) -> String {
    WHITESPACE_REGEX
        .replace_all(input.trim(), " ")
        .to_lowercase()
}

/// Predicates of a listing search form. Unset predicates match everything;
/// set ones are combined with AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingFilter {
    pub text: Option<String>,
    pub date_range: Option<(NaiveDate, NaiveDate)>,
    pub min_rating: Option<f64>,
    pub min_capacity: Option<u32>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl ListingFilter {
    pub fn new() -> ListingFilter {
        ListingFilter::default()
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Accepts the bounds in either order.
    pub fn between(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.date_range = Some(if from <= to { (from, to) } else { (to, from) });
        self
    }

    pub fn min_rating(mut self, rating: f64) -> Self {
        self.min_rating = Some(rating);
        self
    }

    pub fn min_capacity(mut self, capacity: u32) -> Self {
        self.min_capacity = Some(capacity);
        self
    }

    pub fn min_price(mut self, price: f64) -> Self {
        self.min_price = Some(price);
        self
    }

    pub fn max_price(mut self, price: f64) -> Self {
        self.max_price = Some(price);
        self
    }

    fn matches_text<T: Listing>(&self, item: &T) -> bool {
        let needle = match &self.text {
            Some(text) => normalize_text(text),
            None => return true,
        };
        if needle.is_empty() {
            return true;
        }

        item.search_fields()
            .iter()
            .any(|field| normalize_text(field).contains(&needle))
    }

    fn matches_dates<T: Listing>(&self, item: &T) -> bool {
        let Some((from, to)) = self.date_range else {
            return true;
        };
        match item.date_range() {
            Some((start, end)) => start >= from && end <= to,
            None => false,
        }
    }

    fn matches_rating<T: Listing>(&self, item: &T) -> bool {
        let Some(min_rating) = self.min_rating else {
            return true;
        };
        item.rating().map(|rating| rating >= min_rating).unwrap_or(false)
    }

    fn matches_capacity<T: Listing>(&self, item: &T) -> bool {
        let Some(min_capacity) = self.min_capacity else {
            return true;
        };
        item.capacity()
            .map(|capacity| capacity >= min_capacity)
            .unwrap_or(false)
    }

    fn matches_price<T: Listing>(&self, item: &T) -> bool {
        let price = item.price();
        self.min_price.map(|min| price >= min).unwrap_or(true)
            && self.max_price.map(|max| price <= max).unwrap_or(true)
    }

    pub fn matches<T: Listing>(&self, item: &T) -> bool {
        self.matches_text(item)
            && self.matches_dates(item)
            && self.matches_rating(item)
            && self.matches_capacity(item)
            && self.matches_price(item)
    }

    pub fn apply<'a, T: Listing>(&self, items: &'a [T]) -> Vec<&'a T> {
        items.iter().filter(|item| self.matches(*item)).collect()
    }

    /// Parses a search bar string such as
    /// `lisbon min_rating=4 max_price=120 from=2024-06-01 to=2024-06-30 guests=2`.
    /// Keys are case-insensitive. A lone `from` or `to` leaves the other end of
    /// the date range open. Unknown or malformed parameters are ignored; the
    /// remaining words form the free text.
    pub fn from_query(input: &str) -> ListingFilter {
        let mut filter = ListingFilter::new();
        let mut from: Option<NaiveDate> = None;
        let mut to: Option<NaiveDate> = None;

        for caps in QUERY_PARAM_REGEX.captures_iter(input) {
            let value = &caps[2];
            match caps[1].to_lowercase().as_str() {
                "min_rating" | "rating" => filter.min_rating = value.parse().ok(),
                "min_price" => filter.min_price = value.parse().ok(),
                "max_price" => filter.max_price = value.parse().ok(),
                "guests" | "seats" | "capacity" => filter.min_capacity = value.parse().ok(),
                "from" => from = NaiveDate::parse_from_str(value, "%Y-%m-%d").ok(),
                "to" => to = NaiveDate::parse_from_str(value, "%Y-%m-%d").ok(),
                _ => {}
            }
        }

        if from.is_some() || to.is_some() {
            filter = filter.between(
                from.unwrap_or(NaiveDate::MIN),
                to.unwrap_or(NaiveDate::MAX),
            );
        }

        let text = QUERY_PARAM_REGEX.replace_all(input, " ");
        let text = normalize_text(&text);
        if !text.is_empty() {
            filter.text = Some(text);
        }

        filter
    }
}
