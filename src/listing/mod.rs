//! Client-side listing pipeline shared by every listing screen.
//!
//! Everything here is synchronous and works on slices that were already
//! fetched: the whole array is filtered again on every change of the search
//! form, then sorted. There is no pagination or indexing.

pub mod filter;
pub mod sort;
pub mod trips;

use chrono::NaiveDate;

use crate::models::{
    activity::Activity, car::Car, flight::Flight, hotel::Room, show::Show, tour::Tour,
    transport::TransportTrip,
};

pub use filter::ListingFilter;
pub use sort::{SortKey, SortOrder, SortSpec};

pub trait Listing {
    /// Fields the free-text search looks at.
    fn search_fields(&self) -> Vec<&str>;

    fn price(&self) -> f64;

    fn rating(&self) -> Option<f64> {
        None
    }

    fn popularity(&self) -> u32 {
        0
    }

    /// Inclusive first and last day the item covers.
    fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        None
    }

    /// Group size, free seats or free tickets, whichever applies.
    fn capacity(&self) -> Option<u32> {
        None
    }
}

fn clamp_u32(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

impl Listing for Tour {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.city.as_str(),
            self.country.as_str(),
            self.description.as_str(),
        ]
    }

    fn price(&self) -> f64 {
        self.price
    }

    fn rating(&self) -> Option<f64> {
        Some(self.rating)
    }

    fn popularity(&self) -> u32 {
        self.review_count
    }

    fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.start_date, self.end_date))
    }

    fn capacity(&self) -> Option<u32> {
        Some(self.max_group_size)
    }
}

impl Listing for TransportTrip {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.departure.as_str(), self.destination.as_str()]
    }

    fn price(&self) -> f64 {
        self.price
    }

    fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.departure_time.date(), self.arrival_time.date()))
    }

    fn capacity(&self) -> Option<u32> {
        Some(clamp_u32(self.available_seats))
    }
}

impl Listing for Show {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = vec![self.name.as_str(), self.city.as_str()];
        if let Some(venue) = &self.venue {
            fields.push(venue);
        }
        fields
    }

    fn price(&self) -> f64 {
        self.price
    }

    fn rating(&self) -> Option<f64> {
        self.rating
    }

    fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.start_date, self.end_date))
    }

    fn capacity(&self) -> Option<u32> {
        Some(clamp_u32(self.available_tickets))
    }
}

impl Listing for Flight {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.airline.as_str(), self.origin.as_str(), self.destination.as_str()]
    }

    fn price(&self) -> f64 {
        self.price
    }

    fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.departure.date(), self.arrival.date()))
    }

    fn capacity(&self) -> Option<u32> {
        Some(self.seats_left)
    }
}

impl Listing for Car {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.model.as_str(), self.company.as_str(), self.city.as_str()]
    }

    fn price(&self) -> f64 {
        self.price_per_day
    }

    fn rating(&self) -> Option<f64> {
        Some(self.rating)
    }

    fn popularity(&self) -> u32 {
        self.trips
    }

    fn capacity(&self) -> Option<u32> {
        Some(self.seats)
    }
}

impl Listing for Activity {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.city.as_str(), self.category.as_str()]
    }

    fn price(&self) -> f64 {
        self.price
    }

    fn rating(&self) -> Option<f64> {
        Some(self.rating)
    }

    fn popularity(&self) -> u32 {
        self.bookings
    }
}

impl Listing for Room {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.room_type.as_str()]
    }

    fn price(&self) -> f64 {
        self.price_per_night
    }

    fn capacity(&self) -> Option<u32> {
        Some(clamp_u32(self.capacity))
    }
}

/// Filter, then sort if asked to. Input order is kept for equal sort keys.
pub fn search<T: Listing + Clone>(
    items: &[T],
    filter: &ListingFilter,
    sort: Option<SortSpec>,
) -> Vec<T> {
    let mut matching: Vec<T> = filter.apply(items).into_iter().cloned().collect();
    if let Some(spec) = sort {
        sort::sort_listings(&mut matching, spec);
    }
    matching
}
