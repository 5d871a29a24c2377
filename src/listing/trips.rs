use chrono::{NaiveDate, NaiveDateTime};

use super::filter::normalize_text;
use crate::models::{
    flight::Flight,
    transport::{TransportTrip, TransportType},
};

/// Anything that goes from one place to another at a set time.
pub trait Route {
    fn origin(&self) -> &str;
    fn destination(&self) -> &str;
    fn departs_at(&self) -> NaiveDateTime;
    fn seats_left(&self) -> u64;
    fn transport_type(&self) -> Option<TransportType>;
}

impl Route for TransportTrip {
    fn origin(&self) -> &str {
        &self.departure
    }

    fn destination(&self) -> &str {
        &self.destination
    }

    fn departs_at(&self) -> NaiveDateTime {
        self.departure_time
    }

    fn seats_left(&self) -> u64 {
        self.available_seats
    }

    fn transport_type(&self) -> Option<TransportType> {
        self.transport_type
    }
}

impl Route for Flight {
    fn origin(&self) -> &str {
        &self.origin
    }

    fn destination(&self) -> &str {
        &self.destination
    }

    fn departs_at(&self) -> NaiveDateTime {
        self.departure
    }

    fn seats_left(&self) -> u64 {
        u64::from(self.seats_left)
    }

    fn transport_type(&self) -> Option<TransportType> {
        Some(TransportType::Flight)
    }
}

/// The transport search form: where from, where to, which day, how many.
#[derive(Debug, Clone, PartialEq)]
pub struct TripQuery {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub date: Option<NaiveDate>,
    pub passengers: u32,
    pub transport_type: Option<TransportType>,
}

impl Default for TripQuery {
    fn default() -> Self {
        TripQuery {
            origin: None,
            destination: None,
            date: None,
            passengers: 1,
            transport_type: None,
        }
    }
}

fn place_matches(wanted: &Option<String>, actual: &str) -> bool {
    match wanted {
        Some(place) => {
            let place = normalize_text(place);
            place.is_empty() || normalize_text(actual).contains(&place)
        }
        None => true,
    }
}

impl TripQuery {
    pub fn new() -> TripQuery {
        TripQuery::default()
    }

    pub fn from_to(mut self, origin: &str, destination: &str) -> Self {
        self.origin = Some(origin.to_string());
        self.destination = Some(destination.to_string());
        self
    }

    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn passengers(mut self, passengers: u32) -> Self {
        self.passengers = passengers;
        self
    }

    pub fn transport_type(mut self, transport_type: TransportType) -> Self {
        self.transport_type = Some(transport_type);
        self
    }

    pub fn matches<R: Route>(&self, route: &R) -> bool {
        place_matches(&self.origin, route.origin())
            && place_matches(&self.destination, route.destination())
            && self
                .date
                .map(|date| route.departs_at().date() == date)
                .unwrap_or(true)
            && route.seats_left() >= u64::from(self.passengers)
            && match self.transport_type {
                Some(wanted) => route.transport_type() == Some(wanted),
                None => true,
            }
    }

    /// Matching routes, earliest departure first.
    pub fn apply<'a, R: Route>(&self, routes: &'a [R]) -> Vec<&'a R> {
        let mut matching: Vec<&R> = routes.iter().filter(|route| self.matches(*route)).collect();
        matching.sort_by_key(|route| route.departs_at());
        matching
    }
}
