//! Static seed data for the screens whose backend endpoints do not exist yet.

mod seed;

use crate::models::{activity::Activity, car::Car, city::City, flight::Flight, tour::Tour};

use seed::{ACTIVITIES, CARS, CITIES, FLIGHTS, TOURS};

use crate::listing::filter::normalize_text;

pub fn tours() -> &'static [Tour] {
    &TOURS
}

pub fn flights() -> &'static [Flight] {
    &FLIGHTS
}

pub fn cars() -> &'static [Car] {
    &CARS
}

pub fn activities() -> &'static [Activity] {
    &ACTIVITIES
}

pub fn cities() -> &'static [City] {
    &CITIES
}

pub fn find_tour(id: u32) -> Option<&'static Tour> {
    TOURS.iter().find(|tour| tour.id == id)
}

pub fn find_flight(id: u32) -> Option<&'static Flight> {
    FLIGHTS.iter().find(|flight| flight.id == id)
}

pub fn find_car(id: u32) -> Option<&'static Car> {
    CARS.iter().find(|car| car.id == id)
}

pub fn find_activity(id: u32) -> Option<&'static Activity> {
    ACTIVITIES.iter().find(|activity| activity.id == id)
}

pub fn find_city(name_or_code: &str) -> Option<&'static City> {
    let wanted = normalize_text(name_or_code);
    CITIES.iter().find(|city| {
        normalize_text(city.name) == wanted || city.code.eq_ignore_ascii_case(name_or_code.trim())
    })
}

pub fn tours_in(city: &str) -> Vec<&'static Tour> {
    let wanted = normalize_text(city);
    TOURS
        .iter()
        .filter(|tour| normalize_text(&tour.city) == wanted)
        .collect()
}

pub fn activities_in(city: &str) -> Vec<&'static Activity> {
    let wanted = normalize_text(city);
    ACTIVITIES
        .iter()
        .filter(|activity| normalize_text(&activity.city) == wanted)
        .collect()
}

pub fn cars_in(city: &str) -> Vec<&'static Car> {
    let wanted = normalize_text(city);
    CARS.iter()
        .filter(|car| normalize_text(&car.city) == wanted)
        .collect()
}
