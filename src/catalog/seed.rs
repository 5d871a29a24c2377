use chrono::{NaiveDate, NaiveDateTime};
use lazy_static::lazy_static;

use crate::models::{activity::Activity, car::Car, city::City, flight::Flight, tour::Tour};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    date(year, month, day)
        .and_hms_opt(hour, minute, 0)
        .unwrap_or_default()
}

fn tour(
    id: u32,
    title: &str,
    (city, country): (&str, &str),
    description: &str,
    (start_date, end_date): (NaiveDate, NaiveDate),
    (rating, review_count): (f64, u32),
    (price, max_group_size): (f64, u32),
) -> Tour {
    Tour {
        id,
        title: title.to_string(),
        city: city.to_string(),
        country: country.to_string(),
        description: description.to_string(),
        start_date,
        end_date,
        price,
        rating,
        review_count,
        max_group_size,
    }
}

fn flight(
    id: u32,
    airline: &str,
    (origin, destination): (&str, &str),
    (departure, arrival): (NaiveDateTime, NaiveDateTime),
    price: f64,
    seats_left: u32,
    stops: u8,
) -> Flight {
    Flight {
        id,
        airline: airline.to_string(),
        origin: origin.to_string(),
        destination: destination.to_string(),
        departure,
        arrival,
        price,
        seats_left,
        stops,
    }
}

fn car(
    id: u32,
    (model, company): (&str, &str),
    city: &str,
    price_per_day: f64,
    seats: u32,
    (rating, trips): (f64, u32),
) -> Car {
    Car {
        id,
        model: model.to_string(),
        company: company.to_string(),
        city: city.to_string(),
        price_per_day,
        seats,
        rating,
        trips,
    }
}

fn activity(
    id: u32,
    name: &str,
    (city, category): (&str, &str),
    price: f64,
    (rating, bookings): (f64, u32),
    duration_hours: f32,
) -> Activity {
    Activity {
        id,
        name: name.to_string(),
        city: city.to_string(),
        category: category.to_string(),
        price,
        rating,
        duration_hours,
        bookings,
    }
}

lazy_static! {
    pub static ref CITIES: Vec<City> = vec![
        City { name: "Lisbon", country: "Portugal", code: "LIS" },
        City { name: "Porto", country: "Portugal", code: "OPO" },
        City { name: "Barcelona", country: "Spain", code: "BCN" },
        City { name: "Madrid", country: "Spain", code: "MAD" },
        City { name: "Paris", country: "France", code: "CDG" },
        City { name: "Rome", country: "Italy", code: "FCO" },
        City { name: "Athens", country: "Greece", code: "ATH" },
        City { name: "Istanbul", country: "Turkey", code: "IST" },
        City { name: "Berlin", country: "Germany", code: "BER" },
        City { name: "Amsterdam", country: "Netherlands", code: "AMS" },
    ];

    pub static ref TOURS: Vec<Tour> = vec![
        tour(
            1,
            "Alfama and Fado Evening Walk",
            ("Lisbon", "Portugal"),
            "Old town alleys, a tram ride and dinner with live fado.",
            (date(2025, 6, 12), date(2025, 6, 12)),
            (4.8, 1240),
            (65.0, 14),
        ),
        tour(
            2,
            "Douro Valley Wine Route",
            ("Porto", "Portugal"),
            "Two days of quintas, river cruise and tastings.",
            (date(2025, 7, 4), date(2025, 7, 5)),
            (4.7, 860),
            (289.0, 10),
        ),
        tour(
            3,
            "Gaudi Highlights",
            ("Barcelona", "Spain"),
            "Sagrada Familia, Park Guell and Casa Batllo with skip-the-line entry.",
            (date(2025, 6, 20), date(2025, 6, 20)),
            (4.6, 2310),
            (89.0, 20),
        ),
        tour(
            4,
            "Andalusia Road Trip",
            ("Madrid", "Spain"),
            "Seville, Cordoba and Granada over five days.",
            (date(2025, 9, 1), date(2025, 9, 5)),
            (4.4, 310),
            (749.0, 16),
        ),
        tour(
            5,
            "Louvre After Hours",
            ("Paris", "France"),
            "An evening in the museum with an art historian.",
            (date(2025, 6, 18), date(2025, 6, 18)),
            (4.9, 3105),
            (89.0, 12),
        ),
        tour(
            6,
            "Ancient Rome and Colosseum Underground",
            ("Rome", "Italy"),
            "Arena floor, underground chambers and the Forum.",
            (date(2025, 8, 10), date(2025, 8, 10)),
            (4.7, 4020),
            (119.0, 18),
        ),
        tour(
            7,
            "Saronic Islands Cruise",
            ("Athens", "Greece"),
            "Hydra, Poros and Aegina in one day with lunch on board.",
            (date(2025, 7, 15), date(2025, 7, 15)),
            (4.3, 980),
            (135.0, 40),
        ),
        tour(
            8,
            "Bosphorus Sunset Cruise",
            ("Istanbul", "Turkey"),
            "Between two continents at golden hour.",
            (date(2025, 6, 25), date(2025, 6, 25)),
            (4.5, 1675),
            (45.0, 30),
        ),
        tour(
            9,
            "Berlin Wall Bike Tour",
            ("Berlin", "Germany"),
            "Checkpoint Charlie, East Side Gallery and the Mauerpark.",
            (date(2025, 5, 30), date(2025, 5, 30)),
            (4.6, 1420),
            (39.0, 15),
        ),
        tour(
            10,
            "Canals and Countryside",
            ("Amsterdam", "Netherlands"),
            "Canal cruise, Zaanse Schans windmills and a cheese farm.",
            (date(2025, 8, 2), date(2025, 8, 3)),
            (4.2, 540),
            (175.0, 25),
        ),
    ];

    pub static ref FLIGHTS: Vec<Flight> = vec![
        flight(
            1,
            "TAP Air Portugal",
            ("Lisbon", "Paris"),
            (at(2025, 6, 14, 7, 5), at(2025, 6, 14, 10, 35)),
            129.0,
            14,
            0,
        ),
        flight(
            2,
            "Vueling",
            ("Barcelona", "Rome"),
            (at(2025, 6, 14, 9, 40), at(2025, 6, 14, 11, 30)),
            74.0,
            3,
            0,
        ),
        flight(
            3,
            "Lufthansa",
            ("Berlin", "Athens"),
            (at(2025, 7, 1, 6, 15), at(2025, 7, 1, 12, 50)),
            212.0,
            22,
            1,
        ),
        flight(
            4,
            "KLM",
            ("Amsterdam", "Lisbon"),
            (at(2025, 6, 14, 13, 20), at(2025, 6, 14, 15, 20)),
            149.0,
            8,
            0,
        ),
        flight(
            5,
            "Turkish Airlines",
            ("Istanbul", "Madrid"),
            (at(2025, 8, 9, 11, 0), at(2025, 8, 9, 14, 35)),
            189.0,
            30,
            0,
        ),
        flight(
            6,
            "Air France",
            ("Paris", "Lisbon"),
            (at(2025, 6, 20, 18, 45), at(2025, 6, 20, 20, 15)),
            118.0,
            0,
            0,
        ),
    ];

    pub static ref CARS: Vec<Car> = vec![
        car(1, ("Fiat 500", "Hertz"), "Rome", 38.0, 4, (4.1, 820)),
        car(2, ("Volkswagen Golf", "Sixt"), "Berlin", 52.0, 5, (4.5, 1310)),
        car(3, ("Renault Clio", "Europcar"), "Paris", 44.0, 5, (4.2, 990)),
        car(4, ("Peugeot 5008", "Avis"), "Lisbon", 79.0, 7, (4.6, 415)),
        car(5, ("Seat Ibiza", "Enterprise"), "Barcelona", 41.0, 5, (3.9, 1150)),
        car(6, ("Tesla Model 3", "Sixt"), "Amsterdam", 109.0, 5, (4.8, 640)),
    ];

    pub static ref ACTIVITIES: Vec<Activity> = vec![
        activity(1, "Surf Lesson in Cascais", ("Lisbon", "Outdoor"), 49.0, (4.7, 760), 2.5),
        activity(2, "Pasta Making Class", ("Rome", "Food"), 69.0, (4.9, 1980), 3.0),
        activity(3, "Flamenco Show with Tapas", ("Madrid", "Nightlife"), 55.0, (4.4, 1320), 2.0),
        activity(4, "Seine Kayak Tour", ("Paris", "Outdoor"), 59.0, (4.2, 410), 2.0),
        activity(5, "Turkish Bath Experience", ("Istanbul", "Wellness"), 35.0, (4.6, 2210), 1.5),
        activity(6, "Acropolis Sunrise Yoga", ("Athens", "Wellness"), 42.0, (4.8, 290), 1.0),
        activity(7, "Street Art Workshop", ("Berlin", "Culture"), 38.0, (4.3, 370), 3.0),
    ];
}
