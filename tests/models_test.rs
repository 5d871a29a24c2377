#[cfg(test)]
mod wire_timestamps {
    use chrono::{NaiveDate, TimeZone, Utc};
    use serde_json::{json, Value};
    use wayfarer::models::{
        review::{Order, Review},
        show::Show,
        timestamp::{parse_date, parse_timestamp},
        transport::TransportTrip,
    };

    fn trip_with(departure: &str, arrival: &str) -> Value {
        json!({
            "id": 3,
            "transportId": 1,
            "departure": "Porto",
            "destination": "Lisbon",
            "departureTime": departure,
            "arrivalTime": arrival,
            "price": "24.90",
            "availableSeats": 40,
        })
    }

    fn review_with(created_at: Value) -> Value {
        json!({ "id": 1, "orderId": 100, "rating": 5, "comment": "ok", "createdAt": created_at })
    }

    #[test]
    fn trip_accepts_utc_and_zoneless_times() {
        let expected = NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();

        for departure in [
            "2024-06-01T08:00:00Z",
            "2024-06-01T10:00:00+02:00",
            "2024-06-01T08:00:00",
            "2024-06-01T08:00:00.0000000",
            "2024-06-01 08:00:00",
        ] {
            let trip: TransportTrip =
                serde_json::from_value(trip_with(departure, "2024-06-01T11:15:00Z")).unwrap();
            assert_eq!(trip.departure_time, expected, "departure {}", departure);
            assert_eq!(trip.duration_minutes(), 195, "departure {}", departure);
        }
    }

    #[test]
    fn review_accepts_utc_and_zoneless_times() {
        let expected = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();

        for created_at in ["2024-06-01T08:00:00Z", "2024-06-01T08:00:00", "2024-06-01T08:00:00.123"] {
            let review: Review = serde_json::from_value(review_with(json!(created_at))).unwrap();
            let created = review.created_at.unwrap();
            assert_eq!(created.date_naive(), expected.date_naive(), "createdAt {}", created_at);
            assert_eq!(created.timestamp(), expected.timestamp(), "createdAt {}", created_at);
        }
    }

    #[test]
    fn missing_or_null_review_times_are_none() {
        let review: Review = serde_json::from_value(review_with(Value::Null)).unwrap();
        assert!(review.created_at.is_none());
        assert!(review.updated_at.is_none());
    }

    #[test]
    fn order_reads_zoneless_created_at() {
        let order: Order = serde_json::from_value(json!({
            "id": 8,
            "userId": "u-1",
            "status": "Paid",
            "total": "130.00",
            "createdAt": "2024-06-01T08:00:00",
        }))
        .unwrap();

        assert_eq!(order.total, 130.0);
        assert_eq!(
            order.created_at,
            Some(Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap())
        );
    }

    #[test]
    fn show_dates_accept_timestamps() {
        let show: Show = serde_json::from_value(json!({
            "id": 2,
            "name": "Fado Night",
            "city": "Lisbon",
            "startDate": "2024-07-04T00:00:00",
            "endDate": "2024-07-05",
            "price": 35,
        }))
        .unwrap();

        assert_eq!(show.start_date, NaiveDate::from_ymd_opt(2024, 7, 4).unwrap());
        assert_eq!(show.end_date, NaiveDate::from_ymd_opt(2024, 7, 5).unwrap());
    }

    #[test]
    fn garbage_timestamps_are_decode_errors() {
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_date("2024-13-01").is_none());
        let err = serde_json::from_value::<TransportTrip>(trip_with("soon", "later")).unwrap_err();
        assert!(err.to_string().contains("invalid timestamp 'soon'"));
    }

    #[test]
    fn trips_round_trip_through_their_own_json() {
        let trip: TransportTrip =
            serde_json::from_value(trip_with("2024-06-01T08:00:00Z", "2024-06-01T11:15:00Z"))
                .unwrap();
        let again: TransportTrip =
            serde_json::from_value(serde_json::to_value(&trip).unwrap()).unwrap();
        assert_eq!(again, trip);
    }
}
