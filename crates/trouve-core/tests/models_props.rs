// Rust guideline compliant 2026-02-06

//! Property-based tests for data models.
//!
//! These tests check that worker records decode the same way whatever shape
//! the directory uses for identifiers, decimals and blank numbers.

use proptest::prelude::*;
use serde_json::{json, Value};
use trouve_core::{Geolocation, Worker};

fn record(id: Value, rating: Value, whatsapp: Value) -> Value {
    json!({
        "id": id,
        "first_name": "Samir",
        "last_name": "Tazi",
        "category": "Peintre",
        "city": "Fes",
        "rating": rating,
        "phone": "0677777777",
        "whatsapp_number": whatsapp,
    })
}

proptest! {
    #[test]
    fn prop_numeric_and_text_ids_decode_alike(id in any::<u32>()) {
        let numeric: Worker =
            serde_json::from_value(record(json!(id), json!(4.0), Value::Null)).unwrap();
        let text: Worker =
            serde_json::from_value(record(json!(id.to_string()), json!(4.0), Value::Null)).unwrap();

        prop_assert_eq!(&numeric.id, &id.to_string());
        prop_assert_eq!(numeric.id, text.id);
    }

    #[test]
    fn prop_decimal_strings_match_numbers(hundredths in 0u32..990) {
        let rating = f64::from(hundredths) / 100.0;
        let as_text: Worker = serde_json::from_value(
            record(json!("1"), json!(format!("{rating:.2}")), Value::Null),
        )
        .unwrap();
        let as_number: Worker =
            serde_json::from_value(record(json!("1"), json!(rating), Value::Null)).unwrap();

        prop_assert_eq!(as_text.rating, rating);
        prop_assert_eq!(as_number.rating, rating);
    }

    #[test]
    fn prop_blank_whatsapp_is_absent(blank in "[ \t]{0,5}") {
        let worker: Worker =
            serde_json::from_value(record(json!("1"), json!(3.5), json!(blank))).unwrap();
        prop_assert_eq!(worker.whatsapp_number, None);
    }

    #[test]
    fn prop_whatsapp_number_is_kept(number in "[0-9]{6,12}") {
        let worker: Worker =
            serde_json::from_value(record(json!("1"), json!(3.5), json!(number.clone()))).unwrap();
        prop_assert_eq!(worker.whatsapp_number, Some(number));
    }

    #[test]
    fn prop_geolocation_accepts_valid_ranges(lat in -90.0f64..=90.0, lng in -180.0f64..=180.0) {
        let position = Geolocation::new(lat, lng).unwrap();
        prop_assert_eq!(position.latitude, lat);
        prop_assert_eq!(position.longitude, lng);
    }

    #[test]
    fn prop_geolocation_rejects_out_of_range(lat in 90.001f64..1000.0) {
        prop_assert!(Geolocation::new(lat, 0.0).is_err());
        prop_assert!(Geolocation::new(-lat, 0.0).is_err());
        prop_assert!(Geolocation::new(0.0, lat + 90.0).is_err());
    }
}
