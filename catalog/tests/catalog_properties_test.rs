//! Property tests for catalog invariants.
//!
//! Run with: `cargo test --test catalog_properties_test`

#![allow(clippy::unwrap_used)]

use chrono::{NaiveDate, NaiveTime};
use marquee_catalog::{Catalog, CatalogConfig, CatalogError};
use proptest::prelude::*;

fn name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 ]{0,15}"
}

fn slot() -> impl Strategy<Value = (NaiveTime, NaiveDate)> {
    (0u32..24, 0u32..60, 1u32..=28).prop_map(|(hour, minute, day)| {
        (
            NaiveTime::from_hms_opt(hour, minute, 0).unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, day).unwrap(),
        )
    })
}

proptest! {
    #[test]
    fn added_movie_is_listed_once(title in name(), genre in name(), duration in 1u32..600) {
        let mut catalog = Catalog::default();
        catalog.add_movie(&title, &genre, duration).unwrap();

        let matching: Vec<_> = catalog
            .get_movies()
            .iter()
            .filter(|m| m.title == title && m.genre == genre && m.duration_minutes == duration)
            .collect();
        prop_assert_eq!(matching.len(), 1);
    }

    #[test]
    fn theatre_screens_are_numbered_from_one(n in 1u32..=200) {
        let mut catalog = Catalog::default();
        catalog.add_theatre("Grand", "Metropolis", "1st Ave", n).unwrap();

        let numbers: Vec<u32> = catalog.get_theatres()[0]
            .screens
            .iter()
            .map(|s| s.number.value())
            .collect();
        prop_assert_eq!(numbers, (1..=n).collect::<Vec<_>>());
    }

    #[test]
    fn show_exists_only_for_booked_slot(booked in slot(), queried in slot()) {
        let mut catalog = Catalog::default();
        catalog.add_theatre("Grand", "Metropolis", "1st Ave", 1).unwrap();
        catalog.add_movie("Nova", "Sci-Fi", 120).unwrap();
        catalog.add_show("Grand", 1, "Nova", booked.0, booked.1, 100, 12.5).unwrap();

        prop_assert!(catalog.show_exists("Grand", 1, booked.0, booked.1).unwrap());
        prop_assert_eq!(
            catalog.show_exists("Grand", 1, queried.0, queried.1).unwrap(),
            queried == booked
        );
    }

    #[test]
    fn removed_show_no_longer_exists(booked in slot()) {
        let mut catalog = Catalog::default();
        catalog.add_theatre("Grand", "Metropolis", "1st Ave", 1).unwrap();
        catalog.add_movie("Nova", "Sci-Fi", 120).unwrap();
        catalog.add_show("Grand", 1, "Nova", booked.0, booked.1, 100, 12.5).unwrap();

        catalog.remove_show("Grand", 1, "Nova", booked.0).unwrap();
        prop_assert!(!catalog.show_exists("Grand", 1, booked.0, booked.1).unwrap());
        let is_show_not_found = matches!(
            catalog.remove_show("Grand", 1, "Nova", booked.0),
            Err(CatalogError::ShowNotFound { .. })
        );
        prop_assert!(is_show_not_found);
    }

    #[test]
    fn duplicate_coupon_keeps_first_discount(
        code in "[A-Z0-9]{1,10}",
        first in 1u32..=100,
        second in 1u32..=100,
    ) {
        let mut catalog = Catalog::new(CatalogConfig::default());
        catalog.add_coupon(&code, f64::from(first)).unwrap();

        let is_duplicate = matches!(
            catalog.add_coupon(&code.to_lowercase(), f64::from(second)),
            Err(CatalogError::DuplicateCoupon { .. })
        );
        prop_assert!(is_duplicate);
        let kept = catalog.store().coupon(&code).unwrap().discount.percent();
        prop_assert!((kept - f64::from(first)).abs() < f64::EPSILON);
    }
}
