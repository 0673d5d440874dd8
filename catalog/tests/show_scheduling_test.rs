//! Show scheduling and conflict detection tests.
//!
//! Covers resolution order in `add_show`, screen-local conflict detection and
//! show removal by (title, time).
//!
//! Run with: `cargo test --test show_scheduling_test`

#![allow(clippy::unwrap_used)]

use chrono::{NaiveDate, NaiveTime};
use marquee_catalog::{Catalog, CatalogConfig, CatalogError};

fn at(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

fn on(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
}

fn two_theatres() -> Catalog {
    let mut catalog = Catalog::new(CatalogConfig::default());
    catalog.add_theatre("Grand", "Metropolis", "1st Ave", 2).unwrap();
    catalog.add_theatre("Rialto", "Gotham", "5th St", 1).unwrap();
    catalog.add_movie("Nova", "Sci-Fi", 120).unwrap();
    catalog.add_movie("Tides", "Drama", 95).unwrap();
    catalog
}

#[test]
fn test_show_exists_matches_exact_date_and_time_only() {
    let mut catalog = two_theatres();
    catalog
        .add_show("Grand", 1, "Nova", at(18, 0), on(1), 100, 12.5)
        .unwrap();

    assert!(catalog.show_exists("Grand", 1, at(18, 0), on(1)).unwrap());
    assert!(!catalog.show_exists("Grand", 1, at(18, 1), on(1)).unwrap());
    assert!(!catalog.show_exists("Grand", 1, at(18, 0), on(2)).unwrap());
    // Screen numbers are local to their theatre
    assert!(!catalog.show_exists("Grand", 2, at(18, 0), on(1)).unwrap());
    assert!(!catalog.show_exists("Rialto", 1, at(18, 0), on(1)).unwrap());
}

#[test]
fn test_show_exists_resolution_errors() {
    let catalog = two_theatres();

    assert_eq!(
        catalog.show_exists("Odeon", 1, at(18, 0), on(1)),
        Err(CatalogError::TheatreNotFound {
            name: "Odeon".to_string()
        })
    );
    assert_eq!(
        catalog.show_exists("rialto", 2, at(18, 0), on(1)),
        Err(CatalogError::ScreenNotFound {
            screen_number: 2,
            theatre: "Rialto".to_string()
        })
    );
}

#[test]
fn test_add_show_resolution_order() {
    let mut catalog = two_theatres();

    // Movie and theatre both unknown: movie wins
    assert!(matches!(
        catalog.add_show("Odeon", 1, "Ghost", at(18, 0), on(1), 10, 1.0),
        Err(CatalogError::MovieNotFound { .. })
    ));
    // Theatre and screen unknown: theatre wins
    assert!(matches!(
        catalog.add_show("Odeon", 9, "Nova", at(18, 0), on(1), 10, 1.0),
        Err(CatalogError::TheatreNotFound { .. })
    ));
    // Screen unknown and price invalid: screen wins
    assert!(matches!(
        catalog.add_show("Grand", 9, "Nova", at(18, 0), on(1), 10, -3.0),
        Err(CatalogError::ScreenNotFound { .. })
    ));
    assert!(matches!(
        catalog.add_show("Grand", 1, "Nova", at(18, 0), on(1), 10, -3.0),
        Err(CatalogError::InvalidArgument(_))
    ));
}

#[test]
fn test_zero_seats_and_free_tickets_are_valid() {
    let mut catalog = two_theatres();
    catalog
        .add_show("Grand", 1, "Tides", at(10, 0), on(3), 0, 0.0)
        .unwrap();

    let show = &catalog.shows_for("Grand", 1).unwrap()[0];
    assert_eq!(show.available_seats, 0);
    assert!(show.ticket_price.is_zero());
}

#[test]
fn test_remove_show_takes_first_match_on_any_date() {
    let mut catalog = two_theatres();
    catalog
        .add_show("Grand", 1, "Nova", at(18, 0), on(1), 100, 12.5)
        .unwrap();
    catalog
        .add_show("Grand", 1, "Nova", at(18, 0), on(2), 100, 12.5)
        .unwrap();
    catalog
        .add_show("Grand", 1, "Tides", at(21, 0), on(1), 100, 9.0)
        .unwrap();

    let removed = catalog.remove_show("Grand", 1, "NOVA", at(18, 0)).unwrap();
    assert_eq!(removed.show_date, on(1));

    assert!(!catalog.show_exists("Grand", 1, at(18, 0), on(1)).unwrap());
    assert!(catalog.show_exists("Grand", 1, at(18, 0), on(2)).unwrap());
    assert!(catalog.show_exists("Grand", 1, at(21, 0), on(1)).unwrap());
}

#[test]
fn test_remove_show_errors() {
    let mut catalog = two_theatres();
    catalog
        .add_show("Grand", 1, "Nova", at(18, 0), on(1), 100, 12.5)
        .unwrap();

    assert!(matches!(
        catalog.remove_show("Odeon", 1, "Nova", at(18, 0)),
        Err(CatalogError::TheatreNotFound { .. })
    ));
    assert!(matches!(
        catalog.remove_show("Grand", 5, "Nova", at(18, 0)),
        Err(CatalogError::ScreenNotFound { screen_number: 5, .. })
    ));
    // Right time, wrong movie
    assert!(matches!(
        catalog.remove_show("Grand", 1, "Tides", at(18, 0)),
        Err(CatalogError::ShowNotFound { .. })
    ));
    // Right movie, wrong screen
    assert!(matches!(
        catalog.remove_show("Grand", 2, "Nova", at(18, 0)),
        Err(CatalogError::ShowNotFound { .. })
    ));
    assert_eq!(catalog.shows_for("Grand", 1).unwrap().len(), 1);
}

#[test]
fn test_strict_conflicts_are_per_screen_and_slot() {
    let mut catalog = Catalog::new(CatalogConfig::strict());
    catalog.add_theatre("Grand", "Metropolis", "1st Ave", 2).unwrap();
    catalog.add_movie("Nova", "Sci-Fi", 120).unwrap();
    catalog.add_movie("Tides", "Drama", 95).unwrap();

    catalog
        .add_show("Grand", 1, "Nova", at(18, 0), on(1), 100, 12.5)
        .unwrap();

    // A different movie in the same slot still conflicts
    assert_eq!(
        catalog.add_show("Grand", 1, "Tides", at(18, 0), on(1), 100, 12.5),
        Err(CatalogError::ShowConflict {
            theatre: "Grand".to_string(),
            screen_number: 1,
            show_date: on(1),
            show_time: at(18, 0),
        })
    );

    catalog
        .add_show("Grand", 1, "Tides", at(18, 0), on(2), 100, 12.5)
        .unwrap();
    catalog
        .add_show("Grand", 2, "Tides", at(18, 0), on(1), 100, 12.5)
        .unwrap();

    // Freed slots can be booked again
    catalog.remove_show("Grand", 1, "Nova", at(18, 0)).unwrap();
    catalog
        .add_show("Grand", 1, "Nova", at(18, 0), on(1), 100, 12.5)
        .unwrap();
}
