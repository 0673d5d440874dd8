//! Catalog Demo
//!
//! Scripted admin session against an in-memory catalog:
//! - Theatre and movie registration
//! - Show scheduling guarded by the conflict check
//! - Coupon registration and a rejected duplicate
//! - Cascading theatre removal
//!
//! # Usage
//!
//! ```bash
//! MARQUEE_REJECT_DOUBLE_BOOKING=true cargo run --bin demo
//! ```

use chrono::{NaiveDate, NaiveTime};
use marquee_catalog::{Catalog, CatalogCommand, CatalogConfig, CatalogError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,marquee_catalog=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = CatalogConfig::from_env();
    tracing::info!(
        reject_double_booking = config.reject_double_booking,
        reject_duplicate_titles = config.reject_duplicate_titles,
        "Configuration loaded"
    );

    let mut catalog = Catalog::new(config);

    let show_time = NaiveTime::from_hms_opt(18, 0, 0).ok_or("invalid show time")?;
    let show_date = NaiveDate::from_ymd_opt(2024, 6, 1).ok_or("invalid show date")?;

    let script = [
        CatalogCommand::AddTheatre {
            name: "Grand".to_string(),
            city: "Metropolis".to_string(),
            street: "1st Ave".to_string(),
            num_screens: 2,
        },
        CatalogCommand::AddMovie {
            title: "Nova".to_string(),
            genre: "Sci-Fi".to_string(),
            duration_minutes: 120,
        },
        CatalogCommand::AddCoupon {
            code: "SAVE10".to_string(),
            discount_percent: 10.0,
        },
        CatalogCommand::AddCoupon {
            code: "save10".to_string(),
            discount_percent: 50.0,
        },
        CatalogCommand::AddShow {
            theatre: "Grand".to_string(),
            screen_no: 3,
            movie: "Nova".to_string(),
            show_time,
            show_date,
            available_seats: 100,
            ticket_price: 12.50,
        },
    ];

    for command in script {
        report(catalog.execute(command));
    }

    // Schedule twice, checking the slot first like an admin console would
    for _ in 0..2 {
        if catalog.show_exists("Grand", 1, show_time, show_date)? {
            println!("Screen 1 at Grand is already booked on {show_date} at {show_time}");
            continue;
        }
        report(catalog.execute(CatalogCommand::AddShow {
            theatre: "Grand".to_string(),
            screen_no: 1,
            movie: "Nova".to_string(),
            show_time,
            show_date,
            available_seats: 100,
            ticket_price: 12.50,
        }));
    }

    println!("\n{}", serde_json::to_string_pretty(catalog.get_theatres())?);

    report(catalog.execute(CatalogCommand::RemoveTheatre {
        name: "grand".to_string(),
    }));
    report(catalog.execute(CatalogCommand::ShowExists {
        theatre: "Grand".to_string(),
        screen_no: 1,
        show_time,
        show_date,
    }));

    let stats = catalog.store().stats();
    println!(
        "\nCatalog: {} movie(s), {} theatre(s), {} show(s), {} coupon(s)",
        stats.movies, stats.theatres, stats.shows, stats.coupons
    );
    Ok(())
}

fn report(outcome: Result<marquee_catalog::CatalogEvent, CatalogError>) {
    match outcome {
        Ok(event) => println!("{event}"),
        Err(error) => println!("Error: {error}"),
    }
}
