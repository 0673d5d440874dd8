//! Domain types for the catalog.
//!
//! Value objects (`ScreenNumber`, `Money`, `Discount`) and the five entities
//! of the catalog hierarchy: `Movie`, `Theatre`, `Screen`, `Show` and `Coupon`.
//! Theatres own their screens and screens own their shows; nothing here
//! performs validation beyond what a value object guarantees on construction.

use crate::error::{CatalogError, Result};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Case-insensitive name comparison used for titles, theatre names and codes.
#[must_use]
pub fn same_name(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

/// Normalized key for a case-insensitive name.
#[must_use]
pub fn name_key(name: &str) -> String {
    name.to_lowercase()
}

/// Returns `true` when `value` is empty or only whitespace.
#[must_use]
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

// ============================================================================
// Value Objects
// ============================================================================

/// Number of a screen, local to its theatre (always positive)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32")]
pub struct ScreenNumber(u32);

impl ScreenNumber {
    /// Creates a `ScreenNumber`
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidArgument`] when `value` is zero.
    pub fn new(value: u32) -> Result<Self> {
        if value == 0 {
            return Err(CatalogError::invalid("Invalid screen number."));
        }
        Ok(Self(value))
    }

    /// Returns the numeric value
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for ScreenNumber {
    type Error = CatalogError;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

impl fmt::Display for ScreenNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents a non-negative monetary amount in cents
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Money(u64);

impl Money {
    /// Creates a `Money` value from cents
    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Converts a decimal amount (e.g. `12.50`) to `Money`.
    ///
    /// Returns `None` for negative, NaN, infinite or overflowing amounts, and
    /// for amounts that are not a whole number of cents (e.g. `9.999`).
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )] // range checked before the cast
    pub fn try_from_amount(amount: f64) -> Option<Self> {
        if !amount.is_finite() || amount < 0.0 {
            return None;
        }
        let scaled = amount * 100.0;
        let cents = scaled.round();
        // tolerance absorbs binary representation error (9.99 * 100.0)
        if (scaled - cents).abs() > 1e-6 || cents >= u64::MAX as f64 {
            return None;
        }
        Some(Self(cents as u64))
    }

    /// Returns the amount in cents
    #[must_use]
    pub const fn cents(&self) -> u64 {
        self.0
    }

    /// Checks if the amount is zero
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Coupon discount percentage in `(0, 100]`
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64")]
pub struct Discount(f64);

impl Discount {
    /// Creates a `Discount`, or `None` when `percent` is outside `(0, 100]`.
    #[must_use]
    pub fn new(percent: f64) -> Option<Self> {
        (percent.is_finite() && percent > 0.0 && percent <= 100.0).then_some(Self(percent))
    }

    /// Returns the percentage
    #[must_use]
    pub const fn percent(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Discount {
    type Error = CatalogError;

    fn try_from(percent: f64) -> Result<Self> {
        Self::new(percent)
            .ok_or_else(|| CatalogError::invalid(format!("Invalid discount: {percent}")))
    }
}

impl fmt::Display for Discount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

// ============================================================================
// Entities
// ============================================================================

/// A movie that can be scheduled
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Title (matched case-insensitively)
    pub title: String,
    /// Genre
    pub genre: String,
    /// Running time in minutes
    pub duration_minutes: u32,
}

impl Movie {
    /// Creates a new `Movie`
    #[must_use]
    pub const fn new(title: String, genre: String, duration_minutes: u32) -> Self {
        Self {
            title,
            genre,
            duration_minutes,
        }
    }
}

/// A scheduled screening of a movie on one screen
///
/// Holds a snapshot of the movie as it was when the show was created and the
/// name of the theatre that owns the screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Show {
    /// Movie being screened
    pub movie: Movie,
    /// Time of day the show starts
    pub show_time: NaiveTime,
    /// Date of the show
    pub show_date: NaiveDate,
    /// Seats still available
    pub available_seats: u32,
    /// Name of the owning theatre
    pub theatre: String,
    /// Price of one ticket
    pub ticket_price: Money,
}

impl Show {
    /// Creates a new `Show`
    #[must_use]
    pub const fn new(
        movie: Movie,
        show_time: NaiveTime,
        show_date: NaiveDate,
        available_seats: u32,
        theatre: String,
        ticket_price: Money,
    ) -> Self {
        Self {
            movie,
            show_time,
            show_date,
            available_seats,
            theatre,
            ticket_price,
        }
    }

    /// Returns `true` when the show occupies the given slot
    #[must_use]
    pub fn is_at(&self, show_date: NaiveDate, show_time: NaiveTime) -> bool {
        self.show_date == show_date && self.show_time == show_time
    }

    /// Returns `true` when the show screens `title` at `show_time`
    #[must_use]
    pub fn is_screening(&self, title: &str, show_time: NaiveTime) -> bool {
        self.show_time == show_time && same_name(&self.movie.title, title)
    }
}

/// An auditorium within a theatre
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screen {
    /// Number, unique within the owning theatre
    pub number: ScreenNumber,
    /// Shows in insertion order
    pub shows: Vec<Show>,
}

impl Screen {
    /// Creates an empty `Screen`
    #[must_use]
    pub const fn new(number: ScreenNumber) -> Self {
        Self {
            number,
            shows: Vec::new(),
        }
    }

    /// Returns `true` if any show occupies the given slot
    #[must_use]
    pub fn is_booked(&self, show_date: NaiveDate, show_time: NaiveTime) -> bool {
        self.shows.iter().any(|show| show.is_at(show_date, show_time))
    }

    /// Position of the first show screening `title` at `show_time`
    #[must_use]
    pub fn position_of(&self, title: &str, show_time: NaiveTime) -> Option<usize> {
        self.shows
            .iter()
            .position(|show| show.is_screening(title, show_time))
    }
}

/// A theatre and the screens it owns
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theatre {
    /// Name (unique, matched case-insensitively)
    pub name: String,
    /// City
    pub city: String,
    /// Street address
    pub street: String,
    /// Screens in ascending number order
    pub screens: Vec<Screen>,
}

impl Theatre {
    /// Creates a `Theatre` with no screens
    #[must_use]
    pub const fn new(name: String, city: String, street: String) -> Self {
        Self {
            name,
            city,
            street,
            screens: Vec::new(),
        }
    }

    /// Gets a screen by number
    #[must_use]
    pub fn screen(&self, number: u32) -> Option<&Screen> {
        self.screens.iter().find(|s| s.number.value() == number)
    }

    /// Gets a mutable screen by number
    pub fn screen_mut(&mut self, number: u32) -> Option<&mut Screen> {
        self.screens.iter_mut().find(|s| s.number.value() == number)
    }

    /// Total number of shows across all screens
    #[must_use]
    pub fn show_count(&self) -> usize {
        self.screens.iter().map(|s| s.shows.len()).sum()
    }
}

/// A promotional coupon
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    /// Code as registered (matched case-insensitively)
    pub code: String,
    /// Discount granted by the coupon
    pub discount: Discount,
}

impl Coupon {
    /// Creates a new `Coupon`
    #[must_use]
    pub const fn new(code: String, discount: Discount) -> Self {
        Self { code, discount }
    }
}
