//! Catalog operations.
//!
//! [`Catalog`] is the operation surface over a [`CatalogStore`]. Each call
//! validates its arguments, resolves names and numbers against the store,
//! and only then mutates it, so a failed call leaves the store untouched.
//!
//! Resolution order is fixed and determines which error is reported when
//! several inputs are wrong:
//!
//! ```text
//! add_show:    movie → theatre → screen → seats/price → (double booking)
//! remove_show: theatre → screen → show
//! show_exists: theatre → screen
//! ```
//!
//! # Example
//!
//! ```
//! use chrono::{NaiveDate, NaiveTime};
//! use marquee_catalog::{Catalog, CatalogConfig};
//!
//! # fn main() -> marquee_catalog::Result<()> {
//! let mut catalog = Catalog::new(CatalogConfig::default());
//! catalog.add_theatre("Grand", "Metropolis", "1st Ave", 2)?;
//! catalog.add_movie("Nova", "Sci-Fi", 120)?;
//!
//! let time = NaiveTime::from_hms_opt(18, 0, 0).unwrap();
//! let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! catalog.add_show("Grand", 1, "Nova", time, date, 100, 12.50)?;
//!
//! assert!(catalog.show_exists("grand", 1, time, date)?);
//! # Ok(())
//! # }
//! ```

use crate::config::CatalogConfig;
use crate::error::{CatalogError, Result};
use crate::store::CatalogStore;
use crate::types::{
    is_blank, Coupon, Discount, Money, Movie, Screen, ScreenNumber, Show, Theatre,
};
use chrono::{NaiveDate, NaiveTime};
use tracing::{debug, info, warn};

/// Operation surface of the catalog
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    store: CatalogStore,
    config: CatalogConfig,
}

impl Catalog {
    /// Creates a catalog over an empty store
    #[must_use]
    pub fn new(config: CatalogConfig) -> Self {
        Self::with_store(CatalogStore::new(), config)
    }

    /// Creates a catalog over an existing store
    #[must_use]
    pub const fn with_store(store: CatalogStore, config: CatalogConfig) -> Self {
        Self { store, config }
    }

    /// Read access to the underlying store
    #[must_use]
    pub const fn store(&self) -> &CatalogStore {
        &self.store
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Consumes the catalog, returning its store
    #[must_use]
    pub fn into_store(self) -> CatalogStore {
        self.store
    }

    /// All movies in insertion order
    #[must_use]
    pub fn get_movies(&self) -> &[Movie] {
        self.store.movies()
    }

    /// All theatres in insertion order
    #[must_use]
    pub fn get_theatres(&self) -> &[Theatre] {
        self.store.theatres()
    }

    /// All coupons in insertion order
    pub fn get_coupons(&self) -> impl Iterator<Item = &Coupon> {
        self.store.coupons()
    }

    // ========================================================================
    // Movies
    // ========================================================================

    /// Registers a movie.
    ///
    /// Duplicate titles are accepted unless
    /// [`CatalogConfig::reject_duplicate_titles`] is set.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::InvalidArgument`] if `title` or `genre` is blank or
    ///   `duration_minutes` is zero
    /// - [`CatalogError::DuplicateMovie`] if titles must be unique and one
    ///   already matches
    #[tracing::instrument(skip(self))]
    pub fn add_movie(&mut self, title: &str, genre: &str, duration_minutes: u32) -> Result<()> {
        self.validate_add_movie(title, genre, duration_minutes)
            .inspect_err(|error| warn!(%error, "Rejected movie"))?;

        self.store.push_movie(Movie::new(
            title.to_string(),
            genre.to_string(),
            duration_minutes,
        ));
        info!(title, genre, duration_minutes, "Movie added");
        Ok(())
    }

    fn validate_add_movie(&self, title: &str, genre: &str, duration_minutes: u32) -> Result<()> {
        if is_blank(title) || is_blank(genre) || duration_minutes == 0 {
            return Err(CatalogError::invalid("Invalid movie details provided."));
        }

        if self.config.reject_duplicate_titles && self.store.find_movie(title).is_some() {
            return Err(CatalogError::DuplicateMovie {
                title: title.to_string(),
            });
        }

        Ok(())
    }

    /// Removes the first movie whose title matches, returning it.
    ///
    /// Shows that already screen the movie keep their snapshot of it.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MovieNotFound`] if no title matches.
    #[tracing::instrument(skip(self))]
    pub fn remove_movie(&mut self, title: &str) -> Result<Movie> {
        let movie = self
            .store
            .take_movie(title)
            .ok_or_else(|| CatalogError::MovieNotFound {
                title: title.to_string(),
            })
            .inspect_err(|error| warn!(%error, "Movie removal failed"))?;

        info!(title = %movie.title, "Movie removed");
        Ok(movie)
    }

    // ========================================================================
    // Theatres and screens
    // ========================================================================

    /// Builds a standalone screen with the given number.
    ///
    /// The screen is not attached to any theatre; theatres receive their
    /// screens from [`Catalog::add_theatre`].
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidArgument`] if `screen_number` is zero.
    #[allow(clippy::unused_self)]
    pub fn add_screen(&self, screen_number: u32) -> Result<Screen> {
        ScreenNumber::new(screen_number)
            .map(Screen::new)
            .inspect_err(|error| warn!(%error, screen_number, "Rejected screen"))
    }

    /// Registers a theatre with screens numbered `1..=num_screens`.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::InvalidArgument`] if any text field is blank or
    ///   `num_screens` is zero, or above
    ///   [`CatalogConfig::max_screens_per_theatre`] when a cap is configured
    /// - [`CatalogError::DuplicateTheatre`] if the name is already taken
    #[tracing::instrument(skip(self))]
    pub fn add_theatre(
        &mut self,
        name: &str,
        city: &str,
        street: &str,
        num_screens: u32,
    ) -> Result<()> {
        let theatre = self
            .build_theatre(name, city, street, num_screens)
            .inspect_err(|error| warn!(%error, "Rejected theatre"))?;

        self.store.push_theatre(theatre);
        info!(name, city, street, num_screens, "Theatre added");
        Ok(())
    }

    fn build_theatre(
        &self,
        name: &str,
        city: &str,
        street: &str,
        num_screens: u32,
    ) -> Result<Theatre> {
        if is_blank(name) || is_blank(city) || is_blank(street) || num_screens == 0 {
            return Err(CatalogError::invalid("Invalid theatre details provided."));
        }

        if let Some(max) = self.config.max_screens_per_theatre {
            if num_screens > max {
                return Err(CatalogError::invalid(format!(
                    "Too many screens: {num_screens} (max {max})"
                )));
            }
        }

        if self.store.find_theatre(name).is_some() {
            return Err(CatalogError::DuplicateTheatre {
                name: name.to_string(),
            });
        }

        let mut theatre = Theatre::new(name.to_string(), city.to_string(), street.to_string());
        for number in 1..=num_screens {
            theatre.screens.push(self.add_screen(number)?);
        }
        Ok(theatre)
    }

    /// Removes a theatre together with all of its screens and shows,
    /// returning it.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::TheatreNotFound`] if no name matches.
    #[tracing::instrument(skip(self))]
    pub fn remove_theatre(&mut self, name: &str) -> Result<Theatre> {
        let theatre = self
            .store
            .take_theatre(name)
            .ok_or_else(|| CatalogError::TheatreNotFound {
                name: name.to_string(),
            })
            .inspect_err(|error| warn!(%error, "Theatre removal failed"))?;

        info!(
            name = %theatre.name,
            screens = theatre.screens.len(),
            shows = theatre.show_count(),
            "Theatre removed"
        );
        Ok(theatre)
    }

    // ========================================================================
    // Shows
    // ========================================================================

    /// Checks whether the screen already has a show at the given date and
    /// time.
    ///
    /// This is the conflict-detection primitive. [`Catalog::add_show`] only
    /// calls it itself when [`CatalogConfig::reject_double_booking`] is set.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::TheatreNotFound`] if no theatre name matches
    /// - [`CatalogError::ScreenNotFound`] if the theatre has no such screen
    #[tracing::instrument(skip(self))]
    pub fn show_exists(
        &self,
        theatre_name: &str,
        screen_no: u32,
        show_time: NaiveTime,
        show_date: NaiveDate,
    ) -> Result<bool> {
        let screen = self
            .resolve_screen(theatre_name, screen_no)
            .inspect_err(|error| warn!(%error, "Show lookup failed"))?;

        let exists = screen.is_booked(show_date, show_time);
        debug!(exists, "Show lookup");
        Ok(exists)
    }

    /// Shows scheduled on a screen, in insertion order.
    ///
    /// # Errors
    ///
    /// Same as [`Catalog::show_exists`].
    pub fn shows_for(&self, theatre_name: &str, screen_no: u32) -> Result<&[Show]> {
        self.resolve_screen(theatre_name, screen_no)
            .map(|screen| screen.shows.as_slice())
    }

    /// Schedules a show.
    ///
    /// # Errors
    ///
    /// Checked in this order, the first failure is returned:
    ///
    /// - [`CatalogError::MovieNotFound`] if no movie title matches
    /// - [`CatalogError::TheatreNotFound`] if no theatre name matches
    /// - [`CatalogError::ScreenNotFound`] if the theatre has no such screen
    /// - [`CatalogError::InvalidArgument`] if `ticket_price` is negative,
    ///   not a finite amount, or not a whole number of cents
    /// - [`CatalogError::ShowConflict`] if double booking is rejected and the
    ///   screen is already booked at `show_date`/`show_time`
    #[tracing::instrument(skip(self))]
    #[allow(clippy::too_many_arguments)]
    pub fn add_show(
        &mut self,
        theatre_name: &str,
        screen_no: u32,
        movie_title: &str,
        show_time: NaiveTime,
        show_date: NaiveDate,
        available_seats: u32,
        ticket_price: f64,
    ) -> Result<()> {
        let show = self
            .build_show(
                theatre_name,
                screen_no,
                movie_title,
                show_time,
                show_date,
                available_seats,
                ticket_price,
            )
            .inspect_err(|error| warn!(%error, "Rejected show"))?;

        let theatre = show.theatre.clone();
        let movie = show.movie.title.clone();
        self.resolve_screen_mut(theatre_name, screen_no)?
            .shows
            .push(show);

        info!(%theatre, screen_no, %movie, %show_date, %show_time, "Show added");
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    fn build_show(
        &self,
        theatre_name: &str,
        screen_no: u32,
        movie_title: &str,
        show_time: NaiveTime,
        show_date: NaiveDate,
        available_seats: u32,
        ticket_price: f64,
    ) -> Result<Show> {
        let movie = self
            .store
            .find_movie(movie_title)
            .ok_or_else(|| CatalogError::MovieNotFound {
                title: movie_title.to_string(),
            })?;
        let theatre = self.resolve_theatre(theatre_name)?;
        let screen = Self::resolve_screen_in(theatre, screen_no)?;

        let ticket_price = Money::try_from_amount(ticket_price)
            .ok_or_else(|| CatalogError::invalid("Invalid show details provided."))?;

        if self.config.reject_double_booking && screen.is_booked(show_date, show_time) {
            return Err(CatalogError::ShowConflict {
                theatre: theatre.name.clone(),
                screen_number: screen_no,
                show_date,
                show_time,
            });
        }

        Ok(Show::new(
            movie.clone(),
            show_time,
            show_date,
            available_seats,
            theatre.name.clone(),
            ticket_price,
        ))
    }

    /// Removes the first show on the screen that screens `movie_title` at
    /// `show_time`, returning it.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::TheatreNotFound`] if no theatre name matches
    /// - [`CatalogError::ScreenNotFound`] if the theatre has no such screen
    /// - [`CatalogError::ShowNotFound`] if no show matches
    #[tracing::instrument(skip(self))]
    pub fn remove_show(
        &mut self,
        theatre_name: &str,
        screen_no: u32,
        movie_title: &str,
        show_time: NaiveTime,
    ) -> Result<Show> {
        let screen = self
            .resolve_screen_mut(theatre_name, screen_no)
            .inspect_err(|error| warn!(%error, "Show removal failed"))?;

        let Some(index) = screen.position_of(movie_title, show_time) else {
            let error = CatalogError::ShowNotFound {
                movie: movie_title.to_string(),
                show_time,
            };
            warn!(%error, "Show removal failed");
            return Err(error);
        };

        let show = screen.shows.remove(index);
        info!(
            theatre = %show.theatre,
            screen_no,
            movie = %show.movie.title,
            %show_time,
            "Show removed"
        );
        Ok(show)
    }

    // ========================================================================
    // Coupons
    // ========================================================================

    /// Registers a coupon.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::InvalidArgument`] if `code` is blank or
    ///   `discount_percent` is outside `(0, 100]`
    /// - [`CatalogError::DuplicateCoupon`] if the code is already registered
    #[tracing::instrument(skip(self))]
    pub fn add_coupon(&mut self, code: &str, discount_percent: f64) -> Result<()> {
        let coupon = self
            .build_coupon(code, discount_percent)
            .inspect_err(|error| warn!(%error, "Rejected coupon"))?;

        self.store.insert_coupon(coupon);
        info!(code, discount_percent, "Coupon added");
        Ok(())
    }

    fn build_coupon(&self, code: &str, discount_percent: f64) -> Result<Coupon> {
        let discount = Discount::new(discount_percent)
            .filter(|_| !is_blank(code))
            .ok_or_else(|| CatalogError::invalid("Invalid coupon details provided."))?;

        if self.store.coupon(code).is_some() {
            return Err(CatalogError::DuplicateCoupon {
                code: code.to_string(),
            });
        }

        Ok(Coupon::new(code.to_string(), discount))
    }

    // ========================================================================
    // Resolution
    // ========================================================================

    fn resolve_theatre(&self, name: &str) -> Result<&Theatre> {
        self.store
            .find_theatre(name)
            .ok_or_else(|| CatalogError::TheatreNotFound {
                name: name.to_string(),
            })
    }

    fn resolve_screen_in(theatre: &Theatre, screen_no: u32) -> Result<&Screen> {
        theatre
            .screen(screen_no)
            .ok_or_else(|| CatalogError::ScreenNotFound {
                screen_number: screen_no,
                theatre: theatre.name.clone(),
            })
    }

    fn resolve_screen(&self, theatre_name: &str, screen_no: u32) -> Result<&Screen> {
        let theatre = self.resolve_theatre(theatre_name)?;
        Self::resolve_screen_in(theatre, screen_no)
    }

    fn resolve_screen_mut(&mut self, theatre_name: &str, screen_no: u32) -> Result<&mut Screen> {
        let theatre = self
            .store
            .find_theatre_mut(theatre_name)
            .ok_or_else(|| CatalogError::TheatreNotFound {
                name: theatre_name.to_string(),
            })?;
        let name = theatre.name.clone();
        theatre
            .screen_mut(screen_no)
            .ok_or(CatalogError::ScreenNotFound {
                screen_number: screen_no,
                theatre: name,
            })
    }
}
