//! Command surface for presentation layers.
//!
//! Commands express intent, events record what happened. A presentation
//! layer builds a [`CatalogCommand`] from already-parsed input, hands it to
//! [`Catalog::execute`], and renders either the returned [`CatalogEvent`]
//! (its `Display` gives the status message) or the [`CatalogError`].
//!
//! [`CatalogError`]: crate::error::CatalogError

use crate::error::Result;
use crate::operations::Catalog;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A request to change or query the catalog
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CatalogCommand {
    /// Register a movie
    AddMovie {
        /// Movie title
        title: String,
        /// Movie genre
        genre: String,
        /// Running time in minutes
        duration_minutes: u32,
    },

    /// Remove a movie by title
    RemoveMovie {
        /// Movie title
        title: String,
    },

    /// Register a theatre with numbered screens
    AddTheatre {
        /// Theatre name
        name: String,
        /// City
        city: String,
        /// Street address
        street: String,
        /// Number of screens to create
        num_screens: u32,
    },

    /// Remove a theatre with its screens and shows
    RemoveTheatre {
        /// Theatre name
        name: String,
    },

    /// Schedule a show
    AddShow {
        /// Theatre name
        theatre: String,
        /// Screen number within the theatre
        screen_no: u32,
        /// Movie title
        movie: String,
        /// Start time
        show_time: NaiveTime,
        /// Show date
        show_date: NaiveDate,
        /// Seat capacity
        available_seats: u32,
        /// Ticket price as a decimal amount
        ticket_price: f64,
    },

    /// Remove a show
    RemoveShow {
        /// Theatre name
        theatre: String,
        /// Screen number within the theatre
        screen_no: u32,
        /// Movie title
        movie: String,
        /// Start time
        show_time: NaiveTime,
    },

    /// Check whether a screen is booked at a date and time
    ShowExists {
        /// Theatre name
        theatre: String,
        /// Screen number within the theatre
        screen_no: u32,
        /// Start time
        show_time: NaiveTime,
        /// Show date
        show_date: NaiveDate,
    },

    /// Register a coupon
    AddCoupon {
        /// Coupon code
        code: String,
        /// Discount percentage in `(0, 100]`
        discount_percent: f64,
    },
}

/// Outcome of a successfully executed [`CatalogCommand`]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CatalogEvent {
    /// Movie was registered
    MovieAdded {
        /// Movie title
        title: String,
    },

    /// Movie was removed
    MovieRemoved {
        /// Title of the removed movie
        title: String,
    },

    /// Theatre was registered
    TheatreAdded {
        /// Theatre name
        name: String,
        /// Number of screens created
        screens: u32,
    },

    /// Theatre was removed with everything it owned
    TheatreRemoved {
        /// Theatre name
        name: String,
        /// Number of shows removed with it
        shows_removed: usize,
    },

    /// Show was scheduled
    ShowAdded {
        /// Theatre name
        theatre: String,
        /// Screen number
        screen_no: u32,
        /// Movie title
        movie: String,
    },

    /// Show was removed
    ShowRemoved {
        /// Theatre name
        theatre: String,
        /// Screen number
        screen_no: u32,
        /// Movie title
        movie: String,
    },

    /// Screen booking was checked
    ShowChecked {
        /// Theatre name
        theatre: String,
        /// Screen number
        screen_no: u32,
        /// Whether a show occupies the slot
        exists: bool,
    },

    /// Coupon was registered
    CouponAdded {
        /// Coupon code
        code: String,
    },
}

impl fmt::Display for CatalogEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MovieAdded { .. } => write!(f, "Movie Added Successfully."),
            Self::MovieRemoved { title } => write!(f, "Movie successfully removed: {title}"),
            Self::TheatreAdded { name, screens } => {
                write!(f, "Theatre successfully added: {name} with {screens} screen(s)")
            }
            Self::TheatreRemoved { name, .. } => write!(f, "Theatre successfully removed: {name}"),
            Self::ShowAdded {
                theatre,
                screen_no,
                movie,
            } => write!(
                f,
                "Show successfully added: {movie} at {theatre}, Screen {screen_no}"
            ),
            Self::ShowRemoved {
                theatre,
                screen_no,
                movie,
            } => write!(
                f,
                "Show successfully removed: {movie} at {theatre}, Screen {screen_no}"
            ),
            Self::ShowChecked {
                theatre,
                screen_no,
                exists,
            } => {
                if *exists {
                    write!(f, "Screen {screen_no} at {theatre} is booked for that slot")
                } else {
                    write!(f, "Screen {screen_no} at {theatre} is free for that slot")
                }
            }
            Self::CouponAdded { .. } => write!(f, "Coupon added successfully!"),
        }
    }
}

impl Catalog {
    /// Executes a command, returning the event it produced.
    ///
    /// # Errors
    ///
    /// Returns whatever error the underlying operation returns; the catalog
    /// is unchanged in that case.
    pub fn execute(&mut self, command: CatalogCommand) -> Result<CatalogEvent> {
        match command {
            CatalogCommand::AddMovie {
                title,
                genre,
                duration_minutes,
            } => {
                self.add_movie(&title, &genre, duration_minutes)?;
                Ok(CatalogEvent::MovieAdded { title })
            }

            CatalogCommand::RemoveMovie { title } => {
                let movie = self.remove_movie(&title)?;
                Ok(CatalogEvent::MovieRemoved { title: movie.title })
            }

            CatalogCommand::AddTheatre {
                name,
                city,
                street,
                num_screens,
            } => {
                self.add_theatre(&name, &city, &street, num_screens)?;
                Ok(CatalogEvent::TheatreAdded {
                    name,
                    screens: num_screens,
                })
            }

            CatalogCommand::RemoveTheatre { name } => {
                let theatre = self.remove_theatre(&name)?;
                Ok(CatalogEvent::TheatreRemoved {
                    shows_removed: theatre.show_count(),
                    name: theatre.name,
                })
            }

            CatalogCommand::AddShow {
                theatre,
                screen_no,
                movie,
                show_time,
                show_date,
                available_seats,
                ticket_price,
            } => {
                self.add_show(
                    &theatre,
                    screen_no,
                    &movie,
                    show_time,
                    show_date,
                    available_seats,
                    ticket_price,
                )?;
                Ok(CatalogEvent::ShowAdded {
                    theatre,
                    screen_no,
                    movie,
                })
            }

            CatalogCommand::RemoveShow {
                theatre,
                screen_no,
                movie,
                show_time,
            } => {
                let show = self.remove_show(&theatre, screen_no, &movie, show_time)?;
                Ok(CatalogEvent::ShowRemoved {
                    theatre: show.theatre,
                    screen_no,
                    movie,
                })
            }

            CatalogCommand::ShowExists {
                theatre,
                screen_no,
                show_time,
                show_date,
            } => {
                let exists = self.show_exists(&theatre, screen_no, show_time, show_date)?;
                Ok(CatalogEvent::ShowChecked {
                    theatre,
                    screen_no,
                    exists,
                })
            }

            CatalogCommand::AddCoupon {
                code,
                discount_percent,
            } => {
                self.add_coupon(&code, discount_percent)?;
                Ok(CatalogEvent::CouponAdded { code })
            }
        }
    }
}
