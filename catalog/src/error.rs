//! Error taxonomy for catalog operations.
//!
//! Every operation validates and resolves its inputs eagerly and returns the
//! first violated condition as a [`CatalogError`]. Nothing is mutated before
//! an error is returned.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while operating on the catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A required field is blank or a numeric field is out of range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No movie matches the given title.
    #[error("Movie not found: {title}")]
    MovieNotFound {
        /// Title that was looked up.
        title: String,
    },

    /// No theatre matches the given name.
    #[error("Theatre not found: {name}")]
    TheatreNotFound {
        /// Name that was looked up.
        name: String,
    },

    /// The theatre exists but has no screen with the given number.
    #[error("Screen {screen_number} not found in theatre {theatre}")]
    ScreenNotFound {
        /// Screen number that was looked up.
        screen_number: u32,
        /// Name of the theatre that was searched.
        theatre: String,
    },

    /// No show on the screen matches the movie title and show time.
    #[error("Show not found: {movie} at {show_time}")]
    ShowNotFound {
        /// Movie title that was looked up.
        movie: String,
        /// Show time that was looked up.
        show_time: NaiveTime,
    },

    /// A coupon with the same code is already registered.
    #[error("Coupon already exists: {code}")]
    DuplicateCoupon {
        /// The conflicting code.
        code: String,
    },

    /// A movie with the same title is already registered.
    ///
    /// Only raised when duplicate titles are rejected by configuration.
    #[error("Movie already exists: {title}")]
    DuplicateMovie {
        /// The conflicting title.
        title: String,
    },

    /// A theatre with the same name is already registered.
    #[error("Theatre already exists: {name}")]
    DuplicateTheatre {
        /// The conflicting name.
        name: String,
    },

    /// The screen already has a show at the requested date and time.
    ///
    /// Only raised when double booking is rejected by configuration.
    #[error(
        "Screen {screen_number} in theatre {theatre} already has a show on {show_date} at {show_time}"
    )]
    ShowConflict {
        /// Theatre owning the screen.
        theatre: String,
        /// Screen that is already booked.
        screen_number: u32,
        /// Date of the existing show.
        show_date: NaiveDate,
        /// Time of the existing show.
        show_time: NaiveTime,
    },
}

/// Stable, data-free classification of a [`CatalogError`].
///
/// Presentation layers map this to status codes or message styles without
/// matching on error payloads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// See [`CatalogError::InvalidArgument`].
    InvalidArgument,
    /// See [`CatalogError::MovieNotFound`].
    MovieNotFound,
    /// See [`CatalogError::TheatreNotFound`].
    TheatreNotFound,
    /// See [`CatalogError::ScreenNotFound`].
    ScreenNotFound,
    /// See [`CatalogError::ShowNotFound`].
    ShowNotFound,
    /// See [`CatalogError::DuplicateCoupon`].
    DuplicateCoupon,
    /// See [`CatalogError::DuplicateMovie`].
    DuplicateMovie,
    /// See [`CatalogError::DuplicateTheatre`].
    DuplicateTheatre,
    /// See [`CatalogError::ShowConflict`].
    ShowConflict,
}

impl CatalogError {
    /// Shorthand for [`CatalogError::InvalidArgument`].
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Returns the kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::MovieNotFound { .. } => ErrorKind::MovieNotFound,
            Self::TheatreNotFound { .. } => ErrorKind::TheatreNotFound,
            Self::ScreenNotFound { .. } => ErrorKind::ScreenNotFound,
            Self::ShowNotFound { .. } => ErrorKind::ShowNotFound,
            Self::DuplicateCoupon { .. } => ErrorKind::DuplicateCoupon,
            Self::DuplicateMovie { .. } => ErrorKind::DuplicateMovie,
            Self::DuplicateTheatre { .. } => ErrorKind::DuplicateTheatre,
            Self::ShowConflict { .. } => ErrorKind::ShowConflict,
        }
    }

    /// Returns `true` for the referential lookup failures (`*NotFound`).
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::MovieNotFound { .. }
                | Self::TheatreNotFound { .. }
                | Self::ScreenNotFound { .. }
                | Self::ShowNotFound { .. }
        )
    }
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_not_found_message_names_screen_and_theatre() {
        let error = CatalogError::ScreenNotFound {
            screen_number: 3,
            theatre: "Grand".to_string(),
        };
        assert_eq!(error.to_string(), "Screen 3 not found in theatre Grand");
        assert_eq!(error.kind(), ErrorKind::ScreenNotFound);
        assert!(error.is_not_found());
    }

    #[test]
    fn test_invalid_is_not_a_lookup_failure() {
        let error = CatalogError::invalid("duration must be positive");
        assert_eq!(error.kind(), ErrorKind::InvalidArgument);
        assert!(!error.is_not_found());
        assert_eq!(
            error.to_string(),
            "Invalid argument: duration must be positive"
        );
    }
}
