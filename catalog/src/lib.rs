//! Marquee Catalog - the administrative catalog of a movie-ticketing platform
//!
//! This crate maintains the in-memory registry of movies, theatres, screens,
//! scheduled shows and promotional coupons, and enforces the rules that keep
//! it consistent:
//!
//! - **Containment**: theatres own screens, screens own shows
//! - **Resolution**: names and numbers are resolved case-insensitively, and
//!   failures are typed (`MovieNotFound`, `ScreenNotFound`, ...)
//! - **Conflict detection**: a screen can be checked for an existing show at a
//!   given date and time before scheduling another one
//! - **Fail fast**: the first violated condition is returned and nothing is
//!   mutated
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────┐      ┌────────────────────┐
//! │   CatalogCommand   │─────▶│  Catalog::execute  │──▶ CatalogEvent / CatalogError
//! └────────────────────┘      └─────────┬──────────┘
//!                                       │
//!                             ┌─────────▼──────────┐
//!                             │  Catalog (ops)     │  validate → resolve → mutate
//!                             └─────────┬──────────┘
//!                                       │
//!                             ┌─────────▼──────────┐
//!                             │   CatalogStore     │  movies · theatres · coupons
//!                             └─────────┬──────────┘
//!                                       │
//!                              Theatre ─▶ Screen ─▶ Show
//! ```
//!
//! Printing and input parsing belong to the caller. See `src/bin/demo.rs` for
//! a scripted session.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod commands;
pub mod config;
pub mod error;
pub mod operations;
pub mod store;
pub mod types;

pub use commands::{CatalogCommand, CatalogEvent};
pub use config::CatalogConfig;
pub use error::{CatalogError, ErrorKind, Result};
pub use operations::Catalog;
pub use store::{CatalogStats, CatalogStore};
pub use types::*;
