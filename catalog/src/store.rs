//! Root collections of the catalog.
//!
//! [`CatalogStore`] is plain storage: movies, theatres and coupons in
//! insertion order. Screens and shows are only reachable through their
//! theatre. Validation and conflict detection live in
//! [`crate::operations`].

use crate::types::{name_key, same_name, Coupon, Movie, Theatre};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// In-memory catalog state
///
/// Serializable for snapshots but not deserializable: a store is only built
/// through [`crate::operations::Catalog`], which enforces the catalog rules.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CatalogStore {
    movies: Vec<Movie>,
    theatres: Vec<Theatre>,
    /// Coupons keyed by normalized code
    coupons: IndexMap<String, Coupon>,
}

/// Entity counts across the whole catalog
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    /// Number of movies
    pub movies: usize,
    /// Number of theatres
    pub theatres: usize,
    /// Number of screens across all theatres
    pub screens: usize,
    /// Number of shows across all screens
    pub shows: usize,
    /// Number of coupons
    pub coupons: usize,
}

impl CatalogStore {
    /// Creates a new empty `CatalogStore`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All movies in insertion order
    #[must_use]
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// All theatres in insertion order
    #[must_use]
    pub fn theatres(&self) -> &[Theatre] {
        &self.theatres
    }

    /// All coupons in insertion order
    pub fn coupons(&self) -> impl Iterator<Item = &Coupon> {
        self.coupons.values()
    }

    /// Gets a coupon by code (case-insensitive)
    #[must_use]
    pub fn coupon(&self, code: &str) -> Option<&Coupon> {
        self.coupons.get(&name_key(code))
    }

    /// Gets the first movie with the given title (case-insensitive)
    #[must_use]
    pub fn find_movie(&self, title: &str) -> Option<&Movie> {
        self.movies.iter().find(|m| same_name(&m.title, title))
    }

    /// Gets a theatre by name (case-insensitive)
    #[must_use]
    pub fn find_theatre(&self, name: &str) -> Option<&Theatre> {
        self.theatres.iter().find(|t| same_name(&t.name, name))
    }

    /// Gets a mutable theatre by name (case-insensitive)
    pub fn find_theatre_mut(&mut self, name: &str) -> Option<&mut Theatre> {
        self.theatres.iter_mut().find(|t| same_name(&t.name, name))
    }

    /// Counts entities at every level of the hierarchy
    #[must_use]
    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            movies: self.movies.len(),
            theatres: self.theatres.len(),
            screens: self.theatres.iter().map(|t| t.screens.len()).sum(),
            shows: self.theatres.iter().map(Theatre::show_count).sum(),
            coupons: self.coupons.len(),
        }
    }

    pub(crate) fn push_movie(&mut self, movie: Movie) {
        self.movies.push(movie);
    }

    /// Removes the first movie matching `title`
    pub(crate) fn take_movie(&mut self, title: &str) -> Option<Movie> {
        let index = self.movies.iter().position(|m| same_name(&m.title, title))?;
        Some(self.movies.remove(index))
    }

    pub(crate) fn push_theatre(&mut self, theatre: Theatre) {
        self.theatres.push(theatre);
    }

    /// Removes the theatre matching `name` together with its screens and shows
    pub(crate) fn take_theatre(&mut self, name: &str) -> Option<Theatre> {
        let index = self.theatres.iter().position(|t| same_name(&t.name, name))?;
        Some(self.theatres.remove(index))
    }

    pub(crate) fn insert_coupon(&mut self, coupon: Coupon) {
        self.coupons.insert(name_key(&coupon.code), coupon);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Discount;

    #[test]
    fn test_empty_store() {
        let store = CatalogStore::new();
        assert!(store.movies().is_empty());
        assert!(store.theatres().is_empty());
        assert_eq!(store.coupons().count(), 0);
        assert_eq!(store.stats(), CatalogStats::default());
    }

    #[test]
    fn test_take_movie_removes_first_match_only() {
        let mut store = CatalogStore::new();
        store.push_movie(Movie::new("Nova".to_string(), "Sci-Fi".to_string(), 120));
        store.push_movie(Movie::new("NOVA".to_string(), "Drama".to_string(), 95));

        let removed = store.take_movie("nova");
        assert_eq!(removed.map(|m| m.genre), Some("Sci-Fi".to_string()));
        assert_eq!(store.movies().len(), 1);
        assert_eq!(store.movies()[0].genre, "Drama");
    }

    #[test]
    fn test_coupons_keep_insertion_order_and_casing() {
        let mut store = CatalogStore::new();
        for (code, percent) in [("SUMMER", 10.0), ("welcome", 25.0), ("Vip", 50.0)] {
            if let Some(discount) = Discount::new(percent) {
                store.insert_coupon(Coupon::new(code.to_string(), discount));
            }
        }

        let codes: Vec<&str> = store.coupons().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["SUMMER", "welcome", "Vip"]);
        assert!(store.coupon("summer").is_some());
        assert!(store.coupon("VIP").is_some());
    }
}
