//! Library model.
//!
//! A library must be signed up before it ships anything. Signup takes
//! `signup_days`; afterwards it ships up to `ship_rate` books per day
//! until the day budget runs out.

use serde::Serialize;

use super::{sum_scores, Book, Days};

/// Library identifier (position in the input).
pub type LibraryId = usize;

/// A library offering a set of books.
///
/// Books are sorted by descending score on construction and stay that
/// way; admission truncates this order to the library's capacity.
#[derive(Debug, Clone, Serialize)]
pub struct Library {
    id: LibraryId,
    signup_days: Days,
    ship_rate: u32,
    books: Vec<Book>,
    total_score: u64,
    static_value: f64,
}

impl Library {
    /// Creates a library, sorting its books and precomputing its static value.
    ///
    /// The sort is stable: books with equal scores keep their input order.
    pub fn new(id: LibraryId, signup_days: Days, ship_rate: u32, mut books: Vec<Book>) -> Self {
        books.sort_by(|a, b| b.score.cmp(&a.score));
        let total_score = sum_scores(&books);
        let static_value = if signup_days == 0 {
            0.0
        } else {
            total_score as f64 / signup_days as f64
        };

        Self {
            id,
            signup_days,
            ship_rate,
            books,
            total_score,
            static_value,
        }
    }

    /// Library identifier.
    #[inline]
    pub fn id(&self) -> LibraryId {
        self.id
    }

    /// Days spent signing up before any book ships.
    #[inline]
    pub fn signup_days(&self) -> Days {
        self.signup_days
    }

    /// Books shipped per day once signed up.
    #[inline]
    pub fn ship_rate(&self) -> u32 {
        self.ship_rate
    }

    /// Books sorted by descending score.
    #[inline]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Sum of all book scores offered by this library.
    #[inline]
    pub fn total_score(&self) -> u64 {
        self.total_score
    }

    /// Precomputed ranking proxy: `total_score / signup_days`.
    ///
    /// Ignores throughput and already-claimed books.
    #[inline]
    pub fn static_value(&self) -> f64 {
        self.static_value
    }

    /// Number of books this library can ship when signed up with
    /// `days_remaining` left.
    ///
    /// Returns `None` when the signup itself does not fit in the remaining
    /// days. A library that fits exactly has capacity zero.
    pub fn capacity(&self, days_remaining: Days) -> Option<u64> {
        days_remaining
            .checked_sub(self.signup_days)
            .map(|shipping_days| u64::from(shipping_days) * u64::from(self.ship_rate))
    }
}
