//! Star rating value object (1 to 5).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Lowest selectable rating.
pub const MIN_STARS: u8 = 1;

/// Highest selectable rating.
pub const MAX_STARS: u8 = 5;

/// A customer's star rating: 1 (worst) to 5 (best).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Creates a Rating, returning error if outside 1..=5.
    pub fn new(stars: u8) -> Result<Self, ValidationError> {
        if (MIN_STARS..=MAX_STARS).contains(&stars) {
            Ok(Self(stars))
        } else {
            Err(ValidationError::out_of_range(
                "rating",
                MIN_STARS as i64,
                MAX_STARS as i64,
                stars as i64,
            ))
        }
    }

    /// Every selectable rating, lowest first.
    pub fn all() -> impl Iterator<Item = Rating> {
        (MIN_STARS..=MAX_STARS).map(Rating)
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns "1 star", "2 stars", ...
    pub fn label(&self) -> String {
        let noun = if self.0 == 1 { "star" } else { "stars" };
        format!("{} {}", self.0, noun)
    }

    /// Returns a filled/empty star bar, e.g. `★★★☆☆`.
    pub fn star_bar(&self) -> String {
        let filled = "★".repeat(self.0 as usize);
        let empty = "☆".repeat((MAX_STARS - self.0) as usize);
        format!("{}{}", filled, empty)
    }
}

impl TryFrom<u8> for Rating {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rating::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
