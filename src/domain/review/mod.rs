//! Review domain module.
//!
//! The three-step review flow (rating, comment, product) and the records it
//! produces.
//!
//! # Flow
//!
//! ```text
//! Rating ──rating 1-5──▶ Comment ──text──▶ Product ──catalogue pick──▶ Complete
//! ```

mod comment;
mod errors;
mod rating;
#[allow(clippy::module_inception)]
mod review;
mod session;
mod step;

pub use comment::{Comment, CommentBounds, PREVIEW_LENGTH};
pub use errors::ReviewError;
pub use rating::{Rating, MAX_STARS, MIN_STARS};
pub use review::{NewReview, Review};
pub use session::{ReviewSession, SessionKey};
pub use step::{ReviewStep, INPUT_STEPS};
