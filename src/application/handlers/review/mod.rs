//! Review flow handlers: one per step, plus the committer.

mod choose_rating;
pub(crate) mod commit_review;
mod select_product;
mod start_review;
mod submit_comment;

pub use choose_rating::{ChooseRatingCommand, ChooseRatingHandler};
pub use commit_review::{CommitOutcome, NotificationOutcome, ReviewCommitter};
pub use select_product::{SelectProductCommand, SelectProductHandler};
pub use start_review::{StartReviewCommand, StartReviewHandler};
pub use submit_comment::{SubmitCommentCommand, SubmitCommentHandler};
