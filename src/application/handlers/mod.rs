//! Command and query handlers.

pub mod review;
pub mod settings;

pub use review::{
    ChooseRatingCommand, ChooseRatingHandler, CommitOutcome, NotificationOutcome,
    ReviewCommitter, SelectProductCommand, SelectProductHandler, StartReviewCommand,
    StartReviewHandler, SubmitCommentCommand, SubmitCommentHandler,
};
pub use settings::{
    AuthorizeAdminHandler, AuthorizeAdminQuery, GetSettingsHandler, GetSettingsQuery,
    SetReviewChannelCommand, SetReviewChannelHandler, UpdateAdminRolesCommand,
    UpdateAdminRolesHandler, UpdateEmbedCommand, UpdateEmbedHandler, UpdateProductsCommand,
    UpdateProductsHandler,
};
