//! Settings handlers: reads with default fallback and admin-gated writes.

mod authorize_admin;
pub(crate) mod get_settings;
mod set_review_channel;
mod update_admin_roles;
mod update_embed;
mod update_products;

pub use authorize_admin::{AuthorizeAdminHandler, AuthorizeAdminQuery};
pub use get_settings::{GetSettingsHandler, GetSettingsQuery};
pub use set_review_channel::{SetReviewChannelCommand, SetReviewChannelHandler};
pub use update_admin_roles::{UpdateAdminRolesCommand, UpdateAdminRolesHandler};
pub use update_embed::{UpdateEmbedCommand, UpdateEmbedHandler};
pub use update_products::{UpdateProductsCommand, UpdateProductsHandler};
