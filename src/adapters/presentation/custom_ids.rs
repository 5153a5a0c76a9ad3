//! Custom ids and command names the router matches on.

pub const REVIEW_MENU_COMMAND: &str = "reviewmenu";
pub const SET_REVIEW_CHANNEL_COMMAND: &str = "setreviewchannel";
pub const ADMIN_CONFIG_COMMAND: &str = "adminconfig";
pub const CHANNEL_OPTION: &str = "channel";

pub const RATING_PREFIX: &str = "rating_";
pub const LEAVE_COMMENT: &str = "leave_comment";
pub const COMMENT_MODAL: &str = "comment_modal";
pub const COMMENT_TEXT: &str = "comment_text";
pub const SELECT_PRODUCT: &str = "select_product";
pub const PRODUCT_PREFIX: &str = "product_";
pub const NO_PRODUCTS: &str = "no_products";

pub const CONFIG_EMBED: &str = "config_embed";
pub const CONFIG_PRODUCTS: &str = "config_products";
pub const EMBED_CONFIG_MODAL: &str = "embed_config_modal";
pub const EMBED_TITLE_INPUT: &str = "embed_title";
pub const EMBED_DESCRIPTION_INPUT: &str = "embed_description";
pub const EMBED_COLOR_INPUT: &str = "embed_color";
pub const PRODUCTS_CONFIG_MODAL: &str = "products_config_modal";
pub const PRODUCTS_LIST_INPUT: &str = "products_list";
pub const CONFIG_ADMIN_ROLES: &str = "config_admin_roles";
pub const ADMIN_ROLES_CONFIG_MODAL: &str = "admin_roles_config_modal";
pub const ADMIN_ROLES_LIST_INPUT: &str = "admin_roles_list";

pub fn rating_id(stars: u8) -> String {
    format!("{}{}", RATING_PREFIX, stars)
}

pub fn product_value(index: usize) -> String {
    format!("{}{}", PRODUCT_PREFIX, index)
}

/// Stars encoded in a `rating_<n>` id. Range checking is left to `Rating`.
pub fn parse_rating_id(custom_id: &str) -> Option<u8> {
    custom_id.strip_prefix(RATING_PREFIX)?.parse().ok()
}

/// Catalogue index encoded in a `product_<i>` option value.
pub fn parse_product_value(value: &str) -> Option<usize> {
    value.strip_prefix(PRODUCT_PREFIX)?.parse().ok()
}
