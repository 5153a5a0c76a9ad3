//! Product catalogue rules.

use crate::domain::foundation::ValidationError;

/// Most options a single select menu can show.
pub const MAX_PRODUCTS: usize = 25;

/// Splits admin input (one product per line) into a catalogue.
///
/// Lines are trimmed and blank lines dropped. The result must hold between
/// one and `MAX_PRODUCTS` entries.
pub fn parse_product_lines(text: &str) -> Result<Vec<String>, ValidationError> {
    let products: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    validate_products(&products)?;
    Ok(products)
}

/// Checks an already-split catalogue.
pub fn validate_products(products: &[String]) -> Result<(), ValidationError> {
    if products.is_empty() {
        return Err(ValidationError::empty_field("products"));
    }
    if products.len() > MAX_PRODUCTS {
        return Err(ValidationError::out_of_range(
            "products",
            1,
            MAX_PRODUCTS as i64,
            products.len() as i64,
        ));
    }
    if products.iter().any(|p| p.trim().is_empty()) {
        return Err(ValidationError::invalid_format(
            "products",
            "product names cannot be blank",
        ));
    }
    Ok(())
}
