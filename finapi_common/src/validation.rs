/// **Basic input validation for a tax id**
///
/// Checks for:
/// - An empty string.
pub fn is_valid_tax_id(tax_id: &str) -> bool {
    !tax_id.trim().is_empty()
}

/// **Basic input validation for an account holder's name**
///
/// Checks for:
/// - An empty string.
pub fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty()
}
