use crate::ValidationError;

/// Canonicalize a ticker symbol for registry lookups.
///
/// Symbols on HOSE/HNX/UPCoM are short ASCII alphanumerics; lookups are
/// case-insensitive, so the canonical form is uppercase.
pub fn normalize_symbol(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptySymbol);
    }

    for (index, ch) in trimmed.chars().enumerate() {
        if !ch.is_ascii_alphanumeric() {
            return Err(ValidationError::SymbolInvalidChar { ch, index });
        }
    }

    Ok(trimmed.to_ascii_uppercase())
}
