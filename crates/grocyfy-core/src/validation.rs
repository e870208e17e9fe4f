//! # Validation Module
//!
//! Input rules for the shopping list.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend                                                      │
//! │  └── number inputs, immediate feedback                                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                   │
//! │  ├── name: non-empty after trimming                                    │
//! │  ├── price: non-negative decimal, kept to six places                   │
//! │  └── quantity: at least one                                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: ListStore invariants                                          │
//! │  └── only validated values ever reach `items`                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The budget is the odd one out: it is never rejected. Anything that does
//! not parse to a non-negative amount just means "no budget".

use crate::error::ValidationError;
use crate::money::Amount;
use crate::types::ItemId;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item name and returns it trimmed.
///
/// ```rust
/// use grocyfy_core::validation::validate_item_name;
///
/// assert_eq!(validate_item_name("  Milk ").unwrap(), "Milk");
/// assert!(validate_item_name("   ").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(name.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Parses a price field.
///
/// Same rules as [`Amount::parse`]; zero is allowed (free items).
///
/// ```rust
/// use grocyfy_core::validation::validate_price;
///
/// assert_eq!(validate_price("2.50").unwrap().to_string(), "2.50");
/// assert!(validate_price("0").is_ok());
/// assert!(validate_price("-1").is_err());
/// assert!(validate_price("two").is_err());
/// ```
pub fn validate_price(price: &str) -> ValidationResult<Amount> {
    Amount::parse(price, "price")
}

/// Validates a quantity given at creation time.
///
/// ## Rules
/// - Must be at least 1
///
/// There is no upper bound; `change_quantity` can grow it freely.
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty < 1 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Interprets budget input.
///
/// Returns `None` ("no budget") for blank, unparseable or negative input.
///
/// ```rust
/// use grocyfy_core::validation::parse_budget;
///
/// assert_eq!(parse_budget("5").map(|b| b.to_string()), Some("5.00".to_string()));
/// assert_eq!(parse_budget(""), None);
/// assert_eq!(parse_budget("lots"), None);
/// assert_eq!(parse_budget("-3"), None);
/// ```
pub fn parse_budget(input: &str) -> Option<Amount> {
    Amount::parse(input, "budget").ok()
}

// =============================================================================
// Id Validators
// =============================================================================

/// Parses an item id sent by the frontend.
///
/// ```rust
/// use grocyfy_core::validation::validate_item_id;
///
/// assert!(validate_item_id("550e8400-e29b-41d4-a716-446655440000").is_ok());
/// assert!(validate_item_id("1700000000000").is_err());
/// ```
pub fn validate_item_id(id: &str) -> ValidationResult<ItemId> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    id.parse::<ItemId>()
        .map_err(|_| ValidationError::InvalidFormat {
            field: "id".to_string(),
            reason: "must be a valid UUID".to_string(),
        })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_item_name() {
        assert_eq!(validate_item_name("Bread").unwrap(), "Bread");
        assert_eq!(validate_item_name("\tOat milk\n").unwrap(), "Oat milk");

        assert!(validate_item_name("").is_err());
        assert!(validate_item_name(" \t ").is_err());
    }

    #[test]
    fn test_validate_price() {
        assert_eq!(validate_price("3.00").unwrap(), Amount::from_cents(300));
        assert_eq!(validate_price("0").unwrap(), Amount::from_cents(0));
        assert_eq!(validate_price("0.333").unwrap().micros(), 333_000);

        let err = validate_price("").unwrap_err();
        assert_eq!(err.field(), "price");
        assert!(matches!(
            validate_price("-0.01"),
            Err(ValidationError::Negative { .. })
        ));
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(1_000_000).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_parse_budget() {
        assert_eq!(parse_budget("12.345").map(|b| b.micros()), Some(12_345_000));
        assert_eq!(parse_budget("0"), Some(Amount::from_cents(0)));
        assert_eq!(parse_budget("  "), None);
        assert_eq!(parse_budget("-0.01"), None);
    }

    #[test]
    fn test_validate_item_id() {
        let id = ItemId::new();
        assert_eq!(validate_item_id(&id.to_string()).unwrap(), id);
        assert!(matches!(
            validate_item_id(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_item_id("not-a-uuid"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }
}
