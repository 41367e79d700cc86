//! Record validation
//!
//! Validation semantics:
//! - `name`, `category` and `weight` are present and not blank
//! - `price` and `calories` are non-negative
//! - `calories` fits a 32-bit counter
//!
//! Records are validated before they enter the inventory; the query
//! engine assumes every record it sees has passed here.
//! The validator never mutates the values it checks.

use super::errors::{InventoryError, InventoryResult};
use super::record::{Ingredients, Snack, SnackDraft, SnackForm};

/// Enforces record rules on drafts, forms and loaded records
pub struct RecordValidator;

impl RecordValidator {
    /// Validates a draft.
    ///
    /// # Errors
    ///
    /// Returns SNACK_RECORD_MALFORMED naming the first offending field.
    pub fn validate_draft(draft: &SnackDraft) -> InventoryResult<()> {
        Self::require_text("name", &draft.name)?;
        Self::require_text("category", &draft.category)?;
        Self::require_text("weight", &draft.weight)?;

        if draft.price < 0 {
            return Err(InventoryError::malformed(
                "price",
                format!("must be >= 0, got {}", draft.price),
            ));
        }

        if draft.calories < 0 {
            return Err(InventoryError::malformed(
                "calories",
                format!("must be >= 0, got {}", draft.calories),
            ));
        }

        if u32::try_from(draft.calories).is_err() {
            return Err(InventoryError::malformed(
                "calories",
                format!("out of range: {}", draft.calories),
            ));
        }

        Ok(())
    }

    /// Validates a draft and builds the record it describes under `id`
    pub fn build(id: u64, draft: SnackDraft) -> InventoryResult<Snack> {
        Self::validate_draft(&draft)?;

        let price = u64::try_from(draft.price)
            .map_err(|_| InventoryError::malformed("price", "out of range"))?;
        let calories = u32::try_from(draft.calories)
            .map_err(|_| InventoryError::malformed("calories", "out of range"))?;

        Ok(Snack {
            id,
            name: draft.name,
            category: draft.category,
            weight: draft.weight,
            price,
            calories,
            ingredients: draft.ingredients,
            in_stock: draft.in_stock,
        })
    }

    /// Re-checks a record that was constructed outside the inventory
    pub fn validate_record(snack: &Snack) -> InventoryResult<()> {
        Self::require_text("name", &snack.name)?;
        Self::require_text("category", &snack.category)?;
        Self::require_text("weight", &snack.weight)?;
        Ok(())
    }

    /// Converts raw form text into a draft.
    ///
    /// `price` is a decimal currency amount with at most two fraction
    /// digits (`"2.99"` becomes 299 cents); `calories` a whole number.
    pub fn parse_form(form: &SnackForm) -> InventoryResult<SnackDraft> {
        let price = Self::parse_price(&form.price)?;
        let calories = form.calories.trim().parse::<i64>().map_err(|_| {
            InventoryError::malformed(
                "calories",
                format!("is not a whole number: '{}'", form.calories),
            )
        })?;

        let draft = SnackDraft {
            name: form.name.clone(),
            category: form.category.clone(),
            weight: form.weight.clone(),
            price,
            calories,
            ingredients: Ingredients::parse(&form.ingredients),
            in_stock: form.in_stock,
        };

        Self::validate_draft(&draft)?;
        Ok(draft)
    }

    /// Parses a decimal amount into cents
    pub fn parse_price(text: &str) -> InventoryResult<i64> {
        let trimmed = text.trim();
        let invalid = || {
            InventoryError::malformed("price", format!("is not a valid amount: '{}'", text))
        };

        if trimmed.starts_with('-') {
            return Err(InventoryError::malformed(
                "price",
                format!("must be >= 0, got {}", trimmed),
            ));
        }

        let (whole, fraction) = match trimmed.split_once('.') {
            Some((w, f)) => (w, f),
            None => (trimmed, ""),
        };

        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if whole.is_empty() || !all_digits(whole) || !all_digits(fraction) {
            return Err(invalid());
        }
        if trimmed.contains('.') && fraction.is_empty() {
            return Err(invalid());
        }

        let cents = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
            2 => fraction.parse::<i64>().map_err(|_| invalid())?,
            _ => {
                return Err(InventoryError::malformed(
                    "price",
                    format!("has more than two decimal places: '{}'", text),
                ))
            }
        };

        whole
            .parse::<i64>()
            .ok()
            .and_then(|w| w.checked_mul(100))
            .and_then(|w| w.checked_add(cents))
            .ok_or_else(invalid)
    }

    fn require_text(field: &str, value: &str) -> InventoryResult<()> {
        if value.trim().is_empty() {
            return Err(InventoryError::malformed(field, "is required"));
        }
        Ok(())
    }
}
