use std::fmt;

use super::derive::DerivedResult;
use super::line_items::{BatchSettings, LineItem};

/// Where the form is in its lifecycle. Editing is disabled while a batch is
/// in flight; both submit outcomes return the form to `Editable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editable,
    Submitting,
}

/// Why a batch may not be submitted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateRejection {
    NoItems,
    FieldErrors,
    MissingRequired,
    MissingDate,
}

impl fmt::Display for GateRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateRejection::NoItems => write!(f, "Add at least one item before saving."),
            GateRejection::FieldErrors => write!(f, "Fix validation errors before saving."),
            GateRejection::MissingRequired => write!(
                f,
                "Fill in the required fields: every item needs a name, a buy price, and a sell price."
            ),
            GateRejection::MissingDate => write!(f, "Select a date for this batch."),
        }
    }
}

/// Decide whether the current batch may move into `Submitting`.
///
/// The checks run in a fixed order and the first failure wins: empty list,
/// then field errors, then missing required fields, then missing date.
pub fn check_submittable(
    items: &[LineItem],
    results: &[DerivedResult],
    settings: &BatchSettings,
) -> Result<(), GateRejection> {
    if items.is_empty() {
        return Err(GateRejection::NoItems);
    }
    if results.iter().any(DerivedResult::has_errors) {
        return Err(GateRejection::FieldErrors);
    }
    let missing_required = items.iter().any(|item| {
        item.item_name.trim().is_empty()
            || item.buy_at_price.trim().is_empty()
            || item.sold_at_price.trim().is_empty()
    });
    if missing_required {
        return Err(GateRejection::MissingRequired);
    }
    if settings.date.trim().is_empty() {
        return Err(GateRejection::MissingDate);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::derive_item;

    fn row(name: &str, expense: &str, buy: &str, sold: &str) -> LineItem {
        LineItem {
            id: 1,
            item_name: name.to_string(),
            expense_amount: expense.to_string(),
            buy_at_price: buy.to_string(),
            sold_at_price: sold.to_string(),
        }
    }

    fn settings_with_date(date: &str) -> BatchSettings {
        BatchSettings {
            date: date.to_string(),
            ..BatchSettings::default()
        }
    }

    fn check(items: &[LineItem], settings: &BatchSettings) -> Result<(), GateRejection> {
        let results: Vec<DerivedResult> = items.iter().map(derive_item).collect();
        check_submittable(items, &results, settings)
    }

    #[test]
    fn test_empty_list_is_rejected_first() {
        // Even with the date also missing, the empty-list check fires first
        let result = check(&[], &settings_with_date(""));
        assert_eq!(result, Err(GateRejection::NoItems));
    }

    #[test]
    fn test_field_errors_block_submission() {
        let items = vec![row("Widget", "abc", "20", "35")];
        let result = check(&items, &settings_with_date("2026-08-01"));
        assert_eq!(result, Err(GateRejection::FieldErrors));
    }

    #[test]
    fn test_field_errors_checked_before_missing_required() {
        // Name missing AND a negative price: the error check wins
        let items = vec![row("", "", "-5", "35")];
        let result = check(&items, &settings_with_date("2026-08-01"));
        assert_eq!(result, Err(GateRejection::FieldErrors));
    }

    #[test]
    fn test_missing_name_is_rejected() {
        let items = vec![row("", "", "20", "35")];
        let result = check(&items, &settings_with_date("2026-08-01"));
        assert_eq!(result, Err(GateRejection::MissingRequired));
    }

    #[test]
    fn test_missing_prices_are_rejected() {
        let items = vec![row("Widget", "", "", "35")];
        let result = check(&items, &settings_with_date("2026-08-01"));
        assert_eq!(result, Err(GateRejection::MissingRequired));
    }

    #[test]
    fn test_missing_date_is_rejected_last() {
        let items = vec![row("Widget", "", "20", "35")];
        let result = check(&items, &settings_with_date("  "));
        assert_eq!(result, Err(GateRejection::MissingDate));
    }

    #[test]
    fn test_complete_batch_passes() {
        let items = vec![row("Widget", "5", "20", "35"), row("Gadget", "", "10", "12")];
        let result = check(&items, &settings_with_date("2026-08-01"));
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_any_bad_row_blocks_the_whole_batch() {
        let items = vec![row("Widget", "5", "20", "35"), row("Gadget", "", "10", "oops")];
        let result = check(&items, &settings_with_date("2026-08-01"));
        assert_eq!(result, Err(GateRejection::FieldErrors));
    }
}
