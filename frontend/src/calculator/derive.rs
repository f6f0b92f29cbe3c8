use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::BTreeMap;

use super::line_items::{ItemField, LineItem};

/// A numeric input field after parsing: not entered, entered but not a
/// number, or an actual value. A negative value still parses; it is flagged
/// as a field error but does not stop the other figures from computing.
#[derive(Debug, Clone, Copy, PartialEq)]
enum FieldValue {
    Absent,
    Invalid,
    Present(Decimal),
}

impl FieldValue {
    fn value(self) -> Option<Decimal> {
        match self {
            FieldValue::Present(value) => Some(value),
            _ => None,
        }
    }
}

fn parse_field(raw: &str) -> FieldValue {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return FieldValue::Absent;
    }
    match trimmed.parse::<Decimal>() {
        Ok(value) => FieldValue::Present(value),
        Err(_) => FieldValue::Invalid,
    }
}

/// Round a percentage to 2 decimal places, midpoint away from zero.
pub(crate) fn round_percent(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Computed figures for one line item.
///
/// Every field is `None` when it cannot be computed from the inputs —
/// an absent figure is never collapsed to zero.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedResult {
    pub expense_amount: Option<Decimal>,
    pub buy_at_price: Option<Decimal>,
    pub sold_at_price: Option<Decimal>,
    pub revenue: Option<Decimal>,
    pub profit: Option<Decimal>,
    pub profit_margin_pct: Option<Decimal>,
    pub return_on_cost_pct: Option<Decimal>,
    pub field_errors: BTreeMap<ItemField, String>,
}

impl DerivedResult {
    pub fn has_errors(&self) -> bool {
        !self.field_errors.is_empty()
    }
}

fn invalid_message(field: ItemField) -> String {
    format!("{} must be a valid positive number", field.label())
}

/// Compute the derived figures for one line item.
///
/// Pure: same input, same output, no side effects, and no panics — every
/// uncomputable figure degrades to `None`.
pub fn derive_item(item: &LineItem) -> DerivedResult {
    let expense = parse_field(&item.expense_amount);
    let buy = parse_field(&item.buy_at_price);
    let sold = parse_field(&item.sold_at_price);

    let mut field_errors = BTreeMap::new();
    for (field, parsed) in [
        (ItemField::ExpenseAmount, expense),
        (ItemField::BuyAtPrice, buy),
        (ItemField::SoldAtPrice, sold),
    ] {
        match parsed {
            FieldValue::Invalid => {
                field_errors.insert(field, invalid_message(field));
            }
            FieldValue::Present(value) if value < Decimal::ZERO => {
                field_errors.insert(field, invalid_message(field));
            }
            _ => {}
        }
    }

    let buy_value = buy.value();
    let sold_value = sold.value();

    let revenue = match (buy_value, sold_value) {
        (Some(buy), Some(sold)) => Some(sold - buy),
        _ => None,
    };

    // An absent handling expense counts as zero for this step only; a
    // non-numeric one makes profit uncomputable.
    let profit = match (revenue, expense) {
        (Some(revenue), FieldValue::Present(expense)) => Some(revenue - expense),
        (Some(revenue), FieldValue::Absent) => Some(revenue),
        _ => None,
    };

    let profit_margin_pct = match (profit, sold_value) {
        (Some(profit), Some(sold)) if !sold.is_zero() => {
            Some(round_percent(profit * Decimal::ONE_HUNDRED / sold))
        }
        _ => None,
    };

    let return_on_cost_pct = match (profit, buy_value) {
        (Some(profit), Some(buy)) if !buy.is_zero() => {
            Some(round_percent(profit * Decimal::ONE_HUNDRED / buy))
        }
        _ => None,
    };

    DerivedResult {
        expense_amount: expense.value(),
        buy_at_price: buy_value,
        sold_at_price: sold_value,
        revenue,
        profit,
        profit_margin_pct,
        return_on_cost_pct,
        field_errors,
    }
}
