use shared::ExpenseCategory;
use std::rc::Rc;
use yew::prelude::*;

/// One user-entered row: an item bought and (hopefully) sold, with an
/// optional handling expense.
///
/// Numeric fields hold the raw input text; the empty string means the field
/// has not been entered, which is distinct from an explicit zero.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub id: u64,
    pub item_name: String,
    pub expense_amount: String,
    pub buy_at_price: String,
    pub sold_at_price: String,
}

impl LineItem {
    fn blank(id: u64) -> Self {
        Self {
            id,
            item_name: String::new(),
            expense_amount: String::new(),
            buy_at_price: String::new(),
            sold_at_price: String::new(),
        }
    }
}

/// The three numeric fields of a line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ItemField {
    ExpenseAmount,
    BuyAtPrice,
    SoldAtPrice,
}

impl ItemField {
    pub fn label(&self) -> &'static str {
        match self {
            ItemField::ExpenseAmount => "Handling expense",
            ItemField::BuyAtPrice => "Buy price",
            ItemField::SoldAtPrice => "Sell price",
        }
    }
}

/// Settings applied uniformly to every item when a batch is saved.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchSettings {
    /// ISO 8601 date (YYYY-MM-DD); required before saving
    pub date: String,
    pub category: ExpenseCategory,
    /// Vendor name; empty means none
    pub vendor: String,
}

impl Default for BatchSettings {
    fn default() -> Self {
        Self {
            date: String::new(),
            category: ExpenseCategory::Inventory,
            vendor: String::new(),
        }
    }
}

/// Session state for the item list: the rows plus the id counter.
///
/// Ids are handed out monotonically and never reused within a session, so
/// insertion order is display order.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemsState {
    pub items: Vec<LineItem>,
    next_id: u64,
}

impl Default for ItemsState {
    fn default() -> Self {
        Self {
            items: vec![LineItem::blank(1)],
            next_id: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ItemsAction {
    Add,
    /// Rejected when it would leave the list empty
    Remove(u64),
    SetName { id: u64, value: String },
    SetField { id: u64, field: ItemField, value: String },
    /// Back to a single blank row; the id counter keeps advancing
    Reset,
}

impl Reducible for ItemsState {
    type Action = ItemsAction;

    fn reduce(self: Rc<Self>, action: ItemsAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ItemsAction::Add => {
                next.items.push(LineItem::blank(next.next_id));
                next.next_id += 1;
            }
            ItemsAction::Remove(id) => {
                // At least one row must exist while the form is mounted
                if next.items.len() > 1 {
                    next.items.retain(|item| item.id != id);
                }
            }
            ItemsAction::SetName { id, value } => {
                if let Some(item) = next.items.iter_mut().find(|item| item.id == id) {
                    item.item_name = value;
                }
            }
            ItemsAction::SetField { id, field, value } => {
                if let Some(item) = next.items.iter_mut().find(|item| item.id == id) {
                    match field {
                        ItemField::ExpenseAmount => item.expense_amount = value,
                        ItemField::BuyAtPrice => item.buy_at_price = value,
                        ItemField::SoldAtPrice => item.sold_at_price = value,
                    }
                }
            }
            ItemsAction::Reset => {
                next.items = vec![LineItem::blank(next.next_id)];
                next.next_id += 1;
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: ItemsState, action: ItemsAction) -> ItemsState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn test_default_state_has_one_blank_row() {
        let state = ItemsState::default();
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].id, 1);
        assert!(state.items[0].item_name.is_empty());
        assert!(state.items[0].buy_at_price.is_empty());
    }

    #[test]
    fn test_add_appends_rows_with_increasing_ids() {
        let state = apply(ItemsState::default(), ItemsAction::Add);
        let state = apply(state, ItemsAction::Add);

        let ids: Vec<u64> = state.items.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_removing_the_only_row_is_rejected() {
        let state = apply(ItemsState::default(), ItemsAction::Remove(1));
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].id, 1);
    }

    #[test]
    fn test_remove_targets_one_row() {
        let state = apply(ItemsState::default(), ItemsAction::Add);
        let state = apply(state, ItemsAction::Remove(1));

        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].id, 2);
    }

    #[test]
    fn test_ids_are_not_reused_after_remove() {
        let state = apply(ItemsState::default(), ItemsAction::Add);
        let state = apply(state, ItemsAction::Remove(2));
        let state = apply(state, ItemsAction::Add);

        let ids: Vec<u64> = state.items.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_set_field_updates_the_right_row() {
        let state = apply(ItemsState::default(), ItemsAction::Add);
        let state = apply(
            state,
            ItemsAction::SetField {
                id: 2,
                field: ItemField::BuyAtPrice,
                value: "20".to_string(),
            },
        );
        let state = apply(
            state,
            ItemsAction::SetName {
                id: 2,
                value: "Widget".to_string(),
            },
        );

        assert!(state.items[0].buy_at_price.is_empty());
        assert_eq!(state.items[1].buy_at_price, "20");
        assert_eq!(state.items[1].item_name, "Widget");
    }

    #[test]
    fn test_reset_returns_to_a_single_blank_row() {
        let state = apply(ItemsState::default(), ItemsAction::Add);
        let state = apply(
            state,
            ItemsAction::SetName {
                id: 1,
                value: "Widget".to_string(),
            },
        );
        let state = apply(state, ItemsAction::Reset);

        assert_eq!(state.items.len(), 1);
        assert!(state.items[0].item_name.is_empty());
        // Counter keeps moving forward
        assert!(state.items[0].id > 2);
    }
}
