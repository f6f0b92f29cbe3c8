use futures::future::join_all;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use shared::{CreateExpenseRequest, CreateRevenueRequest, REVENUE_CATEGORY_SALES};

use super::api::ApiClient;
use crate::calculator::{BatchSettings, DerivedResult, LineItem};

/// One record headed for the persistence layer.
#[derive(Debug, Clone, PartialEq)]
pub enum BatchRequest {
    Expense(CreateExpenseRequest),
    Revenue(CreateRevenueRequest),
}

fn wire_amount(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

/// Human-readable audit text embedded in the persisted record description:
/// the item name followed by every figure that could be computed for it.
pub fn item_description(item: &LineItem, derived: &DerivedResult) -> String {
    let mut parts = vec![item.item_name.trim().to_string()];
    if let Some(buy) = derived.buy_at_price {
        parts.push(format!("bought at {}", buy));
    }
    if let Some(sold) = derived.sold_at_price {
        parts.push(format!("sold at {}", sold));
    }
    if let Some(expense) = derived.expense_amount {
        parts.push(format!("handling expense {}", expense));
    }
    if let Some(revenue) = derived.revenue {
        parts.push(format!("revenue {}", revenue));
    }
    if let Some(profit) = derived.profit {
        parts.push(format!("profit {}", profit));
    }
    if let Some(margin) = derived.profit_margin_pct {
        parts.push(format!("profit margin {:.2}%", margin));
    }
    if let Some(roc) = derived.return_on_cost_pct {
        parts.push(format!("return on cost {:.2}%", roc));
    }
    parts.join(" | ")
}

/// Build the full request batch, in item order: one expense record per item,
/// plus a paired revenue record whenever the item actually made revenue.
pub fn build_batch(rows: &[(LineItem, DerivedResult)], settings: &BatchSettings) -> Vec<BatchRequest> {
    let vendor = {
        let trimmed = settings.vendor.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    };

    let mut requests = Vec::new();
    for (item, derived) in rows {
        let title = item.item_name.trim().to_string();
        let description = item_description(item, derived);

        // The expense side records the handling expense when one was entered,
        // otherwise the purchase cost itself.
        let expense_amount = match derived.expense_amount {
            Some(expense) if expense > Decimal::ZERO => expense,
            _ => derived.buy_at_price.unwrap_or(Decimal::ZERO),
        };

        requests.push(BatchRequest::Expense(CreateExpenseRequest {
            title: title.clone(),
            description: description.clone(),
            amount: wire_amount(expense_amount),
            category: settings.category,
            vendor: vendor.clone(),
            date: settings.date.clone(),
            is_recurring: false,
            recurring_frequency: None,
            attachment_url: None,
        }));

        if let Some(revenue) = derived.revenue {
            if revenue > Decimal::ZERO {
                requests.push(BatchRequest::Revenue(CreateRevenueRequest {
                    title: title.clone(),
                    description,
                    amount: wire_amount(revenue),
                    category: REVENUE_CATEGORY_SALES.to_string(),
                    source: title,
                    date: settings.date.clone(),
                    is_recurring: false,
                    recurring_frequency: None,
                    attachment_url: None,
                }));
            }
        }
    }
    requests
}

/// Fire every request at once and await them as a single unit.
///
/// One failure fails the whole batch; records that already landed stay
/// landed. There is no per-record bookkeeping, retry, or rollback.
pub async fn submit_batch(api: &ApiClient, requests: Vec<BatchRequest>) -> Result<usize, String> {
    let total = requests.len();
    let in_flight: Vec<_> = requests
        .into_iter()
        .map(|request| {
            let api = api.clone();
            async move {
                match request {
                    BatchRequest::Expense(record) => api.create_expense(&record).await.map(|_| ()),
                    BatchRequest::Revenue(record) => api.create_revenue(&record).await.map(|_| ()),
                }
            }
        })
        .collect();

    for outcome in join_all(in_flight).await {
        outcome?;
    }
    Ok(total)
}
