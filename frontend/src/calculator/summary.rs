use rust_decimal::Decimal;

use super::derive::{round_percent, DerivedResult};

/// Totals and averages across every row in the session.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateSummary {
    pub total_expense: Decimal,
    pub total_revenue: Decimal,
    pub total_profit: Decimal,
    /// `None` when no row has a defined margin; rendered as "N/A"
    pub average_profit_margin: Option<Decimal>,
}

/// Fold the derived rows into one summary.
///
/// The handling-expense total treats an absent expense as zero, while the
/// revenue and profit totals skip absent values entirely. The asymmetry is
/// intentional and load-bearing for how the form reads; keep it.
pub fn summarize(results: &[DerivedResult]) -> AggregateSummary {
    let mut total_expense = Decimal::ZERO;
    let mut total_revenue = Decimal::ZERO;
    let mut total_profit = Decimal::ZERO;
    let mut margin_sum = Decimal::ZERO;
    let mut margin_count: u32 = 0;

    for result in results {
        total_expense += result.expense_amount.unwrap_or(Decimal::ZERO);
        if let Some(revenue) = result.revenue {
            total_revenue += revenue;
        }
        if let Some(profit) = result.profit {
            total_profit += profit;
        }
        if let Some(margin) = result.profit_margin_pct {
            margin_sum += margin;
            margin_count += 1;
        }
    }

    let average_profit_margin = if margin_count > 0 {
        Some(round_percent(margin_sum / Decimal::from(margin_count)))
    } else {
        None
    };

    AggregateSummary {
        total_expense,
        total_revenue,
        total_profit,
        average_profit_margin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::derive_item;
    use crate::calculator::line_items::LineItem;
    use rust_decimal_macros::dec;

    fn derived(expense: &str, buy: &str, sold: &str) -> DerivedResult {
        derive_item(&LineItem {
            id: 1,
            item_name: "Widget".to_string(),
            expense_amount: expense.to_string(),
            buy_at_price: buy.to_string(),
            sold_at_price: sold.to_string(),
        })
    }

    #[test]
    fn test_empty_list_sums_to_zero() {
        let summary = summarize(&[]);

        assert_eq!(summary.total_expense, Decimal::ZERO);
        assert_eq!(summary.total_revenue, Decimal::ZERO);
        assert_eq!(summary.total_profit, Decimal::ZERO);
        assert_eq!(summary.average_profit_margin, None);
    }

    #[test]
    fn test_expense_and_revenue_treat_absence_differently() {
        // First row: expense only. Second row: revenue only.
        let rows = vec![derived("10", "", ""), derived("", "50", "100")];
        let summary = summarize(&rows);

        // Absent expense counts as zero in the expense total...
        assert_eq!(summary.total_expense, dec!(10));
        // ...but absent revenue is excluded from the revenue total
        assert_eq!(summary.total_revenue, dec!(50));
        assert_eq!(summary.total_profit, dec!(50));
    }

    #[test]
    fn test_totals_accumulate_across_rows() {
        let rows = vec![derived("5", "20", "35"), derived("2", "10", "30")];
        let summary = summarize(&rows);

        assert_eq!(summary.total_expense, dec!(7));
        assert_eq!(summary.total_revenue, dec!(35));
        assert_eq!(summary.total_profit, dec!(28));
    }

    #[test]
    fn test_average_margin_rounds_midpoint_away_from_zero() {
        // Margins 33.33 and 33.34 average to 33.335
        let rows = vec![derived("", "2", "3"), derived("", "6666", "10000")];
        let summary = summarize(&rows);

        assert_eq!(rows[0].profit_margin_pct, Some(dec!(33.33)));
        assert_eq!(rows[1].profit_margin_pct, Some(dec!(33.34)));
        assert_eq!(summary.average_profit_margin, Some(dec!(33.34)));
    }

    #[test]
    fn test_average_margin_skips_rows_without_one() {
        let rows = vec![derived("", "20", "35"), derived("10", "", "")];
        let summary = summarize(&rows);

        // Only the first row has a margin; the average is that margin alone
        assert_eq!(summary.average_profit_margin, rows[0].profit_margin_pct);
    }

    #[test]
    fn test_average_margin_undefined_when_no_row_has_one() {
        let rows = vec![derived("10", "", ""), derived("", "20", "")];
        let summary = summarize(&rows);

        assert_eq!(summary.average_profit_margin, None);
    }
}
