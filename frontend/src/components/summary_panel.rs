use yew::prelude::*;

use crate::calculator::AggregateSummary;
use crate::components::format::{fmt_money, fmt_percent};

#[derive(Properties, PartialEq)]
pub struct SummaryPanelProps {
    pub summary: AggregateSummary,
}

#[function_component(SummaryPanel)]
pub fn summary_panel(props: &SummaryPanelProps) -> Html {
    let summary = &props.summary;

    html! {
        <section class="summary-section">
            <h2>{"Batch Totals"}</h2>
            <div class="summary-grid">
                <div class="summary-card">
                    <span class="summary-label">{"Total Expense"}</span>
                    <span class="summary-value">{fmt_money(Some(summary.total_expense))}</span>
                </div>
                <div class="summary-card">
                    <span class="summary-label">{"Total Revenue"}</span>
                    <span class="summary-value">{fmt_money(Some(summary.total_revenue))}</span>
                </div>
                <div class="summary-card">
                    <span class="summary-label">{"Total Profit"}</span>
                    <span class="summary-value">{fmt_money(Some(summary.total_profit))}</span>
                </div>
                <div class="summary-card">
                    <span class="summary-label">{"Average Margin"}</span>
                    <span class="summary-value">{fmt_percent(summary.average_profit_margin)}</span>
                </div>
            </div>
        </section>
    }
}
