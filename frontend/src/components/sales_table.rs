use shared::SaleEntry;
use yew::prelude::*;

use crate::services::date_utils::format_date_for_display;

#[derive(Properties, PartialEq)]
pub struct SalesTableProps {
    /// Already filtered to what the signed-in user may see
    pub sales: Vec<SaleEntry>,
    pub loading: bool,
}

#[function_component(SalesTable)]
pub fn sales_table(props: &SalesTableProps) -> Html {
    html! {
        <section class="sales-section">
            <h2>{"Recent Sales"}</h2>

            {if props.loading {
                html! { <div class="loading">{"Loading sales..."}</div> }
            } else if props.sales.is_empty() {
                html! { <div class="empty">{"No sales visible for your role"}</div> }
            } else {
                html! {
                    <div class="table-container">
                        <table class="sales-table">
                            <thead>
                                <tr>
                                    <th>{"Date"}</th>
                                    <th>{"Item"}</th>
                                    <th>{"Amount"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {for props.sales.iter().map(|sale| {
                                    html! {
                                        <tr key={sale.id.clone()}>
                                            <td class="date">{format_date_for_display(&sale.date)}</td>
                                            <td class="description">{&sale.title}</td>
                                            <td class="amount">{format!("${:.2}", sale.amount)}</td>
                                        </tr>
                                    }
                                })}
                            </tbody>
                        </table>
                    </div>
                }
            }}
        </section>
    }
}
