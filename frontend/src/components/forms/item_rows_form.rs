use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::calculator::{DerivedResult, ItemField, LineItem};
use crate::components::format::{fmt_money, fmt_percent};

#[derive(Properties, PartialEq)]
pub struct ItemRowsFormProps {
    pub items: Vec<LineItem>,
    pub derived: Vec<DerivedResult>,
    pub submitting: bool,

    pub on_name_change: Callback<(u64, String)>,
    pub on_field_change: Callback<(u64, ItemField, String)>,
    pub on_add_item: Callback<()>,
    pub on_remove_item: Callback<u64>,
}

fn numeric_cell(
    props: &ItemRowsFormProps,
    item: &LineItem,
    derived: Option<&DerivedResult>,
    field: ItemField,
    raw_value: &str,
) -> Html {
    let on_change = {
        let on_field_change = props.on_field_change.clone();
        let id = item.id;
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_field_change.emit((id, field, input.value()));
        })
    };
    let error = derived.and_then(|d| d.field_errors.get(&field));

    html! {
        <td class="numeric-cell">
            <input
                type="text"
                inputmode="decimal"
                placeholder="0.00"
                value={raw_value.to_string()}
                onchange={on_change}
                disabled={props.submitting}
            />
            {if let Some(message) = error {
                html! { <div class="field-error">{message}</div> }
            } else { html! {} }}
        </td>
    }
}

#[function_component(ItemRowsForm)]
pub fn item_rows_form(props: &ItemRowsFormProps) -> Html {
    // The remove button is disabled on the last remaining row; the list can
    // never be emptied while the form is mounted.
    let single_row = props.items.len() == 1;

    html! {
        <section class="item-rows-section">
            <h2>{"Items"}</h2>

            <div class="table-container">
                <table class="item-rows-table">
                    <thead>
                        <tr>
                            <th>{"Item"}</th>
                            <th>{"Handling expense"}</th>
                            <th>{"Buy price"}</th>
                            <th>{"Sell price"}</th>
                            <th>{"Revenue"}</th>
                            <th>{"Profit"}</th>
                            <th>{"Margin"}</th>
                            <th>{"Return on cost"}</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {for props.items.iter().enumerate().map(|(index, item)| {
                            let derived = props.derived.get(index);

                            let on_name = {
                                let on_name_change = props.on_name_change.clone();
                                let id = item.id;
                                Callback::from(move |e: Event| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    on_name_change.emit((id, input.value()));
                                })
                            };
                            let on_remove = {
                                let on_remove_item = props.on_remove_item.clone();
                                let id = item.id;
                                Callback::from(move |_| on_remove_item.emit(id))
                            };

                            html! {
                                <tr key={item.id.to_string()}>
                                    <td class="item-name-cell">
                                        <input
                                            type="text"
                                            placeholder="Item name"
                                            value={item.item_name.clone()}
                                            onchange={on_name}
                                            disabled={props.submitting}
                                        />
                                    </td>
                                    {numeric_cell(props, item, derived, ItemField::ExpenseAmount, &item.expense_amount)}
                                    {numeric_cell(props, item, derived, ItemField::BuyAtPrice, &item.buy_at_price)}
                                    {numeric_cell(props, item, derived, ItemField::SoldAtPrice, &item.sold_at_price)}
                                    <td class="computed">{fmt_money(derived.and_then(|d| d.revenue))}</td>
                                    <td class="computed">{fmt_money(derived.and_then(|d| d.profit))}</td>
                                    <td class="computed">{fmt_percent(derived.and_then(|d| d.profit_margin_pct))}</td>
                                    <td class="computed">{fmt_percent(derived.and_then(|d| d.return_on_cost_pct))}</td>
                                    <td>
                                        <button
                                            type="button"
                                            class="btn btn-small remove-item-btn"
                                            onclick={on_remove}
                                            disabled={single_row || props.submitting}
                                        >
                                            {"Remove"}
                                        </button>
                                    </td>
                                </tr>
                            }
                        })}
                    </tbody>
                </table>
            </div>

            <button
                type="button"
                class="btn btn-secondary add-item-btn"
                onclick={
                    let on_add_item = props.on_add_item.clone();
                    Callback::from(move |_| on_add_item.emit(()))
                }
                disabled={props.submitting}
            >
                {"+ Add item"}
            </button>
        </section>
    }
}
