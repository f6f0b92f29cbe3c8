mod calculator;
mod components;
mod hooks;
mod services;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use calculator::FormPhase;
use components::forms::batch_settings_form::BatchSettingsForm;
use components::forms::item_rows_form::ItemRowsForm;
use components::sales_table::SalesTable;
use components::summary_panel::SummaryPanel;
use components::trend_chart::TrendChart;
use hooks::use_item_calculator::use_item_calculator;
use hooks::use_sales_report::use_sales_report;
use services::api::ApiClient;
use services::date_utils::format_date_for_display;

#[function_component(App)]
fn app() -> Html {
    let api_client = ApiClient::new();

    let calculator = use_item_calculator(&api_client);
    let report = use_sales_report(&api_client);

    // Connection status for the footer
    let backend_connected = use_state(|| false);
    let backend_endpoint = use_state(|| String::from("Checking..."));

    // Initial load: check the backend, then pull the report data
    use_effect_with((), {
        let api_client = api_client.clone();
        let refresh = report.refresh.clone();
        let backend_connected = backend_connected.clone();
        let backend_endpoint = backend_endpoint.clone();

        move |_| {
            spawn_local(async move {
                match api_client.test_connection().await {
                    Ok(()) => {
                        backend_connected.set(true);
                        backend_endpoint.set("localhost:3000".to_string());
                        refresh.emit(());
                    }
                    Err(e) => {
                        backend_connected.set(false);
                        backend_endpoint.set("Connection failed".to_string());
                        gloo::console::error!("Failed to connect to backend:", e);
                    }
                }
            });

            || ()
        }
    });

    let submitting = calculator.state.phase == FormPhase::Submitting;

    let on_submit = {
        let save_items = calculator.actions.save_items.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            save_items.emit(());
        })
    };

    html! {
        <>
            <header class="header">
                <div class="container">
                    <h1>{"Shopledger"}</h1>
                    <div class="batch-date-display">
                        <span class="date-label">{"Batch date:"}</span>
                        <span class="date-value">
                            {format_date_for_display(&calculator.state.settings.date)}
                        </span>
                    </div>
                </div>
            </header>

            <main class="main">
                <div class="container">
                    <section class="calculator-section">
                        <h2>{"Expense Items"}</h2>

                        {if let Some(error) = calculator.state.form_error.as_ref() {
                            html! {
                                <div class="form-message error">
                                    {error}
                                </div>
                            }
                        } else { html! {} }}

                        {if calculator.state.form_success {
                            html! {
                                <div class="form-message success">
                                    {"Items saved!"}
                                </div>
                            }
                        } else { html! {} }}

                        <form class="item-calculator-form" onsubmit={on_submit}>
                            <BatchSettingsForm
                                date={calculator.state.settings.date.clone()}
                                category={calculator.state.settings.category}
                                vendor={calculator.state.settings.vendor.clone()}
                                submitting={submitting}
                                on_date_change={calculator.actions.on_date_change.clone()}
                                on_category_change={calculator.actions.on_category_change.clone()}
                                on_vendor_change={calculator.actions.on_vendor_change.clone()}
                            />

                            <ItemRowsForm
                                items={calculator.state.items.clone()}
                                derived={calculator.state.derived.clone()}
                                submitting={submitting}
                                on_name_change={calculator.actions.on_name_change.clone()}
                                on_field_change={calculator.actions.on_field_change.clone()}
                                on_add_item={calculator.actions.on_add_item.clone()}
                                on_remove_item={calculator.actions.on_remove_item.clone()}
                            />

                            <SummaryPanel summary={calculator.state.summary.clone()} />

                            <button
                                type="submit"
                                class="btn btn-primary save-items-btn"
                                disabled={submitting}
                            >
                                {if submitting { "Saving..." } else { "Save items" }}
                            </button>
                        </form>
                    </section>

                    <TrendChart
                        points={report.state.trend_points.clone()}
                        loading={report.state.loading}
                    />

                    <SalesTable
                        sales={report.state.sales.clone()}
                        loading={report.state.loading}
                    />
                </div>
            </main>

            <div class="connection-status">
                {if *backend_connected {
                    format!("Connected to {}", *backend_endpoint)
                } else {
                    (*backend_endpoint).clone()
                }}
            </div>
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
