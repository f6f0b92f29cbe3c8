use shared::ExpenseCategory;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::calculator::{
    check_submittable, derive_item, summarize, AggregateSummary, BatchSettings, DerivedResult,
    FormPhase, ItemField, ItemsAction, ItemsState, LineItem,
};
use crate::services::api::ApiClient;
use crate::services::date_utils;
use crate::services::logging::Logger;
use crate::services::submission::{build_batch, submit_batch};

#[derive(Clone)]
pub struct ItemCalculatorState {
    pub items: Vec<LineItem>,
    /// One derived record per row, same order as `items`
    pub derived: Vec<DerivedResult>,
    pub summary: AggregateSummary,
    pub settings: BatchSettings,
    pub phase: FormPhase,
    pub form_error: Option<String>,
    pub form_success: bool,
}

#[derive(Clone)]
pub struct ItemCalculatorActions {
    pub on_name_change: Callback<(u64, String)>,
    pub on_field_change: Callback<(u64, ItemField, String)>,
    pub on_add_item: Callback<()>,
    pub on_remove_item: Callback<u64>,
    pub on_date_change: Callback<Event>,
    pub on_category_change: Callback<Event>,
    pub on_vendor_change: Callback<Event>,
    pub save_items: Callback<()>,
}

pub struct UseItemCalculatorResult {
    pub state: ItemCalculatorState,
    pub actions: ItemCalculatorActions,
}

#[hook]
pub fn use_item_calculator(api_client: &ApiClient) -> UseItemCalculatorResult {
    let items = use_reducer(ItemsState::default);
    let settings = use_state(|| BatchSettings {
        date: date_utils::today_iso(),
        ..BatchSettings::default()
    });
    let phase = use_state(|| FormPhase::Editable);
    let form_error = use_state(|| Option::<String>::None);
    let form_success = use_state(|| false);

    // The calculator reruns on every render, so each keystroke that changes
    // a row recomputes every figure synchronously.
    let derived: Vec<DerivedResult> = items.items.iter().map(derive_item).collect();
    let summary = summarize(&derived);

    let on_name_change = {
        let items = items.clone();
        let form_error = form_error.clone();
        Callback::from(move |(id, value): (u64, String)| {
            items.dispatch(ItemsAction::SetName { id, value });
            form_error.set(None);
        })
    };

    let on_field_change = {
        let items = items.clone();
        let form_error = form_error.clone();
        Callback::from(move |(id, field, value): (u64, ItemField, String)| {
            items.dispatch(ItemsAction::SetField { id, field, value });
            form_error.set(None);
        })
    };

    let on_add_item = {
        let items = items.clone();
        Callback::from(move |_| items.dispatch(ItemsAction::Add))
    };

    let on_remove_item = {
        let items = items.clone();
        Callback::from(move |id: u64| items.dispatch(ItemsAction::Remove(id)))
    };

    let on_date_change = {
        let settings = settings.clone();
        let form_error = form_error.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            settings.set(BatchSettings {
                date: input.value(),
                ..(*settings).clone()
            });
            form_error.set(None);
        })
    };

    let on_category_change = {
        let settings = settings.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let category =
                ExpenseCategory::parse(&select.value()).unwrap_or(ExpenseCategory::Other);
            settings.set(BatchSettings {
                category,
                ..(*settings).clone()
            });
        })
    };

    let on_vendor_change = {
        let settings = settings.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            settings.set(BatchSettings {
                vendor: input.value(),
                ..(*settings).clone()
            });
        })
    };

    let save_items = {
        let api_client = api_client.clone();
        let items = items.clone();
        let settings = settings.clone();
        let phase = phase.clone();
        let form_error = form_error.clone();
        let form_success = form_success.clone();

        Callback::from(move |_| {
            let api_client = api_client.clone();
            let items = items.clone();
            let settings = settings.clone();
            let phase = phase.clone();
            let form_error = form_error.clone();
            let form_success = form_success.clone();

            spawn_local(async move {
                form_error.set(None);
                form_success.set(false);

                let current_items = items.items.clone();
                let derived: Vec<DerivedResult> = current_items.iter().map(derive_item).collect();
                let current_settings = (*settings).clone();

                if let Err(rejection) =
                    check_submittable(&current_items, &derived, &current_settings)
                {
                    Logger::warn("item-calculator", &format!("Save blocked: {}", rejection));
                    form_error.set(Some(rejection.to_string()));
                    return;
                }

                // Editing stays disabled until every request settles
                phase.set(FormPhase::Submitting);

                let rows: Vec<(LineItem, DerivedResult)> =
                    current_items.into_iter().zip(derived).collect();
                let requests = build_batch(&rows, &current_settings);

                match submit_batch(&api_client, requests).await {
                    Ok(count) => {
                        Logger::info(
                            "item-calculator",
                            &format!("Saved batch of {} records", count),
                        );
                        items.dispatch(ItemsAction::Reset);
                        form_success.set(true);

                        // Clear success message after 3 seconds
                        let form_success_clear = form_success.clone();
                        spawn_local(async move {
                            gloo::timers::future::TimeoutFuture::new(3000).await;
                            form_success_clear.set(false);
                        });
                    }
                    Err(error_message) => {
                        Logger::error(
                            "item-calculator",
                            &format!("Batch save failed: {}", error_message),
                        );
                        // The rows stay as entered so the batch can be retried
                        form_error.set(Some(error_message));
                    }
                }

                phase.set(FormPhase::Editable);
            });
        })
    };

    let state = ItemCalculatorState {
        items: items.items.clone(),
        derived,
        summary,
        settings: (*settings).clone(),
        phase: *phase,
        form_error: (*form_error).clone(),
        form_success: *form_success,
    };

    let actions = ItemCalculatorActions {
        on_name_change,
        on_field_change,
        on_add_item,
        on_remove_item,
        on_date_change,
        on_category_change,
        on_vendor_change,
        save_items,
    };

    UseItemCalculatorResult { state, actions }
}
