use shared::ExpenseCategory;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BatchSettingsFormProps {
    pub date: String,
    pub category: ExpenseCategory,
    pub vendor: String,
    pub submitting: bool,

    pub on_date_change: Callback<Event>,
    pub on_category_change: Callback<Event>,
    pub on_vendor_change: Callback<Event>,
}

/// The settings applied to every item in the batch: date, expense category
/// and an optional vendor.
#[function_component(BatchSettingsForm)]
pub fn batch_settings_form(props: &BatchSettingsFormProps) -> Html {
    html! {
        <section class="batch-settings-section">
            <div class="form-group">
                <label for="batch-date">{"Date"}</label>
                <input
                    type="date"
                    id="batch-date"
                    value={props.date.clone()}
                    onchange={props.on_date_change.clone()}
                    disabled={props.submitting}
                />
            </div>

            <div class="form-group">
                <label for="batch-category">{"Category"}</label>
                <select
                    id="batch-category"
                    onchange={props.on_category_change.clone()}
                    disabled={props.submitting}
                >
                    {for ExpenseCategory::all().iter().map(|category| {
                        html! {
                            <option
                                value={category.as_str()}
                                selected={*category == props.category}
                            >
                                {category.label()}
                            </option>
                        }
                    })}
                </select>
            </div>

            <div class="form-group">
                <label for="batch-vendor">{"Vendor (optional)"}</label>
                <input
                    type="text"
                    id="batch-vendor"
                    placeholder="Acme Wholesale"
                    value={props.vendor.clone()}
                    onchange={props.on_vendor_change.clone()}
                    disabled={props.submitting}
                />
            </div>
        </section>
    }
}
