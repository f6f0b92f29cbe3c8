pub mod batch_settings_form;
pub mod item_rows_form;
