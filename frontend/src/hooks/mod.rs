pub mod use_item_calculator;
pub mod use_sales_report;
