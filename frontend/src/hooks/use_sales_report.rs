use shared::{visible_sales, SaleEntry, TrendPoint};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;

#[derive(Clone, PartialEq)]
pub struct SalesReportState {
    pub trend_points: Vec<TrendPoint>,
    /// Filtered to what the signed-in user's role allows
    pub sales: Vec<SaleEntry>,
    pub loading: bool,
}

pub struct UseSalesReportResult {
    pub state: SalesReportState,
    pub refresh: Callback<()>,
}

#[hook]
pub fn use_sales_report(api_client: &ApiClient) -> UseSalesReportResult {
    let trend_points = use_state(Vec::<TrendPoint>::new);
    let sales = use_state(Vec::<SaleEntry>::new);
    let loading = use_state(|| true);

    let refresh = {
        let api_client = api_client.clone();
        let trend_points = trend_points.clone();
        let sales = sales.clone();
        let loading = loading.clone();

        Callback::from(move |_| {
            let api_client = api_client.clone();
            let trend_points = trend_points.clone();
            let sales = sales.clone();
            let loading = loading.clone();

            spawn_local(async move {
                loading.set(true);

                match api_client.get_trend_report(365).await {
                    Ok(data) => trend_points.set(data.points),
                    Err(e) => {
                        gloo::console::error!("Failed to fetch trend report:", e);
                    }
                }

                match api_client.get_current_user().await {
                    Ok(current) => {
                        let directory = match api_client.get_staff_directory().await {
                            Ok(data) => data.users,
                            Err(e) => {
                                gloo::console::error!("Failed to fetch staff directory:", e);
                                Vec::new()
                            }
                        };
                        match api_client.get_recent_sales(Some(20)).await {
                            Ok(data) => {
                                sales.set(visible_sales(&current.user, &directory, data.sales));
                            }
                            Err(e) => {
                                gloo::console::error!("Failed to fetch sales:", e);
                            }
                        }
                    }
                    Err(e) => {
                        gloo::console::error!("Failed to fetch current user:", e);
                    }
                }

                loading.set(false);
            });
        })
    };

    UseSalesReportResult {
        state: SalesReportState {
            trend_points: (*trend_points).clone(),
            sales: (*sales).clone(),
            loading: *loading,
        },
        refresh,
    }
}
