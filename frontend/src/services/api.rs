use gloo::net::http::Request;
use shared::{
    CreateExpenseRequest, CreateExpenseResponse, CreateRevenueRequest, CreateRevenueResponse,
    CurrentUserResponse, SalesListResponse, StaffDirectoryResponse, TrendReportResponse,
};

/// API client for communicating with the backend server
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the default base URL
    pub fn new() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
        }
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    /// Test connection to the backend
    pub async fn test_connection(&self) -> Result<(), String> {
        match Request::get(&format!("{}/api/session/me", self.base_url))
            .send()
            .await
        {
            Ok(_) => Ok(()),
            Err(e) => Err(format!("Connection failed: {}", e)),
        }
    }

    /// Create one expense record
    pub async fn create_expense(
        &self,
        request: &CreateExpenseRequest,
    ) -> Result<CreateExpenseResponse, String> {
        let url = format!("{}/api/expenses", self.base_url);

        match Request::post(&url)
            .json(request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    match response.json::<CreateExpenseResponse>().await {
                        Ok(data) => Ok(data),
                        Err(e) => Err(format!("Failed to parse response: {}", e)),
                    }
                } else {
                    let error_text = response.text().await.unwrap_or_default();
                    Err(extract_error_detail(&error_text))
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    /// Create one revenue record
    pub async fn create_revenue(
        &self,
        request: &CreateRevenueRequest,
    ) -> Result<CreateRevenueResponse, String> {
        let url = format!("{}/api/revenues", self.base_url);

        match Request::post(&url)
            .json(request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    match response.json::<CreateRevenueResponse>().await {
                        Ok(data) => Ok(data),
                        Err(e) => Err(format!("Failed to parse response: {}", e)),
                    }
                } else {
                    let error_text = response.text().await.unwrap_or_default();
                    Err(extract_error_detail(&error_text))
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    /// Get the revenue/expense trend series for the last `days` days
    pub async fn get_trend_report(&self, days: u32) -> Result<TrendReportResponse, String> {
        let url = format!("{}/api/reports/trend?days={}", self.base_url, days);

        match Request::get(&url).send().await {
            Ok(response) => match response.json::<TrendReportResponse>().await {
                Ok(data) => Ok(data),
                Err(e) => Err(format!("Failed to parse trend report: {}", e)),
            },
            Err(e) => Err(format!("Failed to fetch trend report: {}", e)),
        }
    }

    /// Get recent sales entries
    pub async fn get_recent_sales(&self, limit: Option<u32>) -> Result<SalesListResponse, String> {
        let limit_param = limit.map(|l| format!("?limit={}", l)).unwrap_or_default();
        let url = format!("{}/api/sales/recent{}", self.base_url, limit_param);

        match Request::get(&url).send().await {
            Ok(response) => match response.json::<SalesListResponse>().await {
                Ok(data) => Ok(data),
                Err(e) => Err(format!("Failed to parse sales: {}", e)),
            },
            Err(e) => Err(format!("Failed to fetch sales: {}", e)),
        }
    }

    /// Get the staff directory
    pub async fn get_staff_directory(&self) -> Result<StaffDirectoryResponse, String> {
        let url = format!("{}/api/staff", self.base_url);

        match Request::get(&url).send().await {
            Ok(response) => match response.json::<StaffDirectoryResponse>().await {
                Ok(data) => Ok(data),
                Err(e) => Err(format!("Failed to parse staff directory: {}", e)),
            },
            Err(e) => Err(format!("Failed to fetch staff directory: {}", e)),
        }
    }

    /// Get the signed-in user
    pub async fn get_current_user(&self) -> Result<CurrentUserResponse, String> {
        let url = format!("{}/api/session/me", self.base_url);

        match Request::get(&url).send().await {
            Ok(response) => match response.json::<CurrentUserResponse>().await {
                Ok(data) => Ok(data),
                Err(e) => Err(format!("Failed to parse current user: {}", e)),
            },
            Err(e) => Err(format!("Failed to fetch current user: {}", e)),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Pull a human-readable message out of an error response body.
///
/// Tries the structured `error`/`message` fields first, then falls back to
/// the raw body, then to a generic message.
pub(crate) fn extract_error_detail(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["error", "message"] {
            if let Some(detail) = value.get(key).and_then(|v| v.as_str()) {
                if !detail.is_empty() {
                    return detail.to_string();
                }
            }
        }
    }
    if body.trim().is_empty() {
        "Unknown error".to_string()
    } else {
        body.to_string()
    }
}
