use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed set of expense categories understood by the backend.
///
/// Serialized as the lowercase wire strings the REST API expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Inventory,
    Supplies,
    Equipment,
    Shipping,
    Utilities,
    Marketing,
    Other,
}

impl ExpenseCategory {
    /// All categories, in the order they appear in selection menus.
    pub fn all() -> &'static [ExpenseCategory] {
        &[
            ExpenseCategory::Inventory,
            ExpenseCategory::Supplies,
            ExpenseCategory::Equipment,
            ExpenseCategory::Shipping,
            ExpenseCategory::Utilities,
            ExpenseCategory::Marketing,
            ExpenseCategory::Other,
        ]
    }

    /// Wire string for this category (matches the serde representation).
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::Inventory => "inventory",
            ExpenseCategory::Supplies => "supplies",
            ExpenseCategory::Equipment => "equipment",
            ExpenseCategory::Shipping => "shipping",
            ExpenseCategory::Utilities => "utilities",
            ExpenseCategory::Marketing => "marketing",
            ExpenseCategory::Other => "other",
        }
    }

    /// Human-readable label for selection menus.
    pub fn label(&self) -> &'static str {
        match self {
            ExpenseCategory::Inventory => "Inventory",
            ExpenseCategory::Supplies => "Supplies",
            ExpenseCategory::Equipment => "Equipment",
            ExpenseCategory::Shipping => "Shipping",
            ExpenseCategory::Utilities => "Utilities",
            ExpenseCategory::Marketing => "Marketing",
            ExpenseCategory::Other => "Other",
        }
    }

    /// Parse a wire string back into a category.
    pub fn parse(value: &str) -> Option<ExpenseCategory> {
        ExpenseCategory::all()
            .iter()
            .copied()
            .find(|category| category.as_str() == value)
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Category string the backend requires on every revenue record created by
/// the expense-items workflow.
pub const REVENUE_CATEGORY_SALES: &str = "sales";

/// Request for creating an expense record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateExpenseRequest {
    pub title: String,
    /// Self-describing audit text; carries the computed figures for the item.
    pub description: String,
    pub amount: f64,
    pub category: ExpenseCategory,
    pub vendor: Option<String>,
    /// ISO 8601 date (YYYY-MM-DD)
    pub date: String,
    pub is_recurring: bool,
    pub recurring_frequency: Option<String>,
    pub attachment_url: Option<String>,
}

/// Response after creating an expense record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateExpenseResponse {
    pub expense_id: String,
    pub success_message: String,
}

/// Request for creating a revenue record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateRevenueRequest {
    pub title: String,
    pub description: String,
    pub amount: f64,
    /// Always [`REVENUE_CATEGORY_SALES`] for records paired with an expense.
    pub category: String,
    pub source: String,
    /// ISO 8601 date (YYYY-MM-DD)
    pub date: String,
    pub is_recurring: bool,
    pub recurring_frequency: Option<String>,
    pub attachment_url: Option<String>,
}

/// Response after creating a revenue record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateRevenueResponse {
    pub revenue_id: String,
    pub success_message: String,
}

/// Structured error payload some backend endpoints return on failure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// One day of aggregated revenue/expense totals for the trend chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// ISO 8601 date (YYYY-MM-DD)
    pub date: String,
    pub revenue: f64,
    pub expense: f64,
}

/// Response containing the revenue/expense trend series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendReportResponse {
    pub points: Vec<TrendPoint>,
}

/// Staff role for client-side visibility filtering.
///
/// Authorization is enforced by the backend; this only controls which
/// already-fetched records the UI shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    Associate,
}

/// A staff member in the directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffUser {
    pub id: String,
    pub display_name: String,
    pub role: Role,
    /// Id of this user's manager, if any
    pub manager_id: Option<String>,
}

impl StaffUser {
    /// Whether this user may see records recorded by `owner_id`.
    ///
    /// Admins see everything; managers see their own records and their
    /// direct reports'; associates see only their own.
    pub fn can_view(&self, owner_id: &str, directory: &[StaffUser]) -> bool {
        match self.role {
            Role::Admin => true,
            Role::Manager => {
                owner_id == self.id
                    || directory.iter().any(|user| {
                        user.id == owner_id && user.manager_id.as_deref() == Some(self.id.as_str())
                    })
            }
            Role::Associate => owner_id == self.id,
        }
    }
}

/// A recorded sale, as listed by the recent-sales endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleEntry {
    pub id: String,
    /// Id of the staff member who recorded the sale
    pub recorded_by: String,
    pub title: String,
    pub amount: f64,
    /// ISO 8601 date (YYYY-MM-DD)
    pub date: String,
}

/// Response containing recent sales
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesListResponse {
    pub sales: Vec<SaleEntry>,
}

/// Response containing the staff directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffDirectoryResponse {
    pub users: Vec<StaffUser>,
}

/// Response identifying the signed-in user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUserResponse {
    pub user: StaffUser,
}

/// Filter `sales` down to the entries `user` is allowed to see.
///
/// Entry order is preserved.
pub fn visible_sales(
    user: &StaffUser,
    directory: &[StaffUser],
    sales: Vec<SaleEntry>,
) -> Vec<SaleEntry> {
    sales
        .into_iter()
        .filter(|sale| user.can_view(&sale.recorded_by, directory))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staff(id: &str, role: Role, manager_id: Option<&str>) -> StaffUser {
        StaffUser {
            id: id.to_string(),
            display_name: id.to_uppercase(),
            role,
            manager_id: manager_id.map(|m| m.to_string()),
        }
    }

    fn sale(id: &str, recorded_by: &str) -> SaleEntry {
        SaleEntry {
            id: id.to_string(),
            recorded_by: recorded_by.to_string(),
            title: format!("sale {}", id),
            amount: 10.0,
            date: "2026-08-01".to_string(),
        }
    }

    #[test]
    fn test_category_wire_format() {
        let json = serde_json::to_string(&ExpenseCategory::Inventory).unwrap();
        assert_eq!(json, "\"inventory\"");

        let parsed: ExpenseCategory = serde_json::from_str("\"shipping\"").unwrap();
        assert_eq!(parsed, ExpenseCategory::Shipping);
    }

    #[test]
    fn test_category_parse_round_trip() {
        for category in ExpenseCategory::all() {
            assert_eq!(ExpenseCategory::parse(category.as_str()), Some(*category));
        }
        assert_eq!(ExpenseCategory::parse("payroll"), None);
    }

    #[test]
    fn test_expense_request_serializes_null_optionals() {
        let request = CreateExpenseRequest {
            title: "Widget".to_string(),
            description: "Widget restock".to_string(),
            amount: 20.0,
            category: ExpenseCategory::Inventory,
            vendor: None,
            date: "2026-08-01".to_string(),
            is_recurring: false,
            recurring_frequency: None,
            attachment_url: None,
        };

        let value: serde_json::Value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["category"], "inventory");
        assert_eq!(value["is_recurring"], false);
        assert!(value["recurring_frequency"].is_null());
        assert!(value["attachment_url"].is_null());
    }

    #[test]
    fn test_admin_sees_everything() {
        let admin = staff("alice", Role::Admin, None);
        let directory = vec![admin.clone(), staff("bob", Role::Associate, None)];
        let sales = vec![sale("1", "bob"), sale("2", "carol")];

        let visible = visible_sales(&admin, &directory, sales);
        assert_eq!(visible.len(), 2);
    }

    #[test]
    fn test_manager_sees_own_and_direct_reports() {
        let manager = staff("maria", Role::Manager, None);
        let directory = vec![
            manager.clone(),
            staff("bob", Role::Associate, Some("maria")),
            staff("carol", Role::Associate, Some("other-manager")),
        ];
        let sales = vec![sale("1", "maria"), sale("2", "bob"), sale("3", "carol")];

        let visible = visible_sales(&manager, &directory, sales);
        let ids: Vec<&str> = visible.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_associate_sees_only_own_records() {
        let associate = staff("bob", Role::Associate, Some("maria"));
        let directory = vec![staff("maria", Role::Manager, None), associate.clone()];
        let sales = vec![sale("1", "maria"), sale("2", "bob")];

        let visible = visible_sales(&associate, &directory, sales);
        let ids: Vec<&str> = visible.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["2"]);
    }

    #[test]
    fn test_filter_preserves_order() {
        let admin = staff("alice", Role::Admin, None);
        let sales = vec![sale("3", "x"), sale("1", "y"), sale("2", "z")];

        let visible = visible_sales(&admin, &[], sales);
        let ids: Vec<&str> = visible.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }
}
