use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A storefront customer account.
#[derive(Debug, Clone, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub orders_count: Option<u32>,
    pub total_spent: Option<f64>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Customer {
    /// Customers with recorded orders cannot be deleted.
    pub fn deletable(&self) -> bool {
        self.orders_count.unwrap_or(0) == 0
    }
}
