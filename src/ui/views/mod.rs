//! Per-view table definitions: columns, row projection, menus, and details.
//!
//! These modules are deliberately thin. They project entities into cells and
//! declare which menu items a row offers; every mutation and fetch is owned
//! by the app. Missing fields render as `N/A` (text) or `-` (numbers/dates),
//! never as an error.

pub mod customers;
pub mod inventory;
pub mod orders;
pub mod payments;
pub mod products;
pub mod users;

use chrono::{DateTime, Utc};

use crate::model::{CustomerRef, InventoryStatus, OrderStatus, ProductStatus};

/// Everything a menu item can ask the app to do.
#[derive(Debug, Clone, PartialEq)]
pub enum RowAction {
    ViewDetails,
    EditPrice,
    EditQuantity,
    Delete,
    ToggleActive,
    Refund,
    SetProductStatus(ProductStatus),
    SetOrderStatus(OrderStatus),
    SetInventoryStatus(InventoryStatus),
}

pub(crate) fn opt_str(value: Option<&str>) -> String {
    value.unwrap_or("N/A").to_string()
}

pub(crate) fn opt_money(value: Option<f64>) -> String {
    value
        .map(|v| format!("${v:.2}"))
        .unwrap_or_else(|| "-".to_string())
}

pub(crate) fn opt_count<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

pub(crate) fn opt_date(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Customer display name from an optional nested reference.
pub(crate) fn customer_label(customer: Option<&CustomerRef>) -> String {
    customer
        .and_then(|c| c.name.as_deref().or(c.email.as_deref()))
        .unwrap_or("N/A")
        .to_string()
}
