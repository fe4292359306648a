//! Entity records returned by the storefront API.
//!
//! Every list endpoint returns plain records with an `id` field plus display
//! fields. Nested references (`customer`, `supplier`, `product`) and most
//! display fields are optional: the API omits them freely, so each is an
//! `Option` decoded defensively and rendered with a placeholder downstream.

mod customer;
mod inventory;
mod order;
mod payment;
mod product;
mod user;

pub use customer::Customer;
pub use inventory::{InventoryItem, InventoryStatus, SupplierRef};
pub use order::{CustomerRef, Order, OrderStatus};
pub use payment::{Payment, PaymentStatus};
pub use product::{Product, ProductRef, ProductStatus};
pub use user::User;
