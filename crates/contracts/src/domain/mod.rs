//! Presentational records rendered by the mock pages.

pub mod notifications;
pub mod products;
pub mod sales;
pub mod users;

pub use notifications::{unread_count, Notification};
pub use products::Product;
pub use sales::{OrderStatus, RecentOrder, TopProduct};
pub use users::{User, UserRole};
