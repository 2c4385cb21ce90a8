use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Completed,
    Processing,
    Shipped,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Completed => "completed",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
        }
    }

    /// Catalog id of the status label.
    pub fn message_id(&self) -> &'static str {
        match self {
            OrderStatus::Completed => "order.status.completed",
            OrderStatus::Processing => "order.status.processing",
            OrderStatus::Shipped => "order.status.shipped",
        }
    }

    pub fn all() -> Vec<OrderStatus> {
        vec![
            OrderStatus::Completed,
            OrderStatus::Processing,
            OrderStatus::Shipped,
        ]
    }
}

/// Row of the "recent orders" widget. Amount is kept in major currency units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentOrder {
    pub id: String,
    pub customer: String,
    pub product: String,
    pub amount: f64,
    pub status: OrderStatus,
    /// Order date, "YYYY-MM-DD"
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopProduct {
    pub name: String,
    pub sales: u32,
    pub revenue: f64,
}
