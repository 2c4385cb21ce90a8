//! Static fixtures rendered by the pages until a backend exists.

use contracts::dashboards::{ChangeType, DashboardStat};
use contracts::domain::{
    Notification, OrderStatus, Product, RecentOrder, TopProduct, User, UserRole,
};

/// Signed-in user shown in the header menu.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentUser {
    pub name: &'static str,
    pub email: &'static str,
    pub role: &'static str,
}

pub const CURRENT_USER: CurrentUser = CurrentUser {
    name: "Admin User",
    email: "admin@erp.example",
    role: "Administrator",
};

pub fn users() -> Vec<User> {
    vec![
        User {
            id: 1,
            name: "John Doe".into(),
            email: "john@example.com".into(),
            role: UserRole::Admin,
        },
        User {
            id: 2,
            name: "Jane Smith".into(),
            email: "jane@example.com".into(),
            role: UserRole::User,
        },
    ]
}

pub fn products() -> Vec<Product> {
    let rows = [
        (1, "Laptop Pro", "Electronics", 1299.99, 15),
        (2, "Office Chair", "Furniture", 299.99, 8),
        (3, "Wireless Mouse", "Electronics", 49.99, 32),
    ];
    rows.into_iter()
        .map(|(id, name, category, price, stock)| Product {
            id,
            name: name.into(),
            category: category.into(),
            price,
            stock,
        })
        .collect()
}

pub fn admin_stats() -> Vec<DashboardStat> {
    let rows = [
        ("admin.stat.totalSales", "$45,231.89", "+20.1%", "💰"),
        ("admin.stat.activeUsers", "2,234", "+15.3%", "👥"),
        ("admin.stat.products", "1,892", "+2.4%", "📦"),
        ("admin.stat.pendingOrders", "23", "-4.2%", "⏳"),
    ];
    rows.into_iter()
        .map(|(title, value, change, icon)| DashboardStat {
            title: title.into(),
            value: value.into(),
            change: change.into(),
            change_type: ChangeType::from_change(change),
            icon: icon.into(),
        })
        .collect()
}

pub fn recent_orders() -> Vec<RecentOrder> {
    let rows = [
        ("#3210", "Juan Pérez", "Laptop Dell XPS", 1299.0, OrderStatus::Completed, "2024-01-15"),
        ("#3209", "María García", "iPhone 15 Pro", 999.0, OrderStatus::Processing, "2024-01-15"),
        ("#3208", "Carlos López", "Monitor Samsung 27\"", 329.0, OrderStatus::Shipped, "2024-01-14"),
        ("#3207", "Ana Rodríguez", "Teclado Mecánico", 149.0, OrderStatus::Completed, "2024-01-14"),
    ];
    rows.into_iter()
        .map(|(id, customer, product, amount, status, date)| RecentOrder {
            id: id.into(),
            customer: customer.into(),
            product: product.into(),
            amount,
            status,
            date: date.into(),
        })
        .collect()
}

pub fn top_products() -> Vec<TopProduct> {
    let rows = [
        ("Laptop Dell XPS 13", 89, 115_671.0),
        ("iPhone 15 Pro", 67, 66_933.0),
        ("Monitor Samsung 27\"", 45, 14_805.0),
        ("AirPods Pro", 38, 9_462.0),
    ];
    rows.into_iter()
        .map(|(name, sales, revenue)| TopProduct {
            name: name.into(),
            sales,
            revenue,
        })
        .collect()
}

pub fn notifications() -> Vec<Notification> {
    let rows = [
        (1, "New order received #1234", "5 min", true),
        (2, "Low stock on Product XYZ", "15 min", true),
        (3, "Monthly report generated", "1 hour", false),
    ];
    rows.into_iter()
        .map(|(id, message, time, unread)| Notification {
            id,
            message: message.into(),
            time: time.into(),
            unread,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::unread_count;

    #[test]
    fn only_pending_orders_trend_down() {
        let negative: Vec<_> = admin_stats()
            .into_iter()
            .filter(|s| s.change_type == ChangeType::Negative)
            .map(|s| s.title)
            .collect();
        assert_eq!(negative, vec!["admin.stat.pendingOrders"]);
    }

    #[test]
    fn two_notifications_start_unread() {
        assert_eq!(unread_count(&notifications()), 2);
    }

    #[test]
    fn product_ids_are_unique() {
        let mut ids: Vec<_> = products().iter().map(|p| p.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }
}
