//! Sidebar navigation model. Labels are catalog ids.

#[derive(Clone, Debug, PartialEq)]
pub struct MenuItem {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MenuGroup {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    /// Direct link for groups without children
    pub href: Option<&'static str>,
    pub items: Vec<MenuItem>,
}

impl MenuGroup {
    fn link(id: &'static str, label: &'static str, icon: &'static str, href: &'static str) -> Self {
        Self {
            id,
            label,
            icon,
            href: Some(href),
            items: vec![],
        }
    }

    fn nested(
        id: &'static str,
        label: &'static str,
        icon: &'static str,
        items: Vec<(&'static str, &'static str)>,
    ) -> Self {
        Self {
            id,
            label,
            icon,
            href: None,
            items: items
                .into_iter()
                .map(|(label, href)| MenuItem { label, href })
                .collect(),
        }
    }

    pub fn has_children(&self) -> bool {
        !self.items.is_empty()
    }

    /// True when the current path is this group's link or one of its items.
    pub fn contains_path(&self, path: &str) -> bool {
        self.href.is_some_and(|href| is_active(path, href))
            || self.items.iter().any(|item| is_active(path, item.href))
    }
}

pub fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup::link("dashboard", "menu.dashboard", "dashboard", "/dashboard"),
        MenuGroup::link("users", "menu.users", "users", "/users"),
        MenuGroup::nested(
            "products",
            "menu.products",
            "products",
            vec![
                ("menu.products.all", "/products"),
                ("menu.products.categories", "/products/categories"),
                ("menu.products.inventory", "/products/inventory"),
            ],
        ),
        MenuGroup::nested(
            "orders",
            "menu.orders",
            "orders",
            vec![
                ("menu.orders.all", "/orders"),
                ("menu.orders.pending", "/orders/pending"),
                ("menu.orders.completed", "/orders/completed"),
            ],
        ),
        MenuGroup::nested(
            "finance",
            "menu.finance",
            "finance",
            vec![
                ("menu.finance.invoices", "/finance/invoices"),
                ("menu.finance.payments", "/finance/payments"),
                ("menu.finance.reports", "/finance/reports"),
            ],
        ),
        MenuGroup::nested(
            "reports",
            "menu.reports",
            "reports",
            vec![
                ("menu.reports.sales", "/reports/sales"),
                ("menu.reports.analytics", "/reports/analytics"),
                ("menu.reports.exports", "/reports/exports"),
            ],
        ),
        MenuGroup::link("documents", "menu.documents", "documents", "/documents"),
        MenuGroup::link("settings", "menu.settings", "settings", "/settings"),
    ]
}

/// Exact match, ignoring a trailing slash.
pub fn is_active(path: &str, href: &str) -> bool {
    fn trim(p: &str) -> &str {
        match p.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        }
    }
    trim(path) == trim(href)
}

/// Id of the group owning `path`, used to auto-expand on navigation.
pub fn group_for_path(path: &str) -> Option<&'static str> {
    menu_groups()
        .into_iter()
        .find(|group| group.has_children() && group.contains_path(path))
        .map(|group| group.id)
}
