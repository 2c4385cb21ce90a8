use leptos::prelude::*;

/// Shell state shared by the header and the sidebar.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub sidebar_open: RwSignal<bool>,
    pub expanded_groups: RwSignal<Vec<String>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            sidebar_open: RwSignal::new(true),
            expanded_groups: RwSignal::new(vec![]),
        }
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_open.update(|open| *open = !*open);
    }

    pub fn close_sidebar(&self) {
        self.sidebar_open.set(false);
    }

    pub fn toggle_group(&self, id: &str) {
        self.expanded_groups.update(|groups| toggle_entry(groups, id));
    }

    /// Expand `id` without collapsing anything else.
    pub fn expand_group(&self, id: &str) {
        let already = self
            .expanded_groups
            .with_untracked(|groups| groups.iter().any(|g| g == id));
        if !already {
            self.expanded_groups.update(|groups| groups.push(id.to_string()));
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded_groups.with(|groups| groups.iter().any(|g| g == id))
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found. Provide it at the application root.")
}

/// Remove `id` when present, append it otherwise.
fn toggle_entry(items: &mut Vec<String>, id: &str) {
    if let Some(pos) = items.iter().position(|x| x == id) {
        items.remove(pos);
    } else {
        items.push(id.to_string());
    }
}
