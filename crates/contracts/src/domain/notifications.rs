use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u32,
    pub message: String,
    /// Elapsed time label, e.g. "5 min"
    pub time: String,
    pub unread: bool,
}

/// Number of notifications still marked unread.
pub fn unread_count(items: &[Notification]) -> usize {
    items.iter().filter(|n| n.unread).count()
}
