use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    Positive,
    Negative,
}

/// Stat tile of the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStat {
    /// Catalog id of the tile title
    pub title: String,
    /// Preformatted value, e.g. "$45,231.89"
    pub value: String,
    /// Signed change against the previous month, e.g. "+20.1%"
    pub change: String,
    pub change_type: ChangeType,
    pub icon: String,
}

impl ChangeType {
    /// Derive the direction from a signed change label.
    pub fn from_change(change: &str) -> Self {
        if change.trim_start().starts_with('-') {
            ChangeType::Negative
        } else {
            ChangeType::Positive
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_type_follows_sign() {
        assert_eq!(ChangeType::from_change("+20.1%"), ChangeType::Positive);
        assert_eq!(ChangeType::from_change("-4.2%"), ChangeType::Negative);
        assert_eq!(ChangeType::from_change("0%"), ChangeType::Positive);
    }
}
