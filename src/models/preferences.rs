//! Per-user preferences

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::currency::Currency;
use super::ids::UserId;
use super::money::Money;

/// Display and notification preferences of one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub user_id: UserId,

    #[serde(default)]
    pub default_currency: Currency,

    #[serde(default = "default_notifications_enabled")]
    pub notifications_enabled: bool,

    /// Optional monthly spending target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_budget: Option<Money>,

    pub updated_at: DateTime<Utc>,
}

fn default_notifications_enabled() -> bool {
    true
}

impl UserPreferences {
    /// Create default preferences for a user
    pub fn new(user_id: UserId, default_currency: Currency) -> Self {
        Self {
            user_id,
            default_currency,
            notifications_enabled: default_notifications_enabled(),
            monthly_budget: None,
            updated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_fields_missing() {
        let json = r#"{"userId":"alice","updatedAt":"2025-01-01T00:00:00Z"}"#;
        let prefs: UserPreferences = serde_json::from_str(json).unwrap();

        assert_eq!(prefs.default_currency, Currency::Usd);
        assert!(prefs.notifications_enabled);
        assert_eq!(prefs.monthly_budget, None);
    }
}
