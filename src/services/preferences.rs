//! Preferences service

use chrono::Utc;
use serde::Deserialize;

use super::validate;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, UserPreferences};

/// Partial update of a user's preferences
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PreferencesUpdate {
    #[serde(default)]
    pub default_currency: Option<String>,
    #[serde(default)]
    pub notifications_enabled: Option<bool>,
    /// `Some(None)` clears the budget
    #[serde(default, deserialize_with = "validate::double_option")]
    pub monthly_budget: Option<Option<Money>>,
}

/// Apply a partial update; absent fields are left untouched
pub fn update_preferences(
    prefs: &UserPreferences,
    update: PreferencesUpdate,
) -> LedgerResult<UserPreferences> {
    if update == PreferencesUpdate::default() {
        return Ok(prefs.clone());
    }

    let mut updated = prefs.clone();

    if let Some(code) = update.default_currency {
        updated.default_currency = validate::currency("defaultCurrency", &code)?;
    }
    if let Some(enabled) = update.notifications_enabled {
        updated.notifications_enabled = enabled;
    }
    if let Some(budget) = update.monthly_budget {
        if budget.is_some_and(|b| b.is_negative()) {
            return Err(LedgerError::validation(
                "monthlyBudget",
                "must not be negative",
            ));
        }
        updated.monthly_budget = budget;
    }

    updated.updated_at = Utc::now();
    Ok(updated)
}
