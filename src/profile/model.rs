use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::session::TravelType;

/// Preferences of a business traveller.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct BusinessPreferences {
    /// Whether bookings must stay inside the company expense policy.
    pub expense_policy: bool,
    /// Whether priority boarding should be requested.
    pub priority_boarding: bool,
    /// Whether lounge access should be requested.
    pub lounge_access: bool,
}

/// A travel budget. Replaced wholesale on update, never merged field by
/// field.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BudgetRange {
    pub min: u32,
    pub max: u32,
    pub currency: String,
}

/// Preferences of a leisure traveller.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LeisurePreferences {
    /// Interests, e.g. "food" or "museums".
    pub interests: Vec<String>,
    /// Travel styles, e.g. "backpacking" or "luxury".
    pub styles: Vec<String>,
    pub budget: BudgetRange,
}

/// Preferences of a traveller mixing business and leisure on one trip.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct BleisurePreferences {
    pub work_days: Vec<Weekday>,
    pub leisure_days: Vec<Weekday>,
    /// Whether to split expenses between the work and leisure legs.
    pub split_expenses: bool,
}

/// The preference shape of a profile, keyed by travel type. Exactly one
/// sub-shape exists per instance.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Preferences {
    Business(BusinessPreferences),
    Leisure(LeisurePreferences),
    Bleisure(BleisurePreferences),
}

impl Preferences {
    /// The travel-type tag selecting this shape.
    pub fn travel_type(&self) -> TravelType {
        match self {
            Preferences::Business(_) => TravelType::Business,
            Preferences::Leisure(_) => TravelType::Leisure,
            Preferences::Bleisure(_) => TravelType::Bleisure,
        }
    }
}

/// The single record held by the [`ProfileStore`](crate::ProfileStore).
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TravelProfile {
    pub preferences: Preferences,
}

impl TravelProfile {
    pub fn new(preferences: Preferences) -> Self {
        Self { preferences }
    }

    pub fn travel_type(&self) -> TravelType {
        self.preferences.travel_type()
    }
}

/// A partial update to a [`BusinessPreferences`]. `None` fields are left
/// untouched.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct BusinessPreferencesUpdate {
    pub expense_policy: Option<bool>,
    pub priority_boarding: Option<bool>,
    pub lounge_access: Option<bool>,
}

/// A partial update to a [`LeisurePreferences`]. A supplied budget replaces
/// the existing one wholesale.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct LeisurePreferencesUpdate {
    pub interests: Option<Vec<String>>,
    pub styles: Option<Vec<String>>,
    pub budget: Option<BudgetRange>,
}

/// A partial update to a [`BleisurePreferences`].
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct BleisurePreferencesUpdate {
    pub work_days: Option<Vec<Weekday>>,
    pub leisure_days: Option<Vec<Weekday>>,
    pub split_expenses: Option<bool>,
}

/// A partial preference update, tagged like [`Preferences`]. Applying a
/// variant that doesn't match the profile's current tag is a no-op.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PreferencesUpdate {
    Business(BusinessPreferencesUpdate),
    Leisure(LeisurePreferencesUpdate),
    Bleisure(BleisurePreferencesUpdate),
}

impl Preferences {
    /// Shallow-merge `update` into this shape: supplied fields overwrite,
    /// absent fields are kept, nested objects are replaced rather than
    /// inner-merged. Returns whether anything was applied.
    pub(crate) fn apply(&mut self, update: PreferencesUpdate) -> bool {
        match (self, update) {
            (Preferences::Business(prefs), PreferencesUpdate::Business(update)) => {
                if let Some(expense_policy) = update.expense_policy {
                    prefs.expense_policy = expense_policy;
                }
                if let Some(priority_boarding) = update.priority_boarding {
                    prefs.priority_boarding = priority_boarding;
                }
                if let Some(lounge_access) = update.lounge_access {
                    prefs.lounge_access = lounge_access;
                }
                true
            }
            (Preferences::Leisure(prefs), PreferencesUpdate::Leisure(update)) => {
                if let Some(interests) = update.interests {
                    prefs.interests = interests;
                }
                if let Some(styles) = update.styles {
                    prefs.styles = styles;
                }
                if let Some(budget) = update.budget {
                    prefs.budget = budget;
                }
                true
            }
            (Preferences::Bleisure(prefs), PreferencesUpdate::Bleisure(update)) => {
                if let Some(work_days) = update.work_days {
                    prefs.work_days = work_days;
                }
                if let Some(leisure_days) = update.leisure_days {
                    prefs.leisure_days = leisure_days;
                }
                if let Some(split_expenses) = update.split_expenses {
                    prefs.split_expenses = split_expenses;
                }
                true
            }
            _ => false,
        }
    }
}
