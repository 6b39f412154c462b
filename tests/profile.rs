use chrono::Weekday;
use voyago_rs::{
    profile::{
        BleisurePreferences, BudgetRange, BusinessPreferences, BusinessPreferencesUpdate,
        LeisurePreferences, LeisurePreferencesUpdate, Preferences, PreferencesUpdate, ProfileStore,
        TravelProfile,
    },
    session::TravelType,
    storage::{FileStorage, MemoryStorage, Storage, PROFILE_KEY},
};

fn business_profile() -> TravelProfile {
    TravelProfile::new(Preferences::Business(BusinessPreferences {
        expense_policy: false,
        priority_boarding: true,
        lounge_access: false,
    }))
}

fn leisure_profile() -> TravelProfile {
    TravelProfile::new(Preferences::Leisure(LeisurePreferences {
        interests: vec!["food".to_string(), "museums".to_string()],
        styles: vec!["slow travel".to_string()],
        budget: BudgetRange {
            min: 500,
            max: 2500,
            currency: "EUR".to_string(),
        },
    }))
}

#[test]
fn set_replaces_the_whole_profile() {
    let mut profiles = ProfileStore::new(MemoryStorage::new()).unwrap();
    assert!(profiles.current().is_none());

    profiles.set(business_profile()).unwrap();
    assert_eq!(profiles.current().unwrap().travel_type(), TravelType::Business);

    profiles.set(leisure_profile()).unwrap();
    assert_eq!(profiles.current().unwrap().travel_type(), TravelType::Leisure);
}

#[test]
fn update_overwrites_supplied_fields_and_keeps_the_rest() {
    let mut profiles = ProfileStore::new(MemoryStorage::new()).unwrap();
    profiles.set(business_profile()).unwrap();

    profiles
        .update(PreferencesUpdate::Business(BusinessPreferencesUpdate {
            expense_policy: Some(true),
            ..Default::default()
        }))
        .unwrap();

    match &profiles.current().unwrap().preferences {
        Preferences::Business(prefs) => {
            assert!(prefs.expense_policy);
            // Untouched fields keep their values.
            assert!(prefs.priority_boarding);
            assert!(!prefs.lounge_access);
        }
        other => panic!("Expected business preferences, got {other:?}"),
    }
}

#[test]
fn update_replaces_budget_wholesale() {
    let mut profiles = ProfileStore::new(MemoryStorage::new()).unwrap();
    profiles.set(leisure_profile()).unwrap();

    profiles
        .update(PreferencesUpdate::Leisure(LeisurePreferencesUpdate {
            budget: Some(BudgetRange {
                min: 1000,
                max: 1000,
                currency: "USD".to_string(),
            }),
            ..Default::default()
        }))
        .unwrap();

    match &profiles.current().unwrap().preferences {
        Preferences::Leisure(prefs) => {
            // The nested budget is not inner-merged; the whole range is new.
            assert_eq!(prefs.budget.min, 1000);
            assert_eq!(prefs.budget.max, 1000);
            assert_eq!(prefs.budget.currency, "USD");
            assert_eq!(prefs.interests.len(), 2);
        }
        other => panic!("Expected leisure preferences, got {other:?}"),
    }
}

#[test]
fn update_without_a_profile_is_a_no_op() {
    let mut profiles = ProfileStore::new(MemoryStorage::new()).unwrap();

    profiles
        .update(PreferencesUpdate::Business(BusinessPreferencesUpdate {
            expense_policy: Some(true),
            ..Default::default()
        }))
        .unwrap();

    assert!(profiles.current().is_none());
}

#[test]
fn update_with_mismatched_tag_is_a_no_op() {
    let mut profiles = ProfileStore::new(MemoryStorage::new()).unwrap();
    profiles.set(leisure_profile()).unwrap();

    profiles
        .update(PreferencesUpdate::Business(BusinessPreferencesUpdate {
            expense_policy: Some(true),
            ..Default::default()
        }))
        .unwrap();

    assert_eq!(profiles.current(), Some(&leisure_profile()));
}

#[test]
fn clear_removes_profile_and_durable_slot() {
    let dir = tempfile::tempdir().unwrap();

    let mut profiles = ProfileStore::new(FileStorage::new(dir.path()).unwrap()).unwrap();
    profiles.set(business_profile()).unwrap();
    profiles.clear().unwrap();
    assert!(profiles.current().is_none());

    let storage = FileStorage::new(dir.path()).unwrap();
    assert_eq!(storage.read(PROFILE_KEY).unwrap(), None);

    // Idempotent.
    profiles.clear().unwrap();
}

#[test]
fn profile_survives_restart() {
    let dir = tempfile::tempdir().unwrap();

    let profile = TravelProfile::new(Preferences::Bleisure(BleisurePreferences {
        work_days: vec![Weekday::Mon, Weekday::Tue, Weekday::Wed],
        leisure_days: vec![Weekday::Sat, Weekday::Sun],
        split_expenses: true,
    }));

    {
        let mut profiles = ProfileStore::new(FileStorage::new(dir.path()).unwrap()).unwrap();
        profiles.set(profile.clone()).unwrap();
    }

    // A fresh store over the same directory rehydrates the profile.
    let profiles = ProfileStore::new(FileStorage::new(dir.path()).unwrap()).unwrap();
    assert_eq!(profiles.current(), Some(&profile));
}
