use voyago_rs::{
    session::{Role, SessionStore, TravelType},
    storage::{FileStorage, MemoryStorage, Storage, SESSION_KEY},
    Error,
};

#[test]
fn login_matches_every_demo_account() {
    let accounts = [
        ("business@voyago.travel", "business123", "Ava Chen", Role::User, Some(TravelType::Business)),
        ("leisure@voyago.travel", "leisure123", "Liam Park", Role::User, Some(TravelType::Leisure)),
        ("bleisure@voyago.travel", "bleisure123", "Maya Rossi", Role::User, Some(TravelType::Bleisure)),
        ("admin@voyago.travel", "admin123", "Noah Adler", Role::Admin, None),
    ];

    for (email, password, name, role, travel_type) in accounts {
        let mut session = SessionStore::new(MemoryStorage::new()).unwrap();
        assert!(!session.is_authenticated());

        let identity = session.login(email, password).unwrap();
        assert_eq!(identity.email, email);
        assert_eq!(identity.name, name);
        assert_eq!(identity.role, role);
        assert_eq!(identity.travel_type, travel_type);
        assert!(session.is_authenticated());
        assert_eq!(session.current(), Some(&identity));
    }
}

#[test]
fn login_with_unknown_credentials_fails_without_state_change() {
    let mut session = SessionStore::new(MemoryStorage::new()).unwrap();

    for (email, password) in [
        ("nobody@voyago.travel", "whatever"),
        ("business@voyago.travel", "wrong-password"),
        ("", ""),
    ] {
        match session.login(email, password) {
            Err(Error::InvalidCredentials) => {}
            res => panic!("Expected invalid credentials, got {res:?}"),
        }
        assert!(!session.is_authenticated());
        assert!(session.current().is_none());
    }
}

#[test]
fn failed_login_leaves_existing_session_untouched() {
    let mut session = SessionStore::new(MemoryStorage::new()).unwrap();
    let identity = session
        .login("leisure@voyago.travel", "leisure123")
        .unwrap();

    session
        .login("leisure@voyago.travel", "wrong")
        .unwrap_err();
    assert_eq!(session.current(), Some(&identity));
}

#[test]
fn signup_always_succeeds_with_fresh_ids() {
    let mut session = SessionStore::new(MemoryStorage::new()).unwrap();

    let first = session
        .signup("Sam Doe", "sam@example.com", "hunter2", TravelType::Leisure)
        .unwrap();
    assert_eq!(first.role, Role::User);
    assert_eq!(first.travel_type, Some(TravelType::Leisure));
    assert_eq!(first.name, "Sam Doe");
    assert!(session.is_authenticated());

    // Same input still yields a distinct identity; there is no uniqueness
    // check by design.
    let second = session
        .signup("Sam Doe", "sam@example.com", "hunter2", TravelType::Leisure)
        .unwrap();
    assert_ne!(first.id, second.id);
    assert_eq!(session.current(), Some(&second));
}

#[test]
fn logout_clears_session_and_durable_slot() {
    let dir = tempfile::tempdir().unwrap();

    let mut session = SessionStore::new(FileStorage::new(dir.path()).unwrap()).unwrap();
    session
        .login("business@voyago.travel", "business123")
        .unwrap();

    session.logout().unwrap();
    assert!(!session.is_authenticated());

    let storage = FileStorage::new(dir.path()).unwrap();
    assert_eq!(storage.read(SESSION_KEY).unwrap(), None);

    // Idempotent.
    session.logout().unwrap();
}

#[test]
fn session_survives_restart() {
    let dir = tempfile::tempdir().unwrap();

    let identity = {
        let mut session = SessionStore::new(FileStorage::new(dir.path()).unwrap()).unwrap();
        session
            .login("bleisure@voyago.travel", "bleisure123")
            .unwrap()
    };

    // A fresh store over the same directory rehydrates the session.
    let session = SessionStore::new(FileStorage::new(dir.path()).unwrap()).unwrap();
    assert!(session.is_authenticated());
    assert_eq!(session.current(), Some(&identity));
}
