use tracing::instrument;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::session::model::{Identity, Role, TravelType, DEMO_ACCOUNTS};
use crate::storage::{Storage, SESSION_KEY};

/// Holds at most one authenticated identity and mirrors it into the
/// [`SESSION_KEY`] slot of its storage backend.
///
/// Presence of the record means "authenticated". Every mutating call
/// persists the record (or its absence) before returning, so a later
/// [`SessionStore::new`] over the same backend rehydrates the session.
#[derive(Debug)]
pub struct SessionStore {
    storage: Box<dyn Storage>,
    current: Option<Identity>,
}

impl SessionStore {
    /// Create a store over `storage`, rehydrating any persisted session.
    pub fn new<S: Storage + 'static>(storage: S) -> Result<Self> {
        let storage: Box<dyn Storage> = Box::new(storage);
        let current = match storage.read(SESSION_KEY)? {
            Some(raw) => Some(serde_json::from_str(&raw)?),
            None => None,
        };
        Ok(Self { storage, current })
    }

    /// Log in against the fixed demo allow-list.
    ///
    /// On a match the identity (without the password) becomes the current
    /// session and is persisted. On no match nothing changes and
    /// [`Error::InvalidCredentials`] is returned.
    #[instrument(skip(self, password))]
    pub fn login(&mut self, email: &str, password: &str) -> Result<Identity> {
        let account = DEMO_ACCOUNTS
            .iter()
            .find(|account| account.email == email && account.password == password)
            .ok_or(Error::InvalidCredentials)?;

        let identity = account.identity();
        self.current = Some(identity.clone());
        self.persist()?;
        tracing::debug!(user_id = %identity.id, "session established");
        Ok(identity)
    }

    /// Fabricate a fresh identity and make it the current session.
    ///
    /// The id is a new UUID, the role is always [`Role::User`] and the
    /// travel type is taken as supplied. There is no uniqueness check
    /// against existing emails and no password policy; the password is
    /// dropped on the floor.
    #[instrument(skip(self, _password))]
    pub fn signup(
        &mut self,
        name: &str,
        email: &str,
        _password: &str,
        travel_type: TravelType,
    ) -> Result<Identity> {
        let identity = Identity {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            role: Role::User,
            travel_type: Some(travel_type),
        };
        self.current = Some(identity.clone());
        self.persist()?;
        tracing::debug!(user_id = %identity.id, "session established");
        Ok(identity)
    }

    /// Clear the current session unconditionally. Idempotent.
    #[instrument(skip(self))]
    pub fn logout(&mut self) -> Result<()> {
        self.current = None;
        self.persist()
    }

    /// The currently authenticated identity, if any.
    pub fn current(&self) -> Option<&Identity> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    fn persist(&self) -> Result<()> {
        match &self.current {
            Some(identity) => self
                .storage
                .write(SESSION_KEY, &serde_json::to_string(identity)?),
            None => self.storage.remove(SESSION_KEY),
        }
    }
}
