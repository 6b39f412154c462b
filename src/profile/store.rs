use tracing::instrument;

use crate::error::Result;
use crate::profile::model::{PreferencesUpdate, TravelProfile};
use crate::storage::{Storage, PROFILE_KEY};

/// Holds at most one [`TravelProfile`] and mirrors it into the
/// [`PROFILE_KEY`] slot of its storage backend.
///
/// Operations here never fail on their own; the only error sources are the
/// storage backend and serialization.
#[derive(Debug)]
pub struct ProfileStore {
    storage: Box<dyn Storage>,
    current: Option<TravelProfile>,
}

impl ProfileStore {
    /// Create a store over `storage`, rehydrating any persisted profile.
    pub fn new<S: Storage + 'static>(storage: S) -> Result<Self> {
        let storage: Box<dyn Storage> = Box::new(storage);
        let current = match storage.read(PROFILE_KEY)? {
            Some(raw) => Some(serde_json::from_str(&raw)?),
            None => None,
        };
        Ok(Self { storage, current })
    }

    /// Replace the entire current profile unconditionally.
    #[instrument(skip(self, profile))]
    pub fn set(&mut self, profile: TravelProfile) -> Result<()> {
        self.current = Some(profile);
        self.persist()
    }

    /// Shallow-merge a partial preference update into the current profile.
    ///
    /// A no-op when no profile exists or when the update's tag doesn't match
    /// the profile's. Supplied fields overwrite the existing ones; nested
    /// objects such as the leisure budget range are replaced wholesale.
    #[instrument(skip(self, update))]
    pub fn update(&mut self, update: PreferencesUpdate) -> Result<()> {
        let Some(profile) = self.current.as_mut() else {
            return Ok(());
        };
        if profile.preferences.apply(update) {
            self.persist()?;
        }
        Ok(())
    }

    /// Set the current profile to absent. Idempotent.
    #[instrument(skip(self))]
    pub fn clear(&mut self) -> Result<()> {
        self.current = None;
        self.persist()
    }

    /// The current profile, if any.
    pub fn current(&self) -> Option<&TravelProfile> {
        self.current.as_ref()
    }

    fn persist(&self) -> Result<()> {
        match &self.current {
            Some(profile) => self
                .storage
                .write(PROFILE_KEY, &serde_json::to_string(profile)?),
            None => self.storage.remove(PROFILE_KEY),
        }
    }
}
