//! CollectionStore - slot-backed persistence with seeded fallback.
//!
//! `load` never fails for absence or corruption: a slot that is missing
//! or unreadable is silently healed with freshly seeded data, mirroring
//! how the dashboard regenerates mock data when its local store is empty.
//! Only genuine storage failures (I/O errors, poisoned locks) surface.

use std::marker::PhantomData;
use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, warn};

use crate::broadcast::SettingsBus;
use crate::domain::UserSettings;
use crate::error::StoreError;
use crate::record::Seed;
use crate::storage::SlotStore;

/// The slot holding the single user-settings object.
pub const SETTINGS_SLOT: &str = "userSettings";

/// Persistence for one collection kind `R` over a [`SlotStore`].
///
/// The seeding RNG is injected at construction so tests can pass a
/// seeded `StdRng` and get reproducible collections.
pub struct CollectionStore<R: Seed, S: SlotStore> {
    slots: S,
    rng: Mutex<StdRng>,
    _kind: PhantomData<fn() -> R>,
}

impl<R: Seed, S: SlotStore> CollectionStore<R, S> {
    /// Create a store seeding from entropy.
    pub fn new(slots: S) -> Self {
        Self::with_rng(slots, StdRng::from_entropy())
    }

    /// Create a store seeding from the given RNG.
    pub fn with_rng(slots: S, rng: StdRng) -> Self {
        Self {
            slots,
            rng: Mutex::new(rng),
            _kind: PhantomData,
        }
    }

    /// Load the collection, seeding fresh data when the slot is absent
    /// or its content cannot be deserialized.
    ///
    /// Seeded data is returned without being written back, matching the
    /// original loaders; it is persisted the first time the caller saves.
    pub fn load(&self) -> Result<Vec<R>, StoreError> {
        match self.slots.read(R::SLOT)? {
            None => {
                debug!(slot = R::SLOT, "slot absent, seeding");
                self.reseed()
            }
            Some(json) => match serde_json::from_str(&json) {
                Ok(records) => Ok(records),
                Err(err) => {
                    warn!(slot = R::SLOT, error = %err, "slot unreadable, reseeding");
                    self.reseed()
                }
            },
        }
    }

    /// Serialize the full collection and overwrite the slot.
    pub fn save(&self, records: &[R]) -> Result<(), StoreError> {
        let json = serde_json::to_string(records)?;
        self.slots.write(R::SLOT, &json)
    }

    fn reseed(&self) -> Result<Vec<R>, StoreError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| StoreError::LockPoisoned("seed"))?;
        Ok(R::seed(&mut *rng))
    }
}

/// Persistence for the single `userSettings` object.
pub struct SettingsStore<S: SlotStore> {
    slots: S,
}

impl<S: SlotStore> SettingsStore<S> {
    /// Create a settings store over the given slot store.
    pub fn new(slots: S) -> Self {
        Self { slots }
    }

    /// Load the settings, falling back to defaults when the slot is
    /// absent or unreadable.
    pub fn load(&self) -> Result<UserSettings, StoreError> {
        match self.slots.read(SETTINGS_SLOT)? {
            None => Ok(UserSettings::default()),
            Some(json) => match serde_json::from_str(&json) {
                Ok(settings) => Ok(settings),
                Err(err) => {
                    warn!(slot = SETTINGS_SLOT, error = %err, "settings unreadable, using defaults");
                    Ok(UserSettings::default())
                }
            },
        }
    }

    /// Serialize and overwrite the settings slot.
    pub fn save(&self, settings: &UserSettings) -> Result<(), StoreError> {
        let json = serde_json::to_string(settings)?;
        self.slots.write(SETTINGS_SLOT, &json)
    }

    /// Save, then broadcast both settings signals so every independently
    /// mounted listener re-observes the post-save value.
    pub fn save_and_notify(
        &self,
        settings: &UserSettings,
        bus: &SettingsBus,
    ) -> Result<(), StoreError> {
        self.save(settings)?;
        bus.publish_saved(settings)
    }
}
