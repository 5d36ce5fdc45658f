//! Settings broadcast - in-process change propagation.
//!
//! Independently mounted surfaces (the header avatar, the settings form)
//! observe the same settings object without sharing state: saving emits
//! two named signals, and each listener re-reads or receives the full
//! post-save value. Level-triggered - listeners always see whole state,
//! never diffs. Built on the `event-emitter-rs` emitter with an explicit
//! subscribe/unsubscribe lifecycle so no listener leaks past its surface.

use std::sync::Mutex;

use event_emitter_rs::EventEmitter;
use tracing::debug;

use crate::domain::UserSettings;
use crate::error::StoreError;

/// The two named signals observed by different listeners. Both are
/// emitted on every save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsSignal {
    /// Emitted for form-level consumers.
    Changed,
    /// Emitted for layout-level consumers (header, sidebar).
    Updated,
}

impl SettingsSignal {
    /// The emitter event name for this signal.
    pub fn name(&self) -> &'static str {
        match self {
            SettingsSignal::Changed => "userSettingsChanged",
            SettingsSignal::Updated => "userSettingsUpdated",
        }
    }
}

/// Handle returned by [`SettingsBus::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenerId(String);

/// Typed facade over the event emitter, parameterized by the settings
/// payload. Dispatch is asynchronous: handlers run on their own thread
/// shortly after `publish` returns.
pub struct SettingsBus {
    emitter: Mutex<EventEmitter>,
}

impl Default for SettingsBus {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsBus {
    /// Create a bus with no listeners.
    pub fn new() -> Self {
        Self {
            emitter: Mutex::new(EventEmitter::new()),
        }
    }

    /// Register a listener for one signal. The callback receives the
    /// full post-save settings value.
    pub fn subscribe<F>(&self, signal: SettingsSignal, listener: F) -> Result<ListenerId, StoreError>
    where
        F: Fn(UserSettings) + Send + Sync + 'static,
    {
        let mut emitter = self
            .emitter
            .lock()
            .map_err(|_| StoreError::LockPoisoned("subscribe"))?;

        let id = emitter.on(signal.name(), move |payload: String| {
            if let Ok(settings) = serde_json::from_str::<UserSettings>(&payload) {
                listener(settings);
            }
        });
        Ok(ListenerId(id))
    }

    /// Remove a listener. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: &ListenerId) -> Result<(), StoreError> {
        let mut emitter = self
            .emitter
            .lock()
            .map_err(|_| StoreError::LockPoisoned("unsubscribe"))?;
        emitter.remove_listener(&id.0);
        Ok(())
    }

    /// Emit one signal carrying the full settings value.
    pub fn publish(
        &self,
        signal: SettingsSignal,
        settings: &UserSettings,
    ) -> Result<(), StoreError> {
        let payload = serde_json::to_string(settings)?;
        let mut emitter = self
            .emitter
            .lock()
            .map_err(|_| StoreError::LockPoisoned("publish"))?;

        debug!(signal = signal.name(), "broadcasting settings");
        emitter.emit(signal.name(), payload);
        Ok(())
    }

    /// Emit both save signals, in the order `Changed` then `Updated`.
    /// Listeners across the two signals see the same post-save value;
    /// no ordering is guaranteed between individual listeners.
    pub fn publish_saved(&self, settings: &UserSettings) -> Result<(), StoreError> {
        self.publish(SettingsSignal::Changed, settings)?;
        self.publish(SettingsSignal::Updated, settings)
    }
}
