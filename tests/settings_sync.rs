//! Settings persistence plus change propagation: independently mounted
//! surfaces observing one settings object through the broadcast.

use std::sync::mpsc;
use std::time::Duration;

use dashstore::domain::UserSettings;
use dashstore::{FileStore, SettingsBus, SettingsSignal, SettingsStore};

/// Route store logs (`RUST_LOG=dashstore=debug`) to the test harness.
/// `try_init` because the tests share one process.
fn trace_init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_test_writer()
        .try_init();
}

#[test]
fn save_notifies_every_surface_with_the_post_save_value() {
    trace_init();
    let dir = tempfile::tempdir().unwrap();
    let store = SettingsStore::new(FileStore::new(dir.path()));
    let bus = SettingsBus::new();

    // Header listens for "updated", the settings form for "changed".
    let (header_tx, header_rx) = mpsc::channel();
    bus.subscribe(SettingsSignal::Updated, move |settings: UserSettings| {
        header_tx.send(settings.profile.name).unwrap();
    })
    .unwrap();

    let (form_tx, form_rx) = mpsc::channel();
    bus.subscribe(SettingsSignal::Changed, move |settings: UserSettings| {
        form_tx.send(settings.profile.company).unwrap();
    })
    .unwrap();

    let mut settings = store.load().unwrap();
    settings.profile.name = "Grace Hopper".to_string();
    settings.profile.company = "Navy".to_string();
    store.save_and_notify(&settings, &bus).unwrap();

    let timeout = Duration::from_secs(1);
    assert_eq!(header_rx.recv_timeout(timeout).unwrap(), "Grace Hopper");
    assert_eq!(form_rx.recv_timeout(timeout).unwrap(), "Navy");

    // A listener re-reading the store also sees the post-save value.
    assert_eq!(store.load().unwrap().profile.name, "Grace Hopper");
}

#[test]
fn unsubscribed_surface_is_not_notified() {
    trace_init();
    let dir = tempfile::tempdir().unwrap();
    let store = SettingsStore::new(FileStore::new(dir.path()));
    let bus = SettingsBus::new();

    let (tx, rx) = mpsc::channel();
    let id = bus
        .subscribe(SettingsSignal::Updated, move |_| {
            tx.send(()).unwrap();
        })
        .unwrap();
    bus.unsubscribe(&id).unwrap();

    store
        .save_and_notify(&UserSettings::default(), &bus)
        .unwrap();
    assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());
}

#[test]
fn settings_survive_a_new_session_over_the_same_directory() {
    trace_init();
    let dir = tempfile::tempdir().unwrap();

    {
        let store = SettingsStore::new(FileStore::new(dir.path()));
        let mut settings = UserSettings::default();
        settings.preferences.currency = "EUR".to_string();
        store.save(&settings).unwrap();
    }

    // A fresh store over the same directory is a new "session".
    let store = SettingsStore::new(FileStore::new(dir.path()));
    assert_eq!(store.load().unwrap().preferences.currency, "EUR");
}
