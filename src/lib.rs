mod animate;
mod broadcast;
mod error;
mod page;
mod record;
mod storage;
mod store;

pub mod domain;
pub mod metrics;
pub mod ops;
pub mod query;
pub mod report;

pub use animate::CounterAnimation;
pub use broadcast::{ListenerId, SettingsBus, SettingsSignal};
pub use error::StoreError;
pub use page::{paginate, ListPage, ListView, PageWindow};
pub use query::{Facet, Query, Queryable};
pub use record::{Record, Seed};
pub use storage::{FileStore, MemoryStore, SlotStore};
pub use store::{CollectionStore, SettingsStore, SETTINGS_SLOT};
