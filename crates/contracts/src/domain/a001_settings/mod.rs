pub mod aggregate;
pub mod store;

pub use aggregate::{Settings, SettingsStatus, UiMode};
pub use store::{KeyValueStorage, MemoryStorage, SettingsKeys, SettingsStore};
