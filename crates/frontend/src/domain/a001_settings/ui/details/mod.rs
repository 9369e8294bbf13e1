//! Settings entry panel (credential + endpoint URL)

mod view;

pub use view::SettingsPanel;
