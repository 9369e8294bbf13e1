use serde::{Deserialize, Serialize};

/// Credential and endpoint URL. Either both are present or neither is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    credential: Option<String>,
    endpoint_url: Option<String>,
}

impl Settings {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn populated(credential: impl Into<String>, endpoint_url: impl Into<String>) -> Self {
        Self {
            credential: Some(credential.into()),
            endpoint_url: Some(endpoint_url.into()),
        }
    }

    pub fn credential(&self) -> Option<&str> {
        self.credential.as_deref()
    }

    pub fn endpoint_url(&self) -> Option<&str> {
        self.endpoint_url.as_deref()
    }

    /// `(credential, endpoint_url)` when fully populated
    pub fn pair(&self) -> Option<(&str, &str)> {
        Some((self.credential()?, self.endpoint_url()?))
    }

    pub fn is_populated(&self) -> bool {
        self.pair().is_some()
    }
}

/// Which view is visible. Derived from `Settings`, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiMode {
    SetupRequired,
    ChatActive,
}

impl UiMode {
    pub fn from_settings(settings: &Settings) -> Self {
        if settings.is_populated() {
            UiMode::ChatActive
        } else {
            UiMode::SetupRequired
        }
    }
}

/// Status line of the settings view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettingsStatus {
    Saved,
    EnterSettings,
    Changing,
}

impl SettingsStatus {
    pub fn from_settings(settings: &Settings) -> Self {
        if settings.is_populated() {
            SettingsStatus::Saved
        } else {
            SettingsStatus::EnterSettings
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            SettingsStatus::Saved => "Key & URL saved.",
            SettingsStatus::EnterSettings => "Enter Key & URL.",
            SettingsStatus::Changing => "Change Key & URL.",
        }
    }
}
