use contracts::domain::a001_settings::SettingsKeys;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub storage: StorageConfig,
    pub request: RequestConfig,
    pub render: RenderConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StorageConfig {
    pub credential_key: String,
    pub endpoint_url_key: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RequestConfig {
    /// Percent-encode the credential in `?key=`
    pub encode_credential: bool,
    /// 0 disables the timeout
    pub timeout_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RenderConfig {
    /// CommonMark for assistant messages; escape-only otherwise
    pub markdown: bool,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    pub level: String,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[storage]
credential_key = "credential"
endpoint_url_key = "endpointUrl"

[request]
encode_credential = false
timeout_ms = 0

[render]
markdown = true

[logging]
level = "debug"
"#;

impl Default for AppConfig {
    fn default() -> Self {
        let storage = SettingsKeys::default();
        Self {
            storage: StorageConfig {
                credential_key: storage.credential,
                endpoint_url_key: storage.endpoint_url,
            },
            request: RequestConfig {
                encode_credential: false,
                timeout_ms: 0,
            },
            render: RenderConfig { markdown: true },
            logging: LoggingConfig {
                level: "debug".to_string(),
            },
        }
    }
}

impl AppConfig {
    pub fn settings_keys(&self) -> SettingsKeys {
        SettingsKeys {
            credential: self.storage.credential_key.clone(),
            endpoint_url: self.storage.endpoint_url_key.clone(),
        }
    }

    pub fn timeout_ms(&self) -> Option<u32> {
        match self.request.timeout_ms {
            0 => None,
            ms => Some(ms),
        }
    }

    /// Unknown names fall back to `Debug`
    pub fn log_level(&self) -> log::Level {
        self.logging.level.parse().unwrap_or(log::Level::Debug)
    }
}

/// Parse a TOML configuration document
pub fn parse_config(contents: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str(contents)
}

/// Load the embedded configuration, falling back to the built-in defaults
pub fn load_config() -> AppConfig {
    match parse_config(DEFAULT_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Embedded config is invalid, using defaults: {}", e);
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.settings_keys(), SettingsKeys::default());
        assert_eq!(config.timeout_ms(), None);
        assert_eq!(config.log_level(), log::Level::Debug);
    }

    #[test]
    fn test_overrides() {
        let config = parse_config(
            r#"
            [storage]
            credential_key = "gApiKey"
            endpoint_url_key = "gModelUrl"
            [request]
            encode_credential = true
            timeout_ms = 15000
            [render]
            markdown = false
            [logging]
            level = "warn"
            "#,
        )
        .unwrap();
        assert_eq!(config.settings_keys().credential, "gApiKey");
        assert_eq!(config.timeout_ms(), Some(15000));
        assert!(config.request.encode_credential);
        assert_eq!(config.log_level(), log::Level::Warn);
    }

    #[test]
    fn test_missing_section_is_error() {
        assert!(parse_config("[render]\nmarkdown = true\n").is_err());
    }
}
