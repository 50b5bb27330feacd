use serde::Deserialize;

/// Runtime settings of the dashboard.
///
/// There is no config file next to a wasm bundle, so the document below is
/// compiled in and parsed at startup. The simulated login and sourcing
/// delays are fixed constants, not settings.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub auth: AuthConfig,
    pub toast: ToastConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AuthConfig {
    /// localStorage key holding the admin flag
    pub storage_key: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ToastConfig {
    pub timeout_ms: u32,
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[auth]
storage_key = "isAdminAuthenticated"

[toast]
timeout_ms = 4000
"#;

impl AppConfig {
    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(contents)?;
        if config.auth.storage_key.trim().is_empty() {
            anyhow::bail!("auth.storage_key must not be empty");
        }
        Ok(config)
    }

    /// Parse the embedded default document
    pub fn load_embedded() -> anyhow::Result<Self> {
        Self::from_toml_str(DEFAULT_CONFIG)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            auth: AuthConfig {
                storage_key: crate::system::auth::ADMIN_FLAG_KEY.to_string(),
            },
            toast: ToastConfig { timeout_ms: 4000 },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = AppConfig::load_embedded();
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.auth.storage_key, "isAdminAuthenticated");
        assert_eq!(config.toast.timeout_ms, 4000);
    }

    #[test]
    fn test_embedded_matches_default() {
        assert_eq!(AppConfig::load_embedded().unwrap(), AppConfig::default());
    }

    #[test]
    fn test_rejects_blank_storage_key() {
        let doc = DEFAULT_CONFIG.replace("\"isAdminAuthenticated\"", "\"  \"");
        assert!(AppConfig::from_toml_str(&doc).is_err());
    }

    #[test]
    fn test_rejects_missing_section() {
        let doc = "[auth]\nstorage_key = \"k\"\n";
        assert!(AppConfig::from_toml_str(doc).is_err());
    }

    #[test]
    fn test_delays_are_not_settings() {
        let doc = format!("{}\n[sourcing]\ndelay_ms = 10\n", DEFAULT_CONFIG);
        let config = AppConfig::from_toml_str(&doc).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(crate::domain::a001_sourced_product::SOURCING_DELAY_MS, 3000);
        assert_eq!(crate::system::auth::LOGIN_DELAY_MS, 1000);
    }
}
