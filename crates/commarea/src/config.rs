//! Transaction gateway connection settings.

use std::fmt;
use std::path::Path;

use commarea_encoding::{CodePage, CodePageRegistry, EncodingError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors loading a [`GatewayConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid gateway configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    CodePage(#[from] EncodingError),
}

/// Where and as whom transactions are run.
///
/// ```toml
/// url = "tcp://cics.example.com"
/// port = 2006
/// region = "CICSA"
/// user = "CICSUSER"
/// password = "secret"
/// code_page = "IBM-037"
/// ```
#[derive(Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Gateway address, e.g. `tcp://host`.
    pub url: String,
    /// Gateway port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Target region (APPLID).
    pub region: String,
    pub user: String,
    pub password: String,
    /// Code page of the region, by name or CCSID.
    #[serde(default = "default_code_page")]
    pub code_page: String,
}

fn default_port() -> u16 {
    2006
}

fn default_code_page() -> String {
    "CP1047".to_string()
}

impl GatewayConfig {
    pub fn new(
        url: impl Into<String>,
        port: u16,
        region: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            port,
            region: region.into(),
            user: user.into(),
            password: password.into(),
            code_page: default_code_page(),
        }
    }

    /// Parse a configuration from TOML text.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.code_page()?;
        Ok(config)
    }

    /// Load a configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Resolve [`code_page`](Self::code_page) through the registry.
    pub fn code_page(&self) -> Result<&'static CodePage, ConfigError> {
        Ok(CodePageRegistry::by_name(&self.code_page)?)
    }
}

impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("url", &self.url)
            .field("port", &self.port)
            .field("region", &self.region)
            .field("user", &self.user)
            .field("password", &"********")
            .field("code_page", &self.code_page)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GatewayConfig::from_toml_str(
            r#"
            url = "tcp://host"
            region = "CICS1"
            user = "CICS1"
            password = "CICS1"
            "#,
        )
        .unwrap();
        assert_eq!(config.port, 2006);
        assert_eq!(config.code_page, "CP1047");
        assert_eq!(config.code_page().unwrap().ccsid, 1047);
    }

    #[test]
    fn test_code_page_by_alias() {
        let mut config = GatewayConfig::new("tcp://host", 35500, "CICS1", "U", "P");
        config.code_page = "IBM-037".to_string();
        assert_eq!(config.code_page().unwrap().name, "CP037");
    }

    #[test]
    fn test_unknown_code_page_is_rejected() {
        let err = GatewayConfig::from_toml_str(
            r#"
            url = "tcp://host"
            region = "R"
            user = "U"
            password = "P"
            code_page = "CP9999"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::CodePage(_)));
    }

    #[test]
    fn test_missing_key_is_parse_error() {
        let err = GatewayConfig::from_toml_str("url = \"tcp://host\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = GatewayConfig::from_file("/nonexistent/gateway.toml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/gateway.toml"));
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = GatewayConfig::new("tcp://host", 2006, "R", "U", "hunter2");
        let text = format!("{config:?}");
        assert!(!text.contains("hunter2"));
        assert!(text.contains("********"));
    }
}
