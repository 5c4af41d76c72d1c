//! Layered configuration: defaults, TOML file, environment, CLI flags.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, DEFAULT_PAGE_SIZE, GearType};
use crate::engine::Session;
pub use crate::error::ConfigError;

/// Environment variable prefix; nested keys are separated by `__`.
pub const ENV_PREFIX: &str = "GEARSMITH_";

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub session: SessionConfig,
    pub palette: PaletteConfig,
    pub logging: LoggingConfig,
}

/// Starting state of a session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Gear type shown first
    pub gear: GearType,
    /// Select the first style of the initial gear type at start
    pub preselect_first_style: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Swatches per editor page
    pub page_size: usize,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// trace, debug, info, warn or error
    pub level: String,
    pub file: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: PathBuf::from("gearsmith.log"),
        }
    }
}

/// Values given explicitly on the command line.
///
/// Only set fields are serialized, so merging this over the other layers
/// leaves unset keys alone.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "SessionOverrides::is_empty")]
    pub session: SessionOverrides,
    #[serde(skip_serializing_if = "PaletteOverrides::is_empty")]
    pub palette: PaletteOverrides,
    #[serde(skip_serializing_if = "LoggingOverrides::is_empty")]
    pub logging: LoggingOverrides,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SessionOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gear: Option<GearType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preselect_first_style: Option<bool>,
}

impl SessionOverrides {
    fn is_empty(&self) -> bool {
        self.gear.is_none() && self.preselect_first_style.is_none()
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PaletteOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<usize>,
}

impl PaletteOverrides {
    fn is_empty(&self) -> bool {
        self.page_size.is_none()
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LoggingOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl LoggingOverrides {
    fn is_empty(&self) -> bool {
        self.level.is_none() && self.file.is_none()
    }
}

impl AppConfig {
    /// Defaults, then the TOML file (if any), then `GEARSMITH_*` variables.
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load every layer, apply CLI overrides, and validate.
    pub fn load(path: Option<&Path>, overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        if let Some(path) = path
            && !path.exists()
        {
            return Err(ConfigError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("config file not found: {}", path.display()),
            )));
        }

        let config: Self = Self::figment(path)
            .merge(Serialized::defaults(overrides))
            .extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML document over the defaults (no environment).
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::string(source))
            .extract()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.palette.page_size == 0 {
            return Err(ConfigError::InvalidPageSize);
        }
        Ok(())
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Catalog with the configured page size.
    pub fn catalog(&self) -> Catalog {
        Catalog::standard().with_page_size(self.palette.page_size)
    }

    /// Start a session from this configuration.
    pub fn start_session(&self) -> Session {
        Session::start(
            self.catalog(),
            self.session.gear,
            self.session.preselect_first_style,
        )
    }
}
