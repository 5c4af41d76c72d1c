//! Error types for the configurator core and its configuration layer.
//!
//! Invalid references (unknown style ids, out-of-range zone or page indices)
//! are not errors: the engine ignores them. Only color values that could not
//! have come from the palette are rejected.

use thiserror::Error;

/// A color value was refused by the engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Well-formed color that is not one of the palette's entries
    #[error("color {color} is not in the palette")]
    OffPalette { color: String },

    /// Input that is not a `#RRGGBB` value
    #[error("invalid color '{input}': expected #RRGGBB")]
    MalformedColor { input: String },
}

/// Error loading or validating the application configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Extraction failed (bad TOML, wrong types, bad environment values)
    #[error("configuration error: {0}")]
    Figment(#[from] Box<figment::Error>),

    /// Palette pages must hold at least one swatch
    #[error("palette page size must be at least 1")]
    InvalidPageSize,

    /// IO error reading/writing a config file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML serialization error
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        Self::Figment(Box::new(e))
    }
}
