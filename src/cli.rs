//! CLI argument parsing.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::catalog::GearType;
use crate::config::{
    ConfigOverrides, LoggingOverrides, PaletteOverrides, SessionOverrides,
};

/// CLI-compatible gear type enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GearArg {
    /// Boxing gloves (body, cuff, stripe)
    Gloves,
    /// Fight shorts (body, waist, stripe)
    Shorts,
    /// Ring boots (body, trim, accent)
    Boots,
}

impl From<GearArg> for GearType {
    fn from(arg: GearArg) -> Self {
        match arg {
            GearArg::Gloves => GearType::Gloves,
            GearArg::Shorts => GearType::Shorts,
            GearArg::Boots => GearType::Boots,
        }
    }
}

/// Output format for script runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// YAML (default)
    #[default]
    Yaml,
    /// Pretty-printed JSON
    Json,
}

/// Gear colorway configurator.
///
/// Starts the interactive terminal UI unless --script is given.
#[derive(Parser, Debug)]
#[command(name = "gearsmith")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Gear type shown first
    #[arg(short, long, value_enum)]
    pub gear: Option<GearArg>,

    /// Swatches per palette page in the editor
    #[arg(long, value_name = "N")]
    pub page_size: Option<usize>,

    /// Select the first style of the initial gear type at start
    #[arg(long)]
    pub preselect: bool,

    /// Load configuration from TOML file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Run an action script instead of the TUI ("-" reads stdin) and print the final view
    #[arg(long, value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Output format for --script
    #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,

    /// Log file path (default: gearsmith.log)
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error (default: info)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Generate shell completions for the specified shell
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,
}

impl Cli {
    /// Convert flags that were actually given into config overrides.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            session: SessionOverrides {
                gear: self.gear.map(Into::into),
                preselect_first_style: self.preselect.then_some(true),
            },
            palette: PaletteOverrides {
                page_size: self.page_size,
            },
            logging: LoggingOverrides {
                level: self.log_level.clone(),
                file: self.log_file.clone(),
            },
        }
    }

    /// Whether the script should be read from stdin.
    pub fn script_from_stdin(&self) -> bool {
        self.script.as_deref().is_some_and(|p| p.as_os_str() == "-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_flags_produce_no_overrides() {
        let cli = Cli::parse_from(["gearsmith"]);
        let overrides = cli.to_config_overrides();
        assert!(overrides.session.gear.is_none());
        assert!(overrides.session.preselect_first_style.is_none());
        assert!(overrides.palette.page_size.is_none());
    }

    #[test]
    fn flags_map_to_overrides() {
        let cli = Cli::parse_from(["gearsmith", "--gear", "boots", "--page-size", "4", "--preselect"]);
        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.session.gear, Some(GearType::Boots));
        assert_eq!(overrides.session.preselect_first_style, Some(true));
        assert_eq!(overrides.palette.page_size, Some(4));
    }
}
