//! Generation options from a JSON config file and CLI overrides.
//!
//! Keys are camelCase:
//!
//! ```json
//! { "tableName": "Calendar", "fromYear": 2019, "toYear": 2030 }
//! ```
//!
//! Precedence is CLI flag, then config file, then built-in default.
//! `fromYear` and `toYear` have no default.

use std::fs;
use std::path::{Path, PathBuf};

use caldim_sql::{DEFAULT_OUTPUT_FILE, DEFAULT_TABLE_NAME, StatementLayout};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file: {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A required year was given neither on the command line nor in the config file.
    #[error("missing {field}: pass --{flag} or set \"{field}\" in the config file")]
    MissingYear {
        field: &'static str,
        flag: &'static str,
    },
}

/// Contents of a config file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CalendarConfig {
    #[serde(default)]
    pub table_name: Option<String>,
    #[serde(default)]
    pub from_year: Option<i32>,
    #[serde(default)]
    pub to_year: Option<i32>,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub layout: Option<StatementLayout>,
}

impl CalendarConfig {
    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Layer `overrides` on top of this config and fill in defaults.
    pub fn resolve(self, overrides: CalendarConfig) -> Result<GenerateOptions, ConfigError> {
        let from_year = overrides
            .from_year
            .or(self.from_year)
            .ok_or(ConfigError::MissingYear {
                field: "fromYear",
                flag: "from-year",
            })?;
        let to_year = overrides
            .to_year
            .or(self.to_year)
            .ok_or(ConfigError::MissingYear {
                field: "toYear",
                flag: "to-year",
            })?;
        Ok(GenerateOptions {
            table_name: overrides
                .table_name
                .or(self.table_name)
                .unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string()),
            from_year,
            to_year,
            output: overrides
                .output
                .or(self.output)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE)),
            layout: overrides.layout.or(self.layout).unwrap_or_default(),
        })
    }
}

/// Fully resolved options for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    pub table_name: String,
    pub from_year: i32,
    pub to_year: i32,
    pub output: PathBuf,
    pub layout: StatementLayout,
}
