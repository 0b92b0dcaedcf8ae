//! Configuration management for the phone directory.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file is read if present, without printing to stdout (which both the
//! menu and the MCP transport use).

use crate::error::{ConfigError, ConfigResult};
use crate::undo::DEFAULT_UNDO_DEPTH;
use std::env;
use std::fmt;
use std::str::FromStr;

/// Which front end drives the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    /// Interactive numbered menu on stdin/stdout
    #[default]
    Menu,

    /// MCP server over stdio
    Mcp,
}

impl FromStr for RunMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "menu" => Ok(Self::Menu),
            "mcp" => Ok(Self::Mcp),
            other => Err(format!("Must be 'menu' or 'mcp', got: {}", other)),
        }
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Menu => write!(f, "menu"),
            Self::Mcp => write!(f, "mcp"),
        }
    }
}

/// Configuration for the phone directory.
#[derive(Debug, Clone)]
pub struct Config {
    /// Front end to run (default: menu)
    pub mode: RunMode,

    /// Maximum number of actions kept for undo (default: 64)
    pub undo_depth: usize,

    /// Whether the menu uses colored output (default: true)
    pub color: bool,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `DIRECTORY_MODE`: `menu` or `mcp` (default: menu)
    /// - `DIRECTORY_UNDO_DEPTH`: actions kept for undo, at least 1 (default: 64)
    /// - `DIRECTORY_COLOR`: `true`/`false` (default: true)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let mode = match env::var("DIRECTORY_MODE") {
            Ok(val) => val.parse::<RunMode>().map_err(|reason| ConfigError::InvalidValue {
                var: "DIRECTORY_MODE".to_string(),
                reason,
            })?,
            Err(_) => RunMode::default(),
        };

        let undo_depth = Self::parse_env_usize("DIRECTORY_UNDO_DEPTH", DEFAULT_UNDO_DEPTH)?;
        if undo_depth == 0 {
            return Err(ConfigError::InvalidValue {
                var: "DIRECTORY_UNDO_DEPTH".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let color = Self::parse_env_bool("DIRECTORY_COLOR", true)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            mode,
            undo_depth,
            color,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as a boolean flag with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            mode: RunMode::Menu,
            undo_depth: DEFAULT_UNDO_DEPTH,
            color: true,
            log_level: "error".to_string(),
        }
    }
}
