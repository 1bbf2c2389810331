//! Runtime configuration: which subcommands get colorized

use crate::filter::Mode;
use std::env;
use std::ffi::OsString;

/// Subcommands whose output is per-file status lines
pub const COLORIZED_SUBCOMMANDS: &[&str] = &["status", "stat", "st", "add", "remove"];

/// Comma-separated extra subcommands to colorize (e.g. `diff,di`)
pub const SUBCOMMANDS_VAR: &str = "SVN_COLOR_SUBCOMMANDS";
/// <https://no-color.org>
pub const NO_COLOR_VAR: &str = "NO_COLOR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub subcommands: Vec<String>,
    pub no_color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            subcommands: COLORIZED_SUBCOMMANDS
                .iter()
                .map(|&s| s.to_string())
                .collect(),
            no_color: false,
        }
    }
}

impl Config {
    /// Load from the process environment
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var_os(key))
    }

    /// Build from an arbitrary variable source
    #[must_use]
    pub fn from_vars(var: impl Fn(&str) -> Option<OsString>) -> Self {
        let mut config = Self::default();

        if let Some(extra) = var(SUBCOMMANDS_VAR).and_then(|v| v.into_string().ok()) {
            for name in extra.split(',').map(str::trim).filter(|s| !s.is_empty()) {
                if !config.subcommands.iter().any(|s| s == name) {
                    config.subcommands.push(name.to_string());
                }
            }
        }

        // Any non-empty value counts, UTF-8 or not
        config.no_color = var(NO_COLOR_VAR).is_some_and(|v| !v.is_empty());
        config
    }

    #[must_use]
    pub fn mode_for(&self, subcommand: &str) -> Mode {
        if !self.no_color && self.subcommands.iter().any(|s| s == subcommand) {
            Mode::Colorize
        } else {
            Mode::Passthrough
        }
    }
}
