//! Host configuration from environment variables.

use std::time::Duration;

use crate::core::RowAddressTable;

pub const FRAME_MS_VAR: &str = "RAYMAZE_FRAME_MS";
pub const COLOR_VAR: &str = "RAYMAZE_COLOR";
pub const LOG_PATH_VAR: &str = "RAYMAZE_LOG_PATH";
pub const LINEAR_SCREEN_VAR: &str = "RAYMAZE_LINEAR_SCREEN";

const DEFAULT_FRAME_MS: u64 = 40;

/// Terminal host configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermConfig {
    /// Virtual frame interval in milliseconds.
    pub frame_ms: u64,
    /// Colour cells by the attribute overlay.
    pub color: bool,
    /// Write tracing output to this file.
    pub log_path: Option<String>,
    /// Lay out screen memory linearly instead of interleaved.
    pub linear_screen: bool,
}

impl Default for TermConfig {
    fn default() -> Self {
        Self {
            frame_ms: DEFAULT_FRAME_MS,
            color: true,
            log_path: None,
            linear_screen: false,
        }
    }
}

impl TermConfig {
    /// Create from environment variables; unset or invalid values fall back
    /// to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`TermConfig::from_env`] with an injected variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let frame_ms = match lookup(FRAME_MS_VAR) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => ms,
                _ => {
                    tracing::warn!(var = FRAME_MS_VAR, value = %raw, "invalid frame interval, using default");
                    defaults.frame_ms
                }
            },
            None => defaults.frame_ms,
        };

        let color = lookup(COLOR_VAR)
            .map(|raw| parse_flag(COLOR_VAR, &raw, defaults.color))
            .unwrap_or(defaults.color);

        let linear_screen = lookup(LINEAR_SCREEN_VAR)
            .map(|raw| parse_flag(LINEAR_SCREEN_VAR, &raw, defaults.linear_screen))
            .unwrap_or(defaults.linear_screen);

        let log_path = lookup(LOG_PATH_VAR)
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            frame_ms,
            color,
            log_path,
            linear_screen,
        }
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }

    /// Screen memory layout selected by `linear_screen`.
    pub fn row_table(&self) -> RowAddressTable {
        if self.linear_screen {
            RowAddressTable::linear()
        } else {
            RowAddressTable::interleaved()
        }
    }
}

fn parse_flag(var: &str, raw: &str, default: bool) -> bool {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => true,
        "0" | "false" | "off" | "no" => false,
        _ => {
            tracing::warn!(var, value = raw, "invalid flag, using default");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> TermConfig {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        TermConfig::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(config(&[]), TermConfig::default());
        assert_eq!(TermConfig::default().frame_interval(), Duration::from_millis(40));
    }

    #[test]
    fn reads_every_variable() {
        let cfg = config(&[
            (FRAME_MS_VAR, "20"),
            (COLOR_VAR, "false"),
            (LOG_PATH_VAR, " /tmp/raymaze.log "),
            (LINEAR_SCREEN_VAR, "1"),
        ]);
        assert_eq!(cfg.frame_ms, 20);
        assert!(!cfg.color);
        assert_eq!(cfg.log_path.as_deref(), Some("/tmp/raymaze.log"));
        assert_eq!(cfg.row_table(), RowAddressTable::linear());
    }

    #[test]
    fn invalid_values_fall_back() {
        let cfg = config(&[(FRAME_MS_VAR, "0"), (COLOR_VAR, "maybe"), (LOG_PATH_VAR, "  ")]);
        assert_eq!(cfg.frame_ms, DEFAULT_FRAME_MS);
        assert!(cfg.color);
        assert_eq!(cfg.log_path, None);
        assert_eq!(cfg.row_table(), RowAddressTable::interleaved());
    }
}
