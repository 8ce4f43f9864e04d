//! Builder configuration.

use crate::error::StmtResult;
use serde::Deserialize;

/// What a builder does when a statement starter of a different kind is
/// issued after another one (e.g. `update` after `select`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestatementPolicy {
    /// Overwrite the statement kind; previously collected tables are kept.
    #[default]
    Overwrite,
    /// Ignore the conflicting starter and report it from `build()`.
    Reject,
}

/// Configuration for [`SqlBuilder`](crate::SqlBuilder).
///
/// Can be constructed with the `with_*` methods or loaded from TOML:
///
/// ```toml
/// restatement = "reject"
/// log_sql = true
/// max_log_length = 500
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Handling of a second statement starter of a different kind.
    pub restatement: RestatementPolicy,
    /// Whether `build()` emits the rendered SQL via `tracing`.
    pub log_sql: bool,
    /// Truncate logged SQL (in bytes). `None` means no truncation.
    pub max_log_length: Option<usize>,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            restatement: RestatementPolicy::Overwrite,
            log_sql: false,
            max_log_length: Some(200),
        }
    }
}

impl BuilderConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from TOML. Missing keys take their defaults.
    pub fn from_toml_str(raw: &str) -> StmtResult<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Set the restatement policy.
    pub fn with_restatement(mut self, policy: RestatementPolicy) -> Self {
        self.restatement = policy;
        self
    }

    /// Log the rendered SQL on `build()`.
    pub fn with_sql_logging(mut self) -> Self {
        self.log_sql = true;
        self
    }

    /// Set maximum logged SQL length.
    pub fn with_max_log_length(mut self, len: usize) -> Self {
        self.max_log_length = Some(len);
        self
    }

    /// Disable truncation of logged SQL.
    pub fn no_truncate(mut self) -> Self {
        self.max_log_length = None;
        self
    }
}
