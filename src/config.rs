//! Environment-driven configuration
//!
//! Read once per invocation. The only tunable is the commit clock, which can be
//! pinned through `GITLET_COMMIT_DATE` so that histories become reproducible.

use anyhow::Context;
use chrono::{DateTime, FixedOffset};

/// Name of the metadata directory at the repository root
pub const METADATA_DIR: &str = ".gitlet";

/// Branch created by `init`
pub const DEFAULT_BRANCH: &str = "master";

/// Message of the commit created by `init`
pub const INITIAL_COMMIT_MESSAGE: &str = "initial commit";

/// Timestamp carried by every commit whose message is the initial commit message
pub const EPOCH_TIMESTAMP: &str = "Thu Jan 1 00:00:00 1970 +0000";

/// Format used when rendering commit timestamps
pub const TIMESTAMP_FORMAT: &str = "%a %b %-d %H:%M:%S %Y %z";

const COMMIT_DATE_ENV: &str = "GITLET_COMMIT_DATE";

#[derive(Debug, Clone, Default)]
pub struct Config {
    commit_date: Option<DateTime<FixedOffset>>,
}

impl Config {
    pub fn new(commit_date: Option<DateTime<FixedOffset>>) -> Self {
        Config { commit_date }
    }

    /// Load the configuration from the process environment
    ///
    /// `GITLET_COMMIT_DATE` accepts RFC 2822 or `%Y-%m-%d %H:%M:%S %z`.
    pub fn load_from_env() -> anyhow::Result<Self> {
        let commit_date = match std::env::var(COMMIT_DATE_ENV) {
            Ok(raw) => Some(
                Self::parse_date(&raw)
                    .with_context(|| format!("{COMMIT_DATE_ENV} is not a valid date: {raw}"))?,
            ),
            Err(_) => None,
        };

        Ok(Config { commit_date })
    }

    fn parse_date(raw: &str) -> anyhow::Result<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc2822(raw)
            .or_else(|_| DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S %z"))
            .map_err(Into::into)
    }

    /// Current time as seen by new commits
    pub fn now(&self) -> DateTime<FixedOffset> {
        self.commit_date
            .unwrap_or_else(|| chrono::Local::now().fixed_offset())
    }
}
