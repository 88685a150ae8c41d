//! Run configuration.
//!
//! One validation run operates on a single host: its name, the platform
//! family its raw output should be parsed as, the groups contributing to its
//! desired state and an optional report directory. Environment variables
//! (`NETVALIDATE_REPORT_DIR`) can supply defaults the caller did not set.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::platform::PlatformFamily;

/// Configuration for one host validation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateConfig {
    /// Host name, used for desired-state lookup and report file naming.
    pub host: String,

    /// Platform family the raw command output belongs to.
    pub platform: PlatformFamily,

    /// Group names contributing desired state, lowest precedence first.
    #[serde(default)]
    pub groups: Vec<String>,

    /// Directory to persist the compliance report in. `None` keeps the
    /// report in memory only.
    #[serde(default)]
    pub report_dir: Option<PathBuf>,
}

impl ValidateConfig {
    /// Creates a configuration with no groups and no report directory.
    pub fn new(host: impl Into<String>, platform: PlatformFamily) -> Self {
        ValidateConfig {
            host: host.into(),
            platform,
            groups: Vec::new(),
            report_dir: None,
        }
    }

    /// Sets the desired-state groups.
    pub fn with_groups(mut self, groups: Vec<String>) -> Self {
        self.groups = groups;
        self
    }

    /// Sets the report directory.
    pub fn with_report_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.report_dir = Some(dir.into());
        self
    }

    /// Applies environment variable overrides for unset fields.
    pub fn apply_env_overrides(&mut self) {
        if self.report_dir.is_none() {
            if let Ok(dir) = std::env::var("NETVALIDATE_REPORT_DIR") {
                self.report_dir = Some(PathBuf::from(dir));
            }
        }
    }
}
