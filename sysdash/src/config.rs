//! Compiled-in dashboard settings. Nothing here is read from flags, files or the environment.

use std::path::PathBuf;
use std::time::Duration;

use sysdash_sampler::{DEFAULT_CPU_WINDOW, DEFAULT_ROOT};

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Delay between the end of one sampling round and the next periodic one.
    pub refresh_interval: Duration,
    /// CPU utilisation observation window inside each round.
    pub cpu_window: Duration,
    /// Filesystem reported on the Disk tab.
    pub root_path: PathBuf,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            refresh_interval: Duration::from_secs(2),
            cpu_window: DEFAULT_CPU_WINDOW,
            root_path: PathBuf::from(DEFAULT_ROOT),
        }
    }
}
