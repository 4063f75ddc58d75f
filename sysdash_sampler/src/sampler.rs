//! One sampling round: run every metric query and bundle what succeeded.

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::Local;
use tracing::{debug, warn};

use crate::error::SampleResult;
use crate::metrics::DEFAULT_ROOT;
use crate::types::{
    CpuStats, DiskStats, HostInfo, LoadAverage, MemoryStats, MetricSnapshot, NetworkStats,
    ProcessStats,
};

/// Default observation window for CPU utilisation.
pub const DEFAULT_CPU_WINDOW: Duration = Duration::from_secs(1);

/// Independent, fallible metric queries. Implementations may block.
pub trait MetricSource: Send {
    /// Utilisation measured over `window`; expected to block for that long.
    fn cpu(&mut self, window: Duration) -> SampleResult<CpuStats>;
    fn memory(&mut self) -> SampleResult<MemoryStats>;
    fn disk(&mut self, mount: &Path) -> SampleResult<DiskStats>;
    fn networks(&mut self) -> SampleResult<Vec<NetworkStats>>;
    fn load(&mut self) -> SampleResult<LoadAverage>;
    fn processes(&mut self) -> SampleResult<Vec<ProcessStats>>;
    fn host(&mut self) -> SampleResult<HostInfo>;
}

pub struct Sampler {
    source: Box<dyn MetricSource>,
    cpu_window: Duration,
    root: PathBuf,
}

impl Sampler {
    pub fn new(source: impl MetricSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            cpu_window: DEFAULT_CPU_WINDOW,
            root: PathBuf::from(DEFAULT_ROOT),
        }
    }

    pub fn with_cpu_window(mut self, window: Duration) -> Self {
        self.cpu_window = window;
        self
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// One-shot host query. A failure yields an empty placeholder record.
    pub fn host(&mut self) -> HostInfo {
        self.source.host().unwrap_or_else(|e| {
            warn!(error = %e, "host info unavailable, using placeholder");
            HostInfo::default()
        })
    }

    /// Run one round. Never fails: a query that errors is absent from the snapshot.
    pub fn sample(&mut self) -> MetricSnapshot {
        let cpu = present("cpu", self.source.cpu(self.cpu_window));
        let memory = present("memory", self.source.memory());
        let disk = present("disk", self.source.disk(&self.root));
        let network = present("network", self.source.networks()).unwrap_or_default();
        let load = present("load", self.source.load());
        let processes = present("processes", self.source.processes()).unwrap_or_default();

        MetricSnapshot {
            cpu,
            memory,
            disk,
            network,
            load,
            processes,
            taken_at: Local::now(),
        }
    }
}

fn present<T>(query: &'static str, res: SampleResult<T>) -> Option<T> {
    match res {
        Ok(v) => Some(v),
        Err(e) => {
            debug!(query, error = %e, "metric query failed");
            None
        }
    }
}
