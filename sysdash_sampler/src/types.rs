//! Snapshot types produced by one sampling round.
//! Keep this module minimal and stable: the UI reads these fields directly.

use chrono::{DateTime, Local};

#[derive(Debug, Clone, PartialEq)]
pub struct CpuStats {
    pub model: String,
    pub core_count: usize,
    pub clock_mhz: u64,
    pub usage_percent: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemoryStats {
    pub total_bytes: u64,
    pub available_bytes: u64,
    pub used_bytes: u64,
    pub used_percent: f64,
    // /proc/meminfo only; absent on other platforms
    pub cached_bytes: Option<u64>,
    pub buffers_bytes: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiskStats {
    pub mount_path: String,
    pub filesystem: String,
    pub total_bytes: u64,
    pub free_bytes: u64,
    pub used_bytes: u64,
    pub used_percent: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NetworkStats {
    pub interface_name: String,
    // cumulative counters as reported by the OS
    pub bytes_sent: u64,
    pub bytes_recv: u64,
    pub packets_sent: u64,
    pub packets_recv: u64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadAverage {
    pub load1: f64,
    pub load5: f64,
    pub load15: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProcessStats {
    pub name: String,
    pub pid: u32,
    pub cpu_percent: f32,
    pub resident_memory_bytes: u64,
}

/// Host identity. Queried once at startup and never refreshed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HostInfo {
    pub hostname: String,
    pub platform: String,
    pub platform_version: String,
    pub uptime_seconds: u64,
}

/// Everything one sampling round managed to collect. Absent fields are queries
/// that failed during that round.
#[derive(Debug, Clone)]
pub struct MetricSnapshot {
    pub cpu: Option<CpuStats>,
    pub memory: Option<MemoryStats>,
    pub disk: Option<DiskStats>,
    pub network: Vec<NetworkStats>,
    pub load: Option<LoadAverage>,
    /// Full list in collection order. Callers truncate for display.
    pub processes: Vec<ProcessStats>,
    pub taken_at: DateTime<Local>,
}

/// Percentage of `part` in `total`, 0 when `total` is 0.
pub fn percent_of(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}
