//! Metrics collection using sysinfo (plus /proc on Linux) for sysdash.

#[cfg(target_os = "linux")]
use std::fs;
use std::path::Path;
use std::time::Duration;

use sysinfo::{Disks, Networks, ProcessRefreshKind, ProcessesToUpdate, System};

use crate::error::{SampleError, SampleResult};
use crate::sampler::MetricSource;
use crate::types::{
    percent_of, CpuStats, DiskStats, HostInfo, LoadAverage, MemoryStats, NetworkStats,
    ProcessStats,
};

/// Default filesystem whose usage the Disk tab reports.
#[cfg(windows)]
pub const DEFAULT_ROOT: &str = "C:\\";
#[cfg(not(windows))]
pub const DEFAULT_ROOT: &str = "/";

/// `MetricSource` backed by a persistent `sysinfo::System`.
///
/// The `System` handle lives across rounds so per-process CPU usage is a delta
/// since the previous round (zero on the first one).
pub struct SysinfoSource {
    sys: System,
}

impl SysinfoSource {
    pub fn new() -> Self {
        Self { sys: System::new() }
    }
}

impl Default for SysinfoSource {
    fn default() -> Self {
        Self::new()
    }
}

// sysinfo has panicked on exotic /proc layouts before; a panic only costs that query.
fn guarded<T>(what: &'static str, f: impl FnOnce() -> T) -> SampleResult<T> {
    std::panic::catch_unwind(std::panic::AssertUnwindSafe(f))
        .map_err(|_| SampleError::Panicked(what))
}

impl MetricSource for SysinfoSource {
    fn cpu(&mut self, window: Duration) -> SampleResult<CpuStats> {
        let sys = &mut self.sys;
        guarded("cpu", || sys.refresh_cpu_all())?;
        // Usage is the delta between two refreshes, so block for the whole window.
        std::thread::sleep(window.max(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL));
        guarded("cpu", || sys.refresh_cpu_usage())?;

        let first = sys.cpus().first().ok_or(SampleError::Empty("cpu"))?;
        Ok(CpuStats {
            model: first.brand().trim().to_string(),
            core_count: sys.cpus().len(),
            clock_mhz: first.frequency(),
            usage_percent: sys.global_cpu_usage(),
        })
    }

    fn memory(&mut self) -> SampleResult<MemoryStats> {
        let sys = &mut self.sys;
        guarded("memory", || sys.refresh_memory())?;

        let total = sys.total_memory();
        if total == 0 {
            return Err(SampleError::Empty("memory"));
        }
        let available = sys.available_memory();
        let used = total.saturating_sub(available);
        let (cached, buffers) = read_cache_and_buffers();

        Ok(MemoryStats {
            total_bytes: total,
            available_bytes: available,
            used_bytes: used,
            used_percent: percent_of(used, total),
            cached_bytes: cached,
            buffers_bytes: buffers,
        })
    }

    fn disk(&mut self, mount: &Path) -> SampleResult<DiskStats> {
        let disks = guarded("disk", Disks::new_with_refreshed_list)?;
        let d = disks
            .iter()
            .find(|d| d.mount_point() == mount)
            .ok_or_else(|| SampleError::MountNotFound(mount.display().to_string()))?;

        let total = d.total_space();
        let free = d.available_space();
        let used = total.saturating_sub(free);
        Ok(DiskStats {
            mount_path: d.mount_point().display().to_string(),
            filesystem: d.file_system().to_string_lossy().into_owned(),
            total_bytes: total,
            free_bytes: free,
            used_bytes: used,
            used_percent: percent_of(used, total),
        })
    }

    fn networks(&mut self) -> SampleResult<Vec<NetworkStats>> {
        let nets = guarded("network", Networks::new_with_refreshed_list)?;
        let mut list: Vec<NetworkStats> = nets
            .iter()
            .map(|(name, data)| NetworkStats {
                interface_name: name.to_string(),
                bytes_sent: data.total_transmitted(),
                bytes_recv: data.total_received(),
                packets_sent: data.total_packets_transmitted(),
                packets_recv: data.total_packets_received(),
            })
            .collect();
        // HashMap order is random per round; keep rows from jumping around.
        list.sort_by(|a, b| a.interface_name.cmp(&b.interface_name));
        Ok(list)
    }

    fn load(&mut self) -> SampleResult<LoadAverage> {
        if cfg!(windows) {
            return Err(SampleError::Unsupported("load average"));
        }
        let avg = System::load_average();
        Ok(LoadAverage {
            load1: avg.one,
            load5: avg.five,
            load15: avg.fifteen,
        })
    }

    fn processes(&mut self) -> SampleResult<Vec<ProcessStats>> {
        let sys = &mut self.sys;
        guarded("processes", || {
            sys.refresh_processes_specifics(
                ProcessesToUpdate::All,
                true,
                ProcessRefreshKind::nothing().with_cpu().with_memory(),
            )
        })?;

        let mut list: Vec<ProcessStats> = sys
            .processes()
            .values()
            .map(|p| ProcessStats {
                name: p.name().to_string_lossy().into_owned(),
                pid: p.pid().as_u32(),
                cpu_percent: p.cpu_usage(),
                resident_memory_bytes: p.memory(),
            })
            .collect();
        // Enumeration order of /proc; no ranking by usage.
        list.sort_by_key(|p| p.pid);
        Ok(list)
    }

    fn host(&mut self) -> SampleResult<HostInfo> {
        let hostname = System::host_name().ok_or(SampleError::Empty("hostname"))?;
        Ok(HostInfo {
            hostname,
            platform: System::name().unwrap_or_default(),
            platform_version: System::os_version().unwrap_or_default(),
            uptime_seconds: System::uptime(),
        })
    }
}

#[cfg(target_os = "linux")]
fn read_cache_and_buffers() -> (Option<u64>, Option<u64>) {
    match fs::read_to_string("/proc/meminfo") {
        Ok(s) => parse_meminfo(&s),
        Err(e) => {
            let err = SampleError::Io {
                path: "/proc/meminfo",
                source: e,
            };
            tracing::debug!(error = %err, "cache/buffer sizes unavailable");
            (None, None)
        }
    }
}

#[cfg(not(target_os = "linux"))]
fn read_cache_and_buffers() -> (Option<u64>, Option<u64>) {
    (None, None)
}

/// Extract `Cached:` and `Buffers:` (reported in kB) from /proc/meminfo text, in bytes.
pub fn parse_meminfo(text: &str) -> (Option<u64>, Option<u64>) {
    let mut cached = None;
    let mut buffers = None;
    for line in text.lines() {
        let mut it = line.split_whitespace();
        let slot = match it.next() {
            Some("Cached:") => &mut cached,
            Some("Buffers:") => &mut buffers,
            _ => continue,
        };
        if let Some(kb) = it.next().and_then(|v| v.parse::<u64>().ok()) {
            *slot = Some(kb.saturating_mul(1024));
        }
    }
    (cached, buffers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meminfo_fields_are_converted_to_bytes() {
        let text = "MemTotal:       16314856 kB\n\
                    Buffers:          204800 kB\n\
                    Cached:          4096000 kB\n\
                    SwapCached:            0 kB\n";
        let (cached, buffers) = parse_meminfo(text);
        assert_eq!(cached, Some(4_096_000 * 1024));
        assert_eq!(buffers, Some(204_800 * 1024));
    }

    #[test]
    fn meminfo_missing_fields_are_absent() {
        assert_eq!(parse_meminfo("MemTotal: 1 kB\n"), (None, None));
        assert_eq!(parse_meminfo("Cached: garbage kB\n"), (None, None));
    }

    #[test]
    fn panic_in_query_becomes_error() {
        let res: SampleResult<u64> = guarded("disk", || panic!("bad mount table"));
        assert!(matches!(res, Err(SampleError::Panicked("disk"))));
        assert_eq!(guarded("disk", || 7).ok(), Some(7));
    }

    #[test]
    fn process_list_contains_current_process() {
        let mut src = SysinfoSource::new();
        let procs = src.processes().expect("process list");
        let me = std::process::id();
        assert!(procs.iter().any(|p| p.pid == me));
        assert!(procs.windows(2).all(|w| w[0].pid <= w[1].pid));
    }

    #[test]
    fn missing_mount_is_an_error() {
        let mut src = SysinfoSource::new();
        let err = src
            .disk(Path::new("/definitely/not/a/mount/point"))
            .unwrap_err();
        assert!(matches!(err, SampleError::MountNotFound(_)));
    }
}
