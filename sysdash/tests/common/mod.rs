//! Shared helpers: a scripted metric source and frame/text utilities.
#![allow(dead_code)]

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use sysdash_sampler::{
    CpuStats, DiskStats, HostInfo, LoadAverage, MemoryStats, MetricSnapshot, MetricSource,
    NetworkStats, ProcessStats, SampleError, SampleResult,
};

/// Counters shared between a test and the `FakeSource` it handed to the app.
#[derive(Default)]
pub struct Probe {
    rounds: AtomicUsize,
    active: AtomicUsize,
    max_active: AtomicUsize,
}

impl Probe {
    pub fn rounds(&self) -> usize {
        self.rounds.load(Ordering::SeqCst)
    }

    pub fn max_concurrent(&self) -> usize {
        self.max_active.load(Ordering::SeqCst)
    }
}

pub struct FakeSource {
    pub probe: Arc<Probe>,
    pub fail_disk: bool,
    pub fail_host: bool,
    /// The first round panics inside the CPU query.
    pub panic_first: bool,
    pub process_count: u32,
}

impl FakeSource {
    pub fn new() -> (Self, Arc<Probe>) {
        let probe = Arc::new(Probe::default());
        (
            Self {
                probe: probe.clone(),
                fail_disk: false,
                fail_host: false,
                panic_first: false,
                process_count: 25,
            },
            probe,
        )
    }
}

impl MetricSource for FakeSource {
    fn cpu(&mut self, window: Duration) -> SampleResult<CpuStats> {
        let done = self.probe.rounds.fetch_add(1, Ordering::SeqCst);
        if self.panic_first && done == 0 {
            panic!("cpu query blew up");
        }
        let now = self.probe.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.probe.max_active.fetch_max(now, Ordering::SeqCst);
        std::thread::sleep(window);
        self.probe.active.fetch_sub(1, Ordering::SeqCst);
        Ok(cpu())
    }
    fn memory(&mut self) -> SampleResult<MemoryStats> {
        Ok(memory())
    }
    fn disk(&mut self, mount: &Path) -> SampleResult<DiskStats> {
        if self.fail_disk {
            return Err(SampleError::MountNotFound(mount.display().to_string()));
        }
        Ok(disk())
    }
    fn networks(&mut self) -> SampleResult<Vec<NetworkStats>> {
        Ok(networks())
    }
    fn load(&mut self) -> SampleResult<LoadAverage> {
        Ok(load())
    }
    fn processes(&mut self) -> SampleResult<Vec<ProcessStats>> {
        Ok(processes(self.process_count))
    }
    fn host(&mut self) -> SampleResult<HostInfo> {
        if self.fail_host {
            return Err(SampleError::Empty("hostname"));
        }
        Ok(host())
    }
}

pub fn host() -> HostInfo {
    HostInfo {
        hostname: "testbox".into(),
        platform: "debian".into(),
        platform_version: "12.5".into(),
        uptime_seconds: 3661,
    }
}

pub fn cpu() -> CpuStats {
    CpuStats {
        model: "Fake CPU @ 3.20GHz".into(),
        core_count: 8,
        clock_mhz: 3200,
        usage_percent: 50.0,
    }
}

pub fn memory() -> MemoryStats {
    MemoryStats {
        total_bytes: 8 * 1024 * 1024 * 1024,
        available_bytes: 6 * 1024 * 1024 * 1024,
        used_bytes: 2 * 1024 * 1024 * 1024,
        used_percent: 25.0,
        cached_bytes: Some(1536),
        buffers_bytes: None,
    }
}

pub fn disk() -> DiskStats {
    DiskStats {
        mount_path: "/".into(),
        filesystem: "ext4".into(),
        total_bytes: 100 * 1024 * 1024 * 1024,
        free_bytes: 25 * 1024 * 1024 * 1024,
        used_bytes: 75 * 1024 * 1024 * 1024,
        used_percent: 75.0,
    }
}

pub fn networks() -> Vec<NetworkStats> {
    vec![
        NetworkStats {
            interface_name: "eth0".into(),
            bytes_sent: 1024,
            bytes_recv: 1_048_576,
            packets_sent: 10,
            packets_recv: 20,
        },
        NetworkStats {
            interface_name: "lo".into(),
            bytes_sent: 0,
            bytes_recv: 0,
            packets_sent: 0,
            packets_recv: 0,
        },
    ]
}

pub fn load() -> LoadAverage {
    LoadAverage {
        load1: 0.5,
        load5: 1.25,
        load15: 2.0,
    }
}

/// Deliberately not in pid or usage order, so tests can see that nothing re-sorts.
pub fn processes(n: u32) -> Vec<ProcessStats> {
    (0..n)
        .map(|i| ProcessStats {
            name: format!("proc{i}"),
            pid: 1000 - i,
            cpu_percent: (i % 7) as f32,
            resident_memory_bytes: u64::from(i) * 1024,
        })
        .collect()
}

pub fn snapshot() -> MetricSnapshot {
    MetricSnapshot {
        cpu: Some(cpu()),
        memory: Some(memory()),
        disk: Some(disk()),
        network: networks(),
        load: Some(load()),
        processes: processes(25),
        taken_at: chrono::Local::now(),
    }
}

pub fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn test_terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(100, 30)).expect("test terminal")
}

/// Whole buffer as text, one row per line.
pub fn screen(terminal: &Terminal<TestBackend>) -> String {
    let buf = terminal.backend().buffer();
    let width = buf.area.width as usize;
    buf.content
        .chunks(width)
        .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
