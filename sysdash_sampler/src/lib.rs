//! Host metric sampling for sysdash: snapshot types, the `MetricSource` seam
//! and the sysinfo-backed implementation.

pub mod error;
pub mod metrics;
pub mod sampler;
pub mod types;

pub use error::{SampleError, SampleResult};
pub use metrics::{SysinfoSource, DEFAULT_ROOT};
pub use sampler::{MetricSource, Sampler, DEFAULT_CPU_WINDOW};
pub use types::{
    CpuStats, DiskStats, HostInfo, LoadAverage, MemoryStats, MetricSnapshot, NetworkStats,
    ProcessStats,
};
