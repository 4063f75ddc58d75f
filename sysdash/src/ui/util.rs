//! Small UI helpers: human-readable sizes, uptime, text gauges.

/// Cells in a percentage gauge.
pub const BAR_WIDTH: usize = 20;

const UNITS: [&str; 6] = ["KB", "MB", "GB", "TB", "PB", "EB"];

/// Binary (1024-based) size with one decimal, e.g. `1.5 KB`. Below 1 KiB: `512 B`.
pub fn human(b: u64) -> String {
    const K: u64 = 1024;
    if b < K {
        return format!("{b} B");
    }
    let mut div = K;
    let mut exp = 0;
    let mut n = b / K;
    while n >= K {
        div *= K;
        exp += 1;
        n /= K;
    }
    format!("{:.1} {}", b as f64 / div as f64, UNITS[exp])
}

/// Whole hours and minutes; leftover seconds are dropped.
pub fn uptime(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    format!("{hours}h {minutes}m")
}

/// Filled cells for `percent`, clamped to `[0, BAR_WIDTH]`. NaN counts as empty.
pub fn filled_cells(percent: f64) -> usize {
    if percent.is_nan() {
        return 0;
    }
    (percent * BAR_WIDTH as f64 / 100.0)
        .floor()
        .clamp(0.0, BAR_WIDTH as f64) as usize
}

pub fn bar(percent: f64) -> String {
    let filled = filled_cells(percent);
    let mut s = String::with_capacity(BAR_WIDTH * 3);
    s.extend(std::iter::repeat('█').take(filled));
    s.extend(std::iter::repeat('░').take(BAR_WIDTH - filled));
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn human_sizes() {
        assert_eq!(human(0), "0 B");
        assert_eq!(human(1023), "1023 B");
        assert_eq!(human(1024), "1.0 KB");
        assert_eq!(human(1536), "1.5 KB");
        assert_eq!(human(1_048_576), "1.0 MB");
        assert_eq!(human(5 * 1024 * 1024 * 1024), "5.0 GB");
        assert_eq!(human(1 << 50), "1.0 PB");
        assert_eq!(human(u64::MAX), "16.0 EB");
    }

    #[test]
    fn uptime_truncates_seconds() {
        assert_eq!(uptime(3661), "1h 1m");
        assert_eq!(uptime(0), "0h 0m");
        assert_eq!(uptime(59), "0h 0m");
        assert_eq!(uptime(90_000), "25h 0m");
    }

    #[test]
    fn gauge_fill() {
        assert_eq!(filled_cells(0.0), 0);
        assert_eq!(filled_cells(50.0), 10);
        assert_eq!(filled_cells(100.0), 20);
        assert_eq!(filled_cells(4.99), 0);
        assert_eq!(filled_cells(150.0), 20);
        assert_eq!(filled_cells(-3.0), 0);
        assert_eq!(filled_cells(f64::NAN), 0);
    }

    #[test]
    fn bar_is_always_full_width() {
        for p in [-10.0, 0.0, 37.5, 100.0, 1e9] {
            assert_eq!(bar(p).chars().count(), BAR_WIDTH);
        }
        assert_eq!(bar(50.0), format!("{}{}", "█".repeat(10), "░".repeat(10)));
    }
}
