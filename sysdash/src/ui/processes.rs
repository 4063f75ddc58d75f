//! Processes tab: the first rows of the process list, in collection order.

use ratatui::text::{Line, Span};
use sysdash_sampler::ProcessStats;

use crate::ui::util::human;
use crate::ui::{heading, loading, theme};

/// Rows shown; the rest of the list is not displayed.
pub const MAX_ROWS: usize = 10;

pub fn render(procs: &[ProcessStats]) -> Vec<Line<'static>> {
    if procs.is_empty() {
        return loading("process");
    }
    let shown = procs.len().min(MAX_ROWS);
    let mut lines = vec![
        heading(format!("Top {shown} of {} Processes", procs.len())),
        Line::default(),
    ];
    // No sorting: rows keep the order the OS listed them in.
    lines.extend(procs.iter().take(MAX_ROWS).map(|p| {
        Line::from(vec![
            Span::styled(format!("{} [{}]", p.name, p.pid), theme::PROC),
            Span::raw("  "),
            Span::styled(format!("CPU: {:.1}%", p.cpu_percent), theme::CPU),
            Span::raw("  "),
            Span::styled(
                format!("Mem: {}", human(p.resident_memory_bytes)),
                theme::MEM,
            ),
        ])
    }));
    lines
}
