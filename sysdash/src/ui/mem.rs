//! Memory tab.

use ratatui::text::Line;
use sysdash_sampler::MemoryStats;

use crate::ui::util::{bar, human};
use crate::ui::{heading, loading, pair, theme, value};

fn human_opt(b: Option<u64>) -> String {
    b.map(human).unwrap_or_else(|| "n/a".into())
}

pub fn render(mem: Option<&MemoryStats>) -> Vec<Line<'static>> {
    let Some(m) = mem else {
        return loading("memory");
    };
    vec![
        heading("Memory Information"),
        Line::default(),
        pair(
            format!("Total: {}", human(m.total_bytes)),
            format!("Available: {}", human(m.available_bytes)),
        ),
        Line::default(),
        value(format!(
            "Used: {} ({:.1}%)",
            human(m.used_bytes),
            m.used_percent
        )),
        Line::default(),
        Line::styled(bar(m.used_percent), theme::MEM),
        Line::default(),
        pair(
            format!("Cached: {}", human_opt(m.cached_bytes)),
            format!("Buffers: {}", human_opt(m.buffers_bytes)),
        ),
    ]
}
