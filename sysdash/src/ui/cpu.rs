//! CPU tab: identity plus an utilisation gauge.

use ratatui::text::{Line, Span};
use sysdash_sampler::CpuStats;

use crate::ui::util::bar;
use crate::ui::{heading, loading, pair, theme, value};

pub fn render(cpu: Option<&CpuStats>) -> Vec<Line<'static>> {
    let Some(c) = cpu else {
        return loading("CPU");
    };
    vec![
        heading("CPU Information"),
        Line::default(),
        value(format!("Model: {}", c.model)),
        Line::default(),
        pair(
            format!("Cores: {}", c.core_count),
            format!("Mhz: {}", c.clock_mhz),
        ),
        Line::default(),
        Line::from(vec![
            Span::styled(format!("Usage: {:.1}%", c.usage_percent), theme::VALUE),
            Span::raw("  "),
            Span::styled(bar(f64::from(c.usage_percent)), theme::CPU),
        ]),
    ]
}
