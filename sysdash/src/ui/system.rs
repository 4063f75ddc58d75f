//! System tab: host identity (sampled once) and load averages.

use ratatui::text::Line;
use sysdash_sampler::{HostInfo, LoadAverage};

use crate::ui::util::uptime;
use crate::ui::{heading, pair, value};

fn or_unknown(s: &str) -> &str {
    if s.is_empty() {
        "unknown"
    } else {
        s
    }
}

pub fn render(host: &HostInfo, load: Option<&LoadAverage>) -> Vec<Line<'static>> {
    let platform = or_unknown(&host.platform);
    let load_line = match load {
        Some(l) => format!("Load Avg: {:.2} {:.2} {:.2}", l.load1, l.load5, l.load15),
        None => "Load Avg: Loading…".to_string(),
    };
    vec![
        heading("System Information"),
        Line::default(),
        pair(
            format!("Hostname: {}", or_unknown(&host.hostname)),
            format!("Platform: {platform}"),
        ),
        Line::default(),
        pair(
            format!("OS: {platform} {}", host.platform_version)
                .trim_end()
                .to_string(),
            format!("Uptime: {}", uptime(host.uptime_seconds)),
        ),
        Line::default(),
        value(load_line),
    ]
}
