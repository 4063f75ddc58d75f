//! Network tab: cumulative counters, one block per interface.
//!
//! Hosts with many virtual interfaces would overflow the content area, so only
//! the first `MAX_INTERFACES` are drawn, followed by a count of the rest.

use ratatui::text::{Line, Span};
use sysdash_sampler::NetworkStats;

use crate::ui::util::human;
use crate::ui::{heading, loading, pair, theme, value};

pub const MAX_INTERFACES: usize = 4;

pub fn render(nets: &[NetworkStats]) -> Vec<Line<'static>> {
    if nets.is_empty() {
        return loading("network");
    }
    let mut lines = vec![heading("Network Information")];
    for n in nets.iter().take(MAX_INTERFACES) {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!("Interface: {}", n.interface_name),
            theme::NET,
        )));
        lines.push(pair(
            format!("Bytes Sent: {}", human(n.bytes_sent)),
            format!("Bytes Recv: {}", human(n.bytes_recv)),
        ));
        lines.push(pair(
            format!("Packets Sent: {}", n.packets_sent),
            format!("Packets Recv: {}", n.packets_recv),
        ));
    }
    let hidden = nets.len().saturating_sub(MAX_INTERFACES);
    if hidden > 0 {
        lines.push(Line::default());
        lines.push(value(format!("+{hidden} more interfaces")));
    }
    lines
}
