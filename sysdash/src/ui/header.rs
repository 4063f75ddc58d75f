//! Title line, tab bar and footer.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Tabs},
};

use crate::state::{DashboardState, Snapshot, Tab};
use crate::ui::theme;

const CONTROLS: &str = "Controls: ← → or Tab to switch | R to refresh | Q to quit";

pub fn draw_title(f: &mut ratatui::Frame<'_>, area: Rect) {
    f.render_widget(
        Paragraph::new(Line::styled("System Monitor TUI", theme::HEADER)),
        area,
    );
}

pub fn draw_tabs(f: &mut ratatui::Frame<'_>, area: Rect, active: Tab) {
    let tabs = Tabs::new(Tab::ALL.iter().map(|t| t.title()))
        .select(active.index())
        .style(theme::TAB_INACTIVE)
        .highlight_style(theme::TAB_ACTIVE)
        .divider(" ");
    f.render_widget(tabs, area);
}

/// Right-hand footer status: refresh in progress, or time of the last snapshot.
pub fn status(state: &DashboardState) -> String {
    if state.is_refreshing() {
        return "refreshing…".into();
    }
    match state.latest() {
        Snapshot::Ready(s) => format!("updated {}", s.taken_at.format("%H:%M:%S")),
        Snapshot::Initializing => String::new(),
    }
}

pub fn draw_footer(f: &mut ratatui::Frame<'_>, area: Rect, state: &DashboardState) {
    let status = status(state);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(status.chars().count() as u16),
        ])
        .split(area);
    f.render_widget(Paragraph::new(Span::styled(CONTROLS, theme::MUTED)), cols[0]);
    f.render_widget(Paragraph::new(Span::styled(status, theme::MUTED)), cols[1]);
}
