//! UI module root: picks the active tab's view and paints the frame.

pub mod cpu;
pub mod disks;
pub mod header;
pub mod mem;
pub mod net;
pub mod processes;
pub mod system;
pub mod theme;
pub mod util;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::{DashboardState, Tab};

/// The rendered body of one tab.
#[derive(Debug, Clone)]
pub struct TabView {
    pub title: &'static str,
    pub lines: Vec<Line<'static>>,
}

impl TabView {
    /// Unstyled text, one line per row.
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Pure: the view for the active tab given the current state.
pub fn render(state: &DashboardState) -> TabView {
    let snap = state.latest().ready();
    let tab = state.active_tab();
    let lines = match tab {
        Tab::System => system::render(state.host(), snap.and_then(|s| s.load.as_ref())),
        Tab::Cpu => cpu::render(snap.and_then(|s| s.cpu.as_ref())),
        Tab::Memory => mem::render(snap.and_then(|s| s.memory.as_ref())),
        Tab::Disk => disks::render(snap.and_then(|s| s.disk.as_ref())),
        Tab::Network => net::render(snap.map(|s| s.network.as_slice()).unwrap_or_default()),
        Tab::Processes => {
            processes::render(snap.map(|s| s.processes.as_slice()).unwrap_or_default())
        }
    };
    TabView {
        title: tab.title(),
        lines,
    }
}

pub fn draw(f: &mut ratatui::Frame<'_>, state: &DashboardState) {
    let outer = Block::default().borders(Borders::ALL);
    let area = outer.inner(f.area());
    f.render_widget(outer, f.area());

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(1),
            Constraint::Length(1), // tabs
            Constraint::Length(1),
            Constraint::Min(3), // content
            Constraint::Length(1), // footer
        ])
        .split(area);

    header::draw_title(f, rows[0]);
    header::draw_tabs(f, rows[2], state.active_tab());

    let view = render(state);
    let body = Paragraph::new(view.lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(view.title, theme::HEADER)),
    );
    f.render_widget(body, rows[4]);

    header::draw_footer(f, rows[5], state);
}

pub(crate) fn loading(what: &str) -> Vec<Line<'static>> {
    vec![Line::styled(format!("Loading {what} information…"), theme::VALUE)]
}

pub(crate) fn heading(text: impl Into<String>) -> Line<'static> {
    Line::styled(text.into(), theme::HEADER)
}

/// Two values side by side on one row.
pub(crate) fn pair(left: String, right: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(left, theme::VALUE),
        Span::raw("  "),
        Span::styled(right, theme::VALUE),
    ])
}

pub(crate) fn value(text: String) -> Line<'static> {
    Line::styled(text, theme::VALUE)
}
