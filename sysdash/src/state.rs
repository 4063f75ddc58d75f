//! Dashboard state: active tab, latest snapshot, host identity and the quit flag.
//! Only the controller loop mutates it, and only through `apply`.

use sysdash_sampler::{HostInfo, MetricSnapshot};

pub const TAB_COUNT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    System,
    Cpu,
    Memory,
    Disk,
    Network,
    Processes,
}

impl Tab {
    pub const ALL: [Tab; TAB_COUNT] = [
        Tab::System,
        Tab::Cpu,
        Tab::Memory,
        Tab::Disk,
        Tab::Network,
        Tab::Processes,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Wraps modulo `TAB_COUNT`, so any index maps to a tab.
    pub fn from_index(i: usize) -> Tab {
        Self::ALL[i % TAB_COUNT]
    }

    pub fn next(self) -> Tab {
        Self::from_index(self.index() + 1)
    }

    pub fn prev(self) -> Tab {
        Self::from_index(self.index() + TAB_COUNT - 1)
    }

    pub fn title(self) -> &'static str {
        match self {
            Tab::System => "System",
            Tab::Cpu => "CPU",
            Tab::Memory => "Memory",
            Tab::Disk => "Disk",
            Tab::Network => "Network",
            Tab::Processes => "Processes",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub enum Snapshot {
    #[default]
    Initializing,
    Ready(MetricSnapshot),
}

impl Snapshot {
    pub fn ready(&self) -> Option<&MetricSnapshot> {
        match self {
            Snapshot::Ready(s) => Some(s),
            Snapshot::Initializing => None,
        }
    }
}

/// A single state change, as decided by the controller.
#[derive(Debug)]
pub enum Transition {
    NextTab,
    PrevTab,
    Snapshot(MetricSnapshot),
    Refreshing(bool),
    Quit,
}

#[derive(Debug, Default)]
pub struct DashboardState {
    active_tab: Tab,
    latest: Snapshot,
    host: HostInfo,
    refreshing: bool,
    quitting: bool,
}

impl DashboardState {
    pub fn new(host: HostInfo) -> Self {
        Self {
            host,
            ..Self::default()
        }
    }

    /// Apply `t`. Returns false (and changes nothing) once quitting.
    pub fn apply(&mut self, t: Transition) -> bool {
        if self.quitting {
            return false;
        }
        match t {
            Transition::NextTab => self.active_tab = self.active_tab.next(),
            Transition::PrevTab => self.active_tab = self.active_tab.prev(),
            // last writer wins
            Transition::Snapshot(s) => self.latest = Snapshot::Ready(s),
            Transition::Refreshing(on) => self.refreshing = on,
            Transition::Quit => self.quitting = true,
        }
        true
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn latest(&self) -> &Snapshot {
        &self.latest
    }

    pub fn host(&self) -> &HostInfo {
        &self.host
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    pub fn is_quitting(&self) -> bool {
        self.quitting
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_from_last_to_first() {
        assert_eq!(Tab::Processes.next(), Tab::System);
        assert_eq!(Tab::System.prev(), Tab::Processes);
    }

    #[test]
    fn index_round_trips_and_wraps() {
        for (i, t) in Tab::ALL.iter().enumerate() {
            assert_eq!(t.index(), i);
            assert_eq!(Tab::from_index(i), *t);
        }
        assert_eq!(Tab::from_index(TAB_COUNT + 2), Tab::Memory);
    }

    #[test]
    fn nothing_applies_after_quit() {
        let mut s = DashboardState::new(HostInfo::default());
        assert!(s.apply(Transition::NextTab));
        assert!(s.apply(Transition::Quit));
        assert!(s.is_quitting());
        assert!(!s.apply(Transition::NextTab));
        assert!(!s.apply(Transition::Refreshing(true)));
        assert_eq!(s.active_tab(), Tab::Cpu);
        assert!(!s.is_refreshing());
        // a second quit is a no-op, the flag never resets
        assert!(!s.apply(Transition::Quit));
        assert!(s.is_quitting());
    }

    #[test]
    fn starts_initializing_on_first_tab() {
        let s = DashboardState::new(HostInfo::default());
        assert_eq!(s.active_tab(), Tab::System);
        assert!(s.latest().ready().is_none());
        assert!(!s.is_quitting());
    }
}
