//! Controller: owns the dashboard state, consumes the event queue, schedules
//! sampling rounds and redraws after every applied event.

use std::io;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};
use sysdash_sampler::{MetricSnapshot, Sampler};
use tracing::{debug, info, warn};

use crate::config::DashboardConfig;
use crate::event::{spawn_round, spawn_timer, AppEvent, EventHandler, EventSender, SharedSampler};
use crate::input::{route, Action};
use crate::scheduler::{AfterRound, Directive, RefreshScheduler, RoundId, Trigger};
use crate::state::{DashboardState, Transition};
use crate::ui;

pub struct App {
    state: DashboardState,
    scheduler: RefreshScheduler,
    sampler: SharedSampler,
}

impl App {
    /// Builds the initial state. Host info is queried here, synchronously, once.
    pub fn new(config: &DashboardConfig, sampler: Sampler) -> Self {
        let mut sampler = sampler
            .with_cpu_window(config.cpu_window)
            .with_root(config.root_path.clone());
        let host = sampler.host();
        info!(hostname = %host.hostname, platform = %host.platform, "host identified");
        Self {
            state: DashboardState::new(host),
            scheduler: RefreshScheduler::new(config.refresh_interval),
            sampler: Arc::new(Mutex::new(sampler)),
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Take over the terminal, run until quit, restore the terminal.
    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode().context("enabling raw mode")?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e).context("entering alternate screen");
        }
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = match Terminal::new(backend) {
            Ok(t) => t,
            Err(e) => {
                let _ = disable_raw_mode();
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
                return Err(e).context("creating terminal");
            }
        };

        let mut events = EventHandler::new();
        events.spawn_sources();

        let res = match terminal.clear() {
            Ok(()) => self.event_loop(&mut terminal, &mut events).await,
            Err(e) => Err(e).context("clearing terminal"),
        };

        // Teardown
        let restored = restore_terminal(&mut terminal);
        res.and(restored)
    }

    /// The controller loop proper. Separate from `run` so tests can drive it with
    /// a test backend and a hand-fed queue.
    pub async fn event_loop<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        events: &mut EventHandler,
    ) -> Result<()> {
        let tx = events.sender();
        self.request_round(Trigger::Startup, &tx);
        self.draw(terminal)?;

        while let Some(ev) = events.next().await {
            self.handle_event(ev, &tx)?;
            if self.state.is_quitting() {
                info!("quit requested");
                break;
            }
            self.draw(terminal)?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> Result<()> {
        terminal
            .draw(|f| ui::draw(f, &self.state))
            .context("drawing frame")?;
        Ok(())
    }

    fn handle_event(&mut self, ev: AppEvent, tx: &EventSender) -> Result<()> {
        match ev {
            AppEvent::Key(k) => match route(k) {
                Action::Quit => {
                    self.state.apply(Transition::Quit);
                }
                Action::NextTab => {
                    self.state.apply(Transition::NextTab);
                    self.request_round(Trigger::TabChange, tx);
                }
                Action::PrevTab => {
                    self.state.apply(Transition::PrevTab);
                    self.request_round(Trigger::TabChange, tx);
                }
                Action::ManualRefresh => self.request_round(Trigger::Manual, tx),
                Action::NoOp => {}
            },
            AppEvent::Interrupt => {
                self.state.apply(Transition::Quit);
            }
            AppEvent::Resize => {}
            AppEvent::Timer { generation } => {
                if let Directive::Start(round) = self.scheduler.timer_fired(generation) {
                    self.start_round(round, tx);
                }
            }
            AppEvent::Sampled { round, snapshot } => self.finish_round(round, Some(snapshot), tx),
            AppEvent::RoundFailed { round } => self.finish_round(round, None, tx),
            AppEvent::InputFailed(e) => {
                return Err(e).context("reading terminal input");
            }
        }
        Ok(())
    }

    /// A round ended. Its snapshot (if any) is applied only when the round was
    /// the one in flight.
    fn finish_round(
        &mut self,
        round: RoundId,
        snapshot: Option<MetricSnapshot>,
        tx: &EventSender,
    ) {
        match self.scheduler.complete(round) {
            AfterRound::Unknown => {
                warn!(round, "result for a round not in flight");
                return;
            }
            AfterRound::Start(next) => self.start_round(next, tx),
            AfterRound::ArmTimer { generation, delay } => {
                debug!(generation, ?delay, "arming refresh timer");
                spawn_timer(tx.clone(), generation, delay);
            }
        }
        if let Some(snapshot) = snapshot {
            self.state.apply(Transition::Snapshot(snapshot));
        }
        self.state
            .apply(Transition::Refreshing(self.scheduler.in_flight()));
    }

    fn request_round(&mut self, trigger: Trigger, tx: &EventSender) {
        if let Directive::Start(round) = self.scheduler.request(trigger) {
            self.start_round(round, tx);
        }
    }

    fn start_round(&mut self, round: RoundId, tx: &EventSender) {
        self.state.apply(Transition::Refreshing(true));
        spawn_round(tx.clone(), self.sampler.clone(), round);
    }
}

fn restore_terminal<B: Backend + io::Write>(terminal: &mut Terminal<B>) -> Result<()> {
    disable_raw_mode().context("disabling raw mode")?;
    let backend = terminal.backend_mut();
    execute!(backend, LeaveAlternateScreen).context("leaving alternate screen")?;
    terminal.show_cursor().context("showing cursor")?;
    Ok(())
}
