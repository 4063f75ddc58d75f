//! Refresh cadence: decides when a sampling round may start.
//!
//! At most one round is in flight. A user trigger during a round becomes a single
//! follow-up round started as soon as the current one completes. The periodic
//! timer is only armed when a round completes with no follow-up pending, and a
//! timer that fires after some other round has started is stale.

use std::time::Duration;

use tracing::debug;

pub type RoundId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Startup,
    TabChange,
    Manual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// Start round `RoundId` now.
    Start(RoundId),
    /// A round is in flight; a follow-up will start when it completes.
    Deferred,
    /// Nothing to do.
    Ignore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfterRound {
    Start(RoundId),
    ArmTimer { generation: u64, delay: Duration },
    /// Completion for a round that is not in flight.
    Unknown,
}

#[derive(Debug)]
pub struct RefreshScheduler {
    interval: Duration,
    next_round: RoundId,
    in_flight: Option<RoundId>,
    follow_up: bool,
    // bumped on every start so older timers go stale
    generation: u64,
    timer_armed: bool,
}

impl RefreshScheduler {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_round: 0,
            in_flight: None,
            follow_up: false,
            generation: 0,
            timer_armed: false,
        }
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn request(&mut self, trigger: Trigger) -> Directive {
        if let Some(round) = self.in_flight {
            debug!(?trigger, round, "round in flight, deferring");
            self.follow_up = true;
            return Directive::Deferred;
        }
        Directive::Start(self.start(trigger))
    }

    pub fn timer_fired(&mut self, generation: u64) -> Directive {
        if !self.timer_armed || self.in_flight.is_some() || generation != self.generation {
            debug!(generation, current = self.generation, "stale refresh timer");
            return Directive::Ignore;
        }
        Directive::Start(self.start_periodic())
    }

    pub fn complete(&mut self, round: RoundId) -> AfterRound {
        if self.in_flight != Some(round) {
            return AfterRound::Unknown;
        }
        self.in_flight = None;
        if std::mem::take(&mut self.follow_up) {
            return AfterRound::Start(self.start(Trigger::Manual));
        }
        self.timer_armed = true;
        AfterRound::ArmTimer {
            generation: self.generation,
            delay: self.interval,
        }
    }

    fn start(&mut self, trigger: Trigger) -> RoundId {
        let round = self.begin();
        debug!(?trigger, round, "starting sampling round");
        round
    }

    fn start_periodic(&mut self) -> RoundId {
        let round = self.begin();
        debug!(round, "starting periodic sampling round");
        round
    }

    fn begin(&mut self) -> RoundId {
        let round = self.next_round;
        self.next_round += 1;
        self.in_flight = Some(round);
        self.generation += 1;
        self.timer_armed = false;
        round
    }
}
