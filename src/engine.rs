//! Lifecycle control around the simulation
//!
//! [`Engine`] owns the [`GameState`] and the host's [`Scheduler`]. It keeps the
//! scheduler in step with the game: started on Start, rescheduled whenever the
//! tick interval changes, stopped on game over and reset.

use crate::command::Command;
use crate::platform::{ManualScheduler, Scheduler};
use crate::sim::{GameEvent, GamePhase, GameState, Snapshot, tick};
use crate::tuning::{Tuning, TuningError};

pub struct Engine<S: Scheduler> {
    state: GameState,
    scheduler: S,
}

impl<S: Scheduler> Engine<S> {
    pub fn new(seed: u64, scheduler: S) -> Self {
        Self {
            state: GameState::new(seed),
            scheduler,
        }
    }

    /// Engine with custom balance values, rejected if they fail validation
    pub fn with_tuning(seed: u64, tuning: Tuning, scheduler: S) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self {
            state: GameState::with_tuning(seed, tuning),
            scheduler,
        })
    }

    /// Idle -> Running and begin ticking. No-op if already running or over.
    pub fn start(&mut self) {
        if self.state.start() {
            self.scheduler.start(self.state.interval_ms);
        }
    }

    /// Cancel ticking, then reinitialize everything. Safe from any phase.
    pub fn reset(&mut self) {
        self.scheduler.stop();
        self.state.reset();
    }

    /// Queue a turn; see [`GameState::set_direction`]
    pub fn set_direction(&mut self, dx: i32, dy: i32) -> bool {
        self.state.set_direction(dx, dy)
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Turn(dir) => {
                self.state.turn(dir);
            }
            Command::Start => self.start(),
            Command::Reset => self.reset(),
        }
    }

    /// Run one simulation step and keep the scheduler consistent with it
    pub fn tick(&mut self) {
        if self.state.phase != GamePhase::Running {
            return;
        }
        let before = self.state.interval_ms;
        tick(&mut self.state);

        if self.state.phase == GamePhase::GameOver {
            self.scheduler.stop();
        } else if self.state.interval_ms != before {
            self.scheduler.reschedule(self.state.interval_ms);
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct state access for hosts that steer (demo mode) or stage scenarios
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.state.drain_events()
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}

impl Engine<ManualScheduler> {
    /// Feed wall time to the virtual clock and run every tick that falls due.
    /// Returns the number of ticks run.
    pub fn advance(&mut self, elapsed_ms: u64) -> u32 {
        self.scheduler.advance(elapsed_ms);
        let mut ticks = 0;
        while self.scheduler.take_due() {
            self.tick();
            ticks += 1;
        }
        ticks
    }
}
