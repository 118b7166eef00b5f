//! Game state and core simulation types
//!
//! The engine exclusively owns a [`GameState`]; collaborators read
//! [`Snapshot`]s and drain [`GameEvent`]s.

use std::collections::VecDeque;

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::CollisionKind;
use super::grid::{Direction, Position};
use super::spawn;
use super::tick::effective_interval_ms;
use crate::consts::{START_DIRECTION, START_SNAKE};
use crate::tuning::Tuning;

/// Lifecycle of a single game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for Start (initial, and after every reset)
    Idle,
    /// Ticking
    Running,
    /// Collided; frozen until reset
    GameOver,
}

impl GamePhase {
    /// Status line shown to the player
    pub fn message(&self) -> &'static str {
        match self {
            GamePhase::Idle => "Press Start to play!",
            GamePhase::Running => "Game running...",
            GamePhase::GameOver => "Game Over! Press Reset to try again.",
        }
    }
}

/// Power-up variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Slows the game down for a while
    Slow,
    /// Instant score bonus
    ScoreBonus,
}

/// Time-limited, high-value food
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusFood {
    pub pos: Position,
    /// Ticks left before it disappears
    pub ticks_left: u32,
}

/// The single power-up that may be on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerUp {
    pub kind: PowerUpKind,
    pub pos: Position,
    pub ttl_ticks: u32,
}

/// Active power-up effects
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveEffects {
    pub slow_ticks: u32,
}

impl ActiveEffects {
    pub fn slow_active(&self) -> bool {
        self.slow_ticks > 0
    }
}

/// Discrete notifications for audio/UI collaborators, in the order they happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    FoodEaten { pos: Position },
    BonusSpawned { pos: Position },
    BonusEaten { pos: Position },
    BonusExpired,
    PowerUpSpawned { kind: PowerUpKind, pos: Position },
    PowerUpEaten { kind: PowerUpKind },
    PowerUpExpired,
    SlowMotionEnded,
    /// The host scheduler must be reconfigured to this period
    IntervalChanged { ms: u32 },
    GameOver { score: u64, cause: CollisionKind },
    Reset,
}

/// Read-only view handed to the renderer each tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    /// Head first
    pub snake: Vec<Position>,
    pub direction: Direction,
    pub food: Option<Position>,
    pub bonus: Option<BonusFood>,
    pub power_up: Option<PowerUp>,
    pub score: u64,
    pub slow_motion: bool,
    pub slow_ticks: u32,
    pub interval_ms: u32,
    pub time_ticks: u64,
}

impl Snapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Complete game state (deterministic for a given seed and command sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Balance values
    pub tuning: Tuning,
    /// Current phase
    pub phase: GamePhase,
    /// Body segments, head at the front
    pub snake: VecDeque<Position>,
    /// Direction applied on the next tick
    pub direction: Direction,
    /// Direction used by the most recently completed tick
    pub last_direction: Direction,
    /// Regular food. `None` only if the board had no free cell left.
    pub food: Option<Position>,
    pub bonus: Option<BonusFood>,
    pub power_up: Option<PowerUp>,
    pub effects: ActiveEffects,
    pub score: u64,
    /// Tick period the host scheduler should use
    pub interval_ms: u32,
    /// Successful ticks in the current game
    pub time_ticks: u64,
    pub(crate) rng: Pcg32,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new idle game with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut state = Self {
            seed,
            interval_ms: tuning.base_interval_ms,
            tuning,
            phase: GamePhase::Idle,
            snake: VecDeque::new(),
            direction: START_DIRECTION,
            last_direction: START_DIRECTION,
            food: None,
            bonus: None,
            power_up: None,
            effects: ActiveEffects::default(),
            score: 0,
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        };
        state.reinitialize();
        state
    }

    /// Put every entity back to its starting value. The RNG stream keeps running.
    fn reinitialize(&mut self) {
        self.snake = START_SNAKE.iter().map(|&(x, y)| IVec2::new(x, y)).collect();
        self.direction = START_DIRECTION;
        self.last_direction = START_DIRECTION;
        self.score = 0;
        self.phase = GamePhase::Idle;
        self.bonus = None;
        self.power_up = None;
        self.effects = ActiveEffects::default();
        self.time_ticks = 0;
        self.interval_ms = effective_interval_ms(&self.tuning, 0, false);
        self.events.clear();

        spawn::regenerate_food(self);
    }

    /// Idle -> Running. Returns false (no-op) from any other phase.
    pub fn start(&mut self) -> bool {
        if self.phase != GamePhase::Idle {
            log::debug!("start ignored in {:?}", self.phase);
            return false;
        }
        self.phase = GamePhase::Running;
        self.push_event(GameEvent::Started);
        log::info!("Game started (interval {} ms)", self.interval_ms);
        true
    }

    /// Back to Idle from any phase with fresh entities
    pub fn reset(&mut self) {
        self.reinitialize();
        self.push_event(GameEvent::Reset);
        log::info!("Game reset");
    }

    /// Queue a direction for the next tick.
    ///
    /// Ignored outside Running, for non-cardinal vectors, and for the exact
    /// reverse of the last completed tick's direction. Returns whether the
    /// direction was accepted.
    pub fn set_direction(&mut self, dx: i32, dy: i32) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        let Some(dir) = Direction::from_delta(dx, dy) else {
            log::debug!("ignoring non-cardinal direction ({}, {})", dx, dy);
            return false;
        };
        self.turn(dir)
    }

    /// Typed variant of [`GameState::set_direction`]
    pub fn turn(&mut self, dir: Direction) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        if dir.is_opposite(self.last_direction) {
            log::debug!("ignoring reversal {:?} -> {:?}", self.last_direction, dir);
            return false;
        }
        self.direction = dir;
        true
    }

    pub fn head(&self) -> Position {
        // The snake is never empty: it starts at three segments and only grows
        self.snake.front().copied().unwrap_or(IVec2::ZERO)
    }

    pub fn is_on_snake(&self, pos: Position) -> bool {
        self.snake.contains(&pos)
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Events queued since the last drain
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take all queued events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            snake: self.snake.iter().copied().collect(),
            direction: self.direction,
            food: self.food,
            bonus: self.bonus,
            power_up: self.power_up,
            score: self.score,
            slow_motion: self.effects.slow_active(),
            slow_ticks: self.effects.slow_ticks,
            interval_ms: self.interval_ms,
            time_ticks: self.time_ticks,
        }
    }
}
