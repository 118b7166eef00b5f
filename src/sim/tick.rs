//! Per-tick simulation step
//!
//! Advances the snake one cell, resolves collisions and pickups, ages timed
//! entities and recomputes the tick interval. The host scheduler calls
//! [`tick`] once per interval while the game is Running.

use rand::Rng;

use super::collision::check_collision;
use super::spawn;
use super::state::{GameEvent, GamePhase, GameState, PowerUpKind};
use crate::tuning::Tuning;

/// Tick period for a score, sped up every `score_per_step` points and
/// clamped at the floor, then stretched while slow-motion is active.
pub fn effective_interval_ms(tuning: &Tuning, score: u64, slow_active: bool) -> u32 {
    let steps = score / tuning.score_per_step.max(1);
    let reduction = steps.saturating_mul(tuning.interval_step_ms as u64);
    let base = (tuning.base_interval_ms as u64).saturating_sub(reduction);
    let interval = base.max(tuning.min_interval_ms as u64) as u32;

    if slow_active {
        (interval as f64 * tuning.slow_multiplier).floor() as u32
    } else {
        interval
    }
}

/// Advance the game state by one tick. No-op unless Running.
pub fn tick(state: &mut GameState) {
    if state.phase != GamePhase::Running {
        return;
    }

    state.last_direction = state.direction;
    let next_head = state.head() + state.direction.delta();

    // Collision freezes everything as it was before this tick
    if let Some(cause) = check_collision(next_head, &state.snake) {
        state.phase = GamePhase::GameOver;
        state.push_event(GameEvent::GameOver {
            score: state.score,
            cause,
        });
        log::info!(
            "Game over ({:?}) at ({}, {}) with score {}",
            cause,
            next_head.x,
            next_head.y,
            state.score
        );
        return;
    }

    state.time_ticks += 1;

    // Slow-motion counts down before pickups so a fresh Slow lasts its full duration
    if state.effects.slow_ticks > 0 {
        state.effects.slow_ticks -= 1;
        if state.effects.slow_ticks == 0 {
            state.push_event(GameEvent::SlowMotionEnded);
        }
    }

    state.snake.push_front(next_head);
    let mut grew = false;

    // Regular food
    if state.food == Some(next_head) {
        state.score += state.tuning.food_score;
        spawn::regenerate_food(state);
        state.push_event(GameEvent::FoodEaten { pos: next_head });
        grew = true;

        if state.bonus.is_none() && state.rng.random::<f64>() < state.tuning.bonus_chance {
            spawn::spawn_bonus_food(state);
        }
    }

    // Bonus food
    if let Some(bonus) = state.bonus
        && bonus.pos == next_head
    {
        state.score += state.tuning.bonus_score;
        state.bonus = None;
        state.push_event(GameEvent::BonusEaten { pos: next_head });
        grew = true;
    }

    // Power-up (never causes growth)
    if let Some(power_up) = state.power_up
        && power_up.pos == next_head
    {
        match power_up.kind {
            PowerUpKind::Slow => state.effects.slow_ticks = state.tuning.slow_duration_ticks,
            PowerUpKind::ScoreBonus => state.score += state.tuning.power_up_score,
        }
        state.power_up = None;
        state.push_event(GameEvent::PowerUpEaten {
            kind: power_up.kind,
        });
        log::debug!("Collected {:?} power-up", power_up.kind);
    }

    if !grew {
        state.snake.pop_back();
    }

    // Age timed entities
    if let Some(bonus) = state.bonus.as_mut() {
        bonus.ticks_left = bonus.ticks_left.saturating_sub(1);
        if bonus.ticks_left == 0 {
            state.bonus = None;
            state.push_event(GameEvent::BonusExpired);
        }
    }
    if let Some(power_up) = state.power_up.as_mut() {
        power_up.ttl_ticks = power_up.ttl_ticks.saturating_sub(1);
        if power_up.ttl_ticks == 0 {
            state.power_up = None;
            state.push_event(GameEvent::PowerUpExpired);
        }
    }

    let interval = effective_interval_ms(&state.tuning, state.score, state.effects.slow_active());
    if interval != state.interval_ms {
        log::debug!("Interval {} ms -> {} ms", state.interval_ms, interval);
        state.interval_ms = interval;
        state.push_event(GameEvent::IntervalChanged { ms: interval });
    }

    if state.power_up.is_none() && state.rng.random::<f64>() < state.tuning.power_up_chance {
        let kind = if state.rng.random_bool(0.5) {
            PowerUpKind::Slow
        } else {
            PowerUpKind::ScoreBonus
        };
        spawn::spawn_power_up(state, kind);
    }
}
