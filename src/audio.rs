//! Audio system using Web Audio API
//!
//! Procedurally generated sound effects - no external files needed!
//! The event-to-sound mapping is platform independent; synthesis is wasm only.

use crate::sim::{GameEvent, PowerUpKind};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Regular food eaten
    Eat,
    /// Bonus food eaten
    BonusEat,
    /// Bonus food appeared
    BonusAppear,
    /// Slow power-up collected
    SlowDown,
    /// Score power-up collected
    ScoreChime,
    /// Game over
    GameOver,
}

impl SoundEffect {
    /// Sound to play for an event, if any
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::FoodEaten { .. } => Some(SoundEffect::Eat),
            GameEvent::BonusEaten { .. } => Some(SoundEffect::BonusEat),
            GameEvent::BonusSpawned { .. } => Some(SoundEffect::BonusAppear),
            GameEvent::PowerUpEaten {
                kind: PowerUpKind::Slow,
            } => Some(SoundEffect::SlowDown),
            GameEvent::PowerUpEaten {
                kind: PowerUpKind::ScoreBonus,
            } => Some(SoundEffect::ScoreChime),
            GameEvent::GameOver { .. } => Some(SoundEffect::GameOver),
            _ => None,
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::SoundEffect;

    /// Master volume applied to every effect.
    const VOLUME: f32 = 0.6;

    /// Audio manager for the game
    pub struct AudioManager {
        ctx: Option<AudioContext>,
    }

    impl Default for AudioManager {
        fn default() -> Self {
            Self::new()
        }
    }

    impl AudioManager {
        pub fn new() -> Self {
            // Try to create audio context (may fail if not in secure context)
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self { ctx }
        }

        /// Play a sound effect
        pub fn play(&self, effect: SoundEffect) {
            let vol = VOLUME;
            let Some(ctx) = &self.ctx else { return };

            // Resume context if suspended (browsers require user gesture)
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            match effect {
                SoundEffect::Eat => self.blip(ctx, vol * 0.4, 520.0, 780.0, 0.08, OscillatorType::Square),
                SoundEffect::BonusEat => {
                    self.blip(ctx, vol * 0.4, 660.0, 1320.0, 0.15, OscillatorType::Triangle)
                }
                SoundEffect::BonusAppear => {
                    self.blip(ctx, vol * 0.2, 880.0, 990.0, 0.1, OscillatorType::Sine)
                }
                SoundEffect::SlowDown => {
                    self.blip(ctx, vol * 0.4, 440.0, 110.0, 0.4, OscillatorType::Sine)
                }
                SoundEffect::ScoreChime => {
                    self.blip(ctx, vol * 0.35, 990.0, 1480.0, 0.2, OscillatorType::Triangle)
                }
                SoundEffect::GameOver => {
                    self.blip(ctx, vol * 0.5, 300.0, 60.0, 0.6, OscillatorType::Sawtooth)
                }
            }
        }

        /// Create an oscillator with gain envelope
        fn create_osc(
            &self,
            ctx: &AudioContext,
            freq: f32,
            osc_type: OscillatorType,
        ) -> Option<(OscillatorNode, GainNode)> {
            let osc = ctx.create_oscillator().ok()?;
            let gain = ctx.create_gain().ok()?;

            osc.set_type(osc_type);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            Some((osc, gain))
        }

        /// Single tone sweeping from `from` to `to` Hz with an exponential fade
        fn blip(
            &self,
            ctx: &AudioContext,
            gain_level: f32,
            from: f32,
            to: f32,
            duration: f64,
            osc_type: OscillatorType,
        ) {
            let Some((osc, gain)) = self.create_osc(ctx, from, osc_type) else {
                return;
            };
            let t = ctx.current_time();

            gain.gain().set_value_at_time(gain_level, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + duration)
                .ok();
            osc.frequency().set_value_at_time(from, t).ok();
            osc.frequency()
                .exponential_ramp_to_value_at_time(to, t + duration)
                .ok();

            osc.start().ok();
            osc.stop_with_when(t + duration + 0.05).ok();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::CollisionKind;
    use glam::IVec2;

    #[test]
    fn test_event_sounds() {
        assert_eq!(
            SoundEffect::for_event(&GameEvent::FoodEaten {
                pos: IVec2::new(1, 1)
            }),
            Some(SoundEffect::Eat)
        );
        assert_eq!(
            SoundEffect::for_event(&GameEvent::PowerUpEaten {
                kind: PowerUpKind::Slow
            }),
            Some(SoundEffect::SlowDown)
        );
        assert_eq!(
            SoundEffect::for_event(&GameEvent::GameOver {
                score: 10,
                cause: CollisionKind::Wall
            }),
            Some(SoundEffect::GameOver)
        );
        assert_eq!(
            SoundEffect::for_event(&GameEvent::IntervalChanged { ms: 140 }),
            None
        );
    }
}
