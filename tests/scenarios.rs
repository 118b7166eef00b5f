//! End-to-end gameplay scenarios through the public engine API

use bear_snake::platform::{ManualScheduler, Scheduler};
use bear_snake::sim::{
    BonusFood, CollisionKind, Direction, GameEvent, GamePhase, PowerUp, PowerUpKind, autopilot,
};
use bear_snake::{Command, Engine, Tuning};
use glam::IVec2;

fn cells(list: &[(i32, i32)]) -> std::collections::VecDeque<IVec2> {
    list.iter().map(|&(x, y)| IVec2::new(x, y)).collect()
}

#[test]
fn eating_food_grows_and_scores() {
    let mut engine = Engine::new(7, ManualScheduler::new());
    engine.start();
    engine.state_mut().food = Some(IVec2::new(16, 15));

    assert_eq!(engine.advance(150), 1);

    let snap = engine.snapshot();
    assert_eq!(snap.score, 10);
    assert_eq!(
        snap.snake,
        vec![
            IVec2::new(16, 15),
            IVec2::new(15, 15),
            IVec2::new(14, 15),
            IVec2::new(13, 15)
        ]
    );
    let food = snap.food.unwrap();
    assert!(!snap.snake.contains(&food));
}

#[test]
fn leaving_the_left_edge_ends_the_game() {
    let mut engine = Engine::new(7, ManualScheduler::new());
    engine.start();
    {
        let state = engine.state_mut();
        state.snake = cells(&[(0, 4), (1, 4), (2, 4)]);
        state.direction = Direction::Left;
        state.last_direction = Direction::Left;
        state.score = 120;
    }
    let before = engine.snapshot();

    engine.tick();

    let after = engine.snapshot();
    assert_eq!(after.phase, GamePhase::GameOver);
    assert_eq!(after.score, before.score);
    assert_eq!(after.snake, before.snake);
    assert!(!engine.scheduler().is_running());
    assert!(engine.drain_events().contains(&GameEvent::GameOver {
        score: 120,
        cause: CollisionKind::Wall
    }));
}

#[test]
fn speed_clamps_at_floor() {
    let mut engine = Engine::new(11, ManualScheduler::new());
    engine.start();
    engine.state_mut().score = 490;
    engine.state_mut().interval_ms = 80;
    engine.state_mut().food = Some(IVec2::new(16, 15));

    engine.tick();

    assert_eq!(engine.state().score, 500);
    assert_eq!(engine.state().interval_ms, 80);
}

#[test]
fn slow_power_up_stretches_interval() {
    let quiet = Tuning {
        food_score: 0,
        bonus_chance: 0.0,
        power_up_chance: 0.0,
        ..Default::default()
    };
    let mut engine = Engine::with_tuning(3, quiet, ManualScheduler::new()).unwrap();
    engine.start();
    {
        let state = engine.state_mut();
        state.score = 250;
        state.interval_ms = 100;
        state.food = Some(IVec2::new(0, 29));
        state.power_up = Some(PowerUp {
            kind: PowerUpKind::Slow,
            pos: IVec2::new(16, 15),
            ttl_ticks: 200,
        });
    }

    engine.tick();

    assert!(engine.snapshot().slow_motion);
    assert_eq!(engine.scheduler().interval_ms(), Some(150));
    assert!(engine.drain_events().contains(&GameEvent::PowerUpEaten {
        kind: PowerUpKind::Slow
    }));
}

#[test]
fn bonus_food_scores_fifty() {
    let mut engine = Engine::new(5, ManualScheduler::new());
    engine.start();
    engine.state_mut().food = Some(IVec2::new(0, 0));
    engine.state_mut().bonus = Some(BonusFood {
        pos: IVec2::new(16, 15),
        ticks_left: 10,
    });

    engine.tick();

    assert_eq!(engine.state().score, 50);
    assert_eq!(engine.state().snake.len(), 4);
    assert!(engine.snapshot().bonus.is_none());
}

#[test]
fn reversal_is_ignored_at_input() {
    let mut engine = Engine::new(1, ManualScheduler::new());
    engine.start();
    engine.state_mut().food = Some(IVec2::new(0, 0));

    assert!(!engine.set_direction(-1, 0));
    engine.tick();
    assert_eq!(engine.phase(), GamePhase::Running);
    assert_eq!(engine.state().head(), IVec2::new(16, 15));
}

#[test]
fn reset_after_game_over_allows_new_game() {
    let mut engine = Engine::new(9, ManualScheduler::new());
    engine.apply(Command::Start);
    engine.state_mut().direction = Direction::Up;
    engine.state_mut().food = Some(IVec2::new(0, 0));
    while engine.phase() == GamePhase::Running {
        engine.tick();
    }
    assert_eq!(engine.phase(), GamePhase::GameOver);

    // Start is a no-op until reset
    engine.apply(Command::Start);
    assert_eq!(engine.phase(), GamePhase::GameOver);

    engine.apply(Command::Reset);
    assert_eq!(engine.phase(), GamePhase::Idle);
    assert_eq!(engine.state().score, 0);
    assert_eq!(engine.scheduler().interval_ms(), None);

    engine.apply(Command::Start);
    assert_eq!(engine.phase(), GamePhase::Running);
    assert_eq!(engine.scheduler().interval_ms(), Some(150));
}

#[test]
fn demo_game_runs_to_completion() {
    let mut engine = Engine::new(31337, ManualScheduler::new());
    engine.start();
    let mut last_score = 0;
    for _ in 0..3000 {
        if engine.phase() != GamePhase::Running {
            break;
        }
        autopilot::steer(engine.state_mut());
        let wait = engine.scheduler().until_next_ms().unwrap_or(0);
        engine.advance(wait);
        assert!(engine.state().score >= last_score);
        last_score = engine.state().score;
    }
    assert!(last_score > 0);
}

#[test]
fn snapshot_serializes_for_host() {
    let mut engine = Engine::new(2, ManualScheduler::new());
    engine.start();
    let json = engine.snapshot().to_json().unwrap();
    assert!(json.contains("\"phase\":\"Running\""));
    assert!(json.contains("\"score\":0"));
}
