use std::collections::HashMap;

use block_breaker::audio::{AudioError, Cue, CuePlayer, LogCuePlayer, play_cues};
use block_breaker::renderer::{AsciiRenderer, draw};
use block_breaker::sim::{GameEvent, Outcome, RoundState, TickInput, tick, update};
use block_breaker::RoundConfig;
use glam::Vec2;

/// Standard block dead ahead of the ball, reinforced one out of the way
const ONE_HIT_BOARD: &str = r#"{
    "ball": { "pos": [120.0, 130.0], "vel": [0.0, -4.0] },
    "layout": { "blocks": [
        { "pos": [100.0, 100.0], "size": [52.0, 20.0] },
        { "pos": [250.0, 60.0], "size": [52.0, 20.0], "hp": 2, "points": 20 }
    ] },
    "messages": { "cleared": "Well played", "over": "Out of balls" }
}"#;

#[derive(Default)]
struct Recording(Vec<Cue>);

impl CuePlayer for Recording {
    fn play(&mut self, cue: Cue) -> Result<(), AudioError> {
        self.0.push(cue);
        Ok(())
    }
}

#[test]
fn test_classic_round_defaults() {
    let state = RoundState::new(&RoundConfig::default());
    assert_eq!(state.blocks.len(), 4);
    assert_eq!(state.blocks.active_count(), 4);
    assert_eq!(state.outcome(), Outcome::Ongoing);
    assert!(state.is_active());
    assert_eq!(state.result_message(), None);
    assert_eq!(state.ball.pos, Vec2::new(20.0, 440.0));
}

#[test]
fn test_block_hit_fires_one_cue() {
    let config = RoundConfig::from_json(ONE_HIT_BOARD).unwrap();
    let mut state = RoundState::new(&config);
    let mut cues = Recording::default();

    // Ball at y 130 moving up reaches the block's grown box (y < 122) on tick 3
    for _ in 0..3 {
        update(&mut state);
    }
    let events = state.drain_events();
    play_cues(&events, &mut cues);

    assert_eq!(cues.0, vec![Cue::BlockHit]);
    assert_eq!(state.score.value(), 10);
    assert!(!state.blocks.get(0).unwrap().active);
    assert!(state.blocks.get(1).unwrap().active);
    assert_eq!(state.ball.vel, Vec2::new(0.0, 4.0));
}

#[test]
fn test_keyboard_drives_paddle() {
    let mut state = RoundState::default();
    let mut keys: HashMap<&str, bool> = HashMap::new();
    keys.insert("ArrowLeft", true);

    for _ in 0..10 {
        tick(&mut state, &TickInput::from_keys(&keys));
    }
    // 30 -> 0, clamped at the wall
    assert_eq!(state.paddle.pos.x, 0.0);
    assert!(state.drain_events().contains(&GameEvent::PaddleClamped));

    keys.insert("ArrowLeft", false);
    keys.insert("Right", true);
    tick(&mut state, &TickInput::from_keys(&keys));
    assert_eq!(state.paddle.pos.x, 5.0);
}

#[test]
fn test_missed_ball_ends_round() {
    let mut config = RoundConfig::from_json(ONE_HIT_BOARD).unwrap();
    config.ball.pos = Vec2::new(200.0, 400.0);
    config.ball.vel = Vec2::new(0.0, 5.0);
    let mut state = RoundState::new(&config);

    for _ in 0..100 {
        tick(&mut state, &TickInput::default());
    }
    assert_eq!(state.outcome(), Outcome::Over);
    assert_eq!(state.result_message(), Some("Out of balls"));
    let events = state.drain_events();
    assert_eq!(
        events.iter().filter(|e| **e == GameEvent::RoundOver).count(),
        1
    );

    let mut screen = AsciiRenderer::new(&state.playfield, 32, 24);
    draw(&state, &mut screen);
    assert!(screen.frame().ends_with("SCORE 0  Out of balls"));
}

#[test]
fn test_clearing_the_board() {
    let json = r#"{
        "ball": { "pos": [120.0, 130.0], "vel": [0.0, -4.0] },
        "layout": { "blocks": [ { "pos": [100.0, 100.0], "size": [52.0, 20.0], "points": 15 } ] }
    }"#;
    let config = RoundConfig::from_json(json).unwrap();
    let mut state = RoundState::new(&config);
    let mut cues = LogCuePlayer::new(config.audio.clone());

    while state.is_active() && state.time_ticks < 50 {
        tick(&mut state, &TickInput::default());
        let events = state.drain_events();
        play_cues(&events, &mut cues);
    }

    assert_eq!(state.outcome(), Outcome::Cleared);
    assert_eq!(state.result_message(), Some("GAME CLEAR"));
    assert_eq!(state.score.value(), 15);
    assert_eq!(cues.history().len(), 1);
    assert_eq!(cues.history()[0].1, "sounds/bomb.mp3");
}

#[test]
fn test_snapshot_round_trips_through_json() {
    let mut state = RoundState::default();
    for _ in 0..20 {
        update(&mut state);
    }
    let json = serde_json::to_string(&state).unwrap();
    let restored: RoundState = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.ball, state.ball);
    assert_eq!(restored.blocks, state.blocks);
    assert_eq!(restored.time_ticks, 20);
    assert!(restored.pending_events().is_empty());
}
