//! Sound cues
//!
//! The simulation never plays audio itself. After each tick the driver hands
//! the drained events to [`play_cues`], which forwards them to a [`CuePlayer`].
//! Playback is best-effort: failures are logged and dropped.

use thiserror::Error;

use crate::settings::AudioConfig;
use crate::sim::GameEvent;

/// Sound cue types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// Ball hits paddle
    PaddleHit,
    /// Ball hits block (damaged or destroyed)
    BlockHit,
}

impl Cue {
    /// The cue an event should trigger, if any
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::PaddleHit => Some(Cue::PaddleHit),
            GameEvent::BlockHit { .. } => Some(Cue::BlockHit),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("no asset configured for {0:?}")]
    MissingAsset(Cue),
    #[error("playback failed: {0}")]
    Playback(String),
}

/// Fire-and-forget cue output
pub trait CuePlayer {
    fn play(&mut self, cue: Cue) -> Result<(), AudioError>;
}

/// Forward cue-worthy events to `player`. Returns the number of cues the
/// player accepted, which includes cues a muted player swallows silently.
pub fn play_cues(events: &[GameEvent], player: &mut impl CuePlayer) -> usize {
    let mut accepted = 0;
    for cue in events.iter().filter_map(Cue::for_event) {
        match player.play(cue) {
            Ok(()) => accepted += 1,
            Err(e) => log::warn!("Dropped {:?} cue: {}", cue, e),
        }
    }
    accepted
}

/// Cue player for headless runs: resolves assets and logs instead of playing
#[derive(Debug, Clone)]
pub struct LogCuePlayer {
    config: AudioConfig,
    played: Vec<(Cue, String)>,
}

impl LogCuePlayer {
    pub fn new(config: AudioConfig) -> Self {
        Self {
            config,
            played: Vec::new(),
        }
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.config.muted {
            0.0
        } else {
            self.config.volume.clamp(0.0, 1.0)
        }
    }

    fn asset(&self, cue: Cue) -> &str {
        match cue {
            Cue::PaddleHit => &self.config.paddle_hit,
            Cue::BlockHit => &self.config.block_hit,
        }
    }

    /// Cues actually played (not muted) with their asset paths
    pub fn history(&self) -> &[(Cue, String)] {
        &self.played
    }
}

impl CuePlayer for LogCuePlayer {
    fn play(&mut self, cue: Cue) -> Result<(), AudioError> {
        let asset = self.asset(cue);
        if asset.is_empty() {
            return Err(AudioError::MissingAsset(cue));
        }
        let vol = self.effective_volume();
        // Muted is not a failure: accept the cue, record nothing
        if vol <= 0.0 {
            return Ok(());
        }
        log::debug!("Cue {:?}: {} @ {:.2}", cue, asset, vol);
        let asset = asset.to_string();
        self.played.push((cue, asset));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Failing;

    impl CuePlayer for Failing {
        fn play(&mut self, _cue: Cue) -> Result<(), AudioError> {
            Err(AudioError::Playback("device lost".to_string()))
        }
    }

    fn events() -> Vec<GameEvent> {
        vec![
            GameEvent::PaddleHit,
            GameEvent::PaddleClamped,
            GameEvent::BlockHit {
                index: 0,
                destroyed: false,
                points: 0,
            },
            GameEvent::RoundOver,
        ]
    }

    #[test]
    fn test_cue_mapping() {
        let cues: Vec<Cue> = events().iter().filter_map(Cue::for_event).collect();
        assert_eq!(cues, vec![Cue::PaddleHit, Cue::BlockHit]);
    }

    #[test]
    fn test_log_player_records_assets() {
        let mut player = LogCuePlayer::new(AudioConfig::default());
        assert_eq!(play_cues(&events(), &mut player), 2);
        assert_eq!(player.history()[0], (Cue::PaddleHit, "sounds/move.mp3".to_string()));
        assert_eq!(player.history()[1], (Cue::BlockHit, "sounds/bomb.mp3".to_string()));
    }

    #[test]
    fn test_failures_are_swallowed() {
        assert_eq!(play_cues(&events(), &mut Failing), 0);
    }

    #[test]
    fn test_missing_asset_is_an_error() {
        let config = AudioConfig {
            block_hit: String::new(),
            ..AudioConfig::default()
        };
        let mut player = LogCuePlayer::new(config);
        assert!(matches!(
            player.play(Cue::BlockHit),
            Err(AudioError::MissingAsset(Cue::BlockHit))
        ));
        assert_eq!(play_cues(&events(), &mut player), 1);
    }

    #[test]
    fn test_muted_player_plays_nothing() {
        let config = AudioConfig {
            muted: true,
            ..AudioConfig::default()
        };
        let mut player = LogCuePlayer::new(config);
        assert_eq!(play_cues(&events(), &mut player), 2);
        assert!(player.history().is_empty());
    }

    #[test]
    fn test_zero_volume_accepts_without_playing() {
        let config = AudioConfig {
            volume: 0.0,
            ..AudioConfig::default()
        };
        let mut player = LogCuePlayer::new(config);
        assert!(player.play(Cue::PaddleHit).is_ok());
        assert!(player.history().is_empty());
    }
}
