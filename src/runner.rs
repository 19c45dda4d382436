//! Frame scheduling
//!
//! The host calls [`RoundRunner::frame`] once per display frame with the
//! current wall-clock time. The runner keeps the one-second countdown
//! independent of the frame rate, feeds queued input into the tick, and
//! refuses to tick again once the round is over.

use std::cell::Cell;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::sim::autoplay;
use crate::sim::{GameEvent, GamePhase, GameState, Playfield, TickInput};
use crate::sim::{second_elapsed, start_round, tick};

/// Milliseconds per countdown step
const SECOND_MS: f64 = 1000.0;

/// Source of wall-clock milliseconds
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Milliseconds since the Unix epoch
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs_f64() * 1000.0)
            .unwrap_or(0.0)
    }
}

/// Hand-driven clock for headless runs and tests
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn new(start_ms: f64) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by.as_secs_f64() * 1000.0);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

/// Drives one session: frames, countdown and input
#[derive(Debug)]
pub struct RoundRunner {
    pub state: GameState,
    input: TickInput,
    /// Wall-clock time not yet spent on the countdown
    timer_accumulator: f64,
    last_time: Option<f64>,
    frames: u64,
    running: bool,
    autoplay: bool,
}

impl RoundRunner {
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            input: TickInput::default(),
            timer_accumulator: 0.0,
            last_time: None,
            frames: 0,
            running: false,
            autoplay: false,
        }
    }

    /// Let the demo player fire the hook
    pub fn set_autoplay(&mut self, enabled: bool) {
        self.autoplay = enabled;
    }

    /// Start (or restart) a round and begin scheduling frames
    pub fn start(&mut self, playfield: Playfield) -> bool {
        if !start_round(&mut self.state, playfield) {
            return false;
        }
        self.input = TickInput::default();
        self.timer_accumulator = 0.0;
        self.last_time = None;
        self.frames = 0;
        self.running = true;
        true
    }

    /// Queue a shot from the input handler; applied on the next frame
    pub fn request_shoot(&mut self) {
        self.input.shoot = true;
    }

    /// Whether frames are still being scheduled
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Frames ticked this round
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one frame. Returns false once the round has ended; no tick happens then.
    pub fn frame(&mut self, now_ms: f64) -> bool {
        if !self.running {
            return false;
        }

        let dt = self.last_time.map_or(0.0, |last| (now_ms - last).max(0.0));
        self.last_time = Some(now_ms);

        self.timer_accumulator += dt;
        while self.timer_accumulator >= SECOND_MS && self.state.phase == GamePhase::Playing {
            second_elapsed(&mut self.state);
            self.timer_accumulator -= SECOND_MS;
        }

        if self.state.phase != GamePhase::Playing {
            self.running = false;
            return false;
        }

        if self.autoplay && autoplay::should_shoot(&self.state) {
            self.input.shoot = true;
        }

        tick(&mut self.state, &self.input, now_ms);
        self.frames += 1;

        // Clear one-shot inputs after processing
        self.input = TickInput::default();
        true
    }

    /// Schedule frames every `frame` until the round ends, calling `wait`
    /// between frames and `on_event` for every event. Returns the final score.
    pub fn run<C, W, E>(&mut self, clock: &C, frame: Duration, mut wait: W, mut on_event: E) -> u64
    where
        C: Clock,
        W: FnMut(Duration),
        E: FnMut(&GameEvent),
    {
        loop {
            let alive = self.frame(clock.now_ms());
            for event in self.state.drain_events() {
                on_event(&event);
            }
            if !alive {
                break;
            }
            wait(frame);
        }
        self.state.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::HookStatus;
    use crate::tuning::GameConfig;

    const FRAME: Duration = Duration::from_millis(16);

    fn runner() -> RoundRunner {
        let mut runner = RoundRunner::new(GameState::new(11, GameConfig::default()));
        assert!(runner.start(Playfield::new(1024.0, 768.0)));
        runner
    }

    #[test]
    fn test_countdown_follows_wall_clock() {
        let clock = ManualClock::new(0.0);
        let mut runner = runner();
        runner.frame(clock.now_ms());
        clock.advance(Duration::from_millis(2500));
        runner.frame(clock.now_ms());
        assert_eq!(runner.state.time_remaining, 28);
    }

    #[test]
    fn test_round_ends_and_ticks_stop() {
        let clock = ManualClock::new(0.0);
        let mut runner = runner();
        let mut ended = None;
        let score = runner.run(&clock, FRAME, |d| clock.advance(d), |ev| {
            if let GameEvent::RoundEnded { final_score } = ev {
                ended = Some(*final_score);
            }
        });

        assert_eq!(runner.state.phase, GamePhase::GameOver);
        assert_eq!(ended, Some(score));
        assert!(!runner.is_running());

        let frames = runner.frames();
        clock.advance(FRAME);
        assert!(!runner.frame(clock.now_ms()));
        assert_eq!(runner.frames(), frames);
    }

    #[test]
    fn test_queued_shot_applies_next_frame() {
        let mut runner = runner();
        runner.frame(0.0);
        runner.request_shoot();
        assert_eq!(runner.state.hook.status, HookStatus::Swinging);
        runner.frame(16.0);
        assert_eq!(runner.state.hook.status, HookStatus::Extending);
    }

    #[test]
    fn test_not_started_does_nothing() {
        let mut runner = RoundRunner::new(GameState::new(1, GameConfig::default()));
        assert!(!runner.start(Playfield::default()));
        assert!(!runner.frame(0.0));
        assert_eq!(runner.frames(), 0);
    }

    #[test]
    fn test_autoplay_scores() {
        let clock = ManualClock::new(0.0);
        let mut runner = runner();
        runner.set_autoplay(true);
        let score = runner.run(&clock, FRAME, |d| clock.advance(d), |_| {});
        assert!(score > 0);
    }
}
