use crate::consts;
use std::time::{Duration, Instant};

/// Turns wall-clock instants into the play time and frame deltas fed to
/// [`Game::on_tick()`][crate::game::Game::on_tick].
///
/// Play time only advances between frames of an unpaused game.  After
/// [`FrameClock::pause()`], the next frame has a delta of zero.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(super) struct FrameClock {
    /// Total play time so far
    elapsed: Duration,
    /// When the most recent frame happened, or `None` if the clock has not
    /// started or is paused
    last_frame: Option<Instant>,
}

impl FrameClock {
    pub(super) fn new() -> FrameClock {
        FrameClock::default()
    }

    /// Play time as of the most recent frame
    pub(super) fn now(&self) -> Duration {
        self.elapsed
    }

    /// How long to wait after `now` for the next frame
    pub(super) fn until_next_frame(&self, now: Instant) -> Duration {
        match self.last_frame {
            Some(last) => (last + consts::FRAME_PERIOD).saturating_duration_since(now),
            None => Duration::ZERO,
        }
    }

    /// Record a frame happening at `now` and return the play time and the
    /// time since the previous frame
    pub(super) fn frame(&mut self, now: Instant) -> (Duration, Duration) {
        let delta = self
            .last_frame
            .map_or(Duration::ZERO, |last| now.saturating_duration_since(last));
        self.last_frame = Some(now);
        self.elapsed += delta;
        (self.elapsed, delta)
    }

    /// Stop counting time until the next frame
    pub(super) fn pause(&mut self) {
        self.last_frame = None;
    }
}
