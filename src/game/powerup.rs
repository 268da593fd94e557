use crate::consts;
use std::time::Duration;

/// Countdown for the effect of a collected powerup.  While active, the snake
/// moves faster and passes through obstacles.
///
/// An active timer always has time remaining; it turns inactive at the moment
/// its remaining time would reach zero.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum PowerupTimer {
    #[default]
    Inactive,
    Active {
        remaining: Duration,
    },
}

impl PowerupTimer {
    /// Start (or restart) the full powerup window.  Collecting while a
    /// window is already running resets it rather than extending it.
    pub(crate) fn collect(&mut self) {
        *self = PowerupTimer::Active {
            remaining: consts::POWERUP_DURATION,
        };
    }

    /// Count down by `elapsed`.  Returns `true` if the window ran out on this
    /// call.
    pub(crate) fn tick(&mut self, elapsed: Duration) -> bool {
        let PowerupTimer::Active { remaining } = *self else {
            return false;
        };
        let remaining = remaining.saturating_sub(elapsed);
        if remaining.is_zero() {
            *self = PowerupTimer::Inactive;
            true
        } else {
            *self = PowerupTimer::Active { remaining };
            false
        }
    }

    pub(crate) fn is_active(self) -> bool {
        matches!(self, PowerupTimer::Active { .. })
    }

    /// Time left in the current window; zero when inactive
    pub(crate) fn remaining(self) -> Duration {
        match self {
            PowerupTimer::Inactive => Duration::ZERO,
            PowerupTimer::Active { remaining } => remaining,
        }
    }

    /// Minimum time between two moves of the snake
    pub(crate) fn move_delay(self) -> Duration {
        if self.is_active() {
            consts::POWERUP_MOVE_DELAY
        } else {
            consts::MOVE_DELAY
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_inactive() {
        let timer = PowerupTimer::default();
        assert!(!timer.is_active());
        assert_eq!(timer.remaining(), Duration::ZERO);
        assert_eq!(timer.move_delay(), Duration::from_millis(200));
    }

    #[test]
    fn collect_activates() {
        let mut timer = PowerupTimer::default();
        timer.collect();
        assert!(timer.is_active());
        assert_eq!(timer.remaining(), Duration::from_millis(5000));
        assert_eq!(timer.move_delay(), Duration::from_millis(120));
    }

    #[test]
    fn expires_exactly_at_duration() {
        let mut timer = PowerupTimer::default();
        timer.collect();
        for _ in 0..49 {
            assert!(!timer.tick(Duration::from_millis(100)));
            assert!(timer.is_active());
        }
        assert_eq!(timer.remaining(), Duration::from_millis(100));
        assert!(timer.tick(Duration::from_millis(100)));
        assert_eq!(timer, PowerupTimer::Inactive);
    }

    #[test]
    fn expires_on_first_tick_crossing_duration() {
        let mut timer = PowerupTimer::default();
        timer.collect();
        assert!(!timer.tick(Duration::from_millis(4990)));
        assert!(timer.tick(Duration::from_millis(16)));
        assert!(!timer.is_active());
        assert_eq!(timer.remaining(), Duration::ZERO);
    }

    #[test]
    fn recollecting_resets_rather_than_extends() {
        let mut timer = PowerupTimer::default();
        timer.collect();
        timer.tick(Duration::from_millis(3000));
        timer.collect();
        assert_eq!(timer.remaining(), Duration::from_millis(5000));
    }

    #[test]
    fn inactive_tick_is_noop() {
        let mut timer = PowerupTimer::default();
        assert!(!timer.tick(Duration::from_millis(1000)));
        assert_eq!(timer, PowerupTimer::Inactive);
    }
}
