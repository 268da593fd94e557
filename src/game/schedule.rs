use std::fmt;
use std::time::Duration;

/// Identifies one round of play.  Each restart gets a fresh id.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) struct RoundId(u64);

impl RoundId {
    pub(crate) const FIRST: RoundId = RoundId(0);

    pub(crate) fn next(self) -> RoundId {
        RoundId(self.0 + 1)
    }
}

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Something to do later
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Task {
    /// Place a new powerup on the playfield
    RespawnPowerup,
}

/// A [`Task`] together with when it should run and the round that asked for
/// it
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Scheduled {
    pub(crate) due: Duration,
    pub(crate) round: RoundId,
    pub(crate) task: Task,
}

/// Deferred tasks waiting for the game clock.
///
/// Tasks are never cancelled.  Whoever runs a task compares its `round`
/// against the current round and drops it if they differ.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Schedule {
    pending: Vec<Scheduled>,
}

impl Schedule {
    pub(crate) fn schedule(&mut self, due: Duration, round: RoundId, task: Task) {
        self.pending.push(Scheduled { due, round, task });
    }

    /// Remove and return every task due at or before `now`, earliest first
    pub(crate) fn take_due(&mut self, now: Duration) -> Vec<Scheduled> {
        let (mut due, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|s| s.due <= now);
        self.pending = pending;
        due.sort_by_key(|s| s.due);
        due
    }

    pub(crate) fn len(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn nothing_due_early() {
        let mut schedule = Schedule::default();
        schedule.schedule(
            Duration::from_millis(10200),
            RoundId::FIRST,
            Task::RespawnPowerup,
        );
        assert!(schedule.take_due(Duration::from_millis(10199)).is_empty());
        assert_eq!(schedule.len(), 1);
    }

    #[test]
    fn due_tasks_come_out_in_order() {
        let mut schedule = Schedule::default();
        let second = RoundId::FIRST.next();
        schedule.schedule(Duration::from_millis(300), second, Task::RespawnPowerup);
        schedule.schedule(Duration::from_millis(900), second, Task::RespawnPowerup);
        schedule.schedule(
            Duration::from_millis(100),
            RoundId::FIRST,
            Task::RespawnPowerup,
        );
        assert_eq!(
            schedule.take_due(Duration::from_millis(300)),
            vec![
                Scheduled {
                    due: Duration::from_millis(100),
                    round: RoundId::FIRST,
                    task: Task::RespawnPowerup,
                },
                Scheduled {
                    due: Duration::from_millis(300),
                    round: second,
                    task: Task::RespawnPowerup,
                },
            ]
        );
        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule.take_due(Duration::from_millis(900)).len(), 1);
        assert_eq!(schedule.len(), 0);
    }

    #[test]
    fn round_ids_increase() {
        let first = RoundId::FIRST;
        assert!(first.next() > first);
        assert_ne!(first.next(), first.next().next());
        assert_eq!(first.next().to_string(), "#1");
    }
}
