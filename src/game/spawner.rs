use super::grid::{random_cell, GridPosition};
use crate::consts;
use rand::Rng;
use std::collections::HashSet;

/// Places food, obstacles, and powerups at random grid cells away from the
/// edges of the playfield.
///
/// Nothing checks whether a chosen cell is already occupied: food may land on
/// an obstacle or on the snake, and two obstacles may land on the same cell.
#[derive(Clone, Debug)]
pub(crate) struct Spawner<R> {
    rng: R,
}

impl<R: Rng> Spawner<R> {
    pub(crate) fn new(rng: R) -> Spawner<R> {
        Spawner { rng }
    }

    pub(crate) fn spawn_food(&mut self) -> GridPosition {
        self.spawn()
    }

    /// Make `count` placement attempts.  Attempts landing on the same cell
    /// collapse into a single obstacle.
    pub(crate) fn spawn_obstacles(&mut self, count: usize) -> HashSet<GridPosition> {
        (0..count).map(|_| self.spawn()).collect()
    }

    pub(crate) fn spawn_powerup(&mut self) -> GridPosition {
        self.spawn()
    }

    fn spawn(&mut self) -> GridPosition {
        random_cell(&mut self.rng, consts::SPAWN_MARGIN_CELLS)
    }
}
