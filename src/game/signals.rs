use super::grid::GridPosition;
use std::collections::VecDeque;

/// Receiver for the outcomes of [`Game::on_tick()`][super::Game::on_tick].
///
/// Whatever draws the game, shows the score, or plays sounds implements this.
/// Every method does nothing by default.
pub(crate) trait Presenter {
    /// The snake has made one move
    fn on_snake_moved(&mut self, _head: GridPosition, _body: &VecDeque<GridPosition>) {}

    fn on_score_changed(&mut self, _score: u32) {}

    fn on_food_eaten(&mut self) {}

    fn on_powerup_collected(&mut self) {}

    /// The round has ended.  Called at most once per round.
    fn on_game_over(&mut self) {}
}

/// A presenter that ignores everything
impl Presenter for () {}
