use crate::consts;
use crate::game::{GridPosition, Presenter};
use std::collections::VecDeque;

/// Heads-up display state driven by the game's outbound signals: the score
/// shown in the score bar and the latest notice shown below the playfield
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(super) struct Hud {
    score: u32,
    notice: Option<Notice>,
    /// Moves left before `notice` is cleared
    notice_moves: u8,
}

impl Hud {
    pub(super) fn score(&self) -> u32 {
        self.score
    }

    pub(super) fn notice(&self) -> Option<Notice> {
        self.notice
    }

    fn announce(&mut self, notice: Notice) {
        self.notice = Some(notice);
        self.notice_moves = consts::NOTICE_MOVES;
    }
}

impl Presenter for Hud {
    fn on_snake_moved(&mut self, _head: GridPosition, _body: &VecDeque<GridPosition>) {
        self.notice_moves = self.notice_moves.saturating_sub(1);
        if self.notice_moves == 0 && self.notice != Some(Notice::GameOver) {
            self.notice = None;
        }
    }

    fn on_score_changed(&mut self, score: u32) {
        self.score = score;
    }

    fn on_food_eaten(&mut self) {
        self.announce(Notice::FoodEaten);
    }

    fn on_powerup_collected(&mut self) {
        self.announce(Notice::PowerupCollected);
    }

    fn on_game_over(&mut self) {
        self.announce(Notice::GameOver);
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Notice {
    FoodEaten,
    PowerupCollected,
    GameOver,
}

impl Notice {
    pub(super) fn message(self) -> &'static str {
        match self {
            Notice::FoodEaten => " Yum! +10",
            Notice::PowerupCollected => " POWERUP! +50: faster and unstoppable for 5 seconds",
            Notice::GameOver => " — GAME OVER —",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moved(hud: &mut Hud) {
        hud.on_snake_moved(GridPosition::new(400, 300), &VecDeque::new());
    }

    #[test]
    fn score_follows_signal() {
        let mut hud = Hud::default();
        assert_eq!(hud.score(), 0);
        hud.on_score_changed(60);
        assert_eq!(hud.score(), 60);
    }

    #[test]
    fn notice_fades_after_moves() {
        let mut hud = Hud::default();
        moved(&mut hud);
        hud.on_food_eaten();
        for _ in 1..consts::NOTICE_MOVES {
            moved(&mut hud);
            assert_eq!(hud.notice(), Some(Notice::FoodEaten));
        }
        moved(&mut hud);
        assert_eq!(hud.notice(), None);
    }

    #[test]
    fn newer_notice_replaces_older() {
        let mut hud = Hud::default();
        hud.on_food_eaten();
        hud.on_powerup_collected();
        assert_eq!(hud.notice(), Some(Notice::PowerupCollected));
    }

    #[test]
    fn game_over_notice_stays() {
        let mut hud = Hud::default();
        hud.on_game_over();
        for _ in 0..20 {
            moved(&mut hud);
        }
        assert_eq!(hud.notice(), Some(Notice::GameOver));
    }
}
