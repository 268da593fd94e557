mod clock;
mod hud;
mod paused;
use self::clock::FrameClock;
use self::hud::{Hud, Notice};
use self::paused::{PauseOpt, Paused};
use crate::app::Screen;
use crate::command::Command;
use crate::consts;
use crate::game::{Direction, Game, GridPosition, RoundState};
use crate::util::{center_rect, get_display_area};
use crossterm::event::{poll, read, Event};
use rand::{rngs::StdRng, Rng};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Position, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
    Frame,
};
use std::time::Instant;
use tracing::info;

/// The game screen: drives a [`Game`] from the terminal's clock and keyboard
/// and draws it
#[derive(Clone, Debug)]
pub(crate) struct Play<R = StdRng> {
    game: Game<R>,
    clock: FrameClock,
    hud: Hud,
    state: PlayState,
}

impl<R: Rng> Play<R> {
    pub(crate) fn new(rng: R, obstacle_count: usize) -> Play<R> {
        Play {
            game: Game::new(rng, obstacle_count),
            clock: FrameClock::new(),
            hud: Hud::default(),
            state: PlayState::Running,
        }
    }

    /// Wait for either the next frame or an input event, whichever comes
    /// first, and handle it.  Returns `Some` if the application should move to
    /// another screen.
    pub(crate) fn process_input(&mut self) -> std::io::Result<Option<Screen>> {
        if self.ticking() {
            let wait = self.clock.until_next_frame(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                let (now, delta) = self.clock.frame(Instant::now());
                self.game.on_tick(now, delta, &mut self.hud);
                Ok(None)
            } else {
                Ok(self.handle_event(read()?))
            }
        } else {
            self.clock.pause();
            Ok(self.handle_event(read()?))
        }
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        match self.state {
            PlayState::Running if self.game.state().running() => {
                if event == Event::FocusLost {
                    self.pause();
                } else {
                    match Command::from_key_event(event.as_key_press_event()?)? {
                        Command::Quit => return Some(Screen::Quit),
                        Command::Up => self.game.on_direction_input(Direction::Up),
                        Command::Down => self.game.on_direction_input(Direction::Down),
                        Command::Left => self.game.on_direction_input(Direction::Left),
                        Command::Right => self.game.on_direction_input(Direction::Right),
                        Command::Esc => self.pause(),
                        _ => (),
                    }
                }
            }
            PlayState::Running => match Command::from_key_event(event.as_key_press_event()?)? {
                Command::R => self.restart(),
                Command::Quit | Command::Q => return Some(Screen::Quit),
                _ => (),
            },
            PlayState::Paused(ref mut paused) => match paused.handle_event(event)? {
                PauseOpt::Resume => self.state = PlayState::Running,
                PauseOpt::Restart => self.restart(),
                PauseOpt::Quit => return Some(Screen::Quit),
            },
        }
        None
    }

    fn restart(&mut self) {
        info!(score = self.game.state().score(), "restarting round");
        self.clock.pause();
        self.game.restart(self.clock.now());
        self.hud = Hud::default();
        self.state = PlayState::Running;
    }
}

impl<R> Play<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    /// Should frames be delivered to the game?
    fn ticking(&self) -> bool {
        self.state == PlayState::Running && self.game.state().running()
    }

    fn pause(&mut self) {
        self.state = PlayState::Paused(Paused::new());
    }

    fn score_line(&self) -> Line<'static> {
        let timer = self.game.state().powerup_timer();
        let text = if timer.is_active() {
            format!(
                " Score: {}   Powerup: {:.1}s",
                self.hud.score(),
                timer.remaining().as_secs_f64()
            )
        } else {
            format!(" Score: {}", self.hud.score())
        };
        Line::styled(text, consts::SCORE_BAR_STYLE)
    }
}

impl<R> Widget for &Play<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [score_area, block_area, msg1_area, msg2_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(display);
        self.score_line().render(score_area, buf);

        let block_area = center_rect(block_area, consts::PLAYFIELD_BLOCK_SIZE);
        Block::bordered().render(block_area, buf);
        let mut field = Canvas {
            area: block_area.inner(Margin::new(1, 1)),
            buf,
        };
        let state = self.game.state();
        for &pos in state.obstacles() {
            field.draw_cell(pos, consts::OBSTACLE_SYMBOL, consts::OBSTACLE_STYLE);
        }
        field.draw_cell(state.food(), consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        if let Some(pos) = state.powerup() {
            field.draw_cell(pos, consts::POWERUP_SYMBOL, consts::POWERUP_STYLE);
        }
        let snake_style = if state.powerup_timer().is_active() {
            consts::POWERED_SNAKE_STYLE
        } else {
            consts::SNAKE_STYLE
        };
        for &pos in state.snake().body() {
            field.draw_cell(pos, consts::SNAKE_BODY_SYMBOL, snake_style);
        }
        // Draw the head last so that, if it's a collision, we overwrite
        // whatever it's colliding with
        let head = state.snake().head();
        match state.status() {
            RoundState::Running => field.draw_cell(head, head_symbol(state.direction()), snake_style),
            RoundState::GameOver(_) => {
                field.draw_cell(head, consts::COLLISION_SYMBOL, consts::COLLISION_STYLE);
            }
        }

        if let RoundState::GameOver(cause) = state.status() {
            Line::from_iter([
                Span::raw(Notice::GameOver.message()),
                Span::raw(format!(" Hit the {cause}.  Final score: {}", state.score())),
            ])
            .render(msg1_area, buf);
            Line::from_iter([
                Span::raw(" Choose One: Restart ("),
                Span::styled("r", consts::KEY_STYLE),
                Span::raw(") — Quit ("),
                Span::styled("q", consts::KEY_STYLE),
                Span::raw(")"),
            ])
            .render(msg2_area, buf);
        } else if let Some(notice) = self.hud.notice() {
            Span::styled(notice.message(), consts::NOTICE_STYLE).render(msg1_area, buf);
        }

        if let PlayState::Paused(paused) = self.state {
            let pause_area = center_rect(
                display,
                Size {
                    width: Paused::WIDTH,
                    height: Paused::HEIGHT,
                },
            );
            paused.render(pause_area, buf);
        }
    }
}

fn head_symbol(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => consts::SNAKE_HEAD_UP_SYMBOL,
        Direction::Down => consts::SNAKE_HEAD_DOWN_SYMBOL,
        Direction::Left => consts::SNAKE_HEAD_LEFT_SYMBOL,
        Direction::Right => consts::SNAKE_HEAD_RIGHT_SYMBOL,
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum PlayState {
    Running,
    Paused(Paused),
}

/// The drawable interior of the playfield border.  Each grid cell is
/// [`CELL_WIDTH`][consts::CELL_WIDTH] terminal columns wide.
#[derive(Debug)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, pos: GridPosition, symbol: &str, style: Style) {
        let Some((col, row)) = pos.cell() else {
            return;
        };
        let Some(x) = col
            .checked_mul(consts::CELL_WIDTH)
            .and_then(|x| self.area.x.checked_add(x))
        else {
            return;
        };
        let Some(y) = self.area.y.checked_add(row) else {
            return;
        };
        for (ch, dx) in symbol.chars().zip(0u16..) {
            let Some(x) = x.checked_add(dx) else {
                return;
            };
            if !self.area.contains(Position { x, y }) {
                continue;
            }
            if let Some(cell) = self.buf.cell_mut((x, y)) {
                cell.set_char(ch);
                cell.set_style(Style::reset().patch(style));
            }
        }
    }
}
