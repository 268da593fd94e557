mod direction;
mod grid;
mod powerup;
mod schedule;
mod signals;
mod snake;
mod spawner;
pub(crate) use self::direction::Direction;
pub(crate) use self::grid::GridPosition;
use self::powerup::PowerupTimer;
use self::schedule::{RoundId, Schedule, Task};
pub(crate) use self::signals::Presenter;
use self::snake::Snake;
use self::spawner::Spawner;
use crate::consts;
use rand::{rngs::StdRng, Rng};
use std::collections::HashSet;
use std::fmt;
use std::time::Duration;
use tracing::{debug, info};

/// The game loop controller.
///
/// The host calls [`Game::on_tick()`] once per frame with the current play
/// time and the time since the previous frame, and [`Game::on_direction_input()`]
/// whenever a direction key is pressed.  Outcomes are reported to a
/// [`Presenter`].
#[derive(Clone, Debug)]
pub(crate) struct Game<R = StdRng> {
    spawner: Spawner<R>,
    schedule: Schedule,
    obstacle_count: usize,
    state: GameState,
}

impl<R: Rng> Game<R> {
    /// Start the first round at play time zero with `obstacle_count`
    /// obstacle placement attempts per round
    pub(crate) fn new(rng: R, obstacle_count: usize) -> Game<R> {
        let mut spawner = Spawner::new(rng);
        let state = GameState::new(RoundId::FIRST, &mut spawner, obstacle_count, Duration::ZERO);
        Game {
            spawner,
            schedule: Schedule::default(),
            obstacle_count,
            state,
        }
    }

    /// Abandon the current round and start a new one at play time `now`.
    ///
    /// Tasks scheduled by earlier rounds stay queued and are discarded when
    /// they come due.
    pub(crate) fn restart(&mut self, now: Duration) {
        let round = self.state.round.next();
        debug!(pending_tasks = self.schedule.len(), "restarting");
        self.state = GameState::new(round, &mut self.spawner, self.obstacle_count, now);
    }

    /// Advance the game to play time `now`, `delta` after the previous call
    pub(crate) fn on_tick<P: Presenter>(&mut self, now: Duration, delta: Duration, presenter: &mut P) {
        if !self.state.running() {
            return;
        }
        self.run_due_tasks(now);
        debug_assert!(now >= self.state.last_move, "play time ran backwards");
        let mut collected = false;
        if now.saturating_sub(self.state.last_move) >= self.state.powerup_timer.move_delay() {
            self.state.last_move = now;
            collected = self.step(now, presenter);
        }
        // A powerup collected at `now` has not been active for any of `delta`
        if self.state.running() && !collected && self.state.powerup_timer.tick(delta) {
            debug!(round = %self.state.round, "powerup expired");
        }
    }

    fn run_due_tasks(&mut self, now: Duration) {
        for scheduled in self.schedule.take_due(now) {
            match scheduled.task {
                Task::RespawnPowerup
                    if scheduled.round == self.state.round && self.state.running() =>
                {
                    let pos = self.spawner.spawn_powerup();
                    debug!(round = %self.state.round, x = pos.x, y = pos.y, "powerup respawned");
                    self.state.powerup = Some(pos);
                }
                Task::RespawnPowerup => {
                    debug!(
                        scheduled_by = %scheduled.round,
                        round = %self.state.round,
                        "dropping stale powerup respawn"
                    );
                }
            }
        }
    }

    /// Make one move and resolve what the head ran into.  The checks run in
    /// a fixed order; a check that ends the round does not stop later ones,
    /// but food and powerups are only collected while the round is running.
    ///
    /// Returns `true` if a powerup was collected.
    fn step<P: Presenter>(&mut self, now: Duration, presenter: &mut P) -> bool {
        let state = &mut self.state;
        state.direction = state.next_direction;
        let previous_head = state.snake.advance(state.direction);
        let head = state.snake.head();
        presenter.on_snake_moved(head, state.snake.body());

        if !head.in_bounds() {
            state.end(Collision::Wall, presenter);
        }

        if state.snake.occupies_own_body(head) {
            state.end(Collision::Body, presenter);
        }

        if state.running() && head.overlaps(state.food) {
            state.food = self.spawner.spawn_food();
            state.score = state.score.saturating_add(consts::FOOD_SCORE);
            state.snake.grow(previous_head);
            info!(
                round = %state.round,
                score = state.score,
                length = state.snake.len(),
                "food eaten"
            );
            presenter.on_score_changed(state.score);
            presenter.on_food_eaten();
        }

        let collected = state.running() && state.powerup.is_some_and(|p| head.overlaps(p));
        if collected {
            state.powerup = None;
            state.powerup_timer.collect();
            state.score = state.score.saturating_add(consts::POWERUP_SCORE);
            self.schedule.schedule(
                now + consts::POWERUP_RESPAWN_DELAY,
                state.round,
                Task::RespawnPowerup,
            );
            info!(round = %state.round, score = state.score, "powerup collected");
            presenter.on_score_changed(state.score);
            presenter.on_powerup_collected();
        }

        if !state.powerup_timer.is_active() && state.obstacles.iter().any(|&o| head.overlaps(o)) {
            state.end(Collision::Obstacle, presenter);
        }
        collected
    }
}

impl<R> Game<R> {
    /// Accept a new heading for the next move unless it would reverse the
    /// heading of the last move.  Reversals are ignored.
    pub(crate) fn on_direction_input(&mut self, direction: Direction) {
        if self.state.running() && direction != self.state.direction.reverse() {
            self.state.next_direction = direction;
        }
    }

    pub(crate) fn state(&self) -> &GameState {
        &self.state
    }
}

/// Everything about the round in progress
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct GameState {
    round: RoundId,
    status: RoundState,
    snake: Snake,
    /// Direction of the most recent move
    direction: Direction,
    /// Direction the next move will take
    next_direction: Direction,
    food: GridPosition,
    obstacles: HashSet<GridPosition>,
    powerup: Option<GridPosition>,
    powerup_timer: PowerupTimer,
    score: u32,
    /// Play time of the most recent move (or of the start of the round)
    last_move: Duration,
}

impl GameState {
    fn new<R: Rng>(
        round: RoundId,
        spawner: &mut Spawner<R>,
        obstacle_count: usize,
        started: Duration,
    ) -> GameState {
        let snake = Snake::new(
            consts::SNAKE_START,
            Direction::Right,
            consts::INITIAL_BODY_SEGMENTS,
        );
        let obstacles = spawner.spawn_obstacles(obstacle_count);
        let powerup = Some(spawner.spawn_powerup());
        info!(%round, obstacles = obstacles.len(), "round started");
        GameState {
            round,
            status: RoundState::Running,
            snake,
            direction: Direction::Right,
            next_direction: Direction::Right,
            food: consts::INITIAL_FOOD,
            obstacles,
            powerup,
            powerup_timer: PowerupTimer::Inactive,
            score: 0,
            last_move: started,
        }
    }

    /// End the round.  Only the first cause counts.
    fn end<P: Presenter>(&mut self, cause: Collision, presenter: &mut P) {
        if self.running() {
            info!(round = %self.round, score = self.score, %cause, "game over");
            self.status = RoundState::GameOver(cause);
            presenter.on_game_over();
        }
    }

    pub(crate) fn running(&self) -> bool {
        self.status == RoundState::Running
    }

    pub(crate) fn status(&self) -> RoundState {
        self.status
    }

    pub(crate) fn snake(&self) -> &Snake {
        &self.snake
    }

    pub(crate) fn direction(&self) -> Direction {
        self.direction
    }

    pub(crate) fn food(&self) -> GridPosition {
        self.food
    }

    pub(crate) fn obstacles(&self) -> &HashSet<GridPosition> {
        &self.obstacles
    }

    pub(crate) fn powerup(&self) -> Option<GridPosition> {
        self.powerup
    }

    pub(crate) fn powerup_timer(&self) -> PowerupTimer {
        self.powerup_timer
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum RoundState {
    Running,
    /// The round is over for good
    GameOver(Collision),
}

/// What ended a round
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Collision {
    /// The head left the playfield
    Wall,
    /// The head ran into the snake's own body
    Body,
    /// The head ran into an obstacle without a powerup active
    Obstacle,
}

impl fmt::Display for Collision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Collision::Wall => "wall",
            Collision::Body => "body",
            Collision::Obstacle => "obstacle",
        };
        f.pad(s)
    }
}
