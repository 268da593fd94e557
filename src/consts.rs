//! Assorted constants & hard-coded configuration
use crate::game::GridPosition;
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};
use std::time::Duration;

/// Spacing between adjacent cells of the playfield, in playfield units
pub(crate) const GRID_UNIT: i32 = 20;

/// Width of the playfield in playfield units
pub(crate) const PLAYFIELD_WIDTH: i32 = 800;

/// Height of the playfield in playfield units
pub(crate) const PLAYFIELD_HEIGHT: i32 = 600;

/// Number of grid cells across the playfield
pub(crate) const GRID_COLUMNS: i32 = PLAYFIELD_WIDTH / GRID_UNIT;

/// Number of grid cells down the playfield
pub(crate) const GRID_ROWS: i32 = PLAYFIELD_HEIGHT / GRID_UNIT;

/// Two positions closer than this on both axes are considered to overlap
pub(crate) const COLLISION_TOLERANCE: i32 = 10;

/// Spawned entities are kept at least this many cells away from every edge
pub(crate) const SPAWN_MARGIN_CELLS: i32 = 2;

/// Where the snake's head starts each round
pub(crate) const SNAKE_START: GridPosition = GridPosition::new(400, 300);

/// Number of body segments behind the head at the start of a round
pub(crate) const INITIAL_BODY_SEGMENTS: usize = 3;

/// Where the first food of each round is placed
pub(crate) const INITIAL_FOOD: GridPosition = GridPosition::new(200, 200);

/// Default number of obstacles placed at the start of a round
pub(crate) const OBSTACLE_COUNT: usize = 8;

/// Time between movements of the snake
pub(crate) const MOVE_DELAY: Duration = Duration::from_millis(200);

/// Time between movements of the snake while a powerup is active
pub(crate) const POWERUP_MOVE_DELAY: Duration = Duration::from_millis(120);

/// How long a collected powerup lasts
pub(crate) const POWERUP_DURATION: Duration = Duration::from_millis(5000);

/// How long after a powerup is collected before a new one appears
pub(crate) const POWERUP_RESPAWN_DELAY: Duration = Duration::from_millis(10000);

/// Points for eating food
pub(crate) const FOOD_SCORE: u32 = 10;

/// Points for collecting a powerup
pub(crate) const POWERUP_SCORE: u32 = 50;

/// Time between frame callbacks driven by the terminal host
pub(crate) const FRAME_PERIOD: Duration = Duration::from_millis(16);

/// Number of snake moves for which a HUD notice stays on screen
pub(crate) const NOTICE_MOVES: u8 = 10;

/// Terminal columns used to draw one grid cell
pub(crate) const CELL_WIDTH: u16 = 2;

/// Size of the bordered playfield: 41 × 31 cells (both edges are inclusive)
/// plus the border
pub(crate) const PLAYFIELD_BLOCK_SIZE: Size = Size {
    width: 41 * CELL_WIDTH + 2,
    height: 31 + 2,
};

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: PLAYFIELD_BLOCK_SIZE.width,
    height: PLAYFIELD_BLOCK_SIZE.height + 3,
};

/// Glyph for the snake's head when it is moving up
pub(crate) const SNAKE_HEAD_UP_SYMBOL: &str = "^^";

/// Glyph for the snake's head when it is moving down
pub(crate) const SNAKE_HEAD_DOWN_SYMBOL: &str = "vv";

/// Glyph for the snake's head when it is moving left
pub(crate) const SNAKE_HEAD_LEFT_SYMBOL: &str = "<<";

/// Glyph for the snake's head when it is moving right
pub(crate) const SNAKE_HEAD_RIGHT_SYMBOL: &str = ">>";

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: &str = "▓▓";

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: &str = "()";

/// Glyph for obstacles
pub(crate) const OBSTACLE_SYMBOL: &str = "██";

/// Glyph for the powerup
pub(crate) const POWERUP_SYMBOL: &str = "**";

/// Glyph for the snake's head once the round is over
pub(crate) const COLLISION_SYMBOL: &str = "××";

/// Style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

/// Style for the snake while a powerup is active
pub(crate) const POWERED_SNAKE_STYLE: Style =
    Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for obstacles
pub(crate) const OBSTACLE_STYLE: Style = Style::new().fg(Color::Gray);

/// Style for the powerup
pub(crate) const POWERUP_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for HUD notices shown below the playfield
pub(crate) const NOTICE_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for the currently-selected menu item
pub(crate) const MENU_SELECTION_STYLE: Style = Style::new().add_modifier(Modifier::UNDERLINED);
