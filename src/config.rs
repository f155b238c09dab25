//! # Flapsched Configuration
//!
//! Compile-time constants governing the task table, the level geometry,
//! the player physics and the display. All limits are fixed at compile
//! time — no dynamic allocation.

// ---------------------------------------------------------------------------
// Scheduling
// ---------------------------------------------------------------------------

/// Number of tasks in the fixed task table.
pub const NUM_TASKS: usize = 6;

/// Period of the input, menu, position, death and scroll tasks in ms.
pub const TASK_PERIOD_MS: u32 = 100;

/// Period of the draw task in ms.
pub const DRAW_PERIOD_MS: u32 = 100;

/// System clock frequency in Hz (STM32F4 16 MHz HSI).
pub const SYSTEM_CLOCK_HZ: u32 = 16_000_000;

// ---------------------------------------------------------------------------
// Level geometry
// ---------------------------------------------------------------------------

/// Total distinct frames in one level cycle (length of the column ring).
pub const LEVEL_SIZE: usize = 128;

/// Distance between two obstacles, in columns.
pub const PIPE_SPACING: usize = 32;

/// Screen x of the player. Obstacles are refreshed this many columns
/// behind the cursor, once they are off screen.
pub const PLAYER_OFFSET: usize = 31;

/// Player sprite width in pixels.
pub const PLAYER_SIZE: i32 = 10;

/// Horizontal extent of an obstacle, in columns.
pub const PIPE_WIDTH: usize = 16;

/// Vertical opening between the bottom and top half of an obstacle.
pub const GAP: u8 = 32;

/// Lowest generated obstacle bottom edge (inclusive).
pub const PIPE_BOTTOM_MIN: i8 = 10;

/// Highest generated obstacle bottom edge (inclusive).
pub const PIPE_BOTTOM_MAX: i8 = 86;

// ---------------------------------------------------------------------------
// Physics
// ---------------------------------------------------------------------------

/// Downward acceleration added to the fall speed every falling tick.
pub const ACCEL: i32 = 1;

/// Height gained per jumping tick.
pub const ASCENT: i32 = 3;

/// Number of ticks a jump keeps ascending.
pub const HANG_TICKS: u8 = 5;

/// Height at the start of every game.
pub const START_HEIGHT: i32 = 64;

/// Fall speed at the start of every game.
pub const START_SPEED: i32 = 0;

/// Lowest survivable height.
pub const FLOOR: i32 = 0;

/// Highest survivable height.
pub const CEILING: i32 = 128;

// ---------------------------------------------------------------------------
// Menu
// ---------------------------------------------------------------------------

/// Menu ticks the control input must be held while paused to reset.
pub const RESET_HOLD_TICKS: u8 = 30;

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

/// First addressable pixel row/column of the panel.
pub const SCREEN_MIN: u8 = 0x00;

/// Last addressable pixel row/column of the panel.
pub const SCREEN_MAX: u8 = 0x83;

/// RGB565 colors.
pub const WHITE: u16 = 0xFFFF;
pub const BLACK: u16 = 0x0000;

pub const BACKGROUND: u16 = WHITE;
pub const PLAYER_COLOR: u16 = BLACK;
pub const PIPE_COLOR: u16 = BLACK;

/// Character columns on the scoreboard display.
pub const SCOREBOARD_COLS: u8 = 16;

// ---------------------------------------------------------------------------
// Storage / randomness
// ---------------------------------------------------------------------------

/// EEPROM word address of the persisted high score.
pub const SCORE_ADDR: u16 = 0x0000;

/// Default seed for obstacle generation. Must be non-zero.
pub const RNG_SEED: u32 = 0x2545_F491;
