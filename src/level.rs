//! # Level Store
//!
//! A fixed-size ring of [`Column`] records describing obstacle geometry.
//! Written by the draw task (full regeneration) and the scroll task
//! (per-obstacle refresh), read by the death and draw tasks.
//!
//! Obstacles only ever sit at multiples of `PIPE_SPACING`. Columns are
//! never destroyed, only overwritten.

use crate::config::{GAP, LEVEL_SIZE, PIPE_BOTTOM_MAX, PIPE_BOTTOM_MIN, PIPE_SPACING, PLAYER_OFFSET};
use crate::rng::Rng;

/// Sentinel bottom edge of a column without an obstacle.
pub const NO_OBSTACLE: i8 = -1;

/// One discrete horizontal slot of the level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Column {
    pub has_obstacle: bool,
    /// Opening height; the top half starts at `bottom + gap`.
    pub gap: u8,
    /// Top of the lower half, or [`NO_OBSTACLE`].
    pub bottom: i8,
}

impl Column {
    pub const EMPTY: Self = Self {
        has_obstacle: false,
        gap: GAP,
        bottom: NO_OBSTACLE,
    };

    pub const fn obstacle(bottom: i8) -> Self {
        Self {
            has_obstacle: true,
            gap: GAP,
            bottom,
        }
    }

    /// Lower edge of the top half.
    #[inline]
    pub const fn top(&self) -> i32 {
        self.bottom as i32 + self.gap as i32
    }
}

pub struct Level {
    columns: [Column; LEVEL_SIZE],
}

impl Level {
    pub const fn new() -> Self {
        Self {
            columns: [Column::EMPTY; LEVEL_SIZE],
        }
    }

    /// Regenerate the whole layout: an obstacle at every non-zero multiple
    /// of `PIPE_SPACING`, everything else empty.
    pub fn generate(&mut self, rng: &mut Rng) {
        for (i, column) in self.columns.iter_mut().enumerate() {
            *column = if i != 0 && i % PIPE_SPACING == 0 {
                Column::obstacle(random_bottom(rng))
            } else {
                Column::EMPTY
            };
        }
    }

    /// Give the obstacle that just left the screen behind the player at
    /// `cursor` a fresh vertical offset for the next lap.
    pub fn refresh_behind(&mut self, cursor: usize, rng: &mut Rng) {
        let idx = wrap(cursor as i32 - PLAYER_OFFSET as i32);
        self.columns[idx] = Column::obstacle(random_bottom(rng));
    }

    #[inline]
    pub fn column(&self, idx: usize) -> &Column {
        &self.columns[idx % LEVEL_SIZE]
    }

    pub fn columns(&self) -> &[Column; LEVEL_SIZE] {
        &self.columns
    }

    #[cfg(test)]
    pub fn set(&mut self, idx: usize, column: Column) {
        self.columns[idx % LEVEL_SIZE] = column;
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::new()
    }
}

/// Wrap a possibly negative or overflowing index onto the ring.
#[inline]
pub fn wrap(i: i32) -> usize {
    i.rem_euclid(LEVEL_SIZE as i32) as usize
}

fn random_bottom(rng: &mut Rng) -> i8 {
    rng.range_inclusive(PIPE_BOTTOM_MIN as i32, PIPE_BOTTOM_MAX as i32) as i8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_places_obstacles_on_spacing() {
        let mut level = Level::new();
        let mut rng = Rng::new(7);
        level.generate(&mut rng);

        for (i, c) in level.columns().iter().enumerate() {
            if i != 0 && i % PIPE_SPACING == 0 {
                assert!(c.has_obstacle, "column {} should hold an obstacle", i);
                assert!((PIPE_BOTTOM_MIN..=PIPE_BOTTOM_MAX).contains(&c.bottom));
                assert_eq!(c.gap, GAP);
            } else {
                assert_eq!(*c, Column::EMPTY, "column {} should be empty", i);
            }
        }
    }

    #[test]
    fn test_generate_clears_refreshed_column_zero() {
        let mut level = Level::new();
        let mut rng = Rng::new(7);
        level.refresh_behind(PLAYER_OFFSET, &mut rng);
        assert!(level.column(0).has_obstacle);

        level.generate(&mut rng);
        assert!(!level.column(0).has_obstacle);
    }

    #[test]
    fn test_refresh_targets_column_behind_player() {
        let mut level = Level::new();
        let mut rng = Rng::new(99);
        level.refresh_behind(63, &mut rng);
        assert!(level.column(32).has_obstacle);
        assert_eq!(level.columns().iter().filter(|c| c.has_obstacle).count(), 1);
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap(-1), LEVEL_SIZE - 1);
        assert_eq!(wrap(-5), LEVEL_SIZE - 5);
        assert_eq!(wrap(LEVEL_SIZE as i32), 0);
        assert_eq!(wrap(LEVEL_SIZE as i32 + 3), 3);
        assert_eq!(wrap(17), 17);
    }

    #[test]
    fn test_top_edge() {
        assert_eq!(Column::obstacle(20).top(), 52);
    }
}
