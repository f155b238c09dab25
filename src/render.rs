//! # Rendering
//!
//! Display-primitive sequences used by the draw, menu and scroll tasks.
//! Every rectangle is emitted as a `set_write_window` immediately followed
//! by a `fill_window` over the same bounds.

use core::fmt::Write;

use heapless::String;

use crate::config::{
    BACKGROUND, LEVEL_SIZE, PIPE_COLOR, PIPE_SPACING, PIPE_WIDTH, PLAYER_COLOR, PLAYER_OFFSET,
    PLAYER_SIZE, SCOREBOARD_COLS, SCREEN_MAX, SCREEN_MIN,
};
use crate::level::{Column, Level};
use crate::periph::{Display, TextDisplay};

/// Scoreboard row holding the running score.
pub const SCORE_ROW: u8 = 0;
/// Scoreboard row holding the best score.
pub const BEST_ROW: u8 = 1;

/// Clamp a signed coordinate onto the panel's 8-bit address space.
#[inline]
fn coord(v: i32) -> u8 {
    v.clamp(0, u8::MAX as i32) as u8
}

pub fn fill_rect<D: Display + ?Sized>(d: &mut D, x0: u8, y0: u8, x1: u8, y1: u8, color: u16) {
    d.set_write_window(x0, y0, x1, y1);
    d.fill_window(x0, y0, x1, y1, color);
}

pub fn fill_background<D: Display + ?Sized>(d: &mut D) {
    fill_rect(d, SCREEN_MIN, SCREEN_MIN, SCREEN_MAX, SCREEN_MAX, BACKGROUND);
}

/// Erase the sprite at `last_height` (if it was drawn) and draw it at
/// `height`.
pub fn draw_player<D: Display + ?Sized>(d: &mut D, last_height: i32, height: i32) {
    let x0 = coord(PLAYER_OFFSET as i32 - PLAYER_SIZE / 2);
    let x1 = coord(PLAYER_OFFSET as i32 + PLAYER_SIZE / 2);

    if last_height >= PLAYER_SIZE / 2 {
        let y0 = coord(last_height - PLAYER_SIZE / 2);
        let y1 = coord(last_height + PLAYER_SIZE / 2);
        fill_rect(d, x0, y0, x1, y1, BACKGROUND);
    }

    if height >= PLAYER_SIZE / 4 {
        let y0 = coord(height - PLAYER_SIZE / 4);
        let y1 = coord(height + PLAYER_SIZE / 4);
        fill_rect(d, x0, y0, x1, y1, PLAYER_COLOR);
    }
}

/// Wipe the trailing column at `x + 1` and paint both halves at `x`.
pub fn draw_pipe<D: Display + ?Sized>(d: &mut D, pipe: &Column, x: u8) {
    let trail = x.saturating_add(1);
    let bottom = coord(pipe.bottom as i32);
    let top = coord(pipe.top());

    fill_rect(d, trail, SCREEN_MIN, trail, bottom, BACKGROUND);
    fill_rect(d, trail, top, trail, SCREEN_MAX, BACKGROUND);

    fill_rect(d, x, SCREEN_MIN, x, bottom, PIPE_COLOR);
    fill_rect(d, x, top, x, SCREEN_MAX, PIPE_COLOR);
}

/// Draw every obstacle inside the visible window for cursor `frame`,
/// plus its copy from the next lap so nothing pops in at the boundary.
pub fn draw_pipes<D: Display + ?Sized>(d: &mut D, level: &Level, frame: usize) {
    let size = LEVEL_SIZE as i32;
    for (i, pipe) in level.columns().iter().enumerate() {
        if !pipe.has_obstacle || i % PIPE_SPACING >= PIPE_WIDTH - 1 {
            continue;
        }

        let screen = i as i32 - frame as i32 + PLAYER_OFFSET as i32;
        if (0..size).contains(&screen) {
            draw_pipe(d, pipe, screen as u8);
        }

        let wrapped = screen + size;
        if (0..size).contains(&wrapped) {
            draw_pipe(d, pipe, wrapped as u8);
        }
    }
}

/// Right-align `value` on `row`.
pub fn write_score<T: TextDisplay + ?Sized>(t: &mut T, value: i32, row: u8) {
    let mut buf: String<12> = String::new();
    // An i32 never exceeds 11 characters.
    let _ = write!(buf, "{}", value);

    t.goto(row, SCOREBOARD_COLS.saturating_sub(buf.len() as u8));
    t.write_str(&buf);
}

/// Clear the scoreboard and redraw both labels and values.
pub fn scoreboard_init<T: TextDisplay + ?Sized>(t: &mut T, score: i32, high_score: i32) {
    t.clear();
    t.goto(SCORE_ROW, 0);
    t.write_str("Score:");
    write_score(t, score, SCORE_ROW);

    t.goto(BEST_ROW, 0);
    t.write_str("Best:");
    write_score(t, high_score, BEST_ROW);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Call, MockPlatform};

    #[test]
    fn test_every_fill_follows_matching_window() {
        let mut m = MockPlatform::new();
        let mut level = Level::new();
        level.set(32, Column::obstacle(40));
        level.set(64, Column::obstacle(20));

        draw_player(&mut m, 64, 60);
        draw_pipes(&mut m, &level, 10);

        assert!(m.fills() > 0);
        m.assert_window_fill_pairs();
    }

    #[test]
    fn test_player_erase_then_draw() {
        let mut m = MockPlatform::new();
        draw_player(&mut m, 64, 61);
        assert_eq!(
            m.calls.as_slice(),
            &[
                Call::Window(26, 59, 36, 69),
                Call::Fill(26, 59, 36, 69, BACKGROUND),
                Call::Window(26, 59, 36, 63),
                Call::Fill(26, 59, 36, 63, PLAYER_COLOR),
            ]
        );
    }

    #[test]
    fn test_player_first_draw_skips_erase() {
        let mut m = MockPlatform::new();
        draw_player(&mut m, -1, 64);
        assert_eq!(m.fills(), 1);
    }

    #[test]
    fn test_pipe_draw_sequence() {
        let mut m = MockPlatform::new();
        draw_pipe(&mut m, &Column::obstacle(20), 50);
        assert_eq!(
            m.calls.as_slice(),
            &[
                Call::Window(51, 0, 51, 20),
                Call::Fill(51, 0, 51, 20, BACKGROUND),
                Call::Window(51, 52, 51, SCREEN_MAX),
                Call::Fill(51, 52, 51, SCREEN_MAX, BACKGROUND),
                Call::Window(50, 0, 50, 20),
                Call::Fill(50, 0, 50, 20, PIPE_COLOR),
                Call::Window(50, 52, 50, SCREEN_MAX),
                Call::Fill(50, 52, 50, SCREEN_MAX, PIPE_COLOR),
            ]
        );
    }

    #[test]
    fn test_pipes_wrap_near_boundary() {
        let mut level = Level::new();
        level.set(0, Column::obstacle(30));

        // Cursor near the end of the lap: column 0 is only visible as the
        // next-lap copy at 0 - 120 + 31 + 128 = 39.
        let mut m = MockPlatform::new();
        draw_pipes(&mut m, &level, 120);
        assert!(m.calls.contains(&Call::Window(39, 0, 39, 30)));
        assert_eq!(m.fills(), 4);
    }

    #[test]
    fn test_pipes_out_of_view_are_skipped() {
        let mut level = Level::new();
        level.set(64, Column::obstacle(30));

        // 64 - 0 + 31 = 95 on screen; at frame 100 it is at -5 and 123.
        let mut m = MockPlatform::new();
        draw_pipes(&mut m, &level, 0);
        assert_eq!(m.fills(), 4);

        let mut m = MockPlatform::new();
        draw_pipes(&mut m, &level, 100);
        assert!(m.calls.contains(&Call::Window(123, 0, 123, 30)));
    }

    #[test]
    fn test_write_score_right_aligns() {
        let mut m = MockPlatform::new();
        write_score(&mut m, 42, SCORE_ROW);
        assert_eq!(m.calls.as_slice(), &[Call::Goto(0, 14), Call::Char(b'4'), Call::Char(b'2')]);
    }

    #[test]
    fn test_scoreboard_layout() {
        let mut m = MockPlatform::new();
        scoreboard_init(&mut m, 3, 17);
        assert_eq!(m.calls[0], Call::ClearText);
        assert_eq!(m.text_row(0).as_str(), "Score:         3");
        assert_eq!(m.text_row(1).as_str(), "Best:         17");
    }
}
