use tui_2048::core::{GameSnapshot, GameState};
use tui_2048::term::{tile_color, GameView, Viewport, GAME_OVER_TEXT};

fn screen_text(fb: &tui_2048::term::FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();

    // 4 tiles * 6 columns + border => 26 wide, 4 rows + border => 6 tall.
    let fb = view.render(&snap, Viewport::new(26, 6));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(25, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 5).unwrap().ch, '└');
    assert_eq!(fb.get(25, 5).unwrap().ch, '┘');
}

#[test]
fn term_view_right_aligns_tile_values() {
    let mut snap = GameSnapshot::default();
    snap.board[0] = [0, 1, 11, 16];

    let fb = GameView::default().render(&snap, Viewport::new(26, 6));

    // Row 1 inside the border; each tile is 6 wide with one trailing space.
    assert_eq!(fb.row_text(1), "│    .     2  2048 65536 │");
    assert_eq!(fb.get(10, 1).unwrap().style.fg, tile_color(1));
    assert_eq!(fb.get(16, 1).unwrap().style.fg, tile_color(11));
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = GameState::new(1).snapshot();
    snap.score = 1234;
    snap.moves = 56;

    let fb = GameView::default().render(&snap, Viewport::new(60, 12));
    let all = screen_text(&fb);
    assert!(all.contains("SCORE"));
    assert!(all.contains("1234"));
    assert!(all.contains("MOVES"));
    assert!(all.contains("GOAL"));
    assert!(all.contains("2048"));
}

#[test]
fn term_view_skips_side_panel_on_narrow_viewports() {
    let snap = GameState::new(1).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(30, 6));
    assert!(!screen_text(&fb).contains("SCORE"));
}

#[test]
fn term_view_shows_overlay_on_game_over() {
    let mut snap = GameSnapshot::default();
    let fb = GameView::default().render(&snap, Viewport::new(26, 6));
    assert!(!screen_text(&fb).contains(GAME_OVER_TEXT));

    snap.game_over = true;
    let fb = GameView::default().render(&snap, Viewport::new(26, 6));
    assert!(screen_text(&fb).contains(GAME_OVER_TEXT));
}

#[test]
fn term_view_centers_board() {
    let snap = GameState::new(1).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(26, 16));
    // start_y = (16 - 6) / 2 = 5
    assert_eq!(fb.get(0, 5).unwrap().ch, '┌');
}
