#![forbid(unsafe_code)]

//! Integration tests: frame-by-frame scrolling text behavior.
//!
//! The default [`MonoFont`] (advance 1, line height 10) and the default
//! line spacing of 3 make placements easy to compute by hand: on a canvas
//! of height H, line 0 of a fresh pass starts at `H + 3` and each following
//! line sits `10 + 3` below the previous one.

use hudkit_core::geometry::{Rect, Size};
use hudkit_harness::TestCanvas;
use hudkit_widgets::{ScrollingText, Widget};

/// Y coordinates of the positioned text calls of one frame.
fn frame_ys(canvas: &TestCanvas) -> Vec<(String, i32)> {
    canvas
        .positioned_texts()
        .into_iter()
        .map(|(text, region)| (text, region.y))
        .collect()
}

fn draw_frame(widget: &mut ScrollingText, canvas: &mut TestCanvas) {
    canvas.clear_calls();
    widget.draw(canvas);
}

// ============================================================================
// Pass initialization and advancement
// ============================================================================

#[test]
fn first_draw_places_lines_below_the_bottom_edge() {
    let mut widget = ScrollingText::new().with_text("A\nB");
    let mut canvas = TestCanvas::new(100, 100);

    draw_frame(&mut widget, &mut canvas);
    // Line 0 at 103, line 1 at 103 + 10 + 3 = 116. Only line 0 is inside
    // the visible band [0, 100 + 10].
    assert_eq!(frame_ys(&canvas), vec![(String::from("A"), 103)]);
}

#[test]
fn lines_are_horizontally_centered() {
    let mut widget = ScrollingText::new().with_text("word");
    let mut canvas = TestCanvas::new(100, 100);

    draw_frame(&mut widget, &mut canvas);
    // Width 4 centered on a 100-wide canvas: x = 50 - 2.
    assert_eq!(
        canvas.positioned_texts(),
        vec![(String::from("word"), Rect::new(48, 103, 4, 10))]
    );
}

#[test]
fn each_active_frame_moves_lines_up_by_step() {
    let mut widget = ScrollingText::new().with_text("A\nB");
    let mut canvas = TestCanvas::new(100, 100);

    draw_frame(&mut widget, &mut canvas); // initializes at 103 / 116
    for k in 1..=5 {
        draw_frame(&mut widget, &mut canvas);
        assert_eq!(
            frame_ys(&canvas),
            vec![(String::from("A"), 103 - k)],
            "frame {k}"
        );
    }
}

#[test]
fn larger_step_advances_faster() {
    let mut widget = ScrollingText::new().with_text("A");
    widget.set_scroll_step(4);
    let mut canvas = TestCanvas::new(100, 100);

    draw_frame(&mut widget, &mut canvas);
    assert_eq!(frame_ys(&canvas), vec![(String::from("A"), 103)]);
    draw_frame(&mut widget, &mut canvas);
    assert_eq!(frame_ys(&canvas), vec![(String::from("A"), 99)]);
    draw_frame(&mut widget, &mut canvas);
    assert_eq!(frame_ys(&canvas), vec![(String::from("A"), 95)]);
}

#[test]
fn second_line_enters_the_band_at_its_lower_edge() {
    let mut widget = ScrollingText::new().with_text("A\nB");
    let mut canvas = TestCanvas::new(100, 100);

    // Line 1 starts at 116; the band's lower edge for a 10-high line is
    // 100 + 10 = 110, so it becomes visible after 6 advances.
    draw_frame(&mut widget, &mut canvas);
    for _ in 1..=5 {
        draw_frame(&mut widget, &mut canvas);
    }
    assert_eq!(frame_ys(&canvas), vec![(String::from("A"), 98)]);

    draw_frame(&mut widget, &mut canvas);
    assert_eq!(
        frame_ys(&canvas),
        vec![(String::from("A"), 97), (String::from("B"), 110)]
    );
}

#[test]
fn duplicate_lines_scroll_independently() {
    let mut widget = ScrollingText::new().with_text("X\nX");
    let mut canvas = TestCanvas::new(100, 200);

    // Entries start at 203 and 216; after six advances both sit inside the
    // visible band, 13 pixels apart.
    draw_frame(&mut widget, &mut canvas);
    for _ in 0..6 {
        draw_frame(&mut widget, &mut canvas);
    }
    assert_eq!(
        frame_ys(&canvas),
        vec![(String::from("X"), 197), (String::from("X"), 210)],
        "equal lines must keep distinct offsets"
    );

    draw_frame(&mut widget, &mut canvas);
    assert_eq!(
        frame_ys(&canvas),
        vec![(String::from("X"), 196), (String::from("X"), 209)]
    );
}

#[test]
fn empty_lines_are_preserved_in_the_pass() {
    let mut widget = ScrollingText::new().with_text("A\n\nB");
    let mut canvas = TestCanvas::new(100, 200);

    // Entries start at 203 / 216 / 229; after 19 advances all three are in
    // the band, with the empty middle line keeping its own offset.
    draw_frame(&mut widget, &mut canvas);
    for _ in 0..19 {
        draw_frame(&mut widget, &mut canvas);
    }
    assert_eq!(
        frame_ys(&canvas),
        vec![
            (String::from("A"), 184),
            (String::new(), 197),
            (String::from("B"), 210),
        ]
    );
}

// ============================================================================
// Visibility band
// ============================================================================

#[test]
fn lines_above_the_band_are_not_drawn_but_unfinished_lines_keep_the_pass_alive() {
    let mut widget = ScrollingText::new().with_text("A\nB");
    let mut canvas = TestCanvas::new(100, 10);

    // Line 0 starts at 13, line 1 at 26. After 14 advances line 0 sits at
    // -1: above the band, no longer drawn, while line 1 (12) still is.
    draw_frame(&mut widget, &mut canvas);
    for _ in 0..14 {
        draw_frame(&mut widget, &mut canvas);
    }
    assert_eq!(frame_ys(&canvas), vec![(String::from("B"), 12)]);
}

#[test]
fn offset_top_extends_the_band_upward() {
    let mut widget = ScrollingText::new().with_text("A");
    widget.set_offset_top(5);
    let mut canvas = TestCanvas::new(100, 10);

    draw_frame(&mut widget, &mut canvas);
    for _ in 0..14 {
        draw_frame(&mut widget, &mut canvas);
    }
    // At y = -1 the line is still within [-5, ...].
    assert_eq!(frame_ys(&canvas), vec![(String::from("A"), -1)]);
}

#[test]
fn offset_bottom_shrinks_the_band_at_the_bottom() {
    let mut widget = ScrollingText::new().with_text("A");
    widget.set_offset_bottom(8);
    let mut canvas = TestCanvas::new(100, 10);

    // Band upper edge: 10 - 8 + 10 = 12, so the line at 13 is not drawn
    // on the first frame but is at 12 on the second.
    draw_frame(&mut widget, &mut canvas);
    assert_eq!(frame_ys(&canvas), vec![]);
    draw_frame(&mut widget, &mut canvas);
    assert_eq!(frame_ys(&canvas), vec![(String::from("A"), 12)]);
}

// ============================================================================
// Start / stop / reset control
// ============================================================================

#[test]
fn stop_scrolling_freezes_but_keeps_drawing() {
    let mut widget = ScrollingText::new().with_text("A");
    let mut canvas = TestCanvas::new(100, 100);

    draw_frame(&mut widget, &mut canvas);
    widget.stop_scrolling();
    draw_frame(&mut widget, &mut canvas);
    draw_frame(&mut widget, &mut canvas);
    assert_eq!(frame_ys(&canvas), vec![(String::from("A"), 103)]);

    widget.start_scrolling();
    draw_frame(&mut widget, &mut canvas);
    assert_eq!(frame_ys(&canvas), vec![(String::from("A"), 102)]);
}

#[test]
fn stopped_widget_never_starts_a_pass() {
    let mut widget = ScrollingText::new().with_text("A");
    widget.stop_scrolling();
    let mut canvas = TestCanvas::new(100, 100);

    draw_frame(&mut widget, &mut canvas);
    assert_eq!(frame_ys(&canvas), vec![]);
}

#[test]
fn reset_then_draw_reproduces_the_first_frame_exactly() {
    let mut widget = ScrollingText::new().with_text("A\nB");
    let mut canvas = TestCanvas::new(100, 100);

    draw_frame(&mut widget, &mut canvas);
    let first = canvas.positioned_texts();

    for _ in 0..7 {
        draw_frame(&mut widget, &mut canvas);
    }
    widget.reset_scrolling();
    draw_frame(&mut widget, &mut canvas);
    assert_eq!(canvas.positioned_texts(), first);
}

#[test]
fn auto_reset_starts_a_fresh_pass_at_the_bottom() {
    let mut widget = ScrollingText::new().with_text("A").with_auto_reset(true);
    let mut canvas = TestCanvas::new(100, 10);

    // Line starts at 13 and leaves the band (y < 0) on the 15th draw,
    // which also detects the finished pass and clears the offsets.
    for _ in 0..15 {
        draw_frame(&mut widget, &mut canvas);
    }
    assert_eq!(frame_ys(&canvas), vec![]);

    // The next draw reinitializes at the bottom, exactly like a first draw.
    draw_frame(&mut widget, &mut canvas);
    assert_eq!(frame_ys(&canvas), vec![(String::from("A"), 13)]);
}

#[test]
fn without_auto_reset_a_finished_pass_stays_finished() {
    let mut widget = ScrollingText::new().with_text("A");
    let mut canvas = TestCanvas::new(100, 10);

    for _ in 0..20 {
        draw_frame(&mut widget, &mut canvas);
    }
    assert_eq!(frame_ys(&canvas), vec![]);
    // Offsets keep advancing below the band; nothing reappears.
    draw_frame(&mut widget, &mut canvas);
    assert_eq!(frame_ys(&canvas), vec![]);
}

#[test]
fn empty_text_forms_one_line_and_auto_resets() {
    let mut widget = ScrollingText::new().with_auto_reset(true);
    let mut canvas = TestCanvas::new(100, 10);

    draw_frame(&mut widget, &mut canvas);
    assert_eq!(frame_ys(&canvas), vec![(String::new(), 13)]);

    // Scroll the single empty line out; the pass finishes and restarts.
    for _ in 0..14 {
        draw_frame(&mut widget, &mut canvas);
    }
    draw_frame(&mut widget, &mut canvas);
    assert_eq!(frame_ys(&canvas), vec![(String::new(), 13)]);
}

// ============================================================================
// Geometry changes and bindings
// ============================================================================

#[test]
fn resize_mid_pass_keeps_offsets_intact() {
    let mut widget = ScrollingText::new().with_text("A");
    let mut canvas = TestCanvas::new(100, 10);

    draw_frame(&mut widget, &mut canvas);
    assert_eq!(frame_ys(&canvas), vec![(String::from("A"), 13)]);

    canvas.set_size(100, 50);
    draw_frame(&mut widget, &mut canvas);
    assert_eq!(
        frame_ys(&canvas),
        vec![(String::from("A"), 12)],
        "in-flight offsets are not rebased on resize"
    );
}

#[test]
fn next_pass_uses_the_new_canvas_height() {
    let mut widget = ScrollingText::new().with_text("A");
    let mut canvas = TestCanvas::new(100, 10);

    draw_frame(&mut widget, &mut canvas);
    canvas.set_size(100, 40);
    widget.reset_scrolling();
    draw_frame(&mut widget, &mut canvas);
    assert_eq!(frame_ys(&canvas), vec![(String::from("A"), 43)]);
}

#[test]
fn rebinding_text_applies_on_the_next_pass() {
    let mut widget = ScrollingText::new().with_text("old");
    let mut canvas = TestCanvas::new(100, 100);

    draw_frame(&mut widget, &mut canvas);
    assert_eq!(frame_ys(&canvas), vec![(String::from("old"), 103)]);

    widget.set_text("new");
    draw_frame(&mut widget, &mut canvas);
    assert_eq!(
        frame_ys(&canvas),
        vec![(String::from("old"), 102)],
        "the in-flight pass keeps its lines"
    );

    widget.reset_scrolling();
    draw_frame(&mut widget, &mut canvas);
    assert_eq!(frame_ys(&canvas), vec![(String::from("new"), 103)]);
}

// ============================================================================
// Preferred size
// ============================================================================

#[test]
fn preferred_size_measures_all_lines() {
    let widget = ScrollingText::new().with_text("abc\nde");
    let canvas = TestCanvas::new(100, 100);

    assert_eq!(
        widget.preferred_size(&canvas, Size::new(100, 100)),
        Size::new(3, 20)
    );
}

#[test]
fn preferred_size_wraps_to_the_width_hint() {
    let widget = ScrollingText::new().with_text("aa bb");
    let canvas = TestCanvas::new(100, 100);

    assert_eq!(
        widget.preferred_size(&canvas, Size::new(2, 100)),
        Size::new(2, 20)
    );
}
