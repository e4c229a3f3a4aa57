use egui::pos2;
use stamp_paint::{Canvas, PaintColor, PaintState, PointerSample, Renderer, Stamp};

fn fresh_canvas() -> Canvas {
    let mut canvas = Canvas::new(PaintColor::PAPER);
    canvas.reset([64, 64]);
    canvas
}

fn painted_pixels(canvas: &Canvas) -> usize {
    let paper = PaintColor::PAPER.to_rgba8();
    canvas.pixels().pixels().filter(|px| **px != paper).count()
}

#[test]
fn test_every_stamp_leaves_a_mark_in_view() {
    // splatter lands far behind the previous sample, so aim it back into view
    for stamp in Stamp::ALL {
        let mut canvas = fresh_canvas();
        let state = PaintState {
            stamp,
            ..PaintState::default()
        };
        let sample = if stamp == Stamp::Splatter {
            PointerSample::new(pos2(34.0, 32.0), pos2(30.0, 32.0), 1)
        } else {
            PointerSample::new(pos2(40.0, 32.0), pos2(24.0, 32.0), 1)
        };

        let primitives = Renderer::with_seed(8).render(&state, &sample);
        canvas.paint(&primitives);
        assert!(painted_pixels(&canvas) > 0, "{stamp} left the canvas blank");
    }
}

#[test]
fn test_reset_clears_paint_and_resizes() {
    let mut canvas = fresh_canvas();
    let state = PaintState {
        stamp: Stamp::Marker,
        ..PaintState::default()
    };
    let sample = PointerSample::new(pos2(32.0, 32.0), pos2(30.0, 30.0), 1);
    canvas.paint(&Renderer::with_seed(1).render(&state, &sample));
    assert!(painted_pixels(&canvas) > 100);

    canvas.reset([20, 10]);
    assert_eq!(canvas.size(), [20, 10]);
    assert_eq!(painted_pixels(&canvas), 0);
}

#[test]
fn test_zero_opacity_paints_nothing() {
    let mut canvas = fresh_canvas();
    let mut state = PaintState {
        stamp: Stamp::Marker,
        ..PaintState::default()
    };
    state.style.opacity = 0;
    let sample = PointerSample::new(pos2(32.0, 32.0), pos2(32.0, 32.0), 1);
    canvas.paint(&Renderer::with_seed(1).render(&state, &sample));
    assert_eq!(painted_pixels(&canvas), 0);
}

#[test]
fn test_marker_paints_configured_color() {
    let mut canvas = fresh_canvas();
    let mut state = PaintState {
        stamp: Stamp::Marker,
        ..PaintState::default()
    };
    state.style.set_paint_color(PaintColor::rgb(0, 0, 255));
    state.style.opacity = 255;
    let sample = PointerSample::new(pos2(32.0, 32.0), pos2(32.0, 32.0), 1);
    canvas.paint(&Renderer::with_seed(1).render(&state, &sample));
    assert_eq!(canvas.pixels().get_pixel(32, 32).0, [0, 0, 255, 255]);
}

#[test]
fn test_holding_still_with_area_stamps_leaves_no_dot() {
    // a pixel-centered pointer that never moves gives beads and wiggle zero size
    for stamp in [Stamp::Beads, Stamp::Wiggle] {
        let mut canvas = fresh_canvas();
        let mut state = PaintState {
            stamp,
            ..PaintState::default()
        };
        state.style.opacity = 255;
        state.style.set_brush_size(8.0);
        let mut renderer = Renderer::with_seed(4);
        for frame in 1..=30 {
            let sample = PointerSample::new(pos2(32.5, 32.5), pos2(32.5, 32.5), frame);
            canvas.paint(&renderer.render(&state, &sample));
        }
        assert_eq!(painted_pixels(&canvas), 0, "{stamp} built up a dot");
    }
}
