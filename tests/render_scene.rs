use tangent_viz::{Scene, Viewport, render_to_buffer};

const WIDTH: u32 = 800;
const HEIGHT: u32 = 800;

fn render_standard() -> Vec<u8> {
    render_to_buffer(&Scene::standard(), Viewport::new(WIDTH, HEIGHT)).expect("render succeeds")
}

fn rgb_at(buf: &[u8], width: u32, x: u32, y: u32) -> (u8, u8, u8) {
    let idx = ((y * width + x) * 3) as usize;
    (buf[idx], buf[idx + 1], buf[idx + 2])
}

#[test]
fn background_stays_white_away_from_the_figure() {
    let buf = render_standard();
    assert_eq!(rgb_at(&buf, WIDTH, 750, 30), (255, 255, 255));
    assert_eq!(rgb_at(&buf, WIDTH, 30, 700), (255, 255, 255));
}

#[test]
fn gridlines_and_axes_use_their_colors() {
    let buf = render_standard();
    // Vertical gridline at x = 1 and horizontal gridline at y = 1.
    assert_eq!(rgb_at(&buf, WIDTH, 445, 50), (230, 230, 230));
    assert_eq!(rgb_at(&buf, WIDTH, 50, 355), (230, 230, 230));
    // The axes cross the viewport center in black.
    assert_eq!(rgb_at(&buf, WIDTH, 400, 50), (0, 0, 0));
    assert_eq!(rgb_at(&buf, WIDTH, 50, 400), (0, 0, 0));
}

#[test]
fn coincident_parabolas_show_the_later_color() {
    let buf = render_standard();
    // Both parabolas pass through model (1, 1); the mirrored one is drawn
    // second and wins.
    assert_eq!(rgb_at(&buf, WIDTH, 445, 355), (220, 0, 0));
}

#[test]
fn spiral_leaves_green_near_its_axis_crossing() {
    let buf = render_standard();
    // The spiral crosses the y axis around model (0, 2.62), pixel (400, 282).
    let mut found = false;
    for y in 277..=287 {
        for x in 395..=405 {
            if rgb_at(&buf, WIDTH, x, y) == (0, 200, 0) {
                found = true;
            }
        }
    }
    assert!(found, "no spiral pixel near the y axis crossing");
}

#[test]
fn markers_sit_on_the_tangency_points() {
    let buf = render_standard();
    assert_eq!(rgb_at(&buf, WIDTH, 490, 220), (0, 0, 255));
    assert_eq!(rgb_at(&buf, WIDTH, 310, 220), (220, 0, 0));
}

#[test]
fn reference_segment_draws_green_dashes() {
    let buf = render_standard();
    // Row y = 0.6 model units above the x axis; the first dash starts at
    // the segment's left end.
    assert_eq!(rgb_at(&buf, WIDTH, 302, 373), (0, 200, 0));
}

#[test]
fn legend_swatches_show_the_curve_colors() {
    let buf = render_standard();
    assert_eq!(rgb_at(&buf, WIDTH, 30, 31), (0, 0, 255));
    assert_eq!(rgb_at(&buf, WIDTH, 30, 49), (220, 0, 0));
    assert_eq!(rgb_at(&buf, WIDTH, 30, 67), (0, 200, 0));
}

#[test]
fn legend_panel_dims_the_gridline_beneath() {
    let buf = render_standard();
    // The vertical gridline at x = -4 runs under the translucent panel, so
    // the pixel is lighter than the gridline but not pure white.
    let (r, g, b) = rgb_at(&buf, WIDTH, 220, 50);
    assert_eq!(r, g);
    assert_eq!(g, b);
    assert!(r > 244 && r < 255, "blended gridline out of range: {r}");
}

#[test]
fn legend_text_is_drawn_in_dark_pixels() {
    let buf = render_standard();
    let mut dark = 0;
    for y in 22..=128 {
        for x in 40..=245 {
            let (r, g, b) = rgb_at(&buf, WIDTH, x, y);
            if r < 100 && g < 100 && b < 100 {
                dark += 1;
            }
        }
    }
    assert!(dark > 50, "expected legend text pixels, found {dark}");
}

#[test]
fn rendering_is_deterministic() {
    let first = render_standard();
    let second = render_standard();
    assert_eq!(first.len(), (WIDTH * HEIGHT * 3) as usize);
    assert_eq!(first, second);
}

#[test]
fn other_viewport_sizes_render_around_their_own_center() {
    let buf = render_to_buffer(&Scene::standard(), Viewport::new(400, 300)).expect("render");
    assert_eq!(buf.len(), 400 * 300 * 3);
    // Vertical axis through the new center column.
    assert_eq!(rgb_at(&buf, 400, 200, 10), (0, 0, 0));
    // The legend stays anchored to the top-left corner in pixel space.
    assert_eq!(rgb_at(&buf, 400, 30, 31), (0, 0, 255));
}

#[test]
fn zero_sized_viewports_are_rejected() {
    let scene = Scene::standard();
    assert!(render_to_buffer(&scene, Viewport::new(0, 800)).is_err());
    assert!(render_to_buffer(&scene, Viewport::new(800, 0)).is_err());
}
