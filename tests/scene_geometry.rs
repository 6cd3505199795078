use approx::assert_relative_eq;
use tangent_viz::style::{CURVE_BLUE, CURVE_RED};
use tangent_viz::{Scene, TangentLine, Viewport, sample_curve};

fn viewport() -> Viewport {
    Viewport::new(800, 800)
}

#[test]
fn tangent_endpoints_map_to_the_expected_pixels() {
    let tangent = TangentLine::new(2.0, 4.0, 4.0, CURVE_BLUE);
    let (a, b) = tangent.endpoints();
    assert_eq!(a, (-2.0, -12.0));
    assert_eq!(b, (6.0, 20.0));

    let viewport = viewport();
    assert_eq!(viewport.to_pixel(a.0, a.1), (310.0, 940.0));
    assert_eq!(viewport.to_pixel(b.0, b.1), (670.0, -500.0));
}

#[test]
fn mirrored_tangent_is_the_reflection_of_the_first() {
    let (a, b) = TangentLine::new(2.0, 4.0, 4.0, CURVE_BLUE).endpoints();
    let (c, d) = TangentLine::new(-2.0, 4.0, -4.0, CURVE_RED).endpoints();
    // Reflecting across the y axis swaps the endpoint order.
    assert_eq!(c, (-b.0, b.1));
    assert_eq!(d, (-a.0, a.1));
}

#[test]
fn parabolas_mirror_across_the_vertical_axis() {
    let viewport = viewport();
    let scene = Scene::standard();
    let first = sample_curve(&scene.curves[0], viewport);
    let second = sample_curve(&scene.curves[1], viewport);

    assert_eq!(first.len(), second.len());
    for (&(x1, y1), &(x2, y2)) in first.iter().zip(&second) {
        // Same parameter means the same height and a mirrored x position.
        assert_eq!(y1, y2);
        assert_relative_eq!(x1 + x2, 800.0, epsilon = 1e-9);
    }
}

#[test]
fn sampling_starts_at_the_range_start() {
    let scene = Scene::standard();
    let points = sample_curve(&scene.curves[0], viewport());
    // t = -3.5 lands on (-3.5, 12.25) in model space.
    assert_eq!(points[0], (242.5, -151.25));
}

#[test]
fn sampling_is_deterministic() {
    let viewport = viewport();
    let scene = Scene::standard();
    for curve in &scene.curves {
        let first = sample_curve(curve, viewport);
        let second = sample_curve(curve, viewport);
        assert_eq!(first, second);
    }
}

#[test]
fn legend_content_is_fixed() {
    let scene = Scene::standard();
    let labels: Vec<&str> = scene.legend.iter().map(|line| line.label).collect();
    assert_eq!(
        labels,
        vec![
            "Curve 1: x=t, y=t^2",
            "Curve 2: x=-t, y=t^2",
            "Curve 3: x=t*cos(t)/3, y=t*sin(t)/3",
            "Tangent point at t = 2.0",
            "Dashed lines = Tangent lines",
        ]
    );

    let swatched: Vec<bool> = scene.legend.iter().map(|l| l.swatch.is_some()).collect();
    assert_eq!(swatched, vec![true, true, true, false, false]);

    // The swatch colors repeat the curve colors in drawing order.
    for (line, curve) in scene.legend.iter().zip(&scene.curves) {
        let swatch = line.swatch.unwrap();
        let color = curve.color;
        assert_eq!((swatch.0, swatch.1, swatch.2), (color.0, color.1, color.2));
    }
}
