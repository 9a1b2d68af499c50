use approx::assert_abs_diff_eq;

use curvy::color::conversions::{hcl_to_rgb, hsl_to_rgb, rgb_to_hcl, rgb_to_hsl};
use curvy::color::{ColorError, Generator, Interpolation};
use curvy::geom::{CatmullRomSegment, CubicBezierSegment, LineSegment, Position, EPSILON};
use curvy::path::svg::{path_to_svg, SvgOptions};
use curvy::path::{Path2, Path3, PathError};
use curvy::{point, point3, Color, ColorPalette, ColorScale, Curve, PathContext, Segment};

#[test]
fn path_parameter_follows_distance() {
    let mut path = Path2::new();
    path.add(LineSegment {
        from: point(0.0, 0.0),
        to: point(30.0, 0.0),
    });
    path.add(CubicBezierSegment {
        from: point(30.0, 0.0),
        ctrl1: point(40.0, 0.0),
        ctrl2: point(50.0, 10.0),
        to: point(50.0, 20.0),
    });

    let total = path.length();
    assert!(total > 50.0);

    // The first third of the distance is on the straight line.
    let p = path.sample(15.0 / total);
    assert!(p.distance_to(point(15.0, 0.0)) < 1e-3);
    assert!(path.sample(0.0).distance_to(point(0.0, 0.0)) < 1e-9);
    assert!(path.sample(1.0).distance_to(point(50.0, 20.0)) < 1e-9);

    let points = path.spaced_points(20);
    let gaps: Vec<f64> = points.windows(2).map(|w| w[0].distance_to(w[1])).collect();
    let (min, max) = gaps
        .iter()
        .fold((f64::MAX, f64::MIN), |(a, b), &g| (a.min(g), b.max(g)));
    assert!(max - min < 0.05 * max);
}

#[test]
fn closed_3d_path() {
    let mut path = Path3::new();
    path.set_from_points([
        point3(0.0, 0.0, 0.0),
        point3(1.0, 0.0, 0.0),
        point3(1.0, 1.0, 1.0),
    ]);
    assert!(!path.is_closed());
    path.set_auto_close(true);

    let points = path.points(10);
    assert_eq!(points.first(), points.last());
    assert!(points.len() > 3);

    let catmull_rom = CatmullRomSegment {
        prev: point3(-1.0, 0.0, 0.0),
        from: point3(0.0, 0.0, 0.0),
        to: point3(1.0, 0.0, 0.0),
        next: point3(2.0, 0.0, 0.0),
    };
    assert!(catmull_rom.sample(0.5).distance_to(point3(0.5, 0.0, 0.0)) < EPSILON);
}

#[test]
fn context_to_svg() {
    let mut ctx = PathContext::new();
    ctx.translate(10.0, 10.0);
    ctx.rect(0.0, 0.0, 20.0, 10.0);
    assert_eq!(
        path_to_svg(ctx.path(), &SvgOptions::default()),
        "M10,10L30,10 L30,20 L10,20 L10,10"
    );

    assert_eq!(
        ctx.arc_to(point(1.0, 1.0), point(2.0, 2.0), -1.0),
        Err(PathError::NegativeRadius(-1.0))
    );

    ctx.begin_path();
    assert_eq!(ctx.path().len(), 1);
    assert_eq!(ctx.current_position(), None);
}

#[test]
fn color_round_trips() {
    let mut state: u64 = 0x9e37_79b9_7f4a_7c15;
    let mut next = || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        (state >> 11) as f64 / (1u64 << 53) as f64
    };

    for _ in 0..1000 {
        let rgb = [next(), next(), next()];
        let via_hcl = hcl_to_rgb(rgb_to_hcl(rgb));
        let via_hsl = hsl_to_rgb(rgb_to_hsl(rgb));
        for i in 0..3 {
            assert_abs_diff_eq!(via_hcl[i], rgb[i], epsilon = 1e-6);
            assert_abs_diff_eq!(via_hsl[i], rgb[i], epsilon = 1e-6);
        }
    }
}

#[test]
fn scales_and_palettes() {
    let black = Color::from_name("black").unwrap();
    let white = "#fff".parse::<Color>().unwrap();
    let scale = ColorScale::generate(&Interpolation::rgb(), 5, &black, &white);
    assert_eq!(scale.colors()[0], black);
    assert_eq!(scale.colors()[4], white);
    assert!(scale
        .colors()
        .windows(2)
        .all(|w| w[0].lab()[0] < w[1].lab()[0]));

    let mut palette = ColorPalette::new(Color::from_hex(0xcc3333));
    palette.subscribe("light", Generator::light_scale());
    palette.subscribe(
        "diverging",
        Generator::new(Interpolation::diverging(), 3).with_target(Color::from_hex(0x3333cc)),
    );

    let middle = palette.get_color("diverging", 0.5);
    assert!(middle.hcl()[1] < 1e-3);
    assert_eq!(palette.get_color("missing", 0.5), Color::from_hex(0xcc3333));

    assert_eq!(
        Color::from_hex_str("#12"),
        Err(ColorError::InvalidHex("#12".to_string()))
    );
}
