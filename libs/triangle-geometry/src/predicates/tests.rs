use super::*;

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

#[test]
fn test_kernels_agree_on_simple_orientation() {
    let (a, b, c) = (p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0));
    assert_eq!(orientation::<Exact>(&a, &b, &c), Orientation::CounterClockwise);
    assert_eq!(orientation::<Fast>(&a, &b, &c), Orientation::CounterClockwise);
    assert_eq!(orientation::<Exact>(&a, &c, &b), Orientation::Clockwise);
    assert_eq!(orientation::<Fast>(&a, &c, &b), Orientation::Clockwise);
    assert_eq!(orientation::<Exact>(&a, &b, &p(2.0, 0.0)), Orientation::Collinear);
}

#[test]
fn test_fast_kernel_is_twice_signed_area() {
    let area = Fast::orient(&p(1.0, 0.0), &p(2.0, 1.0), &p(-1.0, 2.0));
    approx::assert_relative_eq!(area, 4.0);
}

#[test]
fn test_exact_kernel_sees_rounding_fast_kernel_misses() {
    // (-0.2, 0.9) lies 2.5e-17 (in doubled area) clockwise of the line.
    let (a, b, q) = (p(-1.0, 0.1), p(0.5, 1.6), p(-0.2, 0.9));
    assert_eq!(orientation::<Exact>(&a, &b, &q), Orientation::Clockwise);
    assert_eq!(orientation::<Fast>(&a, &b, &q), Orientation::Collinear);
}

#[test]
fn test_degeneracy_classification() {
    assert_eq!(
        degeneracy::<Exact>(&[p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0)]),
        Degeneracy::Proper
    );
    assert_eq!(
        degeneracy::<Exact>(&[p(0.0, 0.0), p(1.0, 1.0), p(2.0, 2.0)]),
        Degeneracy::Segment
    );
    assert_eq!(
        degeneracy::<Exact>(&[p(0.0, 0.0), p(0.0, 0.0), p(3.0, 0.0)]),
        Degeneracy::Segment
    );
    assert_eq!(
        degeneracy::<Exact>(&[p(2.0, 3.0), p(2.0, 3.0), p(2.0, 3.0)]),
        Degeneracy::Point
    );
}

#[test]
fn test_hull_segment_picks_extremes() {
    let vertices = [p(1.0, 1.0), p(3.0, 3.0), p(-2.0, -2.0)];
    assert_eq!(hull_segment(&vertices), (p(-2.0, -2.0), p(3.0, 3.0)));

    // Vertical line: x ties, y decides.
    let vertices = [p(0.0, 5.0), p(-0.0, 1.0), p(0.0, 3.0)];
    let (start, end) = hull_segment(&vertices);
    assert_eq!(start.y(), 1.0);
    assert_eq!(end.y(), 5.0);
}

#[test]
fn test_segment_contains_is_boundary_inclusive() {
    let (s, e) = (p(0.0, 0.0), p(4.0, 2.0));
    assert!(segment_contains::<Exact>(&s, &e, &s));
    assert!(segment_contains::<Exact>(&s, &e, &e));
    assert!(segment_contains::<Exact>(&s, &e, &p(2.0, 1.0)));
    assert!(!segment_contains::<Exact>(&s, &e, &p(6.0, 3.0)));
    assert!(!segment_contains::<Exact>(&s, &e, &p(2.0, 1.5)));
}

#[test]
fn test_contains_point_both_orientations() {
    let ccw = [p(0.0, 0.0), p(4.0, 0.0), p(0.0, 4.0)];
    let cw = [p(0.0, 0.0), p(0.0, 4.0), p(4.0, 0.0)];
    for vertices in [&ccw, &cw] {
        assert!(contains_point::<Exact>(vertices, &p(1.0, 1.0)));
        assert!(contains_point::<Exact>(vertices, &p(2.0, 0.0)));
        assert!(contains_point::<Exact>(vertices, &p(4.0, 0.0)));
        assert!(!contains_point::<Exact>(vertices, &p(3.0, 3.0)));
        assert!(!contains_point::<Exact>(vertices, &p(-0.5, 1.0)));
        assert!(!contains_point::<Exact>(vertices, &p(5.0, 0.0)));
    }
}

#[test]
fn test_contains_point_degenerate_point() {
    let vertices = [p(1.5, 2.5); 3];
    assert!(contains_point::<Exact>(&vertices, &p(1.5, 2.5)));
    assert!(!contains_point::<Exact>(&vertices, &p(1.5, 2.500_000_1)));
}

#[test]
fn test_contains_point_non_finite_is_never_contained() {
    let vertices = [p(0.0, 0.0), p(4.0, 0.0), p(0.0, 4.0)];
    assert!(!contains_point::<Exact>(&vertices, &p(f64::NAN, 1.0)));
    assert!(!contains_point::<Fast>(&vertices, &p(1.0, f64::INFINITY)));
    let open = [p(0.0, 0.0), p(f64::INFINITY, 0.0), p(0.0, 4.0)];
    assert!(!contains_point::<Exact>(&open, &p(0.0, 0.0)));
    assert!(!contains_point::<Fast>(&open, &p(1.0, 1.0)));
}

/// Reports NaN for every orientation, like an overflowing kernel would.
#[derive(Clone, Copy, Default)]
struct Overflowing;

impl OrientationKernel for Overflowing {
    const NAME: &'static str = "overflowing";

    fn orient(_a: &Point, _b: &Point, _c: &Point) -> f64 {
        f64::NAN
    }
}

#[test]
fn test_nan_area_is_not_contained() {
    let vertices = [p(0.0, 0.0), p(4.0, 0.0), p(0.0, 4.0)];
    assert!(!contains_point::<Overflowing>(&vertices, &p(1.0, 1.0)));
    assert!(!contains_point::<Overflowing>(&vertices, &p(100.0, 100.0)));
    // Vertices never reach the kernel.
    assert!(contains_point::<Overflowing>(&vertices, &p(4.0, 0.0)));
}

#[test]
fn test_fast_segment_contains_its_own_vertices() {
    // orient(a, b, c) rounds to zero but orient(start, end, a) does not.
    let vertices = [
        p(0.5774467022710263, -0.8122808264515302),
        p(-0.08178511187708029, 0.27156527731809593),
        p(-0.10101787042252375, 0.3031859454455259),
    ];
    assert_eq!(degeneracy::<Fast>(&vertices), Degeneracy::Segment);
    for vertex in &vertices {
        assert!(contains_point::<Fast>(&vertices, vertex), "{vertex}");
        assert!(contains_point::<Exact>(&vertices, vertex), "{vertex}");
    }
}

#[test]
fn test_rescaling_is_a_power_of_two() {
    let small = [p(3.0, -7.5), p(1.0e150, 0.0)];
    assert_eq!(rescaled(small), small);

    let [a, b] = rescaled([p(3.0e200, -1.0e200), p(-0.5, 2.0)]);
    assert!(a.x() <= 1.0 && a.x() > 0.5);
    let factor = a.x() / 3.0e200;
    assert_eq!(factor.log2().fract(), 0.0);
    assert_eq!(b, p(-0.5 * factor, 2.0 * factor));

    let infinite = [p(f64::INFINITY, 1.0e300)];
    assert_eq!(rescaled(infinite), infinite);
}

#[test]
fn test_huge_coordinates_keep_their_orientation() {
    let (a, b, c) = (p(-1.0e200, -1.0e200), p(1.0e200, -1.0e200), p(0.0, 1.0e200));
    assert_eq!(orientation::<Exact>(&a, &b, &c), Orientation::CounterClockwise);
    assert_eq!(orientation::<Fast>(&a, &b, &c), Orientation::CounterClockwise);
    assert_eq!(orientation::<Fast>(&a, &c, &b), Orientation::Clockwise);
    assert_eq!(degeneracy::<Fast>(&[a, b, c]), Degeneracy::Proper);
}
