//! Behaviour at the limits of floating point: near-collinear queries, very
//! large and very small triangles, and non-finite coordinates.

use triangle_geometry::{
    Degeneracy, Exact, Fast, FastTriangle, KernelTriangle, Orientation, OrientationKernel, Point,
    Triangle,
};

#[test]
fn exact_kernel_rejects_point_a_rounding_error_off_an_edge() {
    // Exactly, (-0.2, 0.9) is just clockwise of the edge (-1, 0.1) -> (0.5, 1.6),
    // on the far side from the third vertex. The f64 cross product rounds to 0.
    let (a, b, c) = (Point::new(-1.0, 0.1), Point::new(0.5, 1.6), Point::new(-1.0, 2.0));
    let q = Point::new(-0.2, 0.9);

    assert!(!Triangle::new(a, b, c).contains_point(&q));
    assert!(FastTriangle::new(a, b, c).contains_point(&q));
}

#[test]
fn exact_kernel_rejects_point_a_rounding_error_off_a_segment() {
    let (a, b) = (Point::new(-1.0, 0.1), Point::new(0.5, 1.6));
    let q = Point::new(-0.2, 0.9);

    let exact = Triangle::new(a, b, b);
    let fast = FastTriangle::new(a, b, b);
    assert_eq!(exact.degeneracy(), Degeneracy::Segment);
    assert!(!exact.contains_point(&q));
    assert!(fast.contains_point(&q));
}

#[test]
fn large_contains_small_but_not_the_reverse() {
    let large = Triangle::from_coords(-10000.0, -10000.0, 10000.0, -10000.0, 0.0, 20000.0);
    let small = Triangle::from_coords(-0.00001, -0.00001, 0.00001, -0.00001, 0.0, 0.00002);
    assert!(large.contains_triangle(&small));
    assert!(!small.contains_triangle(&large));
}

#[test]
fn tiny_triangle_is_not_degenerate() {
    let tiny = Triangle::from_coords(0.0, 0.0, 1e-100, 0.0, 0.0, 1e-100);
    assert_eq!(tiny.degeneracy(), Degeneracy::Proper);
    assert!(tiny.contains_point(&Point::new(1e-101, 1e-101)));
    assert!(!tiny.contains_point(&Point::new(1e-100, 1e-100)));
}

#[test]
fn non_finite_coordinates_are_never_contained() {
    let t = Triangle::from_coords(0.0, 0.0, 4.0, 0.0, 0.0, 4.0);
    for q in [
        Point::new(f64::NAN, 1.0),
        Point::new(1.0, f64::NAN),
        Point::new(f64::INFINITY, 0.0),
        Point::new(0.0, f64::NEG_INFINITY),
    ] {
        assert!(!t.contains_point(&q));
    }

    let with_nan = Triangle::from_coords(0.0, 0.0, f64::NAN, 0.0, 0.0, 4.0);
    assert!(!with_nan.contains_point(&Point::new(0.0, 0.0)));
    assert!(!with_nan.contains_triangle(&with_nan));
    assert!(!t.contains_triangle(&with_nan));

    let nan = Point::new(f64::NAN, f64::NAN);
    let nan_point = Triangle::new(nan, nan, nan);
    assert!(!nan_point.contains_point(&nan));
}

fn huge_triangle_answers<K: OrientationKernel>() {
    let t = KernelTriangle::<K>::from_coords(-1e200, -1e200, 1e200, -1e200, 0.0, 1e200);
    assert_eq!(t.orientation(), Orientation::CounterClockwise);
    assert!(!t.is_degenerate());

    assert!(!t.contains_point(&Point::new(1e250, 1e250)));
    assert!(!t.contains_point(&Point::new(-1e300, 5e299)));
    assert!(!t.contains_point(&Point::new(f64::MAX, 0.0)));
    assert!(t.contains_point(&Point::new(0.0, 0.0)));
    assert!(t.contains_point(&Point::new(0.0, -1e200)));
    for vertex in t.vertices() {
        assert!(t.contains_point(&vertex));
    }
    assert!(t.contains_triangle(&t));
}

#[test]
fn huge_coordinates_do_not_overflow_containment() {
    huge_triangle_answers::<Exact>();
    huge_triangle_answers::<Fast>();
}

#[test]
fn fast_segment_contains_its_own_corners() {
    let fast = FastTriangle::from_coords(
        0.5774467022710263,
        -0.8122808264515302,
        -0.08178511187708029,
        0.27156527731809593,
        -0.10101787042252375,
        0.3031859454455259,
    );
    assert_eq!(fast.degeneracy(), Degeneracy::Segment);
    for vertex in fast.vertices() {
        assert!(fast.contains_point(&vertex), "{vertex}");
    }
    assert!(fast.contains_triangle(&fast));
}
