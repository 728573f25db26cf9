//! # Conformance Checks
//!
//! Each [`Check`] is a small black-box experiment run through the public
//! [`TriangleContract`] surface only. A check stops at its first violation
//! and reports it as a [`ConformanceError`]; the suite always runs every
//! check so one defect does not hide another.
//!
//! ## Checks
//!
//! | Check | Asserts |
//! |---|---|
//! | `self_containment` | a triangle contains and equals itself |
//! | `equal_permuted` | reversed vertex order: equal, mutually containing |
//! | `corners` | each corner, as a point triangle, is contained |
//! | `scale_asymmetry` | huge contains tiny, never the reverse |
//! | `no_overlap` .. `three_overlap` | exact contained-corner counts |
//! | `edges_only_overlap` | crossing edges without a corner inside is not containment |
//! | `idempotence` | repeated queries give identical answers |
//! | `degenerate_shapes` | segment and point triangles behave as such |
//! | `non_finite_policy` | NaN or infinite coordinates are never contained |

use std::fmt;

use config::constants::GlobalConfig;
use serde::Serialize;
use triangle_geometry::{Point, TriangleContract};

use crate::error::{ConformanceError, ConformanceResult};
use crate::report::ConformanceReport;
use crate::scenarios::{self, Coords};

/// One experiment of the battery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Check {
    /// `t.contains(t)` and `t == t`.
    SelfContainment,
    /// A triangle and its reversal are equal and contain each other.
    EqualPermuted,
    /// Corners are members, via point triangles.
    Corners,
    /// Large contains small; small does not contain large.
    ScaleAsymmetry,
    /// Zero corners of the companion contained.
    NoOverlap,
    /// Exactly one corner contained.
    OneOverlap,
    /// Exactly two corners contained.
    TwoOverlap,
    /// All three corners contained.
    ThreeOverlap,
    /// Shapes overlap, no corner contained, so no containment.
    EdgesOnlyOverlap,
    /// Queries have no hidden state.
    Idempotence,
    /// Collinear and coincident vertices.
    DegenerateShapes,
    /// Non-finite coordinates.
    NonFinitePolicy,
}

impl Check {
    /// Every check, in the order the suite runs them.
    pub const ALL: [Check; 12] = [
        Check::SelfContainment,
        Check::EqualPermuted,
        Check::Corners,
        Check::ScaleAsymmetry,
        Check::NoOverlap,
        Check::OneOverlap,
        Check::TwoOverlap,
        Check::ThreeOverlap,
        Check::EdgesOnlyOverlap,
        Check::Idempotence,
        Check::DegenerateShapes,
        Check::NonFinitePolicy,
    ];

    /// Stable snake_case name.
    pub fn name(&self) -> &'static str {
        match self {
            Check::SelfContainment => "self_containment",
            Check::EqualPermuted => "equal_permuted",
            Check::Corners => "corners",
            Check::ScaleAsymmetry => "scale_asymmetry",
            Check::NoOverlap => "no_overlap",
            Check::OneOverlap => "one_overlap",
            Check::TwoOverlap => "two_overlap",
            Check::ThreeOverlap => "three_overlap",
            Check::EdgesOnlyOverlap => "edges_only_overlap",
            Check::Idempotence => "idempotence",
            Check::DegenerateShapes => "degenerate_shapes",
            Check::NonFinitePolicy => "non_finite_policy",
        }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// ENTRY POINTS
// =============================================================================

/// Runs every check against `T` with the default configuration.
pub fn run<T: TriangleContract>() -> ConformanceReport {
    run_with::<T>(&GlobalConfig::default())
}

/// Runs every check against `T`.
pub fn run_with<T: TriangleContract>(config: &GlobalConfig) -> ConformanceReport {
    let mut report = ConformanceReport::new(T::NAME);
    for check in Check::ALL {
        match run_check::<T>(check, config) {
            Ok(()) => {
                log::debug!("{}: {check} passed", T::NAME);
                report.record_pass(check);
            }
            Err(err) => {
                log::warn!("{}: {err}", T::NAME);
                report.record_failure(err);
            }
        }
    }
    log::info!(
        "{}: {} of {} checks passed",
        T::NAME,
        report.passed.len(),
        Check::ALL.len()
    );
    report
}

/// Runs a single check against `T`.
pub fn run_check<T: TriangleContract>(
    check: Check,
    config: &GlobalConfig,
) -> ConformanceResult<()> {
    match check {
        Check::SelfContainment => self_containment::<T>(),
        Check::EqualPermuted => equal_permuted::<T>(),
        Check::Corners => corners::<T>(),
        Check::ScaleAsymmetry => scale_asymmetry::<T>(),
        Check::NoOverlap => corner_counts::<T>(check, &scenarios::NO_OVERLAP, 0),
        Check::OneOverlap => corner_counts::<T>(check, &scenarios::ONE_OVERLAP, 1),
        Check::TwoOverlap => corner_counts::<T>(check, &scenarios::TWO_OVERLAP, 2),
        Check::ThreeOverlap => corner_counts::<T>(check, &scenarios::THREE_OVERLAP, 3),
        Check::EdgesOnlyOverlap => edges_only_overlap::<T>(),
        Check::Idempotence => idempotence::<T>(config.repetitions),
        Check::DegenerateShapes => degenerate_shapes::<T>(),
        Check::NonFinitePolicy => non_finite_policy::<T>(),
    }
}

// =============================================================================
// ASSERTIONS
// =============================================================================

fn expect_point<T: TriangleContract>(
    check: Check,
    triangle: &T,
    point: &Point,
    expected: bool,
) -> ConformanceResult<()> {
    let actual = triangle.contains_point(point);
    if actual == expected {
        Ok(())
    } else {
        Err(ConformanceError::PointContainment {
            check,
            triangle: format!("{triangle:?}"),
            point: point.to_string(),
            expected,
            actual,
        })
    }
}

fn expect_triangle<T: TriangleContract>(
    check: Check,
    container: &T,
    contained: &T,
    expected: bool,
) -> ConformanceResult<()> {
    let actual = container.contains_triangle(contained);
    if actual == expected {
        Ok(())
    } else {
        Err(ConformanceError::TriangleContainment {
            check,
            container: format!("{container:?}"),
            contained: format!("{contained:?}"),
            expected,
            actual,
        })
    }
}

fn expect_equal<T: TriangleContract>(
    check: Check,
    left: &T,
    right: &T,
    expected: bool,
) -> ConformanceResult<()> {
    let actual = left == right;
    if actual == expected {
        Ok(())
    } else {
        Err(ConformanceError::Equality {
            check,
            left: format!("{left:?}"),
            right: format!("{right:?}"),
            expected,
            actual,
        })
    }
}

/// Number of `test`'s corners that `main` contains, each asked as a point
/// triangle.
fn contained_corners<T: TriangleContract>(main: &T, test: &T) -> usize {
    test.vertices()
        .into_iter()
        .filter(|&corner| main.contains_triangle(&T::point(corner)))
        .count()
}

// =============================================================================
// CHECKS
// =============================================================================

fn self_containment<T: TriangleContract>() -> ConformanceResult<()> {
    let check = Check::SelfContainment;
    for coords in scenarios::MAIN_TRIANGLES.iter().chain([&scenarios::VERY_SMALL]) {
        let t: T = scenarios::build(coords);
        expect_triangle(check, &t, &t, true)?;
        expect_equal(check, &t, &t, true)?;
    }
    Ok(())
}

fn equal_permuted<T: TriangleContract>() -> ConformanceResult<()> {
    let check = Check::EqualPermuted;
    for coords in &scenarios::MAIN_TRIANGLES {
        let t: T = scenarios::build(coords);
        let [a, b, c] = t.vertices();
        let reversed = T::from_vertices(c, b, a);
        expect_triangle(check, &t, &reversed, true)?;
        expect_triangle(check, &reversed, &t, true)?;
        expect_equal(check, &t, &reversed, true)?;
        expect_equal(check, &reversed, &t, true)?;
        expect_equal(check, &t, &T::from_vertices(b, c, a), true)?;
        expect_equal(check, &t, &T::from_vertices(a, c, b), true)?;
    }
    let main: T = scenarios::build(&scenarios::MAIN_TRIANGLES[0]);
    let other: T = scenarios::build(&scenarios::THREE_OVERLAP[0]);
    expect_equal(check, &main, &other, false)
}

fn corners<T: TriangleContract>() -> ConformanceResult<()> {
    let check = Check::Corners;
    let [x, y, z] = scenarios::corner_case();
    let full = T::from_vertices(x, y, z);
    for corner in [x, y, z] {
        expect_triangle(check, &full, &T::point(corner), true)?;
        expect_point(check, &full, &corner, true)?;
    }
    for coords in &scenarios::MAIN_TRIANGLES {
        let t: T = scenarios::build(coords);
        for corner in t.vertices() {
            expect_point(check, &t, &corner, true)?;
        }
    }
    Ok(())
}

fn scale_asymmetry<T: TriangleContract>() -> ConformanceResult<()> {
    let check = Check::ScaleAsymmetry;
    let large: T = scenarios::build(&scenarios::VERY_LARGE);
    let small: T = scenarios::build(&scenarios::VERY_SMALL);
    expect_triangle(check, &large, &small, true)?;
    expect_triangle(check, &small, &large, false)
}

fn corner_counts<T: TriangleContract>(
    check: Check,
    companions: &'static [Coords; 3],
    expected: usize,
) -> ConformanceResult<()> {
    for (main, test) in scenarios::paired(companions) {
        let main: T = scenarios::build(main);
        let test: T = scenarios::build(test);
        let actual = contained_corners(&main, &test);
        if actual != expected {
            return Err(ConformanceError::CornerCount {
                check,
                main: format!("{main:?}"),
                test: format!("{test:?}"),
                expected,
                actual,
            });
        }
    }
    Ok(())
}

fn edges_only_overlap<T: TriangleContract>() -> ConformanceResult<()> {
    let check = Check::EdgesOnlyOverlap;
    for (main, test) in scenarios::paired(&scenarios::EDGES_ONLY_OVERLAP) {
        let main: T = scenarios::build(main);
        let test: T = scenarios::build(test);
        expect_triangle(check, &main, &test, false)?;
    }
    Ok(())
}

fn idempotence<T: TriangleContract>(repetitions: usize) -> ConformanceResult<()> {
    let check = Check::Idempotence;
    for (main, test) in scenarios::paired(&scenarios::TWO_OVERLAP) {
        let main: T = scenarios::build(main);
        let test: T = scenarios::build(test);
        let contains = main.contains_triangle(&test);
        let corners = contained_corners(&main, &test);
        let equal = main == test;
        for repetition in 0..repetitions {
            if main.contains_triangle(&test) != contains
                || contained_corners(&main, &test) != corners
                || (main == test) != equal
            {
                return Err(ConformanceError::Unstable {
                    check,
                    subject: format!("{main:?} / {test:?}"),
                    repetition,
                });
            }
        }
    }
    Ok(())
}

fn degenerate_shapes<T: TriangleContract>() -> ConformanceResult<()> {
    let check = Check::DegenerateShapes;
    let segment: T = scenarios::build(&scenarios::SEGMENT);
    for corner in segment.vertices() {
        expect_point(check, &segment, &corner, true)?;
    }
    expect_point(check, &segment, &Point::new(1.5, 1.5), true)?;
    expect_point(check, &segment, &Point::new(2.5, 2.5), false)?;
    expect_point(check, &segment, &Point::new(-0.5, -0.5), false)?;
    expect_point(check, &segment, &Point::new(1.0, 0.0), false)?;

    let point = T::point(Point::new(1.0, 1.0));
    expect_point(check, &point, &Point::new(1.0, 1.0), true)?;
    expect_point(check, &point, &Point::new(1.0, 1.000_000_001), false)?;
    expect_triangle(check, &segment, &point, true)?;
    expect_triangle(check, &point, &segment, false)?;

    let main: T = scenarios::build(&scenarios::MAIN_TRIANGLES[2]);
    expect_triangle(check, &main, &segment, false)?;
    expect_triangle(check, &segment, &main, false)
}

fn non_finite_policy<T: TriangleContract>() -> ConformanceResult<()> {
    let check = Check::NonFinitePolicy;
    let main: T = scenarios::build(&scenarios::MAIN_TRIANGLES[0]);
    for query in [
        Point::new(f64::NAN, 5.0),
        Point::new(3.0, f64::NAN),
        Point::new(f64::INFINITY, 5.0),
        Point::new(3.0, f64::NEG_INFINITY),
    ] {
        expect_point(check, &main, &query, false)?;
        expect_triangle(check, &main, &T::point(query), false)?;
    }

    let [a, b, _] = main.vertices();
    let open = T::from_vertices(a, b, Point::new(f64::NAN, 0.0));
    expect_point(check, &open, &a, false)?;
    expect_point(check, &open, &b, false)
}
