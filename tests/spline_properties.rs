//! Behaviour every spline kind has to show through the public entry points.

use approx::assert_abs_diff_eq;
use planar_splines::prelude::*;
use planar_splines::{CatmullRomSpline, LinearSpline};

const KINDS: [SplineKind; 3] =
    [SplineKind::Linear, SplineKind::CatmullRom, SplineKind::Bspline];

fn control_points() -> Vec<Point> {
    [
        (0.0, 2.5),
        (2.0, 4.0),
        (3.0, 2.0),
        (4.0, 1.5),
        (5.0, 6.0),
        (6.0, 5.0),
        (7.0, 3.0),
        (9.0, 1.0),
        (10.0, 2.5),
        (11.0, 7.0),
        (9.0, 5.0),
        (8.0, 6.0),
        (7.0, 5.5),
    ]
    .into_iter()
    .map(Point::from)
    .collect()
}

fn is_rounded(value: f64) -> bool {
    let scaled = value * 1e5;
    (scaled.round() - scaled).abs() < 1e-6
}

#[test]
fn too_few_points_fail_for_every_kind() {
    for kind in KINDS {
        for points in [&[][..], &[Point::new(1.0, 2.0)][..]] {
            assert!(matches!(
                new_spline(kind, points),
                Err(SplineError::NotEnoughPoints { required: 2, .. })
            ));
        }
    }
}

#[test]
fn unknown_tag_fails() {
    let points = [Point::new(0.0, 0.0), Point::new(1.0, 1.0)];

    assert_eq!(
        new_spline_from_tag(999, &points),
        Err(SplineError::UnknownSplineType(999))
    );
    assert_eq!(
        new_spline_from_tag(999, &[]),
        Err(SplineError::UnknownSplineType(999))
    );
    assert_eq!(
        new_spline_from_tag(1, &points).unwrap().kind(),
        SplineKind::CatmullRom
    );
}

#[test]
fn parameters_are_clamped() {
    for kind in KINDS {
        let curve = new_spline(kind, &control_points()).unwrap();
        let max_t = curve.max_t();

        assert_eq!(curve.at(-1.0), curve.at(0.0), "{kind:?}");
        assert_eq!(curve.at(-1e9), curve.at(0.0), "{kind:?}");
        assert_eq!(curve.at(max_t + 0.5), curve.at(max_t), "{kind:?}");
        assert_eq!(curve.at(1e9), curve.at(max_t), "{kind:?}");
    }
}

#[test]
fn linear_is_exact() {
    let points = [Point::new(0.0, 0.0), Point::new(2.0, 4.0)];
    let curve = new_spline(SplineKind::Linear, &points).unwrap();

    assert_eq!(curve.at(0.0), Point::new(0.0, 0.0));
    assert_eq!(curve.at(1.0), Point::new(2.0, 4.0));
    assert_eq!(curve.at(0.5), Point::new(1.0, 2.0));
}

#[test]
fn linear_len_counts_points_cubic_len_counts_segments() {
    let points = control_points();

    let linear = LinearSpline::new(&points).unwrap();
    assert_eq!(linear.len(), points.len());
    assert_eq!(linear.max_t(), (points.len() - 1) as f64);

    let catmull_rom = CatmullRomSpline::new(&points, true).unwrap();
    assert_eq!(catmull_rom.len(), points.len());
    assert_eq!(catmull_rom.points().len(), points.len() + 2);
    assert_eq!(catmull_rom.max_t(), (points.len() - 1) as f64);
}

#[test]
fn catmull_rom_passes_through_control_points() {
    let points = control_points();
    let curve = new_spline(SplineKind::CatmullRom, &points).unwrap();

    for (i, p) in points.iter().enumerate() {
        let q = curve.at(i as f64);
        assert_abs_diff_eq!(q.x, p.x, epsilon = 1e-5);
        assert_abs_diff_eq!(q.y, p.y, epsilon = 1e-5);
    }

    let first = curve.at(0.0);
    assert_abs_diff_eq!(first.x, 0.0, epsilon = 1e-5);
    assert_abs_diff_eq!(first.y, 2.5, epsilon = 1e-5);
}

#[test]
fn bspline_keeps_end_points() {
    let points = control_points();
    let curve = new_spline(SplineKind::Bspline, &points).unwrap();

    let first = curve.at(0.0);
    let last = curve.at(curve.max_t());
    assert_abs_diff_eq!(first.x, points[0].x, epsilon = 1e-5);
    assert_abs_diff_eq!(first.y, points[0].y, epsilon = 1e-5);
    assert_abs_diff_eq!(last.x, points[12].x, epsilon = 1e-5);
    assert_abs_diff_eq!(last.y, points[12].y, epsilon = 1e-5);
}

#[test]
fn coordinates_are_rounded() {
    for kind in KINDS {
        let curve = new_spline(kind, &control_points()).unwrap();
        for p in curve.range(0.0, curve.max_t(), 0.037) {
            assert!(is_rounded(p.x), "{kind:?}: {}", p.x);
            assert!(is_rounded(p.y), "{kind:?}: {}", p.y);
        }
    }
}

#[test]
fn range_count_and_spacing() {
    for kind in KINDS {
        let curve = new_spline(kind, &control_points()).unwrap();
        let samples: Vec<Point> = curve.range(0.0, 3.0, 0.5).collect();

        assert_eq!(samples.len(), 7);
        for (i, p) in samples.iter().enumerate() {
            assert_eq!(*p, curve.at(i as f64 * 0.5), "{kind:?}");
        }

        let reversed: Vec<Point> = curve.range(3.0, 0.0, 0.5).collect();
        assert_eq!(samples, reversed);
    }
}

#[test]
fn dense_range_over_full_domain() {
    let points = control_points();
    let curve = new_spline(SplineKind::CatmullRom, &points).unwrap();
    let samples: Vec<Point> = curve.range(0.0, curve.max_t(), 0.25).collect();

    assert_eq!(samples.len(), 49);
    assert_eq!(samples.first(), Some(&curve.at(0.0)));
    assert_eq!(samples.last(), Some(&curve.at(curve.max_t())));
}

#[test]
fn range_is_restartable() {
    for kind in KINDS {
        let curve = new_spline(kind, &control_points()).unwrap();
        let range = curve.range(0.0, 12.0, 0.01);

        let first: Vec<Point> = range.clone().collect();
        let second: Vec<Point> = range.collect();
        let third: Vec<Point> = curve.range(0.0, 12.0, 0.01).collect();

        assert_eq!(first, second);
        assert_eq!(first, third);
    }
}

#[test]
fn concurrent_evaluation_matches_sequential() {
    for kind in KINDS {
        let curve = new_spline(kind, &control_points()).unwrap();
        let expected: Vec<Point> = curve.range(0.0, 12.0, 0.05).collect();
        let (curve, expected) = (&curve, &expected);

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    scope.spawn(move || {
                        let ranged: Vec<Point> =
                            curve.range(0.0, 12.0, 0.05).collect();
                        let pointwise: Vec<Point> = (0..expected.len())
                            .map(|i| curve.at(i as f64 * 0.05))
                            .collect();
                        (ranged, pointwise)
                    })
                })
                .collect();

            for handle in handles {
                let (ranged, pointwise) = handle.join().unwrap();
                assert_eq!(&ranged, expected);
                assert_eq!(&pointwise, expected);
            }
        });
    }
}

#[test]
fn caller_points_are_not_touched() {
    let points = control_points();
    let before = points.clone();

    for kind in KINDS {
        let curve = new_spline(kind, &points).unwrap();
        let _ = curve.range(0.0, 12.0, 0.1).count();
    }

    assert_eq!(points, before);
}

#[cfg(feature = "serde")]
#[test]
fn points_and_kinds_serialize() {
    let json = serde_json::to_string(&Point::new(1.5, -2.0)).unwrap();
    assert_eq!(json, r#"{"x":1.5,"y":-2.0}"#);
    assert_eq!(
        serde_json::from_str::<Point>(&json).unwrap(),
        Point::new(1.5, -2.0)
    );

    assert_eq!(serde_json::to_string(&SplineKind::CatmullRom).unwrap(), "1");
    for kind in KINDS {
        let json = serde_json::to_string(&kind).unwrap();
        assert_eq!(json, i64::from(kind).to_string());
        assert_eq!(serde_json::from_str::<SplineKind>(&json).unwrap(), kind);
    }

    assert!(serde_json::from_str::<SplineKind>("7").is_err());
    assert!(serde_json::from_str::<SplineKind>(r#""CatmullRom""#).is_err());
}
