//! Basic usage example for planar-splines

use planar_splines::prelude::*;
use planar_splines::CatmullRomSpline;

fn main() {
    println!("=== Basic Spline Evaluation Example ===\n");

    let control_points: Vec<Point> = [
        (0.0, 2.5),
        (2.0, 4.0),
        (3.0, 2.0),
        (4.0, 1.5),
        (5.0, 6.0),
        (6.0, 5.0),
        (7.0, 3.0),
    ]
    .into_iter()
    .map(Point::from)
    .collect();

    // Example 1: The same control points with every scheme
    println!("Different schemes with the same control points:");
    let kinds =
        [SplineKind::Linear, SplineKind::CatmullRom, SplineKind::Bspline];
    for kind in kinds {
        let curve = new_spline(kind, &control_points).unwrap();
        let p = curve.at(1.5);
        println!("  {:<12} at(1.5) = ({:.5}, {:.5})", kind.name(), p.x, p.y);
    }

    // Example 2: Sampling a range
    println!("\nCatmull-Rom samples from t = 0 to t = 2:");
    let curve = new_spline(SplineKind::CatmullRom, &control_points).unwrap();
    for p in curve.range(0.0, 2.0, 0.25) {
        println!("  ({:.5}, {:.5})", p.x, p.y);
    }

    // Example 3: Ghost points
    println!("\nEvaluation buffer with ghost points:");
    for p in curve.points() {
        println!("  ({}, {})", p.x, p.y);
    }

    // Example 4: Supplying the tangent points yourself
    let inner = CatmullRomSpline::new(&control_points, false).unwrap();
    println!(
        "\nWithout ghost points the curve spans t = 0..{} \
         and starts at ({}, {})",
        inner.max_t(),
        inner.at(0.0).x,
        inner.at(0.0).y
    );

    // Example 5: Error handling
    println!("\nError handling:");
    match new_spline(SplineKind::Bspline, &control_points[..1]) {
        Ok(_) => println!("  unexpected success"),
        Err(e) => println!("  Error: {}", e),
    }
    match new_spline_from_tag(999, &control_points) {
        Ok(_) => println!("  unexpected success"),
        Err(e) => println!("  Error: {}", e),
    }
}
