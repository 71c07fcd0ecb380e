use super::*;
use crate::error::GeomError;
use nalgebra::vector;

fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Line {
    Line::new(vector![x1, y1], vector![x2, y2])
}

#[test]
fn general_form_vanishes_at_both_points() {
    for l in [
        line(0.0, 0.0, 4.0, 3.0),
        line(-1.0, 1.0, 5.0, 1.0),  // horizontal
        line(2.0, -3.0, 2.0, 7.0),  // vertical
        line(0.5, 0.25, -3.0, 8.0),
    ] {
        let g = general_form(&l).unwrap();
        assert!(g.eval(l.p1).abs() < 1e-12, "{g:?} at {:?}", l.p1);
        assert!(g.eval(l.p2).abs() < 1e-12, "{g:?} at {:?}", l.p2);
    }
}

#[test]
fn general_form_normalization() {
    // Horizontal: a = 0, b = 1.
    let h = general_form(&line(-1.0, 1.0, 5.0, 1.0)).unwrap();
    assert_eq!(h, GeneralForm { a: 0.0, b: 1.0, c: -1.0 });
    // Diagonal x + y - 4 = 0.
    let d = general_form(&line(4.0, 0.0, 0.0, 4.0)).unwrap();
    assert_eq!(d, GeneralForm { a: 1.0, b: 1.0, c: -4.0 });
    // Vertical x = 2: b is (signed) zero.
    let v = general_form(&line(2.0, 0.0, 2.0, 5.0)).unwrap();
    assert_eq!(v.a, 1.0);
    assert_eq!(v.b, 0.0);
    assert_eq!(v.c, -2.0);
}

#[test]
fn general_form_rejects_coincident_and_non_finite_points() {
    let err = general_form(&line(2.0, 2.0, 2.0, 2.0)).unwrap_err();
    assert!(matches!(err, GeomError::InvalidInput { .. }));
    let err = general_form(&line(f64::NAN, 0.0, 1.0, 1.0)).unwrap_err();
    assert!(matches!(err, GeomError::InvalidInput { .. }));
    let err = general_form(&line(0.0, 0.0, f64::INFINITY, 1.0)).unwrap_err();
    assert!(matches!(err, GeomError::InvalidInput { .. }));
}

#[test]
fn intersect_with_itself_and_parallels_is_none() {
    let l = general_form(&line(0.0, 0.0, 1.0, 2.0)).unwrap();
    assert!(intersect(&l, &l).is_none());
    let p = general_form(&line(0.0, 1.0, 1.0, 3.0)).unwrap();
    assert!(intersect(&l, &p).is_none());
    // Horizontal parallels take the a1 == 0 path in the check too.
    let h1 = general_form(&line(0.0, 1.0, 3.0, 1.0)).unwrap();
    let h2 = general_form(&line(0.0, 2.0, 3.0, 2.0)).unwrap();
    assert!(intersect(&h1, &h2).is_none());
}

#[test]
fn intersect_known_point_and_symmetry() {
    let horiz = general_form(&line(-1.0, 1.0, 5.0, 1.0)).unwrap();
    let diag = general_form(&line(4.0, 0.0, 0.0, 4.0)).unwrap();
    let p = intersect(&horiz, &diag).unwrap();
    let q = intersect(&diag, &horiz).unwrap();
    assert!((p - vector![3.0, 1.0]).norm() < 1e-12);
    assert!((p - q).norm() < 1e-12);

    let vert = general_form(&line(0.0, 4.0, 0.0, 0.0)).unwrap();
    let p = intersect(&horiz, &vert).unwrap();
    assert!((p - vector![0.0, 1.0]).norm() < 1e-12);
}

#[test]
fn intersect_lines_propagates_invalid_input() {
    let ok = line(0.0, 0.0, 1.0, 1.0);
    let bad = line(3.0, 3.0, 3.0, 3.0);
    assert!(intersect_lines(&ok, &bad).is_err());
    let p = intersect_lines(&ok, &line(0.0, 1.0, 1.0, 0.0)).unwrap().unwrap();
    assert!((p - vector![0.5, 0.5]).norm() < 1e-12);
}

#[test]
fn segment_contains_excludes_endpoints() {
    let a = vector![0.0, 0.0];
    let b = vector![4.0, 2.0];
    assert!(!segment_contains(a, a, b));
    assert!(!segment_contains(b, a, b));
    assert!(segment_contains(vector![2.0, 1.0], a, b));
    // Either endpoint ordering.
    assert!(segment_contains(vector![2.0, 1.0], b, a));
    assert!(!segment_contains(vector![5.0, 2.5], a, b));
    assert!(!segment_contains(vector![-1.0, -0.5], a, b));
}

#[test]
fn segment_contains_vertical_edge_uses_y() {
    let a = vector![0.0, 4.0];
    let b = vector![0.0, 0.0];
    assert!(segment_contains(vector![0.0, 1.0], a, b));
    assert!(!segment_contains(vector![0.0, 4.0], a, b));
    assert!(!segment_contains(vector![0.0, 5.0], a, b));
}

#[test]
fn inclusive_boundary_accepts_endpoints() {
    let a = vector![0.0, 0.0];
    let b = vector![4.0, 0.0];
    assert!(segment_contains_with(a, a, b, Boundary::Inclusive));
    assert!(segment_contains_with(b, a, b, Boundary::Inclusive));
    assert!(!segment_contains_with(vector![4.5, 0.0], a, b, Boundary::Inclusive));
}

#[test]
fn line_crosses_segment_combines_both_checks() {
    let candidate = general_form(&line(-1.0, 1.0, 5.0, 1.0)).unwrap();
    let (a, b) = (vector![4.0, 0.0], vector![0.0, 4.0]);
    let edge = general_form(&Line::new(a, b)).unwrap();
    assert!(line_crosses_segment(&candidate, &edge, a, b));
    // Same line, shorter edge that stops before x = 3.
    let (a2, b2) = (vector![0.0, 4.0], vector![2.0, 2.0]);
    assert!(!line_crosses_segment(&candidate, &edge, a2, b2));
    // Through vertex (0, 4) only: excluded.
    let through_vertex = general_form(&line(-1.0, 4.0, 1.0, 4.0)).unwrap();
    assert!(!line_crosses_segment(&through_vertex, &edge, a, b));
}

#[test]
fn slope_intercept_conversions() {
    let l = line(0.0, 1.0, 2.0, 5.0);
    let si = l.slope_intercept().unwrap();
    assert!((si.k - 2.0).abs() < 1e-12 && (si.b - 1.0).abs() < 1e-12);
    let g = general_form(&l).unwrap();
    let back = si.to_line();
    assert!(g.eval(back.p1).abs() < 1e-12 && g.eval(back.p2).abs() < 1e-12);

    let gs = si.general_form().unwrap();
    assert!(gs.eval(l.p1).abs() < 1e-12 && gs.eval(l.p2).abs() < 1e-12);
    let flat = SlopeIntercept::new(0.0, 3.0).general_form().unwrap();
    assert_eq!(flat, GeneralForm { a: 0.0, b: 1.0, c: -3.0 });

    assert!(line(1.0, 0.0, 1.0, 3.0).slope_intercept().is_none());
    assert!(SlopeIntercept::new(f64::NAN, 0.0).general_form().is_err());
}

#[test]
fn line_equality_is_structural() {
    let l1 = line(0.0, 0.0, 1.0, 1.0);
    let l2 = line(0.0, 0.0, 1.0, 1.0);
    assert_eq!(l1, l2);
    assert_ne!(l1, line(0.0, 0.0, 1.0, 2.0));
    assert_eq!(l1.direction(), vector![-1.0, -1.0]);
}

#[test]
fn triangle_edge_order_and_area() {
    let t = Triangle::new(vector![0.0, 0.0], vector![4.0, 0.0], vector![0.0, 4.0]);
    let ids: Vec<_> = t.edges().iter().map(|e| e.id).collect();
    assert_eq!(ids, EdgeId::ALL.to_vec());
    assert_eq!(t.edge(EdgeId::Ca).from, t.c);
    assert_eq!(t.edge(EdgeId::Ca).to, t.a);
    assert_eq!(t.signed_area2(), 16.0);
    assert!(!t.is_degenerate());
    let flat = Triangle::new(vector![0.0, 0.0], vector![1.0, 1.0], vector![2.0, 2.0]);
    assert!(flat.is_degenerate());
    assert!((t.perimeter() - (8.0 + 32f64.sqrt())).abs() < 1e-12);
}
