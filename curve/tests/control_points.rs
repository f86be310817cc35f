use curve::geometry::limits::MAX_CONTROL_POINTS;
use curve::{ControlPoints, CurveError, Vec2};

fn filled(n: usize) -> ControlPoints {
    let mut pts = ControlPoints::unbounded();
    for i in 0..n {
        pts.append(Vec2::new(i as f32, 0.0)).unwrap();
    }
    pts
}

#[test]
fn append_returns_index_and_tracks_degree() {
    let mut pts = ControlPoints::unbounded();
    assert_eq!(pts.degree(), None);
    assert_eq!(pts.append(Vec2::new(0.0, 0.0)), Ok(0));
    assert!(!pts.has_curve());
    assert_eq!(pts.evaluate(0.5), Err(CurveError::InvalidDegree { len: 1 }));
    assert_eq!(pts.append(Vec2::new(1.0, 0.0)), Ok(1));
    assert_eq!(pts.degree(), Some(1));
    assert_eq!(pts.append(Vec2::new(2.0, 0.0)), Ok(2));
    assert_eq!(pts.degree(), Some(2));
}

#[test]
fn capacity_is_enforced_without_mutation() {
    let mut pts = ControlPoints::with_capacity_limit(MAX_CONTROL_POINTS);
    for i in 0..MAX_CONTROL_POINTS {
        pts.append(Vec2::new(i as f32, 1.0)).unwrap();
    }
    assert!(pts.is_full());
    let ver = pts.version();
    assert_eq!(
        pts.append(Vec2::new(99.0, 99.0)),
        Err(CurveError::CapacityExceeded { capacity: MAX_CONTROL_POINTS })
    );
    assert_eq!(pts.len(), MAX_CONTROL_POINTS);
    assert_eq!(pts.version(), ver, "state mutated on error");
}

#[test]
fn move_replaces_in_place() {
    let mut pts = filled(3);
    assert_eq!(pts.move_point(1, Vec2::new(5.0, 5.0)), Ok(Vec2::new(1.0, 0.0)));
    assert_eq!(pts.as_slice(), &[Vec2::new(0.0, 0.0), Vec2::new(5.0, 5.0), Vec2::new(2.0, 0.0)]);
}

#[test]
fn move_and_remove_out_of_range() {
    let mut pts = filled(2);
    let ver = pts.version();
    assert_eq!(
        pts.move_point(2, Vec2::new(0.0, 0.0)),
        Err(CurveError::IndexOutOfRange { index: 2, len: 2 })
    );
    assert_eq!(pts.remove(7), Err(CurveError::IndexOutOfRange { index: 7, len: 2 }));
    assert_eq!(pts.len(), 2);
    assert_eq!(pts.version(), ver);
}

#[test]
fn non_finite_coordinates_are_rejected() {
    let mut pts = filled(1);
    let ver = pts.version();
    assert_eq!(pts.append(Vec2::new(f32::NAN, 0.0)), Err(CurveError::NonFinite { param: "x" }));
    assert_eq!(
        pts.move_point(0, Vec2::new(0.0, f32::INFINITY)),
        Err(CurveError::NonFinite { param: "y" })
    );
    assert_eq!(pts.append(Vec2::new(1.0e38, 0.0)), Err(CurveError::NonFinite { param: "x" }));
    assert_eq!(pts.version(), ver);
}

#[test]
fn remove_shifts_and_unpicks() {
    let mut pts = filled(4);
    let removed = pts.remove(1).unwrap();
    assert_eq!(removed, Vec2::new(1.0, 0.0));
    assert_eq!(pts.len(), 3);
    assert_eq!(pts.as_slice(), &[Vec2::new(0.0, 0.0), Vec2::new(2.0, 0.0), Vec2::new(3.0, 0.0)]);
    assert_eq!(pts.pick(0.5, removed), None);
}

#[test]
fn replace_all_is_all_or_nothing() {
    let mut pts = ControlPoints::with_capacity_limit(3);
    pts.replace_all(&[Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0)]).unwrap();
    let ver = pts.version();
    let too_many = [Vec2::new(0.0, 0.0); 4];
    assert_eq!(pts.replace_all(&too_many), Err(CurveError::CapacityExceeded { capacity: 3 }));
    let bad = [Vec2::new(0.0, 0.0), Vec2::new(f32::NAN, 0.0)];
    assert!(pts.replace_all(&bad).is_err());
    assert_eq!(pts.len(), 2);
    assert_eq!(pts.version(), ver);
}

#[test]
fn clear_bumps_version_once() {
    let mut pts = filled(3);
    let ver = pts.version();
    pts.clear();
    assert!(pts.is_empty());
    assert_eq!(pts.version(), ver + 1);
    pts.clear();
    assert_eq!(pts.version(), ver + 1);
}

#[test]
fn sampling_tracks_edits() {
    let mut pts = filled(3);
    let before = pts.sample(10).unwrap();
    assert_eq!(before, pts.sample(10).unwrap());
    pts.move_point(2, Vec2::new(2.0, 3.0)).unwrap();
    let after = pts.sample(10).unwrap();
    assert_ne!(before, after);
    assert_eq!(after[10], Vec2::new(2.0, 3.0));
}
