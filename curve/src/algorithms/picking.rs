use crate::geometry::limits::is_usable_radius;
use crate::geometry::math::dist_sq;
use crate::model::{Pick, Vec2};

pub fn pick_nearest(points: &[Vec2], radius: f32, query: Vec2) -> Option<Pick> {
    if !is_usable_radius(radius) || !query.is_finite() {
        return None;
    }
    let r2 = radius * radius;
    // Strict improvement only, so equal distances keep the lowest index
    let mut best: Option<(usize, f32)> = None;
    for (i, p) in points.iter().enumerate() {
        let d2 = dist_sq(*p, query);
        if d2 < r2 && best.map_or(true, |(_, bd)| d2 < bd) {
            best = Some((i, d2));
        }
    }
    let (index, d2) = best?;
    log::trace!("pick ({}, {}) r={} -> {}", query.x, query.y, radius, index);
    Some(Pick { index, dist: d2.sqrt() })
}

/// Index of the closest control point strictly within `radius` of `query`.
pub fn pick_point(points: &[Vec2], radius: f32, query: Vec2) -> Option<usize> {
    pick_nearest(points, radius, query).map(|p| p.index)
}
