use crate::model::Vec2;

#[inline]
pub fn dist_sq(a: Vec2, b: Vec2) -> f32 {
    let dx = a.x - b.x; let dy = a.y - b.y;
    dx*dx + dy*dy
}

// Weighted form keeps t=0 and t=1 exact.
#[inline]
pub fn lerp(a: Vec2, b: Vec2, t: f32) -> Vec2 {
    let u = 1.0 - t;
    Vec2 { x: u*a.x + t*b.x, y: u*a.y + t*b.y }
}

/// Total length of the polyline through `points`.
pub fn polyline_length(points: &[Vec2]) -> f32 {
    points.windows(2).map(|w| dist_sq(w[0], w[1]).sqrt()).sum()
}
