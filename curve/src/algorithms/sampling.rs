use crate::error::{CurveError, Result};
use crate::geometry::bernstein::evaluate;
use crate::geometry::limits::in_step_bounds;
use crate::model::Vec2;

/// Evaluate the curve at `steps + 1` uniform parameters `i / steps`, `i = 0..=steps`.
pub fn sample_polyline(points: &[Vec2], steps: u32) -> Result<Vec<Vec2>> {
    if points.len() < 2 {
        return Err(CurveError::InvalidDegree { len: points.len() });
    }
    if !in_step_bounds(steps) {
        return Err(CurveError::InvalidSteps { steps });
    }
    let mut out = Vec::with_capacity(steps as usize + 1);
    for i in 0..=steps {
        // i / steps rather than accumulating a step keeps t=1 exact
        let t = i as f32 / steps as f32;
        out.push(evaluate(points, t)?);
    }
    Ok(out)
}

/// Interleaved x,y buffer for line-strip or point uploads.
pub fn flatten_xy(points: &[Vec2]) -> Vec<f32> {
    let mut out = Vec::with_capacity(points.len() * 2);
    for p in points {
        out.push(p.x);
        out.push(p.y);
    }
    out
}
