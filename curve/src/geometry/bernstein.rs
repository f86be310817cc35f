//! Bézier evaluation over an arbitrary number of control points.
//!
//! The curve of degree `n = points.len() - 1` is the Bernstein-weighted sum
//! `B(t) = Σ C(n,i) · t^i · (1-t)^(n-i) · P_i`. Binomials come from the
//! multiplicative recurrence `C(n,i) = C(n,i-1) · (n-i+1) / i`, which stays
//! integer exact up to [`MAX_BERNSTEIN_DEGREE`]. Higher degrees are evaluated
//! with de Casteljau instead.

use crate::error::{CurveError, Result};
use crate::geometry::limits::MAX_BERNSTEIN_DEGREE;
use crate::geometry::math::lerp;
use crate::model::Vec2;

/// Binomial coefficient `C(n, k)`, or `None` if it does not fit in a `u64`.
pub fn binomial(n: usize, k: usize) -> Option<u64> {
    if k > n {
        return Some(0);
    }
    let mut result: u64 = 1;
    for i in 1..=k {
        result = result.checked_mul((n - i + 1) as u64)? / i as u64;
    }
    Some(result)
}

/// Bernstein basis weight `C(n,i) · t^i · (1-t)^(n-i)`.
///
/// Zero when `i > n` or when `C(n,i)` overflows.
pub fn bernstein_weight(n: usize, i: usize, t: f32) -> f32 {
    if i > n {
        return 0.0;
    }
    match binomial(n, i) {
        Some(c) => weight_with_coeff(c, n, i, t),
        None => 0.0,
    }
}

// Caller guarantees i <= n
#[inline]
fn weight_with_coeff(c: u64, n: usize, i: usize, t: f32) -> f32 {
    c as f32 * t.powi(i as i32) * (1.0 - t).powi((n - i) as i32)
}

/// Point on the Bézier curve defined by `points` at parameter `t`.
pub fn evaluate(points: &[Vec2], t: f32) -> Result<Vec2> {
    if points.len() < 2 {
        return Err(CurveError::InvalidDegree { len: points.len() });
    }
    let n = points.len() - 1;
    if n > MAX_BERNSTEIN_DEGREE {
        return de_casteljau(points, t);
    }
    let mut c: u64 = 1;
    let mut x = 0.0f32;
    let mut y = 0.0f32;
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            c = c * (n - i + 1) as u64 / i as u64;
        }
        let w = weight_with_coeff(c, n, i, t);
        x += w * p.x;
        y += w * p.y;
    }
    Ok(Vec2 { x, y })
}

/// Same curve point via repeated linear interpolation.
pub fn de_casteljau(points: &[Vec2], t: f32) -> Result<Vec2> {
    if points.len() < 2 {
        return Err(CurveError::InvalidDegree { len: points.len() });
    }
    let mut work = points.to_vec();
    for level in (1..work.len()).rev() {
        for i in 0..level {
            work[i] = lerp(work[i], work[i + 1], t);
        }
    }
    Ok(work[0])
}
