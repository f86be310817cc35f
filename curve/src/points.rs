use crate::algorithms::picking::{pick_nearest, pick_point};
use crate::algorithms::sampling::sample_polyline;
use crate::error::{CurveError, Result};
use crate::geometry::bernstein::evaluate;
use crate::geometry::limits::in_coord_bounds;
use crate::model::{Pick, Vec2};

/// Ordered control points of one curve. Index order is polygon order and
/// parameterization order.
#[derive(Clone, Debug)]
pub struct ControlPoints {
    points: Vec<Vec2>,
    capacity: Option<usize>,
    version: u64, // increments on every successful edit
}

fn check_point(p: Vec2) -> Result<()> {
    if !in_coord_bounds(p.x) {
        return Err(CurveError::NonFinite { param: "x" });
    }
    if !in_coord_bounds(p.y) {
        return Err(CurveError::NonFinite { param: "y" });
    }
    Ok(())
}

impl Default for ControlPoints {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl ControlPoints {
    pub fn with_capacity_limit(capacity: usize) -> Self {
        ControlPoints { points: Vec::with_capacity(capacity), capacity: Some(capacity), version: 1 }
    }
    pub fn unbounded() -> Self {
        ControlPoints { points: Vec::new(), capacity: None, version: 1 }
    }
    pub fn new(capacity: Option<usize>) -> Self {
        match capacity {
            Some(c) => Self::with_capacity_limit(c),
            None => Self::unbounded(),
        }
    }

    fn bump(&mut self) {
        self.version = self.version.wrapping_add(1);
    }

    pub fn version(&self) -> u64 {
        self.version
    }
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }
    pub fn len(&self) -> usize {
        self.points.len()
    }
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    pub fn is_full(&self) -> bool {
        self.capacity.map_or(false, |c| self.points.len() >= c)
    }
    /// Curve degree, `None` while fewer than 2 points exist.
    pub fn degree(&self) -> Option<usize> {
        if self.points.len() >= 2 { Some(self.points.len() - 1) } else { None }
    }
    pub fn has_curve(&self) -> bool {
        self.degree().is_some()
    }
    pub fn get(&self, index: usize) -> Option<Vec2> {
        self.points.get(index).copied()
    }
    pub fn as_slice(&self) -> &[Vec2] {
        &self.points
    }
    pub fn iter(&self) -> impl Iterator<Item = &Vec2> {
        self.points.iter()
    }

    // Edits
    pub fn append(&mut self, p: Vec2) -> Result<usize> {
        check_point(p)?;
        if let Some(capacity) = self.capacity {
            if self.points.len() >= capacity {
                log::warn!("append rejected: capacity {} reached", capacity);
                return Err(CurveError::CapacityExceeded { capacity });
            }
        }
        let index = self.points.len();
        self.points.push(p);
        self.bump();
        log::debug!("append #{} at ({}, {})", index, p.x, p.y);
        Ok(index)
    }

    /// Replace the point at `index`, returning its previous position.
    pub fn move_point(&mut self, index: usize, p: Vec2) -> Result<Vec2> {
        let len = self.points.len();
        check_point(p)?;
        let slot = self.points.get_mut(index).ok_or(CurveError::IndexOutOfRange { index, len })?;
        let old = std::mem::replace(slot, p);
        self.bump();
        log::debug!("move #{} to ({}, {})", index, p.x, p.y);
        Ok(old)
    }

    /// Remove the point at `index`; later points shift down by one.
    pub fn remove(&mut self, index: usize) -> Result<Vec2> {
        let len = self.points.len();
        if index >= len {
            log::warn!("remove rejected: index {} of {}", index, len);
            return Err(CurveError::IndexOutOfRange { index, len });
        }
        let old = self.points.remove(index);
        self.bump();
        log::debug!("remove #{}", index);
        Ok(old)
    }

    pub fn clear(&mut self) {
        if self.points.is_empty() {
            return;
        }
        self.points.clear();
        self.bump();
    }

    /// Swap in a whole new point list. All-or-nothing.
    pub fn replace_all(&mut self, points: &[Vec2]) -> Result<()> {
        if let Some(capacity) = self.capacity {
            if points.len() > capacity {
                return Err(CurveError::CapacityExceeded { capacity });
            }
        }
        for p in points {
            check_point(*p)?;
        }
        self.points.clear();
        self.points.extend_from_slice(points);
        self.bump();
        Ok(())
    }

    // Queries
    pub fn evaluate(&self, t: f32) -> Result<Vec2> {
        evaluate(&self.points, t)
    }
    pub fn sample(&self, steps: u32) -> Result<Vec<Vec2>> {
        sample_polyline(&self.points, steps)
    }
    pub fn pick(&self, radius: f32, query: Vec2) -> Option<usize> {
        pick_point(&self.points, radius, query)
    }
    pub fn pick_nearest(&self, radius: f32, query: Vec2) -> Option<Pick> {
        pick_nearest(&self.points, radius, query)
    }
}
