use crate::config::{default_control_points, EditorConfig};
use crate::error::{CurveError, Result};
use crate::model::{PressOutcome, Vec2};
use crate::points::ControlPoints;

/// Interactive editing state: the point set plus the current selection and
/// drag flag. Hosts feed it world-space pointer events and read polylines back.
#[derive(Clone, Debug)]
pub struct EditorSession {
    points: ControlPoints,
    config: EditorConfig,
    selected: Option<usize>,
    dragging: bool,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(EditorConfig::default()).unwrap_or_else(|_| Self::empty(EditorConfig::default()))
    }
}

impl EditorSession {
    /// Session seeded with the default cubic.
    pub fn new(config: EditorConfig) -> Result<Self> {
        let mut s = Self::empty(config);
        s.config.validate()?;
        let seed = s.seed_points();
        s.points.replace_all(&seed)?;
        Ok(s)
    }

    // Default cubic, cut down to the configured capacity
    fn seed_points(&self) -> Vec<Vec2> {
        let mut seed = default_control_points();
        if let Some(max) = self.config.max_points {
            seed.truncate(max);
        }
        seed
    }

    /// Session with no points. Call `config.validate()` first for host input.
    pub fn empty(config: EditorConfig) -> Self {
        EditorSession {
            points: ControlPoints::new(config.max_points),
            config,
            selected: None,
            dragging: false,
        }
    }

    pub fn points(&self) -> &ControlPoints {
        &self.points
    }
    pub fn points_mut(&mut self) -> &mut ControlPoints {
        &mut self.points
    }
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Primary button down: grab the point under the cursor, or add one there.
    pub fn primary_press(&mut self, pos: Vec2) -> PressOutcome {
        self.dragging = true;
        if let Some(i) = self.points.pick(self.config.pick_radius, pos) {
            self.selected = Some(i);
            return PressOutcome::Selected(i);
        }
        match self.points.append(pos) {
            Ok(i) => {
                self.selected = Some(i);
                PressOutcome::Created(i)
            }
            Err(e) => {
                log::debug!("press at ({}, {}) not applied: {}", pos.x, pos.y, e);
                self.selected = None;
                PressOutcome::Rejected
            }
        }
    }

    /// Pointer motion. Moves the selected point while a drag is active.
    pub fn drag_to(&mut self, pos: Vec2) -> bool {
        if !self.dragging {
            return false;
        }
        let Some(i) = self.selected else { return false };
        self.points.move_point(i, pos).is_ok()
    }

    pub fn release(&mut self) {
        self.dragging = false;
        self.selected = None;
    }

    /// Secondary button down: delete the point under the cursor, if any.
    pub fn secondary_press(&mut self, pos: Vec2) -> Option<(usize, Vec2)> {
        let i = self.points.pick(self.config.pick_radius, pos)?;
        let removed = self.points.remove(i).ok()?;
        self.selected = None;
        self.dragging = false;
        Some((i, removed))
    }

    /// Direct removal by index. Drops any selection, since indices shift.
    pub fn remove_point(&mut self, index: usize) -> Result<Vec2> {
        let removed = self.points.remove(index)?;
        self.release();
        Ok(removed)
    }

    /// Sampled curve at the configured resolution; empty below 2 points.
    pub fn curve_polyline(&self) -> Vec<Vec2> {
        match self.points.sample(self.config.sample_steps) {
            Ok(pts) => pts,
            Err(CurveError::InvalidDegree { .. }) => Vec::new(),
            Err(e) => {
                log::warn!("curve sampling failed: {}", e);
                Vec::new()
            }
        }
    }

    pub fn control_polygon(&self) -> &[Vec2] {
        self.points.as_slice()
    }

    pub fn reset_to_default(&mut self) -> Result<()> {
        self.release();
        let seed = self.seed_points();
        self.points.replace_all(&seed)
    }

    pub fn clear(&mut self) {
        self.release();
        self.points.clear();
    }
}
