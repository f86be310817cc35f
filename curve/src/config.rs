use crate::error::{CurveError, Result};
use crate::geometry::limits::{in_radius_bounds, in_step_bounds, MAX_CONTROL_POINTS};
use crate::geometry::tolerance::{DEFAULT_PICK_RADIUS, DEFAULT_SAMPLE_STEPS};
use crate::model::Vec2;
use serde::{Deserialize, Serialize};

/// Editor tuning. Every field is optional in serialized form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    /// Hit-test radius in world units.
    pub pick_radius: f32,
    /// Curve polyline resolution; the polyline has `sample_steps + 1` points.
    pub sample_steps: u32,
    /// `None` for an unbounded point set.
    pub max_points: Option<usize>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        EditorConfig {
            pick_radius: DEFAULT_PICK_RADIUS,
            sample_steps: DEFAULT_SAMPLE_STEPS,
            max_points: Some(MAX_CONTROL_POINTS),
        }
    }
}

impl EditorConfig {
    pub fn unbounded() -> Self {
        EditorConfig { max_points: None, ..Default::default() }
    }

    pub fn validate(&self) -> Result<()> {
        if !in_radius_bounds(self.pick_radius) {
            return Err(CurveError::InvalidConfig(format!(
                "pick_radius must be positive and finite, got {}",
                self.pick_radius
            )));
        }
        if !in_step_bounds(self.sample_steps) {
            return Err(CurveError::InvalidConfig(format!(
                "sample_steps out of range, got {}",
                self.sample_steps
            )));
        }
        if self.max_points == Some(0) {
            return Err(CurveError::InvalidConfig("max_points must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Parse and validate a JSON config document.
    pub fn from_json(s: &str) -> Result<Self> {
        let cfg: EditorConfig =
            serde_json::from_str(s).map_err(|e| CurveError::InvalidConfig(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }
}

/// Starting cubic shown when an editor opens.
pub fn default_control_points() -> Vec<Vec2> {
    vec![
        Vec2::new(-0.7, -0.5),
        Vec2::new(-0.3, 0.5),
        Vec2::new(0.3, 0.5),
        Vec2::new(0.7, -0.5),
    ]
}
