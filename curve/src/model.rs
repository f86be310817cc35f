use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Vec2 { x, y }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Result of a nearest-control-point query.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pick {
    pub index: usize,
    pub dist: f32,
}

/// What a primary press did to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressOutcome {
    Selected(usize),
    Created(usize),
    Rejected,
}

impl PressOutcome {
    pub fn index(self) -> Option<usize> {
        match self {
            PressOutcome::Selected(i) | PressOutcome::Created(i) => Some(i),
            PressOutcome::Rejected => None,
        }
    }
}
