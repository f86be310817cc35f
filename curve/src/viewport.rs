use crate::model::Vec2;
use serde::{Deserialize, Serialize};

/// Maps window pixel coordinates to world space for an orthographic view of
/// half-extent `world_size` along the shorter window axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub world_size: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport { width: 600, height: 600, world_size: 1.0 }
    }
}

impl Viewport {
    pub fn new(width: u32, height: u32, world_size: f32) -> Self {
        let mut v = Viewport { width: 1, height: 1, world_size };
        v.resize(width, height);
        v
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width.max(1);
        self.height = height.max(1);
    }

    /// World half-extents (x, y).
    pub fn extents(&self) -> (f32, f32) {
        let w = self.width as f32;
        let h = self.height as f32;
        if self.width > self.height {
            (self.world_size * w / h, self.world_size)
        } else {
            (self.world_size, self.world_size * h / w)
        }
    }

    /// Cursor position (origin top-left, y down) to world position (y up).
    pub fn screen_to_world(&self, x: f32, y: f32) -> Vec2 {
        let (ex, ey) = self.extents();
        Vec2 {
            x: (2.0 * x / self.width as f32 - 1.0) * ex,
            y: (1.0 - 2.0 * y / self.height as f32) * ey,
        }
    }
}
