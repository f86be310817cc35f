// Shared tolerances for curve evaluation and hit-testing

pub const EPS_EVAL: f32 = 1e-5;           // agreement between evaluation schemes

// Editor defaults, matching the original demo's normalized-device space
pub const DEFAULT_PICK_RADIUS: f32 = 0.1;
pub const DEFAULT_SAMPLE_STEPS: u32 = 100;

#[inline] pub fn approx_eq(a: f32, b: f32, eps: f32) -> bool { (a - b).abs() <= eps }
