// Caps on control point sets and sampling, applied to host-provided input

// Point-count ceiling of the bounded editor variant
pub const MAX_CONTROL_POINTS: usize = 32;

// Largest degree whose binomials stay exact in u64 with the multiplicative recurrence
pub const MAX_BERNSTEIN_DEGREE: usize = 60;

// Sampling
pub const MAX_SAMPLE_STEPS: u32 = 100_000;

// Numeric bounds
pub const COORD_MIN: f32 = -10_000_000.0;
pub const COORD_MAX: f32 =  10_000_000.0;
pub const PICK_RADIUS_MAX: f32 = 10_000.0;

#[inline]
pub fn in_coord_bounds(x: f32) -> bool { x.is_finite() && x >= COORD_MIN && x <= COORD_MAX }

// Any positive finite radius is a valid query; the cap only applies to configured radii
#[inline]
pub fn is_usable_radius(r: f32) -> bool { r.is_finite() && r > 0.0 }

#[inline]
pub fn in_radius_bounds(r: f32) -> bool { is_usable_radius(r) && r <= PICK_RADIUS_MAX }

#[inline]
pub fn in_step_bounds(steps: u32) -> bool { steps >= 1 && steps <= MAX_SAMPLE_STEPS }
