use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum CurveError {
    #[error("a curve needs at least 2 control points, got {len}")]
    InvalidDegree { len: usize },
    #[error("index {index} out of range for {len} control points")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("control point capacity of {capacity} reached")]
    CapacityExceeded { capacity: usize },
    #[error("parameter '{param}' must be finite and within coordinate bounds")]
    NonFinite { param: &'static str },
    #[error("step count {steps} out of range")]
    InvalidSteps { steps: u32 },
    #[error("invalid editor config: {0}")]
    InvalidConfig(String),
}

impl CurveError {
    /// Stable machine-readable code, shared with host bindings.
    pub fn code(&self) -> &'static str {
        match self {
            CurveError::InvalidDegree { .. } => "invalid_degree",
            CurveError::IndexOutOfRange { .. } => "out_of_range",
            CurveError::CapacityExceeded { .. } => "capacity_exceeded",
            CurveError::NonFinite { .. } => "non_finite",
            CurveError::InvalidSteps { .. } => "invalid_steps",
            CurveError::InvalidConfig(_) => "invalid_config",
        }
    }
}

pub type Result<T> = std::result::Result<T, CurveError>;
