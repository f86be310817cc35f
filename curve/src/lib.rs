pub mod model;
pub mod error;
pub mod config;
pub mod points;
pub mod session;
pub mod viewport;
pub mod geometry {
    pub mod bernstein;
    pub mod limits;
    pub mod math;
    pub mod tolerance;
}
pub mod algorithms {
    pub mod picking;
    pub mod sampling;
}

pub use algorithms::picking::{pick_nearest, pick_point};
pub use algorithms::sampling::{flatten_xy, sample_polyline};
pub use config::{default_control_points, EditorConfig};
pub use error::{CurveError, Result};
pub use geometry::bernstein::{binomial, de_casteljau, evaluate};
pub use model::{Pick, PressOutcome, Vec2};
pub use points::ControlPoints;
pub use session::EditorSession;
pub use viewport::Viewport;
