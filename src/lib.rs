pub mod error;
pub mod numerics;

pub use error::{NumericsError, Result};
pub use numerics::random::{RandomConfig, RandomPcg};
pub use numerics::{
    Basis, EulerOrder, FloatingPoint, Point2, Point2i, Point3, Quaternion, Size2, Size2i,
    Vector2, Vector2Axis, Vector2i, Vector3, Vector3Axis,
};
