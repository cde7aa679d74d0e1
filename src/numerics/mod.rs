// src/numerics/mod.rs
// Top-level numerics module. Exposes a `types` namespace with submodules.

pub mod types {
    // The submodules live in src/numerics/types/*.rs
    pub mod basis;
    pub mod point;
    pub mod quaternion;
    pub mod traits;
    pub mod vector;
    pub mod vector2;
}

pub mod half;
pub mod random;
pub mod scalar;

pub use types::basis::{Basis, EulerOrder};
pub use types::point::{Point2, Point2i, Point3, Size2, Size2i};
pub use types::quaternion::Quaternion;
pub use types::traits::FloatingPoint;
pub use types::vector::{Vector3, Vector3Axis};
pub use types::vector2::{Vector2, Vector2Axis, Vector2i};
