// src/numerics/types/point.rs
// Positional and extent aliases over the vector types.

use super::vector::Vector3;
use super::vector2::{Vector2, Vector2i};

/// Point3 is an alias to Vector3 to represent points in space.
pub type Point3<T = f32> = Vector3<T>;

pub type Point2<T = f32> = Vector2<T>;

/// Extents; `width()`/`height()` read `x`/`y`.
pub type Size2<T = f32> = Vector2<T>;

pub type Point2i = Vector2i;
pub type Size2i = Vector2i;
