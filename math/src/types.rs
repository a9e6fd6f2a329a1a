mod matrix;
mod offset;
mod point;
mod vector;

pub use matrix::{AnyMatrix, AnyVector, Matrix3, Matrix4, SquareMatrix};
pub use offset::{Axis, Offset};
pub use point::{Point2, Point3};
pub use vector::{Vector, Vector2, Vector3, Vector4};

/// Tolerance used by `approx_equal` and the default `approx` epsilon.
pub const EPS: f64 = 1e-9;
