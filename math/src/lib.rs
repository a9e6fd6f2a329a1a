pub mod angle;
pub mod error;
pub mod matrix_math;
pub mod transform;
pub mod types;
pub mod vector_math;

pub use angle::AngleUnit;
pub use error::{ErrorKind, MathError, MathResult};
