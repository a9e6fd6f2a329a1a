use crate::angle::AngleUnit;
use crate::matrix_math;
use crate::types::{Matrix3, Matrix4, SquareMatrix, Vector3};

#[cfg(test)]
mod test_rotation_3 {
    use super::{make_rotation_x, make_rotation_y, make_rotation_z, Rotation};
    use crate::angle::AngleUnit;
    use crate::types::{Matrix3, SquareMatrix, Vector3};
    use approx::assert_abs_diff_eq;

    #[test]
    fn rotation_x() {
        let mut m = Matrix3::identity();
        m.set_rotation_x(90.0, AngleUnit::Degrees);
        assert_abs_diff_eq!(
            m,
            Matrix3::from([[1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]])
        );
        assert_abs_diff_eq!(
            make_rotation_x(std::f64::consts::FRAC_PI_2, AngleUnit::Radians) * Vector3::y(),
            Vector3::z()
        );
    }

    #[test]
    fn rotation_y() {
        let m = make_rotation_y(90.0, AngleUnit::Degrees);
        assert_abs_diff_eq!(
            m,
            Matrix3::from([[0.0, 0.0, 1.0], [0.0, 1.0, 0.0], [-1.0, 0.0, 0.0]])
        );
        assert_abs_diff_eq!(m * Vector3::z(), Vector3::x());
    }

    #[test]
    fn rotation_z() {
        let m = make_rotation_z(90.0, AngleUnit::Degrees);
        assert_abs_diff_eq!(
            m,
            Matrix3::from([[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]])
        );
        assert_abs_diff_eq!(m * Vector3::x(), Vector3::y());
    }

    #[test]
    fn degrees_match_radians() {
        let radians = 90.0 * (std::f64::consts::PI / 180.0);
        let mut a = Matrix3::from([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        let mut b = a;
        a.set_rotation_z(radians, AngleUnit::Radians);
        b.yaw(90.0);
        assert_abs_diff_eq!(a, b);
    }

    #[test]
    fn rotation_order() {
        let mut xy = Matrix3::identity();
        xy.roll(90.0);
        xy.pitch(90.0);
        let mut yx = Matrix3::identity();
        yx.pitch(90.0);
        yx.roll(90.0);
        assert!(!xy.approx_equal(&yx));
        assert_abs_diff_eq!(
            xy,
            make_rotation_x(90.0, AngleUnit::Degrees) * make_rotation_y(90.0, AngleUnit::Degrees)
        );
    }

    #[test]
    fn rotation_is_orthonormal() {
        let m = make_rotation_x(33.0, AngleUnit::Degrees)
            * make_rotation_y(-12.5, AngleUnit::Degrees)
            * make_rotation_z(71.0, AngleUnit::Degrees);
        assert_abs_diff_eq!(m.determinant(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(m.transposed() * m, Matrix3::identity());
    }
}

/// Rotation about the x axis ("roll"), `angle` is interpreted in `unit`.
pub fn make_rotation_x(angle: f64, unit: AngleUnit) -> Matrix3 {
    let rad = unit.to_radians(angle);
    let (sin, cos) = rad.sin_cos();
    Matrix3::new(
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, cos, -sin),
        Vector3::new(0.0, sin, cos),
    )
}

/// Rotation about the y axis ("pitch").
pub fn make_rotation_y(angle: f64, unit: AngleUnit) -> Matrix3 {
    let rad = unit.to_radians(angle);
    let (sin, cos) = rad.sin_cos();
    Matrix3::new(
        Vector3::new(cos, 0.0, sin),
        Vector3::new(0.0, 1.0, 0.0),
        Vector3::new(-sin, 0.0, cos),
    )
}

/// Rotation about the z axis ("yaw").
pub fn make_rotation_z(angle: f64, unit: AngleUnit) -> Matrix3 {
    let rad = unit.to_radians(angle);
    let (sin, cos) = rad.sin_cos();
    Matrix3::new(
        Vector3::new(cos, -sin, 0.0),
        Vector3::new(sin, cos, 0.0),
        Vector3::new(0.0, 0.0, 1.0),
    )
}

/// Axis rotations for a concrete matrix size.
///
/// Applying a rotation right-multiplies the receiver, `self = self * R`, so
/// chained rotations are applied in call order.
pub trait Rotation: SquareMatrix {
    fn rotation_x(angle: f64, unit: AngleUnit) -> Self;
    fn rotation_y(angle: f64, unit: AngleUnit) -> Self;
    fn rotation_z(angle: f64, unit: AngleUnit) -> Self;

    #[inline]
    fn set_rotation_x(&mut self, angle: f64, unit: AngleUnit) {
        *self = matrix_math::mul_matrices(&*self, &Self::rotation_x(angle, unit));
    }

    #[inline]
    fn set_rotation_y(&mut self, angle: f64, unit: AngleUnit) {
        *self = matrix_math::mul_matrices(&*self, &Self::rotation_y(angle, unit));
    }

    #[inline]
    fn set_rotation_z(&mut self, angle: f64, unit: AngleUnit) {
        *self = matrix_math::mul_matrices(&*self, &Self::rotation_z(angle, unit));
    }

    /// [`Rotation::set_rotation_x`] in degrees.
    #[inline]
    fn roll(&mut self, angle: f64) {
        self.set_rotation_x(angle, AngleUnit::Degrees);
    }

    /// [`Rotation::set_rotation_y`] in degrees.
    #[inline]
    fn pitch(&mut self, angle: f64) {
        self.set_rotation_y(angle, AngleUnit::Degrees);
    }

    /// [`Rotation::set_rotation_z`] in degrees.
    #[inline]
    fn yaw(&mut self, angle: f64) {
        self.set_rotation_z(angle, AngleUnit::Degrees);
    }

    #[inline]
    fn roll_with(&mut self, angle: f64, unit: AngleUnit) {
        self.set_rotation_x(angle, unit);
    }

    #[inline]
    fn pitch_with(&mut self, angle: f64, unit: AngleUnit) {
        self.set_rotation_y(angle, unit);
    }

    #[inline]
    fn yaw_with(&mut self, angle: f64, unit: AngleUnit) {
        self.set_rotation_z(angle, unit);
    }
}

impl Rotation for Matrix3 {
    #[inline]
    fn rotation_x(angle: f64, unit: AngleUnit) -> Self {
        make_rotation_x(angle, unit)
    }

    #[inline]
    fn rotation_y(angle: f64, unit: AngleUnit) -> Self {
        make_rotation_y(angle, unit)
    }

    #[inline]
    fn rotation_z(angle: f64, unit: AngleUnit) -> Self {
        make_rotation_z(angle, unit)
    }
}


impl Rotation for Matrix4 {
    #[inline]
    fn rotation_x(angle: f64, unit: AngleUnit) -> Self {
        make_rotation_x(angle, unit).into()
    }

    #[inline]
    fn rotation_y(angle: f64, unit: AngleUnit) -> Self {
        make_rotation_y(angle, unit).into()
    }

    #[inline]
    fn rotation_z(angle: f64, unit: AngleUnit) -> Self {
        make_rotation_z(angle, unit).into()
    }
}
