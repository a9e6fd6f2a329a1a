use approx::assert_abs_diff_eq;
use math::{
    angle::{self, AngleUnit},
    matrix_math,
    transform::{make_rotation_x, make_rotation_z, Rotation},
    types::{AnyMatrix, Matrix3, Matrix4, SquareMatrix, Vector, Vector2, Vector3, Vector4},
    ErrorKind,
};

fn sample_matrix_3() -> Matrix3 {
    Matrix3::from([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]])
}

fn sample_matrix_4() -> Matrix4 {
    Matrix4::from([
        [3.0, 2.0, 0.0, 1.0],
        [4.0, 0.0, 1.0, 2.0],
        [3.0, 0.0, 2.0, 1.0],
        [9.0, 2.0, 3.0, 1.0],
    ])
}

#[test]
fn add_then_sub_restores_vector() {
    let v2 = Vector2::new(3.0, -8.0);
    let v3 = Vector3::new(1.0, 2.0, 3.0);
    let v4 = Vector4::new(-4.0, 0.0, 12.0, 7.0);
    assert_eq!(v2 + Vector2::new(5.0, 5.0) - Vector2::new(5.0, 5.0), v2);
    assert_eq!(v3 + Vector3::new(-9.0, 4.0, 1.0) - Vector3::new(-9.0, 4.0, 1.0), v3);
    assert_eq!(v4 + 6.0 - 6.0, v4);
}

#[test]
fn squared_length_is_self_dot() {
    let v = Vector4::new(1.0, -2.0, 3.0, -4.0);
    assert_eq!(v.length2(), v.dot(&v));
    assert_eq!(v.length2(), 30.0);
}

#[test]
fn normalized_has_unit_length() {
    for v in [
        Vector3::new(3.0, 4.0, 0.0),
        Vector3::new(-1.0, 7.0, 2.5),
        Vector3::new(0.0, 0.0, 1e-3),
    ] {
        assert_abs_diff_eq!(v.normalized().length(), 1.0, epsilon = 1e-12);
    }
    let mut zero = Vector2::default();
    zero.normalize();
    assert_eq!(zero, Vector2::default());
}

#[test]
fn cross_product() {
    assert_eq!(
        Vector3::new(2.0, 3.0, 4.0).cross(Vector3::new(5.0, 6.0, 7.0)),
        Vector3::new(-3.0, 6.0, -3.0)
    );
    assert_eq!(Vector3::x().cross(Vector3::y()), Vector3::z());
}

#[test]
fn identity_is_neutral() {
    let m3 = sample_matrix_3();
    let m4 = sample_matrix_4();
    assert_eq!(m3 * Matrix3::identity(), m3);
    assert_eq!(m4 * Matrix4::identity(), m4);
    assert_eq!(Matrix3::identity().determinant(), 1.0);
    assert_eq!(Matrix4::identity().determinant(), 1.0);
}

#[test]
fn inverse_times_matrix_is_identity() {
    let m = sample_matrix_4();
    assert_abs_diff_eq!(m * m.inversed(), Matrix4::identity());
    let m = Matrix3::from([[2.0, 1.0, 0.0], [2.0, 0.0, 0.0], [2.0, 0.0, 1.0]]);
    assert_eq!(m.determinant(), -2.0);
    assert_abs_diff_eq!(m.inversed() * m, Matrix3::identity());
}

#[test]
fn singular_inverse_is_noop() {
    let m = sample_matrix_3();
    assert_eq!(m.determinant(), 0.0);
    let mut copy = m;
    copy.inverse();
    assert_eq!(copy, m);
    assert!(!copy.try_inverse());
    assert_eq!(copy, m);
}

#[test]
fn transpose_and_product() {
    let m = sample_matrix_3();
    assert_eq!(
        m.transposed(),
        Matrix3::from([[1.0, 4.0, 7.0], [2.0, 5.0, 8.0], [3.0, 6.0, 9.0]])
    );
    assert_eq!(
        m * m,
        Matrix3::from([[30.0, 36.0, 42.0], [66.0, 81.0, 96.0], [102.0, 126.0, 150.0]])
    );
}

#[test]
fn nested_array_determinant() {
    assert_eq!(matrix_math::determinant(&[[5.0]]).unwrap(), 5.0);
    assert_eq!(
        matrix_math::determinant(&[[1.0, 2.0], [3.0, 4.0]]).unwrap(),
        -2.0
    );
    let err = matrix_math::determinant(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DimensionMismatch);
}

#[test]
fn fallible_operations() {
    let mut m = sample_matrix_3();
    m.try_mul(AnyMatrix::from(Matrix3::identity())).unwrap();
    assert_eq!(m, sample_matrix_3());
    assert_eq!(
        m.try_mul(Vector3::x()).unwrap_err().kind(),
        ErrorKind::InvalidOperand
    );
    assert_eq!(
        m.try_mul(Matrix4::identity()).unwrap_err().kind(),
        ErrorKind::NotImplemented
    );
    assert_eq!(
        m.try_sub(Matrix4::identity()).unwrap_err().kind(),
        ErrorKind::DimensionMismatch
    );
    m.try_add(Matrix3::identity()).unwrap();
    assert_eq!(m.trace(), 18.0);
}

#[test]
fn rotation_of_identity() {
    let mut m = Matrix3::identity();
    m.set_rotation_x(90.0, AngleUnit::Degrees);
    assert_abs_diff_eq!(
        m,
        Matrix3::from([[1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]])
    );
    assert_abs_diff_eq!(m, make_rotation_x(90.0, AngleUnit::Degrees));
}

#[test]
fn rotation_units_agree() {
    let mut degrees = sample_matrix_4();
    let mut radians = sample_matrix_4();
    degrees.yaw(30.0);
    radians.yaw_with(angle::degrees_to_radians(30.0), AngleUnit::Radians);
    assert_abs_diff_eq!(degrees, radians);
    assert_abs_diff_eq!(
        Matrix3::from(Matrix4::rotation_z(30.0, AngleUnit::Degrees)),
        make_rotation_z(30.0, AngleUnit::Degrees)
    );
}
