use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use std::fmt::{Debug, Display, Formatter};
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use super::{Vector, Vector2, Vector3, Vector4, EPS};
use crate::error::{MathError, MathResult};
use crate::matrix_math::{self, Operand};

/// Square matrix of a size known at compile time, stored as owned row vectors.
///
/// Rows can be read and modified cell by cell, but never replaced or removed
/// as a whole. All algebra is shared through [`crate::matrix_math`].
pub trait SquareMatrix:
    Debug + Default + Copy + PartialEq + Pod + Index<usize, Output = Self::Row> + IndexMut<usize>
{
    type Row: Vector;
    const SIZE: usize;
    const NAME: &'static str;

    fn into_any(self) -> AnyMatrix;

    #[inline]
    fn identity() -> Self {
        let mut matrix = Self::zeroed();
        matrix.set_identity();
        matrix
    }

    /// Row-major view of all cells.
    #[inline]
    fn as_slice(&self) -> &[f64] {
        bytemuck::cast_slice(std::slice::from_ref(self))
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [f64] {
        bytemuck::cast_slice_mut(std::slice::from_mut(self))
    }

    #[inline]
    fn row(&self, index: usize) -> MathResult<&Self::Row> {
        if index < Self::SIZE {
            Ok(&self[index])
        } else {
            Err(MathError::out_of_range(index, Self::SIZE))
        }
    }

    #[inline]
    fn row_mut(&mut self, index: usize) -> MathResult<&mut Self::Row> {
        if index < Self::SIZE {
            Ok(&mut self[index])
        } else {
            Err(MathError::out_of_range(index, Self::SIZE))
        }
    }

    #[inline]
    fn exists(&self, index: usize) -> bool {
        index < Self::SIZE
    }

    /// Whole rows can not be replaced, cells have to be set through [`SquareMatrix::row_mut`].
    #[inline]
    fn set_row(&mut self, _index: usize, _row: Self::Row) -> MathResult<()> {
        Err(MathError::UnsupportedOperation(
            "matrix rows can not be replaced, set individual cells instead",
        ))
    }

    #[inline]
    fn remove_row(&mut self, _index: usize) -> MathResult<()> {
        Err(MathError::UnsupportedOperation(
            "matrix rows can not be removed",
        ))
    }

    #[inline]
    fn cell(&self, row: usize, column: usize) -> MathResult<f64> {
        self.row(row)?.get(column)
    }

    #[inline]
    fn set_cell(&mut self, row: usize, column: usize, value: f64) -> MathResult<()> {
        self.row_mut(row)?.set(column, value)
    }

    #[inline]
    fn copy_from(&mut self, other: &Self) {
        self.as_mut_slice().copy_from_slice(other.as_slice());
    }

    fn copy_from_any(&mut self, other: &AnyMatrix) -> MathResult<()> {
        if other.size() != Self::SIZE {
            return Err(MathError::DimensionMismatch {
                expected: Self::SIZE,
                found: other.size(),
            });
        }
        self.as_mut_slice().copy_from_slice(other.as_slice());
        Ok(())
    }

    fn set_identity(&mut self) {
        for i in 0..Self::SIZE {
            for j in 0..Self::SIZE {
                self[i][j] = if i == j { 1.0 } else { 0.0 };
            }
        }
    }

    fn transpose(&mut self) {
        let snapshot = *self;
        for i in 0..Self::SIZE {
            for j in 0..Self::SIZE {
                self[i][j] = snapshot[j][i];
            }
        }
    }

    #[inline]
    fn transposed(mut self) -> Self {
        self.transpose();
        self
    }

    fn to_array(&self) -> Vec<Vec<f64>> {
        (0..Self::SIZE).map(|index| self[index].to_array()).collect()
    }

    /// Overwrites as many leading rows as `rows` holds, each row keeps
    /// components the input row does not reach.
    fn from_array<R: AsRef<[f64]>>(&mut self, rows: &[R]) -> MathResult<()> {
        if rows.len() > Self::SIZE {
            return Err(MathError::out_of_range(rows.len() - 1, Self::SIZE));
        }
        for (index, row) in rows.iter().enumerate() {
            self[index].from_array(row.as_ref());
        }
        Ok(())
    }

    #[inline]
    fn determinant(&self) -> f64 {
        matrix_math::cofactor_expansion(&self.to_array())
    }

    /// Unsigned minors, cell `(i, j)` holds the determinant of the sub-matrix
    /// without row `i` and column `j`.
    fn adjoin_matrix(&self) -> Self {
        let cells = self.to_array();
        let mut minors = Self::zeroed();
        for i in 0..Self::SIZE {
            for j in 0..Self::SIZE {
                minors[i][j] =
                    matrix_math::cofactor_expansion(&matrix_math::sub_matrix(&cells, i, j));
            }
        }
        minors
    }

    /// Inverts in place, returns `false` and leaves the matrix untouched when it is singular.
    fn try_inverse(&mut self) -> bool {
        let determinant = self.determinant();
        if determinant == 0.0 {
            log::debug!("Skipping inverse of singular {}", Self::NAME);
            return false;
        }
        let mut cofactors = self.adjoin_matrix();
        for i in 0..Self::SIZE {
            let mut sign: f64 = if i % 2 == 1 { -1.0 } else { 1.0 };
            for j in 0..Self::SIZE {
                cofactors[i][j] *= sign;
                sign = -sign;
            }
        }
        self.copy_from(&cofactors);
        self.transpose();
        *self = matrix_math::mul_scalar(&*self, 1.0 / determinant);
        true
    }

    #[inline]
    fn inverse(&mut self) {
        self.try_inverse();
    }

    #[inline]
    fn inversed(mut self) -> Self {
        self.try_inverse();
        self
    }

    #[inline]
    fn trace(&self) -> f64 {
        (0..Self::SIZE).map(|index| self[index][index]).sum()
    }

    /// In place `self * value`, see [`matrix_math::mul`].
    #[inline]
    fn try_mul(&mut self, value: impl Into<Operand>) -> MathResult<()> {
        *self = matrix_math::mul(&*self, value)?;
        Ok(())
    }

    #[inline]
    fn try_add(&mut self, value: impl Into<AnyMatrix>) -> MathResult<()> {
        *self = matrix_math::add(&*self, value)?;
        Ok(())
    }

    #[inline]
    fn try_sub(&mut self, value: impl Into<AnyMatrix>) -> MathResult<()> {
        *self = matrix_math::sub(&*self, value)?;
        Ok(())
    }

    #[inline]
    fn is_valid(&self) -> bool {
        self.as_slice().iter().all(|value| value.is_finite())
    }

    #[inline]
    fn approx_equal(&self, rhs: &Self) -> bool {
        self.as_slice()
            .iter()
            .zip(rhs.as_slice())
            .all(|(a, b)| (a - b).abs() < EPS)
    }
}

/// Matrix whose size is only known at run time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnyMatrix {
    Matrix3(Matrix3),
    Matrix4(Matrix4),
}

impl AnyMatrix {
    pub fn size(&self) -> usize {
        match self {
            AnyMatrix::Matrix3(_) => Matrix3::SIZE,
            AnyMatrix::Matrix4(_) => Matrix4::SIZE,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AnyMatrix::Matrix3(_) => Matrix3::NAME,
            AnyMatrix::Matrix4(_) => Matrix4::NAME,
        }
    }

    pub fn as_slice(&self) -> &[f64] {
        match self {
            AnyMatrix::Matrix3(matrix) => matrix.as_slice(),
            AnyMatrix::Matrix4(matrix) => matrix.as_slice(),
        }
    }

    pub fn to_array(&self) -> Vec<Vec<f64>> {
        match self {
            AnyMatrix::Matrix3(matrix) => matrix.to_array(),
            AnyMatrix::Matrix4(matrix) => matrix.to_array(),
        }
    }

    pub fn determinant(&self) -> f64 {
        match self {
            AnyMatrix::Matrix3(matrix) => matrix.determinant(),
            AnyMatrix::Matrix4(matrix) => matrix.determinant(),
        }
    }
}

impl From<Matrix3> for AnyMatrix {
    #[inline]
    fn from(value: Matrix3) -> Self {
        AnyMatrix::Matrix3(value)
    }
}

impl From<Matrix4> for AnyMatrix {
    #[inline]
    fn from(value: Matrix4) -> Self {
        AnyMatrix::Matrix4(value)
    }
}

impl TryFrom<AnyMatrix> for Matrix3 {
    type Error = MathError;

    fn try_from(value: AnyMatrix) -> Result<Self, Self::Error> {
        let mut matrix = Matrix3::zeroed();
        matrix.copy_from_any(&value)?;
        Ok(matrix)
    }
}

impl TryFrom<AnyMatrix> for Matrix4 {
    type Error = MathError;

    fn try_from(value: AnyMatrix) -> Result<Self, Self::Error> {
        let mut matrix = Matrix4::zeroed();
        matrix.copy_from_any(&value)?;
        Ok(matrix)
    }
}

/// Vector whose length is only known at run time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnyVector {
    Vector2(Vector2),
    Vector3(Vector3),
    Vector4(Vector4),
}

impl AnyVector {
    pub fn name(&self) -> &'static str {
        match self {
            AnyVector::Vector2(_) => Vector2::NAME,
            AnyVector::Vector3(_) => Vector3::NAME,
            AnyVector::Vector4(_) => Vector4::NAME,
        }
    }
}

macro_rules! impl_matrix {
    ($name:ident, $row:ident, $size:literal, $($field:ident),+) => {
        impl SquareMatrix for $name {
            type Row = $row;
            const SIZE: usize = $size;
            const NAME: &'static str = stringify!($name);

            #[inline]
            fn into_any(self) -> AnyMatrix {
                AnyMatrix::$name(self)
            }
        }

        impl Default for $name {
            #[inline]
            fn default() -> Self {
                <Self as SquareMatrix>::identity()
            }
        }

        impl Index<usize> for $name {
            type Output = $row;
            #[inline]
            fn index(&self, index: usize) -> &Self::Output {
                debug_assert!(index < $size, "Invalid index {} for {}!", index, Self::NAME);
                &bytemuck::cast_ref::<Self, [$row; $size]>(self)[index]
            }
        }

        impl IndexMut<usize> for $name {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                debug_assert!(index < $size, "Invalid index {} for {}!", index, Self::NAME);
                &mut bytemuck::cast_mut::<Self, [$row; $size]>(self)[index]
            }
        }

        impl From<[[f64; $size]; $size]> for $name {
            #[inline]
            fn from(value: [[f64; $size]; $size]) -> Self {
                bytemuck::cast(value)
            }
        }

        impl From<$name> for [[f64; $size]; $size] {
            #[inline]
            fn from(value: $name) -> Self {
                bytemuck::cast(value)
            }
        }

        impl From<$name> for Operand {
            #[inline]
            fn from(value: $name) -> Self {
                Operand::Matrix(value.into())
            }
        }

        impl From<$row> for Operand {
            #[inline]
            fn from(value: $row) -> Self {
                Operand::Vector(AnyVector::$row(value))
            }
        }

        impl Neg for $name {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self::Output {
                Self {
                    $($field: -self.$field),+
                }
            }
        }

        impl Add for $name {
            type Output = Self;
            #[inline]
            fn add(self, rhs: Self) -> Self::Output {
                matrix_math::add_matrices(&self, &rhs)
            }
        }

        impl Sub for $name {
            type Output = Self;
            #[inline]
            fn sub(self, rhs: Self) -> Self::Output {
                matrix_math::sub_matrices(&self, &rhs)
            }
        }

        impl Mul<$name> for $name {
            type Output = Self;
            #[inline]
            fn mul(self, rhs: Self) -> Self::Output {
                matrix_math::mul_matrices(&self, &rhs)
            }
        }

        impl Mul<f64> for $name {
            type Output = Self;
            #[inline]
            fn mul(self, rhs: f64) -> Self::Output {
                matrix_math::mul_scalar(&self, rhs)
            }
        }

        impl Mul<$name> for f64 {
            type Output = $name;
            #[inline]
            fn mul(self, rhs: $name) -> Self::Output {
                matrix_math::mul_scalar(&rhs, self)
            }
        }

        /// Column vector product. The result is a vector, so it has no in
        /// place counterpart and [`SquareMatrix::try_mul`] rejects vectors.
        impl Mul<$row> for $name {
            type Output = $row;
            #[inline]
            fn mul(self, rhs: $row) -> Self::Output {
                matrix_math::mul_vector(&self, rhs)
            }
        }

        impl AddAssign for $name {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                *self = matrix_math::add_matrices(&*self, &rhs);
            }
        }

        impl SubAssign for $name {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                *self = matrix_math::sub_matrices(&*self, &rhs);
            }
        }

        impl MulAssign for $name {
            #[inline]
            fn mul_assign(&mut self, rhs: Self) {
                *self = matrix_math::mul_matrices(&*self, &rhs);
            }
        }

        impl MulAssign<f64> for $name {
            #[inline]
            fn mul_assign(&mut self, rhs: f64) {
                *self = matrix_math::mul_scalar(&*self, rhs);
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "[")?;
                for index in 0..$size {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", self[index])?;
                }
                write!(f, "]")
            }
        }

        impl AbsDiffEq for $name {
            type Epsilon = f64;

            #[inline]
            fn default_epsilon() -> Self::Epsilon {
                EPS
            }

            #[inline]
            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                self.as_slice()
                    .iter()
                    .zip(other.as_slice())
                    .all(|(a, b)| a.abs_diff_eq(b, epsilon))
            }
        }

        impl RelativeEq for $name {
            #[inline]
            fn default_max_relative() -> Self::Epsilon {
                f64::default_max_relative()
            }

            #[inline]
            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                self.as_slice()
                    .iter()
                    .zip(other.as_slice())
                    .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
            }
        }
    };
}

#[cfg(test)]
mod test_matrix_3 {
    use super::{AnyMatrix, Matrix3, Matrix4, SquareMatrix};
    use crate::error::ErrorKind;
    use crate::types::{Vector, Vector3};

    fn get_matrix_3() -> Matrix3 {
        Matrix3::from([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]])
    }

    #[test]
    fn default_is_identity() {
        let m = Matrix3::default();
        assert_eq!(m, Matrix3::identity());
        assert_eq!(
            m.to_array(),
            vec![
                vec![1.0, 0.0, 0.0],
                vec![0.0, 1.0, 0.0],
                vec![0.0, 0.0, 1.0]
            ]
        );
    }

    #[test]
    fn row_access() {
        let mut m = get_matrix_3();
        assert_eq!(*m.row(1).unwrap(), Vector3::new(4.0, 5.0, 6.0));
        assert_eq!(m.row(3).unwrap_err().kind(), ErrorKind::OutOfRange);
        m.row_mut(1).unwrap().set("z", 60.0).unwrap();
        m[2][0] = 70.0;
        assert_eq!(m.cell(1, 2).unwrap(), 60.0);
        assert_eq!(m.cell(2, 0).unwrap(), 70.0);
        assert_eq!(m.cell(0, 3).unwrap_err().kind(), ErrorKind::OutOfRange);
        m.set_cell(0, 0, -1.0).unwrap();
        assert_eq!(m[0].x, -1.0);
        assert!(m.exists(2));
        assert!(!m.exists(3));
    }

    #[test]
    fn whole_row_is_rejected() {
        let mut m = get_matrix_3();
        assert_eq!(
            m.set_row(0, Vector3::default()).unwrap_err().kind(),
            ErrorKind::UnsupportedOperation
        );
        assert_eq!(
            m.remove_row(0).unwrap_err().kind(),
            ErrorKind::UnsupportedOperation
        );
        assert_eq!(m, get_matrix_3());
    }

    #[test]
    fn transpose() {
        let mut m = get_matrix_3();
        m.transpose();
        assert_eq!(
            m,
            Matrix3::from([[1.0, 4.0, 7.0], [2.0, 5.0, 8.0], [3.0, 6.0, 9.0]])
        );
        assert_eq!(m.transposed(), get_matrix_3());
    }

    #[test]
    fn copy() {
        let mut m = Matrix3::default();
        m.copy_from(&get_matrix_3());
        assert_eq!(m, get_matrix_3());
        let err = m
            .copy_from_any(&AnyMatrix::from(Matrix4::default()))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DimensionMismatch);
        assert_eq!(m, get_matrix_3());
    }

    #[test]
    fn from_array() {
        let mut m = Matrix3::default();
        m.from_array(&[[5.0, 6.0], [7.0, 8.0]]).unwrap();
        assert_eq!(
            m,
            Matrix3::from([[5.0, 6.0, 0.0], [7.0, 8.0, 0.0], [0.0, 0.0, 1.0]])
        );
        let too_many = vec![vec![0.0; 3]; 4];
        assert_eq!(
            m.from_array(&too_many).unwrap_err().kind(),
            ErrorKind::OutOfRange
        );
    }

    #[test]
    fn set_identity() {
        let mut m = get_matrix_3();
        m.set_identity();
        assert_eq!(m, Matrix3::identity());
    }

    #[test]
    fn determinant() {
        assert_eq!(Matrix3::identity().determinant(), 1.0);
        assert_eq!(get_matrix_3().determinant(), 0.0);
        let m = Matrix3::from([[2.0, 1.0, 0.0], [2.0, 0.0, 0.0], [2.0, 0.0, 1.0]]);
        assert_eq!(m.determinant(), -2.0);
    }

    #[test]
    fn inverse() {
        let m = Matrix3::from([[1.0, 2.0, 3.0], [0.0, 4.0, 5.0], [0.0, 0.0, 6.0]]);
        let m_inv = m.inversed();
        assert!(Matrix3::identity().approx_equal(&(m * m_inv)));
        assert!(Matrix3::identity().approx_equal(&(m_inv * m)));
    }

    #[test]
    fn singular_inverse() {
        let mut m = get_matrix_3();
        assert!(!m.try_inverse());
        m.inverse();
        assert_eq!(m, get_matrix_3());
    }

    #[test]
    fn trace() {
        assert_eq!(get_matrix_3().trace(), 15.0);
    }

    #[test]
    fn mul_vector() {
        let m = get_matrix_3();
        assert_eq!(m * Vector3::new(1.0, 0.0, -1.0), Vector3::new(-2.0, -2.0, -2.0));
        assert_eq!(Matrix3::identity() * Vector3::x(), Vector3::x());
        assert_eq!((m * Vector3::z()).length2(), 9.0 + 36.0 + 81.0);
    }

    #[test]
    fn vector_product_is_not_stored_in_place() {
        let mut m = Matrix3::identity();
        assert_eq!(m * Vector3::x(), Vector3::x());
        assert_eq!(
            m.try_mul(Vector3::x()).unwrap_err().kind(),
            ErrorKind::InvalidOperand
        );
        assert_eq!(m, Matrix3::identity());
    }

    #[test]
    fn operators() {
        let m = get_matrix_3();
        assert_eq!(
            m * m,
            Matrix3::from([
                [30.0, 36.0, 42.0],
                [66.0, 81.0, 96.0],
                [102.0, 126.0, 150.0]
            ])
        );
        assert_eq!(m + m, 2.0 * m);
        assert_eq!(m - m, 0.0 * m);
        assert_eq!(-m, m * -1.0);
        let mut n = m;
        n *= Matrix3::identity();
        n += m;
        n -= m;
        n *= 1.0;
        assert_eq!(n, m);
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Zeroable, Pod)]
pub struct Matrix3 {
    pub i: Vector3,
    pub j: Vector3,
    pub k: Vector3,
}

impl_matrix!(Matrix3, Vector3, 3, i, j, k);

impl From<Matrix4> for Matrix3 {
    /// Top-left 3x3 block.
    #[inline]
    fn from(value: Matrix4) -> Self {
        Self {
            i: value.i.into(),
            j: value.j.into(),
            k: value.k.into(),
        }
    }
}

impl Matrix3 {
    #[inline]
    pub fn new(i: Vector3, j: Vector3, k: Vector3) -> Self {
        Self { i, j, k }
    }
}


#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Zeroable, Pod)]
pub struct Matrix4 {
    pub i: Vector4,
    pub j: Vector4,
    pub k: Vector4,
    pub l: Vector4,
}

impl_matrix!(Matrix4, Vector4, 4, i, j, k, l);

impl From<Matrix3> for Matrix4 {
    /// Embeds the 3x3 block into the top-left corner of an identity matrix.
    #[inline]
    fn from(value: Matrix3) -> Self {
        Self {
            i: value.i.into(),
            j: value.j.into(),
            k: value.k.into(),
            l: Vector4::w(),
        }
    }
}

impl Matrix4 {
    #[inline]
    pub fn new(i: Vector4, j: Vector4, k: Vector4, l: Vector4) -> Self {
        Self { i, j, k, l }
    }
}
