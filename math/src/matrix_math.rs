//! Matrix algebra shared by every [`SquareMatrix`].
//!
//! Determinants are computed by recursive cofactor expansion along the first
//! row. The expansion grows factorially with the matrix size and is meant for
//! the small fixed sizes of this crate only. Free functions return new values,
//! the `try_*` methods of [`SquareMatrix`] and the assignment operators write
//! their results back to the receiver.

use bytemuck::Zeroable;

use crate::error::{MathError, MathResult};
use crate::types::{AnyMatrix, AnyVector, SquareMatrix, Vector, Vector2};

/// Right hand side of [`mul`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    Scalar(f64),
    Matrix(AnyMatrix),
    /// Never a valid factor, kept so the rejection can name the type.
    Vector(AnyVector),
}

impl Operand {
    pub fn type_name(&self) -> &'static str {
        match self {
            Operand::Scalar(_) => "f64",
            Operand::Matrix(matrix) => matrix.name(),
            Operand::Vector(vector) => vector.name(),
        }
    }
}

impl From<f64> for Operand {
    #[inline]
    fn from(value: f64) -> Self {
        Operand::Scalar(value)
    }
}

impl From<AnyMatrix> for Operand {
    #[inline]
    fn from(value: AnyMatrix) -> Self {
        Operand::Matrix(value)
    }
}

impl From<AnyVector> for Operand {
    #[inline]
    fn from(value: AnyVector) -> Self {
        Operand::Vector(value)
    }
}

impl From<Vector2> for Operand {
    #[inline]
    fn from(value: Vector2) -> Self {
        Operand::Vector(AnyVector::Vector2(value))
    }
}

#[inline]
pub fn identity<M: SquareMatrix>() -> M {
    M::identity()
}

pub fn identity_of(size: usize) -> MathResult<AnyMatrix> {
    match size {
        3 => Ok(identity::<crate::types::Matrix3>().into()),
        4 => Ok(identity::<crate::types::Matrix4>().into()),
        size => Err(MathError::UnsupportedSize(size)),
    }
}

/// Copy of `matrix` without `skip_row` and `skip_column`.
pub fn sub_matrix<R: AsRef<[f64]>>(
    matrix: &[R],
    skip_row: usize,
    skip_column: usize,
) -> Vec<Vec<f64>> {
    matrix
        .iter()
        .enumerate()
        .filter(|(row, _)| *row != skip_row)
        .map(|(_, cells)| {
            cells
                .as_ref()
                .iter()
                .enumerate()
                .filter(|(column, _)| *column != skip_column)
                .map(|(_, cell)| *cell)
                .collect()
        })
        .collect()
}

/// Determinant of a nested row-major array of any square size.
pub fn determinant<R: AsRef<[f64]>>(matrix: &[R]) -> MathResult<f64> {
    let rows = matrix.len();
    let columns = matrix.first().map_or(0, |row| row.as_ref().len());
    if rows == 0 || rows != columns {
        return Err(MathError::NotSquare { rows, columns });
    }
    if let Some(row) = matrix.iter().find(|row| row.as_ref().len() != rows) {
        return Err(MathError::NotSquare {
            rows,
            columns: row.as_ref().len(),
        });
    }
    Ok(cofactor_expansion(matrix))
}

/// Expects a non-empty square input, see [`determinant`].
pub(crate) fn cofactor_expansion<R: AsRef<[f64]>>(matrix: &[R]) -> f64 {
    let size = matrix.len();
    log::trace!("Cofactor expansion of {}x{} matrix", size, size);
    let first_row = matrix[0].as_ref();
    if size == 1 {
        return first_row[0];
    }
    let mut sign = 1.0f64;
    let mut determinant = 0.0f64;
    for (column, cell) in first_row.iter().enumerate() {
        determinant += sign * cell * cofactor_expansion(&sub_matrix(matrix, 0, column));
        sign = -sign;
    }
    determinant
}

#[inline]
fn zip_cells<M: SquareMatrix>(matrix: &M, rhs: &[f64], op: impl Fn(f64, f64) -> f64) -> M {
    let mut result = M::zeroed();
    result
        .as_mut_slice()
        .iter_mut()
        .zip(matrix.as_slice().iter().zip(rhs))
        .for_each(|(cell, (a, b))| *cell = op(*a, *b));
    result
}

/// `result[i][j] = sum_k lhs[i][k] * rhs[k][j]` over row-major cells.
#[inline]
fn product<M: SquareMatrix>(matrix: &M, rhs: &[f64]) -> M {
    let size = M::SIZE;
    let lhs = matrix.as_slice();
    let mut result = M::zeroed();
    for (index, cell) in result.as_mut_slice().iter_mut().enumerate() {
        let (row, column) = (index / size, index % size);
        *cell = (0..size)
            .map(|k| lhs[row * size + k] * rhs[k * size + column])
            .sum();
    }
    result
}

#[inline]
fn ensure_size<M: SquareMatrix>(value: &AnyMatrix) -> MathResult<()> {
    if value.size() == M::SIZE {
        Ok(())
    } else {
        Err(MathError::DimensionMismatch {
            expected: M::SIZE,
            found: value.size(),
        })
    }
}

/// Dispatches on the operand: same sized matrices are multiplied, scalars
/// scale every cell. Other operands are rejected.
pub fn mul<M: SquareMatrix>(matrix: &M, value: impl Into<Operand>) -> MathResult<M> {
    match value.into() {
        Operand::Scalar(scalar) => Ok(mul_scalar(matrix, scalar)),
        Operand::Matrix(rhs) if rhs.size() == M::SIZE => Ok(product(matrix, rhs.as_slice())),
        Operand::Matrix(_) => Err(MathError::NotImplemented(
            "matrix multiplication without same row/column count",
        )),
        operand @ Operand::Vector(_) => Err(MathError::InvalidOperand(operand.type_name())),
    }
}

#[inline]
pub fn mul_matrices<M: SquareMatrix>(matrix: &M, rhs: &M) -> M {
    product(matrix, rhs.as_slice())
}

#[inline]
pub fn mul_scalar<M: SquareMatrix>(matrix: &M, scalar: f64) -> M {
    let mut result = M::zeroed();
    result
        .as_mut_slice()
        .iter_mut()
        .zip(matrix.as_slice())
        .for_each(|(cell, value)| *cell = value * scalar);
    result
}

/// Treats `vector` as a column, every output component is a row dot product.
#[inline]
pub fn mul_vector<M: SquareMatrix>(matrix: &M, vector: M::Row) -> M::Row {
    let mut result = M::Row::default();
    for index in 0..M::SIZE {
        result[index] = matrix[index].dot(&vector);
    }
    result
}

pub fn add<M: SquareMatrix>(matrix: &M, value: impl Into<AnyMatrix>) -> MathResult<M> {
    let rhs = value.into();
    ensure_size::<M>(&rhs)?;
    Ok(zip_cells(matrix, rhs.as_slice(), |a, b| a + b))
}

pub fn sub<M: SquareMatrix>(matrix: &M, value: impl Into<AnyMatrix>) -> MathResult<M> {
    let rhs = value.into();
    ensure_size::<M>(&rhs)?;
    Ok(zip_cells(matrix, rhs.as_slice(), |a, b| a - b))
}

#[inline]
pub fn add_matrices<M: SquareMatrix>(matrix: &M, rhs: &M) -> M {
    zip_cells(matrix, rhs.as_slice(), |a, b| a + b)
}

#[inline]
pub fn sub_matrices<M: SquareMatrix>(matrix: &M, rhs: &M) -> M {
    zip_cells(matrix, rhs.as_slice(), |a, b| a - b)
}
