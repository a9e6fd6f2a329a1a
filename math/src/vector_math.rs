//! Pure vector arithmetic. Every function returns a new value, the in-place
//! operators on the vector types assign these results back to the receiver.

use crate::types::{Vector, Vector3};

/// Right hand side of an elementwise vector operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VectorOperand<V: Vector> {
    Vector(V),
    /// Broadcast to every component.
    Scalar(f64),
}

impl<V: Vector> From<f64> for VectorOperand<V> {
    #[inline]
    fn from(value: f64) -> Self {
        VectorOperand::Scalar(value)
    }
}

impl<V: Vector> VectorOperand<V> {
    #[inline]
    fn into_vector(self) -> V {
        match self {
            VectorOperand::Vector(vector) => vector,
            VectorOperand::Scalar(value) => V::splat(value),
        }
    }
}

#[inline]
fn zip_with<V: Vector>(vector: V, value: VectorOperand<V>, op: impl Fn(f64, f64) -> f64) -> V {
    let rhs = value.into_vector();
    let mut out = V::default();
    out.as_mut_slice()
        .iter_mut()
        .zip(vector.as_slice().iter().zip(rhs.as_slice()))
        .for_each(|(out, (a, b))| *out = op(*a, *b));
    out
}

#[inline]
pub fn add<V: Vector>(vector: V, value: impl Into<VectorOperand<V>>) -> V {
    zip_with(vector, value.into(), |a, b| a + b)
}

#[inline]
pub fn sub<V: Vector>(vector: V, value: impl Into<VectorOperand<V>>) -> V {
    zip_with(vector, value.into(), |a, b| a - b)
}

#[inline]
pub fn mul<V: Vector>(vector: V, value: impl Into<VectorOperand<V>>) -> V {
    zip_with(vector, value.into(), |a, b| a * b)
}

/// No zero guard, components follow IEEE semantics.
#[inline]
pub fn div<V: Vector>(vector: V, value: impl Into<VectorOperand<V>>) -> V {
    zip_with(vector, value.into(), |a, b| a / b)
}

#[inline]
pub fn dot<V: Vector>(a: V, b: V) -> f64 {
    a.as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(a, b)| a * b)
        .sum()
}

#[inline]
pub fn cross(a: Vector3, b: Vector3) -> Vector3 {
    Vector3 {
        x: a.y * b.z - a.z * b.y,
        y: -(a.x * b.z - a.z * b.x),
        z: a.x * b.y - a.y * b.x,
    }
}

#[inline]
pub fn distance2<V: Vector>(a: V, b: V) -> f64 {
    a.as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(a, b)| (a - b) * (a - b))
        .sum()
}

#[inline]
pub fn distance<V: Vector>(a: V, b: V) -> f64 {
    distance2(a, b).sqrt()
}
