use super::{Offset, EPS};
use crate::error::{MathError, MathResult};
use crate::vector_math::{self, VectorOperand};
use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use std::fmt::{Debug, Display, Formatter};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

/// Fixed-length sequence of `f64` components addressable by index or axis name.
pub trait Vector:
    Debug + Default + Copy + PartialEq + Pod + Index<usize, Output = f64> + IndexMut<usize>
{
    const LEN: usize;
    const NAME: &'static str;

    #[inline]
    fn as_slice(&self) -> &[f64] {
        bytemuck::cast_slice(std::slice::from_ref(self))
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [f64] {
        bytemuck::cast_slice_mut(std::slice::from_mut(self))
    }

    #[inline]
    fn splat(value: f64) -> Self {
        let mut vector = Self::default();
        vector.as_mut_slice().fill(value);
        vector
    }

    #[inline]
    fn len(&self) -> usize {
        Self::LEN
    }

    #[inline]
    fn is_empty(&self) -> bool {
        Self::LEN == 0
    }

    #[inline]
    fn exists<'a>(&self, offset: impl Into<Offset<'a>>) -> bool {
        offset.into().resolve(Self::LEN).is_some()
    }

    #[inline]
    fn get<'a>(&self, offset: impl Into<Offset<'a>>) -> MathResult<f64> {
        let offset = offset.into();
        offset
            .resolve(Self::LEN)
            .map(|index| self[index])
            .ok_or_else(|| MathError::out_of_range(offset, Self::LEN))
    }

    #[inline]
    fn get_or<'a>(&self, offset: impl Into<Offset<'a>>, fallback: f64) -> f64 {
        offset
            .into()
            .resolve(Self::LEN)
            .map_or(fallback, |index| self[index])
    }

    #[inline]
    fn set<'a>(&mut self, offset: impl Into<Offset<'a>>, value: f64) -> MathResult<()> {
        let offset = offset.into();
        let index = offset
            .resolve(Self::LEN)
            .ok_or_else(|| MathError::out_of_range(offset, Self::LEN))?;
        self[index] = value;
        Ok(())
    }

    /// Parses `text` as a finite number before storing it.
    fn set_str<'a>(&mut self, offset: impl Into<Offset<'a>>, text: &str) -> MathResult<()> {
        let value = text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| MathError::InvalidValue(text.to_owned()))?;
        self.set(offset, value)
    }

    /// Components can never be removed.
    #[inline]
    fn remove<'a>(&mut self, _offset: impl Into<Offset<'a>>) -> MathResult<()> {
        Err(MathError::UnsupportedOperation(
            "vector components can not be removed",
        ))
    }

    #[inline]
    fn length2(&self) -> f64 {
        vector_math::dot(*self, *self)
    }

    #[inline]
    fn length(&self) -> f64 {
        self.length2().sqrt()
    }

    /// Zero-length vectors are left as they are.
    fn normalize(&mut self) {
        let length = self.length();
        if length == 0.0 {
            log::debug!("Skipping normalization of zero length {}", Self::NAME);
            return;
        }
        *self = vector_math::div(*self, length);
    }

    #[inline]
    fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    #[inline]
    fn dot(&self, rhs: &Self) -> f64 {
        vector_math::dot(*self, *rhs)
    }

    #[inline]
    fn distance(&self, rhs: &Self) -> f64 {
        vector_math::distance(*self, *rhs)
    }

    #[inline]
    fn distance2(&self, rhs: &Self) -> f64 {
        vector_math::distance2(*self, *rhs)
    }

    #[inline]
    fn to_array(&self) -> Vec<f64> {
        self.as_slice().to_vec()
    }

    /// Overwrites the leading components, extra values are ignored.
    #[inline]
    fn from_array(&mut self, values: &[f64]) {
        self.as_mut_slice()
            .iter_mut()
            .zip(values)
            .for_each(|(component, value)| *component = *value);
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

macro_rules! impl_vector {
    ($name:ident, $len:literal, $($field:ident),+) => {
        impl Vector for $name {
            const LEN: usize = $len;
            const NAME: &'static str = stringify!($name);
        }

        impl Index<usize> for $name {
            type Output = f64;
            #[inline]
            fn index(&self, index: usize) -> &Self::Output {
                debug_assert!(index < $len, "Invalid index {} for {}!", index, Self::NAME);
                &bytemuck::cast_ref::<Self, [f64; $len]>(self)[index]
            }
        }

        impl IndexMut<usize> for $name {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                debug_assert!(index < $len, "Invalid index {} for {}!", index, Self::NAME);
                &mut bytemuck::cast_mut::<Self, [f64; $len]>(self)[index]
            }
        }

        impl From<[f64; $len]> for $name {
            #[inline]
            fn from(value: [f64; $len]) -> Self {
                bytemuck::cast(value)
            }
        }

        impl From<$name> for [f64; $len] {
            #[inline]
            fn from(value: $name) -> Self {
                bytemuck::cast(value)
            }
        }

        impl From<$name> for VectorOperand<$name> {
            #[inline]
            fn from(value: $name) -> Self {
                VectorOperand::Vector(value)
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

        impl<T: Into<VectorOperand<$name>>> Add<T> for $name {
            type Output = Self;
            #[inline]
            fn add(self, rhs: T) -> Self::Output {
                vector_math::add(self, rhs)
            }
        }

        impl<T: Into<VectorOperand<$name>>> Sub<T> for $name {
            type Output = Self;
            #[inline]
            fn sub(self, rhs: T) -> Self::Output {
                vector_math::sub(self, rhs)
            }
        }

        impl<T: Into<VectorOperand<$name>>> Mul<T> for $name {
            type Output = Self;
            #[inline]
            fn mul(self, rhs: T) -> Self::Output {
                vector_math::mul(self, rhs)
            }
        }

        impl<T: Into<VectorOperand<$name>>> Div<T> for $name {
            type Output = Self;
            #[inline]
            fn div(self, rhs: T) -> Self::Output {
                vector_math::div(self, rhs)
            }
        }

        impl Mul<$name> for f64 {
            type Output = $name;
            #[inline]
            fn mul(self, rhs: $name) -> Self::Output {
                vector_math::mul(rhs, self)
            }
        }

        impl<T: Into<VectorOperand<$name>>> AddAssign<T> for $name {
            #[inline]
            fn add_assign(&mut self, rhs: T) {
                *self = vector_math::add(*self, rhs);
            }
        }

        impl<T: Into<VectorOperand<$name>>> SubAssign<T> for $name {
            #[inline]
            fn sub_assign(&mut self, rhs: T) {
                *self = vector_math::sub(*self, rhs);
            }
        }

        impl<T: Into<VectorOperand<$name>>> MulAssign<T> for $name {
            #[inline]
            fn mul_assign(&mut self, rhs: T) {
                *self = vector_math::mul(*self, rhs);
            }
        }

        impl<T: Into<VectorOperand<$name>>> DivAssign<T> for $name {
            #[inline]
            fn div_assign(&mut self, rhs: T) {
                *self = vector_math::div(*self, rhs);
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "(")?;
                for (index, value) in self.as_slice().iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", value)?;
                }
                write!(f, ")")
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


#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Zeroable, Pod)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl_vector!(Vector2, 2, x, y);

impl Vector2 {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn x() -> Self {
        Self { x: 1.0, y: 0.0 }
    }

    #[inline]
    pub fn y() -> Self {
        Self { x: 0.0, y: 1.0 }
    }
}


#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Zeroable, Pod)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl_vector!(Vector3, 3, x, y, z);

impl From<Vector2> for Vector3 {
    #[inline]
    fn from(value: Vector2) -> Self {
        Self {
            x: value.x,
            y: value.y,
            z: 0.0,
        }
    }
}

impl From<Vector4> for Vector3 {
    #[inline]
    fn from(value: Vector4) -> Self {
        Self {
            x: value.x,
            y: value.y,
            z: value.z,
        }
    }
}

impl Vector3 {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn x() -> Self {
        Self {
            x: 1.0,
            y: 0.0,
            z: 0.0,
        }
    }

    #[inline]
    pub fn y() -> Self {
        Self {
            x: 0.0,
            y: 1.0,
            z: 0.0,
        }
    }

    #[inline]
    pub fn z() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 1.0,
        }
    }

    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        vector_math::cross(self, rhs)
    }

    #[inline]
    pub fn cross_with(&mut self, rhs: Self) {
        *self = vector_math::cross(*self, rhs);
    }
}


#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Zeroable, Pod)]
pub struct Vector4 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl_vector!(Vector4, 4, x, y, z, w);

impl From<Vector3> for Vector4 {
    #[inline]
    fn from(value: Vector3) -> Self {
        Self::vector(value)
    }
}

impl Vector4 {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub fn point(p: Vector3) -> Self {
        Self {
            x: p.x,
            y: p.y,
            z: p.z,
            w: 1.0,
        }
    }

    #[inline]
    pub fn vector(v: Vector3) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
            w: 0.0,
        }
    }

    #[inline]
    pub fn x() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    #[inline]
    pub fn y() -> Self {
        Self::new(0.0, 1.0, 0.0, 0.0)
    }

    #[inline]
    pub fn z() -> Self {
        Self::new(0.0, 0.0, 1.0, 0.0)
    }

    #[inline]
    pub fn w() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }
}
