use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Named vector axis, parsed case-insensitively (`"x"`, `"X"`, ...).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::EnumCount,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
    W = 3,
}

impl Axis {
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Position of a component, either by integer index or by axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offset<'a> {
    Index(usize),
    Axis(Axis),
    Name(&'a str),
}

impl Offset<'_> {
    /// Maps the offset onto `[0, len)`, `None` for unknown names or indices past the end.
    #[inline]
    pub fn resolve(self, len: usize) -> Option<usize> {
        let index = match self {
            Offset::Index(index) => index,
            Offset::Axis(axis) => axis.index(),
            Offset::Name(name) => Axis::from_str(name).ok()?.index(),
        };
        (index < len).then_some(index)
    }
}

impl Display for Offset<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Offset::Index(index) => write!(f, "{}", index),
            Offset::Axis(axis) => write!(f, "{}", axis),
            Offset::Name(name) => write!(f, "{:?}", name),
        }
    }
}

impl From<usize> for Offset<'_> {
    #[inline]
    fn from(value: usize) -> Self {
        Offset::Index(value)
    }
}

impl From<Axis> for Offset<'_> {
    #[inline]
    fn from(value: Axis) -> Self {
        Offset::Axis(value)
    }
}

impl<'a> From<&'a str> for Offset<'a> {
    #[inline]
    fn from(value: &'a str) -> Self {
        Offset::Name(value)
    }
}

#[cfg(test)]
mod test_offset {
    use super::{Axis, Offset};

    #[test]
    fn resolve_index() {
        assert_eq!(Offset::from(0).resolve(2), Some(0));
        assert_eq!(Offset::from(1).resolve(2), Some(1));
        assert_eq!(Offset::from(2).resolve(2), None);
    }

    #[test]
    fn resolve_name() {
        assert_eq!(Offset::from("x").resolve(3), Some(0));
        assert_eq!(Offset::from("Y").resolve(3), Some(1));
        assert_eq!(Offset::from("z").resolve(3), Some(2));
        assert_eq!(Offset::from("w").resolve(3), None);
        assert_eq!(Offset::from("W").resolve(4), Some(3));
        assert_eq!(Offset::from("q").resolve(4), None);
        assert_eq!(Offset::from("").resolve(4), None);
    }

    #[test]
    fn resolve_axis() {
        assert_eq!(Offset::from(Axis::Z).resolve(2), None);
        assert_eq!(Offset::from(Axis::Z).resolve(4), Some(2));
    }
}
