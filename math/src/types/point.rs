use super::{Vector2, Vector3};

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<Vector2> for Point2 {
    #[inline]
    fn from(value: Vector2) -> Self {
        Self::new(value.x, value.y)
    }
}

impl From<Point2> for Vector2 {
    #[inline]
    fn from(value: Point2) -> Self {
        Vector2::new(value.x, value.y)
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl From<Vector3> for Point3 {
    #[inline]
    fn from(value: Vector3) -> Self {
        Self::new(value.x, value.y, value.z)
    }
}

impl From<Point3> for Vector3 {
    #[inline]
    fn from(value: Point3) -> Self {
        Vector3::new(value.x, value.y, value.z)
    }
}
