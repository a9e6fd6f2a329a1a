/// Degrees in one radian, truncated to the precision rotation fixtures were computed with.
pub const DEG_PER_RAD: f64 = 57.2957795131;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum AngleUnit {
    #[default]
    Degrees,
    Radians,
}

impl AngleUnit {
    #[inline]
    pub fn to_radians(self, angle: f64) -> f64 {
        match self {
            AngleUnit::Degrees => degrees_to_radians(angle),
            AngleUnit::Radians => angle,
        }
    }
}

#[inline]
pub fn degrees_to_radians(deg: f64) -> f64 {
    deg / DEG_PER_RAD
}

#[inline]
pub fn radians_to_degrees(rad: f64) -> f64 {
    rad * DEG_PER_RAD
}

#[cfg(test)]
mod test_angle {
    use super::{degrees_to_radians, radians_to_degrees, AngleUnit, DEG_PER_RAD};

    #[test]
    fn conversion() {
        assert_eq!(degrees_to_radians(DEG_PER_RAD), 1.0);
        assert_eq!(radians_to_degrees(1.0), DEG_PER_RAD);
        assert!((degrees_to_radians(180.0) - std::f64::consts::PI).abs() < 1e-9);
        assert!((radians_to_degrees(std::f64::consts::FRAC_PI_2) - 90.0).abs() < 1e-8);
    }

    #[test]
    fn unit() {
        assert_eq!(AngleUnit::default(), AngleUnit::Degrees);
        assert_eq!(AngleUnit::Radians.to_radians(0.5), 0.5);
        assert_eq!(AngleUnit::Degrees.to_radians(90.0), 90.0 / DEG_PER_RAD);
        assert_eq!(AngleUnit::Degrees.to_string(), "degrees");
    }
}
