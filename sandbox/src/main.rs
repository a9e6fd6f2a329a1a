use colored::Colorize;
use std::{error::Error, fmt::Display, result::Result};

use math::{
    angle::{self, AngleUnit},
    matrix_math,
    transform::{make_rotation_x, Rotation},
    types::{Axis, Matrix3, Matrix4, SquareMatrix, Vector, Vector2, Vector3, Vector4},
};

fn section(title: &str) {
    println!("\n{}", title.bold().cyan());
}

fn show(label: &str, value: impl Display) {
    println!("  {:<24} {}", label.green(), value);
}

fn vectors() -> Result<(), Box<dyn Error>> {
    section("vectors");
    let mut v = Vector3::new(2.0, 3.0, 4.0);
    let w = Vector3::new(5.0, 6.0, 7.0);
    show("v", v);
    show("w", w);
    show("v + w", v + w);
    show("v * 2", v * 2.0);
    show("v . w", v.dot(&w));
    show("v x w", v.cross(w));
    show("|v|", v.length());
    show("v.normalized()", v.normalized());

    v.set(Axis::Z, -1.0)?;
    v.set_str("x", "0.5")?;
    show("v after set", v);
    show("v[\"y\"]", v.get("y")?);
    if let Err(err) = v.get(7) {
        show("v[7]", err.to_string().red());
    }
    if let Err(err) = v.remove("x") {
        show("v.remove(\"x\")", err.to_string().red());
    }

    let p = Vector4::point(w);
    show("point(w)", p);
    show("distance (2d)", Vector2::new(0.0, 0.0).distance(&Vector2::new(3.0, 4.0)));
    Ok(())
}

fn matrices() -> Result<(), Box<dyn Error>> {
    section("matrices");
    let m = Matrix4::from([
        [-5.0, -1.0, 5.0, 1.0],
        [-2.0, 1.0, 1.0, 9.0],
        [-5.0, 3.0, 12.0, 17.0],
        [9.0, 3.0, 9.0, 2.0],
    ]);
    show("m", m);
    show("det(m)", m.determinant());
    show("trace(m)", m.trace());
    show("m^T", m.transposed());
    let inverse = m.inversed();
    show("m^-1", inverse);
    show(
        "m * m^-1 == I",
        (m * inverse).approx_equal(&Matrix4::identity()),
    );

    let singular = Matrix3::from([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
    let mut copy = singular;
    show("det(singular)", singular.determinant());
    show("inverted singular", copy.try_inverse());
    show("left unchanged", copy == singular);

    let minor = matrix_math::sub_matrix(&m.to_array(), 0, 0);
    show("minor(0, 0)", matrix_math::determinant(&minor)?);

    let mut product = singular;
    product.try_mul(2.0)?;
    show("singular * 2", product);
    if let Err(err) = product.try_mul(Vector3::x()) {
        show("singular * vector", err.to_string().red());
    }
    if let Err(err) = product.try_add(m) {
        show("singular + m", err.to_string().red());
    }
    Ok(())
}

fn rotations() {
    section("rotations");
    show("90 deg in rad", angle::degrees_to_radians(90.0));
    show("roll 90", make_rotation_x(90.0, AngleUnit::Degrees));

    let mut m = Matrix4::identity();
    m.roll(90.0);
    m.pitch_with(std::f64::consts::FRAC_PI_2, AngleUnit::Radians);
    show("roll 90, pitch 90", m);
    show("applied to x", m * Vector4::vector(Vector3::x()));
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Running math sandbox");
    vectors()?;
    matrices()?;
    rotations();
    Ok(())
}
