/// 2D point type, used for plan-view `(x, z)` coordinates.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Rigid placement (rotation followed by translation).
pub type Isometry3 = nalgebra::Isometry3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-9;

/// Builds a placement rotating about +Y by `degrees`, then translating to `position`.
///
/// Positive angles turn the local +X axis towards -Z (right-handed, Y up).
#[must_use]
pub fn rotation_about_y(position: Point3, degrees: f64) -> Isometry3 {
    Isometry3::new(position.coords, Vector3::y() * degrees.to_radians())
}

/// Returns the rotation about +Y that turns the local +X axis onto the plan
/// direction `(dx, dz)`, normalized into `[0, 360)`.
#[must_use]
pub fn heading_degrees(dx: f64, dz: f64) -> f64 {
    normalize_degrees((-dz).atan2(dx).to_degrees())
}

/// Normalizes an angle in degrees into `[0, 360)`.
#[must_use]
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    if (wrapped - 360.0).abs() < TOLERANCE {
        0.0
    } else {
        wrapped
    }
}
