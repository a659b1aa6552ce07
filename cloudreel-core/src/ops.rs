//! Small vector helpers used by embedding applications

use crate::point::Vector3f;

/// Magnitude of a 3D vector.
pub fn magnitude(v: &Vector3f) -> f32 {
    v.norm()
}

/// Angle between two vectors in radians.
///
/// Returns 0.0 when either vector is zero. The cosine is clamped to
/// `[-1, 1]` before `acos` to absorb rounding.
pub fn angle_between(a: &Vector3f, b: &Vector3f) -> f32 {
    let mag_a = a.norm();
    let mag_b = b.norm();
    if mag_a == 0.0 || mag_b == 0.0 {
        return 0.0;
    }
    let cos_angle = (a.dot(b) / (mag_a * mag_b)).clamp(-1.0, 1.0);
    cos_angle.acos()
}

/// Unit vector in the direction of `v`, or `v` unchanged when its magnitude
/// is zero.
pub fn normalized(v: &Vector3f) -> Vector3f {
    let mag = v.norm();
    if mag > 0.0 {
        v / mag
    } else {
        *v
    }
}
