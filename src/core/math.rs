// Math utilities shared by the simulation

use glam::Vec2;

/// Clamp a value between min and max
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Check if two f32 values are approximately equal
pub fn approx_equal(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}

/// Reflect a velocity about a unit surface normal.
///
/// The normal component flips sign while the tangential component is kept,
/// so the speed is preserved.
pub fn reflect(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Closest point to `point` inside an axis-aligned box centred on `center`
pub fn closest_point_on_box(point: Vec2, center: Vec2, half_extents: Vec2) -> Vec2 {
    point.clamp(center - half_extents, center + half_extents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-5.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(15.0, 0.0, 10.0), 10.0);
    }

    #[test]
    fn test_approx_equal() {
        assert!(approx_equal(1.0, 1.00001, 0.0001));
        assert!(!approx_equal(1.0, 1.1, 0.01));
    }

    #[test]
    fn test_reflect_preserves_tangent() {
        let reflected = reflect(Vec2::new(3.0, -4.0), Vec2::Y);
        assert_eq!(reflected, Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_reflect_preserves_speed() {
        let velocity = Vec2::new(-250.0, 120.0);
        let normal = Vec2::new(-1.0, 0.3).normalize();
        let reflected = reflect(velocity, normal);
        assert_relative_eq!(reflected.length(), velocity.length(), epsilon = 1e-3);
    }

    #[test]
    fn test_closest_point_on_box() {
        let closest = closest_point_on_box(Vec2::new(20.0, 0.0), Vec2::ZERO, Vec2::new(5.0, 50.0));
        assert_eq!(closest, Vec2::new(5.0, 0.0));
    }
}
