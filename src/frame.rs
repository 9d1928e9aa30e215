use nalgebra::{UnitQuaternion, Vector3};

// ---------------------------------------------------------------------------
// World <-> body direction conversions
// ---------------------------------------------------------------------------

/// Rotate a world-frame direction vector into the body frame.
///
/// Direction-only: the craft orientation is applied as a pure rotation, no
/// translation. Positions must not be passed through here.
pub fn to_body(v: &Vector3<f64>, orientation: &UnitQuaternion<f64>) -> Vector3<f64> {
    orientation.inverse_transform_vector(v)
}

/// Rotate a body-frame direction vector into the world frame.
pub fn to_world(v: &Vector3<f64>, orientation: &UnitQuaternion<f64>) -> Vector3<f64> {
    orientation.transform_vector(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_is_identity() {
        let orientations = [
            UnitQuaternion::identity(),
            UnitQuaternion::from_euler_angles(0.3, -1.2, 2.5),
            UnitQuaternion::from_euler_angles(-2.9, 0.01, 0.7),
        ];
        let vectors = [
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(-3.0, 5.0, 0.25),
            Vector3::new(1e6, -2e6, 3e6),
        ];
        for q in &orientations {
            for v in &vectors {
                let back = to_world(&to_body(v, q), q);
                assert!(
                    (back - v).norm() <= 1e-9 * v.norm(),
                    "round trip drifted: {back:?} vs {v:?}"
                );
            }
        }
    }

    #[test]
    fn yaw_quarter_turn_maps_forward_to_left() {
        // +90 deg about +Y takes body -Z (forward) to world -X
        let q = UnitQuaternion::from_euler_angles(0.0, std::f64::consts::FRAC_PI_2, 0.0);
        let world = to_world(&Vector3::new(0.0, 0.0, -1.0), &q);
        assert!((world - Vector3::new(-1.0, 0.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn conversion_ignores_translation_semantics() {
        // A direction's length is preserved; no origin shift sneaks in.
        let q = UnitQuaternion::from_euler_angles(1.0, 2.0, 3.0);
        let v = Vector3::new(0.0, 7.5, 0.0);
        assert!((to_body(&v, &q).norm() - 7.5).abs() < 1e-9);
    }
}
