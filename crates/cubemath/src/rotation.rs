//! Rotations about principal axes.

use cgmath::{Matrix3, Rad, Vector3};

use crate::{Axis, LatticeVector};

/// Returns the matrix that rotates a vector by `theta` radians about `axis`,
/// using the right-hand rule.
pub fn rotation_matrix(axis: Axis, theta: f32) -> Matrix3<f32> {
    match axis {
        Axis::X => Matrix3::from_angle_x(Rad(theta)),
        Axis::Y => Matrix3::from_angle_y(Rad(theta)),
        Axis::Z => Matrix3::from_angle_z(Rad(theta)),
    }
}

/// Rounds each component of `v` to the nearest integer.
///
/// Negative zero and anything that rounds to zero become `0`. Components
/// outside the range of `i8` saturate.
pub fn round_to_lattice(v: Vector3<f32>) -> LatticeVector {
    // `as` saturates and maps NaN to zero.
    LatticeVector::new(v.x.round() as i8, v.y.round() as i8, v.z.round() as i8)
}

/// Rotates a lattice vector by `theta` radians about `axis` and rounds the
/// result back onto the lattice.
pub fn rotate_lattice(axis: Axis, theta: f32, v: LatticeVector) -> LatticeVector {
    round_to_lattice(rotation_matrix(axis, theta) * v.to_vec3())
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_right_hand_rule() {
        let x = LatticeVector::new(1, 0, 0);
        let y = LatticeVector::new(0, 1, 0);
        let z = LatticeVector::new(0, 0, 1);
        assert_eq!(rotate_lattice(Axis::X, FRAC_PI_2, y), z);
        assert_eq!(rotate_lattice(Axis::Y, FRAC_PI_2, z), x);
        assert_eq!(rotate_lattice(Axis::Z, FRAC_PI_2, x), y);
        assert_eq!(rotate_lattice(Axis::Z, -FRAC_PI_2, y), x);
        assert_eq!(rotate_lattice(Axis::X, PI, y), -y);
    }

    #[test]
    fn test_round_to_lattice() {
        let v = round_to_lattice(Vector3::new(-0.0001, 0.9999, -1.4));
        assert_eq!(v, LatticeVector::new(0, 1, -1));
        assert_eq!(v.to_string(), "0,1,-1");
    }

    fn axis_strategy() -> impl Strategy<Value = Axis> {
        prop_oneof![Just(Axis::X), Just(Axis::Y), Just(Axis::Z)]
    }

    proptest! {
        #[test]
        fn proptest_quarter_turns_stay_on_lattice(
            axis in axis_strategy(),
            quarter_turns in -4_i32..=4,
            coords in prop::array::uniform3(-1_i8..=1),
        ) {
            let v = LatticeVector(coords);
            let rotated = rotate_lattice(axis, FRAC_PI_2 * quarter_turns as f32, v);
            prop_assert!(rotated.is_in_unit_cube());
            prop_assert_eq!(rotated == LatticeVector::ZERO, v == LatticeVector::ZERO);
            prop_assert_eq!(rotated[axis], v[axis]);
        }
    }
}
