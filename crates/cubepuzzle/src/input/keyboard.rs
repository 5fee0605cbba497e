use crate::{CameraAxes, CameraFace, Move, MoveFamily};

/// Returns the move family and whether the move is clockwise for a key, or
/// `None` if the key does not turn anything.
///
/// Uppercase letters turn clockwise as seen from outside the face; lowercase
/// letters turn counterclockwise.
pub fn key_family(key: char) -> Option<(MoveFamily, bool)> {
    let family = match key.to_ascii_uppercase() {
        'R' => MoveFamily::Face(CameraFace::Right),
        'L' => MoveFamily::Face(CameraFace::Left),
        'U' => MoveFamily::Face(CameraFace::Up),
        'D' => MoveFamily::Face(CameraFace::Down),
        'F' => MoveFamily::Face(CameraFace::Front),
        'B' => MoveFamily::Face(CameraFace::Back),

        'M' => MoveFamily::Slice(CameraFace::Left),
        'E' => MoveFamily::Slice(CameraFace::Down),
        'S' => MoveFamily::Slice(CameraFace::Front),

        'X' => MoveFamily::Rotation(CameraFace::Right),
        'Y' => MoveFamily::Rotation(CameraFace::Up),
        'Z' => MoveFamily::Rotation(CameraFace::Front),

        _ => return None,
    };
    Some((family, key.is_ascii_uppercase()))
}

/// Translates a keypress into a move relative to the camera, or returns `None`
/// if the key is not bound.
///
/// `key` is the normalized key string from a keydown event, such as `"R"` or
/// `"m"`. Keys longer than one character (`"Shift"`, `"ArrowUp"`) are never
/// bound.
pub fn key_to_move(key: &str, axes: &CameraAxes) -> Option<Move> {
    let mut chars = key.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return None;
    };
    let (family, clockwise) = key_family(c)?;
    let mv = family.resolve(axes, clockwise);
    log::trace!("key {key:?} -> {mv}");
    Some(mv)
}

#[cfg(test)]
mod tests {
    use cubemath::prelude::*;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::LayerSet;

    #[test]
    fn test_standard_view() {
        let axes = CameraAxes::default();

        let r = key_to_move("R", &axes).unwrap();
        assert_eq!(r, Move::new(Axis::X, LayerSet::single(1), Sign::Neg));
        assert_eq!(r.target_angle(), -std::f32::consts::FRAC_PI_2);

        let r_prime = key_to_move("r", &axes).unwrap();
        assert_eq!(r_prime, r.rev());

        assert_eq!(
            key_to_move("U", &axes),
            Some(Move::new(Axis::Y, LayerSet::single(1), Sign::Neg)),
        );
        assert_eq!(
            key_to_move("D", &axes),
            Some(Move::new(Axis::Y, LayerSet::single(-1), Sign::Pos)),
        );
        assert_eq!(
            key_to_move("B", &axes),
            Some(Move::new(Axis::Z, LayerSet::single(-1), Sign::Pos)),
        );
        assert_eq!(
            key_to_move("E", &axes),
            Some(Move::new(Axis::Y, LayerSet::SLICE, Sign::Pos)),
        );
        assert_eq!(
            key_to_move("s", &axes),
            Some(Move::new(Axis::Z, LayerSet::SLICE, Sign::Pos)),
        );
        assert_eq!(
            key_to_move("X", &axes),
            Some(Move::new(Axis::X, LayerSet::ALL, Sign::Neg)),
        );
        assert_eq!(
            key_to_move("y", &axes),
            Some(Move::new(Axis::Y, LayerSet::ALL, Sign::Pos)),
        );
    }

    #[test]
    fn test_unbound_keys() {
        let axes = CameraAxes::default();
        for key in ["", "Q", "1", " ", "Shift", "RR", "ArrowUp"] {
            assert_eq!(key_to_move(key, &axes), None, "{key:?}");
        }
    }

    #[test]
    fn test_camera_relative() {
        // Looking at the right face: "F" turns +X.
        let axes = CameraAxes::from_front_up(DirectedAxis::POS_X, DirectedAxis::POS_Y);
        assert_eq!(
            key_to_move("F", &axes),
            Some(Move::new(Axis::X, LayerSet::single(1), Sign::Neg)),
        );
        // ... and "R" turns the back face.
        assert_eq!(
            key_to_move("R", &axes),
            Some(Move::new(Axis::Z, LayerSet::single(-1), Sign::Pos)),
        );

        // Looking down at the top face with the back face at the top of the
        // screen: "U" turns the back face.
        let axes = CameraAxes::from_front_up(DirectedAxis::POS_Y, DirectedAxis::NEG_Z);
        assert_eq!(
            key_to_move("U", &axes),
            Some(Move::new(Axis::Z, LayerSet::single(-1), Sign::Pos)),
        );
        assert_eq!(
            key_to_move("F", &axes),
            Some(Move::new(Axis::Y, LayerSet::single(1), Sign::Neg)),
        );
    }
}
