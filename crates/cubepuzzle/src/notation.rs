//! Standard move notation such as `R U R' U'`.

use cubemath::prelude::*;
use smallvec::{SmallVec, smallvec};

use crate::{CameraAxes, CameraFace, LayerSet, Move, MoveFamily};

/// Error produced when parsing move notation.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum ParseNotationError {
    #[error("empty move")]
    Empty,
    #[error("unknown move {0:?}")]
    UnknownFamily(String),
    #[error("invalid suffix {suffix:?} on move {token:?}")]
    BadSuffix { token: String, suffix: String },
}

/// Parses a whitespace-separated sequence of moves, resolving faces relative
/// to `axes`. Half turns produce two quarter turns.
pub fn parse_moves(s: &str, axes: &CameraAxes) -> Result<Vec<Move>, ParseNotationError> {
    let mut ret = vec![];
    for token in s.split_whitespace() {
        ret.extend(parse_move(token, axes)?);
    }
    Ok(ret)
}

/// Parses a single move token such as `R`, `Rw'`, `M2`, or `y`.
pub fn parse_move(
    token: &str,
    axes: &CameraAxes,
) -> Result<SmallVec<[Move; 2]>, ParseNotationError> {
    let mut chars = token.chars();
    let first = chars.next().ok_or(ParseNotationError::Empty)?;
    let mut rest = chars.as_str();

    let face = |c: char| match c.to_ascii_uppercase() {
        'R' => Some(CameraFace::Right),
        'L' => Some(CameraFace::Left),
        'U' => Some(CameraFace::Up),
        'D' => Some(CameraFace::Down),
        'F' => Some(CameraFace::Front),
        'B' => Some(CameraFace::Back),
        _ => None,
    };

    let family = match first {
        'M' => MoveFamily::Slice(CameraFace::Left),
        'E' => MoveFamily::Slice(CameraFace::Down),
        'S' => MoveFamily::Slice(CameraFace::Front),
        'x' | 'X' => MoveFamily::Rotation(CameraFace::Right),
        'y' | 'Y' => MoveFamily::Rotation(CameraFace::Up),
        'z' | 'Z' => MoveFamily::Rotation(CameraFace::Front),
        c if c.is_ascii_uppercase() => {
            let f = face(c).ok_or_else(|| ParseNotationError::UnknownFamily(token.to_owned()))?;
            if let Some(r) = rest.strip_prefix('w') {
                rest = r;
                MoveFamily::Wide(f)
            } else {
                MoveFamily::Face(f)
            }
        }
        c => match face(c) {
            Some(f) => MoveFamily::Wide(f),
            None => return Err(ParseNotationError::UnknownFamily(token.to_owned())),
        },
    };

    let (count, clockwise) = match rest {
        "" => (1, true),
        "'" => (1, false),
        "2" => (2, true),
        "2'" => (2, false),
        _ => {
            return Err(ParseNotationError::BadSuffix {
                token: token.to_owned(),
                suffix: rest.to_owned(),
            });
        }
    };

    let mv = family.resolve(axes, clockwise);
    Ok(match count {
        2 => smallvec![mv, mv],
        _ => smallvec![mv],
    })
}

impl Move {
    /// Returns the move in standard notation relative to the default camera
    /// (front +Z, up +Y), or `None` if no single token names it.
    pub fn notation(self) -> Option<String> {
        let Self {
            axis,
            layers,
            direction,
        } = self;

        // Face letter and whether clockwise turns are positive rotations.
        let (letter, clockwise_sign) = if layers == LayerSet::ALL {
            (['x', 'y', 'z'][axis.index()], Sign::Neg)
        } else if layers == LayerSet::SLICE {
            match axis {
                Axis::X => ('M', Sign::Pos),
                Axis::Y => ('E', Sign::Pos),
                Axis::Z => ('S', Sign::Neg),
            }
        } else {
            let side = Sign::iter().find(|&s| {
                layers == LayerSet::outer(s) || layers == LayerSet::wide(s)
            })?;
            let face = DirectedAxis::new(axis, side);
            let upper = face_letter(face);
            let letter = if layers == LayerSet::wide(side) {
                upper.to_ascii_lowercase()
            } else {
                upper
            };
            (letter, -side)
        };

        let mut s = letter.to_string();
        if direction != clockwise_sign {
            s.push('\'');
        }
        Some(s)
    }
}

fn face_letter(face: DirectedAxis) -> char {
    match face {
        DirectedAxis::POS_X => 'R',
        DirectedAxis::NEG_X => 'L',
        DirectedAxis::POS_Y => 'U',
        DirectedAxis::NEG_Y => 'D',
        DirectedAxis::POS_Z => 'F',
        _ => 'B',
    }
}
