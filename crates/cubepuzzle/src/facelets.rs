//! Flattened 54-character representation of the puzzle.
//!
//! Faces are listed in the order up, down, front, back, right, left. Each face
//! is read left to right, top to bottom, as seen when looking at that face with
//! the front face (or, for the top and bottom faces, the back and front faces)
//! at the top.

use cubemath::prelude::*;
use itertools::Itertools;

use crate::{FaceColor, StickerLocation};

/// Number of stickers on the puzzle.
pub const FACELET_COUNT: usize = 54;

/// Facelet string of the solved puzzle.
pub const SOLVED_FACELETS: &str = "WWWWWWWWWYYYYYYYYYRRRRRRRRROOOOOOOOOBBBBBBBBBGGGGGGGGG";

/// Faces in facelet order.
pub const FACELET_FACES: [DirectedAxis; 6] = [
    DirectedAxis::POS_Y,
    DirectedAxis::NEG_Y,
    DirectedAxis::POS_Z,
    DirectedAxis::NEG_Z,
    DirectedAxis::POS_X,
    DirectedAxis::NEG_X,
];

/// Returns the index of a sticker location in the facelet string, or `None` if
/// the location is not on the surface.
pub fn facelet_index(sticker: StickerLocation) -> Option<usize> {
    if !sticker.is_on_surface() {
        return None;
    }
    let face = FACELET_FACES.iter().position(|&f| f == sticker.facing)?;
    let [x, y, z] = sticker.cubie.0;
    let (col, row) = match sticker.facing {
        DirectedAxis::POS_Y => (x, z),
        DirectedAxis::NEG_Y => (x, -z),
        DirectedAxis::POS_Z => (x, -y),
        DirectedAxis::NEG_Z => (-x, -y),
        DirectedAxis::POS_X => (-z, -y),
        DirectedAxis::NEG_X => (z, -y),
        _ => return None,
    };
    Some(face * 9 + (row + 1) as usize * 3 + (col + 1) as usize)
}

/// Builds the facelet string from the current location and color of each
/// sticker.
///
/// Positions with no sticker are filled with `?`.
pub fn facelets(stickers: impl IntoIterator<Item = (StickerLocation, FaceColor)>) -> String {
    let mut chars = ['?'; FACELET_COUNT];
    for (location, color) in stickers {
        match facelet_index(location) {
            Some(i) => chars[i] = color.label(),
            None => log::warn!("sticker at {location} is not on the surface"),
        }
    }
    chars.iter().collect()
}

/// Returns whether every face of a facelet string is a single color.
pub fn is_solved_facelets(facelets: &str) -> bool {
    facelets.chars().count() == FACELET_COUNT
        && facelets
            .chars()
            .chunks(9)
            .into_iter()
            .all(|mut face| face.all_equal())
}
