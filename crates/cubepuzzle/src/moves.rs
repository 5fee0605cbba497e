//! Layer turns and whole-puzzle rotations.

use std::f32::consts::FRAC_PI_2;
use std::fmt;
use std::ops::BitOr;

use cubemath::prelude::*;
use cubemath::debug_panic;

use crate::{CameraAxes, CameraFace, StickerLocation};

/// Set of layers along one axis, as a subset of `{-1, 0, 1}`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayerSet(u8);
impl fmt::Display for LayerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, layer) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{layer}")?;
        }
        write!(f, "}}")
    }
}
impl BitOr for LayerSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}
impl FromIterator<i8> for LayerSet {
    fn from_iter<T: IntoIterator<Item = i8>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::NONE, |acc, layer| acc | Self::single(layer))
    }
}
impl LayerSet {
    /// No layers.
    pub const NONE: Self = Self(0b000);
    /// Middle slice.
    pub const SLICE: Self = Self(0b010);
    /// Every layer (whole-puzzle rotation).
    pub const ALL: Self = Self(0b111);

    const fn bit(layer: i8) -> u8 {
        match layer {
            -1 => 0b001,
            0 => 0b010,
            1 => 0b100,
            _ => 0,
        }
    }

    /// Returns the set containing only `layer`. Layers outside `{-1, 0, 1}`
    /// are ignored.
    pub const fn single(layer: i8) -> Self {
        Self(Self::bit(layer))
    }
    /// Returns the set containing only the outer layer on the `sign` side.
    pub const fn outer(sign: Sign) -> Self {
        Self::single(sign.int())
    }
    /// Returns the outer layer on the `sign` side plus the middle slice.
    pub const fn wide(sign: Sign) -> Self {
        Self(Self::bit(sign.int()) | Self::SLICE.0)
    }

    /// Returns whether `layer` is in the set.
    pub const fn contains(self, layer: i8) -> bool {
        let bit = Self::bit(layer);
        bit != 0 && self.0 & bit != 0
    }
    /// Returns whether the set is empty.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
    /// Returns the number of layers in the set.
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }
    /// Returns the layers in the set, in ascending order.
    pub fn iter(self) -> impl Iterator<Item = i8> {
        [-1, 0, 1].into_iter().filter(move |&l| self.contains(l))
    }
}

/// Quarter turn of one or more layers about a principal axis.
///
/// The turn is a right-hand rotation about the positive axis by
/// `direction * π/2`. Only quarter turns are representable; a half turn is two
/// moves.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    /// Axis of rotation.
    pub axis: Axis,
    /// Layers along `axis` that rotate.
    pub layers: LayerSet,
    /// Sign of the target angle.
    pub direction: Sign,
}
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.notation() {
            Some(s) => write!(f, "{s}"),
            None => write!(f, "{}{}{}", self.axis, self.layers, self.direction),
        }
    }
}
impl Move {
    /// Constructs a move.
    pub const fn new(axis: Axis, layers: LayerSet, direction: Sign) -> Self {
        Self {
            axis,
            layers,
            direction,
        }
    }

    /// Returns the signed angle that the move rotates by, which is always
    /// `±π/2`.
    pub fn target_angle(self) -> f32 {
        self.direction.float() * FRAC_PI_2
    }

    /// Returns whether the move affects the cubie at `point`.
    pub fn targets(self, point: LatticeVector) -> bool {
        self.layers.contains(point[self.axis])
    }
    /// Returns whether the move affects the sticker at `sticker`.
    pub fn targets_sticker(self, sticker: StickerLocation) -> bool {
        self.targets(sticker.cubie)
    }
    /// Returns whether the move rotates the whole puzzle.
    pub fn is_whole_puzzle_rotation(self) -> bool {
        self.layers == LayerSet::ALL
    }

    /// Returns the rotation for the complete move.
    pub fn exact_rotation(self) -> Matrix3<f32> {
        rotation_matrix(self.axis, self.target_angle())
    }
    /// Returns the rotation for one increment of the move.
    ///
    /// `delta_angle` must have the same sign as the target angle.
    pub fn partial_rotation(self, delta_angle: f32) -> Matrix3<f32> {
        debug_assert!(
            delta_angle == 0.0 || Sign::from_f32(delta_angle) == Some(self.direction),
            "partial rotation {delta_angle} has opposite sign from move {self}",
        );
        rotation_matrix(self.axis, delta_angle)
    }

    /// Applies the complete move to a lattice point and rounds the result back
    /// onto the lattice.
    pub fn apply_exact(self, point: LatticeVector) -> LatticeVector {
        rotate_lattice(self.axis, self.target_angle(), point)
    }
    /// Applies the complete move to a facing direction.
    pub fn apply_exact_to_facing(self, facing: DirectedAxis) -> DirectedAxis {
        let rotated = self.apply_exact(facing.lattice_vector());
        DirectedAxis::try_from(rotated).unwrap_or_else(|v| {
            debug_panic!("facing {facing} rotated by {self} is not an axis: {v}");
            facing
        })
    }
    /// Applies the complete move to a sticker location.
    pub fn apply_exact_to_sticker(self, sticker: StickerLocation) -> StickerLocation {
        StickerLocation {
            cubie: self.apply_exact(sticker.cubie),
            facing: self.apply_exact_to_facing(sticker.facing),
        }
    }

    /// Returns the inverse move.
    #[must_use]
    pub fn rev(self) -> Self {
        Self {
            direction: -self.direction,
            ..self
        }
    }
}

/// Kind of move named by a single letter, relative to a camera face.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MoveFamily {
    /// Outer layer on a face.
    Face(CameraFace),
    /// Outer layer plus middle slice.
    Wide(CameraFace),
    /// Middle slice, turning the same way as the given face.
    Slice(CameraFace),
    /// Whole puzzle, turning the same way as the given face.
    Rotation(CameraFace),
}
impl MoveFamily {
    /// Returns the camera face that the family turns with.
    pub fn face(self) -> CameraFace {
        match self {
            Self::Face(f) | Self::Wide(f) | Self::Slice(f) | Self::Rotation(f) => f,
        }
    }

    /// Resolves the family against camera axes to get a move in world
    /// coordinates. `clockwise` is as seen from outside the face.
    pub fn resolve(self, axes: &CameraAxes, clockwise: bool) -> Move {
        let d = axes.get(self.face());
        let layers = match self {
            Self::Face(_) => LayerSet::outer(d.sign),
            Self::Wide(_) => LayerSet::wide(d.sign),
            Self::Slice(_) => LayerSet::SLICE,
            Self::Rotation(_) => LayerSet::ALL,
        };
        // Clockwise seen from outside the face is a negative rotation about
        // the outward normal.
        let direction = if clockwise { -d.sign } else { d.sign };
        Move::new(d.axis, layers, direction)
    }
}
