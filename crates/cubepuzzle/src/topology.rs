//! Cubies, stickers, and where they start.

use std::fmt;
use std::str::FromStr;

use cubemath::prelude::*;
use cubemath::{Axis, ParseLatticeError};
use smallvec::SmallVec;
use strum::EnumIter;

/// Half the side length of a cubie. Cubies are unit cubes centered on lattice
/// points.
pub const CUBIE_HALF_SIZE: f32 = 0.5;
/// Distance that stickers float above the surface of their cubie.
pub const STICKER_OFFSET: f32 = 0.001;
/// Distance from the origin to the extended face planes used for pointer
/// dragging. This is the plane containing the outermost stickers.
pub const FACE_PLANE_DISTANCE: f32 = 1.0 + CUBIE_HALF_SIZE + STICKER_OFFSET;

/// Returns the invisible extended plane on the outer boundary of the cube for
/// one face.
pub fn face_plane(face: DirectedAxis) -> AxisPlane {
    AxisPlane {
        normal: face,
        distance: FACE_PLANE_DISTANCE,
    }
}

/// Index of a cubie in the [`Topology`].
///
/// This is a stable identity that does not change as the cubie moves.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubieId(pub u8);
impl CubieId {
    /// Returns the ID as an index.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Index of a sticker in the [`Topology`].
///
/// This is a stable identity that does not change as the sticker moves.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StickerId(pub u8);
impl StickerId {
    /// Returns the ID as an index.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Discrete location of a sticker: the position of its cubie and the
/// direction it faces.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StickerLocation {
    /// Position of the cubie that the sticker is attached to.
    pub cubie: LatticeVector,
    /// Outward normal of the sticker.
    pub facing: DirectedAxis,
}
impl fmt::Display for StickerLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.cubie, self.facing)
    }
}
impl FromStr for StickerLocation {
    type Err = ParseLatticeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (cubie, facing) = s
            .split_once('/')
            .ok_or_else(|| ParseLatticeError::BadStickerKey(s.to_owned()))?;
        Ok(Self {
            cubie: cubie.parse()?,
            facing: facing.parse()?,
        })
    }
}
impl StickerLocation {
    /// Returns whether the sticker lies on the outside of the cube: its cubie
    /// is a valid cubie position and the cubie is on the outer layer in the
    /// direction the sticker faces.
    pub fn is_on_surface(self) -> bool {
        self.cubie.is_cubie_position() && self.cubie[self.facing.axis] == self.facing.sign.int()
    }

    /// Returns the 3D center of the sticker.
    pub fn center(self) -> Vector3<f32> {
        sticker_center(self.cubie.to_vec3(), self.facing.vector())
    }
}

/// Returns the 3D center of a sticker, given the (possibly mid-turn) center of
/// its cubie and its (possibly mid-turn) facing vector.
pub fn sticker_center(cubie_center: Vector3<f32>, facing: Vector3<f32>) -> Vector3<f32> {
    cubie_center + facing * (CUBIE_HALF_SIZE + STICKER_OFFSET)
}

/// Color of a sticker, determined by the face it starts on.
#[derive(EnumIter, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FaceColor {
    /// Starts on +X.
    Blue,
    /// Starts on -X.
    Green,
    /// Starts on +Y.
    White,
    /// Starts on -Y.
    Yellow,
    /// Starts on +Z.
    Red,
    /// Starts on -Z.
    Orange,
}
impl FaceColor {
    /// Returns the color of stickers that start facing `facing`.
    pub fn from_home_facing(facing: DirectedAxis) -> Self {
        match (facing.axis, facing.sign) {
            (Axis::X, Sign::Pos) => Self::Blue,
            (Axis::X, Sign::Neg) => Self::Green,
            (Axis::Y, Sign::Pos) => Self::White,
            (Axis::Y, Sign::Neg) => Self::Yellow,
            (Axis::Z, Sign::Pos) => Self::Red,
            (Axis::Z, Sign::Neg) => Self::Orange,
        }
    }

    /// Returns the single-character label used in the facelet string.
    pub fn label(self) -> char {
        match self {
            Self::Blue => 'B',
            Self::Green => 'G',
            Self::White => 'W',
            Self::Yellow => 'Y',
            Self::Red => 'R',
            Self::Orange => 'O',
        }
    }
}

/// Information about a cubie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubieInfo {
    /// Position of the cubie in the solved state.
    pub home: LatticeVector,
    /// Stickers attached to the cubie.
    pub stickers: SmallVec<[StickerId; 3]>,
}

/// Information about a sticker.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct StickerInfo {
    /// Cubie that the sticker is attached to.
    pub cubie: CubieId,
    /// Location of the sticker in the solved state.
    pub home: StickerLocation,
    /// Color of the sticker.
    pub color: FaceColor,
}

/// Immutable description of the puzzle's pieces.
///
/// Only the starting positions live here. Current positions are tracked by the
/// [`crate::TurnAnimator`] and change after every turn.
#[derive(Debug, Clone)]
pub struct Topology {
    cubies: Vec<CubieInfo>,
    stickers: Vec<StickerInfo>,
}

lazy_static! {
    static ref TOPOLOGY: Topology = Topology::generate();
}

impl Topology {
    /// Returns the topology of the 3x3x3 cube.
    pub fn get() -> &'static Topology {
        &TOPOLOGY
    }

    fn generate() -> Self {
        let mut cubies = vec![];
        let mut stickers = vec![];

        for home in LatticeVector::cubie_positions() {
            let cubie = CubieId(cubies.len() as u8);
            let mut cubie_stickers = SmallVec::new();
            for axis in home.nonzero_axes() {
                let Some(sign) = Sign::from_int(home[axis]) else {
                    continue;
                };
                let facing = DirectedAxis::new(axis, sign);
                cubie_stickers.push(StickerId(stickers.len() as u8));
                stickers.push(StickerInfo {
                    cubie,
                    home: StickerLocation {
                        cubie: home,
                        facing,
                    },
                    color: FaceColor::from_home_facing(facing),
                });
            }
            cubies.push(CubieInfo {
                home,
                stickers: cubie_stickers,
            });
        }

        Self { cubies, stickers }
    }

    /// Returns all cubies, indexed by [`CubieId`].
    pub fn cubies(&self) -> &[CubieInfo] {
        &self.cubies
    }
    /// Returns all stickers, indexed by [`StickerId`].
    pub fn stickers(&self) -> &[StickerInfo] {
        &self.stickers
    }

    /// Returns information about a cubie.
    pub fn cubie(&self, id: CubieId) -> &CubieInfo {
        &self.cubies[id.index()]
    }
    /// Returns information about a sticker.
    pub fn sticker(&self, id: StickerId) -> &StickerInfo {
        &self.stickers[id.index()]
    }

    /// Returns an iterator over all cubie IDs.
    pub fn cubie_ids(&self) -> impl Iterator<Item = CubieId> + use<> {
        (0..self.cubies.len() as u8).map(CubieId)
    }
    /// Returns an iterator over all sticker IDs.
    pub fn sticker_ids(&self) -> impl Iterator<Item = StickerId> + use<> {
        (0..self.stickers.len() as u8).map(StickerId)
    }

    /// Returns all 54 sticker locations in the solved state. The set of
    /// locations is the same in every rest state; only which sticker occupies
    /// each one changes.
    pub fn sticker_locations(&self) -> impl Iterator<Item = StickerLocation> + '_ {
        self.stickers.iter().map(|s| s.home)
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_piece_counts() {
        let t = Topology::get();
        assert_eq!(t.cubies().len(), 26);
        assert_eq!(t.stickers().len(), 54);

        let counts = t.cubies().iter().map(|c| c.stickers.len()).counts();
        assert_eq!(counts[&3], 8); // corners
        assert_eq!(counts[&2], 12); // edges
        assert_eq!(counts[&1], 6); // centers
    }

    #[test]
    fn test_stickers_face_outward() {
        let t = Topology::get();
        for (i, sticker) in t.stickers().iter().enumerate() {
            assert!(sticker.home.is_on_surface());
            assert_eq!(t.cubie(sticker.cubie).home, sticker.home.cubie);
            assert!(t.cubie(sticker.cubie).stickers.contains(&StickerId(i as u8)));
        }
        assert!(t.sticker_locations().all_unique());
    }

    #[test]
    fn test_colors() {
        let t = Topology::get();
        let counts = t.stickers().iter().map(|s| s.color).counts();
        assert_eq!(counts.len(), 6);
        assert!(counts.values().all(|&n| n == 9));
    }

    #[test]
    fn test_sticker_keys() {
        let loc = StickerLocation {
            cubie: LatticeVector::new(1, 0, -1),
            facing: DirectedAxis::POS_X,
        };
        assert_eq!(loc.to_string(), "1,0,-1/+x");
        assert_eq!("1,0,-1/+x".parse(), Ok(loc));
        assert!("1,0,-1".parse::<StickerLocation>().is_err());
        assert!("1,0,-1/x".parse::<StickerLocation>().is_err());
    }

    #[test]
    fn test_face_plane_contains_face_center_sticker() {
        for face in DirectedAxis::iter() {
            let sticker = StickerLocation {
                cubie: face.lattice_vector(),
                facing: face,
            };
            let plane = face_plane(face);
            let center = Point3::from_vec(sticker.center());
            assert!(plane.signed_distance_to_point(center).abs() < 1e-5);
        }
    }
}
