//! Integer lattice vectors.

use std::fmt;
use std::ops::{Index, IndexMut, Neg};
use std::str::FromStr;

use cgmath::Vector3;
use strum::IntoEnumIterator;
use thiserror::Error;

use crate::Axis;

/// Error produced when parsing a lattice key or directed axis key.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseLatticeError {
    /// Lattice key does not have exactly three integer coordinates.
    #[error("bad lattice key {0:?}; expected three comma-separated integers")]
    BadLatticeKey(String),
    /// Directed axis key is not a sign followed by an axis name.
    #[error("bad directed axis {0:?}; expected something like \"+x\" or \"-z\"")]
    BadDirectedAxis(String),
    /// Sticker key is not a lattice key and directed axis key separated by a
    /// slash.
    #[error("bad sticker key {0:?}; expected something like \"1,0,-1/+x\"")]
    BadStickerKey(String),
}

/// Integer 3-vector.
///
/// Cubie positions are lattice vectors with every coordinate in `{-1, 0, 1}`,
/// excluding the origin. Equality and hashing are by coordinates, so a lattice
/// vector can key a map even though pieces replace their positions after
/// every completed turn.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatticeVector(pub [i8; 3]);
impl Index<Axis> for LatticeVector {
    type Output = i8;

    fn index(&self, axis: Axis) -> &Self::Output {
        &self.0[axis.index()]
    }
}
impl IndexMut<Axis> for LatticeVector {
    fn index_mut(&mut self, axis: Axis) -> &mut Self::Output {
        &mut self.0[axis.index()]
    }
}
impl Neg for LatticeVector {
    type Output = LatticeVector;

    fn neg(self) -> Self::Output {
        Self(self.0.map(|x| -x))
    }
}
impl From<LatticeVector> for Vector3<f32> {
    fn from(v: LatticeVector) -> Self {
        v.to_vec3()
    }
}

impl fmt::Display for LatticeVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.0;
        write!(f, "{x},{y},{z}")
    }
}
impl FromStr for LatticeVector {
    type Err = ParseLatticeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseLatticeError::BadLatticeKey(s.to_owned());
        let mut coords = s.split(',').map(|c| c.trim().parse::<i8>());
        let mut ret = [0; 3];
        for coord in &mut ret {
            *coord = coords.next().ok_or_else(err)?.map_err(|_| err())?;
        }
        match coords.next() {
            Some(_) => Err(err()),
            None => Ok(Self(ret)),
        }
    }
}

impl LatticeVector {
    /// Zero vector. This is never a valid cubie position.
    pub const ZERO: Self = Self([0; 3]);

    /// Constructs a lattice vector from coordinates.
    pub const fn new(x: i8, y: i8, z: i8) -> Self {
        Self([x, y, z])
    }

    /// Converts the lattice vector to a floating-point vector.
    pub fn to_vec3(self) -> Vector3<f32> {
        let [x, y, z] = self.0.map(f32::from);
        Vector3::new(x, y, z)
    }

    /// Returns whether every coordinate is in `{-1, 0, 1}`.
    pub fn is_in_unit_cube(self) -> bool {
        self.0.iter().all(|x| (-1..=1).contains(x))
    }
    /// Returns whether this is one of the 26 cubie positions: every
    /// coordinate in `{-1, 0, 1}` and at least one nonzero.
    pub fn is_cubie_position(self) -> bool {
        self.is_in_unit_cube() && self != Self::ZERO
    }

    /// Returns the axes on which the vector is nonzero, in axis order.
    pub fn nonzero_axes(self) -> impl Iterator<Item = Axis> {
        Axis::iter().filter(move |&axis| self[axis] != 0)
    }

    /// Returns all 26 cubie positions, ordered by x, then y, then z.
    pub fn cubie_positions() -> impl Iterator<Item = LatticeVector> {
        (-1..=1).flat_map(|x| {
            (-1..=1).flat_map(move |y| {
                (-1..=1)
                    .map(move |z| LatticeVector::new(x, y, z))
                    .filter(|&v| v != LatticeVector::ZERO)
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_cubie_positions() {
        let positions: Vec<_> = LatticeVector::cubie_positions().collect();
        assert_eq!(positions.len(), 26);
        assert!(positions.iter().all(|p| p.is_cubie_position()));
        assert!(!positions.contains(&LatticeVector::ZERO));
        let mut deduped = positions.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), 26);
    }

    #[test]
    fn test_lattice_keys() {
        let v = LatticeVector::new(1, 0, -1);
        assert_eq!(v.to_string(), "1,0,-1");
        assert_eq!("1,0,-1".parse(), Ok(v));
        assert_eq!(" 1, 0 ,-1 ".parse(), Ok(v));
        assert!("1,0".parse::<LatticeVector>().is_err());
        assert!("1,0,-1,0".parse::<LatticeVector>().is_err());
        assert!("1,a,0".parse::<LatticeVector>().is_err());
    }

    #[test]
    fn test_nonzero_axes() {
        let axes: Vec<_> = LatticeVector::new(-1, 0, 1).nonzero_axes().collect();
        assert_eq!(axes, vec![Axis::X, Axis::Z]);
    }
}
