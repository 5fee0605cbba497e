//! Principal axes and directed axes.

use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

use cgmath::Vector3;
use float_ord::FloatOrd;
use strum::{EnumIter, IntoEnumIterator};

use crate::{LatticeVector, ParseLatticeError, Sign};

/// 3-dimensional axis.
#[derive(EnumIter, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Axis {
    /// X axis (right).
    X = 0,
    /// Y axis (up).
    Y = 1,
    /// Z axis (towards the camera).
    Z = 2,
}
impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
impl Axis {
    /// Returns the lowercase name of the axis.
    pub const fn name(self) -> char {
        match self {
            Axis::X => 'x',
            Axis::Y => 'y',
            Axis::Z => 'z',
        }
    }
    /// Returns the axis with a lowercase or uppercase name.
    pub fn from_char(c: char) -> Option<Axis> {
        match c.to_ascii_lowercase() {
            'x' => Some(Axis::X),
            'y' => Some(Axis::Y),
            'z' => Some(Axis::Z),
            _ => None,
        }
    }

    /// Returns the index of the axis, for indexing into coordinate arrays.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the two axes perpendicular to this one, in cyclic order (so
    /// that `a × b` points along `self`).
    pub const fn perpendiculars(self) -> [Axis; 2] {
        match self {
            Axis::X => [Axis::Y, Axis::Z],
            Axis::Y => [Axis::Z, Axis::X],
            Axis::Z => [Axis::X, Axis::Y],
        }
    }

    /// Returns the one axis that is neither `self` nor `other`, or `None` if
    /// they are the same axis.
    pub fn third(self, other: Axis) -> Option<Axis> {
        Axis::iter().find(|&a| a != self && a != other && self != other)
    }

    /// Returns the unit vector along this axis.
    pub fn unit_vec3(self) -> Vector3<f32> {
        match self {
            Axis::X => Vector3::unit_x(),
            Axis::Y => Vector3::unit_y(),
            Axis::Z => Vector3::unit_z(),
        }
    }
}

/// Principal axis paired with a sign, denoting one of the six faces of the
/// cube as seen in world space.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DirectedAxis {
    /// Axis.
    pub axis: Axis,
    /// Direction along the axis.
    pub sign: Sign,
}
impl Neg for DirectedAxis {
    type Output = DirectedAxis;

    fn neg(self) -> Self::Output {
        self.opposite()
    }
}
impl fmt::Display for DirectedAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.sign, self.axis)
    }
}
impl FromStr for DirectedAxis {
    type Err = ParseLatticeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let sign = match chars.next() {
            Some('+') => Sign::Pos,
            Some('-') => Sign::Neg,
            _ => return Err(ParseLatticeError::BadDirectedAxis(s.to_owned())),
        };
        let axis = chars
            .next()
            .and_then(Axis::from_char)
            .ok_or_else(|| ParseLatticeError::BadDirectedAxis(s.to_owned()))?;
        if chars.next().is_some() {
            return Err(ParseLatticeError::BadDirectedAxis(s.to_owned()));
        }
        Ok(DirectedAxis { axis, sign })
    }
}
impl TryFrom<LatticeVector> for DirectedAxis {
    type Error = LatticeVector;

    /// Converts a unit lattice vector into a directed axis. Returns the vector
    /// back if it is not a signed unit vector.
    fn try_from(v: LatticeVector) -> Result<Self, Self::Error> {
        let mut nonzero = Axis::iter().filter_map(|axis| Some((axis, Sign::from_int(v[axis])?)));
        match (nonzero.next(), nonzero.next()) {
            (Some((axis, sign)), None) if v[axis].abs() == 1 => Ok(DirectedAxis { axis, sign }),
            _ => Err(v),
        }
    }
}
impl From<DirectedAxis> for LatticeVector {
    fn from(d: DirectedAxis) -> Self {
        d.lattice_vector()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for DirectedAxis {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DirectedAxis {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl DirectedAxis {
    /// All six directed axes, in enumeration order: `+x, -x, +y, -y, +z, -z`.
    ///
    /// This order is used to break ties wherever a nearest directed axis is
    /// chosen.
    pub const ALL: [DirectedAxis; 6] = [
        DirectedAxis::new(Axis::X, Sign::Pos),
        DirectedAxis::new(Axis::X, Sign::Neg),
        DirectedAxis::new(Axis::Y, Sign::Pos),
        DirectedAxis::new(Axis::Y, Sign::Neg),
        DirectedAxis::new(Axis::Z, Sign::Pos),
        DirectedAxis::new(Axis::Z, Sign::Neg),
    ];

    /// Positive X (right face).
    pub const POS_X: DirectedAxis = DirectedAxis::new(Axis::X, Sign::Pos);
    /// Negative X (left face).
    pub const NEG_X: DirectedAxis = DirectedAxis::new(Axis::X, Sign::Neg);
    /// Positive Y (up face).
    pub const POS_Y: DirectedAxis = DirectedAxis::new(Axis::Y, Sign::Pos);
    /// Negative Y (down face).
    pub const NEG_Y: DirectedAxis = DirectedAxis::new(Axis::Y, Sign::Neg);
    /// Positive Z (front face).
    pub const POS_Z: DirectedAxis = DirectedAxis::new(Axis::Z, Sign::Pos);
    /// Negative Z (back face).
    pub const NEG_Z: DirectedAxis = DirectedAxis::new(Axis::Z, Sign::Neg);

    /// Constructs a directed axis.
    pub const fn new(axis: Axis, sign: Sign) -> Self {
        Self { axis, sign }
    }

    /// Returns an iterator over all six directed axes in enumeration order.
    pub fn iter() -> impl Clone + Iterator<Item = DirectedAxis> {
        Self::ALL.into_iter()
    }

    /// Returns the directed axis pointing the other way.
    #[must_use]
    pub fn opposite(self) -> Self {
        Self {
            axis: self.axis,
            sign: -self.sign,
        }
    }

    /// Returns the unit vector of the directed axis.
    pub fn vector(self) -> Vector3<f32> {
        self.axis.unit_vec3() * self.sign.float()
    }
    /// Returns the unit lattice vector of the directed axis.
    pub fn lattice_vector(self) -> LatticeVector {
        let mut ret = LatticeVector::ZERO;
        ret[self.axis] = self.sign.int();
        ret
    }

    /// Returns the directed axis closest in direction to `v`, chosen by the
    /// component with the largest magnitude. Returns `None` if `v` has no
    /// nonzero component.
    pub fn nearest(v: Vector3<f32>) -> Option<Self> {
        let axis = Axis::iter()
            .rev()
            .max_by_key(|&axis| FloatOrd(v[axis.index()].abs()))?;
        let sign = Sign::from_f32(v[axis.index()])?;
        Some(Self { axis, sign })
    }
}
