//! Lattice, axis, and rotation primitives for a 3x3x3 twisty puzzle.
//!
//! Everything here is a pure function of its inputs. Discrete positions are
//! integer [`LatticeVector`]s; continuous positions are [`cgmath`] vectors that
//! get rounded back onto the lattice with [`round_to_lattice()`].

pub use cgmath;
#[doc(hidden)]
pub use log;

/// Small floating-point value used for comparisons and tiny offsets.
pub const EPSILON: f32 = 0.000001;

/// Panics in debug builds and logs an error in release builds.
///
/// Used for geometric invariant violations, which indicate a bug in move
/// construction rather than bad user input.
#[macro_export]
macro_rules! debug_panic {
    ($($tok:tt)*) => {
        match cfg!(debug_assertions) {
            true => panic!($($tok)*),
            false => $crate::log::error!($($tok)*),
        }
    };
}

mod axis;
mod lattice;
mod ray;
mod rotation;
mod sign;

pub use axis::{Axis, DirectedAxis};
pub use lattice::{LatticeVector, ParseLatticeError};
pub use ray::{AxisPlane, Ray};
pub use rotation::{rotate_lattice, rotation_matrix, round_to_lattice};
pub use sign::Sign;

/// Structs, traits, and constants.
pub mod prelude {
    pub use cgmath::{
        EuclideanSpace, InnerSpace, Matrix3, Point2, Point3, Rad, SquareMatrix, Vector2, Vector3,
        Zero,
    };

    pub use crate::{
        Axis, AxisPlane, DirectedAxis, EPSILON, LatticeVector, Ray, Sign, rotate_lattice,
        rotation_matrix, round_to_lattice,
    };
}
