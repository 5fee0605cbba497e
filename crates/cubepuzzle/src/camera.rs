//! Camera-relative face directions.

use std::f32::consts::{FRAC_PI_2, PI};

use cubemath::cgmath::Euler;
use cubemath::debug_panic;
use cubemath::prelude::*;
use float_ord::FloatOrd;
use strum::EnumIter;

/// Snapshot of the camera's transform.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CameraTransform {
    /// Position of the camera in world space. The camera orbits the puzzle,
    /// which is centered at the origin.
    pub position: Point3<f32>,
    /// Orientation of the camera as Euler angles. Only `rotation.z` (roll) is
    /// consulted, and only when looking at the top or bottom face.
    pub rotation: Euler<Rad<f32>>,
}
impl Default for CameraTransform {
    fn default() -> Self {
        Self::new(Point3::new(0.0, 0.0, 6.0), 0.0)
    }
}
impl CameraTransform {
    /// Constructs a camera transform from a position and a roll angle in
    /// radians.
    pub fn new(position: Point3<f32>, roll: f32) -> Self {
        Self {
            position,
            rotation: Euler::new(Rad(0.0), Rad(0.0), Rad(roll)),
        }
    }

    /// Returns the roll angle of the camera in radians.
    pub fn roll(&self) -> f32 {
        self.rotation.z.0
    }
}

/// Face of the puzzle relative to the camera.
#[derive(EnumIter, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CameraFace {
    /// Face at the top of the screen.
    Up,
    /// Face at the bottom of the screen.
    Down,
    /// Face pointing toward the camera.
    Front,
    /// Face pointing away from the camera.
    Back,
    /// Face on the left of the screen.
    Left,
    /// Face on the right of the screen.
    Right,
}

/// World-space directions of each camera-relative face.
///
/// This is derived from the camera transform on demand with
/// [`CameraAxes::resolve()`] and is never stored across frames.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub struct CameraAxes {
    pub up: DirectedAxis,
    pub down: DirectedAxis,
    pub front: DirectedAxis,
    pub back: DirectedAxis,
    pub left: DirectedAxis,
    pub right: DirectedAxis,
}
impl Default for CameraAxes {
    /// Returns the axes for a camera looking at the +Z face with +Y up.
    fn default() -> Self {
        Self::from_front_up(DirectedAxis::POS_Z, DirectedAxis::POS_Y)
    }
}
impl CameraAxes {
    /// Resolves camera-relative faces for a camera transform.
    ///
    /// The front face is the one nearest the camera. Up is +Y unless the
    /// camera is looking at the top or bottom face, in which case it depends
    /// on the camera's roll.
    pub fn resolve(camera: &CameraTransform) -> Self {
        let front = front_axis(camera.position);
        let up = up_axis(front, camera.roll());
        Self::from_front_up(front, up)
    }

    /// Derives the remaining faces from the front and up faces, which must be
    /// perpendicular.
    pub fn from_front_up(front: DirectedAxis, up: DirectedAxis) -> Self {
        let quarter_turn = rotation_matrix(front.axis, -FRAC_PI_2 * front.sign.float());
        let right_vector = round_to_lattice(quarter_turn * up.vector());
        let right = DirectedAxis::try_from(right_vector).unwrap_or_else(|v| {
            debug_panic!("up {up} is not perpendicular to front {front}; right is {v}");
            DirectedAxis::new(front.axis.perpendiculars()[0], Sign::Pos)
        });
        Self {
            up,
            down: -up,
            front,
            back: -front,
            left: -right,
            right,
        }
    }

    /// Returns the world-space direction of a camera-relative face.
    pub fn get(&self, face: CameraFace) -> DirectedAxis {
        match face {
            CameraFace::Up => self.up,
            CameraFace::Down => self.down,
            CameraFace::Front => self.front,
            CameraFace::Back => self.back,
            CameraFace::Left => self.left,
            CameraFace::Right => self.right,
        }
    }
}

/// Roll angles and up directions when looking at the +Y face.
const UP_FROM_TOP: [(f32, DirectedAxis); 5] = [
    (-PI, DirectedAxis::POS_Z),
    (-FRAC_PI_2, DirectedAxis::POS_X),
    (0.0, DirectedAxis::NEG_Z),
    (FRAC_PI_2, DirectedAxis::NEG_X),
    (PI, DirectedAxis::POS_Z),
];
/// Roll angles and up directions when looking at the -Y face.
const UP_FROM_BOTTOM: [(f32, DirectedAxis); 5] = [
    (-PI, DirectedAxis::NEG_Z),
    (-FRAC_PI_2, DirectedAxis::POS_X),
    (0.0, DirectedAxis::POS_Z),
    (FRAC_PI_2, DirectedAxis::NEG_X),
    (PI, DirectedAxis::NEG_Z),
];

/// Returns the directed axis nearest to the camera. Ties go to the first axis
/// in [`DirectedAxis::ALL`].
fn front_axis(camera_position: Point3<f32>) -> DirectedAxis {
    let p = camera_position.to_vec();
    DirectedAxis::iter()
        .min_by_key(|d| FloatOrd((p - d.vector()).magnitude2()))
        .unwrap_or(DirectedAxis::POS_Z)
}

fn up_axis(front: DirectedAxis, roll: f32) -> DirectedAxis {
    let table = match front {
        DirectedAxis::POS_Y => &UP_FROM_TOP,
        DirectedAxis::NEG_Y => &UP_FROM_BOTTOM,
        _ => return DirectedAxis::POS_Y,
    };
    table
        .iter()
        .min_by_key(|(angle, _)| FloatOrd((roll - angle).abs()))
        .map(|&(_, up)| up)
        .unwrap_or(DirectedAxis::POS_Y)
}
