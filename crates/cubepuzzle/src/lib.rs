//! Move engine for an interactive 3x3x3 twisty puzzle.
//!
//! The puzzle's state is a set of cubies and stickers at integer lattice
//! positions. Input (keys and pointer drags) is translated into [`Move`]s
//! relative to the camera, moves are queued in a [`MoveStore`], and the
//! [`TurnAnimator`] rotates pieces a little each frame before snapping them
//! back onto the lattice. [`CubeSimulation`] ties these together.

#[macro_use]
extern crate lazy_static;

mod animator;
mod camera;
mod facelets;
mod input;
mod moves;
mod notation;
mod simulation;
mod store;
mod topology;

pub use animator::*;
pub use camera::*;
pub use facelets::*;
pub use input::*;
pub use moves::*;
pub use notation::*;
pub use simulation::*;
pub use store::*;
pub use topology::*;

pub use cubemath;
pub use cubeprefs;

#[cfg(test)]
mod tests;
