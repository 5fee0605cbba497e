//! Translation of keyboard and pointer input into moves.

mod keyboard;
mod pointer;

pub use keyboard::*;
pub use pointer::*;
