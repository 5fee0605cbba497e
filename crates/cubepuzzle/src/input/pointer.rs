use cubemath::prelude::*;
use float_ord::FloatOrd;

use crate::{LayerSet, Move, StickerLocation, face_plane};

/// Sticker under the pointer, as reported by the render host.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StickerHit {
    /// Current position of the cubie that the sticker is attached to.
    pub cubie: LatticeVector,
    /// Surface normal at the hit point, in world space.
    pub normal: Vector3<f32>,
}
impl From<StickerLocation> for StickerHit {
    fn from(sticker: StickerLocation) -> Self {
        Self {
            cubie: sticker.cubie,
            normal: sticker.facing.vector(),
        }
    }
}

/// Pointer press event.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerDown {
    /// Screen position of the pointer, in pixels.
    pub screen_pos: Point2<f32>,
    /// Ray from the camera through the pointer.
    pub ray: Ray,
    /// Sticker under the pointer, if any.
    pub hit: Option<StickerHit>,
}

/// Pointer motion event.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerMove {
    /// Screen position of the pointer, in pixels.
    pub screen_pos: Point2<f32>,
    /// Ray from the camera through the pointer.
    pub ray: Ray,
}

#[derive(Debug, Copy, Clone, PartialEq)]
struct DragState {
    sticker: StickerLocation,
    start_screen_pos: Point2<f32>,
    plane: AxisPlane,
    start_point: Point3<f32>,
}

/// Converts a pointer drag that starts on a sticker into a layer turn.
///
/// The drag is tracked in 3D on the extended plane of the clicked face, so the
/// result does not depend on how the camera is rolled.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PointerTranslator {
    drag: Option<DragState>,
}
impl PointerTranslator {
    /// Constructs a translator with no drag in progress.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Starts a drag if the pointer is over a sticker. Returns whether a drag
    /// started.
    pub fn pointer_down(&mut self, event: &PointerDown) -> bool {
        self.drag = event.hit.and_then(|hit| {
            let facing = DirectedAxis::nearest(hit.normal)?;
            let sticker = StickerLocation {
                cubie: hit.cubie,
                facing,
            };
            if !sticker.is_on_surface() {
                log::debug!("ignoring pointer on {sticker}, which is not on the surface");
                return None;
            }
            let plane = face_plane(facing);
            let Some(start_point) = plane.intersect(&event.ray) else {
                log::debug!("pointer ray misses plane for {facing}");
                return None;
            };
            log::trace!("starting drag on {sticker}");
            Some(DragState {
                sticker,
                start_screen_pos: event.screen_pos,
                plane,
                start_point,
            })
        });
        self.drag.is_some()
    }

    /// Updates the drag. Returns a move once the pointer has traveled at least
    /// `threshold` pixels from where it was pressed and the drag direction is
    /// clear. Producing a move ends the drag.
    pub fn pointer_move(&mut self, event: &PointerMove, threshold: f32) -> Option<Move> {
        let drag = self.drag?;
        if (event.screen_pos - drag.start_screen_pos).magnitude() < threshold {
            return None;
        }
        let current_point = drag.plane.intersect(&event.ray)?;
        let mv = drag_to_move(drag.sticker, current_point - drag.start_point)?;
        log::debug!("drag on {} -> {mv}", drag.sticker);
        self.drag = None;
        Some(mv)
    }

    /// Ends the drag.
    pub fn pointer_up(&mut self) {
        self.drag = None;
    }
}

/// Returns the move for dragging `sticker` by `displacement`, measured on the
/// plane of the sticker's face.
///
/// The drag direction is whichever in-plane axis the displacement is largest
/// along. Returns `None` if the displacement is zero.
pub fn drag_to_move(sticker: StickerLocation, displacement: Vector3<f32>) -> Option<Move> {
    let clicked = sticker.facing;
    let [a, b] = clicked.axis.perpendiculars();
    let magnitude = |axis: Axis| FloatOrd(displacement[axis.index()].abs());
    let drag_axis = if magnitude(b) > magnitude(a) { b } else { a };
    let drag_sign = Sign::from_f32(displacement[drag_axis.index()])?;
    let rotation_axis = clicked.axis.third(drag_axis)?;

    let direction = chirality(rotation_axis, clicked.axis) * clicked.sign * drag_sign;
    let layer = sticker.cubie[rotation_axis];
    Some(Move::new(rotation_axis, LayerSet::single(layer), direction))
}

/// Sign relating a drag along one axis on the face of another axis to the
/// direction of rotation about the remaining axis.
fn chirality(rotation_axis: Axis, clicked_axis: Axis) -> Sign {
    match (rotation_axis, clicked_axis) {
        (Axis::Z, Axis::X) | (Axis::X, Axis::Y) | (Axis::Y, Axis::Z) => Sign::Pos,
        (Axis::Z, Axis::Y) | (Axis::X, Axis::Z) | (Axis::Y, Axis::X) => Sign::Neg,
        // Rotation axis is never the clicked axis.
        _ => Sign::Pos,
    }
}
