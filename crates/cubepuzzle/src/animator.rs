//! Turn animation and snapping back onto the lattice.

use cubemath::debug_panic;
use cubemath::prelude::*;

use crate::{CubieId, Move, MoveStore, StickerId, StickerLocation, Topology, TurnProgress};

/// Continuous transform of a piece.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PieceTransform {
    /// Center of the piece in world space.
    pub position: Vector3<f32>,
    /// Rotation accumulated during the turn in progress. This is the identity
    /// when the piece is at rest.
    pub rotation: Matrix3<f32>,
}
impl PieceTransform {
    fn at_rest(position: Vector3<f32>) -> Self {
        Self {
            position,
            rotation: Matrix3::identity(),
        }
    }

    fn rotate(&mut self, rot: Matrix3<f32>) {
        self.position = rot * self.position;
        self.rotation = rot * self.rotation;
    }
}

/// State of a cubie.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CubieState {
    /// Discrete position as of the last completed turn.
    pub position: LatticeVector,
    /// Continuous transform.
    pub transform: PieceTransform,
}
impl CubieState {
    fn at_rest(position: LatticeVector) -> Self {
        Self {
            position,
            transform: PieceTransform::at_rest(position.to_vec3()),
        }
    }
}

/// State of a sticker.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StickerState {
    /// Discrete location as of the last completed turn.
    pub location: StickerLocation,
    /// Continuous transform. `position` is the center of the sticker.
    pub transform: PieceTransform,
}
impl StickerState {
    fn at_rest(location: StickerLocation) -> Self {
        Self {
            location,
            transform: PieceTransform::at_rest(location.center()),
        }
    }

    /// Returns the current outward normal of the sticker.
    pub fn facing(&self) -> Vector3<f32> {
        self.transform.rotation * self.location.facing.vector()
    }
}

/// Pieces that changed during one frame.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FrameUpdate {
    /// Cubies whose transforms changed.
    pub cubies: Vec<CubieId>,
    /// Stickers whose transforms changed.
    pub stickers: Vec<StickerId>,
    /// Move that started on this frame.
    pub started: Option<Move>,
    /// Move that completed on this frame.
    pub completed: Option<Move>,
}
impl FrameUpdate {
    /// Returns whether nothing changed.
    pub fn is_empty(&self) -> bool {
        self.cubies.is_empty()
            && self.stickers.is_empty()
            && self.started.is_none()
            && self.completed.is_none()
    }
}

/// Advances turn records and moves pieces.
///
/// Each piece is either idle (no record in the [`MoveStore`]) or turning. A
/// turning piece rotates a little every frame; once its accumulated angle
/// reaches the target, its discrete position is recomputed from its position
/// before the turn and its record is cleared.
#[derive(Debug, Clone)]
pub struct TurnAnimator {
    cubies: Vec<CubieState>,
    stickers: Vec<StickerState>,
}
impl Default for TurnAnimator {
    fn default() -> Self {
        Self::new()
    }
}
impl TurnAnimator {
    /// Constructs an animator with every piece in its solved position.
    pub fn new() -> Self {
        let topology = Topology::get();
        Self {
            cubies: topology
                .cubies()
                .iter()
                .map(|c| CubieState::at_rest(c.home))
                .collect(),
            stickers: topology
                .stickers()
                .iter()
                .map(|s| StickerState::at_rest(s.home))
                .collect(),
        }
    }

    /// Returns the state of a cubie.
    pub fn cubie(&self, id: CubieId) -> &CubieState {
        &self.cubies[id.index()]
    }
    /// Returns the state of a sticker.
    pub fn sticker(&self, id: StickerId) -> &StickerState {
        &self.stickers[id.index()]
    }
    /// Returns the states of all cubies, indexed by [`CubieId`].
    pub fn cubies(&self) -> &[CubieState] {
        &self.cubies
    }
    /// Returns the states of all stickers, indexed by [`StickerId`].
    pub fn stickers(&self) -> &[StickerState] {
        &self.stickers
    }

    /// Returns the cubie currently at `position`.
    pub fn cubie_at(&self, position: LatticeVector) -> Option<CubieId> {
        let i = self.cubies.iter().position(|c| c.position == position)?;
        Some(CubieId(i as u8))
    }
    /// Returns the sticker currently at `location`.
    pub fn sticker_at(&self, location: StickerLocation) -> Option<StickerId> {
        let i = self.stickers.iter().position(|s| s.location == location)?;
        Some(StickerId(i as u8))
    }

    /// Starts the next move if idle, then rotates every turning piece by
    /// `delta_angle` radians (unsigned) toward its target.
    ///
    /// Pieces that reach their target are snapped onto the lattice. Their
    /// records are cleared at the end of the tick.
    pub fn tick(&mut self, store: &mut MoveStore, delta_angle: f32) -> FrameUpdate {
        let mut update = FrameUpdate {
            started: store.dispatch_if_idle(),
            ..Default::default()
        };
        if !store.is_turning() {
            return update;
        }

        let mut finished_cubies = vec![];
        for (i, cubie) in self.cubies.iter_mut().enumerate() {
            let Some(turn) = store.cubie_turn_mut(cubie.position) else {
                continue;
            };
            let rot = advance(turn, delta_angle);
            cubie.transform.rotate(rot);
            update.cubies.push(CubieId(i as u8));
            if turn.is_complete() {
                finished_cubies.push(cubie.position);
                update.completed = Some(turn.mv);
                snap_cubie(cubie, turn.mv);
            }
        }

        let mut finished_stickers = vec![];
        for (i, sticker) in self.stickers.iter_mut().enumerate() {
            let Some(turn) = store.sticker_turn_mut(sticker.location) else {
                continue;
            };
            let rot = advance(turn, delta_angle);
            sticker.transform.rotate(rot);
            update.stickers.push(StickerId(i as u8));
            if turn.is_complete() {
                finished_stickers.push(sticker.location);
                update.completed = Some(turn.mv);
                snap_sticker(sticker, turn.mv);
            }
        }

        // Clear records only after every piece has been visited.
        for position in finished_cubies {
            store.clear_cubie(position);
        }
        for location in finished_stickers {
            store.clear_sticker(location);
        }
        if let Some(mv) = update.completed {
            log::trace!("completed {mv}");
        }

        update
    }

    /// Completes the move in flight immediately, without animating.
    pub fn finish_current(&mut self, store: &mut MoveStore) -> FrameUpdate {
        let mut update = FrameUpdate::default();
        for (i, cubie) in self.cubies.iter_mut().enumerate() {
            if let Some(turn) = store.clear_cubie(cubie.position) {
                snap_cubie(cubie, turn.mv);
                update.cubies.push(CubieId(i as u8));
                update.completed = Some(turn.mv);
            }
        }
        for (i, sticker) in self.stickers.iter_mut().enumerate() {
            if let Some(turn) = store.clear_sticker(sticker.location) {
                snap_sticker(sticker, turn.mv);
                update.stickers.push(StickerId(i as u8));
                update.completed = Some(turn.mv);
            }
        }
        update
    }
}

/// Adds one frame's rotation to a turn record and returns the incremental
/// rotation.
fn advance(turn: &mut TurnProgress, delta_angle: f32) -> Matrix3<f32> {
    let delta = turn.mv.direction.float() * delta_angle.abs();
    turn.progress += delta;
    turn.mv.partial_rotation(delta)
}

fn snap_cubie(cubie: &mut CubieState, mv: Move) {
    let new_position = mv.apply_exact(cubie.position);
    if !new_position.is_cubie_position() {
        debug_panic!("{mv} moved cubie at {} off the lattice to {new_position}", cubie.position);
    }
    *cubie = CubieState::at_rest(new_position);
}

fn snap_sticker(sticker: &mut StickerState, mv: Move) {
    let new_location = mv.apply_exact_to_sticker(sticker.location);
    if !new_location.is_on_surface() {
        debug_panic!("{mv} moved sticker at {} off the surface to {new_location}", sticker.location);
    }
    *sticker = StickerState::at_rest(new_location);
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::LayerSet;

    fn r() -> Move {
        Move::new(Axis::X, LayerSet::single(1), Sign::Neg)
    }

    #[test]
    fn test_turn_progresses_then_snaps() {
        let mut animator = TurnAnimator::new();
        let mut store = MoveStore::new();
        store.enqueue(r());

        let corner = animator.cubie_at(LatticeVector::new(1, 1, 1)).unwrap();

        let update = animator.tick(&mut store, 0.5);
        assert_eq!(update.started, Some(r()));
        assert_eq!(update.completed, None);
        assert_eq!(update.cubies.len(), 9);
        assert_eq!(update.stickers.len(), 21);
        assert_eq!(store.cubie_turn(LatticeVector::new(1, 1, 1)).unwrap().progress, -0.5);

        // Mid-turn: discrete position unchanged, continuous position rotated.
        let state = animator.cubie(corner);
        assert_eq!(state.position, LatticeVector::new(1, 1, 1));
        assert!((state.transform.position.magnitude() - 3.0_f32.sqrt()).abs() < 1e-5);
        assert!(state.transform.position.z < 1.0);

        animator.tick(&mut store, 0.5);
        animator.tick(&mut store, 0.5);
        let update = animator.tick(&mut store, 0.5);
        assert_eq!(update.completed, Some(r()));
        assert!(!store.is_turning());

        let state = animator.cubie(corner);
        assert_eq!(state.position, LatticeVector::new(1, 1, -1));
        assert_eq!(state.transform.position, Vector3::new(1.0, 1.0, -1.0));
        assert_eq!(state.transform.rotation, Matrix3::identity());
    }

    #[test]
    fn test_overshoot_snaps_exactly() {
        let mut animator = TurnAnimator::new();
        let mut store = MoveStore::new();
        store.enqueue(r().rev());
        let update = animator.tick(&mut store, FRAC_PI_2 * 1.7);
        assert_eq!(update.completed, Some(r().rev()));
        for cubie in animator.cubies() {
            assert!(cubie.position.is_cubie_position());
            assert_eq!(cubie.transform.position, cubie.position.to_vec3());
        }
    }

    #[test]
    fn test_sticker_follows_cubie() {
        let mut animator = TurnAnimator::new();
        let mut store = MoveStore::new();
        store.enqueue(r());
        let before = StickerLocation {
            cubie: LatticeVector::new(1, 0, 1),
            facing: DirectedAxis::POS_Z,
        };
        let id = animator.sticker_at(before).unwrap();

        animator.tick(&mut store, 0.3);
        let facing = animator.sticker(id).facing();
        assert!(facing.z < 1.0 && facing.y > 0.0);

        animator.finish_current(&mut store);
        assert!(!store.is_turning());
        let after = animator.sticker(id);
        assert_eq!(after.location.facing, DirectedAxis::POS_Y);
        assert_eq!(after.location.cubie, LatticeVector::new(1, 1, 0));
        assert_eq!(after.facing(), Vector3::unit_y());
    }

    #[test]
    fn test_idle_tick_does_nothing() {
        let mut animator = TurnAnimator::new();
        let mut store = MoveStore::new();
        assert!(animator.tick(&mut store, 1.0).is_empty());
    }
}
