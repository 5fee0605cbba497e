use cubemath::prelude::*;
use cubeprefs::Preferences;
use web_time::Duration;

use crate::{
    CameraAxes, CameraTransform, CubieId, FrameUpdate, Move, MoveStore, PieceTransform,
    PointerDown, PointerMove, PointerTranslator, StickerId, StickerLocation, Topology,
    TurnAnimator, facelets, is_solved_facelets, key_to_move,
};

/// Interactive 3x3x3 puzzle: queued moves, turn animation, and input.
///
/// Input handlers enqueue moves; [`CubeSimulation::tick()`] advances the
/// animation and reports which pieces the host needs to redraw.
#[derive(Debug, Clone)]
pub struct CubeSimulation {
    store: MoveStore,
    animator: TurnAnimator,
    pointer: PointerTranslator,
    prefs: Preferences,
}
impl Default for CubeSimulation {
    fn default() -> Self {
        Self::new(Preferences::default())
    }
}
impl CubeSimulation {
    /// Constructs a solved puzzle.
    pub fn new(prefs: Preferences) -> Self {
        Self {
            store: MoveStore::new(),
            animator: TurnAnimator::new(),
            pointer: PointerTranslator::new(),
            prefs,
        }
    }

    /// Returns the preferences.
    pub fn prefs(&self) -> &Preferences {
        &self.prefs
    }
    /// Replaces the preferences.
    pub fn set_prefs(&mut self, prefs: Preferences) {
        self.prefs = prefs;
    }
    /// Returns the move queue and turn records.
    pub fn store(&self) -> &MoveStore {
        &self.store
    }
    /// Returns the animation state of every piece.
    pub fn animator(&self) -> &TurnAnimator {
        &self.animator
    }

    /// Adds a move to the queue.
    pub fn enqueue(&mut self, mv: Move) {
        self.store.enqueue(mv);
    }
    /// Adds several moves to the queue.
    pub fn enqueue_all(&mut self, moves: impl IntoIterator<Item = Move>) {
        for mv in moves {
            self.enqueue(mv);
        }
    }

    /// Handles a keypress. Returns the move that was queued, if any.
    pub fn handle_key(&mut self, key: &str, camera: &CameraTransform) -> Option<Move> {
        let mv = key_to_move(key, &CameraAxes::resolve(camera))?;
        self.enqueue(mv);
        Some(mv)
    }

    /// Handles a pointer press. Returns whether a drag started.
    pub fn pointer_down(&mut self, event: &PointerDown) -> bool {
        self.pointer.pointer_down(event)
    }
    /// Handles pointer motion. Returns the move that was queued, if any.
    pub fn pointer_move(&mut self, event: &PointerMove) -> Option<Move> {
        let threshold = self.prefs.interaction.drag_threshold;
        let mv = self.pointer.pointer_move(event, threshold)?;
        self.enqueue(mv);
        Some(mv)
    }
    /// Handles a pointer release.
    pub fn pointer_up(&mut self) {
        self.pointer.pointer_up();
    }

    /// Advances the animation by `delta` of wall-clock time.
    pub fn tick(&mut self, delta: Duration) -> FrameUpdate {
        let anim = &self.prefs.animation;
        let speed = anim.turn_speed * anim.speedup(self.store.queue_max());
        let delta_angle = delta.as_secs_f32() * speed;
        self.animator.tick(&mut self.store, delta_angle)
    }

    /// Returns whether no move is in flight and none is queued.
    pub fn is_idle(&self) -> bool {
        self.store.is_idle()
    }

    /// Instantly completes the move in flight and every queued move.
    pub fn catch_up(&mut self) -> FrameUpdate {
        let mut update = self.animator.finish_current(&mut self.store);
        while let Some(mv) = self.store.dispatch_if_idle() {
            let next = self.animator.finish_current(&mut self.store);
            if update.started.is_none() {
                update.started = Some(mv);
            }
            update.cubies.extend(next.cubies);
            update.stickers.extend(next.stickers);
            update.completed = next.completed;
        }
        update.cubies.sort_unstable();
        update.cubies.dedup();
        update.stickers.sort_unstable();
        update.stickers.dedup();
        update
    }

    /// Drops queued moves that have not started.
    pub fn clear_pending(&mut self) {
        self.store.clear_pending();
    }

    /// Returns the continuous transform of a cubie.
    pub fn cubie_transform(&self, id: CubieId) -> PieceTransform {
        self.animator.cubie(id).transform
    }
    /// Returns the continuous transform of a sticker.
    pub fn sticker_transform(&self, id: StickerId) -> PieceTransform {
        self.animator.sticker(id).transform
    }
    /// Returns the discrete position of a cubie as of the last completed turn.
    pub fn cubie_position(&self, id: CubieId) -> LatticeVector {
        self.animator.cubie(id).position
    }
    /// Returns the discrete location of a sticker as of the last completed
    /// turn.
    pub fn sticker_location(&self, id: StickerId) -> StickerLocation {
        self.animator.sticker(id).location
    }

    /// Returns the 54-character facelet string for the last rest state.
    pub fn facelets(&self) -> String {
        let topology = Topology::get();
        facelets(
            topology
                .sticker_ids()
                .map(|id| (self.sticker_location(id), topology.sticker(id).color)),
        )
    }
    /// Returns whether every face is a single color.
    pub fn is_solved(&self) -> bool {
        is_solved_facelets(&self.facelets())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{LayerSet, SOLVED_FACELETS, parse_moves};

    fn run_to_rest(sim: &mut CubeSimulation) -> Vec<FrameUpdate> {
        let mut updates = vec![];
        for _ in 0..10_000 {
            if sim.is_idle() {
                return updates;
            }
            updates.push(sim.tick(Duration::from_millis(16)));
        }
        panic!("simulation did not come to rest");
    }

    #[test]
    fn test_sexy_move_six_times() {
        let mut sim = CubeSimulation::default();
        let moves = parse_moves("R U R' U'", &CameraAxes::default()).unwrap();
        for _ in 0..6 {
            sim.enqueue_all(moves.iter().copied());
        }
        run_to_rest(&mut sim);
        assert_eq!(sim.facelets(), SOLVED_FACELETS);
    }

    #[test]
    fn test_single_move_changes_state() {
        let mut sim = CubeSimulation::default();
        let camera = CameraTransform::default();
        assert_eq!(
            sim.handle_key("R", &camera),
            Some(Move::new(Axis::X, LayerSet::single(1), Sign::Neg)),
        );
        assert_eq!(sim.handle_key("Q", &camera), None);
        let updates = run_to_rest(&mut sim);
        assert!(!sim.is_solved());

        let completed = updates.iter().filter_map(|u| u.completed).collect::<Vec<_>>();
        assert_eq!(completed.len(), 1);
        // Front face now has yellow on its right column.
        let facelets = sim.facelets();
        assert_eq!(&facelets[18..27], "RRYRRYRRY");

        sim.handle_key("r", &camera);
        run_to_rest(&mut sim);
        assert!(sim.is_solved());
    }

    #[test]
    fn test_catch_up() {
        let mut sim = CubeSimulation::default();
        sim.enqueue_all(parse_moves("F B2 x", &CameraAxes::default()).unwrap());
        sim.tick(Duration::from_millis(10));
        let update = sim.catch_up();
        assert!(sim.is_idle());
        assert_eq!(update.completed, Some(Move::new(Axis::X, LayerSet::ALL, Sign::Neg)));
        assert_eq!(update.cubies.len(), 26);
        for id in Topology::get().cubie_ids() {
            let t = sim.cubie_transform(id);
            assert_eq!(t.position, sim.cubie_position(id).to_vec3());
        }
    }

    #[test]
    fn test_clear_pending() {
        let mut sim = CubeSimulation::default();
        sim.enqueue_all(parse_moves("U U U", &CameraAxes::default()).unwrap());
        sim.tick(Duration::from_millis(10));
        sim.clear_pending();
        run_to_rest(&mut sim);
        let mut expected = CubeSimulation::default();
        expected.enqueue_all(parse_moves("U", &CameraAxes::default()).unwrap());
        expected.catch_up();
        assert_eq!(sim.facelets(), expected.facelets());
    }

    #[test]
    fn test_dynamic_speed() {
        let mut prefs = Preferences::default();
        prefs.animation.dynamic_turn_speed = true;
        let mut fast = CubeSimulation::new(prefs);
        let mut slow = CubeSimulation::default();
        let moves = parse_moves("R U R U R U", &CameraAxes::default()).unwrap();
        fast.enqueue_all(moves.iter().copied());
        slow.enqueue_all(moves.iter().copied());
        let fast_frames = run_to_rest(&mut fast).len();
        let slow_frames = run_to_rest(&mut slow).len();
        assert!(fast_frames < slow_frames);
        assert_eq!(fast.facelets(), slow.facelets());
    }
}
