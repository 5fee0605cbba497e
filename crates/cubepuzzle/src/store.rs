//! Move queue and per-piece turn records.

use std::collections::VecDeque;

use cubemath::prelude::*;
use indexmap::IndexMap;

use crate::{Move, StickerLocation, Topology};

/// Progress of a piece through the move it is executing.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TurnProgress {
    /// Move being executed.
    pub mv: Move,
    /// Angle rotated so far, in radians. This has the same sign as the move's
    /// target angle.
    pub progress: f32,
}
impl TurnProgress {
    /// Constructs a record for a move that has just started.
    pub fn new(mv: Move) -> Self {
        Self { mv, progress: 0.0 }
    }

    /// Returns whether the piece has rotated at least as far as the target
    /// angle.
    pub fn is_complete(&self) -> bool {
        self.progress.abs() >= self.mv.target_angle().abs()
    }
}

/// Pending moves and the turn records of pieces that are currently moving.
///
/// Records are keyed by the *current* discrete position of each piece. A
/// piece's key changes whenever a turn completes, so keys must not be cached
/// across a turn.
///
/// At most one move is in flight at a time: the next move is only dispatched
/// once every record has been cleared.
#[derive(Debug, Default, Clone)]
pub struct MoveStore {
    queue: VecDeque<Move>,
    /// Maximum number of moves in the queue since it was last empty.
    queue_max: usize,

    cubie_turns: IndexMap<LatticeVector, TurnProgress>,
    sticker_turns: IndexMap<StickerLocation, TurnProgress>,
}
impl MoveStore {
    /// Constructs an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a move to the end of the queue.
    pub fn enqueue(&mut self, mv: Move) {
        self.queue.push_back(mv);
        self.queue_max = std::cmp::max(self.queue_max, self.queue.len());
    }
    /// Removes and returns the move at the front of the queue.
    pub fn dequeue(&mut self) -> Option<Move> {
        self.queue.pop_front()
    }
    /// Drops all moves that have not started. The move in flight, if any, is
    /// unaffected.
    pub fn clear_pending(&mut self) {
        if !self.queue.is_empty() {
            log::trace!("dropping {} pending moves", self.queue.len());
        }
        self.queue.clear();
    }
    /// Returns the moves that have not started, in the order they will run.
    pub fn pending(&self) -> impl Iterator<Item = Move> + '_ {
        self.queue.iter().copied()
    }
    /// Returns the number of moves that have not started.
    pub fn pending_len(&self) -> usize {
        self.queue.len()
    }
    /// Returns the maximum number of moves that have been waiting at once since
    /// the store was last idle with an empty queue.
    pub fn queue_max(&self) -> usize {
        self.queue_max
    }

    /// Returns whether any piece has a turn record.
    pub fn is_turning(&self) -> bool {
        !self.cubie_turns.is_empty() || !self.sticker_turns.is_empty()
    }
    /// Returns whether no move is in flight and none is queued.
    pub fn is_idle(&self) -> bool {
        !self.is_turning() && self.queue.is_empty()
    }

    /// Starts `mv` by giving a fresh turn record to every cubie and sticker
    /// it targets.
    pub fn execute(
        &mut self,
        mv: Move,
        cubies: impl IntoIterator<Item = LatticeVector>,
        stickers: impl IntoIterator<Item = StickerLocation>,
    ) {
        for cubie in cubies.into_iter().filter(|&p| mv.targets(p)) {
            self.cubie_turns.insert(cubie, TurnProgress::new(mv));
        }
        for sticker in stickers.into_iter().filter(|&s| mv.targets_sticker(s)) {
            self.sticker_turns.insert(sticker, TurnProgress::new(mv));
        }
    }

    /// Starts the next queued move if nothing is turning. Returns the move
    /// that started, if any.
    ///
    /// The move is broadcast to every lattice point and sticker location. That
    /// set of locations is the same in every rest state, so it does not depend
    /// on where individual pieces currently are.
    pub fn dispatch_if_idle(&mut self) -> Option<Move> {
        if self.is_turning() {
            return None;
        }
        let Some(mv) = self.dequeue() else {
            self.queue_max = 0;
            return None;
        };
        let topology = Topology::get();
        self.execute(
            mv,
            LatticeVector::cubie_positions(),
            topology.sticker_locations(),
        );
        log::trace!(
            "dispatched {mv} to {} cubies and {} stickers",
            self.cubie_turns.len(),
            self.sticker_turns.len(),
        );
        if !self.is_turning() {
            log::warn!("move {mv} does not affect any pieces");
        }
        Some(mv)
    }

    /// Returns the turn record for the cubie at `position`.
    pub fn cubie_turn(&self, position: LatticeVector) -> Option<&TurnProgress> {
        self.cubie_turns.get(&position)
    }
    /// Returns the turn record for the cubie at `position`.
    pub fn cubie_turn_mut(&mut self, position: LatticeVector) -> Option<&mut TurnProgress> {
        self.cubie_turns.get_mut(&position)
    }
    /// Returns the turn record for the sticker at `location`.
    pub fn sticker_turn(&self, location: StickerLocation) -> Option<&TurnProgress> {
        self.sticker_turns.get(&location)
    }
    /// Returns the turn record for the sticker at `location`.
    pub fn sticker_turn_mut(&mut self, location: StickerLocation) -> Option<&mut TurnProgress> {
        self.sticker_turns.get_mut(&location)
    }
    /// Returns every cubie turn record.
    pub fn cubie_turns(&self) -> impl Iterator<Item = (LatticeVector, &TurnProgress)> {
        self.cubie_turns.iter().map(|(&k, v)| (k, v))
    }
    /// Returns every sticker turn record.
    pub fn sticker_turns(&self) -> impl Iterator<Item = (StickerLocation, &TurnProgress)> {
        self.sticker_turns.iter().map(|(&k, v)| (k, v))
    }
    /// Returns the move in flight, if any.
    pub fn current_move(&self) -> Option<Move> {
        let first = self.cubie_turns.values().chain(self.sticker_turns.values()).next();
        first.map(|t| t.mv)
    }

    /// Clears the turn record for the cubie at `position`.
    pub fn clear_cubie(&mut self, position: LatticeVector) -> Option<TurnProgress> {
        self.cubie_turns.swap_remove(&position)
    }
    /// Clears the turn record for the sticker at `location`.
    pub fn clear_sticker(&mut self, location: StickerLocation) -> Option<TurnProgress> {
        self.sticker_turns.swap_remove(&location)
    }
    /// Clears every turn record. Pending moves are kept.
    pub fn clear_all(&mut self) {
        self.cubie_turns.clear();
        self.sticker_turns.clear();
    }
}
