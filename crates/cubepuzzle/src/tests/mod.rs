use cubemath::prelude::*;
use web_time::Duration;

use crate::{CubeSimulation, FrameUpdate, StickerLocation, Topology};

mod properties;

const FRAME: Duration = Duration::from_millis(16);

fn run_to_rest(sim: &mut CubeSimulation) -> Vec<FrameUpdate> {
    let mut updates = vec![];
    while !sim.is_idle() {
        updates.push(sim.tick(FRAME));
        assert!(updates.len() < 100_000, "simulation did not come to rest");
    }
    updates
}

fn cubie_positions(sim: &CubeSimulation) -> Vec<LatticeVector> {
    Topology::get()
        .cubie_ids()
        .map(|id| sim.cubie_position(id))
        .collect()
}

fn sticker_locations(sim: &CubeSimulation) -> Vec<StickerLocation> {
    Topology::get()
        .sticker_ids()
        .map(|id| sim.sticker_location(id))
        .collect()
}
