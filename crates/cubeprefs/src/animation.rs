use serde::{Deserialize, Serialize};

/// Preferences for turn animations.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct AnimationPreferences {
    /// Angular speed of a turn, in radians per second.
    pub turn_speed: f32,
    /// Whether to speed up turns while many moves are queued.
    pub dynamic_turn_speed: bool,
    /// Maximum speed multiplier when `dynamic_turn_speed` is enabled.
    pub max_speedup: f32,
}
impl AnimationPreferences {
    /// Returns the speed multiplier to use when at most `queue_max` moves have
    /// been waiting since the queue was last empty.
    pub fn speedup(&self, queue_max: usize) -> f32 {
        if !self.dynamic_turn_speed || queue_max <= 1 {
            return 1.0;
        }
        // Move exponentially faster if there are/were more moves in the queue.
        let speed_mod = ((queue_max - 1) as f32).exp();
        speed_mod.min(self.max_speedup.max(1.0))
    }
}
