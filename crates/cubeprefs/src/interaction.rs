use serde::{Deserialize, Serialize};

/// Preferences for keyboard and pointer interaction.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct InteractionPreferences {
    /// Distance in screen pixels that the pointer must travel from where it
    /// was pressed before a drag turns a layer.
    pub drag_threshold: f32,
}
