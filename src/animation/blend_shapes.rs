//! Blend shape naming shared between import and playback binding.

/// Base uniform name of the morph-target weight array on a scene node.
pub const WEIGHTS_UNIFORM: &str = "uWeight";

/// Synthesizes the property path addressing one morph-target weight slot,
/// e.g. `uWeight[2]` for morph-target index 2.
#[must_use]
pub fn weight_property_path(morph_target_index: u32) -> String {
    format!("{WEIGHTS_UNIFORM}[{morph_target_index}]")
}
