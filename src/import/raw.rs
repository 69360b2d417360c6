//! Raw facial animation document model.
//!
//! Field bindings mirror the source JSON schema exactly, keyed by field
//! name and independent of field order in the document. These records are
//! transient: the flattening pass in [`crate::import::facial`] consumes
//! them within one import call. All strings are owned copies, so nothing
//! here borrows from the document buffer.

use serde::Deserialize;

/// One blend shape as authored: per-frame weight rows for its morph
/// targets, bound to a scene node.
#[derive(Debug, Clone, Deserialize)]
pub struct RawBlendShape {
    /// Weight rows, one per frame; each row holds one weight per morph
    /// target.
    #[serde(rename = "key")]
    pub keys: Vec<Vec<f32>>,
    /// Scene node the blend shape deforms.
    #[serde(rename = "name")]
    pub node_name: String,
    #[serde(rename = "morphtarget")]
    pub morph_target_count: u32,
    #[serde(rename = "blendShapeVersion")]
    pub version: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
    /// Morph-target names as authored. Property paths are synthesized
    /// positionally from the weights uniform; the authored names are
    /// carried for consumers that want them.
    #[serde(rename = "morphname")]
    pub morph_names: Vec<String>,
}

/// A whole facial animation document.
#[derive(Debug, Clone, Deserialize)]
pub struct RawFacialAnimation {
    pub name: String,
    #[serde(rename = "blendShapes")]
    pub blend_shapes: Vec<RawBlendShape>,
    pub version: String,
    /// Declared blend-shape count; tolerated when it disagrees with
    /// `blend_shapes.len()`.
    #[serde(rename = "shapesAmount")]
    pub shape_count: u32,
    /// Frame times in milliseconds; the last entry is the animation
    /// length.
    #[serde(rename = "time")]
    pub frame_times_ms: Vec<u32>,
    #[serde(rename = "frames")]
    pub frame_count: u32,
}
