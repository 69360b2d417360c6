//! Facial animation import.
//!
//! Loads a blend-shape facial animation document and flattens the nested
//! per-blend-shape, per-frame weight arrays into one keyframe track per
//! morph target. The whole pipeline is synchronous and reentrant; every
//! failure aborts the import before a definition exists.

use std::fs;
use std::path::Path;

use crate::animation::blend_shapes::weight_property_path;
use crate::animation::definition::{AnimatedProperty, AnimationDefinition};
use crate::animation::keyframes::Keyframes;
use crate::errors::{Result, VisageError};
use crate::import::raw::RawFacialAnimation;

const MILLISECONDS_TO_SECONDS: f32 = 0.001;

/// Imports a facial animation from a JSON document on disk.
pub fn load_facial_animation(path: impl AsRef<Path>) -> Result<AnimationDefinition> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| VisageError::FileLoadFailed {
        path: path.to_path_buf(),
        source,
    })?;
    import_document(&text, &path.display().to_string())
}

/// Imports a facial animation from an in-memory JSON document.
pub fn facial_animation_from_str(text: &str) -> Result<AnimationDefinition> {
    import_document(text, "facial animation document")
}

fn import_document(text: &str, context: &str) -> Result<AnimationDefinition> {
    let root: serde_json::Value =
        serde_json::from_str(text).map_err(|source| VisageError::DocumentParseFailed {
            context: context.to_string(),
            source,
        })?;
    let raw: RawFacialAnimation =
        serde_json::from_value(root).map_err(VisageError::SchemaViolation)?;

    if raw.shape_count as usize != raw.blend_shapes.len() {
        log::warn!(
            "facial animation '{}' declares {} blend shapes but carries {}",
            raw.name,
            raw.shape_count,
            raw.blend_shapes.len()
        );
    }

    build_definition(raw)
}

/// Assembles the final [`AnimationDefinition`] from a parsed raw record.
///
/// Consumes the raw animation; the returned definition owns all of its data
/// and keeps no reference to the source document.
pub fn build_definition(raw: RawFacialAnimation) -> Result<AnimationDefinition> {
    let (duration, properties) = flatten(&raw)?;

    log::debug!(
        "imported facial animation '{}': {} blend shapes, {} frames, {} properties",
        raw.name,
        raw.blend_shapes.len(),
        raw.frame_count,
        properties.len()
    );

    Ok(AnimationDefinition::new(raw.name, duration, properties))
}

/// Flattens the nested blend-shape weight arrays into one animated property
/// per morph target, with frame times normalized to unit progress.
///
/// Properties come out ordered by blend shape, then ascending morph-target
/// index. Interior frame times are taken as-is, so a non-monotonic `time`
/// array yields a non-monotonic progress sequence; only the final entry has
/// to be the maximum, since it defines the duration.
fn flatten(raw: &RawFacialAnimation) -> Result<(f32, Vec<AnimatedProperty>)> {
    let frame_count = raw.frame_count as usize;
    if frame_count == 0 {
        return Err(VisageError::MalformedAnimation(
            "animation has zero frames".to_string(),
        ));
    }
    if raw.frame_times_ms.len() != frame_count {
        return Err(VisageError::MalformedAnimation(format!(
            "time array has {} entries, expected one per frame ({frame_count})",
            raw.frame_times_ms.len()
        )));
    }

    let last_frame_ms = raw.frame_times_ms[frame_count - 1];
    let duration = last_frame_ms as f32 * MILLISECONDS_TO_SECONDS;
    if duration <= 0.0 {
        return Err(VisageError::MalformedAnimation(format!(
            "duration must be positive, but the last frame time is {last_frame_ms} ms"
        )));
    }

    // Validate the nested structure before any of the indexing below.
    for shape in &raw.blend_shapes {
        if shape.keys.len() != frame_count {
            return Err(VisageError::MalformedAnimation(format!(
                "blend shape '{}' has {} weight rows, expected one per frame ({frame_count})",
                shape.node_name,
                shape.keys.len()
            )));
        }
        for (frame, row) in shape.keys.iter().enumerate() {
            if row.len() < shape.morph_target_count as usize {
                return Err(VisageError::MalformedAnimation(format!(
                    "blend shape '{}' frame {frame} has {} weights, fewer than its {} morph targets",
                    shape.node_name,
                    row.len(),
                    shape.morph_target_count
                )));
            }
        }
    }

    let property_count: usize = raw
        .blend_shapes
        .iter()
        .map(|shape| shape.morph_target_count as usize)
        .sum();

    // First pass: property naming and shared timing.
    let mut properties = Vec::with_capacity(property_count);
    for shape in &raw.blend_shapes {
        for morph_index in 0..shape.morph_target_count {
            properties.push(AnimatedProperty {
                node_name: shape.node_name.clone(),
                property_path: weight_property_path(morph_index),
                duration,
                track: Keyframes::with_capacity(frame_count),
            });
        }
    }

    // Second pass: sample every frame into the flattened tracks, keeping a
    // running offset so each blend shape writes its own property span.
    let mut offset = 0;
    for shape in &raw.blend_shapes {
        let target_count = shape.morph_target_count as usize;
        for frame in 0..frame_count {
            let progress = raw.frame_times_ms[frame] as f32 * MILLISECONDS_TO_SECONDS / duration;
            let row = &shape.keys[frame];
            for morph_index in 0..target_count {
                properties[offset + morph_index]
                    .track
                    .add(progress, row[morph_index]);
            }
        }
        offset += target_count;
    }

    Ok((duration, properties))
}
