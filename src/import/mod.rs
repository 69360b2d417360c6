pub mod facial;
pub mod raw;

pub use facial::{build_definition, facial_animation_from_str, load_facial_animation};
pub use raw::{RawBlendShape, RawFacialAnimation};
