pub mod blend_shapes;
pub mod definition;
pub mod keyframes;

pub use definition::{AnimatedProperty, AnimationDefinition};
pub use keyframes::Keyframes;
