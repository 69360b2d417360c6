use crate::animation::keyframes::Keyframes;

/// One independently keyed morph-target weight channel of a facial
/// animation.
#[derive(Debug, Clone)]
pub struct AnimatedProperty {
    /// Scene node the property is bound to.
    pub node_name: String,
    /// Synthesized path addressing the weight slot, e.g. `uWeight[2]`.
    pub property_path: String,
    /// Total animation duration in seconds, shared across all properties.
    pub duration: f32,
    /// One `(progress, value)` pair per source frame.
    pub track: Keyframes,
}

/// A complete multi-track facial animation, ready for a playback engine.
#[derive(Debug, Clone)]
pub struct AnimationDefinition {
    pub name: String,
    /// Duration in seconds, strictly positive.
    pub duration: f32,
    /// Ordered by blend shape, then ascending morph-target index.
    pub properties: Vec<AnimatedProperty>,
}

impl AnimationDefinition {
    #[must_use]
    pub fn new(name: String, duration: f32, properties: Vec<AnimatedProperty>) -> Self {
        Self {
            name,
            duration,
            properties,
        }
    }

    /// Properties bound to the given scene node, in track order.
    pub fn properties_for_node<'a>(
        &'a self,
        node_name: &'a str,
    ) -> impl Iterator<Item = &'a AnimatedProperty> {
        self.properties
            .iter()
            .filter(move |property| property.node_name == node_name)
    }
}
