/// Ordered keyframe storage for one animated property.
///
/// Progress is time normalized to `[0, 1]` over the owning animation's
/// duration. Pairs are kept in insertion (frame) order; the importer inserts
/// them with non-decreasing progress, but out-of-order values are stored
/// verbatim rather than re-sorted.
#[derive(Debug, Clone, Default)]
pub struct Keyframes {
    progress: Vec<f32>,
    values: Vec<f32>,
}

impl Keyframes {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            progress: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    /// Appends one `(progress, value)` pair after all existing pairs.
    pub fn add(&mut self, progress: f32, value: f32) {
        self.progress.push(progress);
        self.values.push(value);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.progress.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.progress.is_empty()
    }

    /// The pair at `index`, in insertion order.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<(f32, f32)> {
        Some((*self.progress.get(index)?, self.values[index]))
    }

    /// Progress of the last inserted pair.
    #[must_use]
    pub fn last_progress(&self) -> Option<f32> {
        self.progress.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.progress
            .iter()
            .copied()
            .zip(self.values.iter().copied())
    }

    /// Samples the track at `progress` with linear interpolation, clamping
    /// below the first key and beyond the last.
    #[must_use]
    pub fn sample(&self, progress: f32) -> f32 {
        assert!(!self.is_empty(), "track is empty");

        // partition_point finds the first index where p > progress, i.e. next_index
        let next_idx = self.progress.partition_point(|&p| p <= progress);
        if next_idx == 0 {
            return self.values[0];
        }

        let index = next_idx - 1;
        if index >= self.len() - 1 {
            return self.values[self.len() - 1];
        }

        let p0 = self.progress[index];
        let p1 = self.progress[index + 1];
        let dp = p1 - p0;

        // Prevent division by zero
        let t = if dp > 1e-6 { (progress - p0) / dp } else { 0.0 };
        let t = t.clamp(0.0, 1.0);

        let v0 = self.values[index];
        let v1 = self.values[index + 1];
        v0 + (v1 - v0) * t
    }
}
