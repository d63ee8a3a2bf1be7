use serde::{Deserialize, Serialize};

/// Curve used to sweep saturation and value across the rings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientPolicy {
    #[default]
    Linear,
    /// Smoothstep, flatter near white, full colour and black.
    Smooth,
}

impl GradientPolicy {
    #[must_use]
    pub fn shape(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Smooth => t * t * (3.0 - 2.0 * t),
        }
    }
}

/// Precomputed `(saturation, value)` pairs, two per ring.
///
/// The first half rises from white to full colour, the second half falls
/// from full colour towards black.
#[derive(Debug, Clone, PartialEq)]
pub struct RingGradient {
    entries: Vec<(f32, f32)>,
}

impl RingGradient {
    #[must_use]
    pub fn new(ring_count: usize, policy: GradientPolicy) -> Self {
        let n = ring_count as f32;
        // the falling half spans 1 down to 0 inclusive, a single ring stays at 1
        let last = ring_count.saturating_sub(1).max(1) as f32;
        let rising = (0..ring_count).map(|x| (policy.shape(x as f32 / n), 1.0));
        let falling = (0..ring_count).map(|x| {
            let value = if ring_count > 1 {
                (ring_count - 1 - x) as f32 / last
            } else {
                1.0
            };
            (1.0, policy.shape(value))
        });
        Self {
            entries: rising.chain(falling).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry `index` modulo the table length.
    ///
    /// # Panics
    /// If the table is empty, which a validated wheel never builds.
    #[must_use]
    pub fn entry(&self, index: usize) -> (f32, f32) {
        self.entries[index % self.entries.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_table_for_ten_rings() {
        let table = RingGradient::new(10, GradientPolicy::Linear);
        assert_eq!(table.len(), 20);
        assert_eq!(table.entry(0), (0.0, 1.0));
        assert_eq!(table.entry(5), (0.5, 1.0));
        assert_eq!(table.entry(10), (1.0, 1.0));
        assert_eq!(table.entry(19), (1.0, 0.0));
        assert_eq!(table.entry(20), table.entry(0));
    }

    #[test]
    fn falling_half_reaches_black() {
        for rings in [2, 3, 10] {
            let table = RingGradient::new(rings, GradientPolicy::Linear);
            assert_eq!(table.entry(rings), (1.0, 1.0));
            assert_eq!(table.entry(2 * rings - 1), (1.0, 0.0));
            for i in rings..2 * rings - 1 {
                assert!(table.entry(i + 1).1 < table.entry(i).1);
            }
        }
        let smooth = RingGradient::new(4, GradientPolicy::Smooth);
        assert_eq!(smooth.entry(7), (1.0, 0.0));
    }

    #[test]
    fn single_ring_table() {
        let table = RingGradient::new(1, GradientPolicy::Linear);
        assert_eq!(table.len(), 2);
        assert_eq!(table.entry(0), (0.0, 1.0));
        assert_eq!(table.entry(1), (1.0, 1.0));
    }

    #[test]
    fn smooth_keeps_endpoints() {
        let table = RingGradient::new(4, GradientPolicy::Smooth);
        assert_eq!(table.entry(0), (0.0, 1.0));
        assert_eq!(table.entry(4), (1.0, 1.0));
        assert_eq!(table.entry(2), (0.5, 1.0));
        assert!(table.entry(1).0 < 0.25);
    }

    #[test]
    fn policy_parses_from_lowercase() {
        let policy: GradientPolicy = serde_json::from_str("\"smooth\"").unwrap();
        assert_eq!(policy, GradientPolicy::Smooth);
    }
}
