#[derive(Debug, Clone, PartialEq)]
pub struct BucketThresholds {
    pub elite: f64,
    pub very_high: f64,
    pub high: f64,
    pub mid: f64,
}

impl BucketThresholds {
    pub fn default_v1() -> Self {
        Self {
            elite: 0.01,
            very_high: 0.10,
            high: 0.25,
            mid: 0.75,
        }
    }
}

impl Default for BucketThresholds {
    fn default() -> Self {
        Self::default_v1()
    }
}
