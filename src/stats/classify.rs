use crate::model::bucket::{PercentileBucket, StyleDescriptor};
use crate::model::thresholds::BucketThresholds;

pub fn classify(percentile: f64) -> PercentileBucket {
    classify_with(percentile, &BucketThresholds::default_v1())
}

pub fn classify_with(percentile: f64, thresholds: &BucketThresholds) -> PercentileBucket {
    if percentile.is_nan() {
        return PercentileBucket::Low;
    }
    if percentile <= thresholds.elite {
        PercentileBucket::Elite
    } else if percentile <= thresholds.very_high {
        PercentileBucket::VeryHigh
    } else if percentile <= thresholds.high {
        PercentileBucket::High
    } else if percentile <= thresholds.mid {
        PercentileBucket::Mid
    } else {
        PercentileBucket::Low
    }
}

pub fn style(bucket: PercentileBucket) -> StyleDescriptor {
    bucket.style()
}

pub fn percentile_of(rank: u32, total: usize) -> Option<f64> {
    if total == 0 {
        return None;
    }
    Some(f64::from(rank) / total as f64)
}

#[cfg(test)]
#[path = "../../tests/src_inline/stats/classify.rs"]
mod tests;
