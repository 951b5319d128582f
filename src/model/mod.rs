pub mod bucket;
pub mod ranks;
pub mod scores;
pub mod series;
pub mod team;
pub mod thresholds;

pub(crate) mod ordered;
