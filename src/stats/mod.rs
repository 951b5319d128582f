pub mod classify;
pub mod latest;
pub mod rank;
