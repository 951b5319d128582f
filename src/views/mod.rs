pub mod epa;
pub mod opr;
pub mod ranks;

#[cfg(test)]
#[path = "../../tests/src_inline/views/fake_api.rs"]
pub(crate) mod fake_api;
