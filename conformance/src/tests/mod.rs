//! Mapping fixtures shared by the validators.

pub mod fixtures;
