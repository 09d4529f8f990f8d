//! Integration tests across module boundaries.

pub mod editing;
pub mod generation;
pub mod properties;
pub mod session;
pub mod storage;
pub mod validation;
