//! Algorithms applied to lab test data

pub mod diagnostic;
