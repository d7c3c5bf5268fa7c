#![allow(dead_code)] // Each test binary uses a different subset of these helpers

pub mod builders;
pub mod strategies;

pub use builders::*;
pub use strategies::*;
