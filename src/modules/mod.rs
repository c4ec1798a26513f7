//! Built-in analysis modules.

pub mod sum;

pub use sum::SumDemo;
