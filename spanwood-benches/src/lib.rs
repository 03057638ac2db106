//! Benchmark support crate for spanwood.
//!
//! Provides seeded synthetic graphs and parameter types used by the
//! Criterion benchmarks for Prim's algorithm and the indexed heap.

pub mod error;
pub mod params;
pub mod source;
