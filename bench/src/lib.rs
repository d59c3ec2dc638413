//! Benchmark utilities for Rusty Event.
//!
//! This crate provides benchmarking infrastructure for event channels,
//! including:
//!
//! - **Microbenchmarks**: Individual channel operations (subscribe, dispatch, unsubscribe)
//! - **Scenario benchmarks**: Realistic workloads (subscriber churn, re-entrant relays)
//! - **Memory tracking**: Heap allocation profiling via dhat
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench -p rusty_bench
//!
//! # Run specific benchmark group
//! cargo bench -p rusty_bench -- dispatch
//!
//! # Run with memory profiling (slower)
//! cargo bench -p rusty_bench --features memory_profiling
//! ```
//!
//! # Benchmark Results
//!
//! Results are written to `target/criterion/` with HTML reports for visualization.
//! Memory profiling results are written to `dhat-heap.json` for viewing with
//! DHAT's viewer.

pub mod memory;
pub mod payloads;
pub mod scenarios;
