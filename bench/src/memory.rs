//! Heap usage of channel workloads, recorded with dhat.
//!
//! Profiling is off unless the `memory_profiling` feature is enabled, in which
//! case every benchmark binary that reports memory must install the dhat
//! allocator:
//!
//! ```rust,ignore
//! #[cfg(feature = "memory_profiling")]
//! #[global_allocator]
//! static ALLOC: dhat::Alloc = dhat::Alloc;
//! ```
//!
//! Run with `cargo bench -p rusty_bench --features memory_profiling`; the full
//! profile lands in `dhat-heap.json` (open it with DHAT's viewer at
//! <https://nnethercote.github.io/dh_view/dh_view.html>).

use std::fmt;

/// Heap traffic recorded while a session was running.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeapUsage {
    /// Bytes allocated, including memory freed again.
    pub bytes: u64,
    /// Number of allocations.
    pub blocks: u64,
    /// Largest live heap size reached.
    pub peak_bytes: u64,
}

impl HeapUsage {
    /// Allocations per operation. A dispatch costs one allocation for its
    /// snapshot, so a dispatch-only workload should report close to `1.0`.
    pub fn blocks_per(&self, operations: usize) -> f64 {
        ratio(self.blocks, operations)
    }

    /// Bytes allocated per item, e.g. per registered subscriber.
    pub fn bytes_per(&self, items: usize) -> f64 {
        ratio(self.bytes, items)
    }
}

fn ratio(total: u64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        total as f64 / count as f64
    }
}

impl fmt::Display for HeapUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} bytes in {} blocks, peak {} bytes",
            self.bytes, self.blocks, self.peak_bytes
        )
    }
}

/// A running dhat heap profile. Only one may exist at a time.
///
/// Without the `memory_profiling` feature this is a no-op and reports zeros.
pub struct HeapSession {
    #[cfg(feature = "memory_profiling")]
    _profiler: dhat::Profiler,
}

impl HeapSession {
    pub fn start() -> Self {
        Self {
            #[cfg(feature = "memory_profiling")]
            _profiler: dhat::Profiler::new_heap(),
        }
    }

    /// Heap usage since [`start()`](Self::start).
    #[cfg(feature = "memory_profiling")]
    pub fn usage(&self) -> HeapUsage {
        let stats = dhat::HeapStats::get();
        HeapUsage {
            bytes: stats.total_bytes,
            blocks: stats.total_blocks,
            peak_bytes: stats.max_bytes as u64,
        }
    }

    #[cfg(not(feature = "memory_profiling"))]
    pub fn usage(&self) -> HeapUsage {
        HeapUsage::default()
    }
}

/// Whether this build records heap usage.
pub const fn enabled() -> bool {
    cfg!(feature = "memory_profiling")
}

/// Runs `f` inside a fresh [`HeapSession`] and returns its result and usage.
pub fn measure<F, R>(f: F) -> (R, HeapUsage)
where
    F: FnOnce() -> R,
{
    let session = HeapSession::start();
    let result = f();
    let usage = session.usage();
    (result, usage)
}

#[cfg(all(test, feature = "memory_profiling"))]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;
