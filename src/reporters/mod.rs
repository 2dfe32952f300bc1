pub mod text;

use crate::core::buffers::BenchBuffers;
use crate::core::config::BenchConfig;
use crate::core::error::Result;
use crate::core::runner::RunSummary;

/// Reporter trait for benchmark output
pub trait Reporter {
    /// Report the start of a run
    fn report_start(&mut self, config: &BenchConfig, footprint: u64);

    /// Dump the vectors and the last index buffer
    fn report_debug_dump(&mut self, buffers: &BenchBuffers) -> Result<()>;

    /// Report the accumulated sums
    fn report_summary(&mut self, summary: &RunSummary) -> Result<()>;
}
