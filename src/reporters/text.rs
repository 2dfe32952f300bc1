use std::fmt::Display;
use std::io::{self, Write};
use bytesize::ByteSize;
use log::{debug, info};

use crate::core::buffers::BenchBuffers;
use crate::core::config::BenchConfig;
use crate::core::error::Result;
use crate::core::runner::RunSummary;
use crate::reporters::Reporter;

/// Plain-text reporter. Benchmark output goes to the writer, timings to the log.
pub struct TextReporter<W: Write> {
    out: W,
}

impl TextReporter<io::Stdout> {
    /// Report to standard output
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TextReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write `name = [a b c ]`, every element followed by a space
    fn write_array<T: Display>(&mut self, name: &str, values: &[T]) -> io::Result<()> {
        write!(self.out, "{} = [", name)?;
        for value in values {
            write!(self.out, "{} ", value)?;
        }
        writeln!(self.out, "]")
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn report_start(&mut self, config: &BenchConfig, footprint: u64) {
        info!(
            "Summing {} random reads over {} elements, {} loop(s)",
            config.index_size, config.vector_size, config.loops
        );
        debug!("Buffers hold {}", ByteSize(footprint));
    }

    fn report_debug_dump(&mut self, buffers: &BenchBuffers) -> Result<()> {
        self.write_array("vec_8", buffers.narrow())?;
        self.write_array("vec_32", buffers.wide())?;
        self.write_array("indices", buffers.indices())?;
        Ok(())
    }

    fn report_summary(&mut self, summary: &RunSummary) -> Result<()> {
        writeln!(self.out, "sum8 = {}", summary.sum8)?;
        writeln!(self.out, "sum32 = {}", summary.sum32)?;
        self.out.flush()?;

        info!(
            "Started {}, {} loop(s), {} reads per width",
            summary.started_at.format("%Y-%m-%d %H:%M:%S UTC"),
            summary.loops,
            summary.reads_per_width
        );
        info!(
            "narrow: {} ({:.2} ns/read), wide: {} ({:.2} ns/read), shuffle: {}",
            humantime::format_duration(summary.narrow_time),
            summary.narrow_ns_per_read(),
            humantime::format_duration(summary.wide_time),
            summary.wide_ns_per_read(),
            humantime::format_duration(summary.shuffle_time)
        );

        Ok(())
    }
}
