use std::time::{Duration, Instant};
use bytesize::ByteSize;
use log::{debug, info, warn};
use sysinfo::System;

use crate::core::buffers::BenchBuffers;
use crate::core::config::BenchConfig;
use crate::core::error::Result;
use crate::core::indices::{IndexSource, RandomIndices};
use crate::core::sum::{sum_narrow, sum_wide};
use crate::reporters::Reporter;

/// Accumulated outcome of a benchmark run
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub started_at: chrono::DateTime<chrono::Utc>,
    pub loops: u32,
    /// Indexed reads performed on each vector.
    pub reads_per_width: u64,
    pub sum8: i32,
    pub sum32: i32,
    pub shuffle_time: Duration,
    pub narrow_time: Duration,
    pub wide_time: Duration,
}

impl RunSummary {
    fn new() -> Self {
        Self {
            started_at: chrono::Utc::now(),
            loops: 0,
            reads_per_width: 0,
            sum8: 0,
            sum32: 0,
            shuffle_time: Duration::ZERO,
            narrow_time: Duration::ZERO,
            wide_time: Duration::ZERO,
        }
    }

    /// Mean wall time of one narrow read, in nanoseconds
    pub fn narrow_ns_per_read(&self) -> f64 {
        per_read(self.narrow_time, self.reads_per_width)
    }

    /// Mean wall time of one wide read, in nanoseconds
    pub fn wide_ns_per_read(&self) -> f64 {
        per_read(self.wide_time, self.reads_per_width)
    }
}

fn per_read(elapsed: Duration, reads: u64) -> f64 {
    if reads == 0 {
        0.0
    } else {
        elapsed.as_nanos() as f64 / reads as f64
    }
}

/// Benchmark execution engine
pub struct BenchRunner<P: Reporter> {
    config: BenchConfig,
    buffers: BenchBuffers,
    source: Box<dyn IndexSource>,
    reporter: P,
}

impl<P: Reporter> BenchRunner<P> {
    /// Create a runner drawing random indices, seeded from the config when it carries a seed
    pub fn new(config: BenchConfig, reporter: P) -> Result<Self> {
        let source: Box<dyn IndexSource> = match config.seed {
            Some(seed) => {
                debug!("Seeding index generator with {}", seed);
                Box::new(RandomIndices::from_seed(seed))
            }
            None => Box::new(RandomIndices::from_entropy()),
        };
        Self::with_source(config, source, reporter)
    }

    /// Create a runner with an explicit index source
    pub fn with_source(config: BenchConfig, source: Box<dyn IndexSource>, reporter: P) -> Result<Self> {
        config.validate()?;
        check_available_memory(&config);

        let buffers = BenchBuffers::new(config.vector_size, config.index_size)?;
        debug!("Allocated {} for benchmark buffers", ByteSize(buffers.footprint()));

        Ok(Self {
            config,
            buffers,
            source,
            reporter,
        })
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    pub fn buffers(&self) -> &BenchBuffers {
        &self.buffers
    }

    pub fn reporter(&self) -> &P {
        &self.reporter
    }

    /// Run every loop, then report the debug dump (when enabled) and the sums
    pub fn execute(&mut self) -> Result<RunSummary> {
        self.reporter.report_start(&self.config, self.buffers.footprint());

        let mut summary = RunSummary::new();

        for _ in 0..self.config.loops {
            let shuffle_start = Instant::now();
            self.buffers.shuffle(self.source.as_mut())?;
            summary.shuffle_time += shuffle_start.elapsed();

            let narrow_start = Instant::now();
            let sum8 = sum_narrow(self.buffers.narrow(), self.buffers.indices());
            summary.narrow_time += narrow_start.elapsed();

            let wide_start = Instant::now();
            let sum32 = sum_wide(self.buffers.wide(), self.buffers.indices());
            summary.wide_time += wide_start.elapsed();

            summary.sum8 = summary.sum8.wrapping_add(sum8);
            summary.sum32 = summary.sum32.wrapping_add(sum32);
            summary.loops += 1;
            summary.reads_per_width += self.buffers.indices().len() as u64;
        }

        if self.config.wants_debug_dump() {
            self.reporter.report_debug_dump(&self.buffers)?;
        }

        self.reporter.report_summary(&summary)?;

        Ok(summary)
    }
}

fn check_available_memory(config: &BenchConfig) {
    let required = BenchBuffers::required_bytes(config.vector_size, config.index_size);

    let mut system = System::new();
    system.refresh_memory();
    let available = system.available_memory();

    if available > 0 && required > available {
        warn!(
            "Benchmark buffers need {} but only {} of memory is available",
            ByteSize(required),
            ByteSize(available)
        );
    } else {
        info!("Benchmark buffers need {}", ByteSize(required));
    }
}
