use serde::{Serialize, Deserialize};
use std::path::Path;

use crate::core::error::{BenchError, Result};

/// Vectors shorter than this are small enough to dump to stdout.
pub const DEBUG_DUMP_MAX_VECTOR_SIZE: usize = 50;

/// Benchmark parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Length of both data vectors.
    pub vector_size: usize,
    /// Number of random indices drawn per loop.
    pub index_size: usize,
    /// Number of shuffle + summation rounds.
    pub loops: u32,
    /// Seed for the index generator. `None` draws one from the OS.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl BenchConfig {
    /// Create a validated configuration with no fixed seed.
    pub fn new(vector_size: usize, index_size: usize, loops: u32) -> Result<Self> {
        let config = Self {
            vector_size,
            index_size,
            loops,
            seed: None,
        };
        config.validate()?;
        Ok(config)
    }

    /// Pin the index generator to `seed`.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Every parameter must be strictly positive.
    pub fn validate(&self) -> Result<()> {
        if self.vector_size == 0 {
            return Err(BenchError::InvalidParameter("vector_size must be greater than 0".to_string()));
        }
        if self.index_size == 0 {
            return Err(BenchError::InvalidParameter("index_size must be greater than 0".to_string()));
        }
        if self.loops == 0 {
            return Err(BenchError::InvalidParameter("loops must be greater than 0".to_string()));
        }
        Ok(())
    }

    /// The vectors and indices are dumped only for a single round over a tiny vector.
    pub fn wants_debug_dump(&self) -> bool {
        self.vector_size < DEBUG_DUMP_MAX_VECTOR_SIZE && self.loops == 1
    }

    /// Parse a base-10 positive integer command-line argument.
    pub fn parse_count<T>(name: &str, value: &str) -> Result<T>
    where
        T: std::str::FromStr + PartialEq + Default,
    {
        let parsed = value
            .trim()
            .parse::<T>()
            .map_err(|_| BenchError::InvalidParameter(format!("{} must be a positive integer, got '{}'", name, value)))?;

        if parsed == T::default() {
            return Err(BenchError::InvalidParameter(format!("{} must be greater than 0", name)));
        }

        Ok(parsed)
    }

    /// Load a configuration from a TOML (`.toml`) or JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(BenchError::Config(format!("Config file not found: {}", path.display())));
        }

        let contents = std::fs::read_to_string(path)?;

        let config = if path.extension().and_then(|ext| ext.to_str()) == Some("toml") {
            toml::from_str::<Self>(&contents)
                .map_err(|e| BenchError::Config(format!("Failed to parse TOML config: {}", e)))?
        } else {
            serde_json::from_str::<Self>(&contents)
                .map_err(|e| BenchError::Config(format!("Failed to parse JSON config: {}", e)))?
        };

        config.validate()?;
        Ok(config)
    }
}
