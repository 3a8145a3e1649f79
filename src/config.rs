//! Configuration management for ssemu.
//!
//! Configuration is resolved once per process from, in priority order:
//! 1. Environment variables
//! 2. Built-in defaults
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `SSEMU_ROUNDING_MODE` | initial rounding mode of every thread (`nearest`, `down`, `up`, `toward-zero`) | `nearest` |
//! | `SSEMU_PARALLEL_THRESHOLD` | minimum slice length for `par_simd_*` to fan out | `262144` |
//! | `SSEMU_PARALLEL_CHUNK_SIZE` | elements per rayon task | `16384` |

use std::sync::OnceLock;

use crate::error::{config_error, Result};
use crate::simd::sse::rounding::RoundingMode;
use crate::{PARALLEL_CHUNK_SIZE, PARALLEL_SIMD_THRESHOLD};

/// Global cached configuration.
static CONFIG: OnceLock<Config> = OnceLock::new();

pub const ROUNDING_MODE_VAR: &str = "SSEMU_ROUNDING_MODE";
pub const PARALLEL_THRESHOLD_VAR: &str = "SSEMU_PARALLEL_THRESHOLD";
pub const PARALLEL_CHUNK_SIZE_VAR: &str = "SSEMU_PARALLEL_CHUNK_SIZE";

/// ssemu configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Rounding mode a thread's control register starts with.
    pub default_rounding: RoundingMode,

    /// Slices shorter than this are processed on the calling thread.
    pub parallel_threshold: usize,

    /// Elements per parallel task. Never zero.
    pub parallel_chunk_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_rounding: RoundingMode::Nearest,
            parallel_threshold: PARALLEL_SIMD_THRESHOLD,
            parallel_chunk_size: PARALLEL_CHUNK_SIZE,
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// An unparsable variable is reported with `log::warn!` and the whole
    /// environment override is discarded in favour of the defaults.
    pub fn load() -> Self {
        match Self::from_lookup(|key| std::env::var(key).ok()) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring environment configuration: {}", e);
                Self::default()
            }
        }
    }

    /// Get the cached global configuration.
    ///
    /// Loads configuration on first call and caches it.
    pub fn get() -> &'static Config {
        CONFIG.get_or_init(|| {
            let config = Self::load();
            log::debug!("Loaded configuration: {:?}", config);
            config
        })
    }

    /// Build a configuration from an arbitrary key lookup.
    ///
    /// Keys the lookup does not know keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ROUNDING_MODE_VAR) {
            config.default_rounding = value.parse()?;
        }

        if let Some(value) = lookup(PARALLEL_THRESHOLD_VAR) {
            config.parallel_threshold = parse_count(PARALLEL_THRESHOLD_VAR, &value)?;
        }

        if let Some(value) = lookup(PARALLEL_CHUNK_SIZE_VAR) {
            let chunk = parse_count(PARALLEL_CHUNK_SIZE_VAR, &value)?;
            if chunk == 0 {
                return Err(config_error(
                    PARALLEL_CHUNK_SIZE_VAR,
                    value,
                    "chunk size must be non-zero",
                ));
            }
            config.parallel_chunk_size = chunk;
        }

        Ok(config)
    }
}

fn parse_count(key: &str, value: &str) -> Result<usize> {
    value
        .trim()
        .parse::<usize>()
        .map_err(|e| config_error(key, value, e.to_string()))
}
