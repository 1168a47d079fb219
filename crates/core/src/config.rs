use tracing::warn;

// Default conversion parameters
pub const DEFAULT_DECIMALS: u32 = 9;
pub const FIXED_POINT_MAX_LOG10: f64 = 6.0; // floats above 10^6 lose fractional digits
pub const MAX_DEFAULT_WORKERS: usize = 8;

pub const DECIMALS_ENV: &str = "NANO_UNITS_DECIMALS";
pub const WORKERS_ENV: &str = "NANO_UNITS_WORKERS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionConfig {
    pub decimals: u32,
    /// Worker threads for batch conversion (`None` = auto).
    pub workers: Option<usize>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            decimals: DEFAULT_DECIMALS,
            workers: None,
        }
    }
}

impl ConversionConfig {
    /// Reads overrides from `NANO_UNITS_DECIMALS` and `NANO_UNITS_WORKERS`.
    /// Unparsable values are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(raw) = lookup(DECIMALS_ENV) {
            match raw.trim().parse::<u32>() {
                Ok(decimals) => config.decimals = decimals,
                Err(e) => warn!(%raw, error = %e, "ignoring {}", DECIMALS_ENV),
            }
        }
        if let Some(raw) = lookup(WORKERS_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(0) => config.workers = None,
                Ok(n) => config.workers = Some(n),
                Err(e) => warn!(%raw, error = %e, "ignoring {}", WORKERS_ENV),
            }
        }
        config
    }

    pub fn with_decimals(mut self, decimals: Option<u32>) -> Self {
        if let Some(decimals) = decimals {
            self.decimals = decimals;
        }
        self
    }

    pub fn with_workers(mut self, workers: Option<usize>) -> Self {
        match workers {
            Some(0) => self.workers = None,
            Some(n) => self.workers = Some(n),
            None => {}
        }
        self
    }

    pub fn worker_count(&self) -> usize {
        self.workers
            .unwrap_or_else(|| rayon::current_num_threads().min(MAX_DEFAULT_WORKERS))
    }
}
