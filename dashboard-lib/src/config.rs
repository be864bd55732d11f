//! Store and mock-service configuration

use std::time::Duration;

/// Configuration for a [`TableConfigStore`](crate::store::TableConfigStore).
///
/// Controls the pagination new default configs start from.
///
/// # Example
///
/// ```
/// use dashboard_lib::config::StoreConfig;
///
/// let config = StoreConfig::default().with_page_size(20);
/// assert_eq!(config.page_size, 20);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Initial current page.
    ///
    /// Default: 1
    pub current_page: u32,

    /// Initial page size.
    ///
    /// Default: 10
    pub page_size: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            current_page: 1,
            page_size: 10,
        }
    }
}

impl StoreConfig {
    /// Creates a new store config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial current page.
    pub fn with_current_page(mut self, page: u32) -> Self {
        self.current_page = page;
        self
    }

    /// Sets the initial page size.
    pub fn with_page_size(mut self, size: u32) -> Self {
        self.page_size = size;
        self
    }
}

/// Configuration shared by the mock table services.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use dashboard_lib::config::MockConfig;
///
/// // Instant, reproducible responses for tests
/// let config = MockConfig::default()
///     .with_latency(Duration::ZERO)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MockConfig {
    /// Replaces every service's built-in latency when set.
    pub latency: Option<Duration>,

    /// Seeds the random generator so synthetic data is reproducible.
    pub seed: Option<u64>,
}

impl MockConfig {
    /// Creates a new mock config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the simulated latency.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Creates a config with no simulated latency.
    pub fn instant() -> Self {
        Self {
            latency: Some(Duration::ZERO),
            seed: None,
        }
    }
}
