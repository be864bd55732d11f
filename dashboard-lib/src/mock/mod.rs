//! Mock data services
//!
//! Stand-ins for the backend the table pages talk to. Each service filters a
//! synthetic dataset by the search parameters and returns one page of it,
//! after a simulated network delay.
//!
//! Callers must await each response before reading it. Nothing here cancels
//! or deduplicates overlapping requests, so a caller that fires several
//! requests has to discard stale responses itself.
//!
//! # Example
//!
//! ```
//! use dashboard_lib::config::MockConfig;
//! use dashboard_lib::mock::{PageRequest, SearchParams, TableService, UserListService};
//!
//! # let rt = tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap();
//! # rt.block_on(async {
//! let service = UserListService::with_config(&MockConfig::instant());
//! let page = service
//!     .fetch(&PageRequest::new(1, 10), &SearchParams::new())
//!     .await;
//!
//! assert_eq!(page.total, 500);
//! assert_eq!(page.list.len(), 10);
//! # });
//! ```

mod params;
mod services;
mod user_list;

pub use params::*;
pub use services::*;
pub use user_list::*;

use std::ops::Range;
use std::time::Duration;

use async_trait::async_trait;
use chrono::SecondsFormat;
use chrono::Utc;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Deserialize;
use serde::Serialize;

use crate::config::MockConfig;
use crate::model::Pagination;
use crate::model::Record;

/// The page a caller asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    /// 1-based page number.
    pub current: u32,
    pub page_size: u32,
}

impl PageRequest {
    pub fn new(current: u32, page_size: u32) -> Self {
        Self { current, page_size }
    }

    /// The slice `[(current-1)*page_size, current*page_size)` clamped to `len`.
    ///
    /// Page 0 lies before the first row and is always empty.
    pub fn range(&self, len: usize) -> Range<usize> {
        if self.current == 0 {
            return 0..0;
        }
        let size = self.page_size as usize;
        let start = ((self.current - 1) as usize).saturating_mul(size).min(len);
        let end = start.saturating_add(size).min(len);
        start..end
    }
}

impl From<&Pagination> for PageRequest {
    fn from(pagination: &Pagination) -> Self {
        Self::new(pagination.current, pagination.page_size)
    }
}

/// One page of filtered records plus the total number of matches.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PageResult {
    pub list: Vec<Record>,
    pub total: usize,
}

impl PageResult {
    /// Slices the requested page out of the filtered rows.
    pub fn paginate(mut rows: Vec<Record>, page: &PageRequest) -> Self {
        let total = rows.len();
        let range = page.range(total);
        rows.truncate(range.end);
        let list = rows.split_off(range.start);
        Self { list, total }
    }

    /// Ids of the records on this page, in order.
    pub fn ids(&self) -> Vec<&str> {
        self.list.iter().map(Record::id).collect()
    }
}

/// A paginated, filterable table data source.
#[async_trait]
pub trait TableService: Send + Sync {
    /// Short identifier used in logs and by the CLI.
    fn name(&self) -> &'static str;

    /// Returns the requested page of records matching `params`.
    async fn fetch(&self, page: &PageRequest, params: &SearchParams) -> PageResult;
}

/// Latency and seed resolved for one service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceSettings {
    pub latency: Duration,
    pub seed: Option<u64>,
}

impl ServiceSettings {
    pub(crate) fn resolve(default_latency: Duration, config: &MockConfig) -> Self {
        Self {
            latency: config.latency.unwrap_or(default_latency),
            seed: config.seed,
        }
    }

    pub(crate) fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }
}

pub(crate) async fn simulate_latency(latency: Duration) {
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }
}

/// An RFC 3339 timestamp up to `max_age_ms` in the past.
pub(crate) fn past_timestamp(rng: &mut StdRng, max_age_ms: i64) -> String {
    let age = chrono::Duration::milliseconds(rng.random_range(0..max_age_ms.max(1)));
    (Utc::now() - age).to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Case-insensitive substring match of the `keyword` parameter over `fields`.
pub(crate) fn keyword_matches(record: &Record, params: &SearchParams, fields: &[&str]) -> bool {
    let Some(keyword) = params.keyword() else {
        return true;
    };
    let keyword = keyword.to_lowercase();
    fields.iter().any(|field| {
        record
            .get_str(field)
            .is_some_and(|v| v.to_lowercase().contains(&keyword))
    })
}

/// Exact string match of parameter `key` against the same-named field.
pub(crate) fn field_equals(record: &Record, params: &SearchParams, key: &str) -> bool {
    match params.str(key) {
        Some(expected) => record.get_str(key) == Some(expected),
        None => true,
    }
}

/// Numeric match of the `status` parameter; blank means no filter.
pub(crate) fn status_matches(record: &Record, params: &SearchParams) -> bool {
    if params.is_blank("status") {
        return true;
    }
    params
        .int("status")
        .is_some_and(|status| record.get_int("status") == Some(status))
}
