//! Employee list service with a cached dataset

use std::time::Duration;

use async_trait::async_trait;
use chrono::DateTime;
use log::debug;
use rand::Rng;
use rand::rngs::StdRng;
use tokio::sync::OnceCell;

use super::PageRequest;
use super::PageResult;
use super::SearchParams;
use super::ServiceSettings;
use super::TableService;
use super::field_equals;
use super::simulate_latency;
use super::status_matches;
use crate::config::MockConfig;
use crate::model::Record;

const NAMES: [&str; 18] = [
    "Zhang San",
    "Li Si",
    "Wang Wu",
    "Zhao Liu",
    "Qian Qi",
    "Sun Ba",
    "Zhou Jiu",
    "Wu Shi",
    "Zheng Shiyi",
    "Wang Shier",
    "Chen Shisan",
    "Liu Shisi",
    "Yang Shiwu",
    "Huang Shiliu",
    "Lin Shiqi",
    "He Shiba",
    "Gao Shijiu",
    "Liang Ershi",
];
const DEPARTMENTS: [&str; 8] = [
    "Engineering",
    "Product",
    "Design",
    "Operations",
    "Marketing",
    "Sales",
    "HR",
    "Finance",
];
const LEVELS: [&str; 6] = ["P5", "P6", "P7", "P8", "P9", "P10"];
const EDUCATIONS: [&str; 4] = ["Bachelor", "Master", "Doctorate", "Associate"];
const CITIES: [&str; 8] = [
    "Beijing",
    "Shanghai",
    "Guangzhou",
    "Shenzhen",
    "Hangzhou",
    "Nanjing",
    "Chengdu",
    "Wuhan",
];

/// 2023-01-01T00:00:00Z
const HIRE_WINDOW_START: i64 = 1_672_531_200;
/// 2024-12-31T00:00:00Z
const HIRE_WINDOW_END: i64 = 1_735_603_200;
const THIRTY_DAYS_SECS: i64 = 30 * 24 * 60 * 60;
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Employee list: 500 rows generated on first request and reused after.
///
/// Every field is stable for the lifetime of the instance. Filters: `name`
/// and `phone` (substring), `status` (numeric, blank = any), `department`
/// and `education` (exact).
#[derive(Debug)]
pub struct UserListService {
    settings: ServiceSettings,
    data: OnceCell<Vec<Record>>,
}

impl UserListService {
    pub const ROWS: usize = 500;
    pub const LATENCY: Duration = Duration::from_millis(500);

    pub fn new() -> Self {
        Self::with_config(&MockConfig::default())
    }

    pub fn with_config(config: &MockConfig) -> Self {
        Self {
            settings: ServiceSettings::resolve(Self::LATENCY, config),
            data: OnceCell::new(),
        }
    }

    /// Returns the cached dataset, generating it on first use.
    pub async fn dataset(&self) -> &[Record] {
        self.data
            .get_or_init(|| async {
                debug!("Generating {} employee rows", Self::ROWS);
                generate(&mut self.settings.rng())
            })
            .await
    }
}

impl Default for UserListService {
    fn default() -> Self {
        Self::new()
    }
}

fn format_secs(secs: i64) -> String {
    DateTime::from_timestamp(secs, 0)
        .map(|dt| dt.format(TIME_FORMAT).to_string())
        .unwrap_or_default()
}

fn generate(rng: &mut StdRng) -> Vec<Record> {
    (0..UserListService::ROWS)
        .map(|index| {
            let round = index / NAMES.len();
            let name = if round > 0 {
                format!("{}({})", NAMES[index % NAMES.len()], round + 1)
            } else {
                NAMES[index % NAMES.len()].to_string()
            };
            let email = format!(
                "{}{}@example.com",
                name.to_lowercase().replace(['(', ')', ' '], ""),
                index
            );

            let created = rng.random_range(HIRE_WINDOW_START..HIRE_WINDOW_END);
            let updated = created + rng.random_range(0..THIRTY_DAYS_SECS);
            let phone = format!(
                "1{}{}",
                rng.random_range(3..12),
                rng.random_range(10_000_000..100_000_000)
            );
            let address = format!(
                "{} District {}",
                CITIES[rng.random_range(0..CITIES.len())],
                rng.random_range(1..=10)
            );

            Record::new((index + 1).to_string())
                .set("name", name)
                .set("age", rng.random_range(22..42i64))
                .set("email", email)
                .set("status", rng.random_range(0..3i64))
                .set("salary", rng.random_range(5_000..25_000i64))
                .set("createTime", format_secs(created))
                .set("department", DEPARTMENTS[index % DEPARTMENTS.len()])
                .set("level", LEVELS[rng.random_range(0..LEVELS.len())])
                .set("phone", phone)
                .set("address", address)
                .set("education", EDUCATIONS[rng.random_range(0..EDUCATIONS.len())])
                .set("experience", rng.random_range(1..=15i64))
                .set("updateTime", format_secs(updated))
        })
        .collect()
}

fn substring_matches(record: &Record, params: &SearchParams, key: &str) -> bool {
    match params.str(key) {
        Some(needle) => record.get_str(key).is_some_and(|v| v.contains(needle)),
        None => true,
    }
}

#[async_trait]
impl TableService for UserListService {
    fn name(&self) -> &'static str {
        "user-list"
    }

    async fn fetch(&self, page: &PageRequest, params: &SearchParams) -> PageResult {
        debug!("{} table request: {:?} {:?}", self.name(), page, params);
        simulate_latency(self.settings.latency).await;

        let rows = self
            .dataset()
            .await
            .iter()
            .filter(|r| substring_matches(r, params, "name"))
            .filter(|r| status_matches(r, params))
            .filter(|r| field_equals(r, params, "department"))
            .filter(|r| substring_matches(r, params, "phone"))
            .filter(|r| field_equals(r, params, "education"))
            .cloned()
            .collect();
        PageResult::paginate(rows, page)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_names_repeat_with_round_suffix() {
        let rows = generate(&mut StdRng::seed_from_u64(1));
        assert_eq!(rows.len(), 500);
        assert_eq!(rows[0].get_str("name"), Some("Zhang San"));
        assert_eq!(rows[18].get_str("name"), Some("Zhang San(2)"));
        assert_eq!(rows[18].get_str("email"), Some("zhangsan218@example.com"));
    }

    #[test]
    fn test_timestamps_in_window() {
        let rows = generate(&mut StdRng::seed_from_u64(2));
        for row in &rows {
            let created = row.get_str("createTime").unwrap();
            let updated = row.get_str("updateTime").unwrap();
            assert!(created >= "2023-01-01 00:00:00");
            assert!(created < "2024-12-31 00:00:00");
            assert!(updated >= created);
        }
    }

    #[test]
    fn test_phone_shape() {
        let rows = generate(&mut StdRng::seed_from_u64(3));
        for row in &rows {
            let phone = row.get_str("phone").unwrap();
            assert!(phone.starts_with('1'));
            assert!(phone.len() == 10 || phone.len() == 11);
        }
    }
}
