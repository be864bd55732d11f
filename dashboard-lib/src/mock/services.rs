//! Services that regenerate their dataset on every request
//!
//! Ids and every field derived from the row index are stable between calls.
//! Random fields (timestamps, amounts, prices, stock) are drawn again on
//! each call unless a seed is configured.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use rand::Rng;

use super::PageRequest;
use super::PageResult;
use super::SearchParams;
use super::ServiceSettings;
use super::TableService;
use super::field_equals;
use super::keyword_matches;
use super::past_timestamp;
use super::simulate_latency;
use super::status_matches;
use crate::config::MockConfig;
use crate::model::Record;

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// General-purpose user table: 100 rows, filtered by `keyword` over name and email.
#[derive(Debug, Clone)]
pub struct GenericTableService {
    settings: ServiceSettings,
}

impl GenericTableService {
    pub const ROWS: usize = 100;
    pub const LATENCY: Duration = Duration::from_millis(500);

    pub fn new() -> Self {
        Self::with_config(&MockConfig::default())
    }

    pub fn with_config(config: &MockConfig) -> Self {
        Self {
            settings: ServiceSettings::resolve(Self::LATENCY, config),
        }
    }

    fn generate(&self) -> Vec<Record> {
        const DEPARTMENTS: [&str; 4] = ["Engineering", "Product", "Operations", "Marketing"];
        let mut rng = self.settings.rng();

        (0..Self::ROWS)
            .map(|index| {
                let n = index + 1;
                Record::new(n.to_string())
                    .set("name", format!("User {}", n))
                    .set("age", (20 + index % 30) as i64)
                    .set("email", format!("user{}@example.com", n))
                    .set("status", (index % 3) as i64)
                    .set("createTime", past_timestamp(&mut rng, 10_000_000_000))
                    .set("department", DEPARTMENTS[index % DEPARTMENTS.len()])
            })
            .collect()
    }
}

impl Default for GenericTableService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TableService for GenericTableService {
    fn name(&self) -> &'static str {
        "generic"
    }

    async fn fetch(&self, page: &PageRequest, params: &SearchParams) -> PageResult {
        debug!("{} table request: {:?} {:?}", self.name(), page, params);
        simulate_latency(self.settings.latency).await;

        let rows = self
            .generate()
            .into_iter()
            .filter(|r| keyword_matches(r, params, &["name", "email"]))
            .collect();
        PageResult::paginate(rows, page)
    }
}

/// User management table: 200 rows.
///
/// Filters: `keyword` (username, realName, email), `status`, `role`,
/// `department`.
#[derive(Debug, Clone)]
pub struct UserTableService {
    settings: ServiceSettings,
}

impl UserTableService {
    pub const ROWS: usize = 200;
    pub const LATENCY: Duration = Duration::from_millis(300);

    pub fn new() -> Self {
        Self::with_config(&MockConfig::default())
    }

    pub fn with_config(config: &MockConfig) -> Self {
        Self {
            settings: ServiceSettings::resolve(Self::LATENCY, config),
        }
    }

    fn generate(&self) -> Vec<Record> {
        const ROLES: [&str; 4] = ["admin", "user", "editor", "viewer"];
        const DEPARTMENTS: [&str; 5] = ["Engineering", "Product", "Operations", "Marketing", "Finance"];
        let mut rng = self.settings.rng();

        (0..Self::ROWS)
            .map(|index| {
                let n = index + 1;
                Record::new(format!("user_{}", n))
                    .set("username", format!("user{}", n))
                    .set("realName", format!("User {}", n))
                    .set("email", format!("user{}@example.com", n))
                    .set("phone", format!("138{:08}", index))
                    .set("status", (index % 4) as i64)
                    .set("role", ROLES[index % ROLES.len()])
                    .set("department", DEPARTMENTS[index % DEPARTMENTS.len()])
                    .set("createTime", past_timestamp(&mut rng, 365 * DAY_MS))
                    .set("lastLoginTime", past_timestamp(&mut rng, 30 * DAY_MS))
            })
            .collect()
    }
}

impl Default for UserTableService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TableService for UserTableService {
    fn name(&self) -> &'static str {
        "users"
    }

    async fn fetch(&self, page: &PageRequest, params: &SearchParams) -> PageResult {
        debug!("{} table request: {:?} {:?}", self.name(), page, params);
        simulate_latency(self.settings.latency).await;

        let rows = self
            .generate()
            .into_iter()
            .filter(|r| keyword_matches(r, params, &["username", "realName", "email"]))
            .filter(|r| status_matches(r, params))
            .filter(|r| field_equals(r, params, "role"))
            .filter(|r| field_equals(r, params, "department"))
            .collect();
        PageResult::paginate(rows, page)
    }
}

/// Order management table: 150 rows.
///
/// Filters: `keyword` (orderNo, customerName, productName), `status`,
/// `paymentMethod`.
#[derive(Debug, Clone)]
pub struct OrderTableService {
    settings: ServiceSettings,
}

impl OrderTableService {
    pub const ROWS: usize = 150;
    pub const LATENCY: Duration = Duration::from_millis(400);

    pub fn new() -> Self {
        Self::with_config(&MockConfig::default())
    }

    pub fn with_config(config: &MockConfig) -> Self {
        Self {
            settings: ServiceSettings::resolve(Self::LATENCY, config),
        }
    }

    fn generate(&self) -> Vec<Record> {
        const PAYMENT_METHODS: [&str; 4] = ["Alipay", "WeChat", "Card", "Cash"];
        let mut rng = self.settings.rng();

        (0..Self::ROWS)
            .map(|index| {
                let n = index + 1;
                Record::new(format!("order_{}", n))
                    .set("orderNo", format!("ORD{:06}", n))
                    .set("customerName", format!("Customer {}", n))
                    .set("productName", format!("Product {}", n))
                    .set("amount", rng.random_range(100..10_100i64))
                    .set("status", (index % 5) as i64)
                    .set("paymentMethod", PAYMENT_METHODS[index % PAYMENT_METHODS.len()])
                    .set("createTime", past_timestamp(&mut rng, 90 * DAY_MS))
                    .set("deliveryTime", past_timestamp(&mut rng, 30 * DAY_MS))
            })
            .collect()
    }
}

impl Default for OrderTableService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TableService for OrderTableService {
    fn name(&self) -> &'static str {
        "orders"
    }

    async fn fetch(&self, page: &PageRequest, params: &SearchParams) -> PageResult {
        debug!("{} table request: {:?} {:?}", self.name(), page, params);
        simulate_latency(self.settings.latency).await;

        let rows = self
            .generate()
            .into_iter()
            .filter(|r| keyword_matches(r, params, &["orderNo", "customerName", "productName"]))
            .filter(|r| status_matches(r, params))
            .filter(|r| field_equals(r, params, "paymentMethod"))
            .collect();
        PageResult::paginate(rows, page)
    }
}

/// Product management table: 80 rows.
///
/// Filters: `keyword` (name, category, description), `category`, `status`.
#[derive(Debug, Clone)]
pub struct ProductTableService {
    settings: ServiceSettings,
}

impl ProductTableService {
    pub const ROWS: usize = 80;
    pub const LATENCY: Duration = Duration::from_millis(350);

    pub fn new() -> Self {
        Self::with_config(&MockConfig::default())
    }

    pub fn with_config(config: &MockConfig) -> Self {
        Self {
            settings: ServiceSettings::resolve(Self::LATENCY, config),
        }
    }

    fn generate(&self) -> Vec<Record> {
        const CATEGORIES: [&str; 5] = ["Electronics", "Clothing", "Food", "Books", "Home"];
        let mut rng = self.settings.rng();

        (0..Self::ROWS)
            .map(|index| {
                let n = index + 1;
                Record::new(format!("product_{}", n))
                    .set("name", format!("Product {}", n))
                    .set("category", CATEGORIES[index % CATEGORIES.len()])
                    .set("price", rng.random_range(10..1_010i64))
                    .set("stock", rng.random_range(0..1_000i64))
                    .set("status", (index % 3) as i64)
                    .set("description", format!("Detailed description of product {}", n))
                    .set("createTime", past_timestamp(&mut rng, 180 * DAY_MS))
                    .set("updateTime", past_timestamp(&mut rng, 30 * DAY_MS))
            })
            .collect()
    }
}

impl Default for ProductTableService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TableService for ProductTableService {
    fn name(&self) -> &'static str {
        "products"
    }

    async fn fetch(&self, page: &PageRequest, params: &SearchParams) -> PageResult {
        debug!("{} table request: {:?} {:?}", self.name(), page, params);
        simulate_latency(self.settings.latency).await;

        let rows = self
            .generate()
            .into_iter()
            .filter(|r| keyword_matches(r, params, &["name", "category", "description"]))
            .filter(|r| field_equals(r, params, "category"))
            .filter(|r| status_matches(r, params))
            .collect();
        PageResult::paginate(rows, page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_row_counts() {
        let config = MockConfig::instant();
        assert_eq!(GenericTableService::with_config(&config).generate().len(), 100);
        assert_eq!(UserTableService::with_config(&config).generate().len(), 200);
        assert_eq!(OrderTableService::with_config(&config).generate().len(), 150);
        assert_eq!(ProductTableService::with_config(&config).generate().len(), 80);
    }

    #[test]
    fn test_index_derived_fields() {
        let rows = OrderTableService::with_config(&MockConfig::instant()).generate();
        assert_eq!(rows[0].id(), "order_1");
        assert_eq!(rows[0].get_str("orderNo"), Some("ORD000001"));
        assert_eq!(rows[6].get_int("status"), Some(1));

        let users = UserTableService::with_config(&MockConfig::instant()).generate();
        assert_eq!(users[5].get_str("phone"), Some("13800000005"));
        assert_eq!(users[5].get_str("role"), Some("user"));
    }

    #[test]
    fn test_random_fields_in_range() {
        let rows = ProductTableService::with_config(&MockConfig::instant()).generate();
        for row in &rows {
            let price = row.get_int("price").unwrap();
            assert!((10..1_010).contains(&price));
            assert!((0..1_000).contains(&row.get_int("stock").unwrap()));
        }
    }
}
