#![allow(dead_code)]

use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use fake::faker::name::en::Name;
use fake::Fake;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tempfile::NamedTempFile;

use rosterd::database::models::{
    Employee, EmployeeInput, EmploymentType, RecurringShift, RecurringShiftInput,
};
use rosterd::database::repositories::{EmployeeRepository, RecurringShiftRepository};
use rosterd::Config;

/// Isolated test environment: a fresh migrated SQLite database backed by a
/// temp file, plus a config pointing at it.
pub struct TestContext {
    pub pool: SqlitePool,
    pub config: Config,
    _temp_file: NamedTempFile,
}

impl TestContext {
    pub async fn new() -> Result<Self> {
        let temp_file = NamedTempFile::new()?;
        let database_url = format!("sqlite:{}", temp_file.path().display());

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect(&database_url)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        let config = Config {
            database_url,
            host: "127.0.0.1".to_string(),
            port: 0,
            environment: "test".to_string(),
            client_base_url: "http://localhost:3000".to_string(),
            week_start_day: 0,
        };

        Ok(TestContext {
            pool,
            config,
            _temp_file: temp_file,
        })
    }
}

pub async fn seed_employee(pool: &SqlitePool) -> Result<Employee> {
    EmployeeRepository::new(pool.clone())
        .create(EmployeeInput {
            name: Name().fake(),
            employment_type: EmploymentType::FullTime,
        })
        .await
}

/// A weekday 9-to-5 pattern row for seeding.
pub fn pattern_row(day_of_week: i64, from: NaiveDate) -> RecurringShiftInput {
    RecurringShiftInput {
        day_of_week,
        start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
        effective_from: from,
        effective_until: None,
    }
}

pub async fn seed_pattern(
    pool: &SqlitePool,
    employee_id: i64,
    pattern: &[RecurringShiftInput],
) -> Result<Vec<RecurringShift>> {
    RecurringShiftRepository::new(pool.clone())
        .replace_pattern(employee_id, pattern)
        .await
}
