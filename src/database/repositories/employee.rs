use anyhow::Result;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::database::models::{Employee, EmployeeInput};

#[derive(Clone)]
pub struct EmployeeRepository {
    pool: SqlitePool,
}

impl EmployeeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, input: EmployeeInput) -> Result<Employee> {
        let now = Utc::now().naive_utc();

        let employee = sqlx::query_as::<_, Employee>(
            r#"
            INSERT INTO employees (name, employment_type, created_at, updated_at)
            VALUES (?, ?, ?, ?)
            RETURNING id, name, employment_type, created_at, updated_at
            "#,
        )
        .bind(&input.name)
        .bind(input.employment_type)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(employee)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Employee>> {
        let employee = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, name, employment_type, created_at, updated_at
            FROM employees WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(employee)
    }

    pub async fn list(&self) -> Result<Vec<Employee>> {
        let employees = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, name, employment_type, created_at, updated_at
            FROM employees ORDER BY name, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(employees)
    }

    pub async fn update(&self, id: i64, input: EmployeeInput) -> Result<Option<Employee>> {
        let now = Utc::now().naive_utc();

        let employee = sqlx::query_as::<_, Employee>(
            r#"
            UPDATE employees
            SET name = ?, employment_type = ?, updated_at = ?
            WHERE id = ?
            RETURNING id, name, employment_type, created_at, updated_at
            "#,
        )
        .bind(&input.name)
        .bind(input.employment_type)
        .bind(now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(employee)
    }

    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
