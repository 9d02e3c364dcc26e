use anyhow::Result;
use chrono::{NaiveDate, Utc};
use sqlx::SqlitePool;

use crate::database::models::{TimeOffRequest, TimeOffRequestInput, TimeOffStatus};

const COLUMNS: &str = "id, employee_id, start_date, end_date, status, leave_type, \
                       reason, created_at, updated_at";

#[derive(Clone)]
pub struct TimeOffRepository {
    pool: SqlitePool,
}

impl TimeOffRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new request. Requests always start out pending; approval is
    /// a separate status transition.
    pub async fn create(&self, input: TimeOffRequestInput) -> Result<TimeOffRequest> {
        let now = Utc::now().naive_utc();

        let request = sqlx::query_as::<_, TimeOffRequest>(&format!(
            r#"
            INSERT INTO time_off_requests (
                employee_id, start_date, end_date, status, leave_type,
                reason, created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(input.employee_id)
        .bind(input.start_date)
        .bind(input.end_date)
        .bind(TimeOffStatus::Pending)
        .bind(input.leave_type)
        .bind(input.reason)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(request)
    }

    /// Requests matching the optional filters. The date pair selects
    /// requests whose range *overlaps* `[from, to]`, which is what both the
    /// resolver and the conflict validator need.
    pub async fn list(
        &self,
        employee_id: Option<i64>,
        status: Option<TimeOffStatus>,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<TimeOffRequest>> {
        let mut query = format!("SELECT {} FROM time_off_requests", COLUMNS);

        let mut conditions = vec![];
        if employee_id.is_some() {
            conditions.push("employee_id = ?");
        }
        if status.is_some() {
            conditions.push("status = ?");
        }
        if from.is_some() {
            conditions.push("end_date >= ?");
        }
        if to.is_some() {
            conditions.push("start_date <= ?");
        }
        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }
        query.push_str(" ORDER BY created_at DESC");

        let mut prepared = sqlx::query_as::<_, TimeOffRequest>(&query);
        if let Some(id) = employee_id {
            prepared = prepared.bind(id);
        }
        if let Some(s) = status {
            prepared = prepared.bind(s);
        }
        if let Some(f) = from {
            prepared = prepared.bind(f);
        }
        if let Some(t) = to {
            prepared = prepared.bind(t);
        }

        let requests = prepared.fetch_all(&self.pool).await?;

        Ok(requests)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<TimeOffRequest>> {
        let request = sqlx::query_as::<_, TimeOffRequest>(&format!(
            "SELECT {} FROM time_off_requests WHERE id = ?",
            COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(request)
    }

    /// Update the dates, type and reason of a request. Status is not
    /// touched here; transitions go through `update_status`.
    pub async fn update(
        &self,
        id: i64,
        input: TimeOffRequestInput,
    ) -> Result<Option<TimeOffRequest>> {
        let now = Utc::now().naive_utc();

        let request = sqlx::query_as::<_, TimeOffRequest>(&format!(
            r#"
            UPDATE time_off_requests
            SET start_date = ?, end_date = ?, leave_type = ?, reason = ?, updated_at = ?
            WHERE id = ?
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(input.start_date)
        .bind(input.end_date)
        .bind(input.leave_type)
        .bind(input.reason)
        .bind(now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(request)
    }

    pub async fn update_status(
        &self,
        id: i64,
        status: TimeOffStatus,
    ) -> Result<Option<TimeOffRequest>> {
        let now = Utc::now().naive_utc();

        let request = sqlx::query_as::<_, TimeOffRequest>(&format!(
            r#"
            UPDATE time_off_requests
            SET status = ?, updated_at = ?
            WHERE id = ?
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(status)
        .bind(now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(request)
    }

    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM time_off_requests WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
