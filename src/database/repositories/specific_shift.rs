use anyhow::Result;
use chrono::{NaiveDate, Utc};
use sqlx::SqlitePool;

use crate::database::models::{SpecificShift, SpecificShiftInput};

const COLUMNS: &str =
    "id, employee_id, start_time, end_time, location_id, created_at, updated_at";

#[derive(Clone)]
pub struct SpecificShiftRepository {
    pool: SqlitePool,
}

impl SpecificShiftRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, input: SpecificShiftInput) -> Result<SpecificShift> {
        let now = Utc::now().naive_utc();

        let shift = sqlx::query_as::<_, SpecificShift>(&format!(
            r#"
            INSERT INTO specific_shifts (
                employee_id, start_time, end_time, location_id, created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(input.employee_id)
        .bind(input.start_time)
        .bind(input.end_time)
        .bind(input.location_id)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(shift)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<SpecificShift>> {
        let shift = sqlx::query_as::<_, SpecificShift>(&format!(
            "SELECT {} FROM specific_shifts WHERE id = ?",
            COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(shift)
    }

    /// Shifts whose calendar date falls inside `[from, to]`, optionally for
    /// one employee. The grid fetches a whole visible week in one call.
    pub async fn list(
        &self,
        employee_id: Option<i64>,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<SpecificShift>> {
        let mut query = format!(
            "SELECT {} FROM specific_shifts \
             WHERE date(start_time) >= ? AND date(start_time) <= ?",
            COLUMNS
        );
        if employee_id.is_some() {
            query.push_str(" AND employee_id = ?");
        }
        query.push_str(" ORDER BY employee_id, start_time");

        let mut prepared = sqlx::query_as::<_, SpecificShift>(&query).bind(from).bind(to);
        if let Some(id) = employee_id {
            prepared = prepared.bind(id);
        }

        let shifts = prepared.fetch_all(&self.pool).await?;

        Ok(shifts)
    }

    /// Existing rows for one employee on one date; what the conflict
    /// validator checks a candidate write against.
    pub async fn list_for_day(&self, employee_id: i64, date: NaiveDate) -> Result<Vec<SpecificShift>> {
        self.list(Some(employee_id), date, date).await
    }

    pub async fn update(&self, id: i64, input: SpecificShiftInput) -> Result<Option<SpecificShift>> {
        let now = Utc::now().naive_utc();

        let shift = sqlx::query_as::<_, SpecificShift>(&format!(
            r#"
            UPDATE specific_shifts
            SET employee_id = ?, start_time = ?, end_time = ?, location_id = ?, updated_at = ?
            WHERE id = ?
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(input.employee_id)
        .bind(input.start_time)
        .bind(input.end_time)
        .bind(input.location_id)
        .bind(now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(shift)
    }

    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM specific_shifts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
