use anyhow::Result;
use chrono::{NaiveDateTime, Utc};
use sqlx::{Sqlite, SqlitePool, Transaction};

use crate::database::models::{RecurringShift, RecurringShiftInput};

const COLUMNS: &str = "id, employee_id, day_of_week, start_time, end_time, \
                       effective_from, effective_until, created_at, updated_at";

#[derive(Clone)]
pub struct RecurringShiftRepository {
    pool: SqlitePool,
}

impl RecurringShiftRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All recurring pattern rows, optionally narrowed to one employee.
    /// Ordered so a weekly pattern reads top-to-bottom in the grid.
    pub async fn list(&self, employee_id: Option<i64>) -> Result<Vec<RecurringShift>> {
        let mut query = format!("SELECT {} FROM recurring_shifts", COLUMNS);
        if employee_id.is_some() {
            query.push_str(" WHERE employee_id = ?");
        }
        query.push_str(" ORDER BY employee_id, day_of_week, start_time");

        let mut prepared = sqlx::query_as::<_, RecurringShift>(&query);
        if let Some(id) = employee_id {
            prepared = prepared.bind(id);
        }

        let shifts = prepared.fetch_all(&self.pool).await?;

        Ok(shifts)
    }

    /// Atomically swap an employee's whole weekly pattern: delete every
    /// existing row and insert the replacement set in one transaction. A
    /// failure at any point rolls back, so the employee is never observed
    /// with a half-written (or empty) pattern.
    pub async fn replace_pattern(
        &self,
        employee_id: i64,
        pattern: &[RecurringShiftInput],
    ) -> Result<Vec<RecurringShift>> {
        let now = Utc::now().naive_utc();
        let mut tx = self.pool.begin().await?;

        match Self::delete_and_insert(&mut tx, employee_id, pattern, now).await {
            Ok(inserted) => {
                tx.commit().await?;
                Ok(inserted)
            }
            Err(err) => {
                log::warn!(
                    "Replacing pattern for employee {} failed, rolling back: {}",
                    employee_id,
                    err
                );
                if let Err(rollback_err) = tx.rollback().await {
                    log::error!(
                        "Rollback failed after pattern replace error (orig: {}, rollback: {})",
                        err,
                        rollback_err
                    );
                }
                Err(err)
            }
        }
    }

    async fn delete_and_insert(
        tx: &mut Transaction<'_, Sqlite>,
        employee_id: i64,
        pattern: &[RecurringShiftInput],
        now: NaiveDateTime,
    ) -> Result<Vec<RecurringShift>> {
        sqlx::query("DELETE FROM recurring_shifts WHERE employee_id = ?")
            .bind(employee_id)
            .execute(&mut **tx)
            .await?;

        let mut inserted = Vec::with_capacity(pattern.len());
        for row in pattern {
            let shift = sqlx::query_as::<_, RecurringShift>(&format!(
                r#"
                INSERT INTO recurring_shifts (
                    employee_id, day_of_week, start_time, end_time,
                    effective_from, effective_until, created_at, updated_at
                )
                VALUES (?, ?, ?, ?, ?, ?, ?, ?)
                RETURNING {}
                "#,
                COLUMNS
            ))
            .bind(employee_id)
            .bind(row.day_of_week)
            .bind(row.start_time)
            .bind(row.end_time)
            .bind(row.effective_from)
            .bind(row.effective_until)
            .bind(now)
            .bind(now)
            .fetch_one(&mut **tx)
            .await?;

            inserted.push(shift);
        }

        Ok(inserted)
    }
}
