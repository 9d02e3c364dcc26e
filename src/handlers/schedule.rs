use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::database::models::Employee;
use crate::database::repositories::{
    EmployeeRepository, RecurringShiftRepository, SpecificShiftRepository, TimeOffRepository,
};
use crate::error::AppError;
use crate::handlers::shared::ApiResponse;
use crate::scheduling::{headcount, resolve, total_hours, week_dates, week_total_hours, DaySchedule};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekScheduleQuery {
    /// Any date inside the week to display.
    pub anchor: NaiveDate,
    pub employee_id: Option<i64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekSchedule {
    pub dates: Vec<NaiveDate>,
    pub rows: Vec<EmployeeWeekRow>,
    pub day_totals: Vec<DayTotal>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeWeekRow {
    pub employee: Employee,
    pub days: Vec<DaySchedule>,
    pub total_hours: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayTotal {
    pub date: NaiveDate,
    pub hours: f64,
    pub headcount: usize,
}

/// Resolve a full week grid: each store is loaded once, then the resolver
/// runs per employee and day, and the same resolved cells feed the footer
/// totals.
pub async fn get_week_schedule(
    config: web::Data<Config>,
    employees: web::Data<EmployeeRepository>,
    recurring_repo: web::Data<RecurringShiftRepository>,
    specific_repo: web::Data<SpecificShiftRepository>,
    time_off_repo: web::Data<TimeOffRepository>,
    query: web::Query<WeekScheduleQuery>,
) -> Result<HttpResponse, AppError> {
    let week_start = config.week_start();
    let dates = week_dates(query.anchor, week_start);

    let roster: Vec<Employee> = match query.employee_id {
        Some(id) => {
            let employee = employees
                .get_by_id(id)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Employee {} not found", id)))?;
            vec![employee]
        }
        None => employees.list().await?,
    };

    let recurring = recurring_repo.list(query.employee_id).await?;
    let specific = specific_repo
        .list(query.employee_id, dates[0], dates[6])
        .await?;
    let time_off = time_off_repo
        .list(query.employee_id, None, Some(dates[0]), Some(dates[6]))
        .await?;

    let rows: Vec<EmployeeWeekRow> = roster
        .into_iter()
        .map(|employee| {
            let days: Vec<DaySchedule> = dates
                .iter()
                .map(|&date| {
                    resolve(employee.id, date, &recurring, &specific, &time_off, week_start)
                })
                .collect();
            let total_hours = week_total_hours(&days);
            EmployeeWeekRow {
                employee,
                days,
                total_hours,
            }
        })
        .collect();

    let day_totals: Vec<DayTotal> = dates
        .iter()
        .enumerate()
        .map(|(i, &date)| {
            let column: Vec<DaySchedule> = rows.iter().map(|row| row.days[i].clone()).collect();
            DayTotal {
                date,
                hours: column.iter().map(total_hours).sum(),
                headcount: headcount(&column),
            }
        })
        .collect();

    let schedule = WeekSchedule {
        dates: dates.to_vec(),
        rows,
        day_totals,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(schedule)))
}
