use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::database::models::SpecificShiftInput;
use crate::database::repositories::{EmployeeRepository, SpecificShiftRepository};
use crate::error::AppError;
use crate::handlers::shared::ApiResponse;
use crate::scheduling::{validate_specific_shift, ShiftInterval};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftsQuery {
    pub employee_id: Option<i64>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Create a one-off shift. Creation never reuses an existing row: if the
/// proposed interval collides with one already on that day, the write is
/// rejected with the colliding id and the editor must target it explicitly.
pub async fn create_shift(
    repo: web::Data<SpecificShiftRepository>,
    employees: web::Data<EmployeeRepository>,
    input: web::Json<SpecificShiftInput>,
) -> Result<HttpResponse, AppError> {
    let input = input.into_inner();

    employees
        .get_by_id(input.employee_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Employee {} not found", input.employee_id)))?;

    let proposed = ShiftInterval {
        start: input.start_time,
        end: input.end_time,
    };

    let existing = repo
        .list_for_day(input.employee_id, input.start_time.date())
        .await?;
    validate_specific_shift(input.employee_id, &proposed, None, &existing)?;

    let shift = repo.create(input).await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(shift)))
}

pub async fn get_shifts(
    repo: web::Data<SpecificShiftRepository>,
    query: web::Query<ShiftsQuery>,
) -> Result<HttpResponse, AppError> {
    if query.end_date < query.start_date {
        return Err(AppError::BadRequest(
            "endDate must not precede startDate".to_string(),
        ));
    }

    let shifts = repo
        .list(query.employee_id, query.start_date, query.end_date)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(shifts)))
}

pub async fn get_shift(
    repo: web::Data<SpecificShiftRepository>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let shift = repo
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Shift {} not found", id)))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(shift)))
}

/// Edit an existing shift by id. The id pins which row the editor means, so
/// an update can never silently land on some other same-day row.
pub async fn update_shift(
    repo: web::Data<SpecificShiftRepository>,
    path: web::Path<i64>,
    input: web::Json<SpecificShiftInput>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let input = input.into_inner();

    repo.get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Shift {} not found", id)))?;

    let proposed = ShiftInterval {
        start: input.start_time,
        end: input.end_time,
    };
    let existing = repo
        .list_for_day(input.employee_id, input.start_time.date())
        .await?;
    validate_specific_shift(input.employee_id, &proposed, Some(id), &existing)?;

    let shift = repo
        .update(id, input)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Shift {} not found", id)))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(shift)))
}

/// Delete a one-off shift; the day falls back to the recurring pattern.
pub async fn delete_shift(
    repo: web::Data<SpecificShiftRepository>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    if !repo.delete(id).await? {
        return Err(AppError::NotFound(format!("Shift {} not found", id)));
    }

    Ok(HttpResponse::NoContent().finish())
}
