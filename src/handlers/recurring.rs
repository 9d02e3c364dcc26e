use actix_web::{web, HttpResponse};

use crate::database::models::RecurringShiftInput;
use crate::database::repositories::{EmployeeRepository, RecurringShiftRepository};
use crate::error::AppError;
use crate::handlers::shared::ApiResponse;
use crate::scheduling::validate_recurring_pattern;

pub async fn get_recurring_shifts(
    repo: web::Data<RecurringShiftRepository>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let employee_id = path.into_inner();
    let shifts = repo.list(Some(employee_id)).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(shifts)))
}

/// Replace an employee's entire weekly pattern. The swap is one transaction:
/// if anything fails the prior pattern is untouched and the caller can
/// simply retry.
pub async fn replace_recurring_shifts(
    repo: web::Data<RecurringShiftRepository>,
    employees: web::Data<EmployeeRepository>,
    path: web::Path<i64>,
    input: web::Json<Vec<RecurringShiftInput>>,
) -> Result<HttpResponse, AppError> {
    let employee_id = path.into_inner();
    let pattern = input.into_inner();

    employees
        .get_by_id(employee_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Employee {} not found", employee_id)))?;

    validate_recurring_pattern(&pattern)?;

    let inserted = repo.replace_pattern(employee_id, &pattern).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(inserted)))
}
