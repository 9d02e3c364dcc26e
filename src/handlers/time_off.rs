use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::database::models::{TimeOffRequestInput, TimeOffStatus};
use crate::database::repositories::{EmployeeRepository, TimeOffRepository};
use crate::error::AppError;
use crate::handlers::shared::ApiResponse;
use crate::scheduling::validate_time_off;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeOffQuery {
    pub employee_id: Option<i64>,
    pub status: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Create a time-off request. Overlap with another active request for the
/// same employee is rejected up front so contradictory leave can't be
/// entered twice.
pub async fn create_time_off_request(
    repo: web::Data<TimeOffRepository>,
    employees: web::Data<EmployeeRepository>,
    input: web::Json<TimeOffRequestInput>,
) -> Result<HttpResponse, AppError> {
    let input = input.into_inner();

    employees
        .get_by_id(input.employee_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Employee {} not found", input.employee_id)))?;

    let existing = repo
        .list(
            Some(input.employee_id),
            None,
            Some(input.start_date),
            Some(input.end_date),
        )
        .await?;
    validate_time_off(
        input.employee_id,
        input.start_date,
        input.end_date,
        None,
        &existing,
    )?;

    let request = repo.create(input).await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(request)))
}

pub async fn get_time_off_requests(
    repo: web::Data<TimeOffRepository>,
    query: web::Query<TimeOffQuery>,
) -> Result<HttpResponse, AppError> {
    let status = match &query.status {
        Some(raw) => Some(
            raw.parse::<TimeOffStatus>()
                .map_err(|_| AppError::BadRequest(format!("Invalid status: {}", raw)))?,
        ),
        None => None,
    };

    let requests = repo
        .list(query.employee_id, status, query.start_date, query.end_date)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(requests)))
}

pub async fn get_time_off_request(
    repo: web::Data<TimeOffRepository>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let request = repo
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Time-off request {} not found", id)))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(request)))
}

/// Update the dates/type/reason of a request. Only pending requests can
/// change; an approved or declined request is a settled decision.
pub async fn update_time_off_request(
    repo: web::Data<TimeOffRepository>,
    path: web::Path<i64>,
    input: web::Json<TimeOffRequestInput>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let input = input.into_inner();

    let existing_request = repo
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Time-off request {} not found", id)))?;

    if existing_request.status != TimeOffStatus::Pending {
        return Err(AppError::BadRequest(
            "Cannot update non-pending requests".to_string(),
        ));
    }

    // The row stays on its owner whatever the body claims, so a mismatched
    // employee id would dodge the overlap check against the real owner.
    if input.employee_id != existing_request.employee_id {
        return Err(AppError::BadRequest(
            "A request cannot be moved to another employee".to_string(),
        ));
    }

    let neighbours = repo
        .list(
            Some(input.employee_id),
            None,
            Some(input.start_date),
            Some(input.end_date),
        )
        .await?;
    validate_time_off(
        input.employee_id,
        input.start_date,
        input.end_date,
        Some(id),
        &neighbours,
    )?;

    let request = repo
        .update(id, input)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Time-off request {} not found", id)))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(request)))
}

pub async fn delete_time_off_request(
    repo: web::Data<TimeOffRepository>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let existing_request = repo
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Time-off request {} not found", id)))?;

    if existing_request.status != TimeOffStatus::Pending {
        return Err(AppError::BadRequest(
            "Cannot delete non-pending requests".to_string(),
        ));
    }

    repo.delete(id).await?;

    Ok(HttpResponse::NoContent().finish())
}

pub async fn approve_time_off_request(
    repo: web::Data<TimeOffRepository>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    update_status(repo, path.into_inner(), TimeOffStatus::Approved).await
}

pub async fn decline_time_off_request(
    repo: web::Data<TimeOffRepository>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    update_status(repo, path.into_inner(), TimeOffStatus::Declined).await
}

async fn update_status(
    repo: web::Data<TimeOffRepository>,
    id: i64,
    status: TimeOffStatus,
) -> Result<HttpResponse, AppError> {
    let request = repo
        .update_status(id, status)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Time-off request {} not found", id)))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(request)))
}
