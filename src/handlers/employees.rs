use actix_web::{web, HttpResponse};

use crate::database::models::EmployeeInput;
use crate::database::repositories::EmployeeRepository;
use crate::error::AppError;
use crate::handlers::shared::ApiResponse;

pub async fn create_employee(
    repo: web::Data<EmployeeRepository>,
    input: web::Json<EmployeeInput>,
) -> Result<HttpResponse, AppError> {
    let input = input.into_inner();
    if input.name.trim().is_empty() {
        return Err(AppError::BadRequest("Employee name is required".to_string()));
    }

    let employee = repo.create(input).await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(employee)))
}

pub async fn get_employees(repo: web::Data<EmployeeRepository>) -> Result<HttpResponse, AppError> {
    let employees = repo.list().await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(employees)))
}

pub async fn get_employee(
    repo: web::Data<EmployeeRepository>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let employee = repo
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Employee {} not found", id)))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(employee)))
}

pub async fn update_employee(
    repo: web::Data<EmployeeRepository>,
    path: web::Path<i64>,
    input: web::Json<EmployeeInput>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let input = input.into_inner();
    if input.name.trim().is_empty() {
        return Err(AppError::BadRequest("Employee name is required".to_string()));
    }

    let employee = repo
        .update(id, input)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Employee {} not found", id)))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(employee)))
}

pub async fn delete_employee(
    repo: web::Data<EmployeeRepository>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    if !repo.delete(id).await? {
        return Err(AppError::NotFound(format!("Employee {} not found", id)));
    }

    Ok(HttpResponse::NoContent().finish())
}
