use actix_cors::Cors;
use actix_web::{get, middleware::Logger, web, App, HttpResponse, HttpServer, Responder};
use anyhow::Result;

use rosterd::database::{
    init_database,
    repositories::{
        EmployeeRepository, RecurringShiftRepository, SpecificShiftRepository, TimeOffRepository,
    },
};
use rosterd::handlers::{employees, recurring, schedule, shifts, time_off};
use rosterd::middleware::RequestId;
use rosterd::Config;

#[get("/")]
async fn hello() -> impl Responder {
    HttpResponse::Ok().body("Rosterd API v1.0")
}

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "timestamp": chrono::Utc::now()
    }))
}

#[actix_web::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env()?;
    log::info!(
        "Configuration loaded (environment: {}, week starts on {})",
        config.environment,
        config.week_start()
    );

    let pool = init_database(&config.database_url).await?;
    log::info!("Database initialized");

    let employee_repository = EmployeeRepository::new(pool.clone());
    let recurring_shift_repository = RecurringShiftRepository::new(pool.clone());
    let specific_shift_repository = SpecificShiftRepository::new(pool.clone());
    let time_off_repository = TimeOffRepository::new(pool.clone());

    let employee_repo_data = web::Data::new(employee_repository);
    let recurring_repo_data = web::Data::new(recurring_shift_repository);
    let specific_repo_data = web::Data::new(specific_shift_repository);
    let time_off_repo_data = web::Data::new(time_off_repository);
    let config_data = web::Data::new(config.clone());

    let client_base_url = config.client_base_url.clone();
    let server_address = config.server_address();
    log::info!("Server starting on http://{}", server_address);

    HttpServer::new(move || {
        App::new()
            .app_data(employee_repo_data.clone())
            .app_data(recurring_repo_data.clone())
            .app_data(specific_repo_data.clone())
            .app_data(time_off_repo_data.clone())
            .app_data(config_data.clone())
            .wrap(
                Cors::default()
                    .allowed_origin(&client_base_url)
                    .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
                    .allowed_headers(vec![
                        "Authorization",
                        "Content-Type",
                        "Accept",
                        "X-Requested-With",
                        "X-Correlation-ID",
                    ])
                    .max_age(3600),
            )
            .wrap(RequestId)
            .wrap(Logger::new(
                r#"%a "%r" %s %b "%{Referer}i" "%{User-Agent}i" %T correlation_id=%{x-correlation-id}o"#,
            ))
            .service(hello)
            .service(health)
            .service(
                web::scope("/api/v1")
                    .service(
                        web::scope("/employees")
                            .route("", web::post().to(employees::create_employee))
                            .route("", web::get().to(employees::get_employees))
                            .route("/{id}", web::get().to(employees::get_employee))
                            .route("/{id}", web::put().to(employees::update_employee))
                            .route("/{id}", web::delete().to(employees::delete_employee))
                            .route(
                                "/{id}/recurring-shifts",
                                web::get().to(recurring::get_recurring_shifts),
                            )
                            .route(
                                "/{id}/recurring-shifts",
                                web::put().to(recurring::replace_recurring_shifts),
                            ),
                    )
                    .service(
                        web::scope("/shifts")
                            .route("", web::post().to(shifts::create_shift))
                            .route("", web::get().to(shifts::get_shifts))
                            .route("/{id}", web::get().to(shifts::get_shift))
                            .route("/{id}", web::put().to(shifts::update_shift))
                            .route("/{id}", web::delete().to(shifts::delete_shift)),
                    )
                    .service(
                        web::scope("/time-off")
                            .route("", web::post().to(time_off::create_time_off_request))
                            .route("", web::get().to(time_off::get_time_off_requests))
                            .route("/{id}", web::get().to(time_off::get_time_off_request))
                            .route("/{id}", web::put().to(time_off::update_time_off_request))
                            .route("/{id}", web::delete().to(time_off::delete_time_off_request))
                            .route(
                                "/{id}/approve",
                                web::post().to(time_off::approve_time_off_request),
                            )
                            .route(
                                "/{id}/decline",
                                web::post().to(time_off::decline_time_off_request),
                            ),
                    )
                    .service(
                        web::scope("/schedule")
                            .route("/week", web::get().to(schedule::get_week_schedule)),
                    ),
            )
    })
    .bind(&server_address)?
    .run()
    .await
    .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
