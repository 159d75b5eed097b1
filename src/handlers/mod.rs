pub mod employee;

use actix_web::{web, HttpResponse};
use serde_json::json;
use crate::errors::AppError;

pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

/// Mounts the employee API under `/api/v1/employee`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::BadRequest(err.to_string()).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _req| {
        AppError::BadRequest(err.to_string()).into()
    }))
    .route("/health", web::get().to(health))
    .service(
        web::scope("/api/v1/employee")
            .route("/list", web::get().to(employee::list_employees))
            .route("/add", web::post().to(employee::add_employee))
            .route("/update/{id}", web::put().to(employee::update_employee))
            .route("/delete/{id}", web::delete().to(employee::delete_employee))
            .route("/filter/by-position/{position}", web::get().to(employee::filter_by_position))
            .route("/filter/by-age/{min_age}/{max_age}", web::get().to(employee::filter_by_age))
            .route("/filter/without-annual-leave", web::get().to(employee::list_without_annual_leave))
            .route("/apply-for-annual-leave/{id}", web::put().to(employee::apply_for_annual_leave))
            .route("/promote/{employee_id}", web::put().to(employee::promote_employee)),
    );
}
