use actix_web::{HttpResponse, Result as ActixResult};

use super::SystemService;
use crate::models::{ApiResponse, system::responses::HealthResponse};
use crate::runtime::AppContext;

pub async fn health(_service: &SystemService, ctx: &AppContext) -> ActixResult<HttpResponse> {
    let response = HealthResponse {
        status: "ok".to_string(),
        system_name: ctx.config.app.system_name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: ctx.config.app.environment.clone(),
        uptime_seconds: ctx.uptime_seconds(),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Service is healthy")))
}
