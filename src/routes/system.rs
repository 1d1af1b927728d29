use actix_web::{HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::runtime::AppContext;
use crate::services::SystemService;

// 懒加载的全局 SystemService 实例
static SYSTEM_SERVICE: Lazy<SystemService> = Lazy::new(SystemService::new_lazy);

pub async fn health(ctx: web::Data<AppContext>) -> ActixResult<HttpResponse> {
    SYSTEM_SERVICE.health(&ctx).await
}

pub async fn get_settings(ctx: web::Data<AppContext>) -> ActixResult<HttpResponse> {
    SYSTEM_SERVICE.get_settings(&ctx).await
}

pub fn configure_system_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/system")
            .route("/health", web::get().to(health))
            .route("/settings", web::get().to(get_settings)),
    );
}
