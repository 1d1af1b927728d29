use actix_web::{HttpResponse, Result as ActixResult, middleware, web};
use once_cell::sync::Lazy;

use crate::models::reports::requests::ReportQuery;
use crate::runtime::AppContext;
use crate::services::ReportService;

static REPORT_SERVICE: Lazy<ReportService> = Lazy::new(ReportService::new_lazy);

pub async fn preview_report(
    ctx: web::Data<AppContext>,
    report_type: web::Path<String>,
    query: web::Query<ReportQuery>,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE
        .preview_report(&ctx, &report_type, query.into_inner())
        .await
}

pub async fn export_report(
    ctx: web::Data<AppContext>,
    report_type: web::Path<String>,
    query: web::Query<ReportQuery>,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE
        .export_report(&ctx, &report_type, query.into_inner())
        .await
}

pub fn configure_report_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/reports")
            .wrap(middleware::Compress::default())
            .route("/{report_type}", web::get().to(preview_report))
            .route("/{report_type}/export", web::get().to(export_report)),
    );
}
