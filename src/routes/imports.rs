use actix_multipart::Multipart;
use actix_web::{HttpResponse, Result as ActixResult, middleware, web};
use once_cell::sync::Lazy;

use crate::models::imports::requests::GradeImportParams;
use crate::runtime::AppContext;
use crate::services::ImportService;

static IMPORT_SERVICE: Lazy<ImportService> = Lazy::new(ImportService::new_lazy);

pub async fn import_entity(
    ctx: web::Data<AppContext>,
    entity_type: web::Path<String>,
    payload: Multipart,
) -> ActixResult<HttpResponse> {
    IMPORT_SERVICE
        .import_entity(&ctx, &entity_type, payload)
        .await
}

pub async fn import_grades(
    ctx: web::Data<AppContext>,
    course_id: web::Path<i64>,
    params: web::Query<GradeImportParams>,
    payload: Multipart,
) -> ActixResult<HttpResponse> {
    IMPORT_SERVICE
        .import_grades(&ctx, course_id.into_inner(), params.into_inner(), payload)
        .await
}

pub async fn download_template(entity_type: web::Path<String>) -> ActixResult<HttpResponse> {
    IMPORT_SERVICE.download_template(&entity_type).await
}

// 配置路由（成绩导入需先于通用实体导入注册）
pub fn configure_import_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/imports")
            .wrap(middleware::Compress::default())
            .route("/grades/{course_id}", web::post().to(import_grades))
            .route("/{entity_type}", web::post().to(import_entity))
            .route("/{entity_type}/template", web::get().to(download_template)),
    );
}
