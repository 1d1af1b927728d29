use actix_web::{HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::enrollments::requests::{
    CreateEnrollmentRequest, EnrollmentListQuery, UpdateEnrollmentRequest,
};
use crate::runtime::AppContext;
use crate::services::EnrollmentService;

static ENROLLMENT_SERVICE: Lazy<EnrollmentService> = Lazy::new(EnrollmentService::new_lazy);

pub async fn list_enrollments(
    ctx: web::Data<AppContext>,
    query: web::Query<EnrollmentListQuery>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .list_enrollments(&ctx, query.into_inner())
        .await
}

pub async fn create_enrollment(
    ctx: web::Data<AppContext>,
    enrollment_data: web::Json<CreateEnrollmentRequest>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .create_enrollment(&ctx, enrollment_data.into_inner())
        .await
}

pub async fn update_enrollment(
    ctx: web::Data<AppContext>,
    id: web::Path<i64>,
    update_data: web::Json<UpdateEnrollmentRequest>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .update_enrollment(&ctx, id.into_inner(), update_data.into_inner())
        .await
}

pub async fn delete_enrollment(
    ctx: web::Data<AppContext>,
    id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .delete_enrollment(&ctx, id.into_inner())
        .await
}

pub fn configure_enrollment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/enrollments")
            .route("", web::get().to(list_enrollments))
            .route("", web::post().to(create_enrollment))
            .route("/{id}", web::put().to(update_enrollment))
            .route("/{id}", web::delete().to(delete_enrollment)),
    );
}
