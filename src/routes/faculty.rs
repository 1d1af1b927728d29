use actix_web::{HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::faculty::requests::{
    CreateFacultyRequest, FacultyListParams, UpdateFacultyRequest,
};
use crate::runtime::AppContext;
use crate::services::FacultyService;

static FACULTY_SERVICE: Lazy<FacultyService> = Lazy::new(FacultyService::new_lazy);

pub async fn list_faculty(
    ctx: web::Data<AppContext>,
    query: web::Query<FacultyListParams>,
) -> ActixResult<HttpResponse> {
    FACULTY_SERVICE.list_faculty(&ctx, query.into_inner()).await
}

pub async fn create_faculty(
    ctx: web::Data<AppContext>,
    faculty_data: web::Json<CreateFacultyRequest>,
) -> ActixResult<HttpResponse> {
    FACULTY_SERVICE
        .create_faculty(&ctx, faculty_data.into_inner())
        .await
}

pub async fn update_faculty(
    ctx: web::Data<AppContext>,
    id: web::Path<i64>,
    update_data: web::Json<UpdateFacultyRequest>,
) -> ActixResult<HttpResponse> {
    FACULTY_SERVICE
        .update_faculty(&ctx, id.into_inner(), update_data.into_inner())
        .await
}

pub async fn delete_faculty(
    ctx: web::Data<AppContext>,
    id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    FACULTY_SERVICE.delete_faculty(&ctx, id.into_inner()).await
}

pub fn configure_faculty_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/faculty")
            .route("", web::get().to(list_faculty))
            .route("", web::post().to(create_faculty))
            .route("/{id}", web::put().to(update_faculty))
            .route("/{id}", web::delete().to(delete_faculty)),
    );
}
