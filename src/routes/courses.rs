use actix_web::{HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::courses::requests::{CourseListParams, CreateCourseRequest, UpdateCourseRequest};
use crate::runtime::AppContext;
use crate::services::CourseService;

static COURSE_SERVICE: Lazy<CourseService> = Lazy::new(CourseService::new_lazy);

pub async fn list_courses(
    ctx: web::Data<AppContext>,
    query: web::Query<CourseListParams>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.list_courses(&ctx, query.into_inner()).await
}

pub async fn create_course(
    ctx: web::Data<AppContext>,
    course_data: web::Json<CreateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .create_course(&ctx, course_data.into_inner())
        .await
}

pub async fn update_course(
    ctx: web::Data<AppContext>,
    id: web::Path<i64>,
    update_data: web::Json<UpdateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .update_course(&ctx, id.into_inner(), update_data.into_inner())
        .await
}

pub async fn delete_course(
    ctx: web::Data<AppContext>,
    id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.delete_course(&ctx, id.into_inner()).await
}

pub fn configure_course_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/courses")
            .route("", web::get().to(list_courses))
            .route("", web::post().to(create_course))
            .route("/{id}", web::put().to(update_course))
            .route("/{id}", web::delete().to(delete_course)),
    );
}
