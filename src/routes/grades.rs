use actix_web::{HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::grades::requests::{CreateGradeRequest, GradeListQuery};
use crate::runtime::AppContext;
use crate::services::GradeService;

static GRADE_SERVICE: Lazy<GradeService> = Lazy::new(GradeService::new_lazy);

pub async fn list_grades(
    ctx: web::Data<AppContext>,
    query: web::Query<GradeListQuery>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.list_grades(&ctx, query.into_inner()).await
}

pub async fn create_grade(
    ctx: web::Data<AppContext>,
    grade_data: web::Json<CreateGradeRequest>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.create_grade(&ctx, grade_data.into_inner()).await
}

pub async fn delete_grade(
    ctx: web::Data<AppContext>,
    id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.delete_grade(&ctx, id.into_inner()).await
}

pub fn configure_grade_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/grades")
            .route("", web::get().to(list_grades))
            .route("", web::post().to(create_grade))
            .route("/{id}", web::delete().to(delete_grade)),
    );
}
