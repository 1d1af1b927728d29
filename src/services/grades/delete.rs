use actix_web::{HttpResponse, Result as ActixResult};

use super::GradeService;
use crate::models::{ApiResponse, ErrorCode};
use crate::runtime::AppContext;

pub async fn delete_grade(
    _service: &GradeService,
    ctx: &AppContext,
    id: i64,
) -> ActixResult<HttpResponse> {
    match ctx.storage.delete_grade(id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Grade deleted"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::GradeNotFound,
            "Grade not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Grade deletion failed: {e}"),
            )),
        ),
    }
}
