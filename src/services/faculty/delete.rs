use actix_web::{HttpResponse, Result as ActixResult};

use super::FacultyService;
use crate::models::{ApiResponse, ErrorCode};
use crate::runtime::AppContext;

pub async fn delete_faculty(
    _service: &FacultyService,
    ctx: &AppContext,
    id: i64,
) -> ActixResult<HttpResponse> {
    match ctx.storage.delete_faculty(id).await {
        Ok(true) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Faculty member deleted")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::FacultyNotFound,
            "Faculty member not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Faculty deletion failed: {e}"),
            )),
        ),
    }
}
