use actix_web::{HttpResponse, Result as ActixResult};

use super::EnrollmentService;
use crate::models::{ApiResponse, ErrorCode};
use crate::runtime::AppContext;

pub async fn delete_enrollment(
    _service: &EnrollmentService,
    ctx: &AppContext,
    id: i64,
) -> ActixResult<HttpResponse> {
    match ctx.storage.delete_enrollment(id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Enrollment deleted"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::EnrollmentNotFound,
            "Enrollment not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Enrollment deletion failed: {e}"),
            )),
        ),
    }
}
