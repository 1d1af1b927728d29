use actix_web::{HttpResponse, Result as ActixResult};

use super::AttendanceService;
use crate::models::{ApiResponse, ErrorCode};
use crate::runtime::AppContext;

pub async fn delete_attendance(
    _service: &AttendanceService,
    ctx: &AppContext,
    id: i64,
) -> ActixResult<HttpResponse> {
    match ctx.storage.delete_attendance(id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Attendance deleted"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AttendanceNotFound,
            "Attendance record not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Attendance deletion failed: {e}"),
            )),
        ),
    }
}
