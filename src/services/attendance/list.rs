use actix_web::{HttpResponse, Result as ActixResult};

use super::AttendanceService;
use crate::models::{
    ApiResponse, ErrorCode,
    attendance::{requests::AttendanceListQuery, responses::AttendanceListResponse},
};
use crate::runtime::AppContext;

pub async fn list_attendance(
    _service: &AttendanceService,
    ctx: &AppContext,
    query: AttendanceListQuery,
) -> ActixResult<HttpResponse> {
    match ctx.storage.list_attendance(query).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AttendanceListResponse { items },
            "Attendance retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve attendance: {e}"),
            )),
        ),
    }
}
