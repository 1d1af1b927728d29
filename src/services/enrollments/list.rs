use actix_web::{HttpResponse, Result as ActixResult};

use super::EnrollmentService;
use crate::models::{
    ApiResponse, ErrorCode,
    enrollments::{requests::EnrollmentListQuery, responses::EnrollmentListResponse},
};
use crate::runtime::AppContext;

pub async fn list_enrollments(
    _service: &EnrollmentService,
    ctx: &AppContext,
    query: EnrollmentListQuery,
) -> ActixResult<HttpResponse> {
    match ctx.storage.list_enrollments(query).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            EnrollmentListResponse { items },
            "Enrollment list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve enrollments: {e}"),
            )),
        ),
    }
}
