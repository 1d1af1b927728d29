use actix_web::{HttpResponse, Result as ActixResult};

use super::GradeService;
use crate::models::{
    ApiResponse, ErrorCode,
    grades::{requests::GradeListQuery, responses::GradeListResponse},
};
use crate::runtime::AppContext;

pub async fn list_grades(
    _service: &GradeService,
    ctx: &AppContext,
    query: GradeListQuery,
) -> ActixResult<HttpResponse> {
    match ctx.storage.list_grades(query).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            GradeListResponse { items },
            "Grades retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve grades: {e}"),
            )),
        ),
    }
}
