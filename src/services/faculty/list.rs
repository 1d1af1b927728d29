use actix_web::{HttpResponse, Result as ActixResult};

use super::FacultyService;
use crate::models::{
    ApiResponse, ErrorCode,
    faculty::requests::{FacultyListParams, FacultyListQuery},
};
use crate::runtime::AppContext;

pub async fn list_faculty(
    _service: &FacultyService,
    ctx: &AppContext,
    query: FacultyListParams,
) -> ActixResult<HttpResponse> {
    match ctx
        .storage
        .list_faculty_with_pagination(FacultyListQuery::from(query))
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Faculty list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve faculty list: {e}"),
            )),
        ),
    }
}
