use actix_web::{HttpResponse, Result as ActixResult};

use super::FacultyService;
use crate::models::{ApiResponse, ErrorCode, faculty::requests::UpdateFacultyRequest};
use crate::runtime::AppContext;
use crate::utils::validate::validate_email;

pub async fn update_faculty(
    _service: &FacultyService,
    ctx: &AppContext,
    id: i64,
    update_data: UpdateFacultyRequest,
) -> ActixResult<HttpResponse> {
    if let Some(email) = &update_data.email
        && let Err(msg) = validate_email(email)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::FacultyInvalid, msg)));
    }

    match ctx.storage.update_faculty(id, update_data).await {
        Ok(Some(faculty)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            faculty,
            "Faculty member updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::FacultyNotFound,
            "Faculty member not found",
        ))),
        Err(e) => Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::FacultyInvalid,
            format!("Failed to update faculty member: {e}"),
        ))),
    }
}
