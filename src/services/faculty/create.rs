use actix_web::{HttpResponse, Result as ActixResult};
use tracing::error;

use super::FacultyService;
use crate::models::{ApiResponse, ErrorCode, faculty::requests::CreateFacultyRequest};
use crate::runtime::AppContext;
use crate::utils::is_unique_violation;
use crate::utils::validate::validate_email;

pub async fn create_faculty(
    _service: &FacultyService,
    ctx: &AppContext,
    faculty_data: CreateFacultyRequest,
) -> ActixResult<HttpResponse> {
    if faculty_data.full_name.trim().is_empty()
        || faculty_data.faculty_id.trim().is_empty()
        || faculty_data.department.trim().is_empty()
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::FacultyInvalid,
            "full_name, faculty_id and department are required",
        )));
    }

    if let Err(msg) = validate_email(&faculty_data.email) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::FacultyInvalid, msg)));
    }

    match ctx.storage.create_faculty(faculty_data).await {
        Ok(faculty) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(faculty, "Faculty member created"))),
        Err(e) => {
            let msg = format!("Faculty creation failed: {e}");
            error!("{}", msg);
            if is_unique_violation(&msg) {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::FacultyAlreadyExists,
                    "Faculty ID already exists",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
            }
        }
    }
}
