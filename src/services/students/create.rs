use actix_web::{HttpResponse, Result as ActixResult};
use tracing::error;

use super::StudentService;
use crate::models::{ApiResponse, ErrorCode, students::requests::CreateStudentRequest};
use crate::runtime::AppContext;
use crate::utils::is_unique_violation;
use crate::utils::validate::validate_email;

pub async fn create_student(
    _service: &StudentService,
    ctx: &AppContext,
    student_data: CreateStudentRequest,
) -> ActixResult<HttpResponse> {
    if student_data.full_name.trim().is_empty() || student_data.student_id.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::StudentInvalid,
            "full_name and student_id are required",
        )));
    }

    if let Err(msg) = validate_email(&student_data.email) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::StudentInvalid, msg)));
    }

    match ctx.storage.create_student(student_data).await {
        Ok(student) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(student, "Student created")))
        }
        Err(e) => {
            let msg = format!("Student creation failed: {e}");
            error!("{}", msg);
            if is_unique_violation(&msg) {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::StudentAlreadyExists,
                    "Student ID already exists",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
            }
        }
    }
}
