use actix_web::{HttpResponse, Result as ActixResult};
use tracing::error;

use super::EnrollmentService;
use crate::models::{ApiResponse, ErrorCode, enrollments::requests::CreateEnrollmentRequest};
use crate::runtime::AppContext;
use crate::services::references::check_student_and_course;
use crate::utils::is_unique_violation;

pub async fn create_enrollment(
    _service: &EnrollmentService,
    ctx: &AppContext,
    enrollment_data: CreateEnrollmentRequest,
) -> ActixResult<HttpResponse> {
    if let Err(response) = check_student_and_course(
        ctx.storage.as_ref(),
        enrollment_data.student_id,
        enrollment_data.course_id,
    )
    .await
    {
        return Ok(response);
    }

    match ctx.storage.create_enrollment(enrollment_data).await {
        Ok(enrollment) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(enrollment, "Enrollment created"))),
        Err(e) => {
            let msg = format!("Enrollment creation failed: {e}");
            error!("{}", msg);
            if is_unique_violation(&msg) {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::Conflict,
                    "Student is already enrolled in this course",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
            }
        }
    }
}
