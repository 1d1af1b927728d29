use actix_web::{HttpResponse, Result as ActixResult};
use tracing::error;

use super::GradeService;
use crate::models::grades::entities::check_marks;
use crate::models::{ApiResponse, ErrorCode, grades::requests::CreateGradeRequest};
use crate::runtime::AppContext;
use crate::services::references::check_student_and_course;

pub async fn create_grade(
    _service: &GradeService,
    ctx: &AppContext,
    grade_data: CreateGradeRequest,
) -> ActixResult<HttpResponse> {
    if grade_data.assessment_name.trim().is_empty() || grade_data.assessment_type.trim().is_empty()
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::GradeInvalid,
            "assessment_name and assessment_type are required",
        )));
    }

    if let Err(msg) = check_marks(grade_data.obtained_marks, grade_data.max_marks) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::GradeInvalid, msg)));
    }

    if let Err(response) = check_student_and_course(
        ctx.storage.as_ref(),
        grade_data.student_id,
        grade_data.course_id,
    )
    .await
    {
        return Ok(response);
    }

    match ctx.storage.create_grade(grade_data).await {
        Ok(grade) => Ok(HttpResponse::Created().json(ApiResponse::success(grade, "Grade recorded"))),
        Err(e) => {
            error!("Grade creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Grade creation failed: {e}"),
                )),
            )
        }
    }
}
