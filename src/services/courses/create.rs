use actix_web::{HttpResponse, Result as ActixResult};
use tracing::error;

use super::{CourseService, check_course_numbers, check_faculty_ref};
use crate::models::{ApiResponse, ErrorCode, courses::requests::CreateCourseRequest};
use crate::runtime::AppContext;
use crate::utils::is_unique_violation;

pub async fn create_course(
    _service: &CourseService,
    ctx: &AppContext,
    course_data: CreateCourseRequest,
) -> ActixResult<HttpResponse> {
    if course_data.course_code.trim().is_empty()
        || course_data.course_name.trim().is_empty()
        || course_data.department.trim().is_empty()
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::CourseInvalid,
            "course_code, course_name and department are required",
        )));
    }

    if let Err(msg) = check_course_numbers(
        Some(course_data.credits),
        Some(course_data.semester),
        &ctx.config.import,
    ) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::CourseInvalid, msg)));
    }

    if let Err(msg) = check_faculty_ref(ctx.storage.as_ref(), course_data.faculty_id).await {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::FacultyNotFound, msg)));
    }

    match ctx.storage.create_course(course_data).await {
        Ok(course) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(course, "Course created")))
        }
        Err(e) => {
            let msg = format!("Course creation failed: {e}");
            error!("{}", msg);
            if is_unique_violation(&msg) {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::CourseAlreadyExists,
                    "Course code already exists",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
            }
        }
    }
}
