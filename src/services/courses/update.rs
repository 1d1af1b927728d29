use actix_web::{HttpResponse, Result as ActixResult};

use super::{CourseService, check_course_numbers, check_faculty_ref};
use crate::models::{ApiResponse, ErrorCode, courses::requests::UpdateCourseRequest};
use crate::runtime::AppContext;

pub async fn update_course(
    _service: &CourseService,
    ctx: &AppContext,
    id: i64,
    update_data: UpdateCourseRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) =
        check_course_numbers(update_data.credits, update_data.semester, &ctx.config.import)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::CourseInvalid, msg)));
    }

    if let Err(msg) = check_faculty_ref(ctx.storage.as_ref(), update_data.faculty_id).await {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::FacultyNotFound, msg)));
    }

    match ctx.storage.update_course(id, update_data).await {
        Ok(Some(course)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            course,
            "Course updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CourseNotFound,
            "Course not found",
        ))),
        Err(e) => Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::CourseInvalid,
            format!("Failed to update course: {e}"),
        ))),
    }
}
