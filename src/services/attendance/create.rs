use actix_web::{HttpResponse, Result as ActixResult};
use tracing::error;

use super::AttendanceService;
use crate::models::{ApiResponse, ErrorCode, attendance::requests::CreateAttendanceRequest};
use crate::runtime::AppContext;
use crate::services::references::check_student_and_course;
use crate::utils::is_unique_violation;

pub async fn create_attendance(
    _service: &AttendanceService,
    ctx: &AppContext,
    attendance_data: CreateAttendanceRequest,
) -> ActixResult<HttpResponse> {
    if let Err(response) = check_student_and_course(
        ctx.storage.as_ref(),
        attendance_data.student_id,
        attendance_data.course_id,
    )
    .await
    {
        return Ok(response);
    }

    match ctx.storage.create_attendance(attendance_data).await {
        Ok(record) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(record, "Attendance recorded"))),
        Err(e) => {
            let msg = format!("Attendance creation failed: {e}");
            error!("{}", msg);
            // 同一学生同一课程同一天只有一条
            if is_unique_violation(&msg) {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::Conflict,
                    "Attendance already recorded for this date",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
            }
        }
    }
}
