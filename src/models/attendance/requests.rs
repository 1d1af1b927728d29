use super::entities::AttendanceStatus;
use serde::Deserialize;
use ts_rs::TS;

// 考勤查询参数
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceListQuery {
    pub student_id: Option<i64>,
    pub course_id: Option<i64>,
    pub status: Option<AttendanceStatus>,
}

// 考勤创建请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct CreateAttendanceRequest {
    pub student_id: i64,
    pub course_id: i64,
    pub date: chrono::NaiveDate,
    pub status: AttendanceStatus,
    pub remarks: Option<String>,
}
