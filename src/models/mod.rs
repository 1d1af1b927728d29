//! 数据模型定义
//!
//! 业务实体、请求与响应结构，与 `entity` 中的数据库模型分离。

pub mod attendance;
pub mod common;
pub mod courses;
pub mod enrollments;
pub mod faculty;
pub mod grades;
pub mod imports;
pub mod reports;
pub mod students;
pub mod system;

pub use common::{ApiResponse, PaginationInfo, PaginationQuery};

/// API 业务错误码
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误
    BadRequest = 1000,
    Conflict = 1001,
    InternalServerError = 1002,

    // 学生
    StudentNotFound = 2000,
    StudentInvalid = 2001,
    StudentAlreadyExists = 2002,

    // 教师
    FacultyNotFound = 2100,
    FacultyInvalid = 2101,
    FacultyAlreadyExists = 2102,

    // 课程
    CourseNotFound = 2200,
    CourseInvalid = 2201,
    CourseAlreadyExists = 2202,

    // 选课 / 考勤 / 成绩
    EnrollmentNotFound = 2301,
    AttendanceNotFound = 2401,
    GradeInvalid = 2500,
    GradeNotFound = 2501,

    // 导入
    FileUploadFailed = 3000,
    ImportFileParseFailed = 3001,
    ImportFileMissingColumn = 3002,
    ImportFileDataInvalid = 3003,
    ImportEntityUnsupported = 3004,

    // 报表
    ReportTypeInvalid = 4000,
    ReportFilterInvalid = 4001,
    ReportExportFailed = 4002,
}

/// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
