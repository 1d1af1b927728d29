use super::entities::CourseStatus;
use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 课程查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CourseListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub department: Option<String>,
    pub faculty_id: Option<i64>,
    pub status: Option<CourseStatus>,
    pub search: Option<String>,
}

// 课程创建请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CreateCourseRequest {
    pub course_code: String,
    pub course_name: String,
    pub credits: i32,
    pub department: String,
    pub semester: i32,
    pub faculty_id: Option<i64>,
    pub status: Option<CourseStatus>,
}

// 课程更新请求
#[derive(Debug, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct UpdateCourseRequest {
    pub course_name: Option<String>,
    pub credits: Option<i32>,
    pub department: Option<String>,
    pub semester: Option<i32>,
    pub faculty_id: Option<i64>,
    pub status: Option<CourseStatus>,
}

// 课程列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct CourseListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub department: Option<String>,
    pub faculty_id: Option<i64>,
    pub status: Option<CourseStatus>,
    pub search: Option<String>,
}

impl From<CourseListParams> for CourseListQuery {
    fn from(params: CourseListParams) -> Self {
        Self {
            page: Some(params.pagination.page),
            size: Some(params.pagination.size),
            department: params.department,
            faculty_id: params.faculty_id,
            status: params.status,
            search: params.search,
        }
    }
}
