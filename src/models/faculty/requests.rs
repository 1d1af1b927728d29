use super::entities::FacultyStatus;
use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 教师查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/faculty.ts")]
pub struct FacultyListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub department: Option<String>,
    pub status: Option<FacultyStatus>,
    pub search: Option<String>,
}

// 教师创建请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/faculty.ts")]
pub struct CreateFacultyRequest {
    pub full_name: String,
    pub email: String,
    pub faculty_id: String,
    pub department: String,
    pub qualification: Option<String>,
    pub status: Option<FacultyStatus>,
}

// 教师更新请求
#[derive(Debug, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/faculty.ts")]
pub struct UpdateFacultyRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
    pub qualification: Option<String>,
    pub status: Option<FacultyStatus>,
}

// 教师列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct FacultyListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub department: Option<String>,
    pub status: Option<FacultyStatus>,
    pub search: Option<String>,
}

impl From<FacultyListParams> for FacultyListQuery {
    fn from(params: FacultyListParams) -> Self {
        Self {
            page: Some(params.pagination.page),
            size: Some(params.pagination.size),
            department: params.department,
            status: params.status,
            search: params.search,
        }
    }
}
