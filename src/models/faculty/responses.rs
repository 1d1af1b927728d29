use super::entities::Faculty;
use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

// 教师列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/faculty.ts")]
pub struct FacultyListResponse {
    pub items: Vec<Faculty>,
    pub pagination: PaginationInfo,
}
