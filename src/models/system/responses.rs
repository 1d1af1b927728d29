use serde::Serialize;
use ts_rs::TS;

/// 健康检查响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/system.ts")]
pub struct HealthResponse {
    pub status: String,
    pub system_name: String,
    pub version: String,
    pub environment: String,
    pub uptime_seconds: i64,
}

/// 前端需要的导入与报表设置
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/system.ts")]
pub struct PortalSettingsResponse {
    pub import_max_rows: usize,
    pub import_max_file_size: usize,
    pub course_credit_min: i32,
    pub course_credit_max: i32,
    pub unparseable_dates: crate::models::reports::entities::UnparseableDatePolicy,
}
