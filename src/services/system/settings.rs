use actix_web::{HttpResponse, Result as ActixResult};

use super::SystemService;
use crate::models::{ApiResponse, system::responses::PortalSettingsResponse};
use crate::runtime::AppContext;

/// 获取导入与报表设置（只读）
pub async fn get_settings(_service: &SystemService, ctx: &AppContext) -> ActixResult<HttpResponse> {
    let import = &ctx.config.import;

    let response = PortalSettingsResponse {
        import_max_rows: import.max_rows,
        import_max_file_size: import.max_file_size,
        course_credit_min: import.course_credit_min,
        course_credit_max: import.course_credit_max,
        unparseable_dates: ctx.config.report.unparseable_dates,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "Settings retrieved successfully",
    )))
}
