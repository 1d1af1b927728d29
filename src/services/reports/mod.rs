//! 报表：关联、过滤、统计与 CSV 导出

pub mod aggregator;
pub mod export;
pub mod filters;
pub mod view;

use actix_web::{HttpResponse, Result as ActixResult};

use crate::models::reports::requests::ReportQuery;
use crate::runtime::AppContext;

pub struct ReportService;

impl ReportService {
    pub fn new_lazy() -> Self {
        Self
    }

    // 报表预览
    pub async fn preview_report(
        &self,
        ctx: &AppContext,
        report_type: &str,
        query: ReportQuery,
    ) -> ActixResult<HttpResponse> {
        view::preview_report(self, ctx, report_type, query).await
    }

    // 报表导出
    pub async fn export_report(
        &self,
        ctx: &AppContext,
        report_type: &str,
        query: ReportQuery,
    ) -> ActixResult<HttpResponse> {
        view::export_report(self, ctx, report_type, query).await
    }
}
