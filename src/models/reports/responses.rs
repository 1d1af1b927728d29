use serde::Serialize;
use ts_rs::TS;

use super::entities::{ReportStatistic, ReportType};

/// 报表汇总
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct ReportSummary {
    pub total_rows: usize,
    pub statistic: ReportStatistic,
}

/// 报表（预览与导出共用）
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct Report {
    pub report_type: ReportType,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub summary: ReportSummary,
}
