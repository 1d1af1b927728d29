use serde::Deserialize;
use ts_rs::TS;

use super::entities::ReportFilter;

// 报表查询参数
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct ReportQuery {
    pub from: Option<chrono::NaiveDate>,
    pub to: Option<chrono::NaiveDate>,
    pub department: Option<String>,
}

impl ReportQuery {
    /// 校验日期区间并转换为过滤条件
    pub fn into_filter(self) -> Result<ReportFilter, String> {
        if let (Some(from), Some(to)) = (self.from, self.to)
            && from > to
        {
            return Err(format!("'from' ({from}) must not be after 'to' ({to})"));
        }
        Ok(ReportFilter {
            from: self.from,
            to: self.to,
            department: self
                .department
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_inverted_range_rejected() {
        let query = ReportQuery {
            from: NaiveDate::from_ymd_opt(2025, 2, 1),
            to: NaiveDate::from_ymd_opt(2025, 1, 1),
            department: None,
        };
        assert!(query.into_filter().is_err());
    }

    #[test]
    fn test_blank_department_dropped() {
        let query = ReportQuery {
            department: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(query.into_filter().unwrap().department, None);
    }
}
