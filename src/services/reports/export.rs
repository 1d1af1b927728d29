//! 报表 CSV 导出

use chrono::NaiveDate;
use csv::{QuoteStyle, WriterBuilder};

use crate::errors::{PortalError, Result};
use crate::models::reports::responses::Report;

/// 导出文件名：`<报表类型>_<实体类型>_<日期>.csv`
pub fn export_filename(report: &Report, today: NaiveDate) -> String {
    format!(
        "{}_{}_{}.csv",
        report.report_type,
        report.report_type.source_entity(),
        today.format("%Y-%m-%d")
    )
}

/// 表头 + 数据行，所有值加双引号
pub fn export_csv(report: &Report) -> Result<Vec<u8>> {
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(vec![]);

    wtr.write_record(&report.columns)?;
    for row in &report.rows {
        wtr.write_record(row)?;
    }

    wtr.into_inner()
        .map_err(|e| PortalError::csv_operation(format!("CSV 生成失败: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::reports::entities::{
        ReportFilter, ReportStatistic, ReportType, UnparseableDatePolicy,
    };
    use crate::models::reports::responses::ReportSummary;
    use crate::services::imports::parser::parse_table;
    use crate::services::reports::aggregator::{build_report, tests::sample_snapshot};

    #[test]
    fn test_every_value_is_quoted() {
        let report = Report {
            report_type: ReportType::Faculty,
            columns: vec!["full_name".into(), "qualification".into()],
            rows: vec![vec!["Smith, Alan".into(), "PhD \"hons\"".into()]],
            summary: ReportSummary {
                total_rows: 1,
                statistic: ReportStatistic::AssignedCourses { total: 0 },
            },
        };

        let text = String::from_utf8(export_csv(&report).unwrap()).unwrap();
        assert_eq!(
            text,
            "\"full_name\",\"qualification\"\n\"Smith, Alan\",\"PhD \"\"hons\"\"\"\n"
        );
    }

    #[test]
    fn test_export_parses_back() {
        let snapshot = sample_snapshot();
        let report = build_report(
            &snapshot,
            ReportType::Grades,
            &ReportFilter::default(),
            UnparseableDatePolicy::Include,
        );

        let data = export_csv(&report).unwrap();
        let table = parse_table(std::str::from_utf8(&data).unwrap()).unwrap();

        assert_eq!(table.records.len(), report.rows.len());
        assert_eq!(table.headers, report.columns);
        assert_eq!(table.records[0].get("course_code"), "CS101");
    }

    #[test]
    fn test_filename() {
        let report = build_report(
            &sample_snapshot(),
            ReportType::Enrollment,
            &ReportFilter::default(),
            UnparseableDatePolicy::Include,
        );
        let today = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();

        assert_eq!(
            export_filename(&report, today),
            "enrollment_enrollments_2025-03-09.csv"
        );
    }
}
