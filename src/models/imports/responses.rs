use serde::Serialize;
use ts_rs::TS;

use super::entities::{EntityType, ImportStatus, RowOutcome};

/// 单行结果（带源行号）
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/import.ts")]
pub struct ImportRowResult {
    pub line: usize,
    pub outcome: RowOutcome,
}

/// 导入报告
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/import.ts")]
pub struct ImportReport {
    pub batch_id: uuid::Uuid,
    pub entity_type: EntityType,
    pub total: usize,
    pub submitted: usize,
    pub skipped_invalid: usize,
    pub skipped_not_found: usize,
    pub failed_on_submit: usize,
    pub status: ImportStatus,
    pub summary: String,
    pub rows: Vec<ImportRowResult>,
}

impl ImportReport {
    /// 汇总各行结果
    pub fn from_rows(
        batch_id: uuid::Uuid,
        entity_type: EntityType,
        rows: Vec<ImportRowResult>,
    ) -> Self {
        let mut submitted = 0;
        let mut skipped_invalid = 0;
        let mut skipped_not_found = 0;
        let mut failed_on_submit = 0;

        for row in &rows {
            match row.outcome {
                RowOutcome::Created { .. } => submitted += 1,
                RowOutcome::Invalid { .. } => skipped_invalid += 1,
                RowOutcome::NotFound { .. } => skipped_not_found += 1,
                RowOutcome::SubmitFailed { .. } => failed_on_submit += 1,
            }
        }

        let total = rows.len();
        let status = if total == 0 {
            ImportStatus::Empty
        } else if submitted == total {
            ImportStatus::AllSucceeded
        } else if submitted == 0 {
            ImportStatus::AllFailed
        } else {
            ImportStatus::Partial
        };

        let skipped = total - submitted;
        let summary = if skipped == 0 {
            format!("Imported {submitted}")
        } else {
            format!("Imported {submitted}; {skipped} skipped due to errors")
        };

        Self {
            batch_id,
            entity_type,
            total,
            submitted,
            skipped_invalid,
            skipped_not_found,
            failed_on_submit,
            status,
            summary,
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(line: usize, outcome: RowOutcome) -> ImportRowResult {
        ImportRowResult { line, outcome }
    }

    #[test]
    fn test_partial_report_counts() {
        let report = ImportReport::from_rows(
            uuid::Uuid::nil(),
            EntityType::Students,
            vec![
                row(2, RowOutcome::Created { id: 1 }),
                row(3, RowOutcome::Invalid {
                    reasons: vec!["email: invalid format".into()],
                }),
                row(4, RowOutcome::SubmitFailed {
                    error: "duplicate".into(),
                }),
            ],
        );

        assert_eq!(report.total, 3);
        assert_eq!(report.submitted, 1);
        assert_eq!(report.skipped_invalid, 1);
        assert_eq!(report.failed_on_submit, 1);
        assert_eq!(report.status, ImportStatus::Partial);
        assert_eq!(report.summary, "Imported 1; 2 skipped due to errors");
    }

    #[test]
    fn test_status_all_succeeded_and_all_failed() {
        let ok = ImportReport::from_rows(
            uuid::Uuid::nil(),
            EntityType::Courses,
            vec![row(2, RowOutcome::Created { id: 7 })],
        );
        assert_eq!(ok.status, ImportStatus::AllSucceeded);
        assert_eq!(ok.summary, "Imported 1");

        let failed = ImportReport::from_rows(
            uuid::Uuid::nil(),
            EntityType::Courses,
            vec![row(2, RowOutcome::NotFound {
                reason: "unknown".into(),
            })],
        );
        assert_eq!(failed.status, ImportStatus::AllFailed);
        assert_eq!(failed.skipped_not_found, 1);

        let empty = ImportReport::from_rows(uuid::Uuid::nil(), EntityType::Courses, vec![]);
        assert_eq!(empty.status, ImportStatus::Empty);
    }
}
