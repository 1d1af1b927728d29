//! 导入编排
//!
//! 先整体校验再逐行提交：校验失败的行跳过并记录原因，
//! 单行提交失败只记日志，不影响后续行。

use std::collections::HashMap;

use tracing::{error, info, warn};
use uuid::Uuid;

use super::parser::ParsedTable;
use super::validator::{ValidationRules, classify_grade_row, to_new_record};
use crate::models::grades::requests::CreateGradeRequest;
use crate::models::imports::{
    entities::{EntityType, GradeRowStatus, NewRecord, RowOutcome},
    requests::GradeImportParams,
    responses::{ImportReport, ImportRowResult},
};
use crate::storage::RecordWriter;

/// 按输入顺序逐条提交
async fn submit_all<W>(
    writer: &W,
    batch_id: Uuid,
    pending: Vec<(usize, Result<NewRecord, RowOutcome>)>,
) -> Vec<ImportRowResult>
where
    W: RecordWriter + ?Sized,
{
    let mut rows = Vec::with_capacity(pending.len());

    for (line, item) in pending {
        let outcome = match item {
            Err(skipped) => skipped,
            Ok(record) => {
                let entity = record.entity_type();
                match writer.create_record(record).await {
                    Ok(id) => RowOutcome::Created { id },
                    Err(e) => {
                        error!(batch_id = %batch_id, entity = %entity, line, "Row submission failed: {}", e);
                        RowOutcome::SubmitFailed {
                            error: e.to_string(),
                        }
                    }
                }
            }
        };
        rows.push(ImportRowResult { line, outcome });
    }

    rows
}

fn finish_batch(batch_id: Uuid, entity: EntityType, rows: Vec<ImportRowResult>) -> ImportReport {
    let report = ImportReport::from_rows(batch_id, entity, rows);
    info!(
        batch_id = %batch_id,
        entity = %entity,
        total = report.total,
        submitted = report.submitted,
        skipped_invalid = report.skipped_invalid,
        skipped_not_found = report.skipped_not_found,
        failed_on_submit = report.failed_on_submit,
        "Import batch finished: {}",
        report.summary
    );
    report
}

/// 运行一次实体导入
pub async fn run_import<W>(
    writer: &W,
    entity: EntityType,
    table: &ParsedTable,
    rules: &ValidationRules,
) -> ImportReport
where
    W: RecordWriter + ?Sized,
{
    let batch_id = Uuid::new_v4();
    info!(
        batch_id = %batch_id,
        entity = %entity,
        rows = table.records.len(),
        "Import batch started"
    );

    // 先完成全部校验，不因单行失败提前结束
    let pending: Vec<(usize, Result<NewRecord, RowOutcome>)> = table
        .records
        .iter()
        .map(|record| {
            let item = to_new_record(entity, record, rules).map_err(|reasons| {
                warn!(batch_id = %batch_id, line = record.line, "Row skipped: {}", reasons.join("; "));
                RowOutcome::Invalid { reasons }
            });
            (record.line, item)
        })
        .collect();

    let rows = submit_all(writer, batch_id, pending).await;
    finish_batch(batch_id, entity, rows)
}

/// 运行一次成绩导入
///
/// `roster` 为目标课程已选课学生（学号 → 内部 ID）。
pub async fn run_grade_import<W>(
    writer: &W,
    course_id: i64,
    params: &GradeImportParams,
    roster: &HashMap<String, i64>,
    table: &ParsedTable,
) -> ImportReport
where
    W: RecordWriter + ?Sized,
{
    let batch_id = Uuid::new_v4();
    info!(
        batch_id = %batch_id,
        course_id,
        assessment = %params.assessment_name,
        rows = table.records.len(),
        "Grade import batch started"
    );

    let pending: Vec<(usize, Result<NewRecord, RowOutcome>)> = table
        .records
        .iter()
        .map(|record| {
            let item = match classify_grade_row(record, roster, params.max_marks) {
                GradeRowStatus::Valid {
                    student_ref,
                    obtained_marks,
                } => Ok(NewRecord::Grade(CreateGradeRequest {
                    student_id: student_ref,
                    course_id,
                    assessment_name: params.assessment_name.clone(),
                    assessment_type: params.assessment_type.clone(),
                    obtained_marks,
                    max_marks: params.max_marks,
                    graded_on: params.graded_on,
                    remarks: record.non_empty("remarks").map(str::to_string),
                })),
                GradeRowStatus::Invalid(reasons) => Err(RowOutcome::Invalid { reasons }),
                GradeRowStatus::NotFound => Err(RowOutcome::NotFound {
                    reason: format!(
                        "student_id '{}' is not enrolled in this course",
                        record.get("student_id")
                    ),
                }),
            };
            (record.line, item)
        })
        .collect();

    let rows = submit_all(writer, batch_id, pending).await;
    finish_batch(batch_id, EntityType::Grades, rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{PortalError, Result};
    use crate::models::imports::entities::ImportStatus;
    use crate::services::imports::parser::parse_table;
    use std::sync::Mutex;

    /// 记录提交顺序的假写入器，可指定失败的键
    #[derive(Default)]
    struct FakeWriter {
        submitted: Mutex<Vec<String>>,
        reject: Vec<String>,
    }

    fn key(record: &NewRecord) -> String {
        match record {
            NewRecord::Student(r) => r.student_id.clone(),
            NewRecord::Faculty(r) => r.faculty_id.clone(),
            NewRecord::Course(r) => r.course_code.clone(),
            NewRecord::Grade(r) => r.student_id.to_string(),
        }
    }

    #[async_trait::async_trait]
    impl RecordWriter for FakeWriter {
        async fn create_record(&self, record: NewRecord) -> Result<i64> {
            let key = key(&record);
            if self.reject.contains(&key) {
                return Err(PortalError::database_operation("UNIQUE constraint failed"));
            }
            let mut submitted = self.submitted.lock().unwrap();
            submitted.push(key);
            Ok(submitted.len() as i64)
        }
    }

    #[tokio::test]
    async fn test_student_scenario_submits_one() {
        let table = parse_table(
            "full_name,email,student_id\nA,a@x.com,S1\nB,bad-email,S2\n,c@x.com,S3",
        )
        .unwrap();
        let writer = FakeWriter::default();

        let report = run_import(
            &writer,
            EntityType::Students,
            &table,
            &ValidationRules::default(),
        )
        .await;

        assert_eq!(*writer.submitted.lock().unwrap(), vec!["S1"]);
        assert_eq!(report.submitted, 1);
        assert_eq!(report.skipped_invalid, 2);
        assert_eq!(report.submitted + report.skipped_invalid, 3);
        assert_eq!(report.status, ImportStatus::Partial);
        assert_eq!(report.summary, "Imported 1; 2 skipped due to errors");

        match &report.rows[1].outcome {
            RowOutcome::Invalid { reasons } => assert!(reasons[0].starts_with("email")),
            other => panic!("unexpected: {other:?}"),
        }
        match &report.rows[2].outcome {
            RowOutcome::Invalid { reasons } => assert_eq!(reasons, &["full_name is required"]),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_submission_order_follows_input() {
        let table = parse_table(
            "course_code,course_name,credits\nC3,Three,3\nC0,Zero,0\nC1,One,1\nC2,Two,2\n",
        )
        .unwrap();
        let writer = FakeWriter::default();

        let report = run_import(
            &writer,
            EntityType::Courses,
            &table,
            &ValidationRules::default(),
        )
        .await;

        assert_eq!(*writer.submitted.lock().unwrap(), vec!["C3", "C1", "C2"]);
        assert_eq!(report.submitted + report.skipped_invalid, 4);
        let lines: Vec<usize> = report.rows.iter().map(|r| r.line).collect();
        assert_eq!(lines, vec![2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn test_submission_failure_does_not_stop_batch() {
        let table = parse_table(
            "full_name,email,faculty_id\nA,a@x.com,F1\nB,b@x.com,F2\nC,c@x.com,F3\n",
        )
        .unwrap();
        let writer = FakeWriter {
            reject: vec!["F2".to_string()],
            ..Default::default()
        };

        let report = run_import(
            &writer,
            EntityType::Faculty,
            &table,
            &ValidationRules::default(),
        )
        .await;

        assert_eq!(*writer.submitted.lock().unwrap(), vec!["F1", "F3"]);
        assert_eq!(report.submitted, 2);
        assert_eq!(report.failed_on_submit, 1);
        assert_eq!(report.skipped_invalid, 0);
        assert!(matches!(
            report.rows[1].outcome,
            RowOutcome::SubmitFailed { .. }
        ));
    }

    #[tokio::test]
    async fn test_all_rows_rejected_is_all_failed() {
        let table = parse_table("full_name,email,student_id\n,,\n").unwrap();
        let writer = FakeWriter::default();

        let report = run_import(
            &writer,
            EntityType::Students,
            &table,
            &ValidationRules::default(),
        )
        .await;

        assert!(writer.submitted.lock().unwrap().is_empty());
        assert_eq!(report.status, ImportStatus::AllFailed);
    }

    #[tokio::test]
    async fn test_grade_import_classifies_rows() {
        let table = parse_table(
            "student_id,obtained_marks,remarks\nS1,45,good\nS9,500,\nS2,-3,\nS2,30,\n",
        )
        .unwrap();
        let roster: HashMap<String, i64> = [("S1".to_string(), 11), ("S2".to_string(), 12)]
            .into_iter()
            .collect();
        let params = GradeImportParams {
            assessment_name: "Midterm".into(),
            assessment_type: "exam".into(),
            max_marks: 50.0,
            graded_on: None,
        };
        let writer = FakeWriter::default();

        let report = run_grade_import(&writer, 3, &params, &roster, &table).await;

        assert_eq!(*writer.submitted.lock().unwrap(), vec!["11", "12"]);
        assert_eq!(report.entity_type, EntityType::Grades);
        assert_eq!(report.submitted, 2);
        assert_eq!(report.skipped_not_found, 1);
        assert_eq!(report.skipped_invalid, 1);
        assert!(matches!(report.rows[1].outcome, RowOutcome::NotFound { .. }));
        assert!(matches!(report.rows[2].outcome, RowOutcome::Invalid { .. }));
    }
}
