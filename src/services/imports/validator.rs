//! 字段校验
//!
//! 每种实体一张规则表：必填列 + 格式检查。校验是纯函数，
//! 通过后把原始行转换为强类型的 [`NewRecord`]。

use std::collections::HashMap;

use crate::config::ImportConfig;
use crate::models::{
    courses::{
        entities::{CourseStatus, SEMESTER_MAX, SEMESTER_MIN},
        requests::CreateCourseRequest,
    },
    faculty::{entities::FacultyStatus, requests::CreateFacultyRequest},
    grades::entities::check_marks,
    imports::entities::{EntityType, GradeRowStatus, NewRecord, RawRecord},
    students::{entities::StudentStatus, requests::CreateStudentRequest},
};
use crate::utils::validate::{parse_int, validate_email, validate_int_range};

/// 未提供院系时使用的默认值
pub const DEFAULT_DEPARTMENT: &str = "General";

/// 校验参数（来自导入配置）
#[derive(Debug, Clone, Copy)]
pub struct ValidationRules {
    pub credit_min: i32,
    pub credit_max: i32,
}

impl From<&ImportConfig> for ValidationRules {
    fn from(config: &ImportConfig) -> Self {
        Self {
            credit_min: config.course_credit_min,
            credit_max: config.course_credit_max,
        }
    }
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self::from(&ImportConfig::default())
    }
}

/// 校验结论
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub valid: bool,
    pub reasons: Vec<String>,
}

/// 各实体的必填列
pub fn required_columns(entity: EntityType) -> &'static [&'static str] {
    match entity {
        EntityType::Students => &["full_name", "email", "student_id"],
        EntityType::Faculty => &["full_name", "email", "faculty_id"],
        EntityType::Courses => &["course_code", "course_name", "credits"],
        EntityType::Grades => &["student_id", "obtained_marks"],
        _ => &[],
    }
}

/// 各实体可识别的可选列
pub fn optional_columns(entity: EntityType) -> &'static [&'static str] {
    match entity {
        EntityType::Students => &["status", "account_ref"],
        EntityType::Faculty => &["department", "qualification", "status"],
        EntityType::Courses => &["department", "semester", "status"],
        EntityType::Grades => &["remarks"],
        _ => &[],
    }
}

/// 校验一行，只给出结论
pub fn validate_record(entity: EntityType, record: &RawRecord, rules: &ValidationRules) -> Verdict {
    match to_new_record(entity, record, rules) {
        Ok(_) => Verdict {
            valid: true,
            reasons: Vec::new(),
        },
        Err(reasons) => Verdict {
            valid: false,
            reasons,
        },
    }
}

/// 校验并转换为强类型记录；失败时返回按顺序排列的原因
pub fn to_new_record(
    entity: EntityType,
    record: &RawRecord,
    rules: &ValidationRules,
) -> Result<NewRecord, Vec<String>> {
    if !entity.is_importable() {
        return Err(vec![format!("{entity} cannot be imported")]);
    }

    // 必填列按规则表顺序
    let mut reasons: Vec<String> = required_columns(entity)
        .iter()
        .filter(|col| record.non_empty(col).is_none())
        .map(|col| format!("{col} is required"))
        .collect();

    // 任何带 email 的记录都要检查格式
    if let Some(email) = record.non_empty("email")
        && let Err(msg) = validate_email(email)
    {
        reasons.push(format!("email: {msg}"));
    }

    match entity {
        EntityType::Students => {
            let status = check_status::<StudentStatus>(record, StudentStatus::ALL, &mut reasons);
            finish(reasons, || {
                NewRecord::Student(CreateStudentRequest {
                    full_name: record.get("full_name").to_string(),
                    email: record.get("email").to_string(),
                    student_id: record.get("student_id").to_string(),
                    status,
                    account_ref: record.non_empty("account_ref").map(str::to_string),
                })
            })
        }
        EntityType::Faculty => {
            let status = check_status::<FacultyStatus>(record, FacultyStatus::ALL, &mut reasons);
            finish(reasons, || {
                NewRecord::Faculty(CreateFacultyRequest {
                    full_name: record.get("full_name").to_string(),
                    email: record.get("email").to_string(),
                    faculty_id: record.get("faculty_id").to_string(),
                    department: record
                        .non_empty("department")
                        .unwrap_or(DEFAULT_DEPARTMENT)
                        .to_string(),
                    qualification: record.non_empty("qualification").map(str::to_string),
                    status,
                })
            })
        }
        EntityType::Courses => {
            let credits = record.non_empty("credits").and_then(|raw| {
                check_int(
                    "credits",
                    raw,
                    rules.credit_min,
                    rules.credit_max,
                    &mut reasons,
                )
            });
            let semester = match record.non_empty("semester") {
                Some(raw) => check_int("semester", raw, SEMESTER_MIN, SEMESTER_MAX, &mut reasons),
                None => Some(SEMESTER_MIN),
            };
            let status = check_status::<CourseStatus>(record, CourseStatus::ALL, &mut reasons);
            finish(reasons, || {
                NewRecord::Course(CreateCourseRequest {
                    course_code: record.get("course_code").to_string(),
                    course_name: record.get("course_name").to_string(),
                    credits: credits.unwrap_or_default(),
                    department: record
                        .non_empty("department")
                        .unwrap_or(DEFAULT_DEPARTMENT)
                        .to_string(),
                    semester: semester.unwrap_or(SEMESTER_MIN),
                    faculty_id: None,
                    status,
                })
            })
        }
        _ => Err(reasons),
    }
}

// 原因为空时才构造记录
fn finish(reasons: Vec<String>, build: impl FnOnce() -> NewRecord) -> Result<NewRecord, Vec<String>> {
    if reasons.is_empty() {
        Ok(build())
    } else {
        Err(reasons)
    }
}

fn check_int(field: &str, raw: &str, min: i32, max: i32, reasons: &mut Vec<String>) -> Option<i32> {
    match parse_int(raw).and_then(|v| validate_int_range(v, min, max).map(|_| v)) {
        Ok(v) => Some(v),
        Err(msg) => {
            reasons.push(format!("{field}: {msg}"));
            None
        }
    }
}

fn check_status<S: std::str::FromStr>(
    record: &RawRecord,
    allowed: &[&str],
    reasons: &mut Vec<String>,
) -> Option<S> {
    let raw = record.non_empty("status")?;
    match raw.to_lowercase().parse::<S>() {
        Ok(status) => Some(status),
        Err(_) => {
            reasons.push(format!(
                "status: '{raw}' is not one of {}",
                allowed.join(", ")
            ));
            None
        }
    }
}

/// 成绩导入行分类
///
/// `roster` 为目标课程中已选课学生：学号 → 内部 ID。学号非空但不在名单中时
/// 判为 `NotFound`，即使分数同样越界。
pub fn classify_grade_row(
    record: &RawRecord,
    roster: &HashMap<String, i64>,
    max_marks: f64,
) -> GradeRowStatus {
    let student_key = record.get("student_id");
    if !student_key.is_empty() && !roster.contains_key(student_key) {
        return GradeRowStatus::NotFound;
    }

    let mut reasons: Vec<String> = required_columns(EntityType::Grades)
        .iter()
        .filter(|col| record.non_empty(col).is_none())
        .map(|col| format!("{col} is required"))
        .collect();

    let obtained_marks = record.non_empty("obtained_marks").and_then(|raw| {
        match raw.parse::<f64>() {
            Ok(marks) => match check_marks(marks, max_marks) {
                Ok(()) => Some(marks),
                Err(msg) => {
                    reasons.push(msg);
                    None
                }
            },
            Err(_) => {
                reasons.push(format!("obtained_marks: '{raw}' is not a number"));
                None
            }
        }
    });

    match (roster.get(student_key), obtained_marks) {
        (Some(&student_ref), Some(obtained_marks)) if reasons.is_empty() => {
            GradeRowStatus::Valid {
                student_ref,
                obtained_marks,
            }
        }
        _ => GradeRowStatus::Invalid(reasons),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> RawRecord {
        RawRecord {
            line: 2,
            fields: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    fn course(credits: &str) -> RawRecord {
        record(&[
            ("course_code", "CS101"),
            ("course_name", "Intro"),
            ("credits", credits),
        ])
    }

    #[test]
    fn test_missing_required_fields_named_in_order() {
        let rules = ValidationRules::default();

        for entity in [EntityType::Students, EntityType::Faculty, EntityType::Courses] {
            let verdict = validate_record(entity, &record(&[]), &rules);
            assert!(!verdict.valid);
            let expected: Vec<String> = required_columns(entity)
                .iter()
                .map(|c| format!("{c} is required"))
                .collect();
            assert_eq!(verdict.reasons, expected);
        }
    }

    #[test]
    fn test_credit_bounds() {
        let rules = ValidationRules::default();

        assert!(!validate_record(EntityType::Courses, &course("0"), &rules).valid);
        assert!(!validate_record(EntityType::Courses, &course("11"), &rules).valid);
        assert!(validate_record(EntityType::Courses, &course("1"), &rules).valid);
        assert!(validate_record(EntityType::Courses, &course("10"), &rules).valid);

        let verdict = validate_record(EntityType::Courses, &course("three"), &rules);
        assert_eq!(verdict.reasons.len(), 1);
        assert!(verdict.reasons[0].starts_with("credits:"));
    }

    #[test]
    fn test_bad_email_rejected() {
        let rules = ValidationRules::default();
        let rec = record(&[
            ("full_name", "B"),
            ("email", "bad-email"),
            ("student_id", "S2"),
        ]);

        let verdict = validate_record(EntityType::Students, &rec, &rules);
        assert!(!verdict.valid);
        assert_eq!(verdict.reasons, vec!["email: Email format is invalid"]);
    }

    #[test]
    fn test_required_reasons_precede_format_reasons() {
        let rules = ValidationRules::default();
        let rec = record(&[("email", "nope"), ("faculty_id", "F1")]);

        let verdict = validate_record(EntityType::Faculty, &rec, &rules);
        assert_eq!(verdict.reasons.len(), 2);
        assert_eq!(verdict.reasons[0], "full_name is required");
        assert!(verdict.reasons[1].starts_with("email:"));
    }

    #[test]
    fn test_optional_columns_checked_when_present() {
        let rules = ValidationRules::default();
        let mut rec = course("3");
        rec.fields.insert("semester".into(), "9".into());
        rec.fields.insert("status".into(), "archived".into());

        let verdict = validate_record(EntityType::Courses, &rec, &rules);
        assert_eq!(verdict.reasons.len(), 2);
        assert!(verdict.reasons[0].starts_with("semester:"));
        assert!(verdict.reasons[1].starts_with("status:"));
    }

    #[test]
    fn test_valid_course_defaults() {
        let rules = ValidationRules::default();

        match to_new_record(EntityType::Courses, &course("4"), &rules) {
            Ok(NewRecord::Course(req)) => {
                assert_eq!(req.credits, 4);
                assert_eq!(req.semester, SEMESTER_MIN);
                assert_eq!(req.department, DEFAULT_DEPARTMENT);
                assert!(req.status.is_none());
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_unsupported_entity_rejected() {
        let verdict = validate_record(
            EntityType::Announcements,
            &record(&[("title", "x")]),
            &ValidationRules::default(),
        );
        assert!(!verdict.valid);
    }

    #[test]
    fn test_grade_unknown_student_is_not_found_even_with_bad_marks() {
        let roster: HashMap<String, i64> = [("S1".to_string(), 1)].into_iter().collect();
        let rec = record(&[("student_id", "S9"), ("obtained_marks", "150")]);

        assert_eq!(
            classify_grade_row(&rec, &roster, 100.0),
            GradeRowStatus::NotFound
        );
    }

    #[test]
    fn test_grade_marks_range() {
        let roster: HashMap<String, i64> = [("S1".to_string(), 7)].into_iter().collect();

        let ok = record(&[("student_id", "S1"), ("obtained_marks", "100")]);
        assert_eq!(
            classify_grade_row(&ok, &roster, 100.0),
            GradeRowStatus::Valid {
                student_ref: 7,
                obtained_marks: 100.0
            }
        );

        for bad in ["-1", "100.5", "NaN", "inf", "abc"] {
            let rec = record(&[("student_id", "S1"), ("obtained_marks", bad)]);
            assert!(matches!(
                classify_grade_row(&rec, &roster, 100.0),
                GradeRowStatus::Invalid(_)
            ));
        }
    }

    #[test]
    fn test_grade_missing_student_is_invalid() {
        let roster = HashMap::new();
        let rec = record(&[("student_id", ""), ("obtained_marks", "5")]);

        assert_eq!(
            classify_grade_row(&rec, &roster, 10.0),
            GradeRowStatus::Invalid(vec!["student_id is required".to_string()])
        );
    }
}
