//! 报表聚合
//!
//! 在内存快照上按外键关联子记录与父记录，应用日期与院系过滤，
//! 生成扁平的表格行和汇总指标。数据量在几千行以内，线性查找即可。

use crate::models::{
    attendance::entities::{Attendance, AttendanceStatus},
    courses::entities::Course,
    enrollments::entities::{Enrollment, EnrollmentStatus},
    faculty::entities::Faculty,
    grades::entities::Grade,
    reports::{
        entities::{ReportFilter, ReportStatistic, ReportType, UnparseableDatePolicy},
        responses::{Report, ReportSummary},
    },
    students::entities::Student,
};

use super::filters::{date_in_range, department_matches};

const UNKNOWN: &str = "Unknown";

/// 报表所需的只读数据快照
#[derive(Debug, Clone, Default)]
pub struct ReportSnapshot {
    pub students: Vec<Student>,
    pub faculty: Vec<Faculty>,
    pub courses: Vec<Course>,
    pub enrollments: Vec<Enrollment>,
    pub attendance: Vec<Attendance>,
    pub grades: Vec<Grade>,
}

impl ReportSnapshot {
    fn student(&self, id: i64) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    fn course(&self, id: i64) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }
}

// 子记录关联到的学生与课程信息
struct Joined<'a> {
    student_key: &'a str,
    student_name: &'a str,
    course_code: &'a str,
    course_name: &'a str,
    department: &'a str,
}

impl<'a> Joined<'a> {
    fn resolve(snapshot: &'a ReportSnapshot, student_id: i64, course_id: i64) -> Self {
        let student = snapshot.student(student_id);
        let course = snapshot.course(course_id);
        Self {
            student_key: student.map(|s| s.student_id.as_str()).unwrap_or(UNKNOWN),
            student_name: student.map(|s| s.full_name.as_str()).unwrap_or(UNKNOWN),
            course_code: course.map(|c| c.course_code.as_str()).unwrap_or(UNKNOWN),
            course_name: course.map(|c| c.course_name.as_str()).unwrap_or(UNKNOWN),
            department: course.map(|c| c.department.as_str()).unwrap_or(""),
        }
    }
}

/// 保留一位小数
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// 生成报表
pub fn build_report(
    snapshot: &ReportSnapshot,
    report_type: ReportType,
    filter: &ReportFilter,
    policy: UnparseableDatePolicy,
) -> Report {
    let (rows, statistic) = match report_type {
        ReportType::Attendance => attendance_rows(snapshot, filter, policy),
        ReportType::Grades => grade_rows(snapshot, filter, policy),
        ReportType::Enrollment => enrollment_rows(snapshot, filter, policy),
        ReportType::Faculty => faculty_rows(snapshot, filter),
    };

    Report {
        report_type,
        columns: report_type.columns().iter().map(|c| c.to_string()).collect(),
        summary: ReportSummary {
            total_rows: rows.len(),
            statistic,
        },
        rows,
    }
}

fn attendance_rows(
    snapshot: &ReportSnapshot,
    filter: &ReportFilter,
    policy: UnparseableDatePolicy,
) -> (Vec<Vec<String>>, ReportStatistic) {
    let mut rows = Vec::new();
    let mut present = 0;

    for record in &snapshot.attendance {
        let joined = Joined::resolve(snapshot, record.student_id, record.course_id);
        if !department_matches(joined.department, filter)
            || !date_in_range(&record.date, filter, policy)
        {
            continue;
        }

        if record.status == AttendanceStatus::Present {
            present += 1;
        }

        rows.push(vec![
            record.date.clone(),
            joined.student_key.to_string(),
            joined.student_name.to_string(),
            joined.course_code.to_string(),
            joined.course_name.to_string(),
            joined.department.to_string(),
            record.status.to_string(),
        ]);
    }

    let total = rows.len();
    let rate = if total == 0 {
        0.0
    } else {
        round1(present as f64 / total as f64 * 100.0)
    };

    (
        rows,
        ReportStatistic::PresentRate {
            present,
            total,
            rate,
        },
    )
}

fn grade_rows(
    snapshot: &ReportSnapshot,
    filter: &ReportFilter,
    policy: UnparseableDatePolicy,
) -> (Vec<Vec<String>>, ReportStatistic) {
    let mut rows = Vec::new();
    let mut percentage_sum = 0.0;

    for grade in &snapshot.grades {
        let joined = Joined::resolve(snapshot, grade.student_id, grade.course_id);
        if !department_matches(joined.department, filter)
            || !date_in_range(&grade.graded_on, filter, policy)
        {
            continue;
        }

        percentage_sum += grade.percentage;

        rows.push(vec![
            joined.student_key.to_string(),
            joined.student_name.to_string(),
            joined.course_code.to_string(),
            joined.course_name.to_string(),
            joined.department.to_string(),
            grade.assessment_name.clone(),
            grade.assessment_type.clone(),
            grade.obtained_marks.to_string(),
            grade.max_marks.to_string(),
            grade.percentage.to_string(),
            grade.letter_grade.clone(),
            grade.graded_on.clone(),
        ]);
    }

    let mean = if rows.is_empty() {
        None
    } else {
        Some(round1(percentage_sum / rows.len() as f64))
    };

    (rows, ReportStatistic::MeanPercentage { mean })
}

fn enrollment_rows(
    snapshot: &ReportSnapshot,
    filter: &ReportFilter,
    policy: UnparseableDatePolicy,
) -> (Vec<Vec<String>>, ReportStatistic) {
    let mut rows = Vec::new();
    let mut count = 0;

    for enrollment in &snapshot.enrollments {
        let joined = Joined::resolve(snapshot, enrollment.student_id, enrollment.course_id);
        if !department_matches(joined.department, filter)
            || !date_in_range(&enrollment.enrollment_date, filter, policy)
        {
            continue;
        }

        if enrollment.status == EnrollmentStatus::Enrolled {
            count += 1;
        }

        rows.push(vec![
            joined.student_key.to_string(),
            joined.student_name.to_string(),
            joined.course_code.to_string(),
            joined.course_name.to_string(),
            joined.department.to_string(),
            enrollment.status.to_string(),
            enrollment.enrollment_date.clone(),
        ]);
    }

    (rows, ReportStatistic::EnrolledCount { count })
}

// 教师没有相关日期，忽略日期区间
fn faculty_rows(
    snapshot: &ReportSnapshot,
    filter: &ReportFilter,
) -> (Vec<Vec<String>>, ReportStatistic) {
    let mut rows = Vec::new();
    let mut total = 0;

    for member in &snapshot.faculty {
        if !department_matches(&member.department, filter) {
            continue;
        }

        let assigned = snapshot
            .courses
            .iter()
            .filter(|c| c.faculty_id == Some(member.id))
            .count();
        total += assigned;

        rows.push(vec![
            member.faculty_id.clone(),
            member.full_name.clone(),
            member.email.clone(),
            member.department.clone(),
            member.qualification.clone().unwrap_or_default(),
            member.status.to_string(),
            assigned.to_string(),
        ]);
    }

    (rows, ReportStatistic::AssignedCourses { total })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::courses::entities::CourseStatus;
    use crate::models::faculty::entities::FacultyStatus;
    use crate::models::grades::entities::{letter_grade, percentage};
    use crate::models::students::entities::StudentStatus;
    use chrono::{NaiveDate, Utc};

    fn student(id: i64, key: &str, name: &str) -> Student {
        Student {
            id,
            full_name: name.to_string(),
            email: format!("{}@example.edu", key.to_lowercase()),
            student_id: key.to_string(),
            status: StudentStatus::Active,
            account_ref: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn course(id: i64, code: &str, department: &str, faculty_id: Option<i64>) -> Course {
        Course {
            id,
            course_code: code.to_string(),
            course_name: format!("{code} course"),
            credits: 3,
            department: department.to_string(),
            semester: 1,
            faculty_id,
            status: CourseStatus::Active,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn attendance(id: i64, student_id: i64, course_id: i64, date: &str, status: AttendanceStatus) -> Attendance {
        Attendance {
            id,
            student_id,
            course_id,
            date: date.to_string(),
            status,
            remarks: None,
            created_at: Utc::now(),
        }
    }

    fn grade(id: i64, student_id: i64, course_id: i64, obtained: f64, graded_on: &str) -> Grade {
        let pct = percentage(obtained, 100.0);
        Grade {
            id,
            student_id,
            course_id,
            assessment_name: "Final".to_string(),
            assessment_type: "exam".to_string(),
            obtained_marks: obtained,
            max_marks: 100.0,
            percentage: pct,
            letter_grade: letter_grade(pct).to_string(),
            graded_on: graded_on.to_string(),
            remarks: None,
            created_at: Utc::now(),
        }
    }

    fn faculty(id: i64, key: &str, department: &str) -> Faculty {
        Faculty {
            id,
            full_name: format!("Prof {key}"),
            email: format!("{}@example.edu", key.to_lowercase()),
            faculty_id: key.to_string(),
            department: department.to_string(),
            qualification: Some("PhD".to_string()),
            status: FacultyStatus::Active,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    /// 两个院系、跨月的考勤与成绩
    pub(crate) fn sample_snapshot() -> ReportSnapshot {
        use AttendanceStatus::*;

        ReportSnapshot {
            students: vec![student(1, "S1", "Ann"), student(2, "S2", "Bob")],
            faculty: vec![faculty(1, "F1", "Computer Science"), faculty(2, "F2", "Physics")],
            courses: vec![
                course(1, "CS101", "Computer Science", Some(1)),
                course(2, "CS201", "Computer Science", Some(1)),
                course(3, "PH101", "Physics", Some(2)),
            ],
            enrollments: vec![
                Enrollment {
                    id: 1,
                    student_id: 1,
                    course_id: 1,
                    status: EnrollmentStatus::Enrolled,
                    enrollment_date: "2025-01-05".to_string(),
                    created_at: Utc::now(),
                },
                Enrollment {
                    id: 2,
                    student_id: 2,
                    course_id: 1,
                    status: EnrollmentStatus::Dropped,
                    enrollment_date: "2025-01-06".to_string(),
                    created_at: Utc::now(),
                },
                Enrollment {
                    id: 3,
                    student_id: 2,
                    course_id: 3,
                    status: EnrollmentStatus::Enrolled,
                    enrollment_date: "2025-02-01".to_string(),
                    created_at: Utc::now(),
                },
            ],
            attendance: vec![
                attendance(1, 1, 1, "2025-01-10", Present),
                attendance(2, 2, 1, "2025-01-10", Absent),
                attendance(3, 1, 2, "2025-01-20", Present),
                attendance(4, 2, 2, "2025-01-31", Late),
                attendance(5, 1, 1, "2025-02-03", Present),
                attendance(6, 1, 3, "2025-01-15", Present),
                attendance(7, 2, 1, "15/01/2025", Present),
            ],
            grades: vec![
                grade(1, 1, 1, 95.0, "2025-01-25"),
                grade(2, 2, 1, 62.0, "2025-01-25"),
                grade(3, 1, 3, 40.0, "2025-01-25"),
            ],
        }
    }

    fn january_cs() -> ReportFilter {
        ReportFilter {
            from: NaiveDate::from_ymd_opt(2025, 1, 1),
            to: NaiveDate::from_ymd_opt(2025, 1, 31),
            department: Some("Computer Science".to_string()),
        }
    }

    #[test]
    fn test_attendance_department_and_range() {
        let snapshot = sample_snapshot();

        let report = build_report(
            &snapshot,
            ReportType::Attendance,
            &january_cs(),
            UnparseableDatePolicy::Exclude,
        );

        // 2 月记录、物理课记录、无法解析的日期都被排除
        assert_eq!(report.rows.len(), 4);
        for row in &report.rows {
            assert_eq!(row[5], "Computer Science");
            assert!(row[0].as_str() >= "2025-01-01" && row[0].as_str() <= "2025-01-31");
        }
        assert_eq!(
            report.summary.statistic,
            ReportStatistic::PresentRate {
                present: 2,
                total: 4,
                rate: 50.0
            }
        );
        assert_eq!(report.summary.total_rows, 4);
    }

    #[test]
    fn test_attendance_fail_open_keeps_unparseable_dates() {
        let snapshot = sample_snapshot();

        let report = build_report(
            &snapshot,
            ReportType::Attendance,
            &january_cs(),
            UnparseableDatePolicy::Include,
        );

        assert_eq!(report.rows.len(), 5);
        assert!(report.rows.iter().any(|row| row[0] == "15/01/2025"));
        // 3 / 5 = 60.0
        assert_eq!(
            report.summary.statistic,
            ReportStatistic::PresentRate {
                present: 3,
                total: 5,
                rate: 60.0
            }
        );
    }

    #[test]
    fn test_present_rate_rounded_to_one_decimal() {
        let mut snapshot = sample_snapshot();
        snapshot.attendance = vec![
            attendance(1, 1, 1, "2025-01-10", AttendanceStatus::Present),
            attendance(2, 2, 1, "2025-01-11", AttendanceStatus::Absent),
            attendance(3, 1, 1, "2025-01-12", AttendanceStatus::Late),
        ];

        let report = build_report(
            &snapshot,
            ReportType::Attendance,
            &ReportFilter::default(),
            UnparseableDatePolicy::Include,
        );

        assert_eq!(
            report.summary.statistic,
            ReportStatistic::PresentRate {
                present: 1,
                total: 3,
                rate: 33.3
            }
        );
    }

    #[test]
    fn test_empty_attendance_rate_is_zero() {
        let report = build_report(
            &ReportSnapshot::default(),
            ReportType::Attendance,
            &ReportFilter::default(),
            UnparseableDatePolicy::Include,
        );

        assert!(report.rows.is_empty());
        assert_eq!(
            report.summary.statistic,
            ReportStatistic::PresentRate {
                present: 0,
                total: 0,
                rate: 0.0
            }
        );
    }

    #[test]
    fn test_grades_mean_percentage() {
        let snapshot = sample_snapshot();

        let all = build_report(
            &snapshot,
            ReportType::Grades,
            &ReportFilter::default(),
            UnparseableDatePolicy::Include,
        );
        // (95 + 62 + 40) / 3 = 65.666...
        assert_eq!(
            all.summary.statistic,
            ReportStatistic::MeanPercentage { mean: Some(65.7) }
        );

        let cs = build_report(
            &snapshot,
            ReportType::Grades,
            &january_cs(),
            UnparseableDatePolicy::Include,
        );
        assert_eq!(cs.rows.len(), 2);
        assert_eq!(
            cs.summary.statistic,
            ReportStatistic::MeanPercentage { mean: Some(78.5) }
        );
        assert_eq!(cs.rows[0][10], "A+");
    }

    #[test]
    fn test_enrollment_counts_enrolled_only() {
        let snapshot = sample_snapshot();

        let report = build_report(
            &snapshot,
            ReportType::Enrollment,
            &ReportFilter::default(),
            UnparseableDatePolicy::Include,
        );

        assert_eq!(report.rows.len(), 3);
        assert_eq!(
            report.summary.statistic,
            ReportStatistic::EnrolledCount { count: 2 }
        );

        let january = build_report(
            &snapshot,
            ReportType::Enrollment,
            &ReportFilter {
                to: NaiveDate::from_ymd_opt(2025, 1, 31),
                ..Default::default()
            },
            UnparseableDatePolicy::Include,
        );
        assert_eq!(january.rows.len(), 2);
        assert_eq!(
            january.summary.statistic,
            ReportStatistic::EnrolledCount { count: 1 }
        );
    }

    #[test]
    fn test_faculty_assigned_courses_ignores_dates() {
        let snapshot = sample_snapshot();

        let report = build_report(
            &snapshot,
            ReportType::Faculty,
            &ReportFilter {
                from: NaiveDate::from_ymd_opt(2030, 1, 1),
                to: None,
                department: Some("all".to_string()),
            },
            UnparseableDatePolicy::Exclude,
        );

        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[0][6], "2");
        assert_eq!(
            report.summary.statistic,
            ReportStatistic::AssignedCourses { total: 3 }
        );

        let physics = build_report(
            &snapshot,
            ReportType::Faculty,
            &ReportFilter {
                department: Some("Physics".to_string()),
                ..Default::default()
            },
            UnparseableDatePolicy::Include,
        );
        assert_eq!(physics.rows.len(), 1);
        assert_eq!(
            physics.summary.statistic,
            ReportStatistic::AssignedCourses { total: 1 }
        );
    }

    #[test]
    fn test_rows_match_column_count() {
        let snapshot = sample_snapshot();
        for report_type in [
            ReportType::Attendance,
            ReportType::Grades,
            ReportType::Enrollment,
            ReportType::Faculty,
        ] {
            let report = build_report(
                &snapshot,
                report_type,
                &ReportFilter::default(),
                UnparseableDatePolicy::Include,
            );
            assert!(!report.rows.is_empty());
            for row in &report.rows {
                assert_eq!(row.len(), report.columns.len());
            }
        }
    }
}
