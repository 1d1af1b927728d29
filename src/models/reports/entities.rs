use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::imports::entities::EntityType;

// 报表类型
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub enum ReportType {
    Attendance,
    Grades,
    Enrollment,
    Faculty,
}

impl ReportType {
    /// 报表行所来自的实体
    pub fn source_entity(&self) -> EntityType {
        match self {
            ReportType::Attendance => EntityType::Attendance,
            ReportType::Grades => EntityType::Grades,
            ReportType::Enrollment => EntityType::Enrollments,
            ReportType::Faculty => EntityType::Faculty,
        }
    }

    /// 导出表头
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            ReportType::Attendance => &[
                "date",
                "student_id",
                "student_name",
                "course_code",
                "course_name",
                "department",
                "status",
            ],
            ReportType::Grades => &[
                "student_id",
                "student_name",
                "course_code",
                "course_name",
                "department",
                "assessment_name",
                "assessment_type",
                "obtained_marks",
                "max_marks",
                "percentage",
                "letter_grade",
                "graded_on",
            ],
            ReportType::Enrollment => &[
                "student_id",
                "student_name",
                "course_code",
                "course_name",
                "department",
                "status",
                "enrollment_date",
            ],
            ReportType::Faculty => &[
                "faculty_id",
                "full_name",
                "email",
                "department",
                "qualification",
                "status",
                "assigned_courses",
            ],
        }
    }
}

impl std::fmt::Display for ReportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportType::Attendance => write!(f, "attendance"),
            ReportType::Grades => write!(f, "grades"),
            ReportType::Enrollment => write!(f, "enrollment"),
            ReportType::Faculty => write!(f, "faculty"),
        }
    }
}

impl std::str::FromStr for ReportType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "attendance" => Ok(ReportType::Attendance),
            "grades" => Ok(ReportType::Grades),
            "enrollment" => Ok(ReportType::Enrollment),
            "faculty" => Ok(ReportType::Faculty),
            _ => Err(format!(
                "Invalid report type: '{s}'. Supported: attendance, grades, enrollment, faculty"
            )),
        }
    }
}

/// 记录日期无法解析时的过滤策略
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub enum UnparseableDatePolicy {
    /// 视为通过（fail-open）
    #[default]
    Include,
    /// 视为不通过（fail-closed）
    Exclude,
}

/// 报表过滤条件
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportFilter {
    pub from: Option<chrono::NaiveDate>,
    pub to: Option<chrono::NaiveDate>,
    pub department: Option<String>, // None 或 "all" 表示不过滤
}

/// 汇总指标
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub enum ReportStatistic {
    PresentRate {
        present: usize,
        total: usize,
        rate: f64,
    },
    MeanPercentage {
        mean: Option<f64>,
    },
    EnrolledCount {
        count: usize,
    },
    AssignedCourses {
        total: usize,
    },
}
