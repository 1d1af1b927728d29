use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use ts_rs::TS;

use crate::models::{
    courses::requests::CreateCourseRequest, faculty::requests::CreateFacultyRequest,
    grades::requests::CreateGradeRequest, students::requests::CreateStudentRequest,
};

// 实体类型
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/import.ts")]
pub enum EntityType {
    Students,
    Faculty,
    Courses,
    Enrollments,
    Attendance,
    Grades,
    Announcements,
    Feedback,
}

impl EntityType {
    /// 支持 CSV 批量导入的实体（成绩走单独的导入入口）
    pub fn is_importable(&self) -> bool {
        matches!(
            self,
            EntityType::Students | EntityType::Faculty | EntityType::Courses
        )
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            EntityType::Students => "students",
            EntityType::Faculty => "faculty",
            EntityType::Courses => "courses",
            EntityType::Enrollments => "enrollments",
            EntityType::Attendance => "attendance",
            EntityType::Grades => "grades",
            EntityType::Announcements => "announcements",
            EntityType::Feedback => "feedback",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for EntityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "students" => Ok(EntityType::Students),
            "faculty" => Ok(EntityType::Faculty),
            "courses" => Ok(EntityType::Courses),
            "enrollments" => Ok(EntityType::Enrollments),
            "attendance" => Ok(EntityType::Attendance),
            "grades" => Ok(EntityType::Grades),
            "announcements" => Ok(EntityType::Announcements),
            "feedback" => Ok(EntityType::Feedback),
            _ => Err(format!(
                "Invalid entity type: '{s}'. Supported: students, faculty, courses, enrollments, attendance, grades, announcements, feedback"
            )),
        }
    }
}

/// 解析后的一行原始数据（列名 → 值）
///
/// 只存在于解析与校验之间，校验通过后转换为 [`NewRecord`]。
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    pub line: usize, // 源文件行号，从 1 开始
    pub fields: HashMap<String, String>,
}

impl RawRecord {
    /// 取字段值，缺列视为空串
    pub fn get(&self, column: &str) -> &str {
        self.fields.get(column).map(String::as_str).unwrap_or("")
    }

    /// 取非空字段值
    pub fn non_empty(&self, column: &str) -> Option<&str> {
        Some(self.get(column)).filter(|v| !v.is_empty())
    }
}

/// 待写入的强类型记录
#[derive(Debug, Clone)]
pub enum NewRecord {
    Student(CreateStudentRequest),
    Faculty(CreateFacultyRequest),
    Course(CreateCourseRequest),
    Grade(CreateGradeRequest),
}

impl NewRecord {
    pub fn entity_type(&self) -> EntityType {
        match self {
            NewRecord::Student(_) => EntityType::Students,
            NewRecord::Faculty(_) => EntityType::Faculty,
            NewRecord::Course(_) => EntityType::Courses,
            NewRecord::Grade(_) => EntityType::Grades,
        }
    }
}

/// 单行处理结果
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/import.ts")]
pub enum RowOutcome {
    Created { id: i64 },
    Invalid { reasons: Vec<String> },
    NotFound { reason: String },
    SubmitFailed { error: String },
}

/// 批次整体结果
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/import.ts")]
pub enum ImportStatus {
    AllSucceeded,
    Partial,
    AllFailed,
    Empty,
}

/// 成绩导入行分类
#[derive(Debug, Clone, PartialEq)]
pub enum GradeRowStatus {
    Valid { student_ref: i64, obtained_marks: f64 },
    Invalid(Vec<String>),
    NotFound,
}
