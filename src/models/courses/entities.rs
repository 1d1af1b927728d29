use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 学期取值范围
pub const SEMESTER_MIN: i32 = 1;
pub const SEMESTER_MAX: i32 = 8;

// 课程状态
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub enum CourseStatus {
    Active,
    Inactive,
}

impl CourseStatus {
    pub const ALL: &'static [&'static str] = &["active", "inactive"];
}

impl std::fmt::Display for CourseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CourseStatus::Active => write!(f, "active"),
            CourseStatus::Inactive => write!(f, "inactive"),
        }
    }
}

impl std::str::FromStr for CourseStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(CourseStatus::Active),
            "inactive" => Ok(CourseStatus::Inactive),
            _ => Err(format!("Invalid course status: {s}")),
        }
    }
}

// 课程实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct Course {
    pub id: i64,
    pub course_code: String, // 课程代码（业务主键）
    pub course_name: String,
    pub credits: i32,
    pub department: String,
    pub semester: i32,
    pub faculty_id: Option<i64>, // 授课教师
    pub status: CourseStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
