use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 教师状态
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/faculty.ts")]
pub enum FacultyStatus {
    Active,   // 在职
    Inactive, // 离职
    OnLeave,  // 休假
}

impl FacultyStatus {
    pub const ALL: &'static [&'static str] = &["active", "inactive", "on_leave"];
}

impl std::fmt::Display for FacultyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FacultyStatus::Active => write!(f, "active"),
            FacultyStatus::Inactive => write!(f, "inactive"),
            FacultyStatus::OnLeave => write!(f, "on_leave"),
        }
    }
}

impl std::str::FromStr for FacultyStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(FacultyStatus::Active),
            "inactive" => Ok(FacultyStatus::Inactive),
            "on_leave" => Ok(FacultyStatus::OnLeave),
            _ => Err(format!("Invalid faculty status: {s}")),
        }
    }
}

// 教师实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/faculty.ts")]
pub struct Faculty {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub faculty_id: String, // 工号（业务主键）
    pub department: String,
    pub qualification: Option<String>,
    pub status: FacultyStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
