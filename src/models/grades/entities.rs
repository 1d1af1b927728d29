use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 成绩记录
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct Grade {
    pub id: i64,
    pub student_id: i64,
    pub course_id: i64,
    pub assessment_name: String,
    pub assessment_type: String, // quiz / midterm / final / assignment ...
    pub obtained_marks: f64,
    pub max_marks: f64,
    pub percentage: f64,
    pub letter_grade: String,
    pub graded_on: String, // YYYY-MM-DD，按存储原样返回
    pub remarks: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// 得分百分比，保留两位小数
///
/// `max_marks` 必须为正数，调用方负责校验。
pub fn percentage(obtained_marks: f64, max_marks: f64) -> f64 {
    (obtained_marks / max_marks * 100.0 * 100.0).round() / 100.0
}

/// 百分比换算等级
pub fn letter_grade(percentage: f64) -> &'static str {
    if percentage >= 90.0 {
        "A+"
    } else if percentage >= 80.0 {
        "A"
    } else if percentage >= 70.0 {
        "B+"
    } else if percentage >= 60.0 {
        "B"
    } else if percentage >= 50.0 {
        "C"
    } else if percentage >= 40.0 {
        "D"
    } else {
        "F"
    }
}

/// 检查分数是否落在 [0, max_marks]
pub fn check_marks(obtained_marks: f64, max_marks: f64) -> Result<(), String> {
    if !max_marks.is_finite() || max_marks <= 0.0 {
        return Err(format!("max_marks must be a positive number, got {max_marks}"));
    }
    if !obtained_marks.is_finite() || obtained_marks < 0.0 || obtained_marks > max_marks {
        return Err(format!(
            "obtained_marks must be between 0 and {max_marks}, got {obtained_marks}"
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_rounding() {
        assert_eq!(percentage(45.0, 50.0), 90.0);
        assert_eq!(percentage(1.0, 3.0), 33.33);
    }

    #[test]
    fn test_letter_grade_boundaries() {
        assert_eq!(letter_grade(90.0), "A+");
        assert_eq!(letter_grade(89.99), "A");
        assert_eq!(letter_grade(60.0), "B");
        assert_eq!(letter_grade(39.9), "F");
    }

    #[test]
    fn test_check_marks() {
        assert!(check_marks(0.0, 100.0).is_ok());
        assert!(check_marks(100.0, 100.0).is_ok());
        assert!(check_marks(100.5, 100.0).is_err());
        assert!(check_marks(-1.0, 100.0).is_err());
        assert!(check_marks(f64::NAN, 100.0).is_err());
        assert!(check_marks(10.0, 0.0).is_err());
    }
}
