use serde::Deserialize;
use ts_rs::TS;

// 成绩导入参数（查询字符串）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/import.ts")]
pub struct GradeImportParams {
    pub assessment_name: String,
    pub assessment_type: String,
    pub max_marks: f64,
    pub graded_on: Option<chrono::NaiveDate>,
}
