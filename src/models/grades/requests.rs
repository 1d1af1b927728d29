use serde::Deserialize;
use ts_rs::TS;

// 成绩查询参数
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct GradeListQuery {
    pub student_id: Option<i64>,
    pub course_id: Option<i64>,
    pub assessment_name: Option<String>,
}

// 成绩创建请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct CreateGradeRequest {
    pub student_id: i64,
    pub course_id: i64,
    pub assessment_name: String,
    pub assessment_type: String,
    pub obtained_marks: f64,
    pub max_marks: f64,
    pub graded_on: Option<chrono::NaiveDate>, // 缺省为当天
    pub remarks: Option<String>,
}
