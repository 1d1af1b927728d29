//! 成绩存储操作

use super::SeaOrmStorage;
use crate::entity::grades::{ActiveModel, Column, Entity as Grades};
use crate::errors::{PortalError, Result};
use crate::models::grades::{
    entities::{Grade, letter_grade, percentage},
    requests::{CreateGradeRequest, GradeListQuery},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建成绩记录，百分比与等级在写入时派生
    pub async fn create_grade_impl(&self, req: CreateGradeRequest) -> Result<Grade> {
        let now = chrono::Utc::now();
        let pct = percentage(req.obtained_marks, req.max_marks);
        let graded_on = req.graded_on.unwrap_or_else(|| now.date_naive());

        let model = ActiveModel {
            student_id: Set(req.student_id),
            course_id: Set(req.course_id),
            assessment_name: Set(req.assessment_name),
            assessment_type: Set(req.assessment_type),
            obtained_marks: Set(req.obtained_marks),
            max_marks: Set(req.max_marks),
            percentage: Set(pct),
            letter_grade: Set(letter_grade(pct).to_string()),
            graded_on: Set(graded_on.format("%Y-%m-%d").to_string()),
            remarks: Set(req.remarks),
            created_at: Set(now.timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("创建成绩记录失败: {e}")))?;

        Ok(result.into_grade())
    }

    /// 列出成绩记录
    pub async fn list_grades_impl(&self, query: GradeListQuery) -> Result<Vec<Grade>> {
        let mut select = Grades::find();

        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        if let Some(course_id) = query.course_id {
            select = select.filter(Column::CourseId.eq(course_id));
        }

        if let Some(ref assessment_name) = query.assessment_name {
            select = select.filter(Column::AssessmentName.eq(assessment_name.as_str()));
        }

        let grades = select
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询成绩记录失败: {e}")))?;

        Ok(grades.into_iter().map(|m| m.into_grade()).collect())
    }

    /// 删除成绩记录
    pub async fn delete_grade_impl(&self, id: i64) -> Result<bool> {
        let result = Grades::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("删除成绩记录失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
